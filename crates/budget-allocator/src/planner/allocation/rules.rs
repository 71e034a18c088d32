use super::super::domain::{AgeGroup, AllocationCategory, AllocationItem, Allocations, LivingSituation};

/// Working percentages. Signed so the rebalance step can see a deficit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Shares {
    pub necessities: i16,
    pub savings: i16,
    pub investments: i16,
    pub entertainment: i16,
    pub personal: i16,
}

pub(crate) const BASELINE: Shares = Shares {
    necessities: 50,
    savings: 20,
    investments: 15,
    entertainment: 10,
    personal: 5,
};

impl Shares {
    pub(crate) fn total(&self) -> i16 {
        self.necessities + self.savings + self.investments + self.entertainment + self.personal
    }

    pub(crate) fn into_allocations(self) -> Allocations {
        let clamp = |value: i16| value.clamp(0, 100) as u8;
        Allocations {
            necessities: AllocationItem::new(AllocationCategory::Necessities, clamp(self.necessities)),
            savings: AllocationItem::new(AllocationCategory::Savings, clamp(self.savings)),
            investments: AllocationItem::new(AllocationCategory::Investments, clamp(self.investments)),
            entertainment: AllocationItem::new(
                AllocationCategory::Entertainment,
                clamp(self.entertainment),
            ),
            personal: AllocationItem::new(AllocationCategory::Personal, clamp(self.personal)),
        }
    }
}

pub(crate) type Adjustment = fn(&mut Shares);

/// Cost-of-living band a multiplier falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CostTier {
    VeryExpensive,
    Expensive,
    Typical,
    Affordable,
    VeryAffordable,
}

impl CostTier {
    pub(crate) fn from_multiplier(multiplier: f64) -> Self {
        if multiplier > 1.3 {
            CostTier::VeryExpensive
        } else if multiplier > 1.1 {
            CostTier::Expensive
        } else if multiplier < 0.8 {
            CostTier::VeryAffordable
        } else if multiplier < 0.9 {
            CostTier::Affordable
        } else {
            CostTier::Typical
        }
    }
}

pub(crate) fn city_rule(tier: CostTier) -> Adjustment {
    match tier {
        CostTier::VeryExpensive => very_expensive_city,
        CostTier::Expensive => expensive_city,
        CostTier::Typical => unchanged,
        CostTier::Affordable => affordable_city,
        CostTier::VeryAffordable => very_affordable_city,
    }
}

pub(crate) fn age_rule(age: AgeGroup) -> Adjustment {
    match age {
        AgeGroup::EighteenToTwentyFive => early_twenties,
        AgeGroup::TwentySixToThirtyFive => early_career,
        AgeGroup::ThirtySixToFortyFive => mid_career,
        AgeGroup::FortySixToFiftyFive => late_career,
        AgeGroup::FiftySixPlus => near_retirement,
    }
}

pub(crate) fn living_rule(situation: LivingSituation) -> Adjustment {
    match situation {
        LivingSituation::Student => student_household,
        LivingSituation::Single | LivingSituation::Couple => unchanged,
        LivingSituation::Family => family_household,
        LivingSituation::Retiree => retiree_household,
    }
}

/// Folds any remainder into necessities so the split totals 100.
pub(crate) fn rebalance(shares: &mut Shares) {
    let total = shares.total();
    if total != 100 {
        shares.necessities += 100 - total;
        shares.necessities = shares.necessities.max(0);
    }
}

fn unchanged(_shares: &mut Shares) {}

fn very_expensive_city(s: &mut Shares) {
    s.necessities += 10;
    s.investments = (s.investments - 5).max(5);
    s.entertainment = (s.entertainment - 3).max(3);
    s.personal = (s.personal - 2).max(2);
}

fn expensive_city(s: &mut Shares) {
    s.necessities += 5;
    s.investments = (s.investments - 3).max(5);
    s.entertainment = (s.entertainment - 2).max(5);
}

fn affordable_city(s: &mut Shares) {
    s.necessities = (s.necessities - 5).max(40);
    s.investments += 3;
    s.savings += 2;
}

fn very_affordable_city(s: &mut Shares) {
    s.necessities = (s.necessities - 10).max(35);
    s.investments += 7;
    s.savings += 3;
}

fn early_twenties(s: &mut Shares) {
    s.investments = (s.investments - 5).max(5);
    s.entertainment = 15;
    s.personal = 10;
}

fn early_career(s: &mut Shares) {
    s.investments += 5;
    s.savings = (s.savings - 5).max(10);
    s.entertainment = s.entertainment.max(8);
}

fn mid_career(s: &mut Shares) {
    s.investments += 10;
    s.savings = (s.savings - 5).max(10);
    s.entertainment = (s.entertainment - 2).max(6);
    s.personal = (s.personal - 3).max(2);
}

fn late_career(s: &mut Shares) {
    s.investments += 15;
    s.savings = (s.savings - 8).max(8);
    s.entertainment = (s.entertainment - 4).max(5);
    s.personal = (s.personal - 3).max(2);
}

fn near_retirement(s: &mut Shares) {
    s.necessities = 55;
    s.investments += 5;
    s.savings = (s.savings - 5).max(10);
    s.entertainment = (s.entertainment - 2).max(5);
    s.personal = (s.personal - 3).max(2);
}

fn student_household(s: &mut Shares) {
    s.necessities = (s.necessities - 5).max(40);
    s.entertainment = 20;
    s.personal = 10;
    s.investments = (s.investments - 10).max(5);
}

fn family_household(s: &mut Shares) {
    s.necessities = 60;
    s.entertainment = (s.entertainment - 5).max(3);
    s.savings = (s.savings - 5).max(10);
    s.investments = s.investments.max(10);
    s.personal = s.personal.max(3);
}

fn retiree_household(s: &mut Shares) {
    s.necessities = 70;
    s.entertainment = 15;
    s.savings = (s.savings - 10).max(5);
    s.investments = (s.investments - 12).max(3);
    s.personal = (s.personal - 3).max(2);
}
