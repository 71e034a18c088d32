mod rules;

use super::domain::{AgeGroup, Allocations, LivingSituation};
use super::reference::city_multiplier;
use rules::{age_rule, city_rule, living_rule, rebalance, CostTier, BASELINE};
use tracing::debug;

/// Derives the five-way percentage split for a household.
///
/// Adjustments run in a fixed order (city tier, then age bracket, then living
/// situation), each one reading the result of the previous stage. A `None` age
/// or living situation skips that stage, and a missing or unknown city uses a
/// multiplier of 1.0. The function is total: every input yields a split that
/// sums to 100 with no negative share.
pub fn compute_allocation(
    age: Option<AgeGroup>,
    living_situation: Option<LivingSituation>,
    city_key: Option<&str>,
) -> Allocations {
    let multiplier = city_multiplier(city_key);
    let tier = CostTier::from_multiplier(multiplier);

    let mut shares = BASELINE;
    city_rule(tier)(&mut shares);
    if let Some(age) = age {
        age_rule(age)(&mut shares);
    }
    if let Some(situation) = living_situation {
        living_rule(situation)(&mut shares);
    }
    rebalance(&mut shares);

    debug!(
        ?age,
        ?living_situation,
        city = city_key.unwrap_or("-"),
        multiplier,
        ?tier,
        ?shares,
        "computed allocation"
    );

    shares.into_allocations()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::domain::AllocationCategory;

    fn split(allocations: &Allocations) -> [u8; 5] {
        AllocationCategory::ALL.map(|category| allocations.get(category).percentage)
    }

    #[test]
    fn baseline_without_any_inputs() {
        let allocations = compute_allocation(None, None, None);
        assert_eq!(split(&allocations), [50, 20, 15, 10, 5]);
        assert_eq!(allocations.necessities.name, "Essential Expenses");
        assert_eq!(allocations.savings.emoji, "🛡️");
    }

    #[test]
    fn young_single_in_typical_city() {
        let allocations = compute_allocation(
            Some(AgeGroup::EighteenToTwentyFive),
            Some(LivingSituation::Single),
            Some("berlin"),
        );
        // investments 10, entertainment 15, personal 10, savings 20 -> necessities 45
        assert_eq!(split(&allocations), [45, 20, 10, 15, 10]);
    }

    #[test]
    fn family_in_very_expensive_city() {
        let allocations = compute_allocation(
            Some(AgeGroup::ThirtySixToFortyFive),
            Some(LivingSituation::Family),
            Some("san-francisco"),
        );
        // city: inv 10, ent 7, pers 3; age: inv 20, sav 15, ent 6, pers 2;
        // family: nec 60, ent 3, sav 10, inv 20, pers 3 -> total 96, nec 64
        assert_eq!(split(&allocations), [64, 10, 20, 3, 3]);
        assert_eq!(allocations.total_percentage(), 100);
    }

    #[test]
    fn retiree_in_cheapest_city_stays_non_negative() {
        let allocations = compute_allocation(
            Some(AgeGroup::FiftySixPlus),
            Some(LivingSituation::Retiree),
            Some("addis-ababa"),
        );
        assert_eq!(allocations.total_percentage(), 100);
        assert!(split(&allocations).iter().all(|share| *share <= 100));
    }

    #[test]
    fn unknown_city_matches_missing_city() {
        for age in AgeGroup::ALL {
            for situation in LivingSituation::ALL {
                assert_eq!(
                    compute_allocation(Some(age), Some(situation), None),
                    compute_allocation(Some(age), Some(situation), Some("unknown-key")),
                );
            }
        }
    }

    #[test]
    fn monthly_amounts_scale_income() {
        let allocations = compute_allocation(None, None, None);
        let amounts = allocations.monthly_amounts(4000.0);
        assert_eq!(amounts[0], (AllocationCategory::Necessities, 2000.0));
        assert_eq!(amounts[4], (AllocationCategory::Personal, 200.0));
    }
}
