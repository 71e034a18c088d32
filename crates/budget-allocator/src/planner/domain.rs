use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse age ranges used to select allocation and career rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    EighteenToTwentyFive,
    #[serde(rename = "26-35")]
    TwentySixToThirtyFive,
    #[serde(rename = "36-45")]
    ThirtySixToFortyFive,
    #[serde(rename = "46-55")]
    FortySixToFiftyFive,
    #[serde(rename = "56+")]
    FiftySixPlus,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::EighteenToTwentyFive,
        AgeGroup::TwentySixToThirtyFive,
        AgeGroup::ThirtySixToFortyFive,
        AgeGroup::FortySixToFiftyFive,
        AgeGroup::FiftySixPlus,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            AgeGroup::EighteenToTwentyFive => "18-25",
            AgeGroup::TwentySixToThirtyFive => "26-35",
            AgeGroup::ThirtySixToFortyFive => "36-45",
            AgeGroup::FortySixToFiftyFive => "46-55",
            AgeGroup::FiftySixPlus => "56+",
        }
    }

    /// Parses the form key (`"18-25"`, ..., `"56+"`); anything else is `None`.
    pub fn from_key(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|group| group.key() == raw)
    }

    /// Buckets an exact age. Ages under 18 have no bracket.
    pub fn from_age(age: u32) -> Option<Self> {
        match age {
            18..=25 => Some(AgeGroup::EighteenToTwentyFive),
            26..=35 => Some(AgeGroup::TwentySixToThirtyFive),
            36..=45 => Some(AgeGroup::ThirtySixToFortyFive),
            46..=55 => Some(AgeGroup::FortySixToFiftyFive),
            56.. => Some(AgeGroup::FiftySixPlus),
            _ => None,
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Household categories used as a rule-selection key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LivingSituation {
    Student,
    Single,
    Couple,
    Family,
    Retiree,
}

impl LivingSituation {
    pub const ALL: [LivingSituation; 5] = [
        LivingSituation::Student,
        LivingSituation::Single,
        LivingSituation::Couple,
        LivingSituation::Family,
        LivingSituation::Retiree,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            LivingSituation::Student => "student",
            LivingSituation::Single => "single",
            LivingSituation::Couple => "couple",
            LivingSituation::Family => "family",
            LivingSituation::Retiree => "retiree",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        let raw = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|situation| situation.key() == raw)
    }
}

impl fmt::Display for LivingSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The five budget buckets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationCategory {
    Necessities,
    Savings,
    Investments,
    Entertainment,
    Personal,
}

impl AllocationCategory {
    pub const ALL: [AllocationCategory; 5] = [
        AllocationCategory::Necessities,
        AllocationCategory::Savings,
        AllocationCategory::Investments,
        AllocationCategory::Entertainment,
        AllocationCategory::Personal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AllocationCategory::Necessities => "Essential Expenses",
            AllocationCategory::Savings => "Emergency Fund & Savings",
            AllocationCategory::Investments => "Investments & Future",
            AllocationCategory::Entertainment => "Fun & Entertainment",
            AllocationCategory::Personal => "Personal Development",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            AllocationCategory::Necessities => "🏠",
            AllocationCategory::Savings => "🛡️",
            AllocationCategory::Investments => "📈",
            AllocationCategory::Entertainment => "🎉",
            AllocationCategory::Personal => "📚",
        }
    }
}

/// One named budget category with its share of monthly income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationItem {
    pub percentage: u8,
    pub name: String,
    pub emoji: String,
}

impl AllocationItem {
    pub(crate) fn new(category: AllocationCategory, percentage: u8) -> Self {
        Self {
            percentage,
            name: category.label().to_string(),
            emoji: category.emoji().to_string(),
        }
    }
}

/// Complete five-way split. Percentages sum to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocations {
    pub necessities: AllocationItem,
    pub savings: AllocationItem,
    pub investments: AllocationItem,
    pub entertainment: AllocationItem,
    pub personal: AllocationItem,
}

impl Allocations {
    pub fn get(&self, category: AllocationCategory) -> &AllocationItem {
        match category {
            AllocationCategory::Necessities => &self.necessities,
            AllocationCategory::Savings => &self.savings,
            AllocationCategory::Investments => &self.investments,
            AllocationCategory::Entertainment => &self.entertainment,
            AllocationCategory::Personal => &self.personal,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AllocationCategory, &AllocationItem)> + '_ {
        AllocationCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn total_percentage(&self) -> u32 {
        self.iter().map(|(_, item)| u32::from(item.percentage)).sum()
    }

    /// Monthly amount per category for the given income.
    pub fn monthly_amounts(&self, monthly_income: f64) -> Vec<(AllocationCategory, f64)> {
        self.iter()
            .map(|(category, item)| {
                (
                    category,
                    monthly_income * f64::from(item.percentage) / 100.0,
                )
            })
            .collect()
    }
}

/// Static city record from the cost-of-living table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityEntry {
    pub value: &'static str,
    pub name: &'static str,
    pub multiplier: f64,
    pub country: &'static str,
    pub flag: &'static str,
}

/// Labeled region grouping used for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityGroup {
    pub label: &'static str,
    pub cities: &'static [CityEntry],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

/// Catalog record before any location scaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerProfile {
    pub field: &'static str,
    pub average_salary: u32,
    pub growth_rate: &'static str,
    pub description: &'static str,
    pub requirements: &'static str,
    pub time_to_transition: &'static str,
    pub emoji: &'static str,
}

/// Career recommendation with the salary scaled to the user's city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerSuggestion {
    pub field: String,
    pub average_salary: u64,
    pub salary_display: String,
    pub growth_rate: String,
    pub description: String,
    pub requirements: String,
    pub time_to_transition: String,
    pub emoji: String,
}

impl CareerSuggestion {
    /// Numeric growth rate; `"22%"` parses as `22.0`, unparseable values as `0.0`.
    pub fn growth_percent(&self) -> f64 {
        parse_growth_rate(&self.growth_rate)
    }
}

pub(crate) fn parse_growth_rate(raw: &str) -> f64 {
    let numeric: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse().unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Discount {
    pub original_price: f64,
    pub discount_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub provider: &'static str,
    pub price: f64,
    pub duration: &'static str,
    pub rating: f64,
    pub students: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    pub certification_type: &'static str,
    pub url: &'static str,
    pub emoji: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
}

impl Course {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}
