mod advice;
mod catalog;
mod rules;

pub use advice::compute_career_advice;
pub use catalog::CareerCatalog;

use super::domain::{AgeGroup, CareerProfile, CareerSuggestion, LivingSituation};
use super::money::group_thousands;
use super::reference::{city_multiplier, currency_symbol};
use rules::{age_rule, living_rule, top_by_salary};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A suggested career must pay at least this much more than current income.
pub const IMPROVEMENT_FACTOR: f64 = 1.2;
/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 4;
const FALLBACK_SUGGESTIONS: usize = 3;

/// Inputs for a career recommendation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerQuery {
    pub monthly_salary: f64,
    pub age: Option<AgeGroup>,
    pub living_situation: Option<LivingSituation>,
    #[serde(default)]
    pub city_key: Option<String>,
    #[serde(default)]
    pub currency_code: Option<String>,
}

impl CareerQuery {
    pub fn annual_salary(&self) -> f64 {
        self.monthly_salary * 12.0
    }
}

/// Filters and ranks the catalog for a user.
///
/// Catalog salaries are scaled by the city multiplier, then careers paying more
/// than 1.2x the current annual salary are kept (the three best paying when
/// none qualify). The age bracket rule and then the living situation rule
/// narrow the list, which is finally capped at four entries. If nothing
/// survives, the three best paying careers of the scaled catalog are returned.
pub fn compute_career_suggestions(
    query: &CareerQuery,
    catalog: CareerCatalog,
) -> Vec<CareerSuggestion> {
    let multiplier = city_multiplier(query.city_key.as_deref());
    let symbol = currency_symbol(query.currency_code.as_deref().unwrap_or_default());

    let adjusted: Vec<CareerSuggestion> = catalog
        .profiles()
        .map(|profile| scale_profile(profile, multiplier, symbol))
        .collect();

    let threshold = query.annual_salary() * IMPROVEMENT_FACTOR;
    let mut relevant: Vec<CareerSuggestion> = adjusted
        .iter()
        .filter(|career| career.average_salary as f64 > threshold)
        .cloned()
        .collect();

    if relevant.is_empty() {
        relevant = top_by_salary(adjusted.clone(), FALLBACK_SUGGESTIONS);
    }

    if let Some(age) = query.age {
        relevant = age_rule(age)(relevant);
    }
    if let Some(situation) = query.living_situation {
        relevant = living_rule(situation)(relevant);
    }

    relevant.truncate(MAX_SUGGESTIONS);
    if relevant.is_empty() {
        relevant = top_by_salary(adjusted, FALLBACK_SUGGESTIONS);
    }

    debug!(
        monthly_salary = query.monthly_salary,
        threshold,
        multiplier,
        ?catalog,
        fields = ?relevant.iter().map(|career| career.field.as_str()).collect::<Vec<_>>(),
        "computed career suggestions"
    );

    relevant
}

fn scale_profile(profile: &CareerProfile, multiplier: f64, symbol: &str) -> CareerSuggestion {
    let average_salary = (f64::from(profile.average_salary) * multiplier).round() as u64;
    CareerSuggestion {
        field: profile.field.to_string(),
        average_salary,
        salary_display: format!("{symbol}{}", group_thousands(average_salary)),
        growth_rate: profile.growth_rate.to_string(),
        description: profile.description.to_string(),
        requirements: profile.requirements.to_string(),
        time_to_transition: profile.time_to_transition.to_string(),
        emoji: profile.emoji.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(monthly_salary: f64, age: AgeGroup, situation: LivingSituation) -> CareerQuery {
        CareerQuery {
            monthly_salary,
            age: Some(age),
            living_situation: Some(situation),
            city_key: None,
            currency_code: Some("USD".to_string()),
        }
    }

    fn fields(careers: &[CareerSuggestion]) -> Vec<&str> {
        careers.iter().map(|career| career.field.as_str()).collect()
    }

    #[test]
    fn young_single_gets_fastest_growing_fields() {
        let careers = compute_career_suggestions(
            &query(5000.0, AgeGroup::EighteenToTwentyFive, LivingSituation::Single),
            CareerCatalog::Core,
        );
        assert_eq!(
            fields(&careers),
            [
                "Renewable Energy",
                "AI/Machine Learning Engineer",
                "Data Science",
                "AI Product Manager"
            ]
        );
        assert!(careers.iter().all(|career| career.average_salary > 72_000));
    }

    #[test]
    fn high_earner_falls_back_to_top_paying() {
        let careers = compute_career_suggestions(
            &query(20_000.0, AgeGroup::TwentySixToThirtyFive, LivingSituation::Couple),
            CareerCatalog::Core,
        );
        assert_eq!(
            fields(&careers),
            ["AI/Machine Learning Engineer", "Cloud Architecture", "AI Product Manager"]
        );
    }

    #[test]
    fn salaries_scale_with_city() {
        let mut lagos = query(500.0, AgeGroup::TwentySixToThirtyFive, LivingSituation::Single);
        lagos.city_key = Some("lagos".to_string());
        let careers = compute_career_suggestions(&lagos, CareerCatalog::Core);
        let ml = careers
            .iter()
            .find(|career| career.field == "AI/Machine Learning Engineer")
            .expect("top earner present");
        assert_eq!(ml.average_salary, 60_000);
        assert_eq!(ml.salary_display, "$60,000");
    }

    #[test]
    fn near_retirement_prefers_short_transitions() {
        let careers = compute_career_suggestions(
            &query(3000.0, AgeGroup::FiftySixPlus, LivingSituation::Single),
            CareerCatalog::Core,
        );
        assert_eq!(fields(&careers), ["Digital Marketing", "Financial Planning"]);
    }

    #[test]
    fn family_keeps_well_paid_options() {
        let careers = compute_career_suggestions(
            &query(3000.0, AgeGroup::TwentySixToThirtyFive, LivingSituation::Family),
            CareerCatalog::Core,
        );
        assert_eq!(careers.len(), 3);
        assert!(careers.iter().all(|career| career.average_salary > 90_000));
    }

    #[test]
    fn missing_age_and_situation_only_cap_results() {
        let careers = compute_career_suggestions(
            &CareerQuery {
                monthly_salary: 1000.0,
                age: None,
                living_situation: None,
                city_key: None,
                currency_code: None,
            },
            CareerCatalog::Core,
        );
        assert_eq!(
            fields(&careers),
            [
                "Software Engineering",
                "Data Science",
                "Cloud Architecture",
                "Cybersecurity"
            ]
        );
        assert!(careers[0].salary_display.starts_with('$'));
    }

    #[test]
    fn extended_catalog_surfaces_trades() {
        let careers = compute_career_suggestions(
            &query(4000.0, AgeGroup::FiftySixPlus, LivingSituation::Retiree),
            CareerCatalog::Extended,
        );
        assert_eq!(careers.len(), 2);
        assert_eq!(careers[0].field, "Digital Marketing");
        assert_eq!(careers[1].field, "Financial Planning");
    }
}
