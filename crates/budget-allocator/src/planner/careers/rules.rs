use std::cmp::Ordering;

use super::super::domain::{AgeGroup, CareerSuggestion, LivingSituation};

pub(crate) type Narrowing = fn(Vec<CareerSuggestion>) -> Vec<CareerSuggestion>;

pub(crate) const FAMILY_SALARY_FLOOR: u64 = 90_000;
pub(crate) const MID_CAREER_SALARY_FLOOR: u64 = 100_000;

pub(crate) fn by_salary_desc(a: &CareerSuggestion, b: &CareerSuggestion) -> Ordering {
    b.average_salary.cmp(&a.average_salary)
}

pub(crate) fn by_growth_desc(a: &CareerSuggestion, b: &CareerSuggestion) -> Ordering {
    b.growth_percent().total_cmp(&a.growth_percent())
}

pub(crate) fn top_by_salary(mut careers: Vec<CareerSuggestion>, limit: usize) -> Vec<CareerSuggestion> {
    careers.sort_by(by_salary_desc);
    careers.truncate(limit);
    careers
}

fn top_by_growth(mut careers: Vec<CareerSuggestion>, limit: usize) -> Vec<CareerSuggestion> {
    careers.sort_by(by_growth_desc);
    careers.truncate(limit);
    careers
}

/// Keeps the preferred subset when it is non-empty, otherwise the highest
/// paying entries. Either way the result is capped at `limit`.
fn prefer_or_top_salary(
    careers: Vec<CareerSuggestion>,
    limit: usize,
    preferred: impl Fn(&CareerSuggestion) -> bool,
) -> Vec<CareerSuggestion> {
    let mut matching: Vec<CareerSuggestion> =
        careers.iter().filter(|career| preferred(*career)).cloned().collect();
    if matching.is_empty() {
        return top_by_salary(careers, limit);
    }
    matching.truncate(limit);
    matching
}

pub(crate) fn age_rule(age: AgeGroup) -> Narrowing {
    match age {
        AgeGroup::EighteenToTwentyFive => fastest_growing,
        AgeGroup::TwentySixToThirtyFive => best_paying,
        AgeGroup::ThirtySixToFortyFive => leadership_track,
        AgeGroup::FortySixToFiftyFive => expertise_track,
        AgeGroup::FiftySixPlus => short_transition_track,
    }
}

pub(crate) fn living_rule(situation: LivingSituation) -> Narrowing {
    match situation {
        LivingSituation::Family => stable_income,
        LivingSituation::Student => fastest_growing,
        LivingSituation::Single | LivingSituation::Couple | LivingSituation::Retiree => unchanged,
    }
}

fn unchanged(careers: Vec<CareerSuggestion>) -> Vec<CareerSuggestion> {
    careers
}

fn fastest_growing(careers: Vec<CareerSuggestion>) -> Vec<CareerSuggestion> {
    top_by_growth(careers, 4)
}

fn best_paying(careers: Vec<CareerSuggestion>) -> Vec<CareerSuggestion> {
    top_by_salary(careers, 4)
}

fn leadership_track(careers: Vec<CareerSuggestion>) -> Vec<CareerSuggestion> {
    prefer_or_top_salary(careers, 3, |career| {
        career.field.contains("Management")
            || career.field.contains("Architecture")
            || career.average_salary > MID_CAREER_SALARY_FLOOR
    })
}

fn expertise_track(careers: Vec<CareerSuggestion>) -> Vec<CareerSuggestion> {
    prefer_or_top_salary(careers, 3, |career| {
        career.field.contains("Financial")
            || career.field.contains("Consulting")
            || career.time_to_transition.contains("3-6")
            || career.time_to_transition.contains("6-12")
    })
}

fn short_transition_track(careers: Vec<CareerSuggestion>) -> Vec<CareerSuggestion> {
    prefer_or_top_salary(careers, 2, |career| {
        career.time_to_transition.contains("3-6")
            || career.field.contains("Financial")
            || career.field.contains("Digital Marketing")
    })
}

fn stable_income(careers: Vec<CareerSuggestion>) -> Vec<CareerSuggestion> {
    let mut well_paid: Vec<CareerSuggestion> = careers
        .iter()
        .filter(|career| career.average_salary > FAMILY_SALARY_FLOOR)
        .cloned()
        .collect();
    if well_paid.is_empty() {
        let mut careers = careers;
        careers.truncate(3);
        return careers;
    }
    well_paid.truncate(3);
    well_paid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn career(field: &str, salary: u64, growth: &str, transition: &str) -> CareerSuggestion {
        CareerSuggestion {
            field: field.to_string(),
            average_salary: salary,
            salary_display: String::new(),
            growth_rate: growth.to_string(),
            description: String::new(),
            requirements: String::new(),
            time_to_transition: transition.to_string(),
            emoji: String::new(),
        }
    }

    fn fields(careers: &[CareerSuggestion]) -> Vec<&str> {
        careers.iter().map(|career| career.field.as_str()).collect()
    }

    #[test]
    fn growth_sort_is_stable_for_ties() {
        let careers = vec![
            career("A", 1, "35%", ""),
            career("B", 1, "40%", ""),
            career("C", 1, "35%", ""),
        ];
        assert_eq!(fields(&fastest_growing(careers)), ["B", "A", "C"]);
    }

    #[test]
    fn leadership_track_falls_back_to_salary() {
        let careers = vec![
            career("Design", 80_000, "10%", ""),
            career("Marketing", 95_000, "10%", ""),
        ];
        assert_eq!(fields(&leadership_track(careers)), ["Marketing", "Design"]);
    }

    #[test]
    fn leadership_track_keeps_preferred_order() {
        let careers = vec![
            career("Design", 80_000, "10%", ""),
            career("Product Management", 95_000, "10%", ""),
            career("Cloud Architecture", 90_000, "10%", ""),
        ];
        assert_eq!(
            fields(&leadership_track(careers)),
            ["Product Management", "Cloud Architecture"]
        );
    }

    #[test]
    fn short_transition_track_caps_at_two() {
        let careers = vec![
            career("Digital Marketing", 85_000, "25%", "3-6 months"),
            career("Financial Planning", 90_000, "15%", "12-24 months"),
            career("Welding", 70_000, "8%", "3-6 months"),
        ];
        assert_eq!(
            fields(&short_transition_track(careers)),
            ["Digital Marketing", "Financial Planning"]
        );
    }

    #[test]
    fn family_without_well_paid_options_keeps_first_three() {
        let careers = vec![
            career("A", 50_000, "1%", ""),
            career("B", 60_000, "1%", ""),
            career("C", 70_000, "1%", ""),
            career("D", 80_000, "1%", ""),
        ];
        assert_eq!(fields(&stable_income(careers)), ["A", "B", "C"]);
    }
}
