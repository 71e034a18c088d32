use super::common::*;

use crate::accounts::domain::{CourseProgress, ProfileDefaults, RelationshipStatus};
use chrono::Utc;
use crate::planner::{AgeGroup, LivingSituation};

#[test]
fn defaults_derive_monthly_income_and_brackets() {
    let defaults = ProfileDefaults::from_profile(&profile());
    assert_eq!(defaults.monthly_income, 6_000.0);
    assert_eq!(defaults.age_group, Some(AgeGroup::TwentySixToThirtyFive));
    assert_eq!(defaults.living_situation, Some(LivingSituation::Couple));
}

#[test]
fn minors_and_ambiguous_statuses_leave_fields_empty() {
    let mut minor = profile();
    minor.age = 16;
    minor.relationship_status = RelationshipStatus::Widowed;

    let defaults = ProfileDefaults::from_profile(&minor);
    assert_eq!(defaults.age_group, None);
    assert_eq!(defaults.living_situation, None);
}

#[test]
fn single_status_maps_to_single_household() {
    let mut single = profile();
    single.relationship_status = RelationshipStatus::Single;
    single.age = 60;

    let defaults = ProfileDefaults::from_profile(&single);
    assert_eq!(defaults.age_group, Some(AgeGroup::FiftySixPlus));
    assert_eq!(defaults.living_situation, Some(LivingSituation::Single));
}

#[test]
fn relationship_status_uses_kebab_case() {
    let parsed: RelationshipStatus =
        serde_json::from_str("\"in-relationship\"").expect("status parses");
    assert_eq!(parsed, RelationshipStatus::InRelationship);
}

#[test]
fn course_progress_rounds_and_completes_at_full() {
    let now = Utc::now();

    let third = CourseProgress::from_counts(1, 3, now);
    assert_eq!(third.progress_percentage, 33);
    assert_eq!(third.completed_at, None);

    assert_eq!(CourseProgress::from_counts(2, 3, now).progress_percentage, 67);

    let done = CourseProgress::from_counts(5, 3, now);
    assert_eq!(done.progress_percentage, 100);
    assert_eq!(done.completed_at, Some(now));

    assert_eq!(CourseProgress::from_counts(0, 0, now).progress_percentage, 0);
}
