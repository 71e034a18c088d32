use budget_allocator::planner::careers::IMPROVEMENT_FACTOR;
use budget_allocator::planner::reference::all_cities;
use budget_allocator::planner::{
    compute_career_suggestions, get_relevant_courses, AgeGroup, CareerCatalog, CareerQuery,
    LivingSituation,
};
use proptest::prelude::*;

fn query(monthly_salary: f64, age: Option<AgeGroup>, city: Option<&str>) -> CareerQuery {
    CareerQuery {
        monthly_salary,
        age,
        living_situation: None,
        city_key: city.map(str::to_string),
        currency_code: Some("USD".to_string()),
    }
}

/// Best paying careers after location scaling, as used by the fallback.
fn top_three(city: Option<&str>, catalog: CareerCatalog) -> Vec<String> {
    compute_career_suggestions(&query(1.0e9, None, city), catalog)
        .into_iter()
        .map(|career| career.field)
        .collect()
}

fn arb_city() -> impl Strategy<Value = Option<String>> {
    let keys: Vec<String> = all_cities().map(|city| city.value.to_string()).collect();
    proptest::option::of(prop::sample::select(keys))
}

proptest! {
    #[test]
    fn prop_suggestions_beat_threshold_or_fall_back(
        monthly_salary in 0.0f64..40_000.0,
        age in proptest::option::of(prop::sample::select(AgeGroup::ALL.to_vec())),
        situation in proptest::option::of(prop::sample::select(LivingSituation::ALL.to_vec())),
        city in arb_city(),
        extended in any::<bool>(),
    ) {
        let catalog = if extended { CareerCatalog::Extended } else { CareerCatalog::Core };
        let mut career_query = query(monthly_salary, age, city.as_deref());
        career_query.living_situation = situation;

        let suggestions = compute_career_suggestions(&career_query, catalog);
        prop_assert!(!suggestions.is_empty());
        prop_assert!(suggestions.len() <= 4);

        let threshold = monthly_salary * 12.0 * IMPROVEMENT_FACTOR;
        let fallback = top_three(city.as_deref(), catalog);
        for career in &suggestions {
            prop_assert!(
                career.average_salary as f64 > threshold || fallback.contains(&career.field),
                "{} at {} is below {}",
                career.field,
                career.average_salary,
                threshold
            );
        }
    }

    #[test]
    fn prop_course_lookup_is_bounded_and_free_first(
        fields in prop::collection::vec(
            prop::sample::select(vec![
                "Software Engineering",
                "Data Science",
                "Cybersecurity",
                "Electrician",
                "Nonexistent Field",
            ]),
            0..6,
        ),
    ) {
        let courses = get_relevant_courses(&fields);
        prop_assert!(courses.len() <= 6);

        let first_paid = courses.iter().position(|course| !course.is_free());
        if let Some(index) = first_paid {
            prop_assert!(courses[index..].iter().all(|course| !course.is_free()));
        }

        let mut titles: Vec<&str> = courses.iter().map(|course| course.title).collect();
        titles.sort_unstable();
        titles.dedup();
        prop_assert_eq!(titles.len(), courses.len());
    }
}

#[test]
fn average_earner_sees_only_meaningful_raises() {
    let suggestions = compute_career_suggestions(
        &query(5_000.0, Some(AgeGroup::EighteenToTwentyFive), Some("other")),
        CareerCatalog::Core,
    );

    assert!(suggestions
        .iter()
        .any(|career| career.field == "AI/Machine Learning Engineer" && career.average_salary == 150_000));
    assert!(suggestions
        .iter()
        .all(|career| career.average_salary > 72_000));
}

#[test]
fn top_earner_falls_back_to_three_best_paying() {
    let fields = top_three(None, CareerCatalog::Core);
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[0], "AI/Machine Learning Engineer");
}

#[test]
fn unknown_course_field_yields_nothing() {
    assert!(get_relevant_courses(&["Nonexistent Field"]).is_empty());
}
