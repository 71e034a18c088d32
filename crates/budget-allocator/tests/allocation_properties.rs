use budget_allocator::planner::reference::all_cities;
use budget_allocator::planner::{compute_allocation, AgeGroup, LivingSituation};
use proptest::prelude::*;

fn arb_age() -> impl Strategy<Value = Option<AgeGroup>> {
    proptest::option::of(prop::sample::select(AgeGroup::ALL.to_vec()))
}

fn arb_situation() -> impl Strategy<Value = Option<LivingSituation>> {
    proptest::option::of(prop::sample::select(LivingSituation::ALL.to_vec()))
}

fn arb_city() -> impl Strategy<Value = Option<String>> {
    let mut keys: Vec<String> = all_cities().map(|city| city.value.to_string()).collect();
    keys.push("atlantis".to_string());
    keys.push(String::new());
    proptest::option::of(prop::sample::select(keys))
}

proptest! {
    #[test]
    fn prop_allocation_sums_to_one_hundred(
        age in arb_age(),
        situation in arb_situation(),
        city in arb_city(),
    ) {
        let allocations = compute_allocation(age, situation, city.as_deref());
        prop_assert_eq!(allocations.total_percentage(), 100);
    }

    #[test]
    fn prop_every_share_is_within_bounds(
        age in arb_age(),
        situation in arb_situation(),
        city in arb_city(),
    ) {
        let allocations = compute_allocation(age, situation, city.as_deref());
        for (category, item) in allocations.iter() {
            prop_assert!(item.percentage <= 100, "{:?} = {}", category, item.percentage);
            prop_assert_eq!(item.name.as_str(), category.label());
        }
    }

    #[test]
    fn prop_unknown_city_matches_missing_city(
        age in arb_age(),
        situation in arb_situation(),
        key in "[a-z]{3,12}-unlisted",
    ) {
        prop_assert_eq!(
            compute_allocation(age, situation, None),
            compute_allocation(age, situation, Some(&key))
        );
    }

    #[test]
    fn prop_expensive_cities_need_more_for_necessities(
        age in arb_age(),
        situation in arb_situation(),
    ) {
        let expensive = compute_allocation(age, situation, Some("san-francisco"));
        let cheap = compute_allocation(age, situation, Some("cleveland"));
        prop_assert!(
            expensive.necessities.percentage >= cheap.necessities.percentage,
            "{} < {}",
            expensive.necessities.percentage,
            cheap.necessities.percentage
        );
    }
}

#[test]
fn cheapest_city_retiree_stays_non_negative() {
    let allocations = compute_allocation(
        Some(AgeGroup::FiftySixPlus),
        Some(LivingSituation::Retiree),
        Some("addis-ababa"),
    );
    assert_eq!(allocations.total_percentage(), 100);
    assert!(allocations.savings.percentage >= 5);
    assert!(allocations.investments.percentage >= 3);
}
