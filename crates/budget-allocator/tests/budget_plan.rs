use budget_allocator::planner::{
    AdviceSelection, BudgetPlanner, BudgetRequest, CareerCatalog, PlanRequestError, PlannerConfig,
    MAX_MONTHLY_INCOME,
};

fn request(income: &str, age_group: &str, living_situation: &str, city: &str) -> BudgetRequest {
    BudgetRequest {
        monthly_income: income.to_string(),
        currency: "GBP".to_string(),
        age_group: age_group.to_string(),
        living_situation: living_situation.to_string(),
        city: city.to_string(),
    }
}

#[test]
fn plan_localizes_amounts_and_tips() {
    let planner = BudgetPlanner::default();
    let plan = planner
        .plan(&request("4000", "26-35", "couple", "london"))
        .expect("plan builds");

    assert_eq!(plan.currency.symbol, "£");
    assert_eq!(plan.total_percentage(), 100);
    for line in &plan.allocations {
        assert!(line.monthly_display.starts_with('£'), "{}", line.monthly_display);
        assert!(!line.tip.contains("$"), "tip not localized: {}", line.tip);
    }
    for career in &plan.careers {
        assert!(career.suggestion.salary_display.starts_with('£'));
        assert!(career.annual_increase > 0.0);
    }
}

#[test]
fn allocation_amounts_add_up_to_income() {
    let plan = BudgetPlanner::default()
        .plan(&request("3333.33", "46-55", "family", "austin"))
        .expect("plan builds");

    let total: f64 = plan.allocations.iter().map(|line| line.monthly_amount).sum();
    assert!((total - 3333.33).abs() < 1e-6);
}

#[test]
fn focused_selection_is_deterministic() {
    let planner = BudgetPlanner::new(PlannerConfig::default());
    let first = planner
        .plan(&request("2500", "56+", "retiree", "madrid"))
        .expect("plan builds");
    let second = planner
        .plan(&request("2500", "56+", "retiree", "madrid"))
        .expect("plan builds");

    assert_eq!(first.career_advice, second.career_advice);
    assert!(first.career_advice.starts_with("💎"));
}

#[test]
fn seeded_selection_repeats_for_same_seed() {
    let planner = BudgetPlanner::new(PlannerConfig {
        career_catalog: CareerCatalog::Extended,
        ..PlannerConfig::default()
    });
    let validated = request("1800", "18-25", "student", "mumbai")
        .validate()
        .expect("valid request");

    let first = planner.plan_validated(&validated, AdviceSelection::Seeded(7));
    let second = planner.plan_validated(&validated, AdviceSelection::Seeded(7));
    assert_eq!(first.career_advice, second.career_advice);
    let tips: Vec<&str> = first.allocations.iter().map(|line| line.tip.as_str()).collect();
    let again: Vec<&str> = second.allocations.iter().map(|line| line.tip.as_str()).collect();
    assert_eq!(tips, again);
}

#[test]
fn invalid_forms_report_first_problem() {
    let planner = BudgetPlanner::default();

    let err = planner
        .plan(&request("abc", "26-35", "single", "berlin"))
        .expect_err("income rejected");
    assert_eq!(err, PlanRequestError::InvalidIncome("abc".to_string()));

    let err = planner
        .plan(&request("2000", "", "single", "berlin"))
        .expect_err("age group required");
    assert_eq!(err, PlanRequestError::MissingAgeGroup);

    let err = planner
        .plan(&request("2000", "26-35", "nomad", "berlin"))
        .expect_err("situation rejected");
    assert_eq!(err, PlanRequestError::UnknownLivingSituation("nomad".to_string()));

    let err = planner
        .plan(&request("2000", "26-35", "single", " "))
        .expect_err("city required");
    assert_eq!(err, PlanRequestError::MissingCity);
}

#[test]
fn oversized_income_is_rejected_not_saturated() {
    let planner = BudgetPlanner::default();

    let err = planner
        .plan(&request("1e300", "26-35", "single", "berlin"))
        .expect_err("income rejected");
    assert_eq!(err, PlanRequestError::IncomeTooLarge("1e300".to_string()));

    let plan = planner
        .plan(&request(&MAX_MONTHLY_INCOME.to_string(), "26-35", "single", "berlin"))
        .expect("ceiling accepted");
    for line in &plan.allocations {
        let digits: String = line
            .monthly_display
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let shown: f64 = digits.parse().expect("display is numeric");
        assert_eq!(shown, line.monthly_amount, "{}", line.monthly_display);
    }
}

#[test]
fn plan_serializes_for_clients() {
    let plan = BudgetPlanner::default()
        .plan(&request("5000", "36-45", "family", "san-francisco"))
        .expect("plan builds");
    let json = serde_json::to_value(&plan).expect("plan serializes");

    assert_eq!(json["age_group"], "36-45");
    assert_eq!(json["living_situation"], "family");
    assert_eq!(json["allocations"][0]["category"], "necessities");
    assert!(json["careers"][0]["field"].is_string());
    assert!(json["careers"][0]["percent_increase"].is_i64());
}
