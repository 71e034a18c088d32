//! Budget allocation, career recommendation and course lookup.
//!
//! The engines here are pure: they take explicit inputs, read only the static
//! reference tables, and never fail. Lookups of unknown cities, currencies or
//! career fields fall back to defaults. Input validation lives in
//! [`BudgetRequest::validate`], in front of [`BudgetPlanner`].

pub mod allocation;
pub mod careers;
pub mod config;
pub mod courses;
pub mod domain;
pub mod money;
pub mod reference;
pub mod request;
pub mod selection;
pub mod tips;

pub use allocation::compute_allocation;
pub use careers::{compute_career_advice, compute_career_suggestions, CareerCatalog, CareerQuery};
pub use config::{AdviceMode, PlannerConfig};
pub use courses::{course_fields, get_relevant_courses};
pub use domain::{
    AgeGroup, AllocationCategory, AllocationItem, Allocations, CareerSuggestion, CityEntry,
    CityGroup, Course, Currency, Discount, LivingSituation,
};
pub use request::{BudgetRequest, PlanRequestError, ValidatedRequest, MAX_MONTHLY_INCOME};
pub use selection::AdviceSelection;
pub use tips::category_tip;

use money::format_money;
use reference::{currency_symbol, find_city, find_currency};
use serde::Serialize;
use tracing::info;

/// Stateless composer turning a validated form into a full plan.
#[derive(Debug, Clone, Default)]
pub struct BudgetPlanner {
    config: PlannerConfig,
}

impl BudgetPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Validates the request and builds a plan using the configured advice mode.
    pub fn plan(&self, request: &BudgetRequest) -> Result<BudgetPlan, PlanRequestError> {
        let validated = request.validate()?;
        Ok(self.plan_validated(&validated, self.config.advice_mode.selection()))
    }

    pub fn plan_validated(
        &self,
        request: &ValidatedRequest,
        selection: AdviceSelection,
    ) -> BudgetPlan {
        let city_key = Some(request.city.as_str());
        let symbol = currency_symbol(&request.currency);

        let allocations = compute_allocation(
            Some(request.age_group),
            Some(request.living_situation),
            city_key,
        );

        let lines = allocations
            .iter()
            .zip(allocations.monthly_amounts(request.monthly_income))
            .map(|((category, item), (_, monthly_amount))| {
                AllocationLine {
                    category,
                    name: item.name.clone(),
                    emoji: item.emoji.clone(),
                    percentage: item.percentage,
                    monthly_amount,
                    monthly_display: format_money(symbol, monthly_amount),
                    tip: category_tip(
                        category,
                        Some(request.age_group),
                        city_key,
                        Some(&request.currency),
                        selection,
                    ),
                }
            })
            .collect();

        let query = CareerQuery {
            monthly_salary: request.monthly_income,
            age: Some(request.age_group),
            living_situation: Some(request.living_situation),
            city_key: Some(request.city.clone()),
            currency_code: Some(request.currency.clone()),
        };
        let annual_salary = query.annual_salary();
        let suggestions = compute_career_suggestions(&query, self.config.career_catalog);
        let fields: Vec<&str> = suggestions.iter().map(|s| s.field.as_str()).collect();
        let courses: Vec<Course> = get_relevant_courses(&fields).into_iter().cloned().collect();

        let careers = suggestions
            .into_iter()
            .map(|suggestion| CareerRecommendation::new(suggestion, annual_salary, symbol))
            .collect();

        let career_advice =
            compute_career_advice(annual_salary, Some(request.age_group), city_key, selection);

        let plan = BudgetPlan {
            monthly_income: request.monthly_income,
            currency: CurrencyView {
                code: request.currency.clone(),
                symbol: symbol.to_string(),
                name: find_currency(&request.currency).map(|currency| currency.name),
            },
            city: find_city(&request.city).cloned(),
            age_group: request.age_group,
            living_situation: request.living_situation,
            allocations: lines,
            careers,
            career_advice,
            courses,
        };

        info!(
            age_group = %plan.age_group,
            living_situation = %plan.living_situation,
            city = %request.city,
            careers = plan.careers.len(),
            courses = plan.courses.len(),
            "budget plan composed"
        );

        plan
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrencyView {
    pub code: String,
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
}

/// One budget category with its monthly amount and a spending tip.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationLine {
    pub category: AllocationCategory,
    pub name: String,
    pub emoji: String,
    pub percentage: u8,
    pub monthly_amount: f64,
    pub monthly_display: String,
    pub tip: String,
}

/// Career suggestion paired with the raise it represents.
#[derive(Debug, Clone, Serialize)]
pub struct CareerRecommendation {
    #[serde(flatten)]
    pub suggestion: CareerSuggestion,
    pub annual_increase: f64,
    pub monthly_increase: f64,
    pub percent_increase: i64,
    pub monthly_increase_display: String,
}

impl CareerRecommendation {
    pub fn new(suggestion: CareerSuggestion, current_annual_salary: f64, symbol: &str) -> Self {
        let annual_increase = suggestion.average_salary as f64 - current_annual_salary;
        let monthly_increase = (annual_increase / 12.0).round();
        let percent_increase = if current_annual_salary > 0.0 {
            (annual_increase / current_annual_salary * 100.0).round() as i64
        } else {
            0
        };

        Self {
            suggestion,
            annual_increase,
            monthly_increase,
            percent_increase,
            monthly_increase_display: format_money(symbol, monthly_increase),
        }
    }
}

/// Everything the results view shows for one form submission.
#[derive(Debug, Clone, Serialize)]
pub struct BudgetPlan {
    pub monthly_income: f64,
    pub currency: CurrencyView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<CityEntry>,
    pub age_group: AgeGroup,
    pub living_situation: LivingSituation,
    pub allocations: Vec<AllocationLine>,
    pub careers: Vec<CareerRecommendation>,
    pub career_advice: String,
    pub courses: Vec<Course>,
}

impl BudgetPlan {
    pub fn total_percentage(&self) -> u32 {
        self.allocations
            .iter()
            .map(|line| u32::from(line.percentage))
            .sum()
    }
}
