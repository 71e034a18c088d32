use super::domain::{AgeGroup, LivingSituation};
use serde::{Deserialize, Serialize};

/// Largest monthly income a plan is computed for. Money displays are exact
/// to the cent well beyond this.
pub const MAX_MONTHLY_INCOME: f64 = 1_000_000_000_000.0;

/// Budget form submission, as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetRequest {
    #[serde(default)]
    pub monthly_income: String,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub age_group: String,
    #[serde(default)]
    pub living_situation: String,
    #[serde(default)]
    pub city: String,
}

/// Form input after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub monthly_income: f64,
    pub currency: String,
    pub age_group: AgeGroup,
    pub living_situation: LivingSituation,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanRequestError {
    #[error("monthly income must be a positive number (got '{0}')")]
    InvalidIncome(String),
    #[error("monthly income must not exceed 1,000,000,000,000 (got '{0}')")]
    IncomeTooLarge(String),
    #[error("age group is required")]
    MissingAgeGroup,
    #[error("unrecognized age group '{0}'")]
    UnknownAgeGroup(String),
    #[error("living situation is required")]
    MissingLivingSituation,
    #[error("unrecognized living situation '{0}'")]
    UnknownLivingSituation(String),
    #[error("city/location is required")]
    MissingCity,
    #[error("currency is required")]
    MissingCurrency,
}

impl BudgetRequest {
    /// Checks fields in form order and reports the first problem.
    pub fn validate(&self) -> Result<ValidatedRequest, PlanRequestError> {
        let raw_income = self.monthly_income.trim();
        let monthly_income = raw_income
            .parse::<f64>()
            .ok()
            .filter(|income| income.is_finite() && *income > 0.0)
            .ok_or_else(|| PlanRequestError::InvalidIncome(raw_income.to_string()))?;
        if monthly_income > MAX_MONTHLY_INCOME {
            return Err(PlanRequestError::IncomeTooLarge(raw_income.to_string()));
        }

        let age_group = required(&self.age_group, PlanRequestError::MissingAgeGroup)?;
        let age_group = AgeGroup::from_key(age_group)
            .ok_or_else(|| PlanRequestError::UnknownAgeGroup(age_group.to_string()))?;

        let living_situation =
            required(&self.living_situation, PlanRequestError::MissingLivingSituation)?;
        let living_situation = LivingSituation::from_key(living_situation).ok_or_else(|| {
            PlanRequestError::UnknownLivingSituation(living_situation.to_string())
        })?;

        let city = required(&self.city, PlanRequestError::MissingCity)?;
        let currency = required(&self.currency, PlanRequestError::MissingCurrency)?;

        Ok(ValidatedRequest {
            monthly_income,
            currency: currency.to_ascii_uppercase(),
            age_group,
            living_situation,
            city: city.to_string(),
        })
    }
}

fn required(value: &str, missing: PlanRequestError) -> Result<&str, PlanRequestError> {
    let value = value.trim();
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BudgetRequest {
        BudgetRequest {
            monthly_income: "4200.50".to_string(),
            currency: "usd".to_string(),
            age_group: "26-35".to_string(),
            living_situation: "couple".to_string(),
            city: "denver".to_string(),
        }
    }

    #[test]
    fn valid_request_parses() {
        let validated = request().validate().expect("valid");
        assert_eq!(validated.monthly_income, 4200.5);
        assert_eq!(validated.currency, "USD");
        assert_eq!(validated.age_group, AgeGroup::TwentySixToThirtyFive);
        assert_eq!(validated.living_situation, LivingSituation::Couple);
    }

    #[test]
    fn rejects_non_positive_income() {
        for income in ["", "abc", "0", "-10", "NaN"] {
            let mut req = request();
            req.monthly_income = income.to_string();
            assert!(matches!(
                req.validate(),
                Err(PlanRequestError::InvalidIncome(_))
            ));
        }
    }

    #[test]
    fn rejects_income_beyond_ceiling() {
        let mut req = request();
        req.monthly_income = "1e300".to_string();
        assert_eq!(
            req.validate(),
            Err(PlanRequestError::IncomeTooLarge("1e300".to_string()))
        );

        req.monthly_income = "1000000000000".to_string();
        assert_eq!(req.validate().expect("ceiling accepted").monthly_income, MAX_MONTHLY_INCOME);
    }

    #[test]
    fn reports_first_missing_field() {
        let mut req = request();
        req.age_group.clear();
        req.city.clear();
        assert_eq!(req.validate(), Err(PlanRequestError::MissingAgeGroup));
    }

    #[test]
    fn rejects_unknown_living_situation() {
        let mut req = request();
        req.living_situation = "roommates".to_string();
        assert_eq!(
            req.validate(),
            Err(PlanRequestError::UnknownLivingSituation("roommates".to_string()))
        );
    }

    #[test]
    fn requires_city_and_currency() {
        let mut req = request();
        req.city = "  ".to_string();
        assert_eq!(req.validate(), Err(PlanRequestError::MissingCity));

        let mut req = request();
        req.currency.clear();
        assert_eq!(req.validate(), Err(PlanRequestError::MissingCurrency));
    }
}
