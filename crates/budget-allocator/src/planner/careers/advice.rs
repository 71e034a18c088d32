use super::super::domain::AgeGroup;
use super::super::reference::find_city;
use super::super::selection::AdviceSelection;

const EXPENSIVE_CITY_MULTIPLIER: f64 = 1.2;

const GENERAL_TIPS: [&str; 4] = [
    "💡 Your current income could be boosted by transitioning to high-growth fields!",
    "🚀 The job market is hot for tech and specialized skills right now.",
    "📈 Consider online certifications - they're often faster than traditional degrees.",
    "💰 Remote work opens up higher-paying opportunities regardless of location.",
];

fn age_tip(age: AgeGroup) -> &'static str {
    match age {
        AgeGroup::EighteenToTwentyFive => {
            "⚡ Your age is perfect for career pivots - employers love young talent in tech!"
        }
        AgeGroup::TwentySixToThirtyFive => {
            "🎯 This is prime time for career advancement - your experience + new skills = 💰"
        }
        AgeGroup::ThirtySixToFortyFive => {
            "👑 Your experience is valuable - consider leadership roles in growing fields!"
        }
        AgeGroup::FortySixToFiftyFive => {
            "🧠 Your expertise can command premium rates in consulting and specialized roles!"
        }
        AgeGroup::FiftySixPlus => "💎 Consider part-time or consulting work in your area of expertise!",
    }
}

/// Candidate tips, ordered general -> city -> age.
pub(crate) fn advice_candidates(age: Option<AgeGroup>, city_key: Option<&str>) -> Vec<String> {
    let mut tips: Vec<String> = GENERAL_TIPS.iter().map(|tip| tip.to_string()).collect();

    if let Some(city) = city_key.and_then(find_city) {
        if city.multiplier > EXPENSIVE_CITY_MULTIPLIER {
            tips.push(format!(
                "🏙️ Living in {} means higher salaries are available locally!",
                city.name
            ));
        }
    }

    if let Some(age) = age {
        tips.push(age_tip(age).to_string());
    }

    tips
}

/// Returns one career tip for the user.
///
/// The annual salary is accepted for parity with the recommendation inputs
/// but does not influence which tips are offered.
pub fn compute_career_advice(
    _annual_salary: f64,
    age: Option<AgeGroup>,
    city_key: Option<&str>,
    selection: AdviceSelection,
) -> String {
    let candidates = advice_candidates(age, city_key);
    selection
        .pick(&candidates)
        .cloned()
        .unwrap_or_else(|| GENERAL_TIPS[0].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expensive_city_adds_local_tip() {
        let tips = advice_candidates(Some(AgeGroup::ThirtySixToFortyFive), Some("zurich"));
        assert_eq!(tips.len(), 6);
        assert!(tips[4].contains("Zurich, Switzerland"));
        assert!(tips[5].starts_with("👑"));
    }

    #[test]
    fn moderate_city_gets_no_local_tip() {
        let tips = advice_candidates(None, Some("austin"));
        assert_eq!(tips.len(), 4);
    }

    #[test]
    fn focused_selection_returns_age_tip() {
        let advice = compute_career_advice(
            60_000.0,
            Some(AgeGroup::FiftySixPlus),
            Some("london"),
            AdviceSelection::Focused,
        );
        assert!(advice.contains("part-time or consulting"));
    }

    #[test]
    fn seeded_selection_returns_a_candidate() {
        let candidates = advice_candidates(Some(AgeGroup::EighteenToTwentyFive), None);
        for seed in [0, 1, 42, u64::MAX] {
            let advice = compute_career_advice(
                30_000.0,
                Some(AgeGroup::EighteenToTwentyFive),
                None,
                AdviceSelection::Seeded(seed),
            );
            assert!(candidates.contains(&advice));
        }
    }
}
