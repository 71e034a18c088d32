use super::careers::CareerCatalog;
use super::selection::AdviceSelection;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Whether advice and tips are chosen deterministically or at random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceMode {
    #[default]
    Focused,
    Random,
}

impl AdviceMode {
    pub fn from_key(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "focused" | "deterministic" => Some(Self::Focused),
            "random" => Some(Self::Random),
            _ => None,
        }
    }

    /// Random mode seeds from the wall clock, so each call may differ.
    pub fn selection(&self) -> AdviceSelection {
        match self {
            AdviceMode::Focused => AdviceSelection::Focused,
            AdviceMode::Random => {
                let now = Utc::now();
                let seed = (now.timestamp() as u64) ^ u64::from(now.timestamp_subsec_nanos());
                AdviceSelection::Seeded(seed)
            }
        }
    }
}

/// Tunables for plan composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub advice_mode: AdviceMode,
    pub career_catalog: CareerCatalog,
}
