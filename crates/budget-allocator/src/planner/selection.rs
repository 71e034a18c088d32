use serde::{Deserialize, Serialize};

/// How a single tip is chosen from a list of candidates.
///
/// Candidate lists are ordered from general to specific, so `Focused` always
/// returns the most specific tip. `Seeded` picks pseudo-randomly; the same seed
/// always yields the same choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSelection {
    #[default]
    Focused,
    Seeded(u64),
}

impl AdviceSelection {
    pub fn pick<'a, T>(&self, candidates: &'a [T]) -> Option<&'a T> {
        match self {
            AdviceSelection::Focused => candidates.last(),
            AdviceSelection::Seeded(seed) => {
                if candidates.is_empty() {
                    return None;
                }
                let roll = next_rng(*seed) >> 33;
                candidates.get((roll % candidates.len() as u64) as usize)
            }
        }
    }
}

fn next_rng(seed: u64) -> u64 {
    seed.wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_picks_last_candidate() {
        assert_eq!(AdviceSelection::Focused.pick(&[1, 2, 3]), Some(&3));
        assert_eq!(AdviceSelection::Focused.pick::<u8>(&[]), None);
    }

    #[test]
    fn seeded_pick_is_reproducible_and_in_bounds() {
        let candidates = ["a", "b", "c", "d", "e"];
        for seed in 0..64 {
            let first = AdviceSelection::Seeded(seed).pick(&candidates);
            assert!(first.is_some());
            assert_eq!(first, AdviceSelection::Seeded(seed).pick(&candidates));
        }
        assert_eq!(AdviceSelection::Seeded(7).pick::<&str>(&[]), None);
    }
}
