use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 5;

/// Difficulty bands used by challenge mode. Challenges themselves carry a
/// plain 1-5 rating; a tier groups those ratings for browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "beginner",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
        }
    }

    pub fn range(&self) -> (u8, u8) {
        match self {
            Tier::Beginner => (1, 2),
            Tier::Intermediate => (3, 4),
            Tier::Advanced => (5, 5),
        }
    }

    pub fn contains(&self, difficulty: u8) -> bool {
        let (lo, hi) = self.range();
        (lo..=hi).contains(&difficulty)
    }

    pub fn for_difficulty(difficulty: u8) -> Option<Tier> {
        Tier::ALL.into_iter().find(|t| t.contains(difficulty))
    }

    pub fn stars(&self) -> &'static str {
        match self {
            Tier::Beginner => "⭐",
            Tier::Intermediate => "⭐⭐",
            Tier::Advanced => "⭐⭐⭐",
        }
    }
}

pub fn difficulty_stars(difficulty: u8) -> String {
    "⭐".repeat(difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers_cover_every_difficulty_once() {
        for d in MIN_DIFFICULTY..=MAX_DIFFICULTY {
            let hits = Tier::ALL.iter().filter(|t| t.contains(d)).count();
            assert_eq!(hits, 1, "difficulty {} matched {} tiers", d, hits);
        }
    }

    #[test]
    fn test_for_difficulty() {
        assert_eq!(Tier::for_difficulty(2), Some(Tier::Beginner));
        assert_eq!(Tier::for_difficulty(4), Some(Tier::Intermediate));
        assert_eq!(Tier::for_difficulty(5), Some(Tier::Advanced));
        assert_eq!(Tier::for_difficulty(0), None);
    }

    #[test]
    fn test_stars() {
        assert_eq!(difficulty_stars(3), "⭐⭐⭐");
        assert_eq!(difficulty_stars(9), "⭐⭐⭐⭐⭐");
    }
}
