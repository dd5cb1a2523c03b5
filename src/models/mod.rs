pub mod challenge;
pub mod config;
pub mod difficulty;
pub mod progress;
pub mod snippet;

pub use challenge::{Challenge, ChallengeCatalog};
// config is accessed as crate::models::config::{load_config, save_config, ...}
pub use difficulty::{difficulty_stars, Tier};
pub use progress::{ProgressTracker, UserProgress};
pub use snippet::{Snippet, SnippetLibrary};
