use chrono::Local;

use crate::display::{display_progress, heading};
use crate::error::Result;
use crate::models::config::{self, UserConfig};
use crate::models::ChallengeCatalog;

use super::Session;

/// Titles for completed ids, falling back to the raw id for anything the
/// catalog no longer knows.
pub(super) fn completed_titles(catalog: &ChallengeCatalog, ids: &[String]) -> Vec<String> {
    ids.iter()
        .map(|id| {
            let challenge = catalog.get_challenge(id);
            if challenge.is_placeholder() {
                id.clone()
            } else {
                challenge.title
            }
        })
        .collect()
}

pub(super) fn print_streak(config: &UserConfig) {
    if config.completed_today(Local::now()) {
        println!("You've completed a challenge today!");
    }
    println!("Current streak: {} day(s)", config.current_streak);
    println!("Longest streak: {} day(s)", config.longest_streak);
}

pub fn show_progress(session: &Session, json: bool) -> Result<()> {
    let catalog = ChallengeCatalog::new();
    let progress = session.tracker.get_progress();

    if json {
        println!("{}", serde_json::to_string_pretty(progress)?);
        return Ok(());
    }

    heading("YOUR PROGRESS");
    display_progress(
        progress,
        catalog.len(),
        &completed_titles(&catalog, &progress.completed_challenge_ids),
    );
    print_streak(&session.config);
    Ok(())
}

pub fn handle_theme(mut user_config: UserConfig, name: Option<String>) -> Result<()> {
    match name {
        None => {
            println!("Current theme: {}", user_config.theme);
            println!();
            println!("To change: luau-practice theme <name>");
        }
        Some(new_theme) => {
            if user_config.theme == new_theme {
                println!("Theme is already set to {}", new_theme);
                return Ok(());
            }
            let old_theme = std::mem::replace(&mut user_config.theme, new_theme);
            config::save_config(&user_config)?;
            println!("Theme changed from {} to {}", old_theme, user_config.theme);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_titles() {
        let catalog = ChallengeCatalog::new();
        let ids = vec!["hello_world".to_string(), "retired_challenge".to_string()];
        assert_eq!(
            completed_titles(&catalog, &ids),
            vec!["Hello Roblox", "retired_challenge"]
        );
    }
}
