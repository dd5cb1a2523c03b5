use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::progress::DEFAULT_PROGRESS_FILE;
use crate::error::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_progress_file")]
    pub progress_file: PathBuf,
    #[serde(default)]
    pub last_completed_date: Option<String>,
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_progress_file() -> PathBuf {
    PathBuf::from(DEFAULT_PROGRESS_FILE)
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            progress_file: default_progress_file(),
            last_completed_date: None,
            current_streak: 0,
            longest_streak: 0,
        }
    }
}

impl UserConfig {
    /// Updates the daily streak for a challenge completed at `now`.
    /// Several completions on one day count once.
    pub fn record_completion(&mut self, now: DateTime<Local>) {
        let today = now.format(DATE_FORMAT).to_string();
        let yesterday = (now - Duration::days(1)).format(DATE_FORMAT).to_string();

        let streak = match self.last_completed_date.as_deref() {
            Some(last) if last == today => self.current_streak.max(1),
            Some(last) if last == yesterday => self.current_streak + 1,
            _ => 1,
        };

        self.current_streak = streak;
        if streak > self.longest_streak {
            self.longest_streak = streak;
        }
        self.last_completed_date = Some(today);
    }

    pub fn completed_today(&self, now: DateTime<Local>) -> bool {
        let today = now.format(DATE_FORMAT).to_string();
        self.last_completed_date.as_deref() == Some(today.as_str())
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".config").join("luau-practice").join("config.json"))
}

pub fn load_config() -> UserConfig {
    let path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "using default config");
            return UserConfig::default();
        }
    };
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "malformed config, using defaults");
            UserConfig::default()
        }),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
            UserConfig::default()
        }
    }
}

pub fn save_config(config: &UserConfig) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let contents = serde_json::to_string_pretty(config)?;
    fs::write(&path, contents).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "config saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_first_completion_starts_streak() {
        let mut config = UserConfig::default();
        config.record_completion(at(2024, 3, 10));
        assert_eq!(config.current_streak, 1);
        assert_eq!(config.longest_streak, 1);
        assert_eq!(config.last_completed_date.as_deref(), Some("2024-03-10"));
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let mut config = UserConfig::default();
        config.record_completion(at(2024, 3, 10));
        config.record_completion(at(2024, 3, 11));
        config.record_completion(at(2024, 3, 11));
        config.record_completion(at(2024, 3, 12));
        assert_eq!(config.current_streak, 3);
        assert_eq!(config.longest_streak, 3);
    }

    #[test]
    fn test_gap_resets_streak_but_keeps_longest() {
        let mut config = UserConfig::default();
        config.record_completion(at(2024, 3, 10));
        config.record_completion(at(2024, 3, 11));
        config.record_completion(at(2024, 3, 20));
        assert_eq!(config.current_streak, 1);
        assert_eq!(config.longest_streak, 2);
        assert!(config.completed_today(at(2024, 3, 20)));
        assert!(!config.completed_today(at(2024, 3, 21)));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: UserConfig = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.progress_file, PathBuf::from("progress.dat"));
        assert_eq!(config.current_streak, 0);
    }
}
