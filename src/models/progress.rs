use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

pub const DEFAULT_PROGRESS_FILE: &str = "progress.dat";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserProgress {
    pub challenges_completed: u32,
    pub completed_challenge_ids: Vec<String>,
    /// Completions per tier for the current session. Not persisted.
    pub category_progress: BTreeMap<String, u32>,
}

impl UserProgress {
    pub fn is_completed(&self, challenge_id: &str) -> bool {
        self.completed_challenge_ids.iter().any(|id| id == challenge_id)
    }

    pub fn percent_of(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.challenges_completed as f64 * 100.0 / total as f64
    }
}

/// Completed challenges, persisted as a flat file: the count on the first
/// line, then one challenge id per line in completion order.
///
/// Persistence is best effort. Read and write failures are logged and
/// otherwise ignored so a broken progress file never blocks practice.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    progress: UserProgress,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when `challenge_id` was not already completed.
    pub fn mark_challenge_complete(&mut self, challenge_id: &str) -> bool {
        if self.progress.is_completed(challenge_id) {
            debug!(challenge_id, "challenge already completed");
            return false;
        }
        self.progress
            .completed_challenge_ids
            .push(challenge_id.to_string());
        self.progress.challenges_completed += 1;
        info!(challenge_id, total = self.progress.challenges_completed, "challenge completed");
        true
    }

    /// Like [`mark_challenge_complete`](Self::mark_challenge_complete), also
    /// bumping the counter for `category` when the id is new.
    pub fn mark_challenge_complete_in(&mut self, challenge_id: &str, category: &str) -> bool {
        let added = self.mark_challenge_complete(challenge_id);
        if added {
            *self
                .progress
                .category_progress
                .entry(category.to_string())
                .or_insert(0) += 1;
        }
        added
    }

    pub fn get_progress(&self) -> &UserProgress {
        &self.progress
    }

    pub fn save_progress(&self, path: &Path) {
        let mut contents = format!("{}\n", self.progress.challenges_completed);
        for id in &self.progress.completed_challenge_ids {
            contents.push_str(id);
            contents.push('\n');
        }

        match fs::write(path, contents) {
            Ok(()) => debug!(path = %path.display(), "progress saved"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to save progress"),
        }
    }

    /// Ids from the file are appended as-is; the file is trusted and not
    /// deduplicated. A missing file leaves the tracker untouched.
    pub fn load_progress(&mut self, path: &Path) {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no progress loaded");
                return;
            }
        };

        let mut lines = contents.lines();
        let header = lines.next().unwrap_or("").trim();
        match header.parse::<u32>() {
            Ok(count) => {
                self.progress.challenges_completed = count;
                self.progress
                    .completed_challenge_ids
                    .extend(lines.map(str::to_string));
                debug!(path = %path.display(), count, "progress loaded");
            }
            Err(_) => {
                warn!(path = %path.display(), header, "malformed progress file, count reset");
                self.progress.challenges_completed = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mark_is_idempotent() {
        let mut tracker = ProgressTracker::new();
        assert!(tracker.mark_challenge_complete("hello_world"));
        assert!(!tracker.mark_challenge_complete("hello_world"));

        let progress = tracker.get_progress();
        assert_eq!(progress.challenges_completed, 1);
        assert_eq!(progress.completed_challenge_ids, vec!["hello_world"]);
    }

    #[test]
    fn test_count_tracks_ids() {
        let mut tracker = ProgressTracker::new();
        for id in ["a", "b", "a", "c", "b"] {
            tracker.mark_challenge_complete(id);
            let p = tracker.get_progress();
            assert_eq!(p.challenges_completed as usize, p.completed_challenge_ids.len());
        }
        assert_eq!(tracker.get_progress().completed_challenge_ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_category_counter_only_on_new_ids() {
        let mut tracker = ProgressTracker::new();
        tracker.mark_challenge_complete_in("hello_world", "beginner");
        tracker.mark_challenge_complete_in("hello_world", "beginner");
        tracker.mark_challenge_complete_in("tween_basic", "intermediate");
        let cats = &tracker.get_progress().category_progress;
        assert_eq!(cats.get("beginner"), Some(&1));
        assert_eq!(cats.get("intermediate"), Some(&1));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.dat");

        let mut tracker = ProgressTracker::new();
        tracker.mark_challenge_complete("loop_practice");
        tracker.mark_challenge_complete("hello_world");
        tracker.mark_challenge_complete("tween_basic");
        tracker.save_progress(&path);

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "3\nloop_practice\nhello_world\ntween_basic\n"
        );

        let mut restored = ProgressTracker::new();
        restored.load_progress(&path);
        assert_eq!(restored.get_progress().challenges_completed, 3);
        assert_eq!(
            restored.get_progress().completed_challenge_ids,
            vec!["loop_practice", "hello_world", "tween_basic"]
        );
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.dat");
        fs::write(&path, "9\nold\nstuff\nhere\n").unwrap();

        let mut tracker = ProgressTracker::new();
        tracker.mark_challenge_complete("hello_world");
        tracker.save_progress(&path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "1\nhello_world\n");
    }

    #[test]
    fn test_missing_file_keeps_defaults() {
        let dir = tempdir().unwrap();
        let mut tracker = ProgressTracker::new();
        tracker.load_progress(&dir.path().join("missing.dat"));
        assert_eq!(tracker.get_progress(), &UserProgress::default());
    }

    #[test]
    fn test_save_to_unwritable_path_is_silent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("progress.dat");
        let mut tracker = ProgressTracker::new();
        tracker.mark_challenge_complete("hello_world");
        tracker.save_progress(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_load_trusts_file_duplicates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.dat");
        fs::write(&path, "2\nhello_world\nhello_world\n").unwrap();

        let mut tracker = ProgressTracker::new();
        tracker.load_progress(&path);
        assert_eq!(tracker.get_progress().challenges_completed, 2);
        assert_eq!(tracker.get_progress().completed_challenge_ids.len(), 2);
    }

    #[test]
    fn test_load_malformed_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.dat");
        fs::write(&path, "lots\nhello_world\n").unwrap();

        let mut tracker = ProgressTracker::new();
        tracker.load_progress(&path);
        assert_eq!(tracker.get_progress().challenges_completed, 0);
        assert!(tracker.get_progress().completed_challenge_ids.is_empty());
    }

    #[test]
    fn test_percent() {
        let mut tracker = ProgressTracker::new();
        tracker.mark_challenge_complete("a");
        assert_eq!(tracker.get_progress().percent_of(10), 10.0);
        assert_eq!(tracker.get_progress().percent_of(0), 0.0);
    }
}
