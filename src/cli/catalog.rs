use crate::display::{
    display_challenge, display_challenge_line, display_hints, display_snippet_list, heading,
};
use crate::error::{Error, Result};
use crate::luau::Highlighter;
use crate::models::config::UserConfig;
use crate::models::{Challenge, ChallengeCatalog, Snippet, SnippetLibrary, Tier};

use super::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeFilter {
    All,
    Tier(Tier),
    Difficulty(u8),
}

impl ChallengeFilter {
    pub fn new(tier: Option<Tier>, difficulty: Option<u8>) -> Self {
        match (tier, difficulty) {
            (Some(t), _) => ChallengeFilter::Tier(t),
            (None, Some(d)) => ChallengeFilter::Difficulty(d),
            (None, None) => ChallengeFilter::All,
        }
    }

    fn apply(self, catalog: &ChallengeCatalog) -> Vec<Challenge> {
        match self {
            ChallengeFilter::All => catalog.get_all_challenges(),
            ChallengeFilter::Tier(t) => catalog.challenges_in_tier(t),
            ChallengeFilter::Difficulty(d) => catalog.get_challenges_by_difficulty(d),
        }
    }
}

pub fn list_challenges(session: &Session, filter: ChallengeFilter, json: bool) -> Result<()> {
    let catalog = ChallengeCatalog::new();
    let challenges = filter.apply(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&challenges)?);
        return Ok(());
    }

    match filter {
        ChallengeFilter::Tier(t) => {
            heading(&format!("{} CHALLENGES", t.display_name().to_uppercase()))
        }
        ChallengeFilter::Difficulty(d) => heading(&format!("DIFFICULTY {} CHALLENGES", d)),
        ChallengeFilter::All => heading("ALL CHALLENGES"),
    }
    if challenges.is_empty() {
        println!("No challenges at this level yet.");
        return Ok(());
    }

    let progress = session.tracker.get_progress();
    for (i, challenge) in challenges.iter().enumerate() {
        display_challenge_line(i + 1, challenge, progress.is_completed(&challenge.id));
        println!("     id: {}\n", challenge.id);
    }
    Ok(())
}

pub fn show_challenge(config: &UserConfig, id: &str) -> Result<()> {
    let challenge: Challenge = ChallengeCatalog::new().get_challenge(id);
    if challenge.is_placeholder() {
        return Err(Error::UnknownChallenge(id.to_string()));
    }

    let mut highlighter = Highlighter::new();
    highlighter.set_theme(&config.theme);
    display_challenge(&highlighter, &challenge);
    display_hints(&challenge);
    Ok(())
}

/// Applies the category filter, then the title search, to the library.
fn select_snippets(
    library: &SnippetLibrary,
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<Snippet> {
    let mut snippets = match search {
        Some(q) => library.search_snippets(q),
        None => library.all().to_vec(),
    };
    if let Some(c) = category {
        snippets.retain(|s| s.category == c);
    }
    snippets
}

pub fn list_snippets(category: Option<&str>, search: Option<&str>, json: bool) -> Result<()> {
    let library = SnippetLibrary::new();
    let snippets = select_snippets(&library, category, search);

    if json {
        println!("{}", serde_json::to_string_pretty(&snippets)?);
        return Ok(());
    }

    if snippets.is_empty() {
        println!("No snippets found.");
        println!("Categories: {}", library.get_categories().join(", "));
        return Ok(());
    }
    display_snippet_list(&snippets);
    Ok(())
}
