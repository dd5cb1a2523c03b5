mod analyze;
mod catalog;
mod menu;
mod progress_cmd;
mod prompt;

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::cli::catalog::ChallengeFilter;
use crate::error::Error;
use crate::models::config::{self, UserConfig};
use crate::models::{ProgressTracker, Tier};

#[derive(Parser)]
#[command(name = "luau-practice")]
#[command(about = "Practice Roblox Luau scripting from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Progress file to read and write instead of the configured one
    #[arg(long, global = true)]
    pub progress_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a Luau file ("-" reads stdin)
    Analyze {
        file: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Print a Luau file with syntax highlighting ("-" reads stdin)
    Highlight { file: PathBuf },
    /// List the built-in challenges
    Challenges {
        #[arg(long, value_enum, conflicts_with = "difficulty")]
        tier: Option<Tier>,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        difficulty: Option<u8>,
        #[arg(long)]
        json: bool,
    },
    /// Show one challenge with its starter code
    Show { id: String },
    /// List or search code snippets
    Snippets {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show completed challenges and streak
    Progress {
        #[arg(long)]
        json: bool,
    },
    /// Show or set the highlighting theme name
    Theme { name: Option<String> },
}

/// Everything a command needs that comes from disk or flags.
pub struct Session {
    pub config: UserConfig,
    pub progress_path: PathBuf,
    pub tracker: ProgressTracker,
}

impl Session {
    fn load(progress_file: Option<PathBuf>) -> Self {
        let config = config::load_config();
        let progress_path = progress_file.unwrap_or_else(|| config.progress_file.clone());
        let mut tracker = ProgressTracker::new();
        tracker.load_progress(&progress_path);
        Self {
            config,
            progress_path,
            tracker,
        }
    }
}

fn init_logging(log_level: &str) {
    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("luau_practice={}", level.as_str().to_lowercase()))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

pub fn run(cli: Cli) {
    init_logging(&cli.log_level);
    let session = Session::load(cli.progress_file);

    let result = match cli.command {
        None => {
            menu::run_interactive(session);
            Ok(())
        }
        Some(Commands::Analyze { file, json }) => analyze::analyze_file(&file, json),
        Some(Commands::Highlight { file }) => analyze::highlight_file(&session.config, &file),
        Some(Commands::Challenges {
            tier,
            difficulty,
            json,
        }) => catalog::list_challenges(&session, ChallengeFilter::new(tier, difficulty), json),
        Some(Commands::Show { id }) => catalog::show_challenge(&session.config, &id),
        Some(Commands::Snippets {
            category,
            search,
            json,
        }) => catalog::list_snippets(category.as_deref(), search.as_deref(), json),
        Some(Commands::Progress { json }) => progress_cmd::show_progress(&session, json),
        Some(Commands::Theme { name }) => progress_cmd::handle_theme(session.config, name),
    };

    if let Err(e) = result {
        fail(e);
    }
}

fn fail(e: Error) -> ! {
    eprintln!("{}", e);
    std::process::exit(1);
}
