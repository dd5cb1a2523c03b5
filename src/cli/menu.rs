use std::io::{self, BufRead};
use std::path::PathBuf;

use chrono::Local;
use tracing::{info, warn};

use super::progress_cmd::{completed_titles, print_streak};
use super::prompt::{clear_screen, parse_index, Prompt};
use super::Session;
use crate::display::{
    display_analysis, display_challenge, display_challenge_line, display_code, display_hints,
    display_progress, display_snippet, display_snippet_list, heading, CYAN, GREEN, MAGENTA, RED,
    RESET, YELLOW,
};
use crate::luau::{analyze, Highlighter};
use crate::models::config::{self, UserConfig};
use crate::models::{Challenge, ChallengeCatalog, ProgressTracker, SnippetLibrary, Tier, UserProgress};

const BANNER: &str = r#"
    ╔═══════════════════════════════════════════════════════════════╗
    ║                                                               ║
    ║              L U A U   P R A C T I C E                        ║
    ║                                                               ║
    ║           Roblox Luau Scripting Practice Platform             ║
    ║                                                               ║
    ╚═══════════════════════════════════════════════════════════════╝
"#;

pub fn run_interactive(session: Session) {
    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), session);
    app.persist_config = true;
    app.run();
}

pub struct App<R> {
    prompt: Prompt<R>,
    config: UserConfig,
    progress_path: PathBuf,
    tracker: ProgressTracker,
    highlighter: Highlighter,
    challenges: ChallengeCatalog,
    snippets: SnippetLibrary,
    persist_config: bool,
}

impl<R: BufRead> App<R> {
    pub fn new(input: R, session: Session) -> Self {
        let mut highlighter = Highlighter::new();
        highlighter.set_theme(&session.config.theme);
        Self {
            prompt: Prompt::new(input),
            config: session.config,
            progress_path: session.progress_path,
            tracker: session.tracker,
            highlighter,
            challenges: ChallengeCatalog::new(),
            snippets: SnippetLibrary::new(),
            persist_config: false,
        }
    }

    pub fn progress(&self) -> &UserProgress {
        self.tracker.get_progress()
    }

    pub fn run(&mut self) {
        while !self.prompt.is_closed() {
            self.display_main_menu();
            let choice = self.prompt.read_line("Enter your choice: ");
            match choice.trim() {
                "1" => self.practice_mode(),
                "2" => self.challenge_mode(),
                "3" => self.snippet_browser(),
                "4" => self.analyze_code(),
                "5" => self.show_progress(),
                "6" => self.show_help(),
                "7" => break,
                _ if self.prompt.is_closed() => break,
                _ => {
                    println!("\n{}Invalid choice. Please try again.{}", RED, RESET);
                    self.prompt.pause();
                }
            }
        }

        clear_screen();
        println!("\n{}Thank you for using Luau Practice!{}", CYAN, RESET);
        println!("Keep coding and happy developing! 🚀\n");
    }

    fn display_main_menu(&self) {
        clear_screen();
        println!("{}{}{}", CYAN, BANNER, RESET);
        println!(
            "\n  {}📊 Progress: {} challenges completed{}\n",
            YELLOW,
            self.progress().challenges_completed,
            RESET
        );
        println!("  {}MAIN MENU{}", GREEN, RESET);
        println!("  1. 📝 Practice Mode (Free Coding)");
        println!("  2. 🎯 Challenge Mode (Guided Challenges)");
        println!("  3. 📚 Code Snippet Library");
        println!("  4. 🔍 Code Analyzer");
        println!("  5. 📈 View Progress");
        println!("  6. ❓ Help & Documentation");
        println!("  7. 🚪 Exit\n");
    }

    fn practice_mode(&mut self) {
        clear_screen();
        heading("PRACTICE MODE");
        println!("Enter your Luau code below. Type 'END' on a new line when finished.");
        println!("Type 'ANALYZE' to analyze your code.");
        println!("Type 'BACK' to return to main menu.\n");

        let mut code = String::new();
        loop {
            let line = self.prompt.read_line("> ");
            if self.prompt.is_closed() {
                return;
            }
            match line.as_str() {
                "END" => break,
                "BACK" => return,
                "ANALYZE" => {
                    if code.is_empty() {
                        println!("Nothing to analyze yet.");
                        continue;
                    }
                    let result = analyze(&code);
                    print!("\n{}Quick Analysis:{} Complexity: {}", CYAN, RESET, result.complexity);
                    if !result.warnings.is_empty() {
                        print!(", {} warning(s)", result.warnings.len());
                    }
                    println!();
                }
                _ => {
                    code.push_str(&line);
                    code.push('\n');
                }
            }
        }

        if code.is_empty() {
            return;
        }

        println!("\n{}✓ Code saved!{}", GREEN, RESET);
        display_code(&self.highlighter, &code);
        println!("\nWhat would you like to do?");
        println!("1. Analyze code");
        println!("2. Start new code");
        println!("3. Back to menu");

        match self.prompt.read_line("\nChoice: ").trim() {
            "1" => {
                display_analysis(&analyze(&code));
                self.prompt.pause();
            }
            "2" => self.practice_mode(),
            _ => {}
        }
    }

    fn challenge_mode(&mut self) {
        while !self.prompt.is_closed() {
            clear_screen();
            heading("CHALLENGE MODE");
            println!("Select difficulty level:");
            println!("  1. {} Beginner (Difficulty 1-2)", Tier::Beginner.stars());
            println!("  2. {} Intermediate (Difficulty 3-4)", Tier::Intermediate.stars());
            println!("  3. {} Advanced (Difficulty 5)", Tier::Advanced.stars());
            println!("  4. 📋 View all challenges");
            println!("  5. ← Back to main menu\n");

            let filtered = match self.prompt.read_line("Choice: ").trim() {
                "1" => self.challenges.challenges_in_tier(Tier::Beginner),
                "2" => self.challenges.challenges_in_tier(Tier::Intermediate),
                "3" => self.challenges.challenges_in_tier(Tier::Advanced),
                "4" => self.challenges.get_all_challenges(),
                "5" => return,
                _ => continue,
            };

            clear_screen();
            heading("AVAILABLE CHALLENGES");
            for (i, challenge) in filtered.iter().enumerate() {
                display_challenge_line(i + 1, challenge, self.progress().is_completed(&challenge.id));
            }
            println!("  0. ← Back\n");

            let choice = self.prompt.read_line("Select challenge: ");
            if let Some(idx) = parse_index(&choice, filtered.len()) {
                self.attempt_challenge(&filtered[idx]);
            }
        }
    }

    fn attempt_challenge(&mut self, challenge: &Challenge) {
        clear_screen();
        display_challenge(&self.highlighter, challenge);

        println!("\nOptions:");
        println!("  1. 💻 Start coding");
        println!("  2. 💡 Show hints");
        println!("  3. 🔍 Show solution");
        println!("  4. ← Back\n");

        match self.prompt.read_line("Choice: ").trim() {
            "1" => {
                println!("\n{}Enter your solution (type 'END' when done):{}\n", YELLOW, RESET);
                let solution = self.prompt.read_block();
                if self.challenges.validate_solution(&challenge.id, &solution) {
                    println!("\n{}🎉 Correct! Challenge completed!{}", GREEN, RESET);
                    self.complete_challenge(challenge);
                } else {
                    println!(
                        "\n{}⚠️  Not quite right. Try again or check the hints!{}",
                        YELLOW, RESET
                    );
                }
                self.prompt.pause();
            }
            "2" => {
                display_hints(challenge);
                self.prompt.pause();
            }
            "3" => {
                println!("\n{}🔍 Solution:{}", MAGENTA, RESET);
                display_code(&self.highlighter, &challenge.solution);
                self.prompt.pause();
            }
            _ => {}
        }
    }

    fn complete_challenge(&mut self, challenge: &Challenge) {
        let category = Tier::for_difficulty(challenge.difficulty)
            .map(|t| t.as_str())
            .unwrap_or("other");
        let newly_completed = self.tracker.mark_challenge_complete_in(&challenge.id, category);
        self.tracker.save_progress(&self.progress_path);

        if !newly_completed {
            return;
        }
        self.config.record_completion(Local::now());
        info!(streak = self.config.current_streak, "streak updated");
        if self.persist_config {
            if let Err(e) = config::save_config(&self.config) {
                warn!(error = %e, "failed to save streak");
            }
        }
    }

    fn snippet_browser(&mut self) {
        while !self.prompt.is_closed() {
            clear_screen();
            heading("CODE SNIPPET LIBRARY");

            let categories = self.snippets.get_categories();
            println!("Browse by category:");
            for (i, category) in categories.iter().enumerate() {
                println!("  {}. {}", i + 1, category);
            }
            let search_choice = categories.len() + 1;
            println!("  {}. 🔍 Search snippets", search_choice);
            println!("  0. ← Back to main menu\n");

            let choice = self.prompt.read_line("Choice: ");
            let choice = choice.trim();
            if choice == "0" || self.prompt.is_closed() {
                return;
            }

            if let Some(idx) = parse_index(choice, categories.len()) {
                self.browse_category(&categories[idx]);
            } else if choice == search_choice.to_string() {
                self.search_snippets();
            }
        }
    }

    fn browse_category(&mut self, category: &str) {
        let snippets = self.snippets.get_snippets_by_category(category);

        clear_screen();
        heading(&format!("{} Snippets", category));
        display_snippet_list(&snippets);
        println!("  0. ← Back\n");

        let choice = self.prompt.read_line("Select snippet to view: ");
        if let Some(idx) = parse_index(&choice, snippets.len()) {
            clear_screen();
            display_snippet(&self.highlighter, &snippets[idx]);
            self.prompt.pause();
        }
    }

    fn search_snippets(&mut self) {
        let query = self.prompt.read_line("\nEnter search term: ");
        let results = self.snippets.search_snippets(&query);

        if results.is_empty() {
            println!("\n{}No snippets found matching '{}'{}", YELLOW, query, RESET);
        } else {
            clear_screen();
            heading(&format!("Search Results for '{}'", query));
            display_snippet_list(&results);
        }
        self.prompt.pause();
    }

    fn analyze_code(&mut self) {
        clear_screen();
        heading("CODE ANALYZER");
        println!("Enter your Luau code. Type 'END' on a new line when finished.\n");

        let code = self.prompt.read_block();
        if !code.is_empty() {
            display_analysis(&analyze(&code));
        }
        self.prompt.pause();
    }

    fn show_progress(&mut self) {
        clear_screen();
        heading("YOUR PROGRESS");
        let progress = self.tracker.get_progress();
        display_progress(
            progress,
            self.challenges.len(),
            &completed_titles(&self.challenges, &progress.completed_challenge_ids),
        );
        print_streak(&self.config);
        self.prompt.pause();
    }

    fn show_help(&mut self) {
        clear_screen();
        heading("HELP & DOCUMENTATION");

        println!("📚 {}Luau Basics:{}", YELLOW, RESET);
        println!("  • Variables: local myVar = 10");
        println!("  • Functions: local function myFunc() end");
        println!("  • Conditionals: if condition then ... end");
        println!("  • Loops: for i = 1, 10 do ... end");
        println!("  • Tables: local myTable = {{1, 2, 3}}\n");

        println!("🎮 {}Common Roblox Objects:{}", YELLOW, RESET);
        println!("  • workspace: The 3D game world");
        println!("  • game.Players: Player management");
        println!("  • ReplicatedStorage: Shared objects");
        println!("  • ServerScriptService: Server-side scripts\n");

        println!("💡 {}Useful Functions:{}", YELLOW, RESET);
        println!("  • print(message): Output to console");
        println!("  • task.wait(seconds): Pause execution");
        println!("  • Instance.new(className): Create object");
        println!("  • :Connect(function): Connect to events\n");

        println!("🔗 {}Resources:{}", YELLOW, RESET);
        println!("  • Roblox Creator Hub: https://create.roblox.com/docs");
        println!("  • Luau Documentation: https://luau-lang.org");
        println!("  • DevForum: https://devforum.roblox.com\n");

        println!(
            "🎨 Highlight theme: {} (change with `luau-practice theme <name>`)\n",
            self.highlighter.theme()
        );

        self.prompt.pause();
    }
}
