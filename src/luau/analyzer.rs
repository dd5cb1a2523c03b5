//! Heuristic checks over raw Luau source.
//!
//! Nothing here tokenizes. Every check is a substring test on the whole text
//! or on single lines, so keywords inside identifiers, strings and comments
//! all count. The results are hints for learners, not diagnostics.

use serde::Serialize;

const BLOCK_OPENERS: [&str; 4] = ["function", "if", "for", "while"];
const BRANCH_KEYWORDS: [&str; 4] = ["if", "for", "while", "function"];

pub const SYNTAX_ERROR: &str = "Syntax error detected in code";
pub const ASSIGNMENT_IN_CONDITION: &str =
    "Possible assignment operator (=) used in condition instead of comparison (==)";
pub const PREFER_WAIT_FOR_CHILD: &str =
    "Consider using WaitForChild instead of FindFirstChild for more reliable code";
pub const PREFER_TASK_WAIT: &str =
    "Consider using task.wait() instead of wait() for better performance";
pub const INFINITE_LOOP: &str = "Infinite loop detected - ensure proper break conditions";
pub const LOCAL_PLAYER_CLIENT_ONLY: &str = "LocalPlayer should only be accessed from LocalScripts";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
    pub complexity: u32,
}

impl AnalysisResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }
}

pub fn analyze(code: &str) -> AnalysisResult {
    let mut result = AnalysisResult {
        complexity: complexity(code),
        ..Default::default()
    };

    if !blocks_balanced(code) {
        result.errors.push(SYNTAX_ERROR.to_string());
    }

    result.warnings.extend(common_mistakes(code));

    if code.contains("wait()") {
        result.suggestions.push(PREFER_TASK_WAIT.to_string());
    }
    if code.contains("while true do") {
        result.warnings.push(INFINITE_LOOP.to_string());
    }
    if code.contains("game.Players.LocalPlayer") {
        result.suggestions.push(LOCAL_PLAYER_CLIENT_ONLY.to_string());
    }

    result
}

/// +1 for each line mentioning a block opener, -1 for each line mentioning
/// `end`. A line can do both.
fn blocks_balanced(code: &str) -> bool {
    let mut balance: i64 = 0;
    for line in code.lines() {
        if BLOCK_OPENERS.iter().any(|kw| line.contains(kw)) {
            balance += 1;
        }
        if line.contains("end") {
            balance -= 1;
        }
    }
    balance == 0
}

fn common_mistakes(code: &str) -> Vec<String> {
    let mut mistakes = Vec::new();

    if code.contains('=') && !code.contains("==") && code.contains("if") {
        mistakes.push(ASSIGNMENT_IN_CONDITION.to_string());
    }

    if code.contains("FindFirstChild") && !code.contains("WaitForChild") {
        mistakes.push(PREFER_WAIT_FOR_CHILD.to_string());
    }

    mistakes
}

fn complexity(code: &str) -> u32 {
    let newlines = code.matches('\n').count() as u32;
    let branches: u32 = code
        .lines()
        .map(|line| BRANCH_KEYWORDS.iter().filter(|kw| line.contains(*kw)).count() as u32)
        .sum();
    1 + newlines / 10 + branches
}
