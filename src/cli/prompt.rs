use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::warn;

/// Line terminator for multi-line code entry.
pub const END_MARKER: &str = "END";

/// Line-oriented reader for the interactive menus. Once input runs out every
/// read returns an empty string and `is_closed` turns true, which callers
/// treat as a request to leave.
pub struct Prompt<R> {
    input: R,
    closed: bool,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn read_line(&mut self, prompt: &str) -> String {
        print!("{}", prompt);
        let _ = io::stdout().flush();

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.closed = true;
                String::new()
            }
            Ok(_) => line.trim_end_matches(&['\n', '\r'][..]).to_string(),
            Err(e) => {
                warn!(error = %e, "input closed");
                self.closed = true;
                String::new()
            }
        }
    }

    /// Reads lines until `END`, returning them newline-terminated.
    pub fn read_block(&mut self) -> String {
        let mut code = String::new();
        loop {
            let line = self.read_line("> ");
            if self.closed || line == END_MARKER {
                return code;
            }
            code.push_str(&line);
            code.push('\n');
        }
    }

    pub fn pause(&mut self) {
        self.read_line("Press Enter to continue...");
    }
}

pub fn clear_screen() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

/// Turns a 1-based menu choice into an index into a list of `len` items.
pub fn parse_index(choice: &str, len: usize) -> Option<usize> {
    choice
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_block_stops_at_end() {
        let mut prompt = Prompt::new(Cursor::new("local x = 1\r\nprint(x)\nEND\nafter\n"));
        assert_eq!(prompt.read_block(), "local x = 1\nprint(x)\n");
        assert_eq!(prompt.read_line(""), "after");
        assert!(!prompt.is_closed());
    }

    #[test]
    fn test_eof_closes() {
        let mut prompt = Prompt::new(Cursor::new("print(1)\n"));
        assert_eq!(prompt.read_block(), "print(1)\n");
        assert!(prompt.is_closed());
        assert_eq!(prompt.read_line(""), "");
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("1", 3), Some(0));
        assert_eq!(parse_index(" 3 ", 3), Some(2));
        assert_eq!(parse_index("0", 3), None);
        assert_eq!(parse_index("4", 3), None);
        assert_eq!(parse_index("abc", 3), None);
        assert_eq!(parse_index("-1", 3), None);
    }
}
