//! ANSI syntax highlighting for Luau snippets.
//!
//! The source is split into spans in one pass and every span is colored at
//! most once, so a keyword inside a string or comment keeps the string or
//! comment color and escape codes are never re-scanned.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

const RESET: &str = "\x1b[0m";

pub const RESERVED_WORDS: &[&str] = &[
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
    "continue", "export", "type",
];

pub const API_IDENTIFIERS: &[&str] = &[
    "Instance", "Vector3", "CFrame", "Color3", "UDim2", "Enum", "workspace", "game", "script",
    "print", "warn", "wait", "Part", "Model", "Workspace", "Players", "ReplicatedStorage",
    "ServerScriptService", "StarterPlayer", "Humanoid",
];

// Alternation order matters only at equal start positions: a comment or
// string opening earlier in the text always wins over anything inside it.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?P<comment>--[^\n]*)|(?P<string>"[^"]*")|(?P<decimal>\b[0-9]+\.[0-9]+\b)|(?P<word>[A-Za-z0-9_]+)"#,
    )
    .expect("token pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Api,
    String,
    Comment,
    Number,
    Plain,
}

impl TokenKind {
    fn color(self) -> Option<&'static str> {
        match self {
            Self::Keyword => Some("\x1b[1;35m"),
            Self::Api => Some("\x1b[1;36m"),
            Self::String => Some("\x1b[1;32m"),
            Self::Comment => Some("\x1b[2;37m"),
            Self::Number => Some("\x1b[1;33m"),
            Self::Plain => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

fn classify_word(word: &str) -> TokenKind {
    if RESERVED_WORDS.contains(&word) {
        TokenKind::Keyword
    } else if API_IDENTIFIERS.contains(&word) {
        TokenKind::Api
    } else if word.bytes().all(|b| b.is_ascii_digit()) {
        TokenKind::Number
    } else {
        TokenKind::Plain
    }
}

/// Splits `code` into classified spans. Concatenating the span texts gives
/// back `code` exactly.
pub fn tokenize(code: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in TOKEN_RE.captures_iter(code) {
        let (kind, m) = if let Some(m) = caps.name("comment") {
            (TokenKind::Comment, m)
        } else if let Some(m) = caps.name("string") {
            (TokenKind::String, m)
        } else if let Some(m) = caps.name("decimal") {
            (TokenKind::Number, m)
        } else if let Some(m) = caps.name("word") {
            (classify_word(m.as_str()), m)
        } else {
            continue;
        };

        if m.start() > last {
            tokens.push(Token {
                kind: TokenKind::Plain,
                text: &code[last..m.start()],
            });
        }
        tokens.push(Token {
            kind,
            text: m.as_str(),
        });
        last = m.end();
    }

    if last < code.len() {
        tokens.push(Token {
            kind: TokenKind::Plain,
            text: &code[last..],
        });
    }
    tokens
}

#[derive(Debug, Clone)]
pub struct Highlighter {
    theme: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
        }
    }
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Records the theme name. Only the default palette exists, so rendering
    /// is unaffected.
    pub fn set_theme(&mut self, theme: &str) {
        debug!(theme, "theme selected");
        self.theme = theme.to_string();
    }

    pub fn highlight(&self, code: &str) -> String {
        let mut out = String::with_capacity(code.len() * 2);
        for token in tokenize(code) {
            match token.kind.color() {
                Some(color) => {
                    out.push_str(color);
                    out.push_str(token.text);
                    out.push_str(RESET);
                }
                None => out.push_str(token.text),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds<'a>(tokens: &[Token<'a>]) -> Vec<(TokenKind, &'a str)> {
        tokens
            .iter()
            .filter(|t| t.kind != TokenKind::Plain)
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(RESERVED_WORDS.len(), 24);
        assert_eq!(API_IDENTIFIERS.len(), 20);
        assert!(RESERVED_WORDS.iter().all(|w| !API_IDENTIFIERS.contains(w)));
    }

    #[test]
    fn test_local_assignment_with_comment() {
        let out = Highlighter::new().highlight("local x = 1 -- set x");
        assert_eq!(
            out,
            "\x1b[1;35mlocal\x1b[0m x = \x1b[1;33m1\x1b[0m \x1b[2;37m-- set x\x1b[0m"
        );
    }

    #[test]
    fn test_keywords_inside_strings_and_comments_stay_put() {
        let tokens = tokenize("print(\"if then end\") -- while true do");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Api, "print"),
                (TokenKind::String, "\"if then end\""),
                (TokenKind::Comment, "-- while true do"),
            ]
        );
    }

    #[test]
    fn test_comment_marker_inside_string() {
        let tokens = tokenize("local s = \"a -- b\"");
        assert_eq!(
            kinds(&tokens),
            vec![(TokenKind::Keyword, "local"), (TokenKind::String, "\"a -- b\"")]
        );
    }

    #[test]
    fn test_whole_words_only() {
        let tokens = tokenize("local endTime = ifx + Players2");
        assert_eq!(kinds(&tokens), vec![(TokenKind::Keyword, "local")]);
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("x = 3.14 + 42 + v1 + 1e");
        assert_eq!(
            kinds(&tokens),
            vec![(TokenKind::Number, "3.14"), (TokenKind::Number, "42")]
        );
    }

    #[test]
    fn test_comment_ends_at_newline() {
        let tokens = tokenize("-- note\nwait(1)");
        assert_eq!(
            kinds(&tokens),
            vec![
                (TokenKind::Comment, "-- note"),
                (TokenKind::Api, "wait"),
                (TokenKind::Number, "1"),
            ]
        );
    }

    #[test]
    fn test_tokens_cover_input() {
        let code = "local part = Instance.new(\"Part\")\npart.Parent = workspace -- done\n";
        let joined: String = tokenize(code).iter().map(|t| t.text).collect();
        assert_eq!(joined, code);
    }

    #[test]
    fn test_no_nested_escapes() {
        let out = Highlighter::new().highlight("if x then print(\"end\") end -- 10 end");
        // Every opening sequence is closed before the next one starts.
        let mut open = false;
        for part in out.split('\x1b').skip(1) {
            if part.starts_with("[0m") {
                assert!(open);
                open = false;
            } else {
                assert!(!open, "nested escape in {:?}", out);
                open = true;
            }
        }
        assert!(!open);
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(Highlighter::new().highlight("x + y"), "x + y");
        assert_eq!(Highlighter::new().highlight(""), "");
    }

    #[test]
    fn test_set_theme_does_not_change_output() {
        let mut highlighter = Highlighter::new();
        let before = highlighter.highlight("local n = 5");
        highlighter.set_theme("solarized");
        assert_eq!(highlighter.theme(), "solarized");
        assert_eq!(highlighter.highlight("local n = 5"), before);
    }
}
