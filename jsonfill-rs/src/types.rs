//! Core types shared by the engine and the CLI.

use crate::error::PathError;
use serde::Serialize;
use std::fmt;

/// One access step of a compiled path expression.
///
/// The token keeps its raw text; whether it is a map key or an array index
/// is only decided when it is applied to a value (see [`PathToken::kind`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PathToken(String);

/// How a token is applied during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'a> {
    /// Array element access. `None` when the numeral does not fit in `usize`.
    Index(Option<usize>),
    /// Object member access.
    Key(&'a str),
}

impl PathToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classify the token: all-ASCII-digit text is an index, anything else a key.
    pub fn kind(&self) -> TokenKind<'_> {
        if !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit()) {
            TokenKind::Index(self.0.parse().ok())
        } else {
            TokenKind::Key(&self.0)
        }
    }
}

impl fmt::Display for PathToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathToken {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// A placeholder located in source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Byte offset of the start delimiter.
    pub start: usize,
    /// Byte offset just past the end delimiter.
    pub end: usize,
    /// 1-based line of `start`.
    pub line: usize,
    /// Byte column of `start` within its line.
    pub column: usize,
    /// Body between the delimiters, whitespace included.
    pub raw: String,
    /// Trimmed path expression.
    pub path: String,
    /// Compiled tokens, or the reason the path could not be compiled.
    pub tokens: std::result::Result<Vec<PathToken>, PathError>,
}

impl Placeholder {
    /// The full matched text, delimiters included.
    pub fn matched<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

/// Output of a substitution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubstitutionResult {
    pub text: String,
    pub found_count: usize,
    pub replaced_count: usize,
    pub unresolved_paths: Vec<String>,
}

/// Options for a substitution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstituteOptions {
    /// Fail on the first unresolved placeholder, or when none are found.
    pub error_on_missing: bool,
}

impl SubstituteOptions {
    pub fn strict() -> Self {
        Self {
            error_on_missing: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_kind() {
        assert_eq!(PathToken::from("0").kind(), TokenKind::Index(Some(0)));
        assert_eq!(PathToken::from("42").kind(), TokenKind::Index(Some(42)));
        assert_eq!(PathToken::from("name").kind(), TokenKind::Key("name"));
        assert_eq!(PathToken::from("-1").kind(), TokenKind::Key("-1"));
        assert_eq!(PathToken::from("1a").kind(), TokenKind::Key("1a"));
        assert_eq!(PathToken::from("").kind(), TokenKind::Key(""));
    }

    #[test]
    fn test_huge_index_has_no_value() {
        let token = PathToken::from("99999999999999999999999999");
        assert_eq!(token.kind(), TokenKind::Index(None));
    }

    #[test]
    fn test_placeholder_matched() {
        let text = "a {{ x }} b";
        let placeholder = Placeholder {
            start: 2,
            end: 9,
            line: 1,
            column: 2,
            raw: " x ".to_string(),
            path: "x".to_string(),
            tokens: Ok(vec![PathToken::from("x")]),
        };
        assert_eq!(placeholder.matched(text), "{{ x }}");
    }
}
