//! Placeholder scanning (`{{ path.to.value }}` with configurable delimiters).

use crate::engine::path::compile;
use crate::error::{FillError, Result};
use crate::types::Placeholder;
use regex::Regex;

/// Default start delimiter.
pub const DEFAULT_START: &str = "{{";
/// Default end delimiter.
pub const DEFAULT_END: &str = "}}";

// Body: optional whitespace around [A-Za-z0-9_.$[\]-]+
// Anything else between the delimiters (spaces inside the path, quotes,
// parentheses) means the text is not a placeholder.
const BODY: &str = r"(\s*[A-Za-z0-9_.$\[\]\-]+\s*)";

/// A compiled placeholder matcher for one pair of delimiters.
#[derive(Debug, Clone)]
pub struct PlaceholderMatcher {
    start: String,
    end: String,
    pattern: Regex,
}

impl PlaceholderMatcher {
    /// Build a matcher. Delimiters are literal text, never regex syntax.
    pub fn new(start: &str, end: &str) -> Result<Self> {
        if start.is_empty() || end.is_empty() {
            return Err(FillError::InvalidDelimiter(
                "start and end delimiters must not be empty".to_string(),
            ));
        }

        let pattern = Regex::new(&format!(
            "{}{}{}",
            regex::escape(start),
            BODY,
            regex::escape(end)
        ))?;

        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
            pattern,
        })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Locate all placeholders in `text`, left to right, non-overlapping.
    pub fn scan(&self, text: &str) -> Vec<Placeholder> {
        let mut placeholders = Vec::new();
        let mut line = 1;
        let mut counted = 0;
        let mut line_start = 0;

        for cap in self.pattern.captures_iter(text) {
            let full_match = cap.get(0).unwrap();
            let start = full_match.start();
            let raw = cap.get(1).map(|m| m.as_str()).unwrap_or("");
            let path = raw.trim();

            // Matches are ordered, so only the text since the last match is examined
            let gap = &text[counted..start];
            line += gap.matches('\n').count();
            if let Some(i) = gap.rfind('\n') {
                line_start = counted + i + 1;
            }
            counted = start;

            placeholders.push(Placeholder {
                start,
                end: full_match.end(),
                line,
                column: start - line_start,
                raw: raw.to_string(),
                path: path.to_string(),
                tokens: compile(path),
            });
        }

        placeholders
    }
}

impl Default for PlaceholderMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_END).expect("default delimiters are valid")
    }
}
