//! Placeholder substitution.

use crate::engine::path::resolve;
use crate::engine::scanner::PlaceholderMatcher;
use crate::error::{FillError, Result};
use crate::types::{Placeholder, SubstituteOptions, SubstitutionResult};
use serde_json::{Number, Value};

/// Integers up to 2^53 survive a round trip through `f64` exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Length at which logged values are cut off.
const LOG_VALUE_LIMIT: usize = 100;

/// Fills placeholders in text from a JSON value tree.
#[derive(Debug, Clone, Default)]
pub struct Substitutor {
    matcher: PlaceholderMatcher,
}

impl Substitutor {
    pub fn new(matcher: PlaceholderMatcher) -> Self {
        Self { matcher }
    }

    /// Build a substitutor for the given delimiters.
    pub fn with_delimiters(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(PlaceholderMatcher::new(start, end)?))
    }

    pub fn matcher(&self) -> &PlaceholderMatcher {
        &self.matcher
    }

    /// Locate all placeholders in `text`.
    pub fn scan(&self, text: &str) -> Vec<Placeholder> {
        self.matcher.scan(text)
    }

    /// Replace every placeholder in `text` with its value from `tree`.
    ///
    /// In the default mode unresolved placeholders are left as they are and
    /// reported in [`SubstitutionResult::unresolved_paths`]. With
    /// `error_on_missing` the call fails on the first unresolved placeholder,
    /// or when the text has no placeholders at all.
    pub fn substitute(
        &self,
        text: &str,
        tree: &Value,
        options: &SubstituteOptions,
    ) -> Result<SubstitutionResult> {
        let placeholders = self.matcher.scan(text);
        tracing::debug!(
            count = placeholders.len(),
            start = self.matcher.start(),
            end = self.matcher.end(),
            "found placeholders"
        );

        if placeholders.is_empty() && options.error_on_missing {
            return Err(FillError::NoPlaceholdersFound {
                start: self.matcher.start().to_string(),
                end: self.matcher.end().to_string(),
            });
        }

        let mut result = SubstitutionResult {
            text: String::with_capacity(text.len()),
            found_count: placeholders.len(),
            ..Default::default()
        };
        let mut last = 0;

        for placeholder in &placeholders {
            result.text.push_str(&text[last..placeholder.start]);
            last = placeholder.end;

            let value = match &placeholder.tokens {
                Ok(tokens) => resolve(tree, tokens),
                Err(e) => {
                    tracing::debug!(path = %placeholder.path, error = %e, "malformed path");
                    None
                }
            };

            match value {
                Some(value) => {
                    let rendered = render_value(value)?;
                    tracing::debug!(
                        path = %placeholder.path,
                        value = %truncate(&rendered, LOG_VALUE_LIMIT),
                        "replace"
                    );
                    result.text.push_str(&rendered);
                    result.replaced_count += 1;
                }
                None if options.error_on_missing => {
                    return Err(FillError::MissingPlaceholderValue(placeholder.path.clone()));
                }
                None => {
                    tracing::debug!(path = %placeholder.path, line = placeholder.line, "missing value");
                    result.text.push_str(placeholder.matched(text));
                    result.unresolved_paths.push(placeholder.path.clone());
                }
            }
        }
        result.text.push_str(&text[last..]);

        tracing::debug!(
            replaced = result.replaced_count,
            unresolved = result.unresolved_paths.len(),
            "done"
        );
        Ok(result)
    }

    /// Decode `json` and substitute with the resulting tree.
    ///
    /// A decode failure is reported before the text is scanned.
    pub fn substitute_json(
        &self,
        text: &str,
        json: &str,
        options: &SubstituteOptions,
    ) -> Result<SubstitutionResult> {
        let tree: Value = serde_json::from_str(json).map_err(FillError::InvalidJsonSource)?;
        self.substitute(text, &tree, options)
    }
}

/// Render a resolved value as replacement text.
///
/// `null` becomes the empty string, containers compact JSON, strings are
/// inserted verbatim.
pub fn render_value(value: &Value) -> Result<String> {
    Ok(match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => render_number(n),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value)?,
    })
}

fn render_number(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() <= MAX_EXACT_INTEGER {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

fn truncate(s: &str, limit: usize) -> String {
    match s.char_indices().nth(limit) {
        Some((i, _)) => format!("{}…", &s[..i]),
        None => s.to_string(),
    }
}

/// Substitute with default `{{`/`}}` delimiters.
pub fn substitute(text: &str, tree: &Value, options: &SubstituteOptions) -> Result<SubstitutionResult> {
    Substitutor::default().substitute(text, tree, options)
}
