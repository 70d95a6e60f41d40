//! Scan command implementation.

use crate::cli::args::ScanArgs;
use crate::cli::fill::parent_dir;
use crate::cli::output::Output;
use crate::config::{Config, ConfigLayer};
use crate::engine::PlaceholderMatcher;
use crate::error::Result;
use crate::types::Placeholder;
use serde::Serialize;
use std::fs;

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub file: String,
    pub total: usize,
    pub placeholders: Vec<PlaceholderEntry>,
}

#[derive(Debug, Serialize)]
pub struct PlaceholderEntry {
    pub path: String,
    pub line: usize,
    pub column: usize,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlaceholderEntry {
    fn new(placeholder: &Placeholder, text: &str) -> Self {
        let (tokens, error) = match &placeholder.tokens {
            Ok(tokens) => (
                Some(tokens.iter().map(|t| t.as_str().to_string()).collect()),
                None,
            ),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            path: placeholder.path.clone(),
            line: placeholder.line,
            column: placeholder.column,
            text: placeholder.matched(text).to_string(),
            tokens,
            error,
        }
    }
}

/// Delimiters from the config files next to `file`, overridden by flags.
pub fn resolve_config(args: &ScanArgs) -> Result<Config> {
    let mut config = Config::load(&parent_dir(&args.file))?;
    config.apply(ConfigLayer {
        start_delim: args.delimiters.start_delim.clone(),
        end_delim: args.delimiters.end_delim.clone(),
        ..Default::default()
    });
    Ok(config)
}

pub fn run(args: &ScanArgs, output: &Output) -> Result<()> {
    let config = resolve_config(args)?;
    let matcher = PlaceholderMatcher::new(&config.start_delimiter, &config.end_delimiter)?;
    let text = fs::read_to_string(&args.file)?;

    let placeholders: Vec<PlaceholderEntry> = matcher
        .scan(&text)
        .iter()
        .map(|p| PlaceholderEntry::new(p, &text))
        .collect();

    output.print(&ScanResponse {
        file: args.file.to_string_lossy().to_string(),
        total: placeholders.len(),
        placeholders,
    })
}
