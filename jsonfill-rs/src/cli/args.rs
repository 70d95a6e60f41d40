//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "jsonfill")]
#[command(author, version, about = "Fill {{path.to.value}} placeholders in text from JSON data", long_about = None)]
pub struct Cli {
    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace placeholders in a manuscript with values from a JSON file
    Fill(FillArgs),

    /// List the placeholders found in a file
    Scan(ScanArgs),

    /// Resolve a single path expression against a JSON file
    Get(GetArgs),
}

/// Delimiter overrides shared by `fill` and `scan`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DelimiterArgs {
    /// Start delimiter of placeholders (default: {{)
    #[arg(long = "start-delim", allow_hyphen_values = true)]
    pub start_delim: Option<String>,

    /// End delimiter of placeholders (default: }})
    #[arg(long = "end-delim", allow_hyphen_values = true)]
    pub end_delim: Option<String>,
}

// === Fill ===

#[derive(Parser, Debug)]
pub struct FillArgs {
    /// Manuscript file to fill
    pub manuscript: PathBuf,

    /// Project directory searched for the JSON file (default: the manuscript's directory)
    #[arg(long)]
    pub project: Option<PathBuf>,

    /// Explicit JSON data file (skips the project lookup)
    #[arg(long, conflicts_with = "json_file")]
    pub data: Option<PathBuf>,

    /// JSON file name in the project folder, e.g. results.json
    #[arg(long = "json-file")]
    pub json_file: Option<String>,

    #[command(flatten)]
    pub delimiters: DelimiterArgs,

    /// Fail when a placeholder path is not found or no placeholders exist
    #[arg(long)]
    pub error_on_missing: bool,

    /// Print debug info to stderr for troubleshooting
    #[arg(long)]
    pub debug_log: bool,

    /// Write the filled text to this file and print a report instead
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

// === Scan ===

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// File to scan
    pub file: PathBuf,

    #[command(flatten)]
    pub delimiters: DelimiterArgs,
}

// === Get ===

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Path expression, e.g. a.b[0].c
    pub path: String,

    /// JSON data file
    #[arg(long)]
    pub data: PathBuf,
}
