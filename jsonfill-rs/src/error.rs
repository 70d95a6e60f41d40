//! Error types and exit codes for jsonfill.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes used by the CLI.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const SOURCE_NOT_FOUND: i32 = 2;
    pub const INVALID_JSON: i32 = 3;
    pub const MISSING_VALUE: i32 = 4;
    pub const NO_PLACEHOLDERS: i32 = 5;
    pub const MALFORMED_PATH: i32 = 6;
}

/// A syntax error in a path expression.
///
/// Kept separate from [`FillError`] so it can be stored inside a scanned
/// placeholder and compared in tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("unterminated '[' at byte {position} in path '{path}'")]
    UnterminatedBracket { path: String, position: usize },
}

/// Main error type for jsonfill operations.
#[derive(Error, Debug)]
pub enum FillError {
    #[error("Malformed path: {0}")]
    MalformedPath(#[from] PathError),

    #[error("Invalid JSON source: {0}")]
    InvalidJsonSource(#[source] serde_json::Error),

    #[error("Invalid JSON in {path}: {source}")]
    InvalidJsonFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing value for placeholder path: {0}")]
    MissingPlaceholderValue(String),

    #[error("No placeholders found using delimiters {start} ... {end}")]
    NoPlaceholdersFound { start: String, end: String },

    #[error("Path does not resolve: {0}")]
    UnresolvedPath(String),

    #[error("JSON file not found at {0}")]
    SourceNotFound(PathBuf),

    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Regex error: {0}")]
    RegexError(#[from] regex::Error),
}

impl FillError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            FillError::SourceNotFound(_) => exit_code::SOURCE_NOT_FOUND,
            FillError::InvalidJsonSource(_) | FillError::InvalidJsonFile { .. } => {
                exit_code::INVALID_JSON
            }
            FillError::MissingPlaceholderValue(_) | FillError::UnresolvedPath(_) => {
                exit_code::MISSING_VALUE
            }
            FillError::NoPlaceholdersFound { .. } => exit_code::NO_PLACEHOLDERS,
            FillError::MalformedPath(_) => exit_code::MALFORMED_PATH,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for jsonfill operations.
pub type Result<T> = std::result::Result<T, FillError>;
