//! jsonfill - Fill `{{path.to.value}}` placeholders in text from JSON data.
//!
//! # Overview
//!
//! - Path expressions like `a.b[0].c` compile to access tokens and resolve
//!   against a [`serde_json::Value`]
//! - Placeholders are located between configurable literal delimiters
//!   (`{{`/`}}` by default)
//! - Missing values are either left in place and reported, or (strict mode)
//!   fail the whole pass without producing output
//!
//! # Example
//!
//! ```
//! use jsonfill::{SubstituteOptions, Substitutor};
//! use serde_json::json;
//!
//! let tree = json!({"name": "Ada", "scores": [10, 20, 30]});
//! let result = Substitutor::default()
//!     .substitute("Hello {{name}}, you scored {{scores[1]}}.", &tree, &SubstituteOptions::default())
//!     .unwrap();
//!
//! assert_eq!(result.text, "Hello Ada, you scored 20.");
//! assert_eq!(result.replaced_count, 2);
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod source;
pub mod types;

// Re-export main types at crate root
pub use config::Config;
pub use engine::{PlaceholderMatcher, Substitutor};
pub use error::{FillError, PathError, Result};
pub use types::*;
