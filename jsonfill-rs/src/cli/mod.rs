//! CLI command implementations.

pub mod args;
pub mod logging;
pub mod output;

pub mod fill;
pub mod get;
pub mod scan;

pub use args::{Cli, Commands};
pub use output::Output;
