//! Path resolution, placeholder scanning and substitution.

pub mod path;
pub mod scanner;
pub mod substitute;

pub use path::{compile, get, resolve};
pub use scanner::{PlaceholderMatcher, DEFAULT_END, DEFAULT_START};
pub use substitute::{render_value, substitute, Substitutor};
