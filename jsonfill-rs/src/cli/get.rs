//! Get command implementation.

use crate::cli::args::GetArgs;
use crate::cli::output::Output;
use crate::engine::path;
use crate::error::{FillError, Result};
use crate::source::load_value_tree;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct GetResponse<'a> {
    pub path: &'a str,
    pub value: &'a Value,
}

/// Resolve `path_expr` in `tree` into a response.
pub fn lookup<'a>(tree: &'a Value, path_expr: &'a str) -> Result<GetResponse<'a>> {
    match path::get(tree, path_expr)? {
        Some(value) => Ok(GetResponse {
            path: path_expr,
            value,
        }),
        None => Err(FillError::UnresolvedPath(path_expr.to_string())),
    }
}

pub fn run(args: &GetArgs, output: &Output) -> Result<()> {
    let tree = load_value_tree(&args.data)?;
    output.print(&lookup(&tree, args.path.trim())?)
}
