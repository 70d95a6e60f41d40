//! Path expressions (`a.b[0].c`) and their resolution against a JSON tree.

use crate::error::{PathError, Result};
use crate::types::{PathToken, TokenKind};
use serde_json::Value;

/// Compile a path expression into its access tokens.
///
/// `.` separates keys, `[...]` yields its trimmed contents as a token of its
/// own. Everything else is key text. The only error is a `[` with no
/// closing `]`.
pub fn compile(path: &str) -> std::result::Result<Vec<PathToken>, PathError> {
    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut pos = 0;

    while let Some(ch) = path[pos..].chars().next() {
        match ch {
            '.' => {
                flush(&mut buf, &mut tokens);
                pos += 1;
            }
            '[' => {
                flush(&mut buf, &mut tokens);
                let rest = &path[pos + 1..];
                let Some(close) = rest.find(']') else {
                    return Err(PathError::UnterminatedBracket {
                        path: path.to_string(),
                        position: pos,
                    });
                };
                tokens.push(PathToken::new(rest[..close].trim()));
                pos += 1 + close + 1;
            }
            _ => {
                buf.push(ch);
                pos += ch.len_utf8();
            }
        }
    }
    flush(&mut buf, &mut tokens);

    Ok(tokens)
}

fn flush(buf: &mut String, tokens: &mut Vec<PathToken>) {
    if !buf.is_empty() {
        tokens.push(PathToken::new(std::mem::take(buf)));
    }
}

/// Resolve tokens against `tree`. Returns `None` when the path does not exist.
///
/// A `null` reached before the last token stops resolution. Numeric tokens
/// only ever index arrays: `0` against `{"0": ...}` does not resolve.
pub fn resolve<'a>(tree: &'a Value, tokens: &[PathToken]) -> Option<&'a Value> {
    tokens.iter().try_fold(tree, |current, token| {
        if current.is_null() {
            return None;
        }
        match token.kind() {
            TokenKind::Index(index) => current.as_array()?.get(index?),
            TokenKind::Key(key) => current.as_object()?.get(key),
        }
    })
}

/// Compile `path` and resolve it against `tree`.
///
/// A malformed path is an error; a path that simply does not exist is `Ok(None)`.
pub fn get<'a>(tree: &'a Value, path: &str) -> Result<Option<&'a Value>> {
    let tokens = compile(path)?;
    Ok(resolve(tree, &tokens))
}
