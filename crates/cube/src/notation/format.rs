//! Producing and rewriting move strings

use super::{segments, MoveToken};

/// `|step|` copies of `[-]<axis><far_index>`, each followed by `.`.
///
/// A negative step writes the reverse turn. Callers that compose several
/// calls strip the final separator themselves.
pub fn format_move(axis: char, far_index: u32, step: i32) -> String {
    let sign = if step < 0 { "-" } else { "" };
    format!("{}{}{}.", sign, axis, far_index).repeat(step.unsigned_abs() as usize)
}

/// Text form of parsed moves, `.`-joined without a trailing separator.
///
/// `None` if any move names a layer outside a cube of side `row_size`.
pub fn format_moves(moves: &[MoveToken], row_size: u32) -> Option<String> {
    let tokens = moves
        .iter()
        .map(|m| m.to_notation(row_size))
        .collect::<Option<Vec<_>>>()?;
    Some(tokens.join("."))
}

/// Reverse the order of the tokens. Signs are left as they are.
pub fn reverse_moves(text: &str) -> String {
    segments(text).rev().collect::<Vec<_>>().join(".")
}

/// The sequence that undoes `text`: reversed order, every sign toggled.
pub fn invert_moves(text: &str) -> String {
    segments(text)
        .rev()
        .map(|token| match token.strip_prefix('-') {
            Some(unsigned) => unsigned.to_string(),
            None => format!("-{}", token),
        })
        .collect::<Vec<_>>()
        .join(".")
}
