//! The 81-character text board format (spec.md §6).
//!
//! `0` and `.` both denote an empty square; `1`-`9` denote hints; every
//! other character (whitespace, `|`, `-`, `+`, newlines) is ignored. Kept
//! deliberately thin — parsing/rendering are named external collaborators
//! (spec.md §1), not part of the engine's hard core.

use crate::error::EngineError;
use crate::propagate::{assign, eliminate_all};
use crate::topology::Topology;
use crate::values::Values;

/// Parses an 81-significant-character board.
///
/// Every hint is committed with [`crate::propagate::assign`]; if
/// `run_elimination` is set, [`eliminate_all`] is additionally run
/// afterwards to re-drive propagation.
///
/// # Errors
/// [`EngineError::BadLength`] if the significant-character count isn't 81;
/// [`EngineError::Contradiction`] if any hint's `assign` fails.
pub fn parse_board(topo: &Topology, text: &str, run_elimination: bool) -> Result<Values, EngineError> {
    let digits: Vec<u16> = text
        .chars()
        .filter_map(|c| match c {
            '.' => Some(0),
            '0'..='9' => Some(c as u16 - '0' as u16),
            _ => None,
        })
        .collect();

    if digits.len() != 81 {
        return Err(EngineError::BadLength {
            found: digits.len(),
        });
    }

    let mut values = Values::empty();
    for (sq, &d) in digits.iter().enumerate() {
        if d != 0 && !assign(topo, &mut values, sq, d) {
            return Err(EngineError::Contradiction);
        }
    }

    if run_elimination && !eliminate_all(topo, &mut values) {
        return Err(EngineError::Contradiction);
    }

    Ok(values)
}

/// Renders `values` as an 81-character line: the singleton digit per
/// square, or `.` for an unresolved square. Round-trips through
/// [`parse_board`] for any solved board (spec.md §8 S6).
pub fn display_as_input(values: &Values) -> String {
    (0..81)
        .map(|sq| match values[sq].single_member() {
            Some(d) => std::char::from_digit(d as u32, 10).unwrap(),
            None => '.',
        })
        .collect()
}

/// Renders `values` as a human-readable 9x9 grid with block separators.
pub fn display(values: &Values) -> String {
    let mut out = String::new();
    for row in 0..9 {
        if row > 0 && row % 3 == 0 {
            out.push_str("------+-------+------\n");
        }
        for col in 0..9 {
            if col > 0 && col % 3 == 0 {
                out.push_str("| ");
            }
            let sq = row * 9 + col;
            let ch = match values[sq].single_member() {
                Some(d) => std::char::from_digit(d as u32, 10).unwrap(),
                None => '.',
            };
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
