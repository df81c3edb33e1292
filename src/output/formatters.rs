//! Formatting utilities for terminal output

use crate::core::AttemptRow;
use colored::Colorize;

/// Format an attempt row as emoji tiles
#[must_use]
pub fn row_to_emoji(row: &AttemptRow) -> String {
    let mut result = String::with_capacity(20); // 4 bytes per emoji
    for verdict in row {
        result.push(if verdict.exact {
            '🟩'
        } else if verdict.present {
            '🟨'
        } else {
            '⬜'
        });
    }
    result
}

/// Format an attempt row as colored letter tiles
///
/// Green background for exact matches, yellow for present-elsewhere, gray
/// for misses and blank slots.
#[must_use]
pub fn colored_row(row: &AttemptRow) -> String {
    let mut out = String::new();

    for verdict in row {
        let cell = format!(
            " {} ",
            verdict.letter.map_or(' ', |c| c.to_ascii_uppercase())
        );
        let painted = if verdict.exact {
            cell.black().on_green()
        } else if verdict.present {
            cell.black().on_yellow()
        } else {
            cell.white().on_bright_black()
        };
        out.push_str(&painted.to_string());
        out.push(' ');
    }

    out.trim_end().to_string()
}
