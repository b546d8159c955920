//! Text diagrams of the board.

use chess_core::{Board, Square};

use crate::config::DisplayConfig;

const HIGHLIGHT_ON: &str = "\x1b[46m";
const HIGHLIGHT_OFF: &str = "\x1b[0m";
const FILES: &str = "    A B C D E F G H";
const RULE: &str = "-----------------------------";

/// Board from White's side, rank 8 on top. Squares in `highlight` get a
/// colored background, or a `*` on empty squares when colors are off.
pub fn render_board(board: &Board, highlight: &[Square], display: &DisplayConfig) -> String {
    let mut out = String::new();
    if display.coordinates {
        out.push_str(FILES);
        out.push_str("\n\n");
    }
    for row in 0..8u8 {
        if display.coordinates {
            out.push_str(&format!("{}   ", 8 - row));
        }
        for col in 0..8u8 {
            let Some(s) = Square::new(row, col) else {
                continue;
            };
            let marked = highlight.contains(&s);
            let cell = match board.piece_at(s) {
                Some(pc) => pc.to_char(),
                None if marked && !display.highlight => '*',
                None => '.',
            };
            if marked && display.highlight {
                out.push_str(&format!("{HIGHLIGHT_ON}{cell}{HIGHLIGHT_OFF} "));
            } else {
                out.push(cell);
                out.push(' ');
            }
        }
        if display.coordinates {
            out.push_str(&format!("  {}", 8 - row));
        }
        out.push('\n');
    }
    if display.coordinates {
        out.push('\n');
        out.push_str(FILES);
        out.push('\n');
    }
    out.push_str(RULE);
    out
}

/// Comma-separated algebraic squares, e.g. "a3, c3".
pub fn square_list(squares: &[Square]) -> String {
    squares
        .iter()
        .map(|s| s.to_algebraic())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
