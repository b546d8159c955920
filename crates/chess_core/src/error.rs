//! Error type shared by the engine, the legality gate and save files.

use thiserror::Error;

use crate::types::{Side, Square};

/// Why the legality gate turned a move down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// Nothing stands on the origin square.
    EmptyOrigin,
    /// The piece on the origin square belongs to the side not on move.
    WrongSide,
    /// The piece cannot reach the destination (geometry, blockers or own piece).
    BadGeometry,
    /// The move would leave or put the mover's own king in check.
    LeavesKingInCheck,
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let txt = match self {
            IllegalMove::EmptyOrigin => "no piece on the origin square",
            IllegalMove::WrongSide => "that piece belongs to the other side",
            IllegalMove::BadGeometry => "the piece cannot move there",
            IllegalMove::LeavesKingInCheck => "the move leaves the king in check",
        };
        f.write_str(txt)
    }
}

#[derive(Debug, Error)]
pub enum ChessError {
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),

    #[error("invalid side: {0:?}")]
    InvalidSide(String),

    #[error("illegal move {from}-{to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalMove,
    },

    #[error("the game is over, {winner} won")]
    GameOver { winner: Side },

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("invalid board layout: {0}")]
    InvalidPlacement(String),

    #[error("malformed save file at line {line}: {reason}")]
    MalformedSave { line: usize, reason: String },

    #[error("cannot replay line {line}: no piece on {square}")]
    ReplayFailed { line: usize, square: Square },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChessError>;
