//! Check detection.
//!
//! Attacks use the movement geometry of [`crate::movegen`] except for pawns,
//! which only attack their two forward diagonals. Whatever stands on the
//! target square does not matter.

use crate::board::Board;
use crate::movegen::{bishop_geometry, king_geometry, knight_geometry, pawn_capture_geometry, rook_geometry};
use crate::types::*;

/// Does the piece on `attacker` attack `target`? False if `attacker` is empty.
pub fn attacks(board: &Board, attacker: Square, target: Square) -> bool {
    let Some(pc) = board.piece_at(attacker) else {
        return false;
    };
    if attacker == target {
        return false;
    }
    match pc.kind {
        PieceKind::Pawn => pawn_capture_geometry(pc.side, attacker, target),
        PieceKind::Rook => rook_geometry(board, attacker, target),
        PieceKind::Knight => knight_geometry(attacker, target),
        PieceKind::Bishop => bishop_geometry(board, attacker, target),
        PieceKind::Queen => {
            rook_geometry(board, attacker, target) || bishop_geometry(board, attacker, target)
        }
        PieceKind::King => king_geometry(attacker, target),
    }
}

/// Squares of every `by` piece attacking `target`, in board order.
pub fn attackers_by(board: &Board, target: Square, by: Side) -> Vec<Square> {
    board
        .squares_of(by)
        .filter(|&s| attacks(board, s, target))
        .collect()
}

pub fn is_square_attacked(board: &Board, target: Square, by: Side) -> bool {
    board.squares_of(by).any(|s| attacks(board, s, target))
}

/// Is `side`'s king attacked? A board without such a king is never in check.
pub fn is_in_check(board: &Board, side: Side) -> bool {
    match board.king_square(side) {
        Some(ksq) => is_square_attacked(board, ksq, side.other()),
        None => false,
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
