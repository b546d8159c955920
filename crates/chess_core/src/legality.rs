//! The single gate every move passes before it touches a live board.

use crate::attacks::is_in_check;
use crate::board::Board;
use crate::error::IllegalMove;
use crate::movegen::is_legal_destination;
use crate::types::*;

/// Decide whether `side` may play `from`-`to` on `board`.
///
/// The move is tried on a scratch copy; the caller's board is never modified.
pub fn check_move(board: &Board, side: Side, from: Square, to: Square) -> Result<(), IllegalMove> {
    let pc = board.piece_at(from).ok_or(IllegalMove::EmptyOrigin)?;
    if pc.side != side {
        return Err(IllegalMove::WrongSide);
    }
    if !is_legal_destination(board, from, to) {
        return Err(IllegalMove::BadGeometry);
    }

    let mut scratch = *board;
    scratch.relocate(from, to);
    if is_in_check(&scratch, side) {
        return Err(IllegalMove::LeavesKingInCheck);
    }
    Ok(())
}

pub fn is_legal_move(board: &Board, side: Side, from: Square, to: Square) -> bool {
    check_move(board, side, from, to).is_ok()
}

/// Does `side` have at least one legal move anywhere on the board?
///
/// Tries every own piece against all 64 target squares.
pub fn has_any_legal_move(board: &Board, side: Side) -> bool {
    board
        .squares_of(side)
        .any(|from| Square::all().any(|to| is_legal_move(board, side, from, to)))
}

/// All legal `(from, to)` pairs for `side`, in board order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<(Square, Square)> {
    let mut out = Vec::new();
    for from in board.squares_of(side) {
        for to in Square::all() {
            if is_legal_move(board, side, from, to) {
                out.push((from, to));
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod legality_tests;
