//! Per-piece movement rules, ignoring whether the mover's king ends up in check.
//!
//! Each operation is a single `match` over [`PieceKind`]. The queen reuses the
//! rook and bishop geometry rather than having rules of its own.

use crate::board::Board;
use crate::types::*;

pub(crate) const ORTHO: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const DIAG: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const KNIGHT: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

/// True if every square strictly between `from` and `to` is empty.
///
/// Only meaningful for squares sharing a rank, file or diagonal.
pub(crate) fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    let step = (dr.signum(), dc.signum());
    let mut cur = from;
    while let Some(next) = cur.offset(step.0, step.1) {
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        cur = next;
    }
    false
}

pub(crate) fn rook_geometry(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    (dr == 0) != (dc == 0) && path_clear(board, from, to)
}

pub(crate) fn bishop_geometry(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    dr != 0 && dr.abs() == dc.abs() && path_clear(board, from, to)
}

pub(crate) fn knight_geometry(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

pub(crate) fn king_geometry(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    from != to && dr.abs() <= 1 && dc.abs() <= 1
}

/// The two squares a pawn of `side` on `from` captures on.
pub(crate) fn pawn_capture_geometry(side: Side, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    dr == side.forward() && dc.abs() == 1
}

fn pawn_reaches(board: &Board, side: Side, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    let fwd = side.forward();
    if dc == 0 {
        if !board.is_empty(to) {
            return false;
        }
        if dr == fwd {
            return true;
        }
        if dr == 2 * fwd && from.row() == side.pawn_row() {
            return from.offset(fwd, 0).is_some_and(|mid| board.is_empty(mid));
        }
        return false;
    }
    pawn_capture_geometry(side, from, to)
        && matches!(board.piece_at(to), Some(t) if t.side != side)
}

/// Can the piece on `from` move to `to`, ignoring self-check?
///
/// False if `from` is empty, if `from == to`, or if `to` holds a piece of the
/// mover's own side.
pub fn is_legal_destination(board: &Board, from: Square, to: Square) -> bool {
    let Some(pc) = board.piece_at(from) else {
        return false;
    };
    if from == to {
        return false;
    }
    if let Some(target) = board.piece_at(to)
        && target.side == pc.side
    {
        return false;
    }
    match pc.kind {
        PieceKind::Pawn => pawn_reaches(board, pc.side, from, to),
        PieceKind::Rook => rook_geometry(board, from, to),
        PieceKind::Knight => knight_geometry(from, to),
        PieceKind::Bishop => bishop_geometry(board, from, to),
        PieceKind::Queen => rook_geometry(board, from, to) || bishop_geometry(board, from, to),
        PieceKind::King => king_geometry(from, to),
    }
}

/// Every square the piece on `from` can move to, ignoring self-check.
///
/// Empty when `from` is empty. No square appears twice.
pub fn enumerate_destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(pc) = board.piece_at(from) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(28);
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc.side, &mut out),
        PieceKind::Rook => gen_slider(board, from, pc.side, &ORTHO, &mut out),
        PieceKind::Knight => gen_steps(board, from, pc.side, &KNIGHT, &mut out),
        PieceKind::Bishop => gen_slider(board, from, pc.side, &DIAG, &mut out),
        PieceKind::Queen => {
            gen_slider(board, from, pc.side, &ORTHO, &mut out);
            gen_slider(board, from, pc.side, &DIAG, &mut out);
        }
        PieceKind::King => gen_steps(board, from, pc.side, &KING, &mut out),
    }
    out
}

fn gen_pawn(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    let fwd = side.forward();

    // forward 1, then forward 2 from the start row
    if let Some(one) = from.offset(fwd, 0)
        && board.is_empty(one)
    {
        out.push(one);
        if from.row() == side.pawn_row()
            && let Some(two) = from.offset(2 * fwd, 0)
            && board.is_empty(two)
        {
            out.push(two);
        }
    }

    for dc in [-1, 1] {
        if let Some(to) = from.offset(fwd, dc)
            && let Some(target) = board.piece_at(to)
            && target.side != side
        {
            out.push(to);
        }
    }
}

fn gen_steps(board: &Board, from: Square, side: Side, steps: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in steps {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                Some(target) if target.side == side => {}
                _ => out.push(to),
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, side: Side, dirs: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(dr, dc) in dirs {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(target) => {
                    if target.side != side {
                        out.push(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
