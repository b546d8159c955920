//! Board plus a reversible move log.
//!
//! `apply_move` does not check legality; callers go through the legality gate
//! first. Undo and redo form a linear chain: any new move drops the redo list.

use crate::board::Board;
use crate::types::*;

/// One applied move, enough to reverse it exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    history: Vec<MoveRecord>,
    redo: Vec<MoveRecord>,
}

impl BoardState {
    pub fn standard() -> Self {
        Self::from_board(Board::standard())
    }

    pub fn from_board(board: Board) -> Self {
        BoardState {
            board,
            history: Vec::new(),
            redo: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn redo_history(&self) -> &[MoveRecord] {
        &self.redo
    }

    /// Move the piece on `from` to `to`, capturing whatever stood there.
    ///
    /// Returns `None` without touching anything if `from` is empty.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Option<MoveRecord> {
        let moved = self.board.piece_at(from)?;
        let rec = MoveRecord {
            from,
            to,
            moved,
            captured: self.board.piece_at(to),
        };
        self.board.relocate(from, to);
        self.history.push(rec);
        self.redo.clear();
        Some(rec)
    }

    /// Take back the last move. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let rec = self.history.pop()?;
        self.board.set_piece(rec.from, Some(rec.moved));
        self.board.set_piece(rec.to, rec.captured);
        self.redo.push(rec);
        Some(rec)
    }

    /// Replay the most recently undone move. `None` when nothing was undone.
    pub fn redo(&mut self) -> Option<MoveRecord> {
        let rec = self.redo.pop()?;
        self.board.set_piece(rec.to, Some(rec.moved));
        self.board.set_piece(rec.from, None);
        self.history.push(rec);
        Some(rec)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
