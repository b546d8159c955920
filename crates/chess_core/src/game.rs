//! Turn sequencing, check/checkmate evaluation and move history for one game.

use tracing::{debug, info, warn};

use crate::attacks::{attackers_by, is_in_check};
use crate::board::Board;
use crate::error::{ChessError, IllegalMove, Result};
use crate::legality::{check_move, has_any_legal_move, is_legal_move};
use crate::movegen::enumerate_destinations;
use crate::save::{SaveGame, SavedMove};
use crate::state::{BoardState, MoveRecord};
use crate::types::*;

/// Where the game stands after the last accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The given side is in check but has a way out.
    Check(Side),
    /// Terminal. `plies` is the ply count when mate was delivered.
    Checkmate { winner: Side, plies: u32 },
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. })
    }
}

/// Result of an accepted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    pub status: GameStatus,
}

/// One game: the live board, its history, whose turn it is and the ply count.
#[derive(Clone, Debug)]
pub struct Game {
    state: BoardState,
    side_to_move: Side,
    ply: u32,
    status: GameStatus,
}

impl Game {
    pub fn new() -> Self {
        Game {
            state: BoardState::standard(),
            side_to_move: Side::White,
            ply: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Start from an arbitrary position with an empty history.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        let mut g = Game {
            state: BoardState::from_board(board),
            side_to_move,
            ply: 0,
            status: GameStatus::InProgress,
        };
        g.status = g.evaluate(side_to_move);
        g
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn history(&self) -> &[MoveRecord] {
        self.state.history()
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Set by every move, undo, redo and load. Only a move or a load
    /// searches for mate.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Play `from`-`to` for the side to move.
    ///
    /// On rejection nothing changes. After an accepted move the opponent is
    /// examined for check and, if in check, for mate.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome> {
        if let GameStatus::Checkmate { winner, .. } = self.status {
            return Err(ChessError::GameOver { winner });
        }
        let mover = self.side_to_move;
        check_move(self.board(), mover, from, to)
            .map_err(|reason| ChessError::IllegalMove { from, to, reason })?;

        let record = self.state.apply_move(from, to).ok_or(ChessError::IllegalMove {
            from,
            to,
            reason: IllegalMove::EmptyOrigin,
        })?;
        self.ply = self.ply.saturating_add(1);
        self.side_to_move = mover.other();
        debug!(%from, %to, piece = %record.moved, ply = self.ply, "move applied");

        self.status = self.evaluate(self.side_to_move);
        match self.status {
            GameStatus::Check(side) => info!(%side, "check"),
            GameStatus::Checkmate { winner, plies } => info!(%winner, plies, "checkmate"),
            GameStatus::InProgress => {}
        }
        Ok(MoveOutcome {
            record,
            status: self.status,
        })
    }

    /// Take back the last move. Does nothing when there is no history.
    ///
    /// This is a plain reversal: mate is not searched for, so the status is
    /// either check or in-progress.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let rec = self.state.undo()?;
        self.ply = self.ply.saturating_sub(1);
        self.side_to_move = self.side_to_move.other();
        self.status = self.check_only_status();
        debug!(from = %rec.from, to = %rec.to, ply = self.ply, "move undone");
        Some(rec)
    }

    /// Replay the last undone move. Does nothing when nothing was undone.
    pub fn redo(&mut self) -> Option<MoveRecord> {
        let rec = self.state.redo()?;
        self.ply = self.ply.saturating_add(1);
        self.side_to_move = self.side_to_move.other();
        self.status = self.check_only_status();
        debug!(from = %rec.from, to = %rec.to, ply = self.ply, "move redone");
        Some(rec)
    }

    /// Destinations of the piece on `sq` that keep its own king safe.
    ///
    /// Works for either side, not only the side to move.
    pub fn legal_destinations_from(&self, sq: Square) -> Result<Vec<Square>> {
        let pc = self.board().piece_at(sq).ok_or(ChessError::EmptySquare(sq))?;
        Ok(enumerate_destinations(self.board(), sq)
            .into_iter()
            .filter(|&to| is_legal_move(self.board(), pc.side, sq, to))
            .collect())
    }

    /// Destinations of the piece on `sq` by movement rules alone.
    pub fn pseudo_destinations_from(&self, sq: Square) -> Result<Vec<Square>> {
        if self.board().is_empty(sq) {
            return Err(ChessError::EmptySquare(sq));
        }
        Ok(enumerate_destinations(self.board(), sq))
    }

    /// Enemy pieces attacking the piece on `sq`.
    pub fn attackers_of(&self, sq: Square) -> Result<Vec<Square>> {
        let pc = self.board().piece_at(sq).ok_or(ChessError::EmptySquare(sq))?;
        Ok(attackers_by(self.board(), sq, pc.side.other()))
    }

    pub fn is_in_check(&self, side: Side) -> bool {
        is_in_check(self.board(), side)
    }

    /// In check with no legal move anywhere on the board.
    pub fn is_checkmate(&self, side: Side) -> bool {
        self.is_in_check(side) && !has_any_legal_move(self.board(), side)
    }

    /// Status for the side to move without the mate search.
    fn check_only_status(&self) -> GameStatus {
        if self.is_in_check(self.side_to_move) {
            GameStatus::Check(self.side_to_move)
        } else {
            GameStatus::InProgress
        }
    }

    fn evaluate(&self, side: Side) -> GameStatus {
        if !self.is_in_check(side) {
            GameStatus::InProgress
        } else if has_any_legal_move(self.board(), side) {
            GameStatus::Check(side)
        } else {
            GameStatus::Checkmate {
                winner: side.other(),
                plies: self.ply,
            }
        }
    }

    /// Snapshot of what a save file records.
    pub fn to_save(&self) -> SaveGame {
        SaveGame {
            side_to_move: self.side_to_move,
            ply: self.ply,
            moves: self
                .history()
                .iter()
                .map(|rec| SavedMove {
                    piece: rec.moved,
                    from: rec.from,
                    to: rec.to,
                })
                .collect(),
        }
    }

    /// The save-file text for this game.
    pub fn serialize_history(&self) -> String {
        self.to_save().to_string()
    }

    /// Rebuild a game by replaying `save` on a fresh opening position.
    ///
    /// Moves are not re-validated.
    pub fn restore(save: &SaveGame) -> Result<Game> {
        let mut state = BoardState::standard();
        for (idx, mv) in save.moves.iter().enumerate() {
            let rec = state
                .apply_move(mv.from, mv.to)
                .ok_or(ChessError::ReplayFailed {
                    line: SaveGame::line_of_move(idx),
                    square: mv.from,
                })?;
            if rec.moved != mv.piece {
                warn!(
                    line = SaveGame::line_of_move(idx),
                    recorded = %mv.piece,
                    found = %rec.moved,
                    "save file piece does not match the board"
                );
            }
        }

        let mut game = Game {
            state,
            side_to_move: save.side_to_move,
            ply: save.ply,
            status: GameStatus::InProgress,
        };
        game.status = game.evaluate(game.side_to_move);
        Ok(game)
    }

    /// Replace this game with `save` replayed from the opening.
    ///
    /// All or nothing: on error the current game is left as it was.
    pub fn replay_history(&mut self, save: &SaveGame) -> Result<()> {
        *self = Game::restore(save)?;
        debug!(moves = save.moves.len(), ply = self.ply, "history replayed");
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
