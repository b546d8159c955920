//! Rules engine for a two-player text chess game.
//!
//! Pieces move by their ordinary rules only: no castling, en passant, promotion
//! or draw rules. A game ends only by checkmate.
//!
//! Layers, leaves first:
//! - [`board`] / [`state`]: the grid and its reversible move log
//! - [`movegen`]: per-piece movement rules
//! - [`attacks`]: check detection
//! - [`legality`]: the gate that rejects moves leaving one's own king in check
//! - [`game`]: turns, check/mate evaluation, undo/redo, hints and threats
//! - [`save`]: the move-log file format

pub mod attacks;
pub mod board;
pub mod error;
pub mod game;
pub mod legality;
pub mod movegen;
pub mod save;
pub mod state;
pub mod types;

pub use attacks::{attackers_by, attacks, is_in_check, is_square_attacked};
pub use board::Board;
pub use error::{ChessError, IllegalMove, Result};
pub use game::{Game, GameStatus, MoveOutcome};
pub use legality::{check_move, has_any_legal_move, is_legal_move, legal_moves};
pub use movegen::{enumerate_destinations, is_legal_destination};
pub use save::{SaveGame, SavedMove, load_from_path, save_to_path};
pub use state::{BoardState, MoveRecord};
pub use types::*;
