//! Save-file format.
//!
//! ```text
//! white            side to move
//! 3                ply count
//! Pe2e4            one line per move: piece letter, origin, destination
//! pe7e5
//! Ng1f3
//! ```
//!
//! Piece letters are uppercase for White and lowercase for Black. Loading
//! replays the moves from the opening position without checking legality
//! (see [`crate::Game::restore`]).

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ChessError, Result};
use crate::game::Game;
use crate::types::*;

/// Lines before the first move.
const HEADER_LINES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SavedMove {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl fmt::Display for SavedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.piece, self.from, self.to)
    }
}

impl SavedMove {
    fn parse(line: &str, line_no: usize) -> Result<SavedMove> {
        let malformed = |reason: String| ChessError::MalformedSave {
            line: line_no,
            reason,
        };
        if line.len() != 5 || !line.is_ascii() {
            return Err(malformed(format!("expected 5 characters, found {line:?}")));
        }
        let mut chars = line.chars();
        let piece = chars
            .next()
            .and_then(Piece::from_char)
            .ok_or_else(|| malformed(format!("unknown piece in {line:?}")))?;
        let from = Square::from_algebraic(&line[1..3]).map_err(|e| malformed(e.to_string()))?;
        let to = Square::from_algebraic(&line[3..5]).map_err(|e| malformed(e.to_string()))?;
        Ok(SavedMove { piece, from, to })
    }
}

/// Everything a save file holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveGame {
    pub side_to_move: Side,
    pub ply: u32,
    pub moves: Vec<SavedMove>,
}

impl SaveGame {
    /// 1-based file line holding move number `idx` (0-based).
    pub fn line_of_move(idx: usize) -> usize {
        idx + HEADER_LINES + 1
    }
}

impl fmt::Display for SaveGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.side_to_move)?;
        writeln!(f, "{}", self.ply)?;
        for mv in &self.moves {
            writeln!(f, "{mv}")?;
        }
        Ok(())
    }
}

impl FromStr for SaveGame {
    type Err = ChessError;

    /// Parse and validate a whole file. Trailing blank lines are ignored;
    /// blank lines between moves are not.
    fn from_str(text: &str) -> Result<SaveGame> {
        let lines: Vec<&str> = text.trim_end().lines().map(str::trim).collect();

        let side_line = lines.first().ok_or(ChessError::MalformedSave {
            line: 1,
            reason: "missing side to move".to_string(),
        })?;
        let side_to_move = side_line
            .parse::<Side>()
            .map_err(|e| ChessError::MalformedSave {
                line: 1,
                reason: e.to_string(),
            })?;

        let ply_line = lines.get(1).ok_or(ChessError::MalformedSave {
            line: 2,
            reason: "missing ply count".to_string(),
        })?;
        let ply = ply_line
            .parse::<u32>()
            .map_err(|e| ChessError::MalformedSave {
                line: 2,
                reason: format!("bad ply count {ply_line:?}: {e}"),
            })?;

        let moves = lines[HEADER_LINES..]
            .iter()
            .enumerate()
            .map(|(idx, line)| SavedMove::parse(line, SaveGame::line_of_move(idx)))
            .collect::<Result<Vec<_>>>()?;

        Ok(SaveGame {
            side_to_move,
            ply,
            moves,
        })
    }
}

/// Write `game` to `path`. The game itself is never modified.
pub fn save_to_path(game: &Game, path: &Path) -> Result<()> {
    fs::write(path, game.serialize_history())?;
    debug!(path = %path.display(), moves = game.history().len(), "game saved");
    Ok(())
}

/// Read, validate and replay a save file into a new game.
pub fn load_from_path(path: &Path) -> Result<Game> {
    let text = fs::read_to_string(path)?;
    let save: SaveGame = text.parse()?;
    let game = Game::restore(&save)?;
    debug!(path = %path.display(), moves = save.moves.len(), "game loaded");
    Ok(game)
}

#[cfg(test)]
#[path = "save_tests.rs"]
mod save_tests;
