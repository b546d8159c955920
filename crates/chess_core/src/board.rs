use crate::error::{ChessError, Result};
use crate::types::*;

/// An 8x8 mailbox. Indexed `[row][col]`, row 0 is rank 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /// The opening position: black on rows 0-1, white on rows 6-7.
    pub fn standard() -> Self {
        let mut b = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            b.grid[0][col] = Some(Piece::new(Side::Black, kind));
            b.grid[1][col] = Some(Piece::new(Side::Black, PieceKind::Pawn));
            b.grid[6][col] = Some(Piece::new(Side::White, PieceKind::Pawn));
            b.grid[7][col] = Some(Piece::new(Side::White, kind));
        }
        b
    }

    /// Parse the piece-placement field of a FEN string ("rnbqkbnr/pppppppp/8/...").
    ///
    /// Ranks are listed from 8 down to 1, which is also row order here.
    pub fn from_placement(placement: &str) -> Result<Self> {
        let mut b = Board::empty();
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::InvalidPlacement(format!(
                "expected 8 ranks, found {}",
                ranks.len()
            )));
        }

        for (row, rank_str) in ranks.iter().enumerate() {
            let mut col: usize = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    col += d as usize;
                } else {
                    let pc = Piece::from_char(ch).ok_or_else(|| {
                        ChessError::InvalidPlacement(format!("unknown piece {ch:?}"))
                    })?;
                    if col < 8 {
                        b.grid[row][col] = Some(pc);
                    }
                    col += 1;
                }
            }
            if col != 8 {
                return Err(ChessError::InvalidPlacement(format!(
                    "rank {} does not cover 8 files",
                    8 - row
                )));
            }
        }
        Ok(b)
    }

    /// Inverse of [`Board::from_placement`].
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn placement(&self) -> String {
        let mut out = String::new();
        for (row, cells) in self.grid.iter().enumerate() {
            let mut gap = 0;
            for cell in cells {
                match cell {
                    Some(pc) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row() as usize][sq.col() as usize]
    }

    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.grid[sq.row() as usize][sq.col() as usize] = pc;
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// First king of `side` in board order, if any.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        Square::all().find(|&s| self.piece_at(s) == Some(Piece::new(side, PieceKind::King)))
    }

    /// Squares holding a piece of `side`, in board order.
    pub fn squares_of(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&s| matches!(self.piece_at(s), Some(pc) if pc.side == side))
    }

    /// Move whatever is on `from` to `to`, overwriting `to` and clearing `from`.
    pub fn relocate(&mut self, from: Square, to: Square) {
        let pc = self.piece_at(from);
        self.set_piece(from, None);
        self.set_piece(to, pc);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
