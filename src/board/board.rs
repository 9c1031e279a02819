//! Board grid with the standard starting layout

use super::{Piece, PieceKind, Pos, Side, COLS, ROWS};

/// Back rank order, column 0 to 8
const BACK_RANK: [PieceKind; COLS] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

const CANNON_COLS: [usize; 2] = [1, 7];
const SOLDIER_COLS: [usize; 5] = [0, 2, 4, 6, 8];

/// 10x9 grid of optional pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; COLS]; ROWS],
}

impl Board {
    /// Board with no pieces
    pub fn empty() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Board in the standard starting layout (black on top, red on bottom)
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place_side(Side::Black, 0, 2, 3);
        board.place_side(Side::Red, 9, 7, 6);
        board
    }

    fn place_side(&mut self, side: Side, back_row: usize, cannon_row: usize, soldier_row: usize) {
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            self.cells[back_row][col] = Some(Piece::new(kind, side));
        }
        for col in CANNON_COLS {
            self.cells[cannon_row][col] = Some(Piece::new(PieceKind::Cannon, side));
        }
        for col in SOLDIER_COLS {
            self.cells[soldier_row][col] = Some(Piece::new(PieceKind::Soldier, side));
        }
    }

    /// Get piece at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.cells[pos.row() as usize][pos.col() as usize]
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Overwrite a cell, returning what was there
    #[inline]
    pub fn replace(&mut self, pos: Pos, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cells[pos.row() as usize][pos.col() as usize], piece)
    }

    /// Remove and return the piece at a cell
    #[inline]
    pub fn take(&mut self, pos: Pos) -> Option<Piece> {
        self.cells[pos.row() as usize][pos.col() as usize].take()
    }

    /// All occupied cells, row by row
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        Pos::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    /// Total pieces on board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
