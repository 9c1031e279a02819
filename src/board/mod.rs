//! Board representation for Xiangqi

pub mod board;


// Re-exports
pub use board::Board;

/// Board height in rows (row 0 = black back rank, row 9 = red back rank)
pub const ROWS: usize = 10;
/// Board width in columns
pub const COLS: usize = 9;

/// The two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    /// Get the other side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Red => "Red",
            Side::Black => "Black",
        }
    }
}

/// Piece types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

/// A piece: type plus owning side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Self { kind, side }
    }

    #[inline]
    pub const fn red(kind: PieceKind) -> Self {
        Self::new(kind, Side::Red)
    }

    #[inline]
    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, Side::Black)
    }

    /// Traditional character. Horse, Chariot and Cannon share one across sides.
    pub fn glyph(self) -> &'static str {
        let red = self.side == Side::Red;
        match self.kind {
            PieceKind::General => if red { "帥" } else { "將" },
            PieceKind::Advisor => if red { "仕" } else { "士" },
            PieceKind::Elephant => if red { "相" } else { "象" },
            PieceKind::Horse => "馬",
            PieceKind::Chariot => "車",
            PieceKind::Cannon => "砲",
            PieceKind::Soldier => if red { "兵" } else { "卒" },
        }
    }

    /// Single-letter glyph for when no CJK font is available (upper case = red)
    pub fn letter(self) -> &'static str {
        let red = self.side == Side::Red;
        match self.kind {
            PieceKind::General => if red { "G" } else { "g" },
            PieceKind::Advisor => if red { "A" } else { "a" },
            PieceKind::Elephant => if red { "E" } else { "e" },
            PieceKind::Horse => if red { "H" } else { "h" },
            PieceKind::Chariot => if red { "R" } else { "r" },
            PieceKind::Cannon => if red { "C" } else { "c" },
            PieceKind::Soldier => if red { "S" } else { "s" },
        }
    }
}

/// Position on the board, always inside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Panics if the cell lies outside the grid
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < ROWS && (col as usize) < COLS,
            "cell ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        Self::is_valid(row, col).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < ROWS as i32 && col >= 0 && col < COLS as i32
    }

    /// Iterate every cell, row by row
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..ROWS as u8).flat_map(|row| (0..COLS as u8).map(move |col| Pos { row, col }))
    }
}
