//! Xiangqi (Chinese chess) desktop demo
//!
//! Renders the 9x10 board and lets two players take turns moving pieces by
//! clicking. Moves are not checked against the rules: any piece of the side
//! to move may go to any cell, capturing whatever is there.
//!
//! # Architecture
//!
//! - [`board`]: Pieces, positions and the board grid
//! - [`ui`]: Game state, rendering and input, built on egui/eframe
//!
//! # Quick Start
//!
//! ```
//! use xiangqi::{GameState, Pos, Side};
//!
//! let mut state = GameState::new();
//!
//! // Red general straight across the board, taking the black general
//! state.resolve_click(Pos::new(9, 4));
//! state.resolve_click(Pos::new(0, 4));
//!
//! assert!(state.board.is_empty(Pos::new(9, 4)));
//! assert_eq!(state.current_turn, Side::Black);
//! ```

pub mod board;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, PieceKind, Pos, Side, COLS, ROWS};
pub use ui::{ClickOutcome, GameState};
