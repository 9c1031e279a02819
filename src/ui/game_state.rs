//! Game state management for the Xiangqi GUI
//!
//! Moves are applied without any legality checking: any selected piece may
//! be relocated to any cell, capturing whatever stands there.

use crate::{Board, Piece, Pos, Side};
use tracing::debug;

/// Instruction line shown under the turn indicator
pub const INSTRUCTIONS: &str = "Click a piece to select, click destination to move.";

/// What a click on a board cell did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No transition matched; nothing changed
    Ignored,
    /// Nothing was selected; the clicked own piece is now selected
    Selected(Pos),
    /// Another own piece was selected; selection moved to the clicked one
    Reselected(Pos),
    /// The selected piece was relocated and the turn passed
    Moved {
        from: Pos,
        to: Pos,
        captured: Option<Piece>,
    },
}

impl ClickOutcome {
    /// Whether the click changed any state
    pub fn changed(self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_turn: Side,
    pub selected: Option<Pos>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Side::Red,
            selected: None,
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_turn = Side::Red;
        self.selected = None;
        debug!("board reset");
    }

    /// Check if the cell holds a piece of the side to move
    fn owns(&self, pos: Pos) -> bool {
        self.board
            .get(pos)
            .is_some_and(|piece| piece.side == self.current_turn)
    }

    /// Select an own piece when nothing is selected yet. Returns whether
    /// the selection was made.
    pub fn select(&mut self, pos: Pos) -> bool {
        if self.selected.is_some() || !self.owns(pos) {
            return false;
        }
        self.selected = Some(pos);
        debug!(row = pos.row(), col = pos.col(), side = self.current_turn.name(), "selected");
        true
    }

    /// Apply a click on a board cell
    pub fn resolve_click(&mut self, pos: Pos) -> ClickOutcome {
        let Some(from) = self.selected else {
            return if self.select(pos) {
                ClickOutcome::Selected(pos)
            } else {
                ClickOutcome::Ignored
            };
        };

        // Clicking the selected cell again falls through to a self-capture
        if pos != from && self.owns(pos) {
            self.selected = Some(pos);
            debug!(row = pos.row(), col = pos.col(), "reselected");
            return ClickOutcome::Reselected(pos);
        }

        // Destination first, then the source: a move onto the selected cell
        // captures the moving piece and leaves the cell empty
        let captured = self.board.replace(pos, self.board.get(from));
        self.board.take(from);
        self.selected = None;
        self.current_turn = self.current_turn.opponent();

        debug!(
            from = ?(from.row(), from.col()),
            to = ?(pos.row(), pos.col()),
            captured = ?captured,
            next = self.current_turn.name(),
            "moved"
        );

        ClickOutcome::Moved { from, to: pos, captured }
    }

    /// Two-line status text: side to move, then instructions
    pub fn status_text(&self) -> String {
        format!("{}'s turn\n{}", self.current_turn.name(), INSTRUCTIONS)
    }
}
