//! GUI module for the Xiangqi demo
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod fonts;
mod game_state;
mod theme;

pub use app::XiangqiApp;
pub use board_view::{cell_at, BoardView, DrawOp};
pub use fonts::{find_font, FontError, GlyphSet};
pub use game_state::{ClickOutcome, GameState, INSTRUCTIONS};
pub use theme::{canvas_size, SIDE_PANEL_WIDTH};
