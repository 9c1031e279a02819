//! Theme constants for the Xiangqi GUI

use egui::Color32;

use crate::{COLS, ROWS};

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 245, 220); // Beige
pub const GRID_LINE: Color32 = Color32::BLACK;
pub const RIVER_TEXT: Color32 = Color32::from_rgb(0, 0, 139); // Dark blue

// Piece colors
pub const RED_PIECE_FILL: Color32 = Color32::from_rgb(240, 128, 128); // Light coral
pub const BLACK_PIECE_FILL: Color32 = Color32::from_rgb(211, 211, 211); // Light gray
pub const PIECE_BORDER: Color32 = Color32::BLACK;
pub const RED_GLYPH: Color32 = Color32::from_rgb(139, 0, 0); // Dark red
pub const BLACK_GLYPH: Color32 = Color32::BLACK;

// Markers
pub const SELECTION_OUTLINE: Color32 = Color32::from_rgb(255, 0, 255); // Magenta

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const CELL_SIZE: f32 = 64.0;
pub const BOARD_MARGIN: f32 = 20.0;
pub const PIECE_DIAMETER_RATIO: f32 = 0.8;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const PIECE_BORDER_WIDTH: f32 = 2.0;
pub const SELECTION_WIDTH: f32 = 3.0;
pub const PIECE_FONT_SIZE: f32 = 28.0;
pub const RIVER_FONT_SIZE: f32 = 32.0;
/// Horizontal gap between the board center and each river label
pub const RIVER_GAP: f32 = 8.0;
pub const SIDE_PANEL_WIDTH: f32 = 260.0;

/// Canvas size holding the grid plus its margin
pub fn canvas_size() -> [f32; 2] {
    [
        COLS as f32 * CELL_SIZE + 2.0 * BOARD_MARGIN,
        ROWS as f32 * CELL_SIZE + 2.0 * BOARD_MARGIN,
    ]
}
