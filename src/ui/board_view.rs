//! Board rendering and pointer mapping for the Xiangqi GUI
//!
//! Drawing happens in two passes: [`BoardView::scene`] turns the game state
//! into a list of [`DrawOp`]s, then the ops are replayed onto an egui painter.

use crate::{Piece, Pos, Side, COLS, ROWS};
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::fonts::GlyphSet;
use super::game_state::GameState;
use super::theme::*;

/// A single drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fill {
        rect: Rect,
        color: Color32,
    },
    Line {
        points: [Pos2; 2],
        stroke: Stroke,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: &'static str,
        size: f32,
        color: Color32,
    },
    Token {
        center: Pos2,
        radius: f32,
        fill: Color32,
        border: Stroke,
        glyph: &'static str,
        glyph_color: Color32,
    },
    Outline {
        rect: Rect,
        stroke: Stroke,
    },
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    glyphs: GlyphSet,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            board_rect: Rect::NOTHING,
            glyphs: GlyphSet::default(),
        }
    }
}

impl BoardView {
    pub fn new(glyphs: GlyphSet) -> Self {
        Self {
            glyphs,
            ..Self::default()
        }
    }

    /// Render the board and return the cell pressed this frame, if any
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState) -> Option<Pos> {
        let (response, painter) = ui.allocate_painter(Vec2::from(canvas_size()), Sense::click());
        self.board_rect = response.rect;

        for op in self.scene(state) {
            Self::paint(&painter, op);
        }

        // Act on pointer-down, not on release
        let press = ui.input(|i| {
            i.pointer
                .primary_pressed()
                .then(|| i.pointer.press_origin())
                .flatten()
        });
        self.pressed_cell(press)
    }

    /// Cell under a primary-button press, ignoring presses off the canvas
    pub fn pressed_cell(&self, press: Option<Pos2>) -> Option<Pos> {
        press
            .filter(|origin| self.board_rect.contains(*origin))
            .and_then(|origin| self.screen_to_board(origin))
    }

    /// Build the draw list for the current state. Reads state only.
    pub fn scene(&self, state: &GameState) -> Vec<DrawOp> {
        let mut ops = Vec::with_capacity(64);

        ops.push(DrawOp::Fill {
            rect: self.board_rect,
            color: BOARD_BG,
        });
        self.grid_ops(&mut ops);
        self.river_ops(&mut ops);

        for (pos, piece) in state.board.pieces() {
            ops.push(self.token_op(pos, piece));
        }

        if let Some(pos) = state.selected {
            let side = Vec2::splat(self.cell_size);
            ops.push(DrawOp::Outline {
                rect: Rect::from_center_size(self.board_to_screen(pos), side),
                stroke: Stroke::new(SELECTION_WIDTH, SELECTION_OUTLINE),
            });
        }

        ops
    }

    /// Horizontal and vertical lines through every intersection
    fn grid_ops(&self, ops: &mut Vec<DrawOp>) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let width = (COLS as f32 - 1.0) * self.cell_size;
        let height = (ROWS as f32 - 1.0) * self.cell_size;
        let origin = self.board_to_screen(Pos::new(0, 0));

        for row in 0..ROWS {
            let y = origin.y + row as f32 * self.cell_size;
            ops.push(DrawOp::Line {
                points: [Pos2::new(origin.x, y), Pos2::new(origin.x + width, y)],
                stroke,
            });
        }
        for col in 0..COLS {
            let x = origin.x + col as f32 * self.cell_size;
            ops.push(DrawOp::Line {
                points: [Pos2::new(x, origin.y), Pos2::new(x, origin.y + height)],
                stroke,
            });
        }
    }

    /// River labels in the gap between rows 4 and 5
    fn river_ops(&self, ops: &mut Vec<DrawOp>) {
        let origin = self.board_to_screen(Pos::new(0, 0));
        let center_x = origin.x + (COLS as f32 - 1.0) * self.cell_size / 2.0;
        let river_y = origin.y + 4.5 * self.cell_size;
        let (left, right) = self.glyphs.river();

        ops.push(DrawOp::Text {
            pos: Pos2::new(center_x - RIVER_GAP, river_y),
            anchor: Align2::RIGHT_CENTER,
            text: left,
            size: RIVER_FONT_SIZE,
            color: RIVER_TEXT,
        });
        ops.push(DrawOp::Text {
            pos: Pos2::new(center_x + RIVER_GAP, river_y),
            anchor: Align2::LEFT_CENTER,
            text: right,
            size: RIVER_FONT_SIZE,
            color: RIVER_TEXT,
        });
    }

    fn token_op(&self, pos: Pos, piece: Piece) -> DrawOp {
        let (fill, glyph_color) = match piece.side {
            Side::Red => (RED_PIECE_FILL, RED_GLYPH),
            Side::Black => (BLACK_PIECE_FILL, BLACK_GLYPH),
        };
        DrawOp::Token {
            center: self.board_to_screen(pos),
            radius: self.cell_size * PIECE_DIAMETER_RATIO / 2.0,
            fill,
            border: Stroke::new(PIECE_BORDER_WIDTH, PIECE_BORDER),
            glyph: self.glyphs.piece(piece),
            glyph_color,
        }
    }

    fn paint(painter: &Painter, op: DrawOp) {
        match op {
            DrawOp::Fill { rect, color } => {
                painter.rect_filled(rect, CornerRadius::ZERO, color);
            }
            DrawOp::Line { points, stroke } => {
                painter.line_segment(points, stroke);
            }
            DrawOp::Text { pos, anchor, text, size, color } => {
                painter.text(pos, anchor, text, FontId::proportional(size), color);
            }
            DrawOp::Token { center, radius, fill, border, glyph, glyph_color } => {
                painter.circle(center, radius, fill, border);
                painter.text(
                    center,
                    Align2::CENTER_CENTER,
                    glyph,
                    FontId::proportional(PIECE_FONT_SIZE),
                    glyph_color,
                );
            }
            DrawOp::Outline { rect, stroke } => {
                painter.rect_stroke(rect, CornerRadius::ZERO, stroke, StrokeKind::Middle);
            }
        }
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        cell_at(screen_pos - self.board_rect.min, self.cell_size)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col() as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row() as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}

/// Resolve a canvas-relative pointer offset to the nearest intersection.
///
/// Offsets more than half a cell before the first line are rejected, as is
/// anything rounding outside the grid.
pub fn cell_at(relative: Vec2, cell_size: f32) -> Option<Pos> {
    let x = relative.x - BOARD_MARGIN;
    let y = relative.y - BOARD_MARGIN;
    let half = cell_size / 2.0;
    if x < -half || y < -half {
        return None;
    }

    let col = (x / cell_size).round() as i32;
    let row = (y / cell_size).round() as i32;
    Pos::try_new(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_at(origin: Pos2, glyphs: GlyphSet) -> BoardView {
        BoardView {
            cell_size: CELL_SIZE,
            board_rect: Rect::from_min_size(origin, Vec2::from(canvas_size())),
            glyphs,
        }
    }

    fn tokens(ops: &[DrawOp]) -> Vec<&DrawOp> {
        ops.iter().filter(|op| matches!(op, DrawOp::Token { .. })).collect()
    }

    /// Offset of an intersection from the canvas corner
    fn at(row: f32, col: f32) -> Vec2 {
        Vec2::new(BOARD_MARGIN + col * CELL_SIZE, BOARD_MARGIN + row * CELL_SIZE)
    }

    #[test]
    fn test_cell_at_intersections() {
        assert_eq!(cell_at(at(0.0, 0.0), CELL_SIZE), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(at(9.0, 4.0), CELL_SIZE), Some(Pos::new(9, 4)));
        assert_eq!(cell_at(at(9.0, 8.0), CELL_SIZE), Some(Pos::new(9, 8)));
    }

    #[test]
    fn test_cell_at_rounds_to_nearest() {
        assert_eq!(cell_at(at(2.4, 3.4), CELL_SIZE), Some(Pos::new(2, 3)));
        assert_eq!(cell_at(at(2.6, 3.6), CELL_SIZE), Some(Pos::new(3, 4)));
        // Halfway rounds away from zero
        assert_eq!(cell_at(at(0.5, 0.5), CELL_SIZE), Some(Pos::new(1, 1)));
    }

    #[test]
    fn test_cell_at_tolerance_before_first_line() {
        assert_eq!(cell_at(at(-0.3, -0.3), CELL_SIZE), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(Vec2::ZERO, CELL_SIZE), Some(Pos::new(0, 0)));
        assert_eq!(cell_at(at(-0.6, 0.0), CELL_SIZE), None);
        assert_eq!(cell_at(at(0.0, -0.6), CELL_SIZE), None);
        assert_eq!(cell_at(Vec2::new(-100.0, 50.0), CELL_SIZE), None);
    }

    #[test]
    fn test_cell_at_past_last_line() {
        assert_eq!(cell_at(at(0.0, 8.4), CELL_SIZE), Some(Pos::new(0, 8)));
        assert_eq!(cell_at(at(0.0, 8.6), CELL_SIZE), None);
        assert_eq!(cell_at(at(9.6, 0.0), CELL_SIZE), None);
        assert_eq!(cell_at(at(20.0, 20.0), CELL_SIZE), None);
    }

    #[test]
    fn test_screen_round_trip() {
        let view = view_at(Pos2::new(137.0, 42.0), GlyphSet::Latin);
        for pos in Pos::all() {
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
        assert_eq!(view.screen_to_board(Pos2::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_pressed_cell() {
        let view = view_at(Pos2::new(100.0, 50.0), GlyphSet::Latin);
        let general = view.board_to_screen(Pos::new(9, 4));

        assert_eq!(view.pressed_cell(None), None);
        assert_eq!(view.pressed_cell(Some(general)), Some(Pos::new(9, 4)));
        assert_eq!(
            view.pressed_cell(Some(general + Vec2::new(10.0, -10.0))),
            Some(Pos::new(9, 4))
        );
        // Off the canvas entirely
        assert_eq!(view.pressed_cell(Some(Pos2::new(10.0, 10.0))), None);
        // On the canvas, past the last column
        let right_edge = Pos2::new(view.board_rect.max.x - 1.0, general.y);
        assert_eq!(view.pressed_cell(Some(right_edge)), None);
    }

    #[test]
    fn test_scene_is_idempotent() {
        let view = view_at(Pos2::ZERO, GlyphSet::Hanzi);
        let mut state = GameState::new();
        assert_eq!(view.scene(&state), view.scene(&state));

        state.resolve_click(Pos::new(9, 4));
        let before = state.clone();
        let first = view.scene(&state);
        let second = view.scene(&state);
        assert_eq!(first, second);
        assert_eq!(state.board, before.board);
        assert_eq!(state.selected, before.selected);
        assert_eq!(state.current_turn, before.current_turn);
    }

    #[test]
    fn test_scene_contents() {
        let view = view_at(Pos2::ZERO, GlyphSet::Hanzi);
        let state = GameState::new();
        let ops = view.scene(&state);

        let lines = ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count();
        assert_eq!(lines, ROWS + COLS);

        let labels: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(*text),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["楚河", "漢界"]);

        assert_eq!(tokens(&ops).len(), 32);
        assert!(!ops.iter().any(|op| matches!(op, DrawOp::Outline { .. })));
    }

    #[test]
    fn test_token_styling() {
        let view = view_at(Pos2::ZERO, GlyphSet::Hanzi);
        let ops = view.scene(&GameState::new());

        let red_general = tokens(&ops).into_iter().find(|op| {
            matches!(op, DrawOp::Token { center, .. } if *center == view.board_to_screen(Pos::new(9, 4)))
        });
        match red_general {
            Some(DrawOp::Token { radius, fill, glyph, glyph_color, .. }) => {
                assert_eq!(*radius, CELL_SIZE * 0.4);
                assert_eq!(*fill, RED_PIECE_FILL);
                assert_eq!(*glyph, "帥");
                assert_eq!(*glyph_color, RED_GLYPH);
            }
            other => panic!("expected token, got {:?}", other),
        }
    }

    #[test]
    fn test_selection_outline_centered() {
        let view = view_at(Pos2::ZERO, GlyphSet::Latin);
        let mut state = GameState::new();
        state.resolve_click(Pos::new(7, 1));

        let outline = view.scene(&state).into_iter().find_map(|op| match op {
            DrawOp::Outline { rect, .. } => Some(rect),
            _ => None,
        });
        let rect = outline.expect("selection outline");
        assert_eq!(rect.center(), view.board_to_screen(Pos::new(7, 1)));
        assert_eq!(rect.width(), CELL_SIZE);
        assert_eq!(rect.height(), CELL_SIZE);
    }

    #[test]
    fn test_latin_glyphs() {
        let view = view_at(Pos2::ZERO, GlyphSet::Latin);
        let ops = view.scene(&GameState::new());
        assert!(ops.iter().any(|op| matches!(op, DrawOp::Text { text: "Chu River", .. })));
        assert!(tokens(&ops)
            .iter()
            .any(|op| matches!(op, DrawOp::Token { glyph: "g", .. })));
    }
}
