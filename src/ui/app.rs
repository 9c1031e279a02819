//! Main application for the Xiangqi GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel};

use super::board_view::BoardView;
use super::fonts;
use super::game_state::GameState;
use super::theme::*;
use crate::Side;

/// Main Xiangqi application
pub struct XiangqiApp {
    state: GameState,
    board_view: BoardView,
}

impl XiangqiApp {
    /// Create the app, registering glyph fonts with the egui context
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let glyphs = fonts::install(&cc.egui_ctx);
        Self {
            state: GameState::new(),
            board_view: BoardView::new(glyphs),
        }
    }

    fn new_game(&mut self, ctx: &Context) {
        self.state.reset();
        ctx.request_repaint();
    }

    /// Render the side panel with status label and reset button
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(RichText::new("XIANGQI").size(22.0).strong().color(TEXT_PRIMARY));
                ui.label(RichText::new("象棋").size(11.0).color(TEXT_MUTED));
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                if ui.button(RichText::new("New Game").size(14.0)).clicked() {
                    self.new_game(ctx);
                }

                ui.add_space(8.0);
                ui.label(RichText::new("N - new game").size(10.0).color(TEXT_MUTED));
            });
    }

    /// Turn indicator and instructions
    fn render_status_card(&self, ui: &mut egui::Ui) {
        let accent = match self.state.current_turn {
            Side::Red => RED_PIECE_FILL,
            Side::Black => BLACK_PIECE_FILL,
        };
        let status = self.state.status_text();
        let mut lines = status.lines();

        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                if let Some(turn) = lines.next() {
                    ui.label(RichText::new(turn).size(18.0).strong().color(accent));
                }
                for line in lines {
                    ui.label(RichText::new(line).size(12.0).color(TEXT_SECONDARY));
                }
            });
    }

    /// Render the board and forward clicks to the game state
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let Some(pos) = self.board_view.show(ui, &self.state) else {
                return;
            };
            if self.state.resolve_click(pos).changed() {
                ctx.request_repaint();
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.new_game(ctx);
        }
    }
}

impl eframe::App for XiangqiApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
