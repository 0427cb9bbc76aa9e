//! Main application for the tic-tac-toe GUI

use std::sync::mpsc::Receiver;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, TopBottomPanel};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::board::{Player, Pos, TOTAL_CELLS};
use crate::config::UiConfig;
use crate::game::{GameController, GameState};
use crate::rules::GameStatus;

/// User intent collected while rendering, applied after the frame is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Play(usize),
    Reset,
    Undo,
}

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    controller: GameController,
    /// Snapshots published by the controller
    updates: Receiver<GameState>,
    /// Latest snapshot; the only state the view reads
    view: GameState,
    board_view: BoardView,
    settings: UiConfig,
    message: Option<String>,
    pending: Vec<Action>,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: UiConfig) -> Self {
        Self::with_settings(settings)
    }

    fn with_settings(settings: UiConfig) -> Self {
        let mut controller = GameController::new();
        let updates = controller.subscribe();
        let view = controller.state().clone();
        Self {
            controller,
            updates,
            view,
            board_view: BoardView::default(),
            settings,
            message: None,
            pending: Vec::new(),
        }
    }

    /// Status line shown above the board
    fn status_text(state: &GameState) -> String {
        match state.status() {
            GameStatus::InProgress => format!("Player {}'s Turn", state.current_player()),
            GameStatus::XWins => "Player X Wins!".to_string(),
            GameStatus::OWins => "Player O Wins!".to_string(),
            GameStatus::Draw => "It's a Draw!".to_string(),
        }
    }

    fn mark_color(player: Player) -> egui::Color32 {
        match player {
            Player::X => X_COLOR,
            Player::O => O_COLOR,
        }
    }

    /// Apply queued actions to the controller
    fn apply_pending(&mut self) {
        for action in std::mem::take(&mut self.pending) {
            match action {
                Action::Play(index) => match self.controller.apply_move(index) {
                    Ok(_) => self.message = None,
                    Err(err) => {
                        if self.settings.show_rejections {
                            self.message = Some(err.to_string());
                        }
                    }
                },
                Action::Reset => {
                    self.controller.reset();
                    self.message = None;
                }
                Action::Undo => {
                    if self.controller.undo() {
                        self.message = None;
                    }
                }
            }
        }
    }

    /// Toggle rejection messages; turning them off drops any message on screen
    fn set_show_rejections(&mut self, show: bool) {
        self.settings.show_rejections = show;
        if !show {
            self.message = None;
        }
    }

    /// Rejection message to render, if messages are enabled
    fn visible_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|_| self.settings.show_rejections)
    }

    /// Pull published snapshots into the view. Returns true if anything changed.
    fn sync_view(&mut self) -> bool {
        let mut changed = false;
        for state in self.updates.try_iter() {
            self.view = state;
            changed = true;
        }
        if changed {
            debug!(board = %self.view.board(), status = ?self.view.status(), "view updated");
        }
        changed
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.pending.push(Action::Reset);
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.pending.push(Action::Undo);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.settings.show_history, "Move History");
                    if ui
                        .checkbox(&mut self.settings.show_rejections, "Explain Ignored Clicks")
                        .changed()
                    {
                        self.set_show_rejections(self.settings.show_rejections);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Move #{}", self.view.board().mark_count()));
                });
            });
        });
    }

    /// Render the status line, board and controls
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(16.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let color = match self.view.status() {
                        GameStatus::InProgress => Self::mark_color(self.view.current_player()),
                        GameStatus::XWins | GameStatus::OWins => WIN_HIGHLIGHT,
                        GameStatus::Draw => TEXT_PRIMARY,
                    };
                    ui.label(
                        RichText::new(Self::status_text(&self.view))
                            .size(24.0)
                            .strong()
                            .color(color),
                    );
                    ui.add_space(16.0);

                    if let Some(pos) = self.board_view.show(ui, &self.view) {
                        self.pending.push(Action::Play(pos.to_index()));
                    }

                    ui.add_space(16.0);

                    if self.view.is_over() {
                        self.render_game_over_card(ui);
                    }

                    if let Some(msg) = self.visible_message() {
                        ui.add_space(10.0);
                        Self::render_message_card(ui, msg);
                    }

                    if self.settings.show_history {
                        ui.add_space(10.0);
                        self.render_history_card(ui);
                    }
                });
            });
    }

    /// "Play Again" card shown once the game has ended
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                let button = egui::Button::new(
                    RichText::new("Play Again").size(16.0).strong().color(TEXT_PRIMARY),
                )
                .fill(BUTTON_BG)
                .corner_radius(CornerRadius::same(6));
                if ui.add(button).clicked() {
                    self.pending.push(Action::Reset);
                }
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(12.0).color(TEXT_PRIMARY));
                });
            });
    }

    fn render_history_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
                ui.add_space(4.0);

                let history = self.view.history();
                if history.is_empty() {
                    ui.label(RichText::new("No moves yet").size(11.0).color(TEXT_SECONDARY));
                    return;
                }

                ui.horizontal_wrapped(|ui| {
                    let mut player = Player::X;
                    for (n, pos) in history.iter().enumerate() {
                        let text = format!("{}. {}{}", n + 1, player, Self::coordinate(*pos));
                        ui.label(RichText::new(text).size(11.0).color(Self::mark_color(player)));
                        player = player.opponent();
                    }
                });
            });
    }

    /// Human-readable cell name, e.g. "B2" for the center
    fn coordinate(pos: Pos) -> String {
        let col = (b'A' + pos.col) as char;
        format!("{}{}", col, pos.row + 1)
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        const CELL_KEYS: [egui::Key; TOTAL_CELLS] = [
            egui::Key::Num1,
            egui::Key::Num2,
            egui::Key::Num3,
            egui::Key::Num4,
            egui::Key::Num5,
            egui::Key::Num6,
            egui::Key::Num7,
            egui::Key::Num8,
            egui::Key::Num9,
        ];

        ctx.input(|i| {
            // 1-9 - Play cell, row by row from the top-left
            for (index, key) in CELL_KEYS.iter().enumerate() {
                if i.key_pressed(*key) {
                    self.pending.push(Action::Play(index));
                }
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.pending.push(Action::Undo);
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.pending.push(Action::Reset);
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Render UI
        self.render_menu_bar(ctx);
        self.render_board(ctx);

        // Apply what the user did this frame and redraw with the new snapshot
        self.apply_pending();
        if self.sync_view() {
            ctx.request_repaint();
        }
    }
}
