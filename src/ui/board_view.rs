//! Board rendering for the tic-tac-toe GUI

use crate::board::{Board, Cell, Player, Pos, BOARD_SIZE};
use crate::game::GameState;
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: BOARD_MAX_SIDE / BOARD_SIZE as f32,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks on occupied cells are reported too; the controller decides
    /// whether they are legal.
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_side = available_size
            .x
            .min(available_size.y)
            .min(BOARD_MAX_SIDE)
            .max(BOARD_SIZE as f32);
        self.cell_size = board_side / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_side, board_side), Sense::click());

        self.board_rect = response.rect;

        let hovered = if state.is_over() {
            None
        } else {
            response.hover_pos().and_then(|p| self.screen_to_board(p))
        };

        self.draw_cells(&painter, hovered);
        self.draw_grid(&painter);
        self.draw_marks(&painter, state.board());

        if let Some(pos) = state.last_move() {
            self.draw_last_move_marker(&painter, pos);
        }

        if let Some(line) = state.winning_line() {
            self.draw_winning_line(&painter, &line);
        }

        if let Some(pos) = preview_cell(state, hovered) {
            self.draw_hover_preview(&painter, pos, state.current_player());
        }

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .and_then(|p| self.screen_to_board(p));
        }

        None
    }

    /// Fill cell backgrounds
    fn draw_cells(&self, painter: &Painter, hovered: Option<Pos>) {
        for pos in Pos::all() {
            let fill = if hovered == Some(pos) {
                CELL_BG_HOVER
            } else {
                CELL_BG
            };
            painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, fill);
        }
    }

    /// Draw the outer border and the 3x3 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let side = self.cell_size * BOARD_SIZE as f32;

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, 0.0);
            let end = self.board_rect.min + Vec2::new(offset, side);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(0.0, offset);
            let end = self.board_rect.min + Vec2::new(side, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            match board.get(pos) {
                Cell::X => self.draw_x(painter, pos, X_COLOR),
                Cell::O => self.draw_o(painter, pos, O_COLOR),
                Cell::Empty => {}
            }
        }
    }

    fn draw_x(&self, painter: &Painter, pos: Pos, color: Color32) {
        let rect = self.cell_rect(pos).shrink(self.cell_size * MARK_INSET_RATIO);
        let stroke = Stroke::new(MARK_WIDTH, color);
        painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
    }

    fn draw_o(&self, painter: &Painter, pos: Pos, color: Color32) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * (0.5 - MARK_INSET_RATIO);
        painter.circle_stroke(center, radius, Stroke::new(MARK_WIDTH, color));
    }

    /// Small dot in the corner of the last played cell
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let inset = LAST_MOVE_MARKER_RADIUS * 2.5;
        let center = rect.right_top() + Vec2::new(-inset, inset);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Strike through the winning triple
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        let start = self.board_to_screen(line[0]);
        let end = self.board_to_screen(line[2]);
        painter.line_segment([start, end], stroke);

        for pos in line {
            painter.rect_filled(
                self.cell_rect(*pos).shrink(self.cell_size * 0.45),
                CornerRadius::same(2),
                WIN_HIGHLIGHT,
            );
        }
    }

    /// Faint preview of the mark the current player would place
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player) {
        match turn {
            Player::X => self.draw_x(painter, pos, hover_preview(X_COLOR)),
            Player::O => self.draw_o(painter, pos, hover_preview(O_COLOR)),
        }
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                pos.col as f32 * self.cell_size,
                pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.board_rect.contains(screen_pos) {
            return None;
        }
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        let in_range = |v: i32| v >= 0 && v < BOARD_SIZE as i32;
        if in_range(col) && in_range(row) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

/// Hovered cell that should show a preview mark: only where a move would be
/// accepted
fn preview_cell(state: &GameState, hovered: Option<Pos>) -> Option<Pos> {
    hovered.filter(|pos| state.can_play(pos.to_index()))
}
