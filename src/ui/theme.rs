//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const CELL_BG: Color32 = Color32::from_rgb(250, 226, 90); // Yellow
pub const CELL_BG_HOVER: Color32 = Color32::from_rgb(255, 238, 140);
pub const GRID_LINE: Color32 = Color32::from_rgb(20, 20, 20);

// Marks
pub const X_COLOR: Color32 = Color32::from_rgb(40, 80, 220); // Blue
pub const O_COLOR: Color32 = Color32::from_rgb(210, 45, 45); // Red

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(60, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 190, 50);

// Functions for colors that can't be const
pub fn hover_preview(mark: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(mark.r(), mark.g(), mark.b(), 70)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(32, 34, 37);
pub const CARD_BG: Color32 = Color32::from_rgb(42, 44, 48);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const BUTTON_BG: Color32 = Color32::from_rgb(60, 100, 70);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MAX_SIDE: f32 = 300.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const MARK_WIDTH: f32 = 8.0;
pub const MARK_INSET_RATIO: f32 = 0.22;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const WIN_LINE_WIDTH: f32 = 6.0;
