use macroquad::prelude::*;

use crate::application::{Simulation, StepClock};
use crate::domain::{Grid, Pattern};
use crate::ui::{Button, CELL_SIZE, HUD_HEIGHT, PANEL_WIDTH, board_pixels};

const ALIVE_COLOR: Color = WHITE;
const GRID_LINE_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
const HUD_BG_COLOR: Color = Color::new(0.12, 0.12, 0.12, 1.0);
const TEXT_COLOR: Color = Color::new(0.78, 0.78, 0.78, 1.0);

/// Draw live cells and grid lines below the HUD
pub fn draw_board(grid: &Grid) {
    let (board_w, board_h) = board_pixels(grid.width(), grid.height());

    for (x, y) in grid.live_cells() {
        draw_rectangle(
            x as f32 * CELL_SIZE,
            y as f32 * CELL_SIZE + HUD_HEIGHT,
            CELL_SIZE,
            CELL_SIZE,
            ALIVE_COLOR,
        );
    }

    for col in 0..=grid.width() {
        let x = col as f32 * CELL_SIZE;
        draw_line(x, HUD_HEIGHT, x, HUD_HEIGHT + board_h, 1.0, GRID_LINE_COLOR);
    }
    for row in 0..=grid.height() {
        let y = HUD_HEIGHT + row as f32 * CELL_SIZE;
        draw_line(0.0, y, board_w, y, 1.0, GRID_LINE_COLOR);
    }
}

/// Status bar: key help on the first line, counters on the second
pub fn draw_hud(sim: &Simulation, clock: &StepClock) {
    draw_rectangle(0.0, 0.0, screen_width(), HUD_HEIGHT, HUD_BG_COLOR);

    let state = if sim.is_running() { "RUNNING" } else { "PAUSED" };
    let help = format!("Space:{state}  N:Step  R:Random  S:Save  L:Load  C:Clear  G:Stamp  P:Preset  T:Strategy  Q:Quit");
    let status = format!(
        "Generation: {}   Live Cells: {}   Target FPS: {:.0}   {}",
        sim.generation(),
        sim.live_count(),
        clock.updates_per_second(),
        sim.strategy().name(),
    );

    draw_text(&help, 10.0, 24.0, 18.0, TEXT_COLOR);
    draw_text(&status, 10.0, 48.0, 18.0, TEXT_COLOR);
}

/// Side panel to the right of the board, with the selected preset below the buttons
pub fn draw_panel(grid: &Grid, buttons: &[Button], preset: &Pattern, mouse_pos: (f32, f32)) {
    let (board_w, _) = board_pixels(grid.width(), grid.height());
    draw_rectangle(board_w, HUD_HEIGHT, PANEL_WIDTH, screen_height() - HUD_HEIGHT, HUD_BG_COLOR);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let text_y = buttons.last().map_or(HUD_HEIGHT, Button::bottom) + 24.0;
    draw_text(preset.name, board_w + 10.0, text_y, 18.0, WHITE);
    draw_text(preset.description, board_w + 10.0, text_y + 18.0, 14.0, TEXT_COLOR);
}
