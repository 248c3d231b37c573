mod button;

pub use button::Button;

/// Pixel size of one cell
pub const CELL_SIZE: f32 = 15.0;
/// Height of the status bar above the board
pub const HUD_HEIGHT: f32 = 60.0;
pub const PANEL_WIDTH: f32 = 140.0;
pub const BUTTON_HEIGHT: f32 = 36.0;

/// Everything the player can ask for, from a key or a button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    TogglePlay,
    Step,
    Clear,
    Randomize,
    Save,
    Load,
    StampPreset,
    NextPreset,
    ToggleStrategy,
    SpeedUp,
    SlowDown,
    Quit,
}

/// Pixel size of the board area for a `width` x `height` grid
pub fn board_pixels(width: usize, height: usize) -> (f32, f32) {
    (width as f32 * CELL_SIZE, height as f32 * CELL_SIZE)
}

/// Window size needed for the board, HUD and side panel
pub fn window_pixels(width: usize, height: usize) -> (f32, f32) {
    let (board_w, board_h) = board_pixels(width, height);
    (board_w + PANEL_WIDTH, (board_h + HUD_HEIGHT).max(HUD_HEIGHT + 6.0 * (BUTTON_HEIGHT + 10.0)))
}

/// Map a screen position to a cell position.
/// Positions above the board return `None`; positions right of or below
/// the board map to out-of-range cells, which the grid itself rejects.
pub fn screen_to_cell(x: f32, y: f32) -> Option<(usize, usize)> {
    if x < 0.0 || y < HUD_HEIGHT {
        return None;
    }
    Some(((x / CELL_SIZE) as usize, ((y - HUD_HEIGHT) / CELL_SIZE) as usize))
}

/// Side panel buttons, stacked below the HUD at `panel_x`
pub fn create_buttons(panel_x: f32) -> Vec<Button> {
    [
        ("Play/Pause", Action::TogglePlay),
        ("Step", Action::Step),
        ("Clear", Action::Clear),
        ("Random", Action::Randomize),
        ("Preset", Action::StampPreset),
        ("Next Preset", Action::NextPreset),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (label, action))| {
        let y = HUD_HEIGHT + 10.0 + i as f32 * (BUTTON_HEIGHT + 10.0);
        Button::new(panel_x + 10.0, y, PANEL_WIDTH - 20.0, BUTTON_HEIGHT, label, action)
    })
    .collect()
}
