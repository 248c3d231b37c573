use std::path::PathBuf;

use macroquad::prelude::*;
use tracing::{error, warn};

use crate::application::{PatternStore, Simulation, StepClock};
use crate::domain::{GridError, Pattern, Strategy, presets};
use crate::ui::{Action, Button, screen_to_cell};

/// Key bindings, checked in order every frame
const KEY_BINDINGS: [(KeyCode, Action); 12] = [
    (KeyCode::Space, Action::TogglePlay),
    (KeyCode::N, Action::Step),
    (KeyCode::C, Action::Clear),
    (KeyCode::R, Action::Randomize),
    (KeyCode::S, Action::Save),
    (KeyCode::L, Action::Load),
    (KeyCode::G, Action::StampPreset),
    (KeyCode::P, Action::NextPreset),
    (KeyCode::T, Action::ToggleStrategy),
    (KeyCode::Up, Action::SpeedUp),
    (KeyCode::Down, Action::SlowDown),
    (KeyCode::Q, Action::Quit),
];

/// What the frontend needs besides the engine to carry out an action
pub struct Controls {
    pub store: PatternStore,
    pub pattern_path: PathBuf,
    pub random_density: f64,
    presets: [Pattern; 10],
    selected: usize,
}

impl Controls {
    /// Controls whose preset key starts on `preset`
    pub fn new(store: PatternStore, pattern_path: PathBuf, random_density: f64, preset: Pattern) -> Self {
        let presets = presets::all_patterns();
        let selected = presets.iter().position(|p| *p == preset).unwrap_or(0);
        Self { store, pattern_path, random_density, presets, selected }
    }

    /// Preset stamped by the preset key
    pub fn preset(&self) -> &Pattern {
        &self.presets[self.selected]
    }

    /// Move on to the next preset, wrapping around
    pub fn next_preset(&mut self) {
        self.selected = (self.selected + 1) % self.presets.len();
    }
}

/// Actions requested this frame by keys and panel buttons
pub fn poll_actions(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Action> {
    KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action)
        .chain(buttons.iter().filter(|btn| btn.is_clicked(mouse_pos)).map(Button::action))
        .collect()
}

/// Left click on the board toggles a cell and pauses so the player can draw
pub fn handle_board_click(sim: &mut Simulation, mouse_pos: (f32, f32)) {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    let Some((x, y)) = screen_to_cell(mouse_pos.0, mouse_pos.1) else {
        return;
    };

    match sim.toggle_cell(x, y) {
        Ok(_) => sim.pause(),
        // Clicks on the panel land past the last column
        Err(GridError::OutOfBounds { .. }) => {}
        Err(e) => warn!("Toggle failed: {e}"),
    }
}

/// Carry out one action. Returns `false` when the player asked to quit.
pub fn apply_action(action: Action, sim: &mut Simulation, clock: &mut StepClock, controls: &mut Controls) -> bool {
    match action {
        Action::TogglePlay => {
            sim.toggle_running();
            clock.reset();
        }
        Action::Step => {
            if !sim.is_running() {
                sim.step();
            }
        }
        Action::Clear => {
            sim.clear_board();
            sim.pause();
        }
        Action::Randomize => match sim.randomize_board(controls.random_density) {
            Ok(()) => sim.pause(),
            Err(e) => error!("Randomize failed: {e}"),
        },
        Action::Save => {
            if let Err(e) = controls.store.save_snapshot(sim) {
                error!("Save failed: {e:#}");
            }
        }
        Action::Load => match controls.store.load(&controls.pattern_path, sim) {
            Ok(_) => sim.pause(),
            Err(e) => error!("Load failed: {e:#}"),
        },
        Action::StampPreset => {
            let preset = *controls.preset();
            let x = sim.dimensions().0.saturating_sub(preset.width()) / 2;
            let y = sim.dimensions().1.saturating_sub(preset.height()) / 2;
            match sim.place_preset(&preset, x, y) {
                Ok(()) => sim.pause(),
                Err(e) => warn!("Board too small for {}: {e}", preset.name),
            }
        }
        Action::NextPreset => controls.next_preset(),
        Action::ToggleStrategy => sim.set_strategy(match sim.strategy() {
            Strategy::Serial => Strategy::Parallel,
            Strategy::Parallel => Strategy::Serial,
        }),
        Action::SpeedUp => clock.adjust_speed(1.0),
        Action::SlowDown => clock.adjust_speed(-1.0),
        Action::Quit => return false,
    }
    true
}
