use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_engine::{
    Config, PatternStore, StepClock,
    input::{self, Controls},
    rendering, ui,
};

fn window_conf() -> Conf {
    let config = Config::parse();
    let (width, height) = ui::window_pixels(config.width.max(1), config.height.max(1));
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    let mut sim = match config.build_simulation() {
        Ok(sim) => sim,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    info!(
        width = config.width,
        height = config.height,
        strategy = sim.strategy().name(),
        "simulation ready"
    );

    let mut clock = StepClock::new(config.fps as f32);
    let preset = match config.starting_preset() {
        Ok(preset) => preset,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(2);
        }
    };
    let mut controls = Controls::new(
        PatternStore::new(&config.save_dir),
        config.pattern.clone(),
        config.random_density,
        preset,
    );
    info!(save_dir = %controls.store.dir().display(), preset = preset.name, "controls ready");
    let (board_w, _) = ui::board_pixels(config.width, config.height);
    let buttons = ui::create_buttons(board_w);

    loop {
        let mouse_pos = mouse_position();

        let actions = input::poll_actions(&buttons, mouse_pos);
        if !actions
            .into_iter()
            .all(|action| input::apply_action(action, &mut sim, &mut clock, &mut controls))
        {
            break;
        }
        input::handle_board_click(&mut sim, mouse_pos);

        if sim.is_running() {
            sim.step_n(clock.advance(get_frame_time()));
        }

        clear_background(BLACK);
        rendering::draw_hud(&sim, &clock);
        rendering::draw_board(sim.grid());
        rendering::draw_panel(sim.grid(), &buttons, controls.preset(), mouse_pos);

        next_frame().await;
    }
}
