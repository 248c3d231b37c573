//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::application::{Simulation, StepClock};
use crate::domain::{GridError, Pattern, Strategy, presets};

#[derive(Parser, Debug, Clone)]
#[command(name = "life")]
#[command(version)]
#[command(about = "Conway's Game of Life interactive visualiser")]
pub struct Config {
    /// Width of the board in cells
    #[arg(long, default_value_t = 60)]
    pub width: usize,

    /// Height of the board in cells
    #[arg(long, default_value_t = 40)]
    pub height: usize,

    /// Generations per second while running
    #[arg(long, default_value_t = 10)]
    pub fps: u32,

    /// Fill the board at random on start (empty board when omitted)
    #[arg(long)]
    pub density: Option<f64>,

    /// Density used by the randomize key
    #[arg(long, default_value_t = 0.2)]
    pub random_density: f64,

    /// Random seed for reproducible boards
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pattern file loaded by the load key
    #[arg(long, default_value = "patterns/glider.txt")]
    pub pattern: PathBuf,

    /// Directory that saved patterns are written to
    #[arg(long, default_value = "patterns")]
    pub save_dir: PathBuf,

    /// Preset the stamp key starts on (e.g. Glider, LWSS, Acorn)
    #[arg(long, default_value = "Glider")]
    pub preset: String,

    /// Step rows in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 60,
            height: 40,
            fps: 10,
            density: None,
            random_density: 0.2,
            seed: None,
            pattern: PathBuf::from("patterns/glider.txt"),
            save_dir: PathBuf::from("patterns"),
            preset: "Glider".to_owned(),
            parallel: false,
        }
    }
}

impl Config {
    /// Validate configuration values
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.fps == 0 || self.fps as f32 > StepClock::MAX_UPDATES_PER_SECOND {
            return Err(GridError::InvalidArgument(format!(
                "fps {} is outside [1, {}]",
                self.fps,
                StepClock::MAX_UPDATES_PER_SECOND
            )));
        }
        self.starting_preset()?;
        for density in self.density.iter().chain([&self.random_density]) {
            if !(0.0..=1.0).contains(density) {
                return Err(GridError::InvalidArgument(format!(
                    "density {density} is outside [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Preset named by `--preset`
    pub fn starting_preset(&self) -> Result<Pattern, GridError> {
        presets::by_name(&self.preset)
            .ok_or_else(|| GridError::InvalidArgument(format!("unknown preset {:?}", self.preset)))
    }

    pub fn strategy(&self) -> Strategy {
        if self.parallel { Strategy::Parallel } else { Strategy::Serial }
    }

    /// Build the engine described by this configuration
    pub fn build_simulation(&self) -> Result<Simulation, GridError> {
        self.validate()?;

        let sim = match self.seed {
            Some(seed) => Simulation::with_seed(self.width, self.height, seed)?,
            None => Simulation::new(self.width, self.height)?,
        };
        let mut sim = sim.with_strategy(self.strategy());

        if let Some(density) = self.density {
            sim.randomize_board(density)?;
        }
        Ok(sim)
    }
}
