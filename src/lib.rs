// Domain layer - grid, cell rule, pattern codec
pub mod domain;

// Application layer - simulation engine and pattern files
pub mod application;

pub mod config;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use application::{PatternStore, RunState, Simulation, StepClock};
pub use config::Config;
pub use domain::{Cell, DecodedPattern, Grid, GridError, Pattern, Strategy, presets};
