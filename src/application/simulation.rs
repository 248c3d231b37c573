use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use crate::domain::{Cell, DecodedPattern, Grid, GridError, Pattern, Strategy, apply_pattern};

/// Play/pause state of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// Simulation owns the board and coordinates every change to it.
///
/// `live_count` is cached so HUD reads are O(1); every mutation path
/// refreshes it. `generation` only moves forward one step at a time and
/// returns to 0 when the board is replaced (clear, randomize, pattern load).
pub struct Simulation {
    grid: Grid,
    generation: u64,
    live_count: usize,
    state: RunState,
    strategy: Strategy,
    rng: StdRng,
}

impl Simulation {
    /// Empty, paused board with an OS-seeded random source
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Empty, paused board whose randomize calls are reproducible
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: usize, height: usize, rng: StdRng) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            generation: 0,
            live_count: 0,
            state: RunState::Paused,
            strategy: Strategy::default(),
            rng,
        })
    }

    /// Use a different stepping strategy (builder pattern)
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Read-only view of the board
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cached live cell count
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn run_state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn play(&mut self) {
        if self.state == RunState::Paused {
            debug!(generation = self.generation, "simulation running");
            self.state = RunState::Running;
        }
    }

    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            debug!(generation = self.generation, "simulation paused");
            self.state = RunState::Paused;
        }
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        match self.state {
            RunState::Paused => self.play(),
            RunState::Running => self.pause(),
        }
    }

    /// Flip one cell and return its new state.
    /// Generation and run state are unaffected.
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<Cell, GridError> {
        let cell = self.grid.get(x, y)?.toggle();
        self.grid.set(x, y, cell)?;
        self.live_count = self.grid.count_live();
        Ok(cell)
    }

    /// Advance one generation. Allowed while paused (manual stepping).
    pub fn step(&mut self) {
        self.grid = self.strategy.advance(&self.grid);
        self.generation += 1;
        self.live_count = self.grid.count_live();
        trace!(generation = self.generation, live = self.live_count, "step");
    }

    /// Advance `n` generations
    pub fn step_n(&mut self, n: u32) {
        (0..n).for_each(|_| self.step());
    }

    /// Kill every cell and reset the generation counter
    pub fn clear_board(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.live_count = 0;
        info!("board cleared");
    }

    /// Fill the board at random; the result counts as a new starting
    /// configuration (generation 0).
    pub fn randomize_board(&mut self, density: f64) -> Result<(), GridError> {
        self.grid.randomize(density, &mut self.rng)?;
        self.generation = 0;
        self.live_count = self.grid.count_live();
        info!(density, live = self.live_count, "board randomized");
        Ok(())
    }

    /// Replace the board with a decoded pattern, starting again at generation 0
    pub fn apply_pattern(&mut self, pattern: &DecodedPattern) -> Result<(), GridError> {
        apply_pattern(&mut self.grid, pattern)?;
        self.generation = 0;
        self.live_count = self.grid.count_live();
        info!(live = self.live_count, skipped = pattern.skipped(), "pattern applied");
        Ok(())
    }

    /// Stamp a preset onto the current board without clearing it.
    /// Like a batch of toggles, this keeps the generation counter.
    pub fn place_preset(&mut self, pattern: &Pattern, x: usize, y: usize) -> Result<(), GridError> {
        pattern.place_on(&mut self.grid, x, y)?;
        self.live_count = self.grid.count_live();
        debug!(pattern = pattern.name, x, y, "preset placed");
        Ok(())
    }
}
