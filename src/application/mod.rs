mod clock;
mod persistence;
mod simulation;

pub use clock::StepClock;
pub use persistence::PatternStore;
pub use simulation::{RunState, Simulation};
