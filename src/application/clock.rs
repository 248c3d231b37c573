/// Converts frame time into a number of simulation steps at a fixed rate.
///
/// The engine has no notion of time; the frontend owns one of these and
/// calls `Simulation::step` as many times as `advance` says.
#[derive(Clone, Debug)]
pub struct StepClock {
    updates_per_second: f32,
    accumulated: f32,
}

impl StepClock {
    /// Most steps a single frame may request, so a stalled frame
    /// cannot trigger a long catch-up burst.
    pub const MAX_STEPS_PER_FRAME: u32 = 4;
    /// Fastest supported rate, in generations per second
    pub const MAX_UPDATES_PER_SECOND: f32 = 240.0;

    pub fn new(updates_per_second: f32) -> Self {
        Self {
            updates_per_second: updates_per_second.clamp(1.0, Self::MAX_UPDATES_PER_SECOND),
            accumulated: 0.0,
        }
    }

    pub fn updates_per_second(&self) -> f32 {
        self.updates_per_second
    }

    /// Adjust simulation speed
    pub fn adjust_speed(&mut self, delta: f32) {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, Self::MAX_UPDATES_PER_SECOND);
    }

    /// Add `delta_time` seconds and return how many steps are due
    pub fn advance(&mut self, delta_time: f32) -> u32 {
        let interval = 1.0 / self.updates_per_second;
        self.accumulated += delta_time.max(0.0);

        let mut due = 0;
        while self.accumulated >= interval && due < Self::MAX_STEPS_PER_FRAME {
            self.accumulated -= interval;
            due += 1;
        }
        // Backlog beyond the per-frame cap is dropped, not carried over
        if self.accumulated >= interval {
            self.accumulated = 0.0;
        }
        due
    }

    /// Drop any partially accumulated time (e.g. on pause)
    pub fn reset(&mut self) {
        self.accumulated = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_at_fixed_rate() {
        let mut clock = StepClock::new(10.0);
        assert_eq!(clock.advance(0.05), 0);
        assert_eq!(clock.advance(0.06), 1);
        assert_eq!(clock.advance(0.25), 2);
    }

    #[test]
    fn test_long_frame_is_capped() {
        let mut clock = StepClock::new(10.0);
        assert_eq!(clock.advance(5.0), StepClock::MAX_STEPS_PER_FRAME);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_exact_cap_keeps_remainder() {
        let mut clock = StepClock::new(10.0);
        assert_eq!(clock.advance(0.45), StepClock::MAX_STEPS_PER_FRAME);
        assert_eq!(clock.advance(0.06), 1);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut clock = StepClock::new(0.0);
        assert_eq!(clock.updates_per_second(), 1.0);
        clock.adjust_speed(1000.0);
        assert_eq!(clock.updates_per_second(), 240.0);
    }

    #[test]
    fn test_reset_discards_partial_time() {
        let mut clock = StepClock::new(10.0);
        clock.advance(0.09);
        clock.reset();
        assert_eq!(clock.advance(0.02), 0);
    }
}
