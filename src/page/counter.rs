//! Stat counters that tick up to their target

/// Delay between counter steps (ms)
pub const COUNTER_INTERVAL_MS: i32 = 20;
/// Number of steps from zero to the target
pub const COUNTER_STEPS: f64 = 100.0;

/// Counts from 0 to `target` in `COUNTER_STEPS` increments
#[derive(Debug, Clone)]
pub struct Counter {
    target: u32,
    current: f64,
    increment: f64,
}

impl Counter {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target as f64 / COUNTER_STEPS,
        }
    }

    /// Parse a `data-target` attribute
    pub fn from_attr(value: &str) -> Option<Self> {
        value.trim().parse().ok().map(Self::new)
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Advance one step. Returns the value to display and whether more
    /// steps follow.
    pub fn step(&mut self) -> (u32, bool) {
        if self.current < self.target as f64 {
            self.current += self.increment;
            let shown = (self.current.ceil() as u32).min(self.target);
            (shown, true)
        } else {
            (self.target, false)
        }
    }
}
