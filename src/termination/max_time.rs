use super::*;
use crate::utils::Timer;

/// A termination criteria which is in terminated state when max time elapsed.
pub struct MaxTime {
    start: Timer,
    limit_in_secs: Float,
}

impl MaxTime {
    /// Creates a new instance of `MaxTime`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Termination for MaxTime {
    fn is_termination(&self, _: &Population) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }

    fn estimate(&self, _: &Population) -> Float {
        (self.start.elapsed_secs_as_float() / self.limit_in_secs).min(1.)
    }
}
