//! The termination module contains logic which defines termination criteria for the
//! evolution, e.g. when to stop the generation loop.

use crate::population::Population;
use crate::utils::{Float, compare_floats};

/// A trait which specifies criteria when the evolution should stop.
pub trait Termination {
    /// Returns true if termination condition is met.
    fn is_termination(&self, population: &Population) -> bool;

    /// Returns a relative estimation till termination. Value is in the `[0, 1]` range.
    fn estimate(&self, population: &Population) -> Float;
}

mod max_generation;
pub use self::max_generation::MaxGeneration;

mod max_time;
pub use self::max_time::MaxTime;

mod target_fitness;
pub use self::target_fitness::TargetFitness;

/// Encapsulates multiple termination criteria: any of them stops the evolution.
pub struct CompositeTermination {
    terminations: Vec<Box<dyn Termination>>,
}

impl CompositeTermination {
    /// Creates a new instance of `CompositeTermination`.
    pub fn new(terminations: Vec<Box<dyn Termination>>) -> Self {
        Self { terminations }
    }
}

impl Termination for CompositeTermination {
    fn is_termination(&self, population: &Population) -> bool {
        self.terminations.iter().any(|termination| termination.is_termination(population))
    }

    fn estimate(&self, population: &Population) -> Float {
        self.terminations
            .iter()
            .map(|termination| termination.estimate(population))
            .max_by(|left, right| compare_floats(*left, *right))
            .unwrap_or(0.)
    }
}
