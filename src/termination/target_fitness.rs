#[cfg(test)]
#[path = "../../tests/unit/termination/target_fitness_test.rs"]
mod target_fitness_test;

use super::*;
use crate::evolution::FitnessKind;

/// A termination criteria which is in terminated state when the best solution fitness
/// reaches the given target value.
pub struct TargetFitness {
    fitness: FitnessKind,
    target: Float,
}

impl TargetFitness {
    /// Creates a new instance of `TargetFitness`. The target is expected to be positive,
    /// so the progress estimate stays meaningful.
    pub fn new(fitness: FitnessKind, target: Float) -> Self {
        Self { fitness, target }
    }
}

impl Termination for TargetFitness {
    fn is_termination(&self, population: &Population) -> bool {
        population.best(&self.fitness).1 >= self.target
    }

    fn estimate(&self, population: &Population) -> Float {
        let (_, best_fitness) = population.best(&self.fitness);
        (best_fitness / self.target).clamp(0., 1.)
    }
}
