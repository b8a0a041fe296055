#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use crate::evolution::FitnessKind;
use crate::utils::{Float, GenericError, GenericResult};

/// Specifies how adjacent pairs exchange selection regions.
#[derive(Clone, Debug, PartialEq)]
pub enum CrossoverKind {
    /// Swaps regions delimited by the given amount of distinct crossover points.
    MultiPoint {
        /// Amount of distinct crossover points, within `1..=selection length`.
        points: usize,
    },

    /// Swaps every position decided by a fair coin.
    Uniform,

    /// Swaps every position with the given probability.
    BiasedUniform {
        /// A swap probability within `(0., 1.)`.
        bias: Float,
    },
}

/// Specifies how solutions are mutated.
#[derive(Clone, Debug, PartialEq)]
pub enum MutationKind {
    /// Flips a whole run of consecutive bits per triggered position, with the effective
    /// rate corrected by the expected run length.
    RunFlip {
        /// A maximum run length, at least 1. Runs are clamped at the vector end.
        max_run: usize,
    },

    /// Flips single bits with the plain per position rate.
    BitFlip,
}

/// Parameters of a single generation step.
#[derive(Clone, Debug)]
pub struct GenerationParams {
    /// Amount of tournaments replayed per generation.
    pub tournaments: usize,
    /// Amount of distinct participants per tournament.
    pub tournament_size: usize,
    /// Probability to recombine an adjacent pair.
    pub crossover_rate: Float,
    /// A crossover flavor.
    pub crossover: CrossoverKind,
    /// A base per position mutation probability.
    pub mutation_rate: Float,
    /// A mutation flavor.
    pub mutation: MutationKind,
    /// A fitness used by tournaments and reporting.
    pub fitness: FitnessKind,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            tournaments: 10,
            tournament_size: 5,
            crossover_rate: 0.8,
            crossover: CrossoverKind::MultiPoint { points: 2 },
            mutation_rate: 0.02,
            mutation: MutationKind::RunFlip { max_run: 8 },
            fitness: FitnessKind::Simple,
        }
    }
}

impl GenerationParams {
    /// Checks all parameters against the population size and the selection length,
    /// reporting every violation at once.
    pub fn validate(&self, population_size: usize, selection_length: usize) -> GenericResult<()> {
        let mut violations: Vec<GenericError> = vec![];

        if self.tournaments == 0 {
            violations.push("amount of tournaments must be positive".into());
        }

        if self.tournament_size < 2 || self.tournament_size > population_size {
            violations
                .push(format!("tournament size must be within [2, {population_size}], got {}", self.tournament_size).into());
        }

        if !(self.crossover_rate.is_finite() && self.crossover_rate > 0. && self.crossover_rate <= 1.) {
            violations.push(format!("crossover rate must be within (0., 1.], got {}", self.crossover_rate).into());
        }

        match self.crossover {
            CrossoverKind::MultiPoint { points } => {
                if points == 0 || points > selection_length {
                    violations.push(
                        format!("amount of crossover points must be within [1, {selection_length}], got {points}")
                            .into(),
                    );
                }
            }
            CrossoverKind::BiasedUniform { bias } => {
                if !(bias.is_finite() && bias > 0. && bias < 1.) {
                    violations.push(format!("crossover bias must be within (0., 1.), got {bias}").into());
                }
            }
            CrossoverKind::Uniform => {}
        }

        if !(self.mutation_rate.is_finite() && self.mutation_rate > 0. && self.mutation_rate <= 1.) {
            violations.push(format!("mutation rate must be within (0., 1.], got {}", self.mutation_rate).into());
        }

        if let MutationKind::RunFlip { max_run } = self.mutation {
            if max_run == 0 {
                violations.push("maximum run length must be positive".into());
            }
        }

        if let Err(error) = self.fitness.validate() {
            violations.push(error);
        }

        if violations.is_empty() { Ok(()) } else { Err(GenericError::join_many(&violations, ", ")) }
    }
}
