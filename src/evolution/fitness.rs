#[cfg(test)]
#[path = "../../tests/unit/evolution/fitness_test.rs"]
mod fitness_test;

use crate::population::Solution;
use crate::utils::{Float, GenericResult};

/// Specifies how a solution assessment is folded into a single fitness value, bigger is
/// better for every variant. Feasible solutions are rewarded for the amount of selected
/// symbols, infeasible ones get a graded signal from the banded alignment.
#[derive(Clone, Debug, PartialEq)]
pub enum FitnessKind {
    /// Feasible: cardinality. Infeasible: `matches - candidate_skips`.
    Simple,

    /// Like `Simple` with both sides of the infeasible difference raised to the given
    /// power, which sharpens the gradient between near feasible and hopeless candidates.
    Power {
        /// A positive finite exponent.
        exponent: Float,
    },

    /// Like `Power` with the effective exponent growing as generations pass:
    /// `exponent * (1 + generation / epoch_length)`.
    EscalatingPower {
        /// A positive finite base exponent.
        exponent: Float,
    },

    /// Feasible: cardinality. Infeasible: `matches - candidate_skips * escalation` where
    /// the escalation `(1 + generation) / epoch_length` starts almost negligible and
    /// exceeds one after an epoch passes.
    EscalatingPenalty,

    /// Feasible: cardinality. Infeasible: zero, erasing any gradient.
    HarshFeasibility,
}

impl FitnessKind {
    /// Computes the fitness of a solution at the given generation.
    pub fn evaluate(&self, solution: &Solution, generation: usize, epoch_length: usize) -> Float {
        let assessment = solution.assessment();
        let cardinality = solution.cardinality() as Float;
        let matches = assessment.matches as Float;
        let candidate_skips = assessment.candidate_skips as Float;

        match *self {
            FitnessKind::Simple => {
                if assessment.feasible {
                    cardinality
                } else {
                    matches - candidate_skips
                }
            }
            FitnessKind::Power { exponent } => {
                powered(assessment.feasible, cardinality, matches, candidate_skips, exponent)
            }
            FitnessKind::EscalatingPower { exponent } => {
                let escalated = exponent * (1. + generation as Float / epoch_length as Float);
                powered(assessment.feasible, cardinality, matches, candidate_skips, escalated)
            }
            FitnessKind::EscalatingPenalty => {
                if assessment.feasible {
                    cardinality
                } else {
                    matches - candidate_skips * (1 + generation) as Float / epoch_length as Float
                }
            }
            FitnessKind::HarshFeasibility => {
                if assessment.feasible {
                    cardinality
                } else {
                    0.
                }
            }
        }
    }

    /// Validates variant parameters.
    pub fn validate(&self) -> GenericResult<()> {
        match *self {
            FitnessKind::Power { exponent } | FitnessKind::EscalatingPower { exponent } => {
                if exponent.is_finite() && exponent > 0. {
                    Ok(())
                } else {
                    Err(format!("fitness exponent must be positive and finite, got {exponent}").into())
                }
            }
            _ => Ok(()),
        }
    }
}

fn powered(feasible: bool, cardinality: Float, matches: Float, candidate_skips: Float, exponent: Float) -> Float {
    if feasible {
        cardinality.powf(exponent)
    } else {
        matches.powf(exponent) - candidate_skips.powf(exponent)
    }
}
