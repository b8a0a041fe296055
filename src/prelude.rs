//! This module reimports commonly used types.

pub use crate::problem::Assessment;
pub use crate::problem::DEFAULT_SEARCH_RANGE;
pub use crate::problem::SubsequenceProblem;

pub use crate::population::BitVector;
pub use crate::population::MIN_POPULATION_SIZE;
pub use crate::population::Population;
pub use crate::population::PopulationSnapshot;
pub use crate::population::Solution;

pub use crate::evolution::CrossoverKind;
pub use crate::evolution::EvolutionResult;
pub use crate::evolution::EvolutionSimulator;
pub use crate::evolution::FitnessKind;
pub use crate::evolution::GenerationParams;
pub use crate::evolution::MutationKind;
pub use crate::evolution::Telemetry;
pub use crate::evolution::TelemetryGeneration;
pub use crate::evolution::TelemetryMetrics;
pub use crate::evolution::TelemetryMode;
pub use crate::evolution::run_restarts;

pub use crate::termination::CompositeTermination;
pub use crate::termination::MaxGeneration;
pub use crate::termination::MaxTime;
pub use crate::termination::TargetFitness;
pub use crate::termination::Termination;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Parallelism;
pub use crate::utils::Quota;
pub use crate::utils::TimeQuota;
pub use crate::utils::Timer;
pub use crate::utils::compare_floats;
pub use crate::utils::{Random, RandomGen};
