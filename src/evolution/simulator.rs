#[cfg(test)]
#[path = "../../tests/unit/evolution/simulator_test.rs"]
mod simulator_test;

use crate::evolution::{GenerationParams, Telemetry, TelemetryMetrics, TelemetryMode};
use crate::population::{Population, PopulationSnapshot};
use crate::termination::Termination;
use crate::utils::{GenericResult, Parallelism, ThreadPool, Timer, compare_floats, parallel_into_collect};

/// An outcome of a finished evolution run.
pub struct EvolutionResult {
    /// Final population state with the best solution found.
    pub snapshot: PopulationSnapshot,
    /// Collected metrics when the telemetry mode tracks them.
    pub metrics: Option<TelemetryMetrics>,
}

/// Runs the generational evolution until a termination criterion or the environment
/// quota fires. Both are checked only between generations, so every started generation
/// completes all its phases.
pub struct EvolutionSimulator {
    population: Population,
    params: GenerationParams,
    termination: Box<dyn Termination>,
    telemetry: Telemetry,
}

impl EvolutionSimulator {
    /// Creates a simulator rejecting invalid generation parameters upfront.
    pub fn new(
        population: Population,
        params: GenerationParams,
        termination: Box<dyn Termination>,
        telemetry_mode: TelemetryMode,
    ) -> GenericResult<Self> {
        params.validate(population.size(), population.problem().short_len())?;

        Ok(Self { population, params, termination, telemetry: Telemetry::new(telemetry_mode) })
    }

    /// Returns the population.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Runs the evolution to completion and reports the final state.
    pub fn run(mut self) -> GenericResult<EvolutionResult> {
        loop {
            let is_terminated = self.termination.is_termination(&self.population);
            let is_quota_reached =
                self.population.environment().quota.as_ref().is_some_and(|quota| quota.is_reached());

            if is_terminated || is_quota_reached {
                break;
            }

            let generation_time = Timer::start();
            self.population.run_generation(&self.params)?;

            self.telemetry.on_generation(&self.population, &self.params.fitness, generation_time);
        }

        self.telemetry.on_result(&self.population, &self.params.fitness);

        let snapshot = self.population.snapshot(&self.params.fitness);

        Ok(EvolutionResult { snapshot, metrics: self.telemetry.take_metrics() })
    }
}

/// Runs several independent simulations and keeps the outcome with the best fitness.
/// The factory receives the restart index and builds a fresh simulator for it; restarts
/// share nothing but the thread pool sized by the given parallelism.
pub fn run_restarts<F>(
    restarts: usize,
    parallelism: &Parallelism,
    simulator_factory: F,
) -> GenericResult<EvolutionResult>
where
    F: Fn(usize) -> GenericResult<EvolutionSimulator> + Send + Sync,
{
    if restarts == 0 {
        return Err("amount of restarts must be positive".into());
    }

    let pool = ThreadPool::new(parallelism.available_cpus().min(restarts));
    let results = pool.execute(|| {
        parallel_into_collect((0..restarts).collect::<Vec<_>>(), |index| {
            simulator_factory(index).and_then(|simulator| simulator.run())
        })
    });

    results
        .into_iter()
        .collect::<GenericResult<Vec<_>>>()?
        .into_iter()
        .max_by(|left, right| compare_floats(left.snapshot.best_fitness, right.snapshot.best_fitness))
        .ok_or_else(|| "no restart produced a result".into())
}
