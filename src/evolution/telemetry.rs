//! A module which provides the logic to collect metrics about algorithm execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::algorithms::math::get_stdev;
use crate::evolution::FitnessKind;
use crate::population::{Population, PopulationSnapshot};
use crate::utils::{Float, InfoLogger, Timer};

/// Encapsulates different measurements regarding algorithm execution.
pub struct TelemetryMetrics {
    /// Algorithm duration in seconds.
    pub duration: usize,
    /// Total amount of generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: Float,
    /// Evolution progress.
    pub evolution: Vec<TelemetryGeneration>,
}

/// Represents information about generation.
pub struct TelemetryGeneration {
    /// Generation sequence number.
    pub number: usize,
    /// Time since evolution started.
    pub timestamp: Float,
    /// Mean fitness across the population.
    pub mean_fitness: Float,
    /// Fitness of the best solution.
    pub best_fitness: Float,
    /// Amount of selected symbols in the best solution.
    pub best_cardinality: usize,
    /// Whether the best solution is feasible.
    pub best_feasible: bool,
    /// Amount of feasible solutions in the population.
    pub feasible_count: usize,
    /// True if this generation improved the best known fitness.
    pub is_improvement: bool,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often, in generations, the best solution is logged.
        log_best: usize,
        /// Specifies how often, in generations, the population state is logged.
        log_population: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often, in generations, the population state is tracked.
        track_population: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often, in generations, the best solution is logged.
        log_best: usize,
        /// Specifies how often, in generations, the population state is logged.
        log_population: usize,
        /// Specifies how often, in generations, the population state is tracked.
        track_population: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
    best_known_fitness: Option<Float>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self {
            metrics: TelemetryMetrics { duration: 0, generations: 0, speed: 0.0, evolution: vec![] },
            time: Timer::start(),
            mode,
            best_known_fitness: None,
        }
    }

    /// Reports statistics of a completed generation.
    pub fn on_generation(&mut self, population: &Population, fitness: &FitnessKind, generation_time: Timer) {
        let generation = population.generation();
        let snapshot = population.snapshot(fitness);

        let is_improvement = self.best_known_fitness.is_none_or(|known| snapshot.best_fitness > known);
        if is_improvement {
            self.best_known_fitness = Some(snapshot.best_fitness);
        }

        self.metrics.generations = generation;

        let (log_best, log_population, track_population) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, log_population, .. } => {
                (Some(*log_best), Some(*log_population), None)
            }
            TelemetryMode::OnlyMetrics { track_population } => (None, None, Some(*track_population)),
            TelemetryMode::All { log_best, log_population, track_population, .. } => {
                (Some(*log_best), Some(*log_population), Some(*track_population))
            }
        };

        let should_log_best = generation % log_best.unwrap_or(usize::MAX) == 0;
        let should_log_population = generation % log_population.unwrap_or(usize::MAX) == 0;
        let should_track_population = generation % track_population.unwrap_or(usize::MAX) == 0;

        if should_log_best {
            self.log(
                format!(
                    "[{}s] generation {} took {}ms, best fitness: {:.4}, cardinality: {}, feasible: {}",
                    self.time.elapsed_secs(),
                    generation,
                    generation_time.elapsed_millis(),
                    snapshot.best_fitness,
                    snapshot.best_cardinality,
                    snapshot.best_feasible,
                )
                .as_str(),
            );
        }

        self.on_population(population, fitness, &snapshot, is_improvement, should_log_population, should_track_population);
    }

    /// Reports population state.
    fn on_population(
        &mut self,
        population: &Population,
        fitness: &FitnessKind,
        snapshot: &PopulationSnapshot,
        is_improvement: bool,
        should_log_population: bool,
        should_track_population: bool,
    ) {
        if !should_log_population && !should_track_population {
            return;
        }

        let feasible_count = population.solutions().iter().filter(|solution| solution.is_feasible()).count();

        if should_log_population {
            let fitness_values = population
                .solutions()
                .iter()
                .map(|solution| fitness.evaluate(solution, population.generation(), population.epoch_length()))
                .collect::<Vec<_>>();

            self.log(
                format!(
                    "[{}s] population state (generation: {}, speed: {:.2} gen/sec): mean fitness {:.4} (stdev: {:.4}), {} feasible of {}",
                    self.time.elapsed_secs(),
                    snapshot.generation,
                    snapshot.generation as Float / self.time.elapsed_secs_as_float(),
                    snapshot.mean_fitness,
                    get_stdev(&fitness_values),
                    feasible_count,
                    population.size(),
                )
                .as_str(),
            );
        }

        if should_track_population {
            self.metrics.evolution.push(TelemetryGeneration {
                number: snapshot.generation,
                timestamp: self.time.elapsed_secs_as_float(),
                mean_fitness: snapshot.mean_fitness,
                best_fitness: snapshot.best_fitness,
                best_cardinality: snapshot.best_cardinality,
                best_feasible: snapshot.best_feasible,
                feasible_count,
                is_improvement,
            });
        }
    }

    /// Reports final statistics.
    pub fn on_result(&mut self, population: &Population, fitness: &FitnessKind) {
        let generations = self.metrics.generations;

        let (should_log_population, should_track_population) = match &self.mode {
            TelemetryMode::OnlyLogging { .. } => (true, false),
            TelemetryMode::OnlyMetrics { track_population } => (false, generations % track_population != 0),
            TelemetryMode::All { track_population, .. } => (true, generations % track_population != 0),
            TelemetryMode::None => return,
        };

        let snapshot = population.snapshot(fitness);
        let is_improvement = self.best_known_fitness.is_none_or(|known| snapshot.best_fitness > known);

        self.on_population(population, fitness, &snapshot, is_improvement, should_log_population, should_track_population);

        let elapsed = self.time.elapsed_secs() as usize;
        let speed = generations as Float / self.time.elapsed_secs_as_float();

        self.log(format!("[{elapsed}s] total generations: {generations}, speed: {speed:.2} gen/sec").as_str());
        self.log(
            format!(
                "\tbest fitness: {:.4}, cardinality: {}, feasible: {}",
                snapshot.best_fitness, snapshot.best_cardinality, snapshot.best_feasible
            )
            .as_str(),
        );

        self.metrics.duration = elapsed;
        self.metrics.speed = speed;
    }

    /// Gets metrics, consuming telemetry. Returns `None` when the mode does not track them.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } => (logger)(message),
            TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }
}
