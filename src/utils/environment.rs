use crate::utils::{DefaultRandom, Float, Random, Timer};
use std::sync::Arc;

/// Specifies a logger type which takes a message and prints it.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Specifies a computational quota for the search.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as user cancellation, timer, etc.
pub trait Quota: Send + Sync {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time based quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: Float,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`.
    pub fn new(limit_in_secs: Float) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// A computational quota shared between all running searches.
    pub quota: Option<Arc<dyn Quota + Send + Sync>>,

    /// Specifies available data parallelism.
    pub parallelism: Parallelism,

    /// An info logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(
        random: Arc<dyn Random + Send + Sync>,
        quota: Option<Arc<dyn Quota + Send + Sync>>,
        parallelism: Parallelism,
        logger: InfoLogger,
    ) -> Self {
        Self { random, quota, parallelism, logger }
    }

    /// Creates an instance of `Environment` with the time quota set when `max_time` is given.
    pub fn new_with_time_quota(max_time: Option<usize>) -> Self {
        Self {
            quota: max_time.map(|time| Arc::new(TimeQuota::new(time as Float)) as Arc<dyn Quota + Send + Sync>),
            ..Self::default()
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(
            Arc::new(DefaultRandom::default()),
            None,
            Parallelism::default(),
            Arc::new(|msg: &str| println!("{msg}")),
        )
    }
}

/// Specifies amount of data parallelism to be used.
#[derive(Clone)]
pub struct Parallelism {
    available_cpus: usize,
}

impl Default for Parallelism {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl Parallelism {
    /// Creates a new instance of `Parallelism` with at least one available CPU.
    pub fn new(available_cpus: usize) -> Self {
        Self { available_cpus: available_cpus.max(1) }
    }

    /// Amount of CPUs available for data parallelism.
    pub fn available_cpus(&self) -> usize {
        self.available_cpus
    }
}
