#[cfg(test)]
#[path = "../../tests/unit/population/generational_test.rs"]
mod generational_test;

use crate::algorithms::math::get_mean_iter;
use crate::evolution::{CrossoverKind, FitnessKind, GenerationParams, MutationKind};
use crate::population::Solution;
use crate::problem::SubsequenceProblem;
use crate::utils::{Environment, Float, GenericResult, Random};
use rand::seq::{SliceRandom, index};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// A minimum population size which keeps tournaments and pairing meaningful.
pub const MIN_POPULATION_SIZE: usize = 10;

/// A population of candidate solutions evolved with a generational pipeline: shuffle,
/// tournament replacement, pairwise crossover, mutation.
pub struct Population {
    problem: Arc<SubsequenceProblem>,
    environment: Arc<Environment>,
    solutions: Vec<Solution>,
    generation: usize,
    epoch_length: usize,
}

/// A snapshot of population state at some generation.
#[derive(Clone, Debug)]
pub struct PopulationSnapshot {
    /// Amount of completed generations.
    pub generation: usize,
    /// Mean fitness across the population.
    pub mean_fitness: Float,
    /// Fitness of the best solution.
    pub best_fitness: Float,
    /// Rendered candidate of the best solution.
    pub best_sequence: String,
    /// Amount of selected symbols in the best solution.
    pub best_cardinality: usize,
    /// Whether the best solution is feasible.
    pub best_feasible: bool,
}

impl Population {
    /// Creates a population of `size` random solutions. `epoch_length` scales the
    /// escalation of time dependent fitness variants.
    pub fn new(
        problem: Arc<SubsequenceProblem>,
        size: usize,
        epoch_length: usize,
        environment: Arc<Environment>,
    ) -> GenericResult<Self> {
        if size < MIN_POPULATION_SIZE {
            return Err(format!("population size must be at least {MIN_POPULATION_SIZE}, got {size}").into());
        }

        if epoch_length == 0 {
            return Err("epoch length must be positive".into());
        }

        let solutions = (0..size).map(|_| Solution::random(problem.clone(), environment.random.as_ref())).collect();

        Ok(Self { problem, environment, solutions, generation: 0, epoch_length })
    }

    /// Returns the amount of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Returns the epoch length used to scale time dependent fitness variants.
    pub fn epoch_length(&self) -> usize {
        self.epoch_length
    }

    /// Returns the amount of solutions, which stays constant between generations.
    pub fn size(&self) -> usize {
        self.solutions.len()
    }

    /// Returns the problem instance shared by all solutions.
    pub fn problem(&self) -> &SubsequenceProblem {
        self.problem.as_ref()
    }

    /// Returns the environment.
    pub fn environment(&self) -> &Environment {
        self.environment.as_ref()
    }

    /// Returns solutions in their current order.
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Runs a single generation: validates parameters upfront, then shuffles solutions,
    /// replays tournaments, recombines adjacent pairs and mutates everyone. On a
    /// validation error the population stays unchanged.
    pub fn run_generation(&mut self, params: &GenerationParams) -> GenericResult<()> {
        params.validate(self.size(), self.problem.short_len())?;

        self.shuffle();
        self.run_tournaments(params);
        self.run_crossover(params);
        self.run_mutation(params);

        self.generation += 1;

        Ok(())
    }

    /// Returns the best solution with its fitness, the earliest one wins on ties.
    pub fn best(&self, fitness: &FitnessKind) -> (&Solution, Float) {
        let mut best_index = 0;
        let mut best_fitness = self.evaluate(&self.solutions[0], fitness);

        for (index, solution) in self.solutions.iter().enumerate().skip(1) {
            let fitness_value = self.evaluate(solution, fitness);
            if fitness_value > best_fitness {
                best_index = index;
                best_fitness = fitness_value;
            }
        }

        (&self.solutions[best_index], best_fitness)
    }

    /// Returns mean fitness across the population.
    pub fn mean_fitness(&self, fitness: &FitnessKind) -> Float {
        get_mean_iter(self.solutions.iter().map(|solution| self.evaluate(solution, fitness)))
    }

    /// Takes a snapshot of the current population state.
    pub fn snapshot(&self, fitness: &FitnessKind) -> PopulationSnapshot {
        let (best, best_fitness) = self.best(fitness);

        PopulationSnapshot {
            generation: self.generation,
            mean_fitness: self.mean_fitness(fitness),
            best_fitness,
            best_sequence: best.render(),
            best_cardinality: best.cardinality(),
            best_feasible: best.is_feasible(),
        }
    }

    fn evaluate(&self, solution: &Solution, fitness: &FitnessKind) -> Float {
        fitness.evaluate(solution, self.generation, self.epoch_length)
    }

    fn shuffle(&mut self) {
        let mut rng = self.environment.random.get_rng();
        self.solutions.shuffle(&mut rng);
    }

    /// Draws distinct participants per tournament, then overwrites the worst performer
    /// with an independent copy of the best one. On equal fitness the earliest drawn
    /// participant wins both roles.
    fn run_tournaments(&mut self, params: &GenerationParams) {
        let random = self.environment.random.clone();

        for _ in 0..params.tournaments {
            let mut rng = random.get_rng();
            let drawn = index::sample(&mut rng, self.solutions.len(), params.tournament_size);

            let mut best: Option<(usize, Float)> = None;
            let mut worst: Option<(usize, Float)> = None;

            for position in drawn.iter() {
                let fitness = self.evaluate(&self.solutions[position], &params.fitness);

                if best.is_none_or(|(_, value)| fitness > value) {
                    best = Some((position, fitness));
                }
                if worst.is_none_or(|(_, value)| fitness < value) {
                    worst = Some((position, fitness));
                }
            }

            if let (Some((best_position, _)), Some((worst_position, _))) = (best, worst) {
                if best_position != worst_position {
                    self.solutions[worst_position] = self.solutions[best_position].clone();
                }
            }
        }
    }

    fn run_crossover(&mut self, params: &GenerationParams) {
        let random = self.environment.random.clone();

        for pair in self.solutions.chunks_exact_mut(2) {
            if !random.is_hit(params.crossover_rate) {
                continue;
            }

            let (head, tail) = pair.split_at_mut(1);
            let (first, second) = (&mut head[0], &mut tail[0]);

            match params.crossover {
                CrossoverKind::MultiPoint { points } => multi_point_crossover(first, second, points, random.as_ref()),
                CrossoverKind::Uniform => uniform_crossover(first, second, random.as_ref()),
                CrossoverKind::BiasedUniform { bias } => {
                    biased_uniform_crossover(first, second, bias, random.as_ref())
                }
            }
        }
    }

    fn run_mutation(&mut self, params: &GenerationParams) {
        let random = self.environment.random.clone();

        for solution in self.solutions.iter_mut() {
            mutate_solution(solution, params.mutation_rate, &params.mutation, random.as_ref());
        }
    }
}

/// Swaps regions between two solutions: distinct crossover points are drawn first, then
/// the swap state toggles at every point while scanning left to right.
fn multi_point_crossover(first: &mut Solution, second: &mut Solution, points: usize, random: &dyn Random) {
    let length = first.len();

    let mut crossover_points = FxHashSet::default();
    while crossover_points.len() < points {
        crossover_points.insert(random.uniform_int(0, length as i32 - 1) as usize);
    }

    let mut swapping = false;
    for index in 0..length {
        if crossover_points.contains(&index) {
            swapping = !swapping;
        }

        if swapping {
            swap_bit(first, second, index);
        }
    }
}

/// Swaps every bit between two solutions with a fair coin.
fn uniform_crossover(first: &mut Solution, second: &mut Solution, random: &dyn Random) {
    for index in 0..first.len() {
        if random.is_head_not_tails() {
            swap_bit(first, second, index);
        }
    }
}

/// Swaps every bit between two solutions with the given probability.
fn biased_uniform_crossover(first: &mut Solution, second: &mut Solution, bias: Float, random: &dyn Random) {
    for index in 0..first.len() {
        if random.is_hit(bias) {
            swap_bit(first, second, index);
        }
    }
}

fn swap_bit(first: &mut Solution, second: &mut Solution, index: usize) {
    let (first_bit, second_bit) = (first.get(index), second.get(index));
    first.set(index, second_bit);
    second.set(index, first_bit);
}

/// Applies the configured mutation to a single solution. The run flip variant corrects
/// the per position rate by the expected run length, so the expected amount of flipped
/// bits stays close to `rate * length` regardless of the `max_run` setting.
fn mutate_solution(solution: &mut Solution, rate: Float, mutation: &MutationKind, random: &dyn Random) {
    match *mutation {
        MutationKind::RunFlip { max_run } => {
            let corrected_rate = rate / ((1 + max_run) as Float / 2.);

            for index in 0..solution.len() {
                if random.is_hit(corrected_rate) {
                    let run = random.uniform_int(1, max_run as i32) as usize;
                    solution.flip_range(index, (index + run).min(solution.len()));
                }
            }
        }
        MutationKind::BitFlip => {
            for index in 0..solution.len() {
                if random.is_hit(rate) {
                    solution.flip(index);
                }
            }
        }
    }
}
