use super::*;
use crate::evolution::FitnessKind;
use crate::helpers::population::{create_test_population, create_test_problem};
use crate::termination::{MaxGeneration, TargetFitness};

fn create_simulator(limit: usize) -> EvolutionSimulator {
    let population = create_test_population(create_test_problem("abcdef", "aabbccddeeff", 3), 10);

    EvolutionSimulator::new(
        population,
        GenerationParams::default(),
        Box::new(MaxGeneration::new(limit)),
        TelemetryMode::None,
    )
    .expect("cannot create simulator")
}

#[test]
fn can_run_until_generation_limit() {
    let result = create_simulator(5).run().unwrap();

    assert_eq!(result.snapshot.generation, 5);
    assert!(result.metrics.is_none());
}

#[test]
fn can_collect_metrics_when_tracking() {
    let population = create_test_population(create_test_problem("abcdef", "aabbccddeeff", 3), 10);
    let simulator = EvolutionSimulator::new(
        population,
        GenerationParams::default(),
        Box::new(MaxGeneration::new(3)),
        TelemetryMode::OnlyMetrics { track_population: 1 },
    )
    .unwrap();

    let metrics = simulator.run().unwrap().metrics.unwrap();

    assert_eq!(metrics.generations, 3);
    assert_eq!(metrics.evolution.len(), 3);
    assert_eq!(metrics.evolution.first().unwrap().number, 1);
    assert_eq!(metrics.evolution.last().unwrap().number, 3);
}

#[test]
fn can_stop_before_first_generation_on_reached_target() {
    let population = create_test_population(create_test_problem("abcdef", "aabbccddeeff", 3), 10);
    let simulator = EvolutionSimulator::new(
        population,
        GenerationParams::default(),
        // selections over distinct symbols embedding into the long string are always
        // feasible, so the best fitness is non-negative from the start
        Box::new(TargetFitness::new(FitnessKind::Simple, 0.)),
        TelemetryMode::None,
    )
    .unwrap();

    let result = simulator.run().unwrap();

    assert_eq!(result.snapshot.generation, 0);
}

#[test]
fn can_reject_invalid_params_upfront() {
    let population = create_test_population(create_test_problem("abcdef", "aabbccddeeff", 3), 10);
    let params = GenerationParams { tournament_size: 20, ..GenerationParams::default() };

    let result = EvolutionSimulator::new(population, params, Box::new(MaxGeneration::new(1)), TelemetryMode::None);

    assert!(result.is_err());
}

#[test]
fn can_run_independent_restarts_and_keep_the_best() {
    let result = run_restarts(3, &Parallelism::new(2), |_| {
        let population = create_test_population(create_test_problem("abcdef", "aabbccddeeff", 3), 10);

        EvolutionSimulator::new(
            population,
            GenerationParams::default(),
            Box::new(MaxGeneration::new(2)),
            TelemetryMode::None,
        )
    })
    .unwrap();

    assert_eq!(result.snapshot.generation, 2);
    assert!(result.snapshot.best_fitness >= 0.);
    assert_eq!(result.snapshot.best_sequence.len(), result.snapshot.best_cardinality);
}

#[test]
fn can_reject_zero_restarts() {
    assert!(run_restarts(0, &Parallelism::new(1), |_| Ok(create_simulator(1))).is_err());
}
