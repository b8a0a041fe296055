use super::*;
use crate::evolution::GenerationParams;
use crate::helpers::population::{create_test_population, create_test_problem};

#[test]
fn can_terminate_on_reached_target() {
    // selections over a feasible problem always score the non-negative cardinality
    let population = create_test_population(create_test_problem("aaa", "aaaa", 2), 10);

    assert!(TargetFitness::new(FitnessKind::Simple, 0.).is_termination(&population));
    assert!(!TargetFitness::new(FitnessKind::Simple, 4.).is_termination(&population));
}

#[test]
fn can_estimate_progress_towards_target() {
    let population = create_test_population(create_test_problem("aaa", "aaaa", 2), 10);

    let estimate = TargetFitness::new(FitnessKind::Simple, 4.).estimate(&population);

    // the best cardinality is three at most
    assert!((0. ..=0.75).contains(&estimate));
}

#[test]
fn can_combine_criteria_with_composite_termination() {
    let mut population = create_test_population(create_test_problem("aaa", "aaaa", 2), 10);
    let termination = CompositeTermination::new(vec![
        Box::new(MaxGeneration::new(1)),
        Box::new(TargetFitness::new(FitnessKind::Simple, 100.)),
    ]);

    assert!(!termination.is_termination(&population));

    population.run_generation(&GenerationParams::default()).unwrap();

    assert!(termination.is_termination(&population));
    assert_eq!(termination.estimate(&population), 1.);
}
