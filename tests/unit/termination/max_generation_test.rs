use super::*;
use crate::evolution::GenerationParams;
use crate::helpers::population::{create_test_population, create_test_problem};

#[test]
fn can_terminate_when_limit_reached() {
    let mut population = create_test_population(create_test_problem("abcde", "abcdef", 2), 10);
    let termination = MaxGeneration::new(2);

    assert!(!termination.is_termination(&population));
    assert_eq!(termination.estimate(&population), 0.);

    population.run_generation(&GenerationParams::default()).unwrap();
    assert!(!termination.is_termination(&population));
    assert_eq!(termination.estimate(&population), 0.5);

    population.run_generation(&GenerationParams::default()).unwrap();
    assert!(termination.is_termination(&population));
    assert_eq!(termination.estimate(&population), 1.);
}

#[test]
fn can_terminate_immediately_with_zero_limit() {
    let population = create_test_population(create_test_problem("abcde", "abcdef", 2), 10);

    assert!(MaxGeneration::new(0).is_termination(&population));
}
