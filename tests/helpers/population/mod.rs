use crate::helpers::utils::create_test_environment;
use crate::prelude::*;
use std::sync::Arc;

pub const TEST_EPOCH_LENGTH: usize = 500;

pub fn create_test_problem(a: &str, b: &str, search_range: usize) -> Arc<SubsequenceProblem> {
    Arc::new(SubsequenceProblem::new(a, b, search_range).expect("cannot create problem"))
}

/// Creates a solution with exactly the given bits set.
pub fn create_test_solution(problem: Arc<SubsequenceProblem>, selected: &[usize]) -> Solution {
    let mut genes = BitVector::new(problem.short_len());
    selected.iter().for_each(|&index| genes.set(index, true));

    Solution::with_genes(problem, genes)
}

/// Creates a solution which selects every symbol of the short string.
pub fn create_full_test_solution(problem: Arc<SubsequenceProblem>) -> Solution {
    let selected = (0..problem.short_len()).collect::<Vec<_>>();

    create_test_solution(problem, &selected)
}

pub fn create_test_population(problem: Arc<SubsequenceProblem>, size: usize) -> Population {
    Population::new(problem, size, TEST_EPOCH_LENGTH, create_test_environment()).expect("cannot create population")
}
