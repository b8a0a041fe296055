#[cfg(test)]
#[path = "../../tests/unit/population/solution_test.rs"]
mod solution_test;

use crate::population::BitVector;
use crate::problem::{Assessment, SubsequenceProblem};
use crate::utils::Random;
use std::cell::Cell;
use std::sync::Arc;

/// A candidate solution: a selection over the short string symbols together with a lazily
/// cached assessment. Every mutation drops the cache, reads recompute it on demand.
///
/// Cloning is deep: the selection storage is copied and the cached assessment, which
/// stays valid for equal selections, is carried over.
#[derive(Clone)]
pub struct Solution {
    problem: Arc<SubsequenceProblem>,
    genes: BitVector,
    assessment: Cell<Option<Assessment>>,
}

impl Solution {
    /// Creates a solution with a uniformly random selection.
    pub fn random(problem: Arc<SubsequenceProblem>, random: &dyn Random) -> Self {
        let genes = BitVector::random(problem.short_len(), random);
        Self { problem, genes, assessment: Cell::new(None) }
    }

    /// Creates a solution from an explicit selection.
    pub fn with_genes(problem: Arc<SubsequenceProblem>, genes: BitVector) -> Self {
        assert_eq!(genes.len(), problem.short_len(), "selection length must match the short string length");
        Self { problem, genes, assessment: Cell::new(None) }
    }

    /// Returns the amount of selection bits.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Checks whether the selection has no bits.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns the selection bit at the given index.
    pub fn get(&self, index: usize) -> bool {
        self.genes.get(index)
    }

    /// Sets the selection bit at the given index. The cached assessment is dropped only
    /// when the bit actually changes.
    pub fn set(&mut self, index: usize, value: bool) {
        if self.genes.get(index) != value {
            self.genes.set(index, value);
            self.assessment.set(None);
        }
    }

    /// Flips the selection bit at the given index.
    pub fn flip(&mut self, index: usize) {
        self.genes.flip(index);
        self.assessment.set(None);
    }

    /// Flips all selection bits in the `[start, end)` range.
    pub fn flip_range(&mut self, start: usize, end: usize) {
        if start < end {
            self.genes.flip_range(start, end);
            self.assessment.set(None);
        }
    }

    /// Returns the amount of selected symbols.
    pub fn cardinality(&self) -> usize {
        self.genes.count_ones()
    }

    /// Renders the selected symbols as a string.
    pub fn render(&self) -> String {
        self.problem.render(&self.genes)
    }

    /// Returns the assessment of this solution, reusing the cached value when the
    /// selection did not change since the last call.
    pub fn assessment(&self) -> Assessment {
        if let Some(assessment) = self.assessment.get() {
            return assessment;
        }

        let assessment = self.problem.assess(&self.genes);
        self.assessment.set(Some(assessment));

        assessment
    }

    /// Checks whether the rendered candidate is an exact subsequence of the long string.
    pub fn is_feasible(&self) -> bool {
        self.assessment().feasible
    }

    /// Returns a read-only view of the selection.
    pub fn genes(&self) -> &BitVector {
        &self.genes
    }
}
