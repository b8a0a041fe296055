//! This module defines the subsequence selection problem and the assessment of its
//! candidate solutions.

#[cfg(test)]
#[path = "../tests/unit/problem_test.rs"]
mod problem_test;

use crate::algorithms::alignment::{MIN_SEARCH_RANGE, align_banded, is_subsequence};
use crate::population::BitVector;
use crate::utils::GenericResult;

/// A default diagonal band width used by the banded alignment fallback.
pub const DEFAULT_SEARCH_RANGE: usize = 7;

/// Defines a problem of searching for a long common subsequence of two strings: symbols
/// selected from the shorter string form a candidate which has to be a subsequence of the
/// longer one. The goal is to select as many symbols as possible.
pub struct SubsequenceProblem {
    short: Vec<char>,
    long: Vec<char>,
    search_range: usize,
}

/// An outcome of the candidate sequence assessment against the long string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Assessment {
    /// Whether the candidate is an exact subsequence of the long string.
    pub feasible: bool,
    /// Amount of matched symbols.
    pub matches: usize,
    /// Amount of candidate symbols which could not be matched.
    pub candidate_skips: usize,
    /// Amount of long string symbols which could not be matched.
    pub long_skips: usize,
}

impl SubsequenceProblem {
    /// Creates a problem instance from two strings given in any order: the shorter one
    /// becomes the selection source. Fails on empty input or a too narrow search range.
    pub fn new(a: &str, b: &str, search_range: usize) -> GenericResult<Self> {
        if a.is_empty() || b.is_empty() {
            return Err("both input strings must be non-empty".into());
        }

        if search_range < MIN_SEARCH_RANGE {
            return Err(format!("search range must be at least {MIN_SEARCH_RANGE}, got {search_range}").into());
        }

        let (a, b): (Vec<char>, Vec<char>) = (a.chars().collect(), b.chars().collect());
        let (short, long) = if b.len() >= a.len() { (a, b) } else { (b, a) };

        Ok(Self { short, long, search_range })
    }

    /// Creates a problem instance with the default search range.
    pub fn with_default_range(a: &str, b: &str) -> GenericResult<Self> {
        Self::new(a, b, DEFAULT_SEARCH_RANGE)
    }

    /// Returns symbols of the shorter string, the selection source.
    pub fn short(&self) -> &[char] {
        &self.short
    }

    /// Returns symbols of the longer string.
    pub fn long(&self) -> &[char] {
        &self.long
    }

    /// Returns the selection length, which is the length of the shorter string.
    pub fn short_len(&self) -> usize {
        self.short.len()
    }

    /// Returns the band width used by the alignment fallback.
    pub fn search_range(&self) -> usize {
        self.search_range
    }

    /// Renders the candidate sequence encoded by the given selection.
    pub fn render(&self, genes: &BitVector) -> String {
        self.select(genes).into_iter().collect()
    }

    /// Assesses the candidate encoded by the given selection: an exact subsequence check
    /// first, the banded alignment as a graded fallback for infeasible candidates.
    pub fn assess(&self, genes: &BitVector) -> Assessment {
        assert_eq!(genes.len(), self.short.len(), "selection length must match the short string length");

        let candidate = self.select(genes);

        if is_subsequence(&candidate, &self.long) {
            Assessment {
                feasible: true,
                matches: candidate.len(),
                candidate_skips: 0,
                long_skips: self.long.len() - candidate.len(),
            }
        } else {
            let alignment = align_banded(&candidate, &self.long, self.search_range);

            Assessment {
                feasible: false,
                matches: alignment.matches,
                candidate_skips: alignment.candidate_skips,
                long_skips: alignment.reference_skips,
            }
        }
    }

    fn select(&self, genes: &BitVector) -> Vec<char> {
        self.short.iter().enumerate().filter(|(index, _)| genes.get(*index)).map(|(_, symbol)| *symbol).collect()
    }
}
