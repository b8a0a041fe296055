#[cfg(test)]
#[path = "../../../tests/unit/algorithms/alignment/banded_test.rs"]
mod banded_test;

use crate::utils::Float;

/// A minimum meaningful band width: forced advances move the reference cursor by
/// `search_range - 1` positions which degenerates to no progress below this value.
pub const MIN_SEARCH_RANGE: usize = 2;

/// An alignment outcome produced by the banded scan.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BandedAlignment {
    /// Amount of matched symbol pairs.
    pub matches: usize,
    /// Amount of candidate symbols consumed without a match.
    pub candidate_skips: usize,
    /// Amount of reference symbols consumed without a match.
    pub reference_skips: usize,
}

/// Aligns `candidate` against `reference` with a greedy scan which recovers from
/// mismatches by probing a diagonal band of at most `search_range` positions ahead.
///
/// The scan is deterministic and single pass: both cursors only move forward and every
/// symbol of both sequences ends up counted either as matched or as skipped. When the
/// band holds no match, cursors are advanced heuristically: the side which consumed
/// proportionally fewer symbols so far is drained faster.
pub fn align_banded(candidate: &[char], reference: &[char], search_range: usize) -> BandedAlignment {
    assert!(search_range >= MIN_SEARCH_RANGE, "search range must be at least {MIN_SEARCH_RANGE}");

    let length_ratio = candidate.len() as Float / reference.len() as Float;

    let mut alignment = BandedAlignment::default();
    let (mut i, mut j) = (0, 0);

    while i < candidate.len() && j < reference.len() {
        if candidate[i] == reference[j] {
            alignment.matches += 1;
            i += 1;
            j += 1;
            continue;
        }

        if let Some((candidate_shift, reference_shift)) = find_within_band(candidate, reference, i, j, search_range) {
            // the accepted pair is counted here and once more when the main scan lands on it
            alignment.matches += 1;
            alignment.candidate_skips += candidate_shift;
            alignment.reference_skips += reference_shift;
            i += candidate_shift;
            j += reference_shift;
            continue;
        }

        let skip_ratio = if alignment.reference_skips == 0 {
            Float::INFINITY
        } else {
            alignment.candidate_skips as Float / alignment.reference_skips as Float
        };

        if skip_ratio > length_ratio {
            // candidate side got ahead, drain the reference side faster
            let reference_step = (search_range - 1).min(reference.len() - j);
            j += reference_step;
            alignment.reference_skips += reference_step;

            i += 1;
            alignment.candidate_skips += 1;
        } else {
            let candidate_step = (1 + search_range / 2).min(candidate.len() - i);
            i += candidate_step;
            alignment.candidate_skips += candidate_step;

            let reference_step = (search_range / 2).min(reference.len() - j);
            j += reference_step;
            alignment.reference_skips += reference_step;
        }
    }

    alignment.candidate_skips += candidate.len() - i;
    alignment.reference_skips += reference.len() - j;

    alignment
}

/// Scans band pairs `(i + k, j + offset - k)` in order of increasing offset and returns
/// cursor shifts to the first matching pair.
fn find_within_band(
    candidate: &[char],
    reference: &[char],
    i: usize,
    j: usize,
    search_range: usize,
) -> Option<(usize, usize)> {
    for offset in 1..=search_range {
        for k in 0..=offset {
            let candidate_index = i + k;
            if candidate_index >= candidate.len() {
                // larger k moves further out of bounds
                break;
            }

            let reference_index = j + offset - k;
            if reference_index >= reference.len() {
                // larger k gets back into bounds
                continue;
            }

            if candidate[candidate_index] == reference[reference_index] {
                return Some((k, offset - k));
            }
        }
    }

    None
}
