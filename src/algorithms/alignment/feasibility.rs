#[cfg(test)]
#[path = "../../../tests/unit/algorithms/alignment/feasibility_test.rs"]
mod feasibility_test;

/// Checks whether `candidate` is a subsequence of `reference`: every candidate symbol
/// has to be found in the reference in the same order, gaps are allowed.
pub fn is_subsequence(candidate: &[char], reference: &[char]) -> bool {
    let mut position = 0;

    for symbol in candidate {
        match reference[position..].iter().position(|other| other == symbol) {
            Some(offset) => position += offset + 1,
            None => return false,
        }
    }

    true
}
