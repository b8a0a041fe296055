use super::*;

fn as_string(symbols: &[char]) -> String {
    symbols.iter().collect()
}

#[test]
fn can_order_inputs_by_length() {
    let problem = SubsequenceProblem::new("aabbcc", "abc", 2).unwrap();
    assert_eq!(as_string(problem.short()), "abc");
    assert_eq!(as_string(problem.long()), "aabbcc");

    let problem = SubsequenceProblem::new("abc", "aabbcc", 2).unwrap();
    assert_eq!(as_string(problem.short()), "abc");
    assert_eq!(problem.short_len(), 3);

    // equal lengths: the first argument is the selection source
    let problem = SubsequenceProblem::new("abc", "xyz", 2).unwrap();
    assert_eq!(as_string(problem.short()), "abc");
    assert_eq!(as_string(problem.long()), "xyz");
}

#[test]
fn can_reject_invalid_inputs() {
    assert!(SubsequenceProblem::new("", "abc", 2).is_err());
    assert!(SubsequenceProblem::new("abc", "", 2).is_err());
    assert!(SubsequenceProblem::new("abc", "abcd", 1).is_err());

    let problem = SubsequenceProblem::with_default_range("abc", "abcd").unwrap();
    assert_eq!(problem.search_range(), DEFAULT_SEARCH_RANGE);
}

#[test]
fn can_render_selected_symbols() {
    let problem = SubsequenceProblem::new("abcde", "abcdef", 2).unwrap();

    let mut genes = BitVector::new(5);
    genes.set(0, true);
    genes.set(2, true);
    genes.set(4, true);

    assert_eq!(problem.render(&genes), "ace");
    assert_eq!(problem.render(&BitVector::new(5)), "");
}

#[test]
fn can_assess_feasible_selection() {
    let problem = SubsequenceProblem::new("abc", "aabbcc", 2).unwrap();

    let mut genes = BitVector::new(3);
    genes.flip_range(0, 3);

    assert_eq!(
        problem.assess(&genes),
        Assessment { feasible: true, matches: 3, candidate_skips: 0, long_skips: 3 }
    );
}

#[test]
fn can_assess_infeasible_selection_with_alignment_fallback() {
    let problem = SubsequenceProblem::new("abc", "xyz", 2).unwrap();

    let mut genes = BitVector::new(3);
    genes.flip_range(0, 3);

    assert_eq!(
        problem.assess(&genes),
        Assessment { feasible: false, matches: 0, candidate_skips: 3, long_skips: 3 }
    );
}

#[test]
fn can_assess_empty_selection() {
    let problem = SubsequenceProblem::new("abc", "aabbcc", 2).unwrap();

    assert_eq!(
        problem.assess(&BitVector::new(3)),
        Assessment { feasible: true, matches: 0, candidate_skips: 0, long_skips: 6 }
    );
}

#[test]
#[should_panic(expected = "selection length must match")]
fn can_reject_selection_of_wrong_length() {
    let problem = SubsequenceProblem::new("abc", "aabbcc", 2).unwrap();

    problem.assess(&BitVector::new(4));
}
