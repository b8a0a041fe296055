use super::*;

#[test]
fn can_produce_integers_in_closed_range() {
    let random = DefaultRandom::default();

    for _ in 0..1000 {
        let value = random.uniform_int(3, 7);
        assert!((3..=7).contains(&value));
    }

    assert_eq!(random.uniform_int(5, 5), 5);
}

#[test]
fn can_produce_reals_in_half_open_range() {
    let random = DefaultRandom::default();

    for _ in 0..1000 {
        let value = random.uniform_real(0.5, 2.5);
        assert!((0.5..2.5).contains(&value));
    }

    assert_eq!(random.uniform_real(1.25, 1.25), 1.25);
}

#[test]
fn can_handle_probability_extremes() {
    let random = DefaultRandom::default();

    assert!(random.is_hit(1.));
    assert!(!random.is_hit(0.));
    assert!(random.is_hit(2.));
}

#[test]
fn can_draw_distinct_indices_through_rng_handle() {
    let random = DefaultRandom::default();
    let mut rng = random.get_rng();

    for _ in 0..100 {
        let drawn = rand::seq::index::sample(&mut rng, 10, 5);

        let mut seen = drawn.iter().collect::<Vec<_>>();
        seen.sort_unstable();
        seen.dedup();

        assert_eq!(seen.len(), 5);
    }
}

#[test]
fn can_repeat_sequences_in_repeatable_mode_across_threads() {
    let draw = || {
        std::thread::spawn(|| {
            let random = DefaultRandom::new_repeatable();
            (0..10).map(|_| random.uniform_int(0, 1000)).collect::<Vec<_>>()
        })
        .join()
        .unwrap()
    };

    assert_eq!(draw(), draw());
}
