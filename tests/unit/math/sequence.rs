//! Tests for the seeded sequence generator and its derived draws

#[cfg(test)]
mod tests {
    use constructivist::math::sequence::{SequenceGenerator, hash_seed};

    // Tests the rolling hash against hand-computed values
    #[test]
    fn test_hash_seed_known_values() {
        assert_eq!(hash_seed("abc"), 96_354);
        assert_eq!(hash_seed(""), 0);
        assert_eq!(hash_seed("é"), 233);
    }

    // Tests that seeds whose 32-bit hash wraps negative map to the absolute value
    #[test]
    fn test_hash_seed_negative_wrap_is_made_positive() {
        assert_eq!(hash_seed("polynomial"), 1_079_839_020);
        assert_eq!(hash_seed("zzzzzzzz"), 1_910_022_912);
    }

    // Tests the first draws of a known seed
    #[test]
    fn test_next_known_sequence() {
        let mut rng = SequenceGenerator::new("abc");
        assert_eq!(rng.state(), 96_354);

        let first = rng.next();
        assert_eq!(rng.state(), 209_371);
        assert!((first - 209_371.0 / 233_280.0).abs() < f64::EPSILON);

        rng.next();
        assert_eq!(rng.state(), 220_808);
        rng.next();
        assert_eq!(rng.state(), 220_665);
    }

    // Tests that two generators from the same seed agree draw for draw
    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SequenceGenerator::new("reproducible");
        let mut b = SequenceGenerator::new("reproducible");

        let left: Vec<f64> = (0..1000).map(|_| a.next()).collect();
        let right: Vec<f64> = (0..1000).map(|_| b.next()).collect();
        assert_eq!(left, right);
    }

    // Tests that every draw stays in [0, 1)
    #[test]
    fn test_next_unit_interval() {
        let mut rng = SequenceGenerator::new("unit");
        for _ in 0..10_000 {
            let value = rng.next();
            assert!((0.0..1.0).contains(&value), "draw {value} out of range");
        }
    }

    // Tests that integer draws stay inside [min, max) and reach both ends
    #[test]
    fn test_range_int_bounds() {
        let mut rng = SequenceGenerator::new("bounds");
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..10_000 {
            let value = rng.range_int(-5, 5);
            assert!((-5..5).contains(&value), "value {value} out of range");
            seen_min |= value == -5;
            seen_max |= value == 4;
        }

        assert!(seen_min && seen_max);
    }

    // Tests float draws over an arbitrary interval
    #[test]
    fn test_range_bounds() {
        let mut rng = SequenceGenerator::new("float");
        for _ in 0..10_000 {
            let value = rng.range(230.0, 250.0);
            assert!((230.0..250.0).contains(&value));
        }
    }

    // Tests floor draws over fractional bounds
    #[test]
    fn test_range_floor_fractional_bounds() {
        let mut rng = SequenceGenerator::new("quarter");
        for _ in 0..10_000 {
            let value = rng.range_floor(-2.75, 2.75);
            assert!((-3..=2).contains(&value), "value {value} out of range");
        }
    }

    // Tests the degenerate probabilities of boolean draws
    #[test]
    fn test_boolean_extremes() {
        let mut rng = SequenceGenerator::new("coin");
        assert!((0..10_000).all(|_| !rng.boolean(0.0)));
        assert!((0..10_000).all(|_| rng.boolean(1.0)));
        assert!((0..1_000).all(|_| !rng.boolean(-1.0)));
        assert!((0..1_000).all(|_| rng.boolean(2.0)));
    }

    // Tests that a fair coin lands on both sides at roughly even rates
    #[test]
    fn test_coin_is_roughly_fair() {
        let mut rng = SequenceGenerator::new("fair");
        let heads = (0..10_000).filter(|_| rng.coin()).count();
        assert!((4_000..6_000).contains(&heads), "heads = {heads}");
    }

    // Tests slice picks, including the empty slice
    #[test]
    fn test_pick() {
        let mut rng = SequenceGenerator::new("pick");
        let items = ["a", "b", "c"];
        for _ in 0..100 {
            let picked = rng.pick(&items);
            assert!(picked.is_some_and(|item| items.contains(item)));
        }

        let before = rng.state();
        let empty: [u8; 0] = [];
        assert_eq!(rng.pick(&empty), None);
        assert_ne!(rng.state(), before, "empty pick must still consume a draw");
    }

    // Tests runtime lists pick the same element an array of equal length would
    #[test]
    fn test_pick_runtime_list_matches_array() {
        let names: Vec<String> = ["north", "east", "south", "west"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let mut from_list = SequenceGenerator::new("compass");
        let mut from_array = from_list.clone();

        for _ in 0..50 {
            let picked = from_list.pick(&names).map(String::as_str);
            let expected = from_array.pick_from(&["north", "east", "south", "west"]);
            assert_eq!(picked, Some(expected));
        }
        assert_eq!(from_list, from_array);
    }

    // Tests array picks reach every element
    #[test]
    fn test_pick_from_covers_all_items() {
        let mut rng = SequenceGenerator::new("sizes");
        let mut seen = [false; 5];
        for _ in 0..1_000 {
            let size = rng.pick_from(&[1_usize, 2, 3, 4, 6]);
            let index = [1, 2, 3, 4, 6].iter().position(|s| *s == size);
            if let Some(slot) = index.and_then(|i| seen.get_mut(i)) {
                *slot = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    // Tests that picks and ranged draws consume exactly one draw each
    #[test]
    fn test_helpers_consume_one_draw() {
        let mut reference = SequenceGenerator::new("draws");
        let mut rng = reference.clone();

        rng.range(0.0, 10.0);
        rng.range_int(0, 10);
        rng.boolean(0.3);
        rng.pick_from(&[1, 2, 3]);
        for _ in 0..4 {
            reference.next();
        }

        assert_eq!(rng, reference);
    }
}
