//! Integration tests running the algorithms with placeholder lambdas.

#[cfg(test)]
mod tests {
    use lambda_expr::{_1, _2, WriteSink, hold};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{count_if, find_if, for_each, for_each_mut, is_sorted, sort, transform};

    /// The unsorted input used throughout the demo scenario.
    fn fixture() -> Vec<i32> {
        vec![7, 1, 2, 3, 4, 5]
    }

    #[test]
    fn test_sort_ascending() {
        let mut values = fixture();
        sort(&mut values, _1.lt(_2));
        assert_eq!(values, vec![1, 2, 3, 4, 5, 7]);
        assert!(is_sorted(&values, _1.lt(_2)));
    }

    #[test]
    fn test_sort_descending() {
        let mut values = fixture();
        sort(&mut values, _2.lt(_1));
        assert_eq!(values, vec![7, 5, 4, 3, 2, 1]);

        let mut values = fixture();
        sort(&mut values, _1.gt(_2));
        assert_eq!(values, vec![7, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_sort_with_erased_comparator() {
        for descending in [false, true] {
            let less = if descending {
                _2.lt(_1).into_dyn_binary()
            } else {
                _1.lt(_2).into_dyn_binary()
            };
            let mut values = fixture();
            sort(&mut values, &less);
            assert!(is_sorted(&values, &less));
        }
    }

    #[test]
    fn test_sort_random_matches_std() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 2, 17, 256] {
            let mut values: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
            let mut expected = values.clone();
            expected.sort();
            sort(&mut values, _1.lt(_2));
            assert_eq!(values, expected);
        }
    }

    #[test]
    fn test_for_each_streams_every_element() {
        let mut values = fixture();
        sort(&mut values, _1.lt(_2));

        let mut printed = Vec::new();
        for_each(&values, hold(&mut printed) << _1);
        assert_eq!(printed, values);

        let mut text = String::new();
        for_each(&values, hold(&mut text) << _1);
        assert_eq!(text, "123457");
    }

    #[test]
    fn test_for_each_mut_writes_back_prefix() {
        let mut values = vec![1, 2, 3, 4, 5, 7];
        for_each_mut(&mut values[..5], _1.assign(100));
        assert_eq!(values, vec![100, 100, 100, 100, 100, 7]);
    }

    #[test]
    fn test_for_each_mut_returns_the_functor() {
        let mut values = vec![0; 3];
        let mut fill = for_each_mut(&mut values, _1.assign(4));
        fill.set(9);
        for_each_mut(&mut values[1..], fill);
        assert_eq!(values, vec![4, 9, 9]);
    }

    #[test]
    fn test_transform_shift() {
        let mut out = Vec::new();
        let n = transform(&[1, 2, 3, 4, 5, 7], &mut out, 3 + _1 - 1);
        assert_eq!(n, 6);
        assert_eq!(out, vec![3, 4, 5, 6, 7, 9]);
    }

    #[test]
    fn test_transform_into_writer() {
        let mut sink = WriteSink::new(Vec::new()).with_separator(" ");
        transform(&[100, 100, 100, 100, 100, 7], &mut sink, 3 + _1 - 1);
        let bytes = sink.finish().expect("in-memory write");
        assert_eq!(String::from_utf8(bytes).expect("utf8"), "102 102 102 102 102 9 ");
    }

    #[test]
    fn test_predicates() {
        let values = fixture();
        assert_eq!(count_if(&values, _1.gt(3)), 3);
        assert_eq!(count_if(&values, _1.gt(100)), 0);
        assert_eq!(find_if(&values, _1.gt(3)), Some(0));
        assert_eq!(find_if(&values, _1.gt(10)), None);
        assert_eq!(find_if(&values, (-_1).gt(-2)), Some(1));
    }
}
