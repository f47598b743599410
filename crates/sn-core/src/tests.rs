//! Unit tests for sn-core primitives.

#[cfg(test)]
mod ids {
    use crate::NetworkId;

    #[test]
    fn seed_is_the_id() {
        assert_eq!(NetworkId(42).seed(), 42);
        assert_eq!(NetworkId::from(42u64), NetworkId(42));
    }

    #[test]
    fn ordering() {
        assert!(NetworkId(0) < NetworkId(1));
    }

    #[test]
    fn display() {
        assert_eq!(NetworkId(7).to_string(), "NetworkId(7)");
    }
}

#[cfg(test)]
mod rng {
    use crate::{IndividualRng, NetworkId, SnError};

    #[test]
    fn deterministic_same_id() {
        let mut r1 = IndividualRng::new(NetworkId(12345));
        let mut r2 = IndividualRng::new(NetworkId(12345));
        for _ in 0..100 {
            assert_eq!(r1.standard_normal(), r2.standard_normal());
            assert_eq!(
                r1.uniform_inclusive("x", 0u32, 100).unwrap(),
                r2.uniform_inclusive("x", 0u32, 100).unwrap()
            );
        }
    }

    #[test]
    fn different_ids_differ() {
        let mut r0 = IndividualRng::new(NetworkId(0));
        let mut r1 = IndividualRng::new(NetworkId(1));
        let a: Vec<f64> = (0..8).map(|_| r0.standard_normal()).collect();
        let b: Vec<f64> = (0..8).map(|_| r1.standard_normal()).collect();
        assert_ne!(a, b, "streams for adjacent ids should diverge");
    }

    #[test]
    fn uniform_inclusive_hits_both_ends() {
        let mut rng = IndividualRng::new(NetworkId(3));
        let mut seen = [false; 3];
        for _ in 0..500 {
            let v = rng.uniform_inclusive("x", 2u32, 4).unwrap();
            assert!((2..=4).contains(&v));
            seen[(v - 2) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "inclusive upper bound never drawn");
    }

    #[test]
    fn uniform_inclusive_degenerate_range() {
        let mut rng = IndividualRng::new(NetworkId(3));
        assert_eq!(rng.uniform_inclusive("x", 5i32, 5).unwrap(), 5);
    }

    #[test]
    fn uniform_inclusive_inverted_errors() {
        let mut rng = IndividualRng::new(NetworkId(3));
        let err = rng.uniform_inclusive("family", 10u32, 2).unwrap_err();
        assert_eq!(err, SnError::InvertedRange { param: "family", min: 10, max: 2 });
    }

    #[test]
    fn binomial_extremes() {
        let mut rng = IndividualRng::new(NetworkId(9));
        assert_eq!(rng.binomial(12, 0.0).unwrap(), 0);
        assert_eq!(rng.binomial(12, 1.0).unwrap(), 12);
        assert_eq!(rng.binomial(0, 0.5).unwrap(), 0);
    }

    #[test]
    fn binomial_bounded_by_trials() {
        let mut rng = IndividualRng::new(NetworkId(9));
        for _ in 0..1000 {
            assert!(rng.binomial(7, 0.36).unwrap() <= 7);
        }
    }

    #[test]
    fn binomial_rejects_bad_probability() {
        let mut rng = IndividualRng::new(NetworkId(9));
        assert!(rng.binomial(3, 1.5).is_err());
        assert!(rng.binomial(3, -0.1).is_err());
    }

    #[test]
    fn standard_normal_mean_near_zero() {
        let mut rng = IndividualRng::new(NetworkId(1));
        let n = 20_000;
        let mean: f64 = (0..n).map(|_| rng.standard_normal()).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "got {mean}");
    }
}

#[cfg(test)]
mod sample {
    use crate::{IndividualRng, NetworkId, SnError, draw_two_label};

    #[test]
    fn all_of_one_label() {
        let mut rng = IndividualRng::new(NetworkId(0));
        assert_eq!(draw_two_label(&mut rng, 6, 0, 4).unwrap(), 4);
        assert_eq!(draw_two_label(&mut rng, 0, 6, 4).unwrap(), 0);
    }

    #[test]
    fn whole_multiset_returns_all_a() {
        let mut rng = IndividualRng::new(NetworkId(0));
        assert_eq!(draw_two_label(&mut rng, 3, 5, 8).unwrap(), 3);
    }

    #[test]
    fn zero_draws() {
        let mut rng = IndividualRng::new(NetworkId(0));
        assert_eq!(draw_two_label(&mut rng, 3, 5, 0).unwrap(), 0);
    }

    #[test]
    fn count_within_hypergeometric_support() {
        let mut rng = IndividualRng::new(NetworkId(5));
        for _ in 0..1000 {
            // 4 A's, 10 B's, draw 7: at most 4 A's, at least 0.
            let a = draw_two_label(&mut rng, 4, 10, 7).unwrap();
            assert!(a <= 4);
        }
        for _ in 0..1000 {
            // 9 A's, 2 B's, draw 5: at least 3 A's.
            let a = draw_two_label(&mut rng, 9, 2, 5).unwrap();
            assert!((3..=5).contains(&a));
        }
    }

    #[test]
    fn mean_matches_hypergeometric() {
        let mut rng = IndividualRng::new(NetworkId(11));
        let n = 20_000;
        let total: u32 = (0..n).map(|_| draw_two_label(&mut rng, 6, 14, 5).unwrap()).sum();
        let mean = total as f64 / n as f64;
        // E = k * a / (a + b) = 5 * 6 / 20 = 1.5
        assert!((mean - 1.5).abs() < 0.05, "got {mean}");
    }

    #[test]
    fn oversized_request_errors() {
        let mut rng = IndividualRng::new(NetworkId(0));
        let err = draw_two_label(&mut rng, 2, 3, 6).unwrap_err();
        assert_eq!(err, SnError::SampleTooLarge { requested: 6, available: 5 });
    }
}

#[cfg(test)]
mod error {
    use crate::SnError;
    use crate::error::{check_probability, check_range, check_within};

    #[test]
    fn range_checks() {
        assert!(check_range("family", 2u32, 10).is_ok());
        assert!(check_range("family", 4u32, 4).is_ok());
        assert!(check_range("family", 11u32, 10).is_err());
    }

    #[test]
    fn probability_checks() {
        assert!(check_probability("p", 0.0).is_ok());
        assert!(check_probability("p", 1.0).is_ok());
        assert!(check_probability("p", 1.01).is_err());
        assert!(check_probability("p", f64::NAN).is_err());
    }

    #[test]
    fn within_rejects_nan() {
        assert!(check_within("level", f64::NAN, 0.0, f64::MAX).is_err());
        assert!(check_within("level", 3.0, 0.0, f64::MAX).is_ok());
    }

    #[test]
    fn messages_name_the_parameter() {
        let e = SnError::InvertedRange { param: "friend", min: 13, max: 1 };
        assert_eq!(e.to_string(), "friend: min 13 is greater than max 1");
    }
}
