//! Unit tests for sn-network.

use sn_core::{IndividualRng, NetworkId, SnError};

use crate::{NetworkParams, gen_social_network, gen_support_network, generate_network};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn baseline() -> NetworkParams {
    NetworkParams::default()
}

/// Parameters where every contact falls inside the inner circle.
fn all_inner() -> NetworkParams {
    NetworkParams {
        family_min:          1,
        family_max:          3,
        friend_min:          0,
        friend_max:          2,
        closest_layer_nodes: 5,
        max_nodes:           15,
        p_connection_1:      0.5,
        p_connection_2:      0.0,
    }
}

#[cfg(test)]
mod params_tests {
    use super::*;

    #[test]
    fn baseline_is_valid() {
        assert!(baseline().validate().is_ok());
    }

    #[test]
    fn inverted_family_range_errors() {
        let params = NetworkParams { family_min: 11, ..baseline() };
        let err = generate_network(NetworkId(0), &params).unwrap_err();
        assert!(matches!(err, SnError::InvertedRange { param: "family_min/family_max", .. }));
    }

    #[test]
    fn inverted_friend_range_errors() {
        let params = NetworkParams { friend_min: 14, friend_max: 13, ..baseline() };
        assert!(matches!(
            params.validate(),
            Err(SnError::InvertedRange { param: "friend_min/friend_max", min: 14, max: 13 })
        ));
    }

    #[test]
    fn probability_out_of_range_errors() {
        let params = NetworkParams { p_connection_2: 1.2, ..baseline() };
        assert!(matches!(
            generate_network(NetworkId(0), &params),
            Err(SnError::Probability { param: "p_connection_2", .. })
        ));
    }

    #[test]
    fn with_p_connection_1_overrides_only_p1() {
        let p = baseline().with_p_connection_1(0.55);
        assert_eq!(p.p_connection_1, 0.55);
        assert_eq!(NetworkParams { p_connection_1: 0.36, ..p }, baseline());
    }
}

#[cfg(test)]
mod stage_a_tests {
    use super::*;

    #[test]
    fn node_counts_within_ranges() {
        let params = baseline();
        for id in 0..500 {
            let mut rng = IndividualRng::new(NetworkId(id));
            let s = gen_social_network(&mut rng, &params).unwrap();
            assert!((2..=10).contains(&s.family_nodes));
            assert!((1..=13).contains(&s.friend_nodes));
            assert!(s.family_active_nodes <= s.family_nodes);
            assert!(s.friend_active_nodes <= s.friend_nodes);
        }
    }

    #[test]
    fn fixed_ranges_give_fixed_counts() {
        let params = NetworkParams {
            family_min: 4,
            family_max: 4,
            friend_min: 6,
            friend_max: 6,
            ..baseline()
        };
        let mut rng = IndividualRng::new(NetworkId(17));
        let s = gen_social_network(&mut rng, &params).unwrap();
        assert_eq!((s.family_nodes, s.friend_nodes), (4, 6));
    }

    #[test]
    fn all_inner_circle_uses_p1_only() {
        // p1 = 1 activates everyone in the inner circle; p2 is never used.
        let params = NetworkParams { p_connection_1: 1.0, p_connection_2: 0.0, ..all_inner() };
        for id in 0..100 {
            let mut rng = IndividualRng::new(NetworkId(id));
            let s = gen_social_network(&mut rng, &params).unwrap();
            assert_eq!(s.family_active_nodes, s.family_nodes);
            assert_eq!(s.friend_active_nodes, s.friend_nodes);
        }
    }

    #[test]
    fn inner_circle_exactly_full_skips_split() {
        // 2 + 3 == closest_layer_nodes: the "everyone inner" branch applies.
        let params = NetworkParams {
            family_min:          2,
            family_max:          2,
            friend_min:          3,
            friend_max:          3,
            closest_layer_nodes: 5,
            p_connection_1:      1.0,
            p_connection_2:      0.0,
            ..baseline()
        };
        let mut rng = IndividualRng::new(NetworkId(0));
        let s = gen_social_network(&mut rng, &params).unwrap();
        assert_eq!(s.total_active(), 5);
    }

    #[test]
    fn split_activates_exactly_inner_circle_when_p2_zero() {
        let params = NetworkParams { p_connection_1: 1.0, p_connection_2: 0.0, ..baseline() };
        for id in 0..200 {
            let mut rng = IndividualRng::new(NetworkId(id));
            let s = gen_social_network(&mut rng, &params).unwrap();
            let total = u64::from(s.family_nodes + s.friend_nodes);
            if total > u64::from(params.closest_layer_nodes) {
                assert_eq!(s.total_active(), u64::from(params.closest_layer_nodes));
            } else {
                assert_eq!(s.total_active(), total);
            }
        }
    }

    #[test]
    fn empty_inner_circle_uses_p2_only() {
        let params = NetworkParams {
            closest_layer_nodes: 0,
            p_connection_1:      1.0,
            p_connection_2:      0.0,
            ..baseline()
        };
        let mut rng = IndividualRng::new(NetworkId(2));
        let s = gen_social_network(&mut rng, &params).unwrap();
        assert_eq!(s.total_active(), 0);
    }

    #[test]
    fn node_counts_near_u32_max_do_not_overflow() {
        let params = NetworkParams {
            family_min:          u32::MAX,
            family_max:          u32::MAX,
            friend_min:          u32::MAX,
            friend_max:          u32::MAX,
            closest_layer_nodes: 5,
            max_nodes:           15,
            p_connection_1:      1.0,
            p_connection_2:      0.0,
        };
        let mut rng = IndividualRng::new(NetworkId(0));
        let s = gen_social_network(&mut rng, &params).unwrap();
        assert_eq!((s.family_nodes, s.friend_nodes), (u32::MAX, u32::MAX));
        assert_eq!(s.total_active(), 5);
    }
}

#[cfg(test)]
mod stage_b_tests {
    use super::*;

    #[test]
    fn under_cap_is_noop() {
        let mut rng = IndividualRng::new(NetworkId(0));
        let s = gen_support_network(&mut rng, 15, 6, 9).unwrap();
        assert_eq!((s.family, s.friend), (6, 9));
    }

    #[test]
    fn under_cap_consumes_no_randomness() {
        let mut used = IndividualRng::new(NetworkId(4));
        let mut fresh = IndividualRng::new(NetworkId(4));
        gen_support_network(&mut used, 15, 3, 4).unwrap();
        assert_eq!(used.standard_normal(), fresh.standard_normal());
    }

    #[test]
    fn over_cap_totals_max_nodes() {
        for id in 0..200 {
            let mut rng = IndividualRng::new(NetworkId(id));
            let s = gen_support_network(&mut rng, 15, 12, 10).unwrap();
            assert_eq!(s.family + s.friend, 15);
            assert!(s.family <= 12);
            assert!(s.friend <= 10);
            // at least 15 - 10 family supporters must be drawn
            assert!(s.family >= 5);
        }
    }

    #[test]
    fn huge_active_counts_are_capped() {
        let mut rng = IndividualRng::new(NetworkId(1));
        let s = gen_support_network(&mut rng, 10, u32::MAX, u32::MAX).unwrap();
        assert_eq!(s.family + s.friend, 10);
    }

    #[test]
    fn zero_cap_gives_no_support() {
        let mut rng = IndividualRng::new(NetworkId(0));
        let s = gen_support_network(&mut rng, 0, 3, 2).unwrap();
        assert_eq!((s.family, s.friend), (0, 0));
    }
}

#[cfg(test)]
mod generate_tests {
    use super::*;

    #[test]
    fn deterministic_for_same_id() {
        let params = baseline();
        for id in 0..50 {
            let a = generate_network(NetworkId(id), &params).unwrap();
            let b = generate_network(NetworkId(id), &params).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn network_id_is_recorded() {
        let net = generate_network(NetworkId(77), &baseline()).unwrap();
        assert_eq!(net.network_id, NetworkId(77));
    }

    #[test]
    fn population_varies() {
        let params = baseline();
        let first = generate_network(NetworkId(0), &params).unwrap();
        let any_differs = (1..50)
            .map(|id| generate_network(NetworkId(id), &params).unwrap())
            .any(|n| (n.family_nodes, n.friend_nodes) != (first.family_nodes, first.friend_nodes));
        assert!(any_differs);
    }

    #[test]
    fn bounds_hold_across_population() {
        let params = NetworkParams { max_nodes: 4, ..baseline() };
        for id in 0..1000 {
            let n = generate_network(NetworkId(id), &params).unwrap();
            assert!(n.family_active_nodes <= n.family_nodes);
            assert!(n.friend_active_nodes <= n.friend_nodes);
            assert!(n.total_support() <= params.max_nodes);
            let active = n.family_active_nodes + n.friend_active_nodes;
            assert_eq!(n.total_support(), active.min(params.max_nodes));
        }
    }

    #[test]
    fn capping_noop_when_under_cap() {
        let params = NetworkParams { max_nodes: 1_000, ..baseline() };
        for id in 0..200 {
            let n = generate_network(NetworkId(id), &params).unwrap();
            assert_eq!(n.family_support, n.family_active_nodes);
            assert_eq!(n.friend_support, n.friend_active_nodes);
        }
    }

    #[test]
    fn stages_share_one_stream() {
        let params = baseline();
        let id = NetworkId(21);
        let mut rng = IndividualRng::new(id);
        let social = gen_social_network(&mut rng, &params).unwrap();
        let support = gen_support_network(
            &mut rng,
            params.max_nodes,
            social.family_active_nodes,
            social.friend_active_nodes,
        )
        .unwrap();
        let net = generate_network(id, &params).unwrap();
        assert_eq!(net.family_active_nodes, social.family_active_nodes);
        assert_eq!(net.support(), support);
    }
}
