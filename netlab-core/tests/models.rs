//! Property tests for the random-graph models.

use netlab_core::{
    barabasi_albert, clustered_scale_free, connected_watts_strogatz, erdos_renyi,
};
use netlab_test_support::proptest_profile::suite_proptest_config;
use proptest::prelude::*;

proptest! {
    #![proptest_config(suite_proptest_config(32))]

    #[test]
    fn erdos_renyi_is_reproducible(n in 0_usize..40, p in 0.0_f64..=1.0, seed in any::<u64>()) {
        let first = erdos_renyi(n, p, Some(seed)).expect("valid parameters");
        let second = erdos_renyi(n, p, Some(seed)).expect("valid parameters");
        prop_assert_eq!(first.node_count(), n);
        prop_assert!(first.same_structure(&second));
    }

    #[test]
    fn watts_strogatz_keeps_lattice_edge_count(
        n in 6_usize..40,
        half in 1_usize..3,
        p in 0.0_f64..0.5,
        seed in any::<u64>(),
    ) {
        let k = half * 2;
        match connected_watts_strogatz(n, k, p, Some(seed)) {
            Ok(graph) => {
                prop_assert_eq!(graph.edge_count(), n * half);
                prop_assert!(graph.is_connected());
            }
            Err(err) => prop_assert!(matches!(
                err,
                netlab_core::GenerationError::NotConnected { .. }
            ), "unexpected error: {:?}", err),
        }
    }

    #[test]
    fn barabasi_albert_edge_count_is_exact(n in 2_usize..60, m in 1_usize..5, seed in any::<u64>()) {
        prop_assume!(m < n);
        let graph = barabasi_albert(n, m, Some(seed)).expect("valid parameters");
        prop_assert_eq!(graph.edge_count(), m + (n - m - 1) * m);
        prop_assert!(graph.is_connected());
    }

    #[test]
    fn clustered_scale_free_never_exceeds_m_edges_per_node(
        n in 1_usize..60,
        m in 1_usize..5,
        p in 0.0_f64..=1.0,
        seed in any::<u64>(),
    ) {
        prop_assume!(m <= n);
        let graph = clustered_scale_free(n, m, p, Some(seed)).expect("valid parameters");
        prop_assert_eq!(graph.node_count(), n);
        prop_assert!(graph.edge_count() <= (n - m) * m);
        let again = clustered_scale_free(n, m, p, Some(seed)).expect("valid parameters");
        prop_assert!(graph.same_structure(&again));
    }
}
