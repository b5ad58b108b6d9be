//! Barabasi-Albert preferential attachment graphs.

use super::{adjacency::Adjacency, random_subset, seeded_rng};
use crate::{Graph, error::GenerationError};

const MODEL: &str = "BA";

/// Generates a Barabasi-Albert graph on `n` nodes.
///
/// Growth starts from a star on `m + 1` nodes centred on node `0`. Each
/// subsequent node attaches to `m` distinct existing nodes drawn with
/// probability proportional to their degree, giving
/// `m + (n - m - 1) * m` edges in total.
///
/// # Errors
/// Returns [`GenerationError::InvalidAttachment`] unless `1 <= m < n`.
///
/// # Examples
/// ```
/// use netlab_core::barabasi_albert;
///
/// let graph = barabasi_albert(20, 3, Some(4)).expect("valid parameters");
/// assert_eq!(graph.node_count(), 20);
/// assert_eq!(graph.edge_count(), 3 + 16 * 3);
/// ```
pub fn barabasi_albert(n: usize, m: usize, seed: Option<u64>) -> Result<Graph, GenerationError> {
    if m < 1 || m >= n {
        return Err(GenerationError::InvalidAttachment {
            model: MODEL,
            constraint: "1 <= m < n",
            m,
            n,
        });
    }

    let mut rng = seeded_rng(seed);
    let mut adjacency = Adjacency::new(n);
    // Every node appears once per incident edge.
    let mut repeated_nodes = Vec::with_capacity(m.saturating_mul(n).saturating_mul(2));
    for leaf in 1..=m {
        adjacency.add_edge(0, leaf);
        repeated_nodes.extend([0, leaf]);
    }

    for source in (m + 1)..n {
        let targets = random_subset(&repeated_nodes, m, &mut rng);
        for &target in &targets {
            adjacency.add_edge(source, target);
        }
        repeated_nodes.extend(targets);
        repeated_nodes.extend(std::iter::repeat_n(source, m));
    }
    Ok(adjacency.into_graph())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::zero_m(10, 0)]
    #[case::m_equals_n(5, 5)]
    #[case::m_exceeds_n(3, 8)]
    fn rejects_invalid_attachment(#[case] n: usize, #[case] m: usize) {
        let err = barabasi_albert(n, m, Some(1)).expect_err("invalid m must fail");
        assert!(matches!(err, GenerationError::InvalidAttachment { .. }));
    }

    #[rstest]
    fn star_seed_graph_when_no_growth() {
        let graph = barabasi_albert(4, 3, Some(1)).expect("valid parameters");
        assert_eq!(graph.degree(0), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[rstest]
    fn every_grown_node_has_m_neighbours_at_insertion() {
        let graph = barabasi_albert(60, 2, Some(8)).expect("valid parameters");
        assert!(graph.is_connected());
        for node in 3..60 {
            assert!(graph.degree(node) >= 2, "node {node} has too few edges");
        }
    }
}
