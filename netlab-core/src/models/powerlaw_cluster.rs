//! Holme-Kim clustered scale-free graphs.

use rand::{Rng, rngs::SmallRng};

use super::{adjacency::Adjacency, check_probability, random_subset, seeded_rng};
use crate::{Graph, error::GenerationError};

const MODEL: &str = "CSF";

/// Generates a clustered scale-free (power-law cluster) graph.
///
/// The first `m` nodes start isolated. Every new node draws `m` distinct
/// preferential targets; after each preferential edge, with probability `p`
/// the next edge instead closes a triangle by joining a random neighbour of
/// the last target that is not yet adjacent to the new node.
///
/// # Errors
/// Returns [`GenerationError::InvalidAttachment`] unless `1 <= m <= n`, and
/// [`GenerationError::InvalidProbability`] when `p` is outside `[0, 1]`.
///
/// # Examples
/// ```
/// use netlab_core::clustered_scale_free;
///
/// let graph = clustered_scale_free(50, 3, 0.3, Some(2)).expect("valid parameters");
/// assert_eq!(graph.node_count(), 50);
/// assert!(graph.edge_count() <= 47 * 3);
/// ```
pub fn clustered_scale_free(
    n: usize,
    m: usize,
    p: f64,
    seed: Option<u64>,
) -> Result<Graph, GenerationError> {
    if m < 1 || n < m {
        return Err(GenerationError::InvalidAttachment {
            model: MODEL,
            constraint: "1 <= m <= n",
            m,
            n,
        });
    }
    check_probability(MODEL, "p", p)?;

    let mut rng = seeded_rng(seed);
    let mut adjacency = Adjacency::new(n);
    let mut repeated_nodes: Vec<usize> = (0..m).collect();

    for source in m..n {
        let mut targets: Vec<usize> = random_subset(&repeated_nodes, m, &mut rng)
            .into_iter()
            .collect();
        let Some(mut target) = targets.pop() else {
            break;
        };
        adjacency.add_edge(source, target);
        repeated_nodes.push(target);

        let mut count = 1;
        while count < m {
            if rng.gen_bool(p) {
                if let Some(neighbour) = triad_partner(&adjacency, source, target, &mut rng) {
                    adjacency.add_edge(source, neighbour);
                    repeated_nodes.push(neighbour);
                    count += 1;
                    continue;
                }
            }
            let Some(next) = targets.pop() else {
                break;
            };
            target = next;
            adjacency.add_edge(source, target);
            repeated_nodes.push(target);
            count += 1;
        }
        repeated_nodes.extend(std::iter::repeat_n(source, m));
    }
    Ok(adjacency.into_graph())
}

/// Picks a neighbour of `target` that `source` is not yet joined to.
fn triad_partner(
    adjacency: &Adjacency,
    source: usize,
    target: usize,
    rng: &mut SmallRng,
) -> Option<usize> {
    let candidates: Vec<usize> = adjacency
        .neighbours(target)
        .iter()
        .copied()
        .filter(|&neighbour| neighbour != source && !adjacency.has_edge(source, neighbour))
        .collect();
    if candidates.is_empty() {
        return None;
    }
    candidates.get(rng.gen_range(0..candidates.len())).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::zero_m(10, 0)]
    #[case::m_exceeds_n(3, 4)]
    fn rejects_invalid_attachment(#[case] n: usize, #[case] m: usize) {
        let err = clustered_scale_free(n, m, 0.3, Some(1)).expect_err("invalid m must fail");
        assert!(matches!(err, GenerationError::InvalidAttachment { .. }));
    }

    #[rstest]
    fn rejects_invalid_probability() {
        let err = clustered_scale_free(10, 2, 1.5, Some(1)).expect_err("p > 1 must fail");
        assert!(matches!(err, GenerationError::InvalidProbability { .. }));
    }

    #[rstest]
    fn m_equal_to_n_yields_isolated_nodes() {
        let graph = clustered_scale_free(3, 3, 0.5, Some(1)).expect("valid parameters");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 0);
    }

    #[rstest]
    fn zero_triad_probability_attaches_m_edges_per_node() {
        let graph = clustered_scale_free(40, 2, 0.0, Some(6)).expect("valid parameters");
        assert_eq!(graph.edge_count(), 38 * 2);
    }

    #[rstest]
    fn full_triad_probability_creates_triangles() {
        let graph = clustered_scale_free(40, 3, 1.0, Some(6)).expect("valid parameters");
        let closes_triangle = (3..40).any(|node| {
            let neighbours = graph.neighbors(node);
            neighbours.iter().any(|&a| {
                neighbours
                    .iter()
                    .any(|&b| a < b && graph.has_edge(a, b))
            })
        });
        assert!(closes_triangle);
    }
}
