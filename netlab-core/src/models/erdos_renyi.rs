//! Erdos-Renyi `G(n, p)` random graphs.

use rand::Rng;

use super::{adjacency::Adjacency, seeded_rng};
use crate::{Graph, GraphKind, error::GenerationError};

const MODEL: &str = "ER";

/// Returns the catalogue's default edge probability, `1/n + 0.1`.
///
/// # Errors
/// Returns [`GenerationError::UndefinedDefaultProbability`] when `n == 0`.
///
/// # Examples
/// ```
/// use netlab_core::default_edge_probability;
///
/// let p = default_edge_probability(10).expect("n is positive");
/// assert!((p - 0.2).abs() < 1e-12);
/// ```
#[expect(
    clippy::cast_precision_loss,
    reason = "node counts are far below 2^52 in practice"
)]
#[expect(clippy::float_arithmetic, reason = "probability formula")]
pub fn default_edge_probability(n: usize) -> Result<f64, GenerationError> {
    if n == 0 {
        return Err(GenerationError::UndefinedDefaultProbability { model: MODEL });
    }
    Ok(1.0 / n as f64 + 0.1)
}

/// Generates a `G(n, p)` graph: every unordered node pair is joined
/// independently with probability `p`.
///
/// `p <= 0` yields `n` isolated nodes and `p >= 1` the complete graph, so no
/// random numbers are drawn in either case.
///
/// # Errors
/// Returns [`GenerationError::InvalidProbability`] when `p` is NaN.
///
/// # Examples
/// ```
/// use netlab_core::erdos_renyi;
///
/// let complete = erdos_renyi(5, 1.0, Some(1)).expect("valid parameters");
/// assert_eq!(complete.edge_count(), 10);
///
/// let empty = erdos_renyi(5, 0.0, Some(1)).expect("valid parameters");
/// assert_eq!(empty.edge_count(), 0);
/// ```
pub fn erdos_renyi(n: usize, p: f64, seed: Option<u64>) -> Result<Graph, GenerationError> {
    if p.is_nan() {
        return Err(GenerationError::InvalidProbability {
            model: MODEL,
            parameter: "p",
            value: p,
        });
    }
    if p <= 0.0 {
        return Ok(Graph::with_nodes(GraphKind::Simple, n));
    }
    if p >= 1.0 {
        return Ok(Adjacency::complete(n).into_graph());
    }

    let mut rng = seeded_rng(seed);
    let mut graph = Graph::with_nodes(GraphKind::Simple, n);
    for left in 0..n {
        for right in (left + 1)..n {
            if rng.gen_bool(p) {
                graph.add_edge(left, right);
            }
        }
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    fn default_probability_rejects_zero_nodes() {
        assert_eq!(
            default_edge_probability(0),
            Err(GenerationError::UndefinedDefaultProbability { model: MODEL })
        );
    }

    #[rstest]
    fn nan_probability_is_rejected() {
        let err = erdos_renyi(4, f64::NAN, Some(0)).expect_err("NaN must be rejected");
        assert!(matches!(err, GenerationError::InvalidProbability { .. }));
    }

    #[rstest]
    #[case::below_zero(-1.0, 0)]
    #[case::above_one(3.0, 6)]
    fn out_of_range_probabilities_saturate(#[case] p: f64, #[case] edges: usize) {
        let graph = erdos_renyi(4, p, None).expect("saturating probabilities are accepted");
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), edges);
    }

    #[rstest]
    fn edge_density_tracks_probability() {
        let graph = erdos_renyi(200, 0.1, Some(11)).expect("valid parameters");
        let pairs = 200 * 199 / 2;
        let edges = graph.edge_count();
        assert!(edges > pairs / 20, "too few edges: {edges}");
        assert!(edges < pairs * 3 / 20, "too many edges: {edges}");
    }
}
