//! Connected Watts-Strogatz small-world graphs.

use rand::{Rng, rngs::SmallRng};
use tracing::debug;

use super::{adjacency::Adjacency, check_probability, seeded_rng};
use crate::{Graph, error::GenerationError};

const MODEL: &str = "WS";

/// Number of regenerations attempted before giving up on connectivity.
pub const CONNECTED_WATTS_STROGATZ_TRIES: usize = 100;

/// Generates a connected Watts-Strogatz graph.
///
/// Each node starts joined to its `k / 2` nearest neighbours on either side
/// of a ring; every lattice edge `(u, v)` is then rewired with probability `p`
/// to `(u, w)` for a uniformly drawn `w` that creates neither a self-loop nor
/// a duplicate edge. The whole construction is repeated, with the same RNG
/// stream, until the result is connected.
///
/// # Errors
/// Returns [`GenerationError::NeighbourCountExceedsNodes`] when `k > n`,
/// [`GenerationError::InvalidProbability`] when `p` is outside `[0, 1]`, and
/// [`GenerationError::NotConnected`] after
/// [`CONNECTED_WATTS_STROGATZ_TRIES`] disconnected attempts.
///
/// # Examples
/// ```
/// use netlab_core::connected_watts_strogatz;
///
/// let graph = connected_watts_strogatz(30, 4, 0.1, Some(5)).expect("valid parameters");
/// assert_eq!(graph.node_count(), 30);
/// assert_eq!(graph.edge_count(), 60);
/// assert!(graph.is_connected());
/// ```
pub fn connected_watts_strogatz(
    n: usize,
    k: usize,
    p: f64,
    seed: Option<u64>,
) -> Result<Graph, GenerationError> {
    if k > n {
        return Err(GenerationError::NeighbourCountExceedsNodes { model: MODEL, k, n });
    }
    check_probability(MODEL, "p", p)?;

    let mut rng = seeded_rng(seed);
    for attempt in 0..CONNECTED_WATTS_STROGATZ_TRIES {
        let graph = watts_strogatz(n, k, p, &mut rng);
        if graph.is_connected() {
            return Ok(graph);
        }
        debug!(attempt, n, k, "watts-strogatz attempt was disconnected");
    }
    Err(GenerationError::NotConnected {
        model: MODEL,
        tries: CONNECTED_WATTS_STROGATZ_TRIES,
    })
}

fn watts_strogatz(n: usize, k: usize, p: f64, rng: &mut SmallRng) -> Graph {
    if k == n {
        return Adjacency::complete(n).into_graph();
    }

    let half = k / 2;
    let mut adjacency = Adjacency::new(n);
    for offset in 1..=half {
        for node in 0..n {
            adjacency.add_edge(node, (node + offset) % n);
        }
    }

    for offset in 1..=half {
        for node in 0..n {
            if rng.gen_bool(p) {
                rewire(&mut adjacency, node, (node + offset) % n, rng);
            }
        }
    }
    adjacency.into_graph()
}

fn rewire(adjacency: &mut Adjacency, node: usize, old: usize, rng: &mut SmallRng) {
    let n = adjacency.node_count();
    let mut candidate = rng.gen_range(0..n);
    while candidate == node || adjacency.has_edge(node, candidate) {
        if adjacency.degree(node) + 1 >= n {
            return;
        }
        candidate = rng.gen_range(0..n);
    }
    adjacency.remove_edge(node, old);
    adjacency.add_edge(node, candidate);
}
