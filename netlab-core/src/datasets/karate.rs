//! Zachary's karate club network, shipped with the library.

use crate::{Graph, GraphKind};

/// Number of club members.
pub const KARATE_NODES: usize = 34;

/// Each row lists a member followed by the higher-numbered members they
/// interacted with.
const ADJACENCY: &[(usize, &[usize])] = &[
    (0, &[1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13, 17, 19, 21, 31]),
    (1, &[2, 3, 7, 13, 17, 19, 21, 30]),
    (2, &[3, 7, 8, 9, 13, 27, 28, 32]),
    (3, &[7, 12, 13]),
    (4, &[6, 10]),
    (5, &[6, 10, 16]),
    (6, &[16]),
    (8, &[30, 32, 33]),
    (9, &[33]),
    (13, &[33]),
    (14, &[32, 33]),
    (15, &[32, 33]),
    (18, &[32, 33]),
    (19, &[33]),
    (20, &[32, 33]),
    (22, &[32, 33]),
    (23, &[25, 27, 29, 32, 33]),
    (24, &[25, 27, 31]),
    (25, &[31]),
    (26, &[29, 33]),
    (27, &[33]),
    (28, &[31, 33]),
    (29, &[32, 33]),
    (30, &[32, 33]),
    (31, &[32, 33]),
    (32, &[33]),
];

/// Builds the 34-member, 78-tie karate club graph.
///
/// # Examples
/// ```
/// use netlab_core::datasets::karate_club;
///
/// let graph = karate_club();
/// assert_eq!(graph.node_count(), 34);
/// assert_eq!(graph.edge_count(), 78);
/// ```
#[must_use]
pub fn karate_club() -> Graph {
    let mut graph = Graph::with_nodes(GraphKind::Simple, KARATE_NODES);
    for &(member, peers) in ADJACENCY {
        for &peer in peers {
            graph.add_edge(member, peer);
        }
    }
    graph
}
