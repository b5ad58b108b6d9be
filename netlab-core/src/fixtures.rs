//! Small hand-built graphs used as test cases.

use crate::{Graph, GraphKind};

/// A hardcoded toy graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// Catalogue key.
    pub key: &'static str,
    /// Node count; nodes without edges stay isolated.
    pub nodes: usize,
    /// Whether parallel edges are kept.
    pub kind: GraphKind,
    /// Edge list in insertion order.
    pub edges: &'static [(usize, usize)],
}

impl Fixture {
    /// Builds a fresh graph for this fixture.
    ///
    /// # Examples
    /// ```
    /// use netlab_core::fixtures::find_fixture;
    ///
    /// let path = find_fixture("p4").expect("p4 is registered").build();
    /// assert_eq!(path.node_count(), 4);
    /// assert_eq!(path.edge_count(), 3);
    /// ```
    #[must_use]
    pub fn build(&self) -> Graph {
        let mut graph = Graph::with_nodes(self.kind, self.nodes);
        for &(left, right) in self.edges {
            graph.add_edge(left, right);
        }
        graph
    }
}

const CYCLE: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 3), (2, 3)];

const TWO_CYCLES: &[(usize, usize)] = &[
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 3),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
];

const ONE_BRIDGE: &[(usize, usize)] = &[
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 3),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (2, 4),
];

const TWO_BRIDGES: &[(usize, usize)] = &[
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 3),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (2, 4),
    (2, 4),
];

const THREE_BRIDGES: &[(usize, usize)] = &[
    (0, 1),
    (0, 2),
    (1, 3),
    (2, 3),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (2, 4),
    (2, 4),
    (2, 4),
];

const fn simple(key: &'static str, nodes: usize, edges: &'static [(usize, usize)]) -> Fixture {
    Fixture {
        key,
        nodes,
        kind: GraphKind::Simple,
        edges,
    }
}

const fn multi(key: &'static str, nodes: usize, edges: &'static [(usize, usize)]) -> Fixture {
    Fixture {
        key,
        nodes,
        kind: GraphKind::Multi,
        edges,
    }
}

/// Every registered fixture, in listing order.
pub const FIXTURES: &[Fixture] = &[
    simple("o4", 4, &[]),
    simple("p4", 4, &[(0, 1), (1, 2), (2, 3)]),
    simple("s4", 4, &[(0, 1), (1, 2), (1, 3)]),
    simple("c4", 4, CYCLE),
    simple("k4-1", 4, &[(0, 1), (0, 2), (0, 3), (1, 3), (2, 3)]),
    simple("k4-2", 4, &[(0, 1), (0, 2), (0, 3), (1, 3), (1, 2), (2, 3)]),
    simple("c4_no_bridge", 8, TWO_CYCLES),
    simple("c4_1_bridge", 8, ONE_BRIDGE),
    multi("c4_2_bridge", 8, TWO_BRIDGES),
    multi("c4_3_bridge", 8, THREE_BRIDGES),
];

/// Looks up a fixture by catalogue key.
#[must_use]
pub fn find_fixture(key: &str) -> Option<&'static Fixture> {
    FIXTURES.iter().find(|fixture| fixture.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn build(key: &str) -> Graph {
        find_fixture(key)
            .unwrap_or_else(|| panic!("{key} must be registered"))
            .build()
    }

    #[rstest]
    #[case::isolated("o4", 4, 0, 4)]
    #[case::path("p4", 4, 3, 1)]
    #[case::star("s4", 4, 3, 1)]
    #[case::cycle("c4", 4, 4, 1)]
    #[case::near_complete("k4-1", 4, 5, 1)]
    #[case::complete("k4-2", 4, 6, 1)]
    #[case::disjoint_cycles("c4_no_bridge", 8, 8, 2)]
    #[case::single_bridge("c4_1_bridge", 8, 9, 1)]
    #[case::double_bridge("c4_2_bridge", 8, 10, 1)]
    #[case::triple_bridge("c4_3_bridge", 8, 11, 1)]
    fn fixtures_have_expected_shape(
        #[case] key: &str,
        #[case] nodes: usize,
        #[case] edges: usize,
        #[case] components: usize,
    ) {
        let graph = build(key);
        assert_eq!(graph.node_count(), nodes);
        assert_eq!(graph.edge_count(), edges);
        assert_eq!(graph.component_count(), components);
    }

    #[rstest]
    fn path_visits_nodes_in_order() {
        let graph = build("p4");
        assert_eq!(graph.canonical_edges(), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(3), 1);
    }

    #[rstest]
    #[case::double("c4_2_bridge", 2)]
    #[case::triple("c4_3_bridge", 3)]
    fn bridge_multigraphs_keep_parallel_edges(#[case] key: &str, #[case] parallel: usize) {
        let graph = build(key);
        assert!(graph.is_multigraph());
        let bridges = graph
            .edges()
            .filter(|&(left, right)| (left.min(right), left.max(right)) == (2, 4))
            .count();
        assert_eq!(bridges, parallel);
    }

    #[rstest]
    fn star_is_centred_on_node_one() {
        let graph = build("s4");
        assert_eq!(graph.degree(1), 3);
        assert_eq!(graph.neighbors(1), vec![0, 2, 3]);
    }

    #[rstest]
    fn each_build_is_independent() {
        let mut first = build("c4");
        first.add_edge(0, 3);
        assert_eq!(build("c4").edge_count(), 4);
    }
}
