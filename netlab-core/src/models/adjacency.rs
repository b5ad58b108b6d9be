//! Mutable adjacency sets used while a model is being generated.
//!
//! Rewiring needs cheap edge removal and membership tests, which the final
//! [`Graph`] does not offer; generators build here and convert once.

use std::collections::BTreeSet;

use crate::{Graph, GraphKind};

pub(super) struct Adjacency {
    neighbours: Vec<BTreeSet<usize>>,
}

impl Adjacency {
    pub(super) fn new(node_count: usize) -> Self {
        Self {
            neighbours: vec![BTreeSet::new(); node_count],
        }
    }

    pub(super) fn complete(node_count: usize) -> Self {
        let mut adjacency = Self::new(node_count);
        for left in 0..node_count {
            for right in (left + 1)..node_count {
                adjacency.add_edge(left, right);
            }
        }
        adjacency
    }

    pub(super) fn node_count(&self) -> usize {
        self.neighbours.len()
    }

    pub(super) fn add_edge(&mut self, left: usize, right: usize) {
        self.neighbours[left].insert(right);
        self.neighbours[right].insert(left);
    }

    pub(super) fn remove_edge(&mut self, left: usize, right: usize) {
        self.neighbours[left].remove(&right);
        self.neighbours[right].remove(&left);
    }

    pub(super) fn has_edge(&self, left: usize, right: usize) -> bool {
        self.neighbours[left].contains(&right)
    }

    pub(super) fn degree(&self, node: usize) -> usize {
        self.neighbours[node].len()
    }

    pub(super) fn neighbours(&self, node: usize) -> &BTreeSet<usize> {
        &self.neighbours[node]
    }

    pub(super) fn into_graph(self) -> Graph {
        let mut graph = Graph::with_nodes(GraphKind::Simple, self.neighbours.len());
        for (left, neighbours) in self.neighbours.iter().enumerate() {
            for &right in neighbours.range(left..) {
                graph.add_edge(left, right);
            }
        }
        graph
    }
}
