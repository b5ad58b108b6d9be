//! Connected-component queries over [`Graph`].
//!
//! Components are tracked with a union-find over the dense node ids; the
//! dataset loaders use [`Graph::largest_component`] to drop everything but the
//! giant component, and the Watts-Strogatz generator retries until
//! [`Graph::is_connected`] holds.

use petgraph::{graph::NodeIndex, unionfind::UnionFind};

use super::{Graph, Node};

/// Component membership for every node, numbered in order of first appearance.
struct Components {
    membership: Vec<usize>,
    sizes: Vec<usize>,
}

impl Components {
    fn of(graph: &Graph) -> Self {
        let node_count = graph.node_count();
        let mut set = UnionFind::<usize>::new(node_count);
        for (left, right) in graph.edges() {
            set.union(left, right);
        }

        let mut component_of_root = vec![usize::MAX; node_count];
        let mut membership = Vec::with_capacity(node_count);
        let mut sizes = Vec::new();
        for root in set.into_labeling() {
            if component_of_root[root] == usize::MAX {
                component_of_root[root] = sizes.len();
                sizes.push(0);
            }
            let component = component_of_root[root];
            sizes[component] += 1;
            membership.push(component);
        }
        Self { membership, sizes }
    }

    /// Index of the largest component; the earliest one wins ties.
    fn largest(&self) -> Option<usize> {
        let mut best: Option<(usize, usize)> = None;
        for (component, &size) in self.sizes.iter().enumerate() {
            if best.is_none_or(|(_, best_size)| size > best_size) {
                best = Some((component, size));
            }
        }
        best.map(|(component, _)| component)
    }
}

impl Graph {
    /// Returns the number of connected components.
    ///
    /// # Examples
    /// ```
    /// use netlab_core::{Graph, GraphKind};
    ///
    /// let graph = Graph::from_edges(GraphKind::Simple, &[(0, 1), (2, 3)]);
    /// assert_eq!(graph.component_count(), 2);
    /// ```
    #[must_use]
    pub fn component_count(&self) -> usize {
        Components::of(self).sizes.len()
    }

    /// Returns whether the graph is non-empty and has a single component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.component_count() == 1
    }

    /// Returns the subgraph induced by the largest connected component.
    ///
    /// Surviving nodes keep their relative order, labels and positions and are
    /// renumbered densely. When several components share the maximum size the
    /// one containing the lowest node id is kept. Returns `None` for a graph
    /// without nodes.
    ///
    /// # Examples
    /// ```
    /// use netlab_core::{Graph, GraphKind};
    ///
    /// let graph = Graph::from_edges(GraphKind::Simple, &[(0, 1), (2, 3), (3, 4)]);
    /// let giant = graph.largest_component().expect("graph has nodes");
    /// assert_eq!(giant.node_count(), 3);
    /// assert_eq!(giant.canonical_edges(), vec![(0, 1), (1, 2)]);
    /// ```
    #[must_use]
    pub fn largest_component(&self) -> Option<Self> {
        let components = Components::of(self);
        let keep = components.largest()?;

        let mut renumbered = vec![None; self.node_count()];
        let mut subgraph = Self::new(self.kind);
        for (node, &component) in components.membership.iter().enumerate() {
            if component != keep {
                continue;
            }
            let payload = self.node(node).cloned().unwrap_or_default();
            renumbered[node] = Some(subgraph.push_node(payload));
        }
        for (left, right) in self.edges() {
            if let (Some(a), Some(b)) = (renumbered[left], renumbered[right]) {
                subgraph.push_edge(a, b);
            }
        }
        Some(subgraph)
    }

    fn push_node(&mut self, payload: Node) -> usize {
        self.inner.add_node(payload).index()
    }

    fn push_edge(&mut self, left: usize, right: usize) {
        self.inner
            .add_edge(NodeIndex::new(left), NodeIndex::new(right), ());
    }
}
