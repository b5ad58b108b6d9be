//! Undirected graph container returned by every catalogue producer.
//!
//! [`Graph`] wraps a `petgraph` undirected graph whose node indices are dense
//! (`0..node_count`). A graph is either simple, where adding an existing edge
//! is a no-op, or a multigraph that keeps parallel edges. Nodes optionally
//! carry the label they had in the source file and a 2D position.

mod components;

use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};

/// Whether a [`Graph`] keeps parallel edges.
///
/// # Examples
/// ```
/// use netlab_core::{Graph, GraphKind};
///
/// let mut multi = Graph::new(GraphKind::Multi);
/// multi.add_edge(0, 1);
/// multi.add_edge(0, 1);
/// assert_eq!(multi.edge_count(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// At most one edge per unordered node pair.
    Simple,
    /// Parallel edges are kept.
    Multi,
}

/// A 2D node position, as recorded by the water-network dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// Per-node payload stored in the underlying `petgraph` graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    label: Option<String>,
    position: Option<Position>,
}

impl Node {
    /// Returns the label the node carried in its source file, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the node position, if one was recorded.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        self.position
    }
}

/// An undirected graph with dense integer node identifiers.
///
/// # Examples
/// ```
/// use netlab_core::{Graph, GraphKind};
///
/// let graph = Graph::from_edges(GraphKind::Simple, &[(0, 1), (1, 2), (2, 3)]);
/// assert_eq!(graph.node_count(), 4);
/// assert_eq!(graph.edge_count(), 3);
/// assert!(graph.has_edge(2, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    inner: UnGraph<Node, ()>,
    kind: GraphKind,
}

impl Graph {
    /// Creates an empty graph of the given kind.
    #[must_use]
    pub fn new(kind: GraphKind) -> Self {
        Self {
            inner: UnGraph::default(),
            kind,
        }
    }

    /// Creates a graph with `node_count` unlabelled, isolated nodes.
    ///
    /// # Examples
    /// ```
    /// use netlab_core::{Graph, GraphKind};
    ///
    /// let graph = Graph::with_nodes(GraphKind::Simple, 4);
    /// assert_eq!(graph.node_count(), 4);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    #[must_use]
    pub fn with_nodes(kind: GraphKind, node_count: usize) -> Self {
        let mut graph = Self {
            inner: UnGraph::with_capacity(node_count, 0),
            kind,
        };
        graph.ensure_node(node_count);
        graph
    }

    /// Builds a graph from an edge list, creating nodes as needed.
    #[must_use]
    pub fn from_edges(kind: GraphKind, edges: &[(usize, usize)]) -> Self {
        let mut graph = Self::new(kind);
        for &(left, right) in edges {
            graph.add_edge(left, right);
        }
        graph
    }

    /// Appends an unlabelled node and returns its identifier.
    pub fn add_node(&mut self) -> usize {
        self.inner.add_node(Node::default()).index()
    }

    /// Appends a node carrying `label` and returns its identifier.
    pub fn add_labelled_node(&mut self, label: impl Into<String>) -> usize {
        self.inner
            .add_node(Node {
                label: Some(label.into()),
                position: None,
            })
            .index()
    }

    /// Adds the undirected edge `left`-`right`, creating missing nodes.
    ///
    /// Returns `false` when the graph is simple and the edge already existed.
    pub fn add_edge(&mut self, left: usize, right: usize) -> bool {
        self.ensure_node(left.max(right).saturating_add(1));
        let (a, b) = (NodeIndex::new(left), NodeIndex::new(right));
        if self.kind == GraphKind::Simple && self.inner.find_edge(a, b).is_some() {
            return false;
        }
        self.inner.add_edge(a, b, ());
        true
    }

    /// Records a position for `node`. Returns `false` if the node is unknown.
    pub fn set_position(&mut self, node: usize, position: Position) -> bool {
        match self.inner.node_weight_mut(NodeIndex::new(node)) {
            Some(weight) => {
                weight.position = Some(position);
                true
            }
            None => false,
        }
    }

    fn ensure_node(&mut self, node_count: usize) {
        while self.inner.node_count() < node_count {
            self.inner.add_node(Node::default());
        }
    }

    /// Returns the graph kind.
    #[must_use]
    pub const fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns whether parallel edges are kept.
    #[must_use]
    pub fn is_multigraph(&self) -> bool {
        self.kind == GraphKind::Multi
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    /// Returns the number of edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Returns whether at least one edge joins `left` and `right`.
    #[must_use]
    pub fn has_edge(&self, left: usize, right: usize) -> bool {
        if left >= self.node_count() || right >= self.node_count() {
            return false;
        }
        self.inner
            .find_edge(NodeIndex::new(left), NodeIndex::new(right))
            .is_some()
    }

    /// Iterates over edges in insertion order as `(source, target)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.inner
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index()))
    }

    /// Returns the distinct neighbours of `node` in ascending order.
    #[must_use]
    pub fn neighbors(&self, node: usize) -> Vec<usize> {
        if node >= self.node_count() {
            return Vec::new();
        }
        let mut neighbours: Vec<usize> = self
            .inner
            .neighbors(NodeIndex::new(node))
            .map(NodeIndex::index)
            .collect();
        neighbours.sort_unstable();
        neighbours.dedup();
        neighbours
    }

    /// Returns the degree of `node`; a self-loop contributes two.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        if node >= self.node_count() {
            return 0;
        }
        self.inner
            .edges(NodeIndex::new(node))
            .map(|edge| if edge.source() == edge.target() { 2 } else { 1 })
            .sum()
    }

    /// Returns the node payload, if `node` exists.
    #[must_use]
    pub fn node(&self, node: usize) -> Option<&Node> {
        self.inner.node_weight(NodeIndex::new(node))
    }

    /// Returns the label of `node`, if it has one.
    #[must_use]
    pub fn label(&self, node: usize) -> Option<&str> {
        self.node(node).and_then(Node::label)
    }

    /// Returns the position of `node`, if one was recorded.
    #[must_use]
    pub fn position(&self, node: usize) -> Option<Position> {
        self.node(node).and_then(Node::position)
    }

    /// Drops every node label, keeping positions and structure.
    #[must_use]
    pub fn without_labels(mut self) -> Self {
        for weight in self.inner.node_weights_mut() {
            weight.label = None;
        }
        self
    }

    /// Returns normalised `(min, max)` edge pairs sorted ascending.
    ///
    /// Two graphs with equal kinds, node counts and canonical edge lists are
    /// structurally identical.
    #[must_use]
    pub fn canonical_edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .edges()
            .map(|(left, right)| (left.min(right), left.max(right)))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Returns whether `other` has the same kind, nodes and edges.
    #[must_use]
    pub fn same_structure(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.node_count() == other.node_count()
            && self.canonical_edges() == other.canonical_edges()
    }

    /// Borrows the underlying `petgraph` graph for use with its algorithms.
    #[must_use]
    pub const fn as_petgraph(&self) -> &UnGraph<Node, ()> {
        &self.inner
    }
}
