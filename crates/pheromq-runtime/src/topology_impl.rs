//! Concrete implementation of the Topology trait using petgraph.
//!
//! The grid graph is immutable once built. Petgraph's undirected `Graph`
//! is the backing store; a sorted adjacency cache per node gives the
//! deterministic `&[NodeId]` neighbor slices the diffusion step requires.

use std::collections::{BTreeMap, HashMap};

use petgraph::graph::{Graph, NodeIndex};
use pheromq_core::topology::Topology;
use pheromq_core::types::NodeId;

/// Petgraph-backed grid topology with deterministic neighbor order.
pub struct PetTopology {
    graph: Graph<NodeId, (), petgraph::Undirected>,
    /// Map from our NodeId to petgraph's internal index.
    node_index: HashMap<NodeId, NodeIndex>,
    /// Sorted neighbor lists, kept in sync with the graph.
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl PetTopology {
    pub fn new() -> Self {
        Self {
            graph: Graph::new_undirected(),
            node_index: HashMap::new(),
            adjacency: BTreeMap::new(),
        }
    }

    /// Add a node. Adding the same node twice is a no-op.
    pub fn add_node(&mut self, node: NodeId) {
        if self.node_index.contains_key(&node) {
            return;
        }
        let idx = self.graph.add_node(node);
        self.node_index.insert(node, idx);
        self.adjacency.insert(node, Vec::new());
    }

    /// Add an undirected edge, creating endpoints as needed.
    /// Duplicate edges are ignored.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.add_node(a);
        self.add_node(b);
        let a_idx = self.node_index[&a];
        let b_idx = self.node_index[&b];
        if self.graph.find_edge(a_idx, b_idx).is_some() {
            return;
        }
        self.graph.add_edge(a_idx, b_idx, ());
        Self::insert_sorted(self.adjacency.entry(a).or_default(), b);
        if a != b {
            Self::insert_sorted(self.adjacency.entry(b).or_default(), a);
        }
    }

    fn insert_sorted(neighbors: &mut Vec<NodeId>, node: NodeId) {
        if let Err(pos) = neighbors.binary_search(&node) {
            neighbors.insert(pos, node);
        }
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The reference honeycomb topology: center node 0 connected to a
    /// six-node ring (1-6) with cyclic ring adjacency.
    pub fn honeycomb7() -> Self {
        let mut topo = Self::new();
        for i in 1..7 {
            topo.add_edge(NodeId(0), NodeId(i));
        }
        for i in 1..7u32 {
            let next = if i == 6 { 1 } else { i + 1 };
            topo.add_edge(NodeId(i), NodeId(next));
        }
        topo
    }

    /// A cyclic ring of `n` nodes (0 .. n-1).
    pub fn ring(n: u32) -> Self {
        let mut topo = Self::new();
        if n == 0 {
            return topo;
        }
        if n == 1 {
            topo.add_node(NodeId(0));
            return topo;
        }
        for i in 0..n {
            topo.add_edge(NodeId(i), NodeId((i + 1) % n));
        }
        topo
    }

    /// A path of `n` nodes (0 .. n-1) with no wrap-around.
    pub fn line(n: u32) -> Self {
        let mut topo = Self::new();
        if n == 0 {
            return topo;
        }
        topo.add_node(NodeId(0));
        for i in 1..n {
            topo.add_edge(NodeId(i - 1), NodeId(i));
        }
        topo
    }
}

impl Default for PetTopology {
    fn default() -> Self {
        Self::new()
    }
}

impl Topology for PetTopology {
    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        self.adjacency
            .get(&node)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    fn nodes(&self) -> Vec<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn contains(&self, node: NodeId) -> bool {
        self.node_index.contains_key(&node)
    }
}
