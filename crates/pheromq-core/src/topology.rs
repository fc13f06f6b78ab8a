//! Topology — the adjacency seam between the field and the grid graph.
//!
//! The core never constructs graphs. Diffusion only needs to know, for a
//! given node, which nodes receive a share of its intensity. This is a
//! trait rather than a concrete type so that different backends (petgraph,
//! adjacency lists, generated grids) can supply the structure.

use crate::types::NodeId;

/// An immutable adjacency relation over a finite set of nodes.
///
/// Implementations must return neighbors in a deterministic order that is
/// stable across calls — diffusion results must be reproducible. Cycles
/// are expected; self-loops are not expected but not forbidden.
pub trait Topology {
    /// Neighbors of a node, in deterministic order. Empty for isolated
    /// or unknown nodes.
    fn neighbors(&self, node: NodeId) -> &[NodeId];

    /// All node IDs, in deterministic order.
    fn nodes(&self) -> Vec<NodeId>;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Whether the topology contains a node.
    fn contains(&self, node: NodeId) -> bool;
}
