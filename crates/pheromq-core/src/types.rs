//! Shared types used across all PheroMQ crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant in the hive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier for a node in the grid topology.
///
/// Opaque to the core — the reference topologies use small consecutive
/// integers, but nothing here depends on that.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct NodeId(pub u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of a signal in the pheromone field.
///
/// Kinds are independent channels on the same field: entries of different
/// kinds never interact during evaporation or diffusion.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SignalKind {
    /// Demand-response pressure (attracts kW offers).
    DemandResponse,
    /// Custom signal kind for domain-specific use.
    Custom(String),
}

/// One stored cell of a field snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldCell {
    pub node: NodeId,
    pub kind: SignalKind,
    pub intensity: f64,
}

/// An immutable snapshot of one simulation round.
///
/// Captured once per round before the field evolves. The field copy is
/// independent of the live field — later mutation never reaches back
/// into history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round index, starting at 0.
    pub round: Tick,
    /// Sum of all participant offers this round.
    pub total_offer_kw: f64,
    /// Per-participant offers, in participant collection order.
    pub offers_kw: Vec<f64>,
    /// Field state at the start of the round, sorted by (node, kind).
    pub field: Vec<FieldCell>,
}

impl RoundRecord {
    /// Look up the snapshotted intensity at a (node, kind), 0.0 if absent.
    pub fn intensity(&self, node: NodeId, kind: &SignalKind) -> f64 {
        self.field
            .iter()
            .find(|cell| cell.node == node && cell.kind == *kind)
            .map(|cell| cell.intensity)
            .unwrap_or(0.0)
    }
}

/// The current round of the simulation.
pub type Tick = u64;
