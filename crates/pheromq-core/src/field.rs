//! SignalField — the decaying, diffusing pheromone field.
//!
//! The field is the stigmergic medium: a sparse map from `(node, kind)`
//! to a non-negative intensity. Each `step` advances it one discrete
//! time unit in two strictly ordered phases — evaporation, then
//! diffusion. Entries that evaporate to the prune threshold or below
//! are removed, which keeps the map bounded over time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PheromqError, Result};
use crate::topology::Topology;
use crate::types::{FieldCell, NodeId, SignalKind};

/// Entries at or below this intensity are removed during evaporation.
pub const PRUNE_THRESHOLD: f64 = 1e-4;

/// Field dynamics parameters, validated once at field construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Multiplicative decay per step. Must be in (0, 1) exclusive.
    pub evap: f64,
    /// Fraction of each entry diffused to its neighbors per step.
    /// Must be in [0, 1].
    pub diff: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            evap: 0.82,
            diff: 0.35,
        }
    }
}

impl FieldConfig {
    /// Check both parameters against their documented ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.evap > 0.0 && self.evap < 1.0) {
            return Err(PheromqError::out_of_range("evap", 0.0, 1.0, self.evap));
        }
        if !(0.0..=1.0).contains(&self.diff) {
            return Err(PheromqError::out_of_range("diff", 0.0, 1.0, self.diff));
        }
        Ok(())
    }
}

/// Sparse pheromone field over a fixed topology.
///
/// The field owns all intensity values. It is mutated only through
/// [`SignalField::set`] (external seeding) and [`SignalField::step`]
/// (evaporate-then-diffuse). A sorted map keeps iteration — and thus
/// the order of floating-point accumulation — deterministic across runs.
#[derive(Debug, Clone)]
pub struct SignalField {
    cells: BTreeMap<(NodeId, SignalKind), f64>,
    evap: f64,
    diff: f64,
}

impl SignalField {
    /// Create an empty field with validated dynamics parameters.
    pub fn new(config: FieldConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            cells: BTreeMap::new(),
            evap: config.evap,
            diff: config.diff,
        })
    }

    /// The configuration this field was built with.
    pub fn config(&self) -> FieldConfig {
        FieldConfig {
            evap: self.evap,
            diff: self.diff,
        }
    }

    /// Stored intensity at `(node, kind)`, or 0.0 when absent.
    pub fn get(&self, node: NodeId, kind: &SignalKind) -> f64 {
        self.cells
            .get(&(node, kind.clone()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Insert or overwrite an entry. Used for external seeding only;
    /// negative intensities are rejected.
    pub fn set(&mut self, node: NodeId, kind: SignalKind, intensity: f64) -> Result<()> {
        if intensity < 0.0 {
            return Err(PheromqError::negative_intensity(intensity));
        }
        self.cells.insert((node, kind), intensity);
        Ok(())
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the field holds no entries.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Sum of all stored intensities, across every kind.
    pub fn total_mass(&self) -> f64 {
        self.cells.values().sum()
    }

    /// Independent copy of the field state, sorted by (node, kind).
    pub fn snapshot(&self) -> Vec<FieldCell> {
        self.cells
            .iter()
            .map(|((node, kind), intensity)| FieldCell {
                node: *node,
                kind: kind.clone(),
                intensity: *intensity,
            })
            .collect()
    }

    /// Advance the field by exactly one discrete time unit.
    ///
    /// Phase 1 (evaporation): every entry is multiplied by `evap`;
    /// entries at or below [`PRUNE_THRESHOLD`] are removed.
    ///
    /// Phase 2 (diffusion): every surviving entry with at least one
    /// neighbor adds `diff * intensity / |neighbors|` to each neighbor's
    /// same-kind entry. All increments are computed from the
    /// post-evaporation state and applied together afterwards, so no
    /// increment ever reads another increment from the same step.
    /// The source entry is not reduced by what it diffuses out — total
    /// mass can grow when evaporation does not offset diffusion, which
    /// is the reference behavior of this model.
    pub fn step(&mut self, topology: &dyn Topology) {
        // Evaporation
        for intensity in self.cells.values_mut() {
            *intensity *= self.evap;
        }
        self.cells.retain(|_, intensity| *intensity > PRUNE_THRESHOLD);

        // Diffusion
        let mut increments: BTreeMap<(NodeId, SignalKind), f64> = BTreeMap::new();
        for ((node, kind), intensity) in &self.cells {
            let neighbors = topology.neighbors(*node);
            if neighbors.is_empty() {
                continue;
            }
            let share = (self.diff * intensity) / neighbors.len() as f64;
            for neighbor in neighbors {
                *increments.entry((*neighbor, kind.clone())).or_insert(0.0) += share;
            }
        }
        for (key, increment) in increments {
            *self.cells.entry(key).or_insert(0.0) += increment;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Minimal adjacency-list topology for exercising the field.
    struct Adjacency {
        edges: BTreeMap<NodeId, Vec<NodeId>>,
    }

    impl Adjacency {
        fn new(pairs: &[(u32, &[u32])]) -> Self {
            let edges = pairs
                .iter()
                .map(|(node, neighbors)| {
                    (
                        NodeId(*node),
                        neighbors.iter().map(|n| NodeId(*n)).collect(),
                    )
                })
                .collect();
            Self { edges }
        }

        fn isolated(nodes: &[u32]) -> Self {
            Self {
                edges: nodes.iter().map(|n| (NodeId(*n), Vec::new())).collect(),
            }
        }
    }

    impl Topology for Adjacency {
        fn neighbors(&self, node: NodeId) -> &[NodeId] {
            self.edges.get(&node).map(|v| v.as_slice()).unwrap_or(&[])
        }

        fn nodes(&self) -> Vec<NodeId> {
            self.edges.keys().copied().collect()
        }

        fn node_count(&self) -> usize {
            self.edges.len()
        }

        fn contains(&self, node: NodeId) -> bool {
            self.edges.contains_key(&node)
        }
    }

    fn dr() -> SignalKind {
        SignalKind::DemandResponse
    }

    fn field(evap: f64, diff: f64) -> SignalField {
        SignalField::new(FieldConfig { evap, diff }).unwrap()
    }

    #[test]
    fn config_rejects_out_of_range_parameters() {
        assert!(SignalField::new(FieldConfig { evap: 0.0, diff: 0.5 }).is_err());
        assert!(SignalField::new(FieldConfig { evap: 1.0, diff: 0.5 }).is_err());
        assert!(SignalField::new(FieldConfig { evap: 0.5, diff: -0.1 }).is_err());
        assert!(SignalField::new(FieldConfig { evap: 0.5, diff: 1.1 }).is_err());
        // diff boundaries are inclusive
        assert!(SignalField::new(FieldConfig { evap: 0.5, diff: 0.0 }).is_ok());
        assert!(SignalField::new(FieldConfig { evap: 0.5, diff: 1.0 }).is_ok());
    }

    #[test]
    fn set_rejects_negative_intensity() {
        let mut f = field(0.82, 0.35);
        assert!(f.set(NodeId(0), dr(), -0.5).is_err());
        assert!(f.set(NodeId(0), dr(), 0.0).is_ok());
    }

    #[test]
    fn get_is_idempotent_and_defaults_to_zero() {
        let mut f = field(0.82, 0.35);
        assert_eq!(f.get(NodeId(3), &dr()), 0.0);
        f.set(NodeId(3), dr(), 0.7).unwrap();
        assert_eq!(f.get(NodeId(3), &dr()), 0.7);
        assert_eq!(f.get(NodeId(3), &dr()), 0.7);
    }

    #[test]
    fn evaporation_scales_every_entry_without_adding_keys() {
        let topo = Adjacency::isolated(&[0, 1, 2]);
        let mut f = field(0.5, 0.0);
        f.set(NodeId(0), dr(), 1.0).unwrap();
        f.set(NodeId(1), dr(), 0.4).unwrap();
        f.set(NodeId(2), dr(), 0.01).unwrap();

        f.step(&topo);

        assert_eq!(f.len(), 3);
        assert!((f.get(NodeId(0), &dr()) - 0.5).abs() < 1e-12);
        assert!((f.get(NodeId(1), &dr()) - 0.2).abs() < 1e-12);
        assert!((f.get(NodeId(2), &dr()) - 0.005).abs() < 1e-12);
    }

    #[test]
    fn evaporation_prunes_entries_at_or_below_threshold() {
        let topo = Adjacency::isolated(&[0, 1]);
        let mut f = field(0.5, 0.0);
        f.set(NodeId(0), dr(), 2e-4).unwrap(); // evaporates to exactly 1e-4
        f.set(NodeId(1), dr(), 1.0).unwrap();

        f.step(&topo);

        assert_eq!(f.len(), 1);
        assert_eq!(f.get(NodeId(0), &dr()), 0.0);
    }

    #[test]
    fn isolated_node_keeps_its_evaporated_intensity() {
        // Reference scenario: evap 0.82, diff 0.35, no neighbors.
        let topo = Adjacency::isolated(&[0]);
        let mut f = field(0.82, 0.35);
        f.set(NodeId(0), dr(), 1.0).unwrap();

        f.step(&topo);

        assert!((f.get(NodeId(0), &dr()) - 0.82).abs() < 1e-9);
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn diffusion_splits_share_evenly_among_neighbors() {
        let topo = Adjacency::new(&[(0, &[1, 2]), (1, &[0]), (2, &[0])]);
        let mut f = field(0.82, 0.35);
        f.set(NodeId(0), dr(), 1.0).unwrap();

        f.step(&topo);

        // Source evaporates to 0.82; each neighbor gets 0.35 * 0.82 / 2.
        let share = 0.35 * 0.82 / 2.0;
        assert!((f.get(NodeId(0), &dr()) - 0.82).abs() < 1e-12);
        assert!((f.get(NodeId(1), &dr()) - share).abs() < 1e-12);
        assert!((f.get(NodeId(2), &dr()) - share).abs() < 1e-12);
    }

    #[test]
    fn diffusion_increments_come_from_the_pre_diffusion_state() {
        // Two adjacent seeded nodes: each must receive exactly the other's
        // post-evaporation share, not a share of a same-step increment.
        let topo = Adjacency::new(&[(0, &[1]), (1, &[0])]);
        let mut f = field(0.5, 0.5);
        f.set(NodeId(0), dr(), 1.0).unwrap();
        f.set(NodeId(1), dr(), 1.0).unwrap();

        f.step(&topo);

        // Each: 0.5 evaporated + 0.5 * 0.5 from the other.
        assert!((f.get(NodeId(0), &dr()) - 0.75).abs() < 1e-12);
        assert!((f.get(NodeId(1), &dr()) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn diffusion_never_produces_negative_intensities() {
        let topo = Adjacency::new(&[(0, &[1, 2]), (1, &[0, 2]), (2, &[0, 1])]);
        let mut f = field(0.9, 1.0);
        f.set(NodeId(0), dr(), 1.0).unwrap();
        f.set(NodeId(1), dr(), 0.3).unwrap();

        for _ in 0..50 {
            f.step(&topo);
            for cell in f.snapshot() {
                assert!(cell.intensity >= 0.0);
            }
        }
    }

    #[test]
    fn kinds_do_not_interact_during_step() {
        let topo = Adjacency::new(&[(0, &[1]), (1, &[0])]);
        let custom = SignalKind::Custom("voltage".to_string());
        let mut f = field(0.5, 1.0);
        f.set(NodeId(0), dr(), 1.0).unwrap();
        f.set(NodeId(0), custom.clone(), 1.0).unwrap();

        f.step(&topo);

        // Node 1 receives each kind's share separately.
        assert!((f.get(NodeId(1), &dr()) - 0.5).abs() < 1e-12);
        assert!((f.get(NodeId(1), &custom) - 0.5).abs() < 1e-12);
        assert_eq!(f.len(), 4);
    }

    #[test]
    fn mass_grows_when_evaporation_is_weak() {
        // Diffusion adds to neighbors without debiting the source, so with
        // evap near 1 total mass visibly increases. Reference behavior —
        // pinned here so a future "fix" fails loudly.
        let topo = Adjacency::new(&[(0, &[1]), (1, &[0])]);
        let mut f = field(0.99, 0.5);
        f.set(NodeId(0), dr(), 1.0).unwrap();
        let before = f.total_mass();

        for _ in 0..10 {
            f.step(&topo);
        }

        assert!(f.total_mass() > before);
    }

    #[test]
    fn snapshot_is_independent_of_later_steps() {
        let topo = Adjacency::new(&[(0, &[1]), (1, &[0])]);
        let mut f = field(0.5, 0.5);
        f.set(NodeId(0), dr(), 1.0).unwrap();

        let snap = f.snapshot();
        f.step(&topo);
        f.step(&topo);

        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].intensity, 1.0);
    }
}
