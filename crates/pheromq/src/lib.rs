//! # PheroMQ
//!
//! Stigmergic demand-response simulation over pheromone fields.
//!
//! A decaying, diffusing scalar signal on a fixed grid graph carries an
//! implicit global demand signal. Participants bound to graph nodes
//! sense only the local intensity and offer bounded kW contributions;
//! the field's own physics (evaporation and neighbor diffusion) does the
//! coordination — no central dispatcher, no messaging between
//! participants.
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use pheromq::prelude::*;
//!
//! // The reference honeycomb grid with one participant per node.
//! let topology = PetTopology::honeycomb7();
//! let field = SignalField::new(FieldConfig::default()).unwrap();
//!
//! let mut rng = SmallRng::seed_from_u64(42);
//! let participants =
//!     spawn_participants(&topology, &CapacityProfile::default(), &mut rng).unwrap();
//!
//! let mut hive = Hive::new(topology, field);
//! hive.spawn_all(participants);
//! hive.seed(NodeId(0), SignalKind::DemandResponse, 1.0).unwrap();
//!
//! // Run until 20 kW is offered or 20 rounds elapse.
//! let outcome = hive.run(20, 20.0).unwrap();
//! println!("{:?}", outcome);
//! ```
//!
//! ## Architecture
//!
//! - [`pheromq_core`] — field dynamics, participant perception, the
//!   `Topology` trait, shared types and errors
//! - [`pheromq_runtime`] — the hive round loop, petgraph-backed grids,
//!   spawning, run-report export
//! - [`pheromq_viz`] — ASCII rendering of round records

// Re-export all subcrates
pub use pheromq_core as core;
pub use pheromq_runtime as runtime;
pub use pheromq_viz as viz;

/// Prelude module for convenient imports.
///
/// ```rust
/// use pheromq::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use pheromq_core::types::{
        FieldCell, NodeId, ParticipantId, RoundRecord, SignalKind, Tick,
    };

    // Field and participant
    pub use pheromq_core::field::{FieldConfig, SignalField, PRUNE_THRESHOLD};
    pub use pheromq_core::participant::{Participant, STEEPNESS};

    // The topology seam
    pub use pheromq_core::topology::Topology;

    // Error types
    pub use pheromq_core::error::{PheromqError, Result};

    // Runtime
    pub use pheromq_runtime::export::{report_to_json, write_report, RunReport};
    pub use pheromq_runtime::hive::{Hive, HiveStats, RunOutcome};
    pub use pheromq_runtime::spawn::{spawn_participants, CapacityProfile};
    pub use pheromq_runtime::topology_impl::PetTopology;

    // Rendering
    pub use pheromq_viz::{render_round, render_totals};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
