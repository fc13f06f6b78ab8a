//! # PheroMQ Core
//!
//! Core traits and types for stigmergic demand-response simulation.
//!
//! PheroMQ models a population of grid participants coordinating through
//! a shared pheromone field instead of a central dispatcher:
//!
//! - **SignalField** — a sparse, decaying, diffusing scalar field keyed by
//!   `(node, kind)`. Evaporation bounds the field; diffusion carries local
//!   information to graph neighbors.
//! - **Participant** — a node-bound actor that senses the local
//!   demand-response intensity and offers a bounded kW contribution
//!   through a smooth tanh saturation.
//! - **Topology** — the adjacency seam. The core never builds graphs;
//!   it only asks for a node's neighbors in deterministic order.
//!
//! ## Quick Start
//!
//! ```rust
//! use pheromq_core::prelude::*;
//!
//! let config = FieldConfig { evap: 0.82, diff: 0.35 };
//! let mut field = SignalField::new(config).unwrap();
//! field.set(NodeId(0), SignalKind::DemandResponse, 1.0).unwrap();
//!
//! assert_eq!(field.get(NodeId(0), &SignalKind::DemandResponse), 1.0);
//! ```

pub mod types;
pub mod topology;
pub mod field;
pub mod participant;
pub mod error;
pub mod prelude;
