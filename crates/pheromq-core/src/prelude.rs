//! PheroMQ Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use pheromq_core::prelude::*;
//! ```

// Re-export commonly used types
pub use crate::types::{
    FieldCell, NodeId, ParticipantId, RoundRecord, SignalKind, Tick,
};

// Re-export the field and its configuration
pub use crate::field::{FieldConfig, SignalField, PRUNE_THRESHOLD};

// Re-export the participant
pub use crate::participant::{Participant, STEEPNESS};

// Re-export the Topology trait
pub use crate::topology::Topology;

// Re-export error types
pub use crate::error::{PheromqError, Result};
