//! PheroMQ Runtime Prelude — convenient imports for common usage.

pub use crate::export::{report_to_json, write_report, RunReport};
pub use crate::hive::{Hive, HiveStats, RunOutcome};
pub use crate::spawn::{spawn_participants, CapacityProfile};
pub use crate::topology_impl::PetTopology;
