//! # PheroMQ Runtime
//!
//! The simulation runtime for PheroMQ: concrete grid topologies, the
//! hive round loop, participant spawning, and run-history export.
//!
//! The [`hive::Hive`] owns the field, the participant collection, and
//! the round history. Each round it lets every participant sense the
//! local demand-response intensity and offer kW, checks the aggregate
//! against the target, and — if the target is still unmet — evolves the
//! field by one evaporate-then-diffuse step.

pub mod topology_impl;
pub mod hive;
pub mod spawn;
pub mod export;
pub mod prelude;
