//! # PheroMQ Viz
//!
//! Text rendering for PheroMQ round records: per-node intensity and
//! offer bars for a single round, and a totals-over-time table for a
//! whole run. Rendering consumes the immutable history only — a run
//! succeeds whether or not anything gets rendered.

pub mod ascii;

pub use ascii::{render_round, render_totals};
