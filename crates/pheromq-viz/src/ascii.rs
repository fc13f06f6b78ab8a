//! ASCII snapshots of round records.
//!
//! One line per node with the snapshotted intensity, a ten-character
//! bar, and the local offer. Assumes the reference layout of one
//! participant per node, in node order (what
//! `pheromq_runtime::spawn::spawn_participants` produces).

use pheromq_core::types::{NodeId, RoundRecord, SignalKind};

const BAR_WIDTH: usize = 10;

fn bar(intensity: f64) -> String {
    let filled = (intensity * BAR_WIDTH as f64).clamp(0.0, BAR_WIDTH as f64) as usize;
    "#".repeat(filled)
}

/// Render one round: intensity and offer per node.
pub fn render_round(record: &RoundRecord, nodes: &[NodeId], kind: &SignalKind) -> String {
    let mut lines = Vec::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        let intensity = record.intensity(*node, kind);
        let offer_kw = record.offers_kw.get(i).copied().unwrap_or(0.0);
        lines.push(format!(
            "Node {} I={:0.2} |{:<width$}| offer={:0.2} kW",
            node,
            intensity,
            bar(intensity),
            offer_kw,
            width = BAR_WIDTH,
        ));
    }
    lines.join("\n")
}

/// Render the aggregate offer per round for a whole run.
pub fn render_totals(rounds: &[RoundRecord]) -> String {
    let mut lines = vec!["round  total_offer_kw".to_string()];
    for record in rounds {
        lines.push(format!("{:>5}  {:>14.2}", record.round, record.total_offer_kw));
    }
    lines.join("\n")
}
