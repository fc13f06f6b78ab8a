//! Run report export — serialize a finished run as JSON.
//!
//! The report is the hand-off point for external tooling (plotting,
//! analysis): the outcome plus every round record, pretty-printed.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::hive::{Hive, RunOutcome};
use pheromq_core::error::Result;
use pheromq_core::types::RoundRecord;

/// A complete, serializable record of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub rounds: Vec<RoundRecord>,
}

impl RunReport {
    /// Assemble a report from a hive that has finished a run.
    pub fn from_run(hive: &Hive, outcome: RunOutcome) -> Self {
        Self {
            outcome,
            rounds: hive.history().to_vec(),
        }
    }

    /// The per-round aggregate totals, in round order.
    pub fn totals_kw(&self) -> Vec<f64> {
        self.rounds.iter().map(|r| r.total_offer_kw).collect()
    }
}

/// Serialize a report as pretty JSON.
pub fn report_to_json(report: &RunReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write a report to a file as pretty JSON.
pub fn write_report(report: &RunReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology_impl::PetTopology;
    use pheromq_core::field::{FieldConfig, SignalField};
    use pheromq_core::participant::Participant;
    use pheromq_core::types::{NodeId, SignalKind};

    fn finished_hive() -> (Hive, RunOutcome) {
        let field = SignalField::new(FieldConfig::default()).unwrap();
        let mut hive = Hive::new(PetTopology::honeycomb7(), field);
        for i in 0..7 {
            hive.spawn(Participant::new(NodeId(i), format!("A{}", i), 5.0, 10.0).unwrap());
        }
        hive.seed(NodeId(0), SignalKind::DemandResponse, 1.0).unwrap();
        let outcome = hive.run(10, 1000.0).unwrap();
        (hive, outcome)
    }

    #[test]
    fn report_round_trips_through_json() {
        let (hive, outcome) = finished_hive();
        let report = RunReport::from_run(&hive, outcome);

        let json = report_to_json(&report).unwrap();
        let parsed: RunReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.rounds.len(), report.rounds.len());
        assert_eq!(parsed.totals_kw(), report.totals_kw());
        assert_eq!(parsed.outcome, report.outcome);
    }

    #[test]
    fn totals_match_history_order() {
        let (hive, outcome) = finished_hive();
        let report = RunReport::from_run(&hive, outcome);
        let totals = report.totals_kw();
        assert_eq!(totals.len(), 10);
        for (record, total) in hive.history().iter().zip(&totals) {
            assert_eq!(record.total_offer_kw, *total);
        }
    }
}
