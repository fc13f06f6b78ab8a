//! Hive — the simulation round loop.
//!
//! The hive owns the field, the participant collection, and the round
//! history. Each round:
//! 1. Every participant senses the field at its node and offers kW
//! 2. The aggregate offer is compared against the target
//! 3. A round record (with an independent field copy) joins the history
//! 4. If the target is unmet, the field evolves one step
//!
//! Perception is read-only with respect to the field, so participant
//! order only determines the layout of the offers list, never the
//! result. The whole loop is single-threaded and synchronous.

use serde::{Deserialize, Serialize};

use crate::topology_impl::PetTopology;
use pheromq_core::error::{PheromqError, Result};
use pheromq_core::field::SignalField;
use pheromq_core::participant::Participant;
use pheromq_core::types::{NodeId, ParticipantId, RoundRecord, SignalKind, Tick};

/// How a run ended. Exhausting the round budget is a valid outcome to
/// report, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The aggregate offer reached the target at this round.
    TargetMet { round: Tick, total_kw: f64 },
    /// All rounds ran without reaching the target.
    RoundsExhausted { best_total_kw: f64 },
}

impl RunOutcome {
    pub fn target_met(&self) -> bool {
        matches!(self, RunOutcome::TargetMet { .. })
    }
}

/// Statistics about the hive's current state.
#[derive(Debug, Clone, Serialize)]
pub struct HiveStats {
    pub rounds_recorded: usize,
    pub participants: usize,
    pub field_entries: usize,
    pub field_mass: f64,
    /// Sum of all participants' maximum shed capacities.
    pub total_capacity_kw: f64,
}

/// The hive — owns the field, the participants, and the run history.
pub struct Hive {
    topology: PetTopology,
    field: SignalField,
    participants: Vec<Participant>,
    history: Vec<RoundRecord>,
    sense_kind: SignalKind,
}

impl Hive {
    /// Create a hive over a fixed topology with a constructed field.
    pub fn new(topology: PetTopology, field: SignalField) -> Self {
        Self {
            topology,
            field,
            participants: Vec::new(),
            history: Vec::new(),
            sense_kind: SignalKind::DemandResponse,
        }
    }

    /// Change the signal kind participants sense. Defaults to
    /// [`SignalKind::DemandResponse`].
    pub fn with_sense_kind(mut self, kind: SignalKind) -> Self {
        self.sense_kind = kind;
        self
    }

    /// Add a participant to the hive.
    pub fn spawn(&mut self, participant: Participant) -> ParticipantId {
        let id = participant.id();
        self.participants.push(participant);
        id
    }

    /// Add several participants, preserving their order.
    pub fn spawn_all(&mut self, participants: Vec<Participant>) {
        self.participants.extend(participants);
    }

    /// Seed the field at a node. Negative intensity is rejected.
    pub fn seed(&mut self, node: NodeId, kind: SignalKind, intensity: f64) -> Result<()> {
        self.field.set(node, kind, intensity)
    }

    pub fn field(&self) -> &SignalField {
        &self.field
    }

    pub fn topology(&self) -> &PetTopology {
        &self.topology
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// History of the most recent run, one record per executed round.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn stats(&self) -> HiveStats {
        HiveStats {
            rounds_recorded: self.history.len(),
            participants: self.participants.len(),
            field_entries: self.field.len(),
            field_mass: self.field.total_mass(),
            total_capacity_kw: self.participants.iter().map(|p| p.max_shed_kw()).sum(),
        }
    }

    /// Run up to `max_rounds` rounds, stopping early once the aggregate
    /// offer reaches `target_kw`.
    ///
    /// `max_rounds` must be at least 1 and `target_kw` non-negative;
    /// both are rejected up front, never clamped. Any history from a
    /// previous run is discarded. On success the history holds between
    /// 1 and `max_rounds` records; the field is not stepped past the
    /// round that met the target.
    pub fn run(&mut self, max_rounds: u64, target_kw: f64) -> Result<RunOutcome> {
        if max_rounds < 1 {
            return Err(PheromqError::invalid_config(
                "max_rounds",
                max_rounds.to_string(),
                "must be at least 1",
            ));
        }
        if target_kw < 0.0 {
            return Err(PheromqError::out_of_range(
                "target_kw",
                0.0,
                f64::INFINITY,
                target_kw,
            ));
        }

        self.history = Vec::new();

        for round in 0..max_rounds {
            let mut offers = Vec::with_capacity(self.participants.len());
            for participant in &mut self.participants {
                let intensity = self.field.get(participant.node(), &self.sense_kind);
                offers.push(participant.perceive_and_offer(intensity));
            }
            let total_kw: f64 = offers.iter().sum();

            self.history.push(RoundRecord {
                round,
                total_offer_kw: total_kw,
                offers_kw: offers,
                field: self.field.snapshot(),
            });

            if total_kw >= target_kw {
                return Ok(RunOutcome::TargetMet {
                    round,
                    total_kw,
                });
            }
            self.field.step(&self.topology);
        }

        let best_total_kw = self
            .history
            .iter()
            .map(|r| r.total_offer_kw)
            .fold(0.0, f64::max);
        Ok(RunOutcome::RoundsExhausted { best_total_kw })
    }
}
