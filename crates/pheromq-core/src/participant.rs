//! Participant — a node-bound actor offering bounded kW.
//!
//! A participant converts the locally sensed demand-response intensity
//! into an offer through a smooth tanh saturation, clamped to its
//! maximum shed capacity. Perception is a pure function of the sensed
//! value plus the participant's fixed capacity; the only mutable state
//! is the current offer.

use serde::{Deserialize, Serialize};

use crate::error::{PheromqError, Result};
use crate::types::{NodeId, ParticipantId};

/// Steepness of the tanh response: how quickly intensity saturates
/// into a full-capacity offer.
pub const STEEPNESS: f64 = 1.5;

/// One demand-response participant, bound to a single topology node
/// for its whole lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    node: NodeId,
    name: String,
    max_shed_kw: f64,
    base_load_kw: f64,
    offered_kw: f64,
}

impl Participant {
    /// Create a participant. Capacity and baseline must be non-negative;
    /// negatives are rejected, never clamped.
    pub fn new(
        node: NodeId,
        name: impl Into<String>,
        max_shed_kw: f64,
        base_load_kw: f64,
    ) -> Result<Self> {
        if max_shed_kw < 0.0 {
            return Err(PheromqError::out_of_range(
                "max_shed_kw",
                0.0,
                f64::INFINITY,
                max_shed_kw,
            ));
        }
        if base_load_kw < 0.0 {
            return Err(PheromqError::out_of_range(
                "base_load_kw",
                0.0,
                f64::INFINITY,
                base_load_kw,
            ));
        }
        Ok(Self {
            id: ParticipantId::new(),
            node,
            name: name.into(),
            max_shed_kw,
            base_load_kw,
            offered_kw: 0.0,
        })
    }

    pub fn id(&self) -> ParticipantId {
        self.id
    }

    /// The topology node this participant is bound to.
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Maximum shed capacity in kW (the hard upper limit on any offer).
    pub fn max_shed_kw(&self) -> f64 {
        self.max_shed_kw
    }

    /// Baseline load in kW. Informational — not used by the offer
    /// function, but part of the participant's grid profile.
    pub fn base_load_kw(&self) -> f64 {
        self.base_load_kw
    }

    /// The offer computed in the most recent round.
    pub fn offered_kw(&self) -> f64 {
        self.offered_kw
    }

    /// Convert a sensed intensity into a bounded offer, store it as the
    /// current offer, and return it.
    ///
    /// `fraction = tanh(STEEPNESS * intensity)` is in [0, 1) for
    /// non-negative input; the clamp is the hard upper limit — redundant
    /// for normal inputs, but the bound holds for any finite intensity,
    /// including negative values (which clamp to a zero offer).
    pub fn perceive_and_offer(&mut self, intensity: f64) -> f64 {
        let fraction = (STEEPNESS * intensity).tanh();
        let desired = fraction * self.max_shed_kw;
        self.offered_kw = desired.clamp(0.0, self.max_shed_kw);
        self.offered_kw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(max_shed_kw: f64) -> Participant {
        Participant::new(NodeId(0), "A0", max_shed_kw, 10.0).unwrap()
    }

    #[test]
    fn rejects_negative_capacity_and_baseline() {
        assert!(Participant::new(NodeId(0), "A0", -1.0, 10.0).is_err());
        assert!(Participant::new(NodeId(0), "A0", 5.0, -1.0).is_err());
        assert!(Participant::new(NodeId(0), "A0", 0.0, 0.0).is_ok());
    }

    #[test]
    fn zero_intensity_offers_exactly_zero() {
        let mut p = participant(5.0);
        assert_eq!(p.perceive_and_offer(0.0), 0.0);
        assert_eq!(p.offered_kw(), 0.0);
    }

    #[test]
    fn large_intensity_saturates_to_capacity() {
        let mut p = participant(5.0);
        let offer = p.perceive_and_offer(100.0);
        assert!((offer - 5.0).abs() < 1e-6);
        assert!(offer <= 5.0);
    }

    #[test]
    fn offers_stay_within_bounds_for_any_input() {
        let mut p = participant(5.0);
        for intensity in [-1e9, -100.0, -0.5, 0.0, 1e-9, 0.3, 1.0, 42.0, 1e9] {
            let offer = p.perceive_and_offer(intensity);
            assert!(offer >= 0.0, "offer {} for intensity {}", offer, intensity);
            assert!(offer <= 5.0, "offer {} for intensity {}", offer, intensity);
        }
    }

    #[test]
    fn negative_intensity_clamps_to_zero() {
        let mut p = participant(5.0);
        assert_eq!(p.perceive_and_offer(-3.0), 0.0);
    }

    #[test]
    fn offer_is_monotone_in_intensity() {
        let mut p = participant(5.0);
        let mut previous = p.perceive_and_offer(0.0);
        for i in 1..=100 {
            let offer = p.perceive_and_offer(i as f64 * 0.05);
            assert!(offer >= previous);
            previous = offer;
        }
    }

    #[test]
    fn zero_capacity_always_offers_zero() {
        let mut p = participant(0.0);
        assert_eq!(p.perceive_and_offer(10.0), 0.0);
    }

    #[test]
    fn offer_updates_the_stored_value_each_round() {
        let mut p = participant(5.0);
        p.perceive_and_offer(10.0);
        assert!(p.offered_kw() > 0.0);
        p.perceive_and_offer(0.0);
        assert_eq!(p.offered_kw(), 0.0);
    }
}
