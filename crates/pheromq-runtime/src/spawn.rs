//! Participant spawning with caller-owned randomness.
//!
//! Capacities are drawn from uniform ranges through an explicitly passed
//! RNG — reproducibility is the caller's choice of seed, never a hidden
//! process-wide generator.

use rand::{Rng, RngCore};

use crate::topology_impl::PetTopology;
use pheromq_core::error::{PheromqError, Result};
use pheromq_core::participant::Participant;
use pheromq_core::topology::Topology;

/// Uniform ranges for randomly drawn participant capacities, in kW.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapacityProfile {
    /// Inclusive-exclusive range for baseline load.
    pub base_load_kw: (f64, f64),
    /// Inclusive-exclusive range for maximum shed capacity.
    pub max_shed_kw: (f64, f64),
}

impl Default for CapacityProfile {
    fn default() -> Self {
        // Reference household profile: 8-15 kW base load, 3-8 kW sheddable.
        Self {
            base_load_kw: (8.0, 15.0),
            max_shed_kw: (3.0, 8.0),
        }
    }
}

impl CapacityProfile {
    fn validate(&self) -> Result<()> {
        for (field, (lo, hi)) in [
            ("base_load_kw", self.base_load_kw),
            ("max_shed_kw", self.max_shed_kw),
        ] {
            if lo < 0.0 {
                return Err(PheromqError::out_of_range(field, 0.0, f64::INFINITY, lo));
            }
            if hi < lo {
                return Err(PheromqError::invalid_config(
                    field,
                    format!("{}..{}", lo, hi),
                    "range upper bound below lower bound",
                ));
            }
        }
        Ok(())
    }
}

fn draw(range: (f64, f64), rng: &mut dyn RngCore) -> f64 {
    let (lo, hi) = range;
    if lo == hi {
        lo
    } else {
        rng.random_range(lo..hi)
    }
}

/// Spawn one participant per topology node, in node order, with
/// capacities drawn from `profile` through the supplied RNG.
pub fn spawn_participants(
    topology: &PetTopology,
    profile: &CapacityProfile,
    rng: &mut dyn RngCore,
) -> Result<Vec<Participant>> {
    profile.validate()?;
    let mut participants = Vec::with_capacity(topology.node_count());
    for node in topology.nodes() {
        let base_load_kw = draw(profile.base_load_kw, rng);
        let max_shed_kw = draw(profile.max_shed_kw, rng);
        participants.push(Participant::new(
            node,
            format!("A{}", node),
            max_shed_kw,
            base_load_kw,
        )?);
    }
    Ok(participants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn spawns_one_participant_per_node_in_order() {
        let topo = PetTopology::honeycomb7();
        let mut rng = SmallRng::seed_from_u64(42);
        let participants =
            spawn_participants(&topo, &CapacityProfile::default(), &mut rng).unwrap();

        assert_eq!(participants.len(), 7);
        for (i, p) in participants.iter().enumerate() {
            assert_eq!(p.node().0, i as u32);
            assert_eq!(p.name(), format!("A{}", i));
        }
    }

    #[test]
    fn capacities_fall_within_profile_ranges() {
        let topo = PetTopology::honeycomb7();
        let mut rng = SmallRng::seed_from_u64(7);
        let profile = CapacityProfile::default();
        let participants = spawn_participants(&topo, &profile, &mut rng).unwrap();

        for p in &participants {
            assert!(p.base_load_kw() >= 8.0 && p.base_load_kw() < 15.0);
            assert!(p.max_shed_kw() >= 3.0 && p.max_shed_kw() < 8.0);
        }
    }

    #[test]
    fn same_seed_yields_identical_capacities() {
        let topo = PetTopology::honeycomb7();
        let profile = CapacityProfile::default();

        let mut rng_a = SmallRng::seed_from_u64(42);
        let mut rng_b = SmallRng::seed_from_u64(42);
        let first = spawn_participants(&topo, &profile, &mut rng_a).unwrap();
        let second = spawn_participants(&topo, &profile, &mut rng_b).unwrap();

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.max_shed_kw(), b.max_shed_kw());
            assert_eq!(a.base_load_kw(), b.base_load_kw());
        }
    }

    #[test]
    fn degenerate_range_yields_constant_capacity() {
        let topo = PetTopology::line(3);
        let mut rng = SmallRng::seed_from_u64(1);
        let profile = CapacityProfile {
            base_load_kw: (10.0, 10.0),
            max_shed_kw: (5.0, 5.0),
        };
        let participants = spawn_participants(&topo, &profile, &mut rng).unwrap();
        assert!(participants.iter().all(|p| p.max_shed_kw() == 5.0));
    }

    #[test]
    fn invalid_profiles_are_rejected() {
        let topo = PetTopology::line(2);
        let mut rng = SmallRng::seed_from_u64(1);
        let negative = CapacityProfile {
            base_load_kw: (-1.0, 5.0),
            max_shed_kw: (3.0, 8.0),
        };
        assert!(spawn_participants(&topo, &negative, &mut rng).is_err());

        let inverted = CapacityProfile {
            base_load_kw: (8.0, 15.0),
            max_shed_kw: (8.0, 3.0),
        };
        assert!(spawn_participants(&topo, &inverted, &mut rng).is_err());
    }
}
