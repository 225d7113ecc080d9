//! Ship engines
//!
//! An engine turns energy into distance, one simulation tick at a time.
//! Running out of energy never stops an engine outright; what happens is
//! up to the energy source's own policy.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::constants::{
    BASE_DISTANCE, BASE_ENERGY_RATE, PHOTON_ENGINE_ENERGY_RATE, PHOTON_ENGINE_MAX_FACTOR,
    PULSE_SPEED_FACTOR,
};
use super::energy::EnergySource;

/// Baseline engine behaviour: burn `rate` units, cover one unit of distance.
pub fn base_thrust(rate: u32, energy: &mut dyn EnergySource) -> u32 {
    energy.consume(rate);
    BASE_DISTANCE
}

/// Propulsion for a ship.
pub trait Engine: fmt::Debug {
    /// Per-tick energy consumption baseline.
    fn energy_rate(&self) -> u32;

    /// Fly for one tick, drawing from `energy`, and return the distance covered.
    fn travel(&mut self, energy: &mut dyn EnergySource) -> u32 {
        base_thrust(self.energy_rate(), energy)
    }

    /// Short display name of the variant.
    fn kind(&self) -> &'static str;
}

/// Pulse drive: slow and steady.
#[derive(Debug, Clone, Default)]
pub struct PulseDrive;

impl PulseDrive {
    pub fn new() -> Self {
        PulseDrive
    }
}

impl Engine for PulseDrive {
    fn energy_rate(&self) -> u32 {
        BASE_ENERGY_RATE
    }

    fn travel(&mut self, energy: &mut dyn EnergySource) -> u32 {
        base_thrust(self.energy_rate(), energy) * PULSE_SPEED_FACTOR
    }

    fn kind(&self) -> &'static str {
        "pulse drive"
    }
}

/// Photon drive: potentially fast, wildly unstable, may stall on any tick.
#[derive(Debug, Clone)]
pub struct PhotonDrive {
    rng: StdRng,
}

impl PhotonDrive {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PhotonDrive {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for PhotonDrive {
    fn energy_rate(&self) -> u32 {
        PHOTON_ENGINE_ENERGY_RATE
    }

    fn travel(&mut self, energy: &mut dyn EnergySource) -> u32 {
        let burn_factor = self.rng.gen_range(0..PHOTON_ENGINE_MAX_FACTOR);
        energy.consume(self.energy_rate() * burn_factor);

        let speed_factor = self.rng.gen_range(0..PHOTON_ENGINE_MAX_FACTOR);
        self.energy_rate() * speed_factor
    }

    fn kind(&self) -> &'static str {
        "photon drive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::energy::{PlasmaReactor, SolarPanel};

    #[derive(Debug)]
    struct Thruster;

    impl Engine for Thruster {
        fn energy_rate(&self) -> u32 {
            2
        }

        fn kind(&self) -> &'static str {
            "thruster"
        }
    }

    #[test]
    fn default_travel_uses_base_policy() {
        let mut plasma = PlasmaReactor::with_volume(10);
        assert_eq!(Thruster.travel(&mut plasma), 1);
        assert_eq!(plasma.remaining(), 8);
    }

    #[test]
    fn pulse_moves_five_per_unit() {
        let mut drive = PulseDrive::new();
        let mut plasma = PlasmaReactor::new();
        for tick in 1..=10 {
            assert_eq!(drive.travel(&mut plasma), 5);
            assert_eq!(plasma.remaining(), 100 - tick);
        }
    }

    #[test]
    fn pulse_keeps_moving_on_empty_reactor() {
        let mut drive = PulseDrive::new();
        let mut plasma = PlasmaReactor::with_volume(0);
        assert_eq!(drive.travel(&mut plasma), 5);
        assert_eq!(plasma.remaining(), 0);
    }

    #[test]
    fn photon_distance_is_multiple_of_rate() {
        let mut drive = PhotonDrive::with_seed(99);
        let mut solar = SolarPanel::new();
        let mut stalled = false;
        for _ in 0..500 {
            let d = drive.travel(&mut solar);
            assert_eq!(d % 3, 0);
            assert!(d < 30);
            stalled |= d == 0;
        }
        assert!(stalled, "500 ticks without a single stall");
    }

    #[test]
    fn photon_burn_is_multiple_of_rate() {
        let mut drive = PhotonDrive::with_seed(3);
        let mut plasma = PlasmaReactor::with_volume(10_000);
        let mut before = plasma.remaining();
        for _ in 0..100 {
            drive.travel(&mut plasma);
            let burned = before - plasma.remaining();
            assert_eq!(burned % 3, 0);
            assert!(burned <= 27);
            before = plasma.remaining();
        }
    }
}
