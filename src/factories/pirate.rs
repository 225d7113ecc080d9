use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::constants::{PIRATE_SHIP_HEALTH, PIRATE_SHIP_TYPE};
use crate::models::energy::{EnergySource, PlasmaReactor};
use crate::models::engine::{Engine, PhotonDrive};
use crate::models::weapon::{PhotonCannon, Weapon};

use super::ShipFactory;

/// Pirate ships: fragile hulls, photon parts, high variance.
///
/// Every random part gets a fresh seed drawn from the factory's own
/// generator, so parts never share a stream while a seeded factory still
/// builds the same ship every time.
#[derive(Debug, Clone)]
pub struct PirateShipFactory {
    seeds: StdRng,
}

impl PirateShipFactory {
    pub fn new() -> Self {
        Self {
            seeds: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seeds: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for PirateShipFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipFactory for PirateShipFactory {
    fn health(&self) -> i32 {
        PIRATE_SHIP_HEALTH
    }

    fn type_name(&self) -> &str {
        PIRATE_SHIP_TYPE
    }

    fn create_engine(&mut self) -> Box<dyn Engine> {
        Box::new(PhotonDrive::with_seed(self.seeds.gen()))
    }

    fn create_weapon(&mut self) -> Box<dyn Weapon> {
        Box::new(PhotonCannon::with_seed(self.seeds.gen()))
    }

    fn create_energy_source(&mut self) -> Box<dyn EnergySource> {
        Box::new(PlasmaReactor::new())
    }
}
