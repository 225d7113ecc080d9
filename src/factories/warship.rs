use crate::models::constants::{WARSHIP_HEALTH, WARSHIP_TYPE};
use crate::models::energy::{EnergySource, PlasmaReactor};
use crate::models::engine::{Engine, PulseDrive};
use crate::models::weapon::{LaserCannon, Weapon};

use super::ShipFactory;

/// Warships: heavy hulls, steady laser and pulse parts.
#[derive(Debug, Clone, Default)]
pub struct WarshipFactory;

impl WarshipFactory {
    pub fn new() -> Self {
        WarshipFactory
    }
}

impl ShipFactory for WarshipFactory {
    fn health(&self) -> i32 {
        WARSHIP_HEALTH
    }

    fn type_name(&self) -> &str {
        WARSHIP_TYPE
    }

    fn create_engine(&mut self) -> Box<dyn Engine> {
        Box::new(PulseDrive::new())
    }

    fn create_weapon(&mut self) -> Box<dyn Weapon> {
        Box::new(LaserCannon::new())
    }

    fn create_energy_source(&mut self) -> Box<dyn EnergySource> {
        Box::new(PlasmaReactor::new())
    }
}
