use std::fmt;

use crate::factories::ShipFactory;

use super::energy::EnergySource;
use super::engine::Engine;
use super::weapon::Weapon;

/// A spaceship assembled from one factory's matched set of parts.
///
/// The ship owns its parts exclusively. Health may drop below zero; a ship
/// counts as destroyed once health is at or below zero.
#[derive(Debug)]
pub struct Spaceship {
    name: String,
    type_name: String,
    health: i32,
    energy: Box<dyn EnergySource>,
    weapon: Box<dyn Weapon>,
    engine: Box<dyn Engine>,
}

impl Spaceship {
    /// Builds a ship named `name` from `factory`'s parts and stats.
    pub fn new(name: impl Into<String>, factory: &mut dyn ShipFactory) -> Self {
        Self {
            name: name.into(),
            type_name: factory.type_name().to_string(),
            health: factory.health(),
            energy: factory.create_energy_source(),
            weapon: factory.create_weapon(),
            engine: factory.create_engine(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn energy(&self) -> &dyn EnergySource {
        self.energy.as_ref()
    }

    pub fn weapon(&self) -> &dyn Weapon {
        self.weapon.as_ref()
    }

    pub fn engine(&self) -> &dyn Engine {
        self.engine.as_ref()
    }

    /// Fires the ship's weapon once and returns the damage dealt.
    pub fn shoot(&mut self) -> u32 {
        self.weapon.fire()
    }

    /// Flies for one tick on the ship's own energy source.
    pub fn travel(&mut self) -> u32 {
        self.engine.travel(self.energy.as_mut())
    }

    /// Subtracts `damage` from health with no floor at zero.
    pub fn take_damage(&mut self, damage: u32) {
        self.health = self.health.saturating_sub_unsigned(damage);
    }
}

impl fmt::Display for Spaceship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} \"{}\"", self.type_name, self.name)
    }
}
