//! Ship factories
//!
//! Each factory produces a matched, mutually compatible set of parts for one
//! ship family along with the family's hull stats. Adding a family means
//! adding a factory (and whatever new parts it needs); [`Spaceship`] and the
//! battle controller stay untouched.
//!
//! [`Spaceship`]: crate::models::spaceship::Spaceship

mod pirate;
mod warship;

pub use pirate::PirateShipFactory;
pub use warship::WarshipFactory;

use crate::models::energy::EnergySource;
use crate::models::engine::Engine;
use crate::models::weapon::Weapon;

/// Abstract factory for one family of spaceships.
pub trait ShipFactory {
    /// Starting health of ships in this family.
    fn health(&self) -> i32;

    /// Family name shown in front of a ship's own name.
    fn type_name(&self) -> &str;

    fn create_engine(&mut self) -> Box<dyn Engine>;

    fn create_weapon(&mut self) -> Box<dyn Weapon>;

    fn create_energy_source(&mut self) -> Box<dyn EnergySource>;
}
