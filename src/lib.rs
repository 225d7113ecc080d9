//! Space Games
//!
//! A small spacecraft tournament built around the Abstract Factory pattern.
//!
//! # Overview
//!
//! Each ship is assembled by a [`factories::ShipFactory`] that hands out a
//! matched set of parts: an energy source, a weapon and an engine. Two
//! families exist, pirate ships and warships. A [`battle::Battle`] then pits
//! two ships against each other in a fixed-length race and a fight to the
//! death.
//!
//! # Modules
//!
//! - [`models`] - Part families, the spaceship, constants and errors
//! - [`factories`] - Ship factories, one per ship family
//! - [`battle`] - Race and fight simulations
//! - [`services`] - The full tournament sequence
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation logic
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use spacegames::battle::{Battle, Outcome};
//! use spacegames::factories::{PirateShipFactory, WarshipFactory};
//! use spacegames::models::spaceship::Spaceship;
//!
//! let mut pirate = Spaceship::new("Nebuchadnezzar", &mut PirateShipFactory::with_seed(7));
//! let mut warship = Spaceship::new("Nostromo", &mut WarshipFactory::new());
//!
//! let mut battle = Battle::new(&mut pirate, &mut warship);
//! let report = battle.fight();
//! assert!(matches!(report.outcome, Outcome::Winner(_) | Outcome::Draw));
//! ```

pub mod battle;
pub mod cli;
pub mod factories;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use battle::{Battle, Contender, FightReport, Outcome, RaceReport};
pub use models::spaceship::Spaceship;
