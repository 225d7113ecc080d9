//! User interface and presentation
//!
//! Presenters format tournament events for the player, keeping console
//! text out of the simulation code.

pub mod presenters;
