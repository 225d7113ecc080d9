//! Domain models
//!
//! This module contains the ship parts, the spaceship assembled from them,
//! and the shared constants and error types.

pub mod constants;
pub mod energy;
pub mod engine;
pub mod errors;
pub mod spaceship;
pub mod weapon;
