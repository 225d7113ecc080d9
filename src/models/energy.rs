//! Energy sources
//!
//! An energy source holds a remaining volume that engines draw from.
//! Consumption never fails and the volume never goes negative.

use std::fmt;

use super::constants::ENERGY_SOURCE_VOLUME;

/// Power supply for a ship's engine.
pub trait EnergySource: fmt::Debug {
    /// Volume currently left in the source.
    fn remaining(&self) -> u32;

    /// Draw `amount` units from the source.
    ///
    /// # Returns
    ///
    /// The remaining volume after consumption, or `0` when the source could
    /// not cover the request. A depleted source is a normal outcome, not an
    /// error.
    fn consume(&mut self, amount: u32) -> u32;

    /// Short display name of the variant.
    fn kind(&self) -> &'static str;
}

/// Idealised solar collector: an endless supply.
#[derive(Debug, Clone)]
pub struct SolarPanel {
    remaining: u32,
}

impl SolarPanel {
    pub fn new() -> Self {
        Self {
            remaining: ENERGY_SOURCE_VOLUME,
        }
    }
}

impl Default for SolarPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl EnergySource for SolarPanel {
    fn remaining(&self) -> u32 {
        self.remaining
    }

    fn consume(&mut self, _amount: u32) -> u32 {
        self.remaining
    }

    fn kind(&self) -> &'static str {
        "solar"
    }
}

/// Plasma reactor with a finite fuel volume.
#[derive(Debug, Clone)]
pub struct PlasmaReactor {
    remaining: u32,
}

impl PlasmaReactor {
    pub fn new() -> Self {
        Self::with_volume(ENERGY_SOURCE_VOLUME)
    }

    /// Reactor holding an arbitrary starting volume.
    pub fn with_volume(remaining: u32) -> Self {
        Self { remaining }
    }
}

impl Default for PlasmaReactor {
    fn default() -> Self {
        Self::new()
    }
}

impl EnergySource for PlasmaReactor {
    fn remaining(&self) -> u32 {
        self.remaining
    }

    fn consume(&mut self, amount: u32) -> u32 {
        // Requests the reactor cannot cover leave the fuel untouched.
        match self.remaining.checked_sub(amount) {
            Some(left) => {
                self.remaining = left;
                left
            }
            None => 0,
        }
    }

    fn kind(&self) -> &'static str {
        "plasma"
    }
}
