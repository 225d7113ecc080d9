//! Ship weapons

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::constants::{
    LASER_DAMAGE, LASER_RANGE, PHOTON_GUN_MAX_DAMAGE, PHOTON_GUN_MIN_DAMAGE,
    PHOTON_GUN_MISS_CHANCE, PHOTON_GUN_RANGE,
};

/// Anything a ship can shoot with.
pub trait Weapon: fmt::Debug {
    /// Maximum engagement distance.
    fn max_range(&self) -> u32;

    /// Fire once and return the damage dealt.
    fn fire(&mut self) -> u32;

    /// Short display name of the variant.
    fn kind(&self) -> &'static str;
}

/// Laser cannon: weak but perfectly steady.
#[derive(Debug, Clone, Default)]
pub struct LaserCannon;

impl LaserCannon {
    pub fn new() -> Self {
        LaserCannon
    }
}

impl Weapon for LaserCannon {
    fn max_range(&self) -> u32 {
        LASER_RANGE
    }

    fn fire(&mut self) -> u32 {
        LASER_DAMAGE
    }

    fn kind(&self) -> &'static str {
        "laser cannon"
    }
}

/// Photon cannon: long range, erratic damage and the odd misfire.
///
/// Each cannon owns its own generator so two cannons never share a stream.
#[derive(Debug, Clone)]
pub struct PhotonCannon {
    rng: StdRng,
}

impl PhotonCannon {
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

impl Default for PhotonCannon {
    fn default() -> Self {
        Self::new()
    }
}

impl Weapon for PhotonCannon {
    fn max_range(&self) -> u32 {
        PHOTON_GUN_RANGE
    }

    fn fire(&mut self) -> u32 {
        if self.rng.gen_range(0..100) < PHOTON_GUN_MISS_CHANCE {
            return 0;
        }
        self.rng.gen_range(PHOTON_GUN_MIN_DAMAGE..PHOTON_GUN_MAX_DAMAGE)
    }

    fn kind(&self) -> &'static str {
        "photon cannon"
    }
}
