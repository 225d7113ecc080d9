// Energy sources
pub const ENERGY_SOURCE_VOLUME: u32 = 100;

// Weapons
pub const LASER_DAMAGE: u32 = 30;
pub const LASER_RANGE: u32 = 100;
pub const PHOTON_GUN_RANGE: u32 = 300;
pub const PHOTON_GUN_MIN_DAMAGE: u32 = 10;
/// Exclusive upper bound of a photon hit.
pub const PHOTON_GUN_MAX_DAMAGE: u32 = 80;
/// Percent chance that a photon shot misfires.
pub const PHOTON_GUN_MISS_CHANCE: u32 = 10;

// Engines
pub const BASE_ENERGY_RATE: u32 = 1;
pub const BASE_DISTANCE: u32 = 1;
pub const PULSE_SPEED_FACTOR: u32 = 5;
pub const PHOTON_ENGINE_ENERGY_RATE: u32 = 3;
/// Exclusive upper bound for both photon engine multipliers.
pub const PHOTON_ENGINE_MAX_FACTOR: u32 = 10;

// Ship families
pub const PIRATE_SHIP_HEALTH: i32 = 200;
pub const PIRATE_SHIP_TYPE: &str = "pirate ship";
pub const WARSHIP_HEALTH: i32 = 500;
pub const WARSHIP_TYPE: &str = "warship";

pub const DEFAULT_PIRATE_NAME: &str = "Nebuchadnezzar";
pub const DEFAULT_WARSHIP_NAME: &str = "Nostromo";

// Battles
pub const RACE_ROUNDS: u32 = 100;
/// A fight still undecided after this many rounds is called a draw.
pub const MAX_FIGHT_ROUNDS: u32 = 10_000;
