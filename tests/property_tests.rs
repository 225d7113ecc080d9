use proptest::prelude::*;
use spacegames::factories::{PirateShipFactory, WarshipFactory};
use spacegames::models::energy::{EnergySource, PlasmaReactor, SolarPanel};
use spacegames::models::engine::{Engine, PhotonDrive, PulseDrive};
use spacegames::models::weapon::{LaserCannon, PhotonCannon, Weapon};
use spacegames::{Battle, Outcome, Spaceship};

proptest! {
    /// Property: Plasma subtracts covered requests and refuses the rest untouched
    #[test]
    fn plasma_consumption_policy(remaining in 0u32..10_000, amount in 0u32..10_000) {
        let mut plasma = PlasmaReactor::with_volume(remaining);
        let left = plasma.consume(amount);

        if amount <= remaining {
            prop_assert_eq!(left, remaining - amount);
            prop_assert_eq!(plasma.remaining(), remaining - amount);
        } else {
            prop_assert_eq!(left, 0);
            prop_assert_eq!(plasma.remaining(), remaining);
        }
    }

    /// Property: A plasma reactor never reports more than it started with
    #[test]
    fn plasma_drains_monotonically(amounts in prop::collection::vec(0u32..60, 0..40)) {
        let mut plasma = PlasmaReactor::new();
        let mut previous = plasma.remaining();
        for amount in amounts {
            plasma.consume(amount);
            prop_assert!(plasma.remaining() <= previous);
            previous = plasma.remaining();
        }
    }

    /// Property: Solar output never changes
    #[test]
    fn solar_is_endless(amounts in prop::collection::vec(any::<u32>(), 1..20)) {
        let mut solar = SolarPanel::new();
        for amount in amounts {
            prop_assert_eq!(solar.consume(amount), 100);
        }
    }

    /// Property: Laser damage is fixed
    #[test]
    fn laser_always_thirty(shots in 1usize..200) {
        let mut laser = LaserCannon::new();
        for _ in 0..shots {
            prop_assert_eq!(laser.fire(), 30);
        }
    }

    /// Property: Photon damage is a miss or a hit in [10, 80)
    #[test]
    fn photon_damage_band(seed in any::<u64>()) {
        let mut cannon = PhotonCannon::with_seed(seed);
        for _ in 0..100 {
            let dmg = cannon.fire();
            prop_assert!(dmg == 0 || (10..80).contains(&dmg));
        }
    }

    /// Property: Pulse drive moves 5 and burns 1 while fuel lasts
    #[test]
    fn pulse_drive_is_steady(volume in 1u32..500) {
        let mut drive = PulseDrive::new();
        let mut plasma = PlasmaReactor::with_volume(volume);
        for tick in 1..=volume {
            prop_assert_eq!(drive.travel(&mut plasma), 5);
            prop_assert_eq!(plasma.remaining(), volume - tick);
        }
    }

    /// Property: Photon drive distance is a multiple of its rate below 30
    #[test]
    fn photon_drive_distance_band(seed in any::<u64>()) {
        let mut drive = PhotonDrive::with_seed(seed);
        let mut plasma = PlasmaReactor::new();
        for _ in 0..100 {
            let distance = drive.travel(&mut plasma);
            prop_assert!(distance < 30);
            prop_assert_eq!(distance % 3, 0);
        }
    }

    /// Property: Health equals initial minus the sum of damage, in any order
    #[test]
    fn damage_is_additive(damages in prop::collection::vec(0u32..1_000, 0..50)) {
        let mut forward = Spaceship::new("A", &mut WarshipFactory::new());
        let mut backward = Spaceship::new("B", &mut WarshipFactory::new());
        for d in &damages {
            forward.take_damage(*d);
        }
        for d in damages.iter().rev() {
            backward.take_damage(*d);
        }
        let total: i32 = damages.iter().map(|d| *d as i32).sum();
        prop_assert_eq!(forward.health(), 500 - total);
        prop_assert_eq!(backward.health(), forward.health());
    }

    /// Property: Every pirate/warship fight ends with a decided battle
    #[test]
    fn pirate_fight_always_terminates(seed in any::<u64>()) {
        let mut pirate = Spaceship::new("P", &mut PirateShipFactory::with_seed(seed));
        let mut warship = Spaceship::new("W", &mut WarshipFactory::new());
        let report = Battle::new(&mut pirate, &mut warship).fight();

        prop_assert!(!report.exhausted);
        prop_assert!(report.rounds <= 7);
        let alive = [pirate.is_alive(), warship.is_alive()];
        match report.outcome {
            Outcome::Draw => prop_assert_eq!(alive, [false, false]),
            Outcome::Winner(_) => prop_assert!(alive.iter().filter(|a| **a).count() == 1),
        }
    }

    /// Property: Race winner is the ship with strictly greater distance
    #[test]
    fn race_winner_has_greater_distance(seed in any::<u64>()) {
        let mut pirate = Spaceship::new("P", &mut PirateShipFactory::with_seed(seed));
        let mut warship = Spaceship::new("W", &mut WarshipFactory::new());
        let report = Battle::new(&mut pirate, &mut warship).race();

        prop_assert_eq!(report.second_distance, 500);
        match report.outcome.winner() {
            Some(spacegames::Contender::First) => prop_assert!(report.first_distance > 500),
            Some(spacegames::Contender::Second) => prop_assert!(report.first_distance < 500),
            None => prop_assert_eq!(report.first_distance, 500),
        }
    }
}
