//! Battle controller
//!
//! Runs the two contests between a pair of ships: a fixed-length race and a
//! fight to the death. Each contest runs at most once per battle; asking for
//! it again returns the recorded report.

use tracing::{debug, info, warn};

use crate::models::constants::{MAX_FIGHT_ROUNDS, RACE_ROUNDS};
use crate::models::spaceship::Spaceship;

/// One of the two ships taking part in a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contender {
    First,
    Second,
}

/// Terminal result of a race or a fight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Contender),
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Contender> {
        match self {
            Outcome::Winner(contender) => Some(*contender),
            Outcome::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaceReport {
    pub outcome: Outcome,
    pub first_distance: u32,
    pub second_distance: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FightReport {
    pub outcome: Outcome,
    /// Number of full rounds fought.
    pub rounds: u32,
    /// True when the round cap ended the fight with both ships alive.
    pub exhausted: bool,
}

/// Referee for a race and a fight between two borrowed ships.
pub struct Battle<'a> {
    first: &'a mut Spaceship,
    second: &'a mut Spaceship,
    fight_round_cap: u32,
    race: Option<RaceReport>,
    fight: Option<FightReport>,
}

impl<'a> Battle<'a> {
    pub fn new(first: &'a mut Spaceship, second: &'a mut Spaceship) -> Self {
        Self {
            first,
            second,
            fight_round_cap: MAX_FIGHT_ROUNDS,
            race: None,
            fight: None,
        }
    }

    /// Override the number of rounds after which a fight is called a draw.
    #[must_use]
    pub fn with_fight_round_cap(mut self, cap: u32) -> Self {
        self.fight_round_cap = cap;
        self
    }

    pub fn ship(&self, contender: Contender) -> &Spaceship {
        match contender {
            Contender::First => &*self.first,
            Contender::Second => &*self.second,
        }
    }

    /// Maps an outcome back to the winning ship, `None` for a draw.
    pub fn winner(&self, outcome: Outcome) -> Option<&Spaceship> {
        outcome.winner().map(|contender| self.ship(contender))
    }

    pub fn race_report(&self) -> Option<RaceReport> {
        self.race
    }

    pub fn fight_report(&self) -> Option<FightReport> {
        self.fight
    }

    /// Races both ships for a fixed number of rounds.
    ///
    /// Both ships move every round regardless of health. The longer total
    /// distance wins; equal totals are a draw.
    pub fn race(&mut self) -> RaceReport {
        if let Some(report) = self.race {
            return report;
        }

        let mut first_distance: u32 = 0;
        let mut second_distance: u32 = 0;
        for round in 1..=RACE_ROUNDS {
            let first_leg = self.first.travel();
            let second_leg = self.second.travel();
            first_distance += first_leg;
            second_distance += second_leg;
            debug!(round, first_leg, second_leg, first_distance, second_distance, "race round");
        }

        let outcome = if first_distance > second_distance {
            Outcome::Winner(Contender::First)
        } else if second_distance > first_distance {
            Outcome::Winner(Contender::Second)
        } else {
            Outcome::Draw
        };
        info!(?outcome, first_distance, second_distance, "race finished");

        let report = RaceReport {
            outcome,
            first_distance,
            second_distance,
        };
        self.race = Some(report);
        report
    }

    /// Fights until at least one ship is destroyed.
    ///
    /// The first ship always shoots first, and both ships shoot exactly once
    /// per round: survival is only checked when a new round starts. If both
    /// ships are down after the same round, or the round cap is reached with
    /// both still flying, the fight is a draw.
    pub fn fight(&mut self) -> FightReport {
        if let Some(report) = self.fight {
            return report;
        }

        let mut rounds = 0;
        let mut exhausted = false;
        while self.first.is_alive() && self.second.is_alive() {
            if rounds >= self.fight_round_cap {
                warn!(rounds, "fight reached round cap, calling it a draw");
                exhausted = true;
                break;
            }
            rounds += 1;

            let first_hit = self.first.shoot();
            self.second.take_damage(first_hit);
            let second_hit = self.second.shoot();
            self.first.take_damage(second_hit);

            debug!(
                round = rounds,
                first_hit,
                second_hit,
                first_health = self.first.health(),
                second_health = self.second.health(),
                "fight round"
            );
        }

        let outcome = if exhausted {
            Outcome::Draw
        } else if self.first.is_alive() {
            Outcome::Winner(Contender::First)
        } else if self.second.is_alive() {
            Outcome::Winner(Contender::Second)
        } else {
            Outcome::Draw
        };
        info!(?outcome, rounds, "fight finished");

        let report = FightReport {
            outcome,
            rounds,
            exhausted,
        };
        self.fight = Some(report);
        report
    }
}
