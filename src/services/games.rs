use tracing::info;

use crate::battle::{Battle, FightReport, RaceReport};
use crate::factories::{PirateShipFactory, WarshipFactory};
use crate::io::{InputReader, OutputWriter};
use crate::models::constants::{DEFAULT_PIRATE_NAME, DEFAULT_WARSHIP_NAME};
use crate::models::errors::GamesResult;
use crate::models::spaceship::Spaceship;
use crate::ui::presenters::GamesPresenter;

const PAUSE_PROMPT: &str = "[press Enter]";

/// Settings for one run of the Space Games.
#[derive(Debug, Clone)]
pub struct GamesConfig {
    /// Seed for the pirate factory; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Wait for the player between stages.
    pub interactive: bool,
    pub pirate_name: String,
    pub warship_name: String,
}

impl Default for GamesConfig {
    fn default() -> Self {
        Self {
            seed: None,
            interactive: false,
            pirate_name: DEFAULT_PIRATE_NAME.to_string(),
            warship_name: DEFAULT_WARSHIP_NAME.to_string(),
        }
    }
}

/// What happened at the games, with winners already resolved to names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamesSummary {
    pub race: RaceReport,
    pub race_winner: Option<String>,
    pub fight: FightReport,
    pub fight_winner: Option<String>,
}

/// A pirate ship and a warship meet for one race and one fight.
pub struct SpaceGames {
    config: GamesConfig,
    pirate: Spaceship,
    warship: Spaceship,
}

impl SpaceGames {
    pub fn new(config: GamesConfig) -> Self {
        let mut pirate_factory = match config.seed {
            Some(seed) => PirateShipFactory::with_seed(seed),
            None => PirateShipFactory::new(),
        };
        let pirate = Spaceship::new(config.pirate_name.clone(), &mut pirate_factory);
        let warship = Spaceship::new(config.warship_name.clone(), &mut WarshipFactory::new());
        info!(pirate = %pirate, warship = %warship, seed = ?config.seed, "contenders built");

        Self {
            config,
            pirate,
            warship,
        }
    }

    pub fn pirate(&self) -> &Spaceship {
        &self.pirate
    }

    pub fn warship(&self) -> &Spaceship {
        &self.warship
    }

    /// Runs the whole programme: introductions, the race, then the fight.
    pub fn run(
        &mut self,
        io: &mut dyn InputReader,
        output: &mut dyn OutputWriter,
    ) -> GamesResult<GamesSummary> {
        let interactive = self.config.interactive;

        GamesPresenter::show_welcome(output);
        pause(interactive, io)?;

        GamesPresenter::show_contenders(&self.pirate, &self.warship, output);
        pause(interactive, io)?;

        let mut battle = Battle::new(&mut self.pirate, &mut self.warship);

        GamesPresenter::show_start(output);
        pause(interactive, io)?;

        let race = battle.race();
        let race_winner = battle.winner(race.outcome);
        GamesPresenter::show_race_result(race_winner, &race, output);
        let race_winner = race_winner.map(|ship| ship.to_string());
        pause(interactive, io)?;

        GamesPresenter::show_fight_announcement(output);
        pause(interactive, io)?;

        let fight = battle.fight();
        let fight_winner = battle.winner(fight.outcome);
        GamesPresenter::show_fight_result(fight_winner, &fight, output);
        let fight_winner = fight_winner.map(|ship| ship.to_string());
        pause(interactive, io)?;

        Ok(GamesSummary {
            race,
            race_winner,
            fight,
            fight_winner,
        })
    }
}

fn pause(interactive: bool, io: &mut dyn InputReader) -> GamesResult<()> {
    if interactive {
        io.read_line(PAUSE_PROMPT)?;
    }
    Ok(())
}
