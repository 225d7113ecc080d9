use clap::Parser;

use crate::models::constants::{DEFAULT_PIRATE_NAME, DEFAULT_WARSHIP_NAME};
use crate::services::games::GamesConfig;

#[derive(Debug, Parser)]
#[command(name = "spacegames", about = "A pirate ship and a warship race, then fight")]
pub struct Args {
    /// Seed for the pirate ship's random parts
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Wait for Enter between stages
    #[arg(short, long)]
    pub interactive: bool,

    /// Name of the pirate ship
    #[arg(long, default_value = DEFAULT_PIRATE_NAME)]
    pub pirate_name: String,

    /// Name of the warship
    #[arg(long, default_value = DEFAULT_WARSHIP_NAME)]
    pub warship_name: String,
}

impl From<Args> for GamesConfig {
    fn from(args: Args) -> Self {
        GamesConfig {
            seed: args.seed,
            interactive: args.interactive,
            pirate_name: args.pirate_name,
            warship_name: args.warship_name,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
