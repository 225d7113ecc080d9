use crate::battle::{FightReport, RaceReport};
use crate::io::OutputWriter;
use crate::models::spaceship::Spaceship;

pub struct GamesPresenter;

impl GamesPresenter {
    pub fn show_welcome(output: &mut dyn OutputWriter) {
        output.writeln("Welcome to the 76th Space Games...");
    }

    pub fn show_contenders(first: &Spaceship, second: &Spaceship, output: &mut dyn OutputWriter) {
        output.writeln(&format!("First contender: {}", first));
        output.writeln(&format!("Second contender: {}", second));
    }

    pub fn show_start(output: &mut dyn OutputWriter) {
        output.writeln("Let's go!");
    }

    pub fn show_race_result(
        winner: Option<&Spaceship>,
        report: &RaceReport,
        output: &mut dyn OutputWriter,
    ) {
        match winner {
            Some(ship) => output.writeln(&format!("Please welcome the winner of the race, {}", ship)),
            None => output.writeln("The race ends in a draw"),
        }
        output.writeln(&format!(
            "   (distance {} to {})",
            report.first_distance, report.second_distance
        ));
    }

    pub fn show_fight_announcement(output: &mut dyn OutputWriter) {
        output.writeln("Let the deadly battle begin!");
    }

    pub fn show_fight_result(
        winner: Option<&Spaceship>,
        report: &FightReport,
        output: &mut dyn OutputWriter,
    ) {
        match winner {
            Some(ship) => output.writeln(&format!(
                "Please welcome the winner of the battle, {} ({} hull left)",
                ship,
                ship.health()
            )),
            None if report.exhausted => output.writeln(&format!(
                "Nobody landed a blow in {} rounds, the battle ends in a draw",
                report.rounds
            )),
            None => output.writeln("The battle ends in a draw"),
        }
        output.writeln(&format!("   ({} rounds fought)", report.rounds));
    }
}
