use spacegames::cli::args;
use spacegames::io::TerminalIO;
use spacegames::services::games::SpaceGames;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = args::parse();

    let mut games = SpaceGames::new(args.into());
    games.run(&mut TerminalIO, &mut TerminalIO)?;
    Ok(())
}
