mod cli;
mod play;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{create_engine, strategies, Cli, Command};
use monty_hall::{GeneralizedGame, SimulationReport, DOOR_COUNT};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

const INVALID_PARAMETERS_HELP: &str = "n is the number of doors and k is the number of doors the host opens. \
     Since one door is already picked, k has to be at most n - 2, \
     so at least one door is left to switch to.";

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn simulate(games: u64, strategy: Option<cli::CliStrategy>, seed: Option<u64>) -> Result<()> {
    let mut engine = create_engine(seed);
    for strategy in strategies(strategy) {
        let report = engine.simulate_report(games, strategy);
        report::print_report(
            &report,
            GeneralizedGame::theoretical_win_rate(DOOR_COUNT, 1, strategy)?,
        );
    }
    Ok(())
}

fn simulate_generalized(
    doors: usize,
    opened: usize,
    games: u64,
    strategy: Option<cli::CliStrategy>,
    seed: Option<u64>,
    show_boards: bool,
) -> Result<()> {
    GeneralizedGame::check_parameters(doors, opened).context(INVALID_PARAMETERS_HELP)?;
    let mut engine = create_engine(seed);
    for strategy in strategies(strategy) {
        let report = if show_boards {
            let mut report = SimulationReport::new(strategy);
            for round in 1..=games {
                let game = engine.play_generalized_round(doors, opened, strategy)?;
                println!("Round {} ({}):\n{}", round, strategy, game);
                println!(
                    "{}",
                    if game.is_won() {
                        "The player wins!"
                    } else {
                        "The player loses!"
                    }
                );
                report.record(game.is_won());
            }
            report
        } else {
            engine.simulate_generalized_report(doors, opened, games, strategy)?
        };
        report::print_report(
            &report,
            GeneralizedGame::theoretical_win_rate(doors, opened, strategy)?,
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli, "parsed arguments");

    match cli.command {
        Command::Play { seed } => play::run(create_engine(seed)),
        Command::Simulate {
            games,
            strategy,
            seed,
        } => simulate(games, strategy, seed),
        Command::Generalized {
            doors,
            opened,
            games,
            strategy,
            seed,
            show_boards,
        } => simulate_generalized(doors, opened, games, strategy, seed, show_boards),
    }
}
