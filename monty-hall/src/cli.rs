use clap::{Parser, Subcommand, ValueEnum};
use monty_hall::{MontyHallEngine, Strategy};
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
#[command(
    name = "monty-hall",
    version,
    about = "Play the Monty Hall puzzle or simulate it many times"
)]
pub struct Cli {
    /// Log every move the engine makes
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rounds one by one and follow the win rate of each strategy
    Play {
        /// Seed of the random source, for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simulate the classic three-door game
    Simulate {
        /// Number of rounds per strategy
        #[arg(short, long, default_value_t = 10_000)]
        games: u64,

        /// Strategy to simulate, both when omitted
        #[arg(short, long, value_enum)]
        strategy: Option<CliStrategy>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Simulate n doors where the host opens k of them
    Generalized {
        /// Number of doors (n)
        #[arg(short = 'n', long, default_value_t = 3)]
        doors: usize,

        /// Number of doors the host opens (k), at most n - 2
        #[arg(short = 'k', long, default_value_t = 1)]
        opened: usize,

        #[arg(short, long, default_value_t = 10_000)]
        games: u64,

        #[arg(short, long, value_enum)]
        strategy: Option<CliStrategy>,

        #[arg(long)]
        seed: Option<u64>,

        /// Print the doors of every round
        #[arg(long)]
        show_boards: bool,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliStrategy {
    Switch,
    Stay,
}

impl From<CliStrategy> for Strategy {
    fn from(strategy: CliStrategy) -> Strategy {
        match strategy {
            CliStrategy::Switch => Strategy::Switch,
            CliStrategy::Stay => Strategy::Stay,
        }
    }
}

pub fn strategies(choice: Option<CliStrategy>) -> Vec<Strategy> {
    match choice {
        Some(strategy) => vec![strategy.into()],
        None => Strategy::iter().collect(),
    }
}

pub fn create_engine(seed: Option<u64>) -> MontyHallEngine {
    match seed {
        Some(seed) => MontyHallEngine::with_seed(seed),
        None => MontyHallEngine::new(),
    }
}
