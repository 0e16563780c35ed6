mod monty_hall_logic;
pub use monty_hall_logic::engine::MontyHallEngine;
pub use monty_hall_logic::error::{MontyHallError, MontyHallResult};
pub use monty_hall_logic::game_state::{GameState, Phase, DOOR_COUNT};
pub use monty_hall_logic::generalized::{Door, GeneralizedGame};
pub use monty_hall_logic::random::RandomSource;
pub use monty_hall_logic::results::{SimulationReport, Strategy};
pub use monty_hall_logic::statistics::SessionStatistics;
