pub mod engine;
pub mod error;
pub mod game_state;
pub mod generalized;
pub mod random;
pub mod results;
pub mod statistics;
