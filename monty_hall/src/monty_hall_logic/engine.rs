use super::error::{check_door, MontyHallResult};
use super::game_state::{GameState, Phase, DOOR_COUNT};
use super::generalized::GeneralizedGame;
use super::random::{pick_from, RandomSource};
use super::results::{SimulationReport, Strategy};
use super::statistics::SessionStatistics;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace, warn};

/// Drives three-door rounds and keeps the statistics of one session.
///
/// Rounds are plain [`GameState`] values handed back and forth: the engine
/// never holds on to them, so a rejected move leaves the caller's state as
/// it was.
pub struct MontyHallEngine<S: RandomSource = StdRng> {
    random: S,
    statistics: SessionStatistics,
}

impl MontyHallEngine<StdRng> {
    pub fn new() -> MontyHallEngine<StdRng> {
        MontyHallEngine::with_random_source(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> MontyHallEngine<StdRng> {
        MontyHallEngine::with_random_source(StdRng::seed_from_u64(seed))
    }
}

impl Default for MontyHallEngine<StdRng> {
    fn default() -> Self {
        MontyHallEngine::new()
    }
}

impl<S: RandomSource> MontyHallEngine<S> {
    pub fn with_random_source(random: S) -> MontyHallEngine<S> {
        MontyHallEngine {
            random,
            statistics: SessionStatistics::new(),
        }
    }

    pub fn new_round(&mut self) -> GameState {
        let winner_index = self.random.pick_index(DOOR_COUNT);
        trace!(winner_index, "new round");
        GameState::new_unchecked(winner_index)
    }

    pub fn pick_first(&mut self, state: GameState, door: usize) -> MontyHallResult<GameState> {
        state.check_phase(Phase::AwaitingFirstPick)?;
        check_door(door, DOOR_COUNT)?;
        let state = self.open_door(state, door);
        debug!(
            first_choice = door,
            opened_door = ?state.get_opened_door(),
            "host opened a door"
        );
        Ok(state)
    }

    pub fn pick_final(&mut self, state: GameState, door: usize) -> MontyHallResult<GameState> {
        state.check_phase(Phase::AwaitingFinalPick)?;
        check_door(door, DOOR_COUNT)?;
        let state = state.with_final_pick(door);
        if state.is_invalid() {
            warn!(door, "the opened door was selected, the round does not count");
        } else if let (Some(switched), Some(won)) = (state.get_switched(), state.get_won()) {
            self.statistics.record(Strategy::from_switched(switched), won);
            debug!(final_choice = door, switched, won, "round resolved");
        }
        Ok(state)
    }

    pub fn win_rate(&self, strategy: Strategy) -> Option<f64> {
        self.statistics.win_rate(strategy)
    }

    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    pub fn reset_statistics(&mut self) {
        self.statistics = SessionStatistics::new();
    }

    /// Win rate of `n_rounds` non-interactive rounds, `None` for zero rounds.
    /// Simulated rounds are not added to the session statistics.
    pub fn simulate(&mut self, n_rounds: u64, strategy: Strategy) -> Option<f64> {
        self.simulate_report(n_rounds, strategy).win_rate()
    }

    pub fn simulate_report(&mut self, n_rounds: u64, strategy: Strategy) -> SimulationReport {
        let mut report = SimulationReport::new(strategy);
        for _ in 0..n_rounds {
            let state = self.new_round();
            let first_choice = self.random.pick_index(DOOR_COUNT);
            let state = self.open_door(state, first_choice);
            let final_choice = match (strategy, state.get_switch_door()) {
                (Strategy::Switch, Some(switch_door)) => switch_door,
                _ => first_choice,
            };
            let state = state.with_final_pick(final_choice);
            report.record(state.get_won() == Some(true));
        }
        info!(
            %strategy,
            rounds = report.get_rounds(),
            wins = report.get_wins(),
            "simulation finished"
        );
        report
    }

    /// Plays one generalized round to the end and returns it for inspection.
    pub fn play_generalized_round(
        &mut self,
        door_count: usize,
        number_of_doors_to_open: usize,
        strategy: Strategy,
    ) -> MontyHallResult<GeneralizedGame> {
        let mut game =
            GeneralizedGame::new(door_count, number_of_doors_to_open, &mut self.random)?;
        game.open_doors(&mut self.random);
        if strategy.is_switch() {
            game.change_choice(&mut self.random);
        }
        Ok(game)
    }

    pub fn simulate_generalized(
        &mut self,
        door_count: usize,
        number_of_doors_to_open: usize,
        n_rounds: u64,
        strategy: Strategy,
    ) -> MontyHallResult<Option<f64>> {
        let report = self.simulate_generalized_report(
            door_count,
            number_of_doors_to_open,
            n_rounds,
            strategy,
        )?;
        Ok(report.win_rate())
    }

    pub fn simulate_generalized_report(
        &mut self,
        door_count: usize,
        number_of_doors_to_open: usize,
        n_rounds: u64,
        strategy: Strategy,
    ) -> MontyHallResult<SimulationReport> {
        GeneralizedGame::check_parameters(door_count, number_of_doors_to_open)?;
        let mut report = SimulationReport::new(strategy);
        for _ in 0..n_rounds {
            let game =
                self.play_generalized_round(door_count, number_of_doors_to_open, strategy)?;
            report.record(game.is_won());
        }
        info!(
            door_count,
            number_of_doors_to_open,
            %strategy,
            rounds = report.get_rounds(),
            wins = report.get_wins(),
            "generalized simulation finished"
        );
        Ok(report)
    }

    fn open_door(&mut self, state: GameState, first_choice: usize) -> GameState {
        let openable = state.openable_doors(first_choice);
        let opened_door = pick_from(&mut self.random, &openable);
        state.with_first_pick(first_choice, opened_door)
    }
}
