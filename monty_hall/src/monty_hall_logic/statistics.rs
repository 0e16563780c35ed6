use super::results::{ratio, Strategy};

/// Win and game counters of the rounds a session resolved, split by whether
/// the player switched.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
pub struct SessionStatistics {
    switch_wins: u64,
    switch_games: u64,
    stay_wins: u64,
    stay_games: u64,
}

impl SessionStatistics {
    pub fn new() -> SessionStatistics {
        SessionStatistics::default()
    }

    pub(crate) fn record(&mut self, strategy: Strategy, won: bool) {
        let (wins, games) = match strategy {
            Strategy::Switch => (&mut self.switch_wins, &mut self.switch_games),
            Strategy::Stay => (&mut self.stay_wins, &mut self.stay_games),
        };
        *games += 1;
        if won {
            *wins += 1;
        }
    }

    pub fn get_wins(&self, strategy: Strategy) -> u64 {
        match strategy {
            Strategy::Switch => self.switch_wins,
            Strategy::Stay => self.stay_wins,
        }
    }

    pub fn get_games(&self, strategy: Strategy) -> u64 {
        match strategy {
            Strategy::Switch => self.switch_games,
            Strategy::Stay => self.stay_games,
        }
    }

    pub fn get_games_finished(&self) -> u64 {
        self.switch_games + self.stay_games
    }

    /// Wins over games for `strategy`, or `None` while no such game was played.
    pub fn win_rate(&self, strategy: Strategy) -> Option<f64> {
        ratio(self.get_wins(strategy), self.get_games(strategy))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_statistics_are_empty() {
        let statistics = SessionStatistics::new();
        assert_eq!(0, statistics.get_games_finished());
        assert_eq!(None, statistics.win_rate(Strategy::Switch));
        assert_eq!(None, statistics.win_rate(Strategy::Stay));
    }

    #[test]
    fn buckets_are_separate() {
        let mut statistics = SessionStatistics::new();
        statistics.record(Strategy::Switch, true);
        statistics.record(Strategy::Switch, false);
        statistics.record(Strategy::Switch, true);
        statistics.record(Strategy::Stay, false);

        assert_eq!(2, statistics.get_wins(Strategy::Switch));
        assert_eq!(3, statistics.get_games(Strategy::Switch));
        assert_eq!(0, statistics.get_wins(Strategy::Stay));
        assert_eq!(1, statistics.get_games(Strategy::Stay));
        assert_eq!(4, statistics.get_games_finished());
        assert_eq!(Some(0.0), statistics.win_rate(Strategy::Stay));
        assert_eq!(Some(2.0 / 3.0), statistics.win_rate(Strategy::Switch));
    }
}
