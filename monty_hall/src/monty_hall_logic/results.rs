use strum_macros::{Display, EnumIter};

#[repr(C)]
#[derive(Clone, Copy, Eq, PartialEq, Hash, Display, EnumIter, Debug)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    Switch,
    Stay,
}

impl Strategy {
    pub fn from_switched(switched: bool) -> Strategy {
        if switched {
            Strategy::Switch
        } else {
            Strategy::Stay
        }
    }

    pub fn is_switch(&self) -> bool {
        self == &Strategy::Switch
    }
}

/// Tally of a batch of non-interactive rounds played with one strategy.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct SimulationReport {
    strategy: Strategy,
    rounds: u64,
    wins: u64,
}

impl SimulationReport {
    pub fn new(strategy: Strategy) -> SimulationReport {
        SimulationReport {
            strategy,
            rounds: 0,
            wins: 0,
        }
    }

    pub fn record(&mut self, won: bool) {
        self.rounds += 1;
        if won {
            self.wins += 1;
        }
    }

    pub fn get_strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn get_rounds(&self) -> u64 {
        self.rounds
    }

    pub fn get_wins(&self) -> u64 {
        self.wins
    }

    pub fn get_losses(&self) -> u64 {
        self.rounds - self.wins
    }

    /// `None` when no round was played.
    pub fn win_rate(&self) -> Option<f64> {
        ratio(self.wins, self.rounds)
    }

    pub fn loss_rate(&self) -> Option<f64> {
        ratio(self.get_losses(), self.rounds)
    }
}

pub(crate) fn ratio(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(part as f64 / whole as f64)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn strategy_names() {
        let names: Vec<String> = Strategy::iter().map(|s| s.to_string()).collect();
        assert_eq!(vec!["switch", "stay"], names);
    }

    #[test]
    fn strategy_from_switched() {
        assert_eq!(Strategy::Switch, Strategy::from_switched(true));
        assert_eq!(Strategy::Stay, Strategy::from_switched(false));
        assert!(Strategy::Switch.is_switch());
        assert!(!Strategy::Stay.is_switch());
    }

    #[test]
    fn empty_report_has_no_rates() {
        let report = SimulationReport::new(Strategy::Stay);
        assert_eq!(None, report.win_rate());
        assert_eq!(None, report.loss_rate());
    }

    #[test]
    fn report_rates() {
        let mut report = SimulationReport::new(Strategy::Switch);
        report.record(true);
        report.record(true);
        report.record(false);
        report.record(true);
        assert_eq!(4, report.get_rounds());
        assert_eq!(3, report.get_wins());
        assert_eq!(1, report.get_losses());
        assert_eq!(Some(0.75), report.win_rate());
        assert_eq!(Some(0.25), report.loss_rate());
    }
}
