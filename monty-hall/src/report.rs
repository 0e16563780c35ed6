use monty_hall::{SessionStatistics, SimulationReport, Strategy};
use strum::IntoEnumIterator;

pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.2}%", rate * 100.0),
        None => String::from("n/a"),
    }
}

pub fn print_report(report: &SimulationReport, expected_win_rate: f64) {
    let msg = if report.get_strategy().is_switch() {
        "always"
    } else {
        "never"
    };
    println!(
        "Win rate if the player {} switches doors ({} simulations):",
        msg,
        report.get_rounds()
    );
    println!(
        "  win a car:  {:>8} ({} rounds)",
        format_rate(report.win_rate()),
        report.get_wins()
    );
    println!(
        "  win a goat: {:>8} ({} rounds)",
        format_rate(report.loss_rate()),
        report.get_losses()
    );
    println!("  expected:   {:>8}", format_rate(Some(expected_win_rate)));
}

pub fn print_session(statistics: &SessionStatistics) {
    println!(
        "Games finished: {}, games you switched: {}, games you stayed: {}",
        statistics.get_games_finished(),
        statistics.get_games(Strategy::Switch),
        statistics.get_games(Strategy::Stay)
    );
    for strategy in Strategy::iter() {
        println!(
            "  {:<6} {} wins, win rate {}",
            strategy,
            statistics.get_wins(strategy),
            format_rate(statistics.win_rate(strategy))
        );
    }
}
