use crate::report;
use anyhow::Result;
use dialoguer::Select;
use monty_hall::{GameState, MontyHallEngine, RandomSource, DOOR_COUNT};

const QUIT: &str = "Quit";

pub fn run<S: RandomSource>(mut engine: MontyHallEngine<S>) -> Result<()> {
    loop {
        let state = engine.new_round();
        println!("\nNew game started, pick any door.");
        let first_choice = match select_door("Pick a door", &state)? {
            Some(door) => door,
            None => break,
        };

        let state = engine.pick_first(state, first_choice)?;
        if let Some(opened_door) = state.get_opened_door() {
            println!(
                "You chose door {} and the host opened door {}, it hides a goat.",
                first_choice + 1,
                opened_door + 1
            );
        }
        let final_choice = match select_door("Decide your final door", &state)? {
            Some(door) => door,
            None => break,
        };

        let state = engine.pick_final(state, final_choice)?;
        if state.is_invalid() {
            println!("You selected the opened door. This game doesn't count.");
            continue;
        }
        println!("{}", describe_outcome(&state));
        report::print_session(engine.statistics());
    }

    println!();
    report::print_session(engine.statistics());
    Ok(())
}

fn select_door(prompt: &str, state: &GameState) -> Result<Option<usize>> {
    let mut items: Vec<String> = (0..DOOR_COUNT).map(|door| door_label(state, door)).collect();
    items.push(String::from(QUIT));
    let selection = Select::new()
        .with_prompt(prompt)
        .items(items.as_slice())
        .default(0)
        .interact()?;
    Ok(if selection < DOOR_COUNT {
        Some(selection)
    } else {
        None
    })
}

fn door_label(state: &GameState, door: usize) -> String {
    if state.get_opened_door() == Some(door) {
        format!("Door {} (opened, goat)", door + 1)
    } else if state.get_first_choice() == Some(door) {
        format!("Door {} (your first pick)", door + 1)
    } else {
        format!("Door {}", door + 1)
    }
}

fn describe_outcome(state: &GameState) -> String {
    let msg = if state.get_switched() == Some(true) {
        " "
    } else {
        " NOT "
    };
    let prize = if state.get_won() == Some(true) {
        "CAR"
    } else {
        "GOAT"
    };
    let door = state.get_final_choice().map_or(0, |door| door + 1);
    format!(
        "You decided{}to switch and chose door #{}. You got a {}! The car was behind door #{}.",
        msg,
        door,
        prize,
        state.get_winner_index() + 1
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn played_round(winner: usize, first: usize, last: usize) -> GameState {
        let mut engine = MontyHallEngine::with_seed(0);
        let state = engine
            .pick_first(GameState::with_winner(winner).unwrap(), first)
            .unwrap();
        engine.pick_final(state, last).unwrap()
    }

    #[test]
    fn labels_mark_the_pick_and_the_opened_door() {
        let mut engine = MontyHallEngine::with_seed(0);
        let state = engine
            .pick_first(GameState::with_winner(1).unwrap(), 0)
            .unwrap();
        assert_eq!("Door 1 (your first pick)", door_label(&state, 0));
        assert_eq!("Door 2", door_label(&state, 1));
        assert_eq!("Door 3 (opened, goat)", door_label(&state, 2));
    }

    #[test]
    fn outcome_after_switching_to_the_car() {
        assert_eq!(
            "You decided to switch and chose door #2. You got a CAR! The car was behind door #2.",
            describe_outcome(&played_round(1, 0, 1))
        );
    }

    #[test]
    fn outcome_after_staying_on_a_goat() {
        assert_eq!(
            "You decided NOT to switch and chose door #1. You got a GOAT! The car was behind door #2.",
            describe_outcome(&played_round(1, 0, 0))
        );
    }
}
