use super::error::{MontyHallError, MontyHallResult};
use super::random::{pick_from, RandomSource};
use super::results::Strategy;
use std::fmt;

#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
pub struct Door {
    contains_car: bool,
    is_opened: bool,
}

impl Door {
    pub fn contains_car(&self) -> bool {
        self.contains_car
    }

    pub fn is_opened(&self) -> bool {
        self.is_opened
    }
}

/// A round with `n` doors where the host opens `k` of them before the player decides.
#[derive(Clone, Debug)]
pub struct GeneralizedGame {
    doors: Vec<Door>,
    number_of_doors_to_open: usize,
    winner_index: usize,
    first_choice: usize,
    chosen_door: usize,
}

impl GeneralizedGame {
    pub fn check_parameters(
        door_count: usize,
        number_of_doors_to_open: usize,
    ) -> MontyHallResult<()> {
        match door_count.checked_sub(2) {
            Some(max_to_open) if number_of_doors_to_open <= max_to_open => Ok(()),
            _ => Err(MontyHallError::InvalidParameters {
                doors: door_count,
                opened: number_of_doors_to_open,
            }),
        }
    }

    /// Hides the car and makes the player's first pick, both uniformly.
    pub fn new<R: RandomSource + ?Sized>(
        door_count: usize,
        number_of_doors_to_open: usize,
        random: &mut R,
    ) -> MontyHallResult<GeneralizedGame> {
        GeneralizedGame::check_parameters(door_count, number_of_doors_to_open)?;
        let mut doors = vec![Door::default(); door_count];
        let winner_index = random.pick_index(door_count);
        doors[winner_index].contains_car = true;
        let first_choice = random.pick_index(door_count);
        Ok(GeneralizedGame {
            doors,
            number_of_doors_to_open,
            winner_index,
            first_choice,
            chosen_door: first_choice,
        })
    }

    /// Opens the remaining of the `k` doors, never the car and never the player's pick.
    pub fn open_doors<R: RandomSource + ?Sized>(&mut self, random: &mut R) {
        let already_opened = self.get_number_of_opened_doors();
        let mut openable: Vec<usize> = (0..self.doors.len())
            .filter(|&i| {
                i != self.chosen_door && !self.doors[i].is_opened && !self.doors[i].contains_car
            })
            .collect();
        for _ in already_opened..self.number_of_doors_to_open {
            let door = pick_from(random, &openable);
            if let Some(index) = openable.iter().position(|&i| i == door) {
                openable.swap_remove(index);
            }
            self.doors[door].is_opened = true;
        }
    }

    /// Moves the pick to one of the other closed doors, uniformly.
    pub fn change_choice<R: RandomSource + ?Sized>(&mut self, random: &mut R) {
        let candidates: Vec<usize> = (0..self.doors.len())
            .filter(|&i| i != self.chosen_door && !self.doors[i].is_opened)
            .collect();
        if !candidates.is_empty() {
            self.chosen_door = pick_from(random, &candidates);
        }
    }

    pub fn is_won(&self) -> bool {
        self.doors[self.chosen_door].contains_car
    }

    pub fn is_switched(&self) -> bool {
        self.chosen_door != self.first_choice
    }

    pub fn get_doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn get_door_count(&self) -> usize {
        self.doors.len()
    }

    pub fn get_number_of_opened_doors(&self) -> usize {
        self.doors.iter().filter(|door| door.is_opened).count()
    }

    pub fn get_winner_index(&self) -> usize {
        self.winner_index
    }

    pub fn get_first_choice(&self) -> usize {
        self.first_choice
    }

    pub fn get_chosen_door(&self) -> usize {
        self.chosen_door
    }

    /// Probability of winning with `strategy`.
    pub fn theoretical_win_rate(
        door_count: usize,
        number_of_doors_to_open: usize,
        strategy: Strategy,
    ) -> MontyHallResult<f64> {
        GeneralizedGame::check_parameters(door_count, number_of_doors_to_open)?;
        let n = door_count as f64;
        Ok(match strategy {
            Strategy::Stay => 1.0 / n,
            Strategy::Switch => {
                // at least one closed door is left to switch to
                let remaining = (door_count - 1 - number_of_doors_to_open) as f64;
                (n - 1.0) / (n * remaining)
            }
        })
    }
}

// [C] car, [ ] opened, [X] closed goat; the marker line shows the current
// pick with ^ and an abandoned first pick with a dot.
impl fmt::Display for GeneralizedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for door in &self.doors {
            let repr = if door.contains_car {
                'C'
            } else if door.is_opened {
                ' '
            } else {
                'X'
            };
            write!(f, "[{}]", repr)?;
        }
        writeln!(f)?;
        let markers: String = (0..self.doors.len())
            .map(|i| {
                if i == self.chosen_door {
                    " ^ "
                } else if i == self.first_choice {
                    " . "
                } else {
                    "   "
                }
            })
            .collect();
        write!(f, "{}", markers.trim_end())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::monty_hall_logic::random::scripted;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn check_invalid_parameters_error(door_count: usize, number_of_doors_to_open: usize) {
        let mut random = StdRng::seed_from_u64(0);
        let result = GeneralizedGame::new(door_count, number_of_doors_to_open, &mut random);
        assert_eq!(
            Some(MontyHallError::InvalidParameters {
                doors: door_count,
                opened: number_of_doors_to_open
            }),
            result.err()
        );
    }

    #[test]
    fn too_many_doors_to_open() {
        check_invalid_parameters_error(3, 2);
        check_invalid_parameters_error(10, 9);
        check_invalid_parameters_error(1, 0);
        check_invalid_parameters_error(0, 0);
        assert!(GeneralizedGame::check_parameters(2, 0).is_ok());
        assert!(GeneralizedGame::check_parameters(100, 98).is_ok());
    }

    #[test]
    fn opened_doors_follow_the_host_rule() {
        let mut random = StdRng::seed_from_u64(11);
        for _ in 0..1000 {
            let mut game = GeneralizedGame::new(7, 4, &mut random).unwrap();
            game.open_doors(&mut random);
            assert_eq!(4, game.get_number_of_opened_doors());
            assert!(!game.get_doors()[game.get_winner_index()].is_opened());
            assert!(!game.get_doors()[game.get_first_choice()].is_opened());
            assert_eq!(
                1,
                game.get_doors().iter().filter(|door| door.contains_car()).count()
            );
        }
    }

    #[test]
    fn opening_twice_opens_nothing_new() {
        let mut random = StdRng::seed_from_u64(5);
        let mut game = GeneralizedGame::new(5, 2, &mut random).unwrap();
        game.open_doors(&mut random);
        game.open_doors(&mut random);
        assert_eq!(2, game.get_number_of_opened_doors());
    }

    #[test]
    fn switching_never_lands_on_an_opened_door() {
        let mut random = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let mut game = GeneralizedGame::new(6, 3, &mut random).unwrap();
            game.open_doors(&mut random);
            game.change_choice(&mut random);
            assert!(game.is_switched());
            assert!(!game.get_doors()[game.get_chosen_door()].is_opened());
        }
    }

    #[test]
    fn scripted_round() {
        // car behind 3, first pick 0; openable [1, 2, 4]: draw 0 opens 1 and
        // leaves [4, 2], draw 1 opens 2; switch candidates [3, 4], draw 0 -> 3
        let mut random = scripted(vec![3, 0, 0, 1, 0]);
        let mut game = GeneralizedGame::new(5, 2, &mut random).unwrap();
        game.open_doors(&mut random);
        assert!(game.get_doors()[1].is_opened());
        assert!(game.get_doors()[2].is_opened());
        assert!(!game.is_won());
        game.change_choice(&mut random);
        assert_eq!(3, game.get_chosen_door());
        assert!(game.is_won());
        assert_eq!("[X][ ][ ][C][X]\n .        ^", game.to_string());
    }

    #[test]
    fn display_before_switch() {
        let mut random = scripted(vec![1, 0]);
        let mut game = GeneralizedGame::new(3, 1, &mut random).unwrap();
        game.open_doors(&mut random);
        assert_eq!("[X][C][ ]\n ^", game.to_string());
    }

    #[test]
    fn forced_host_doors_need_no_draw() {
        // car 0, first pick 1; openable [2, 3]: draw 1 opens 3, then 2 is the only one left
        let mut random = scripted(vec![0, 1, 1]);
        let mut game = GeneralizedGame::new(4, 2, &mut random).unwrap();
        game.open_doors(&mut random);
        assert!(game.get_doors()[2].is_opened());
        assert!(game.get_doors()[3].is_opened());
        // the only door left to switch to is the car
        game.change_choice(&mut random);
        assert_eq!(0, game.get_chosen_door());
        assert!(game.is_won());
    }

    #[test]
    fn theoretical_rates() {
        let test_cases = vec![
            (3, 1, Strategy::Switch, 2.0 / 3.0),
            (3, 1, Strategy::Stay, 1.0 / 3.0),
            (10, 8, Strategy::Switch, 0.9),
            (10, 8, Strategy::Stay, 0.1),
            (4, 0, Strategy::Switch, 0.25),
        ];

        for (door_count, to_open, strategy, expected) in test_cases.iter() {
            let rate =
                GeneralizedGame::theoretical_win_rate(*door_count, *to_open, *strategy).unwrap();
            assert!((rate - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn theoretical_rate_rejects_invalid_parameters() {
        assert_eq!(
            Err(MontyHallError::InvalidParameters {
                doors: 3,
                opened: 3
            }),
            GeneralizedGame::theoretical_win_rate(3, 3, Strategy::Switch)
        );
        assert_eq!(
            Err(MontyHallError::InvalidParameters {
                doors: 3,
                opened: 2
            }),
            GeneralizedGame::theoretical_win_rate(3, 2, Strategy::Stay)
        );
    }
}
