use super::error::{check_door, MontyHallError, MontyHallResult};
use strum_macros::Display;

pub const DOOR_COUNT: usize = 3;

#[repr(C)]
#[derive(Clone, Copy, Eq, PartialEq, Display, Debug)]
pub enum Phase {
    AwaitingFirstPick,
    AwaitingFinalPick,
    Resolved,
    Invalid,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Resolved | Phase::Invalid)
    }
}

/// One three-door round. Values are immutable; every transition returns a new state.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct GameState {
    winner_index: usize,
    player_first_choice: Option<usize>,
    opened_door: Option<usize>,
    player_final_choice: Option<usize>,
    phase: Phase,
}

impl GameState {
    pub(crate) fn new_unchecked(winner_index: usize) -> GameState {
        GameState {
            winner_index,
            player_first_choice: None,
            opened_door: None,
            player_final_choice: None,
            phase: Phase::AwaitingFirstPick,
        }
    }

    /// A fresh round with the car behind `winner_index`.
    pub fn with_winner(winner_index: usize) -> MontyHallResult<GameState> {
        check_door(winner_index, DOOR_COUNT)?;
        Ok(GameState::new_unchecked(winner_index))
    }

    pub(crate) fn check_phase(&self, expected: Phase) -> MontyHallResult<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(MontyHallError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Doors the host may open once the player picked `first_choice`.
    pub(crate) fn openable_doors(&self, first_choice: usize) -> Vec<usize> {
        (0..DOOR_COUNT)
            .filter(|&door| door != self.winner_index && door != first_choice)
            .collect()
    }

    pub(crate) fn with_first_pick(self, first_choice: usize, opened_door: usize) -> GameState {
        GameState {
            player_first_choice: Some(first_choice),
            opened_door: Some(opened_door),
            phase: Phase::AwaitingFinalPick,
            ..self
        }
    }

    /// Picking the opened door ends the round as `Invalid` with no final choice recorded.
    pub(crate) fn with_final_pick(self, final_choice: usize) -> GameState {
        if self.opened_door == Some(final_choice) {
            GameState {
                phase: Phase::Invalid,
                ..self
            }
        } else {
            GameState {
                player_final_choice: Some(final_choice),
                phase: Phase::Resolved,
                ..self
            }
        }
    }

    pub fn get_winner_index(&self) -> usize {
        self.winner_index
    }

    pub fn get_first_choice(&self) -> Option<usize> {
        self.player_first_choice
    }

    pub fn get_opened_door(&self) -> Option<usize> {
        self.opened_door
    }

    pub fn get_final_choice(&self) -> Option<usize> {
        self.player_final_choice
    }

    pub fn get_phase(&self) -> Phase {
        self.phase
    }

    pub fn is_invalid(&self) -> bool {
        self.phase == Phase::Invalid
    }

    /// The closed door the player would move to by switching.
    pub fn get_switch_door(&self) -> Option<usize> {
        match (self.player_first_choice, self.opened_door) {
            // The three indices add up to 0 + 1 + 2.
            (Some(first), Some(opened)) => Some(DOOR_COUNT - first - opened),
            _ => None,
        }
    }

    /// `None` until the round is resolved.
    pub fn get_switched(&self) -> Option<bool> {
        match (self.phase, self.player_first_choice, self.player_final_choice) {
            (Phase::Resolved, Some(first), Some(last)) => Some(first != last),
            _ => None,
        }
    }

    /// `None` until the round is resolved.
    pub fn get_won(&self) -> Option<bool> {
        match (self.phase, self.player_final_choice) {
            (Phase::Resolved, Some(final_choice)) => Some(final_choice == self.winner_index),
            _ => None,
        }
    }

    pub fn closed_doors(&self) -> Vec<usize> {
        (0..DOOR_COUNT)
            .filter(|&door| Some(door) != self.opened_door)
            .collect()
    }
}
