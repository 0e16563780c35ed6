use super::game_state::Phase;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum MontyHallError {
    #[error("door {door} is out of range, there are only {door_count} doors")]
    OutOfRange { door: usize, door_count: usize },

    #[error("invalid phase: expected {expected}, but the round is in {actual}")]
    InvalidPhase { expected: Phase, actual: Phase },

    #[error(
        "invalid parameters: with {doors} doors the host can open at most {doors} - 2 doors, not {opened}"
    )]
    InvalidParameters { doors: usize, opened: usize },
}

pub type MontyHallResult<T> = Result<T, MontyHallError>;

pub(crate) fn check_door(door: usize, door_count: usize) -> MontyHallResult<()> {
    if door < door_count {
        Ok(())
    } else {
        Err(MontyHallError::OutOfRange { door, door_count })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn door_range() {
        assert_eq!(Ok(()), check_door(0, 3));
        assert_eq!(Ok(()), check_door(2, 3));
        assert_eq!(
            Err(MontyHallError::OutOfRange {
                door: 3,
                door_count: 3
            }),
            check_door(3, 3)
        );
    }

    #[test]
    fn messages() {
        let error = MontyHallError::InvalidPhase {
            expected: Phase::AwaitingFinalPick,
            actual: Phase::AwaitingFirstPick,
        };
        assert_eq!(
            "invalid phase: expected AwaitingFinalPick, but the round is in AwaitingFirstPick",
            error.to_string()
        );
        let error = MontyHallError::InvalidParameters {
            doors: 3,
            opened: 2,
        };
        assert!(error.to_string().contains("not 2"));
    }
}
