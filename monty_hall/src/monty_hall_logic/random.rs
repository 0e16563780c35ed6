#[cfg(test)]
use mockall::automock;
use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of the uniform draws the engine makes: the car position, the
/// player's simulated picks and the host's choice between eligible doors.
#[cfg_attr(test, automock)]
pub trait RandomSource {
    /// Returns an index from `0..len` with uniform probability. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

impl RandomSource for ThreadRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Picks one of `candidates`. A single candidate is returned without a draw.
pub(crate) fn pick_from<R: RandomSource + ?Sized>(random: &mut R, candidates: &[usize]) -> usize {
    if candidates.len() == 1 {
        candidates[0]
    } else {
        candidates[random.pick_index(candidates.len())]
    }
}

#[cfg(test)]
pub(crate) fn scripted(draws: Vec<usize>) -> MockRandomSource {
    let mut draws = draws.into_iter();
    let mut random = MockRandomSource::new();
    random.expect_pick_index().returning(move |len| {
        let draw = draws.next().expect("ran out of scripted draws");
        assert!(draw < len, "scripted draw {} is not below {}", draw, len);
        draw
    });
    random
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn seeded_source_stays_in_range() {
        let mut random = StdRng::seed_from_u64(7);
        for len in 1..50 {
            assert!(random.pick_index(len) < len);
        }
    }

    #[test]
    fn single_candidate_needs_no_draw() {
        let mut random = MockRandomSource::new();
        random.expect_pick_index().never();
        assert_eq!(2, pick_from(&mut random, &[2]));
    }

    #[test]
    fn candidate_is_selected_by_draw() {
        let mut random = scripted(vec![1, 0]);
        assert_eq!(2, pick_from(&mut random, &[0, 2]));
        assert_eq!(0, pick_from(&mut random, &[0, 2]));
    }
}
