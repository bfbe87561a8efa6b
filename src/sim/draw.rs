//! Draw sources: where ticket numbers and winning numbers come from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces numbers uniformly distributed over `0..chances`.
pub trait DrawSource {
    /// Draw one number in `0..chances`.
    ///
    /// Callers guarantee `chances > 0`; implementations may panic otherwise.
    fn draw(&mut self, chances: u64) -> u64;
}

impl<D: DrawSource + ?Sized> DrawSource for Box<D> {
    fn draw(&mut self, chances: u64) -> u64 {
        (**self).draw(chances)
    }
}

/// Pseudo-random draws backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomDraw<R = StdRng> {
    rng: R,
}

impl RandomDraw<StdRng> {
    /// Seed from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible draws from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomDraw<R> {
    /// Wrap an existing generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DrawSource for RandomDraw<R> {
    fn draw(&mut self, chances: u64) -> u64 {
        assert!(chances > 0, "cannot draw from zero chances");
        self.rng.gen_range(0..chances)
    }
}

/// Replays a fixed sequence of numbers, cycling when it runs out.
///
/// Each value is reduced modulo `chances` so the range contract holds for
/// any script.
#[derive(Debug, Clone)]
pub struct ScriptedDraw {
    script: Vec<u64>,
    next: usize,
}

impl ScriptedDraw {
    /// Create a scripted source.
    ///
    /// # Panics
    ///
    /// Panics if `script` is empty.
    pub fn new(script: impl IntoIterator<Item = u64>) -> Self {
        let script: Vec<u64> = script.into_iter().collect();
        assert!(!script.is_empty(), "scripted draws need at least one value");
        Self { script, next: 0 }
    }

    /// How many values have been handed out so far.
    pub const fn drawn(&self) -> usize {
        self.next
    }
}

impl DrawSource for ScriptedDraw {
    fn draw(&mut self, chances: u64) -> u64 {
        assert!(chances > 0, "cannot draw from zero chances");
        let value = self.script[self.next % self.script.len()];
        self.next += 1;
        value % chances
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_scripted_replays_and_cycles() {
        let mut draws = ScriptedDraw::new([3, 7, 2]);
        let seen: Vec<u64> = (0..5).map(|_| draws.draw(10)).collect();
        assert_eq!(seen, vec![3, 7, 2, 3, 7]);
        assert_eq!(draws.drawn(), 5);
    }

    #[test]
    fn test_scripted_respects_range() {
        let mut draws = ScriptedDraw::new([12]);
        assert_eq!(draws.draw(10), 2);
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomDraw::seeded(42);
        let mut b = RandomDraw::seeded(42);
        let xs: Vec<u64> = (0..32).map(|_| a.draw(1_000_000)).collect();
        let ys: Vec<u64> = (0..32).map(|_| b.draw(1_000_000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_single_chance_always_zero() {
        let mut draws = RandomDraw::seeded(7);
        assert!((0..100).all(|_| draws.draw(1) == 0));
    }

    #[test]
    fn test_distribution_is_roughly_uniform() {
        let mut draws = RandomDraw::seeded(2024);
        let mut counts = [0u32; 10];
        for _ in 0..100_000 {
            counts[usize::try_from(draws.draw(10)).unwrap()] += 1;
        }
        // Expected 10_000 per bucket; allow a generous 5% band.
        for count in counts {
            assert!((9_500..=10_500).contains(&count), "bucket count {count}");
        }
    }

    #[test]
    #[should_panic(expected = "zero chances")]
    fn test_zero_chances_panics() {
        RandomDraw::seeded(1).draw(0);
    }

    proptest! {
        #[test]
        fn prop_draw_in_range(seed in any::<u64>(), chances in 1u64..=u64::MAX) {
            let mut draws = RandomDraw::seeded(seed);
            for _ in 0..16 {
                prop_assert!(draws.draw(chances) < chances);
            }
        }
    }
}
