//! Random number sources for event selection and chance branches.
//!
//! ## Key Features
//!
//! - **Injectable**: The reducer takes `&mut dyn RandomSource`, never a global
//! - **Deterministic**: Same seed produces identical games
//! - **Serializable**: O(1) state capture and restore
//! - **Scriptable**: `ScriptedRng` replays a fixed sample sequence in tests
//!
//! ## Usage
//!
//! ```
//! use fertile_crescent::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! // Same seed, same samples
//! assert_eq!(rng.sample(), replay.sample());
//! assert_eq!(rng.pick(12), replay.pick(12));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform randomness consumed by the rules engine.
///
/// Every probabilistic decision in the engine goes through this trait,
/// so tests can force specific branches with `ScriptedRng`.
pub trait RandomSource {
    /// Draw a uniform sample in `[0, 1)`.
    fn sample(&mut self) -> f64;

    /// Pick a uniform index in `0..len`.
    ///
    /// `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick from an empty range");
        let index = (self.sample() * len as f64) as usize;
        index.min(len.saturating_sub(1))
    }

    /// Check a chance branch: succeeds when the sample exceeds `threshold`.
    fn exceeds(&mut self, threshold: f64) -> bool {
        self.sample() > threshold
    }
}

/// Deterministic RNG for live play.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn sample(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn pick(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many samples have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Fixed-sequence random source for tests and scripted replays.
///
/// Returns the given samples in order, cycling when exhausted.
///
/// ```
/// use fertile_crescent::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([0.9, 0.1]);
/// assert!(rng.exceeds(0.5));
/// assert!(!rng.exceeds(0.5));
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source from samples in `[0, 1)`.
    ///
    /// Panics if `samples` is empty.
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        let samples: Vec<f64> = samples.into_iter().collect();
        assert!(!samples.is_empty(), "ScriptedRng needs at least one sample");
        Self { samples, cursor: 0 }
    }

    /// A source that always succeeds chance checks (below a threshold of 1.0).
    #[must_use]
    pub fn always_high() -> Self {
        Self::new([0.99])
    }

    /// A source that always fails chance checks (above a threshold of 0.0).
    #[must_use]
    pub fn always_low() -> Self {
        Self::new([0.0])
    }

    /// Number of samples drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn sample(&mut self) -> f64 {
        let value = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.pick(1000), rng2.pick(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.pick(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.pick(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_sample_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let s = rng.sample();
            assert!((0.0..1.0).contains(&s));
        }
    }

    #[test]
    fn test_pick_in_bounds() {
        let mut rng = GameRng::new(7);
        for len in 1..20 {
            assert!(rng.pick(len) < len);
        }
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.sample();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.pick(1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.pick(1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut rng = ScriptedRng::new([0.1, 0.2, 0.3]);
        let drawn: Vec<_> = (0..5).map(|_| rng.sample()).collect();
        assert_eq!(drawn, vec![0.1, 0.2, 0.3, 0.1, 0.2]);
        assert_eq!(rng.drawn(), 5);
    }

    #[test]
    fn test_scripted_pick_floors() {
        // Mirrors floor(sample * len)
        let mut rng = ScriptedRng::new([0.0, 0.5, 0.999]);
        assert_eq!(rng.pick(4), 0);
        assert_eq!(rng.pick(4), 2);
        assert_eq!(rng.pick(4), 3);
    }

    #[test]
    fn test_exceeds_is_strict() {
        let mut rng = ScriptedRng::new([0.5]);
        assert!(!rng.exceeds(0.5));
        assert!(rng.exceeds(0.4));
    }

    #[test]
    #[should_panic(expected = "at least one sample")]
    fn test_scripted_empty_panics() {
        let _ = ScriptedRng::new(Vec::<f64>::new());
    }
}
