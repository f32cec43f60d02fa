//! Injected randomness.
//!
//! The engine never calls a global random function. Anything that needs
//! randomness takes a `RandomSource`, so tests can substitute a scripted one.
//!
//! - `GameRng`: seedable ChaCha8 source for real games
//! - `ScriptedSource`: replays fixed choices for deterministic tests
//! - `shuffle`: Fisher–Yates over any slice
//!
//! ```
//! use rust_ccg_cascade::core::{shuffle, GameRng};
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = a.clone();
//!
//! shuffle(&mut a, &mut GameRng::new(42));
//! shuffle(&mut b, &mut GameRng::new(42));
//!
//! // Same seed, same permutation
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A uniform source of bounded indices.
pub trait RandomSource {
    /// Return an index in `0..bound`. `bound` is always at least 1.
    fn below(&mut self, bound: usize) -> usize;
}

/// Shuffle a slice in place with Fisher–Yates.
///
/// Walks from the back, swapping each position with one drawn from the
/// unshuffled prefix (inclusive).
pub fn shuffle<T>(items: &mut [T], source: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = source.below(i + 1);
        debug_assert!(j <= i, "random source returned {j} for bound {}", i + 1);
        items.swap(i, j.min(i));
    }
}

/// Deterministic RNG backed by ChaCha8.
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

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for checkpointing.
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
    fn below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

/// A random source that replays a fixed list of choices.
///
/// Each call consumes the next scripted value (clamped to the bound). Once the
/// script runs out it answers `bound - 1`, which makes `shuffle` leave the
/// remaining prefix untouched. An empty script is therefore the identity
/// shuffle.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that replays `script`.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            cursor: 0,
        }
    }

    /// A source that never reorders anything.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Number of scripted values consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: usize) -> usize {
        match self.script.get(self.cursor) {
            Some(&value) => {
                self.cursor += 1;
                value.min(bound - 1)
            }
            None => bound - 1,
        }
    }
}
