//! Injected randomness for deck shuffles and insertions.
//!
//! Decks never reach for a process-wide generator. Every operation that needs
//! randomness takes a [`RandomSource`], so a seeded source makes shuffle
//! order and re-insertion positions reproducible.
//!
//! ```
//! use campaign_events::core::{DeckRng, EventCard, RandomSource};
//!
//! let mut a = DeckRng::new(42);
//! let mut b = DeckRng::new(42);
//!
//! let mut left: Vec<EventCard> = (1..=10).map(EventCard).collect();
//! let mut right = left.clone();
//! a.shuffle_cards(&mut left);
//! b.shuffle_cards(&mut right);
//!
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::card::EventCard;

/// Source of randomness for deck operations.
pub trait RandomSource {
    /// Shuffle cards uniformly in place.
    fn shuffle_cards(&mut self, cards: &mut [EventCard]);

    /// Pick an insertion index in `0..=len`.
    fn insert_index(&mut self, len: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn shuffle_cards(&mut self, cards: &mut [EventCard]) {
        (**self).shuffle_cards(cards);
    }

    fn insert_index(&mut self, len: usize) -> usize {
        (**self).insert_index(len)
    }
}

/// Seeded ChaCha8 generator with serializable state.
#[derive(Clone, Debug)]
pub struct DeckRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> DeckRngState {
        DeckRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DeckRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for DeckRng {
    fn shuffle_cards(&mut self, cards: &mut [EventCard]) {
        cards.shuffle(&mut self.inner);
    }

    fn insert_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..=len)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture and restore are O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(range: std::ops::RangeInclusive<u32>) -> Vec<EventCard> {
        range.map(EventCard).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = DeckRng::new(42);
        let mut rng2 = DeckRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.insert_index(1000), rng2.insert_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DeckRng::new(1);
        let mut rng2 = DeckRng::new(2);

        let mut a = cards(1..=30);
        let mut b = cards(1..=30);
        rng1.shuffle_cards(&mut a);
        rng2.shuffle_cards(&mut b);

        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut rng = DeckRng::new(42);
        let mut data = cards(1..=10);
        let original = data.clone();

        rng.shuffle_cards(&mut data);

        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_insert_index_bounds() {
        let mut rng = DeckRng::new(7);
        assert_eq!(rng.insert_index(0), 0);

        let mut seen_end = false;
        for _ in 0..200 {
            let idx = rng.insert_index(3);
            assert!(idx <= 3);
            seen_end |= idx == 3;
        }
        assert!(seen_end, "insert index must be able to land after the last card");
    }

    #[test]
    fn test_state_restore() {
        let mut rng = DeckRng::new(42);
        for _ in 0..50 {
            rng.insert_index(100);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.insert_index(100)).collect();

        let mut restored = DeckRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.insert_index(100)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = DeckRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DeckRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn draw_index(mut source: impl RandomSource) -> usize {
            source.insert_index(5)
        }

        let mut rng = DeckRng::new(3);
        let mut twin = DeckRng::new(3);
        assert_eq!(draw_index(&mut rng), twin.insert_index(5));
    }
}
