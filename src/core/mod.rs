//! Core types shared by decks, history, and campaigns.
//!
//! This module holds the vocabulary every other module speaks: card numbers,
//! event categories, the injected random source, and tracker configuration.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{EventCard, EventType};
pub use config::{DeckPopulation, TrackerConfig};
pub use rng::{DeckRng, DeckRngState, RandomSource};
