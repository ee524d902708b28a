//! # campaign-events
//!
//! Event decks and campaign state for a cooperative board game tracker.
//!
//! ## Design Principles
//!
//! 1. **Closed partitions**: every card of a deck is in exactly one of the
//!    draw pile, the held-aside set, or the retired set. Only deck operations
//!    move cards, so callers cannot break that.
//!
//! 2. **Injected randomness**: shuffles and re-insertions take a
//!    `RandomSource`. A seeded `DeckRng` makes them reproducible.
//!
//! 3. **Recover on load, propagate on write**: a corrupt persisted deck is
//!    replaced by a fresh one and reported as a loading message; deck
//!    mutations and store writes return errors to the caller.
//!
//! ## Modules
//!
//! - `core`: card numbers, event types, RNG, configuration
//! - `deck`: the event deck and its text format
//! - `history`: append-only event history
//! - `campaign`: campaign state, persisted record, store façade
//! - `error`: error types

pub mod core;
pub mod deck;
pub mod history;
pub mod campaign;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EventCard, EventType,
    DeckRng, DeckRngState, RandomSource,
    DeckPopulation, TrackerConfig,
};

pub use crate::deck::{CardLocation, EventDeck};

pub use crate::history::{EventAction, EventHistory, EventHistoryLogItem};

pub use crate::campaign::{Campaign, CampaignRecord, CampaignStore, EventResolution, MemoryStore};

pub use crate::error::{CampaignError, DeckError, ParseReason, StoreError};
