//! Event decks and their persisted form.
//!
//! ## Key Types
//!
//! - `EventDeck`: draw pile plus held-aside and retired cards for one category
//! - `CardLocation`: which partition a card is in
//!
//! Decks serialize to a single line of text (`Display`) and load back with
//! `EventDeck::load`. See the `codec` module for the format.

mod codec;
pub mod event_deck;

pub use event_deck::{CardLocation, EventDeck};
