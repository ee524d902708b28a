//! Shuffled event deck with held-aside and retired cards.
//!
//! Every card of the deck's population sits in exactly one partition:
//! - the **draw pile**, ordered, head drawn first
//! - the **held-aside** set, cards drawn and waiting to be added back
//! - the **retired** set, cards permanently removed by campaign logic
//!
//! The partitions are private. Only the operations below move cards between
//! them, so a quiescent deck always accounts for its whole population.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::codec;
use crate::core::{DeckPopulation, EventCard, EventType, RandomSource};
use crate::error::DeckError;

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardLocation {
    /// In the draw pile at this index (0 = next card drawn).
    DrawPile(usize),
    /// Drawn and set aside.
    HeldAside,
    /// Permanently removed.
    Retired,
}

/// An event deck for one category.
///
/// ## Usage
///
/// ```
/// use campaign_events::core::{DeckPopulation, DeckRng, EventCard, EventType};
/// use campaign_events::deck::EventDeck;
///
/// let mut rng = DeckRng::new(42);
/// let mut deck = EventDeck::new(EventType::City, DeckPopulation::range(1, 30));
/// deck.initialize(&mut rng);
///
/// let card = deck.draw_top().unwrap();
/// assert_eq!(deck.len(), 29);
///
/// // Persist and restore
/// let saved = deck.to_string();
/// let mut restored = EventDeck::new(EventType::City, DeckPopulation::range(1, 30));
/// restored.load(&saved).unwrap();
/// assert_eq!(restored, deck);
///
/// // Shuffle the drawn card back in
/// restored.add_card(card, &mut rng).unwrap();
/// assert_eq!(restored.len(), 30);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventDeck {
    event_type: EventType,
    population: DeckPopulation,
    draw_pile: Vec<EventCard>,
    held_aside: BTreeSet<EventCard>,
    retired: BTreeSet<EventCard>,
}

impl EventDeck {
    /// Create an empty deck. Call [`initialize`](Self::initialize) or
    /// [`load`](Self::load) before use.
    #[must_use]
    pub fn new(event_type: EventType, population: DeckPopulation) -> Self {
        Self {
            event_type,
            population,
            draw_pile: Vec::new(),
            held_aside: BTreeSet::new(),
            retired: BTreeSet::new(),
        }
    }

    /// Fill the draw pile with the full population and shuffle it.
    pub fn initialize(&mut self, rng: &mut impl RandomSource) {
        self.draw_pile = self.population.cards().to_vec();
        self.held_aside.clear();
        self.retired.clear();
        rng.shuffle_cards(&mut self.draw_pile);
    }

    /// Replace the deck state with a persisted v1 string.
    ///
    /// On error the deck is left unchanged.
    pub fn load(&mut self, input: &str) -> Result<(), DeckError> {
        let parts = codec::decode(input, &self.population)?;
        self.draw_pile = parts.draw_pile;
        self.held_aside = parts.held_aside;
        self.retired = parts.retired;
        Ok(())
    }

    /// Build a deck directly from a persisted v1 string.
    pub fn parse(
        event_type: EventType,
        population: DeckPopulation,
        input: &str,
    ) -> Result<Self, DeckError> {
        let mut deck = Self::new(event_type, population);
        deck.load(input)?;
        Ok(deck)
    }

    /// Remove and return the next card, holding it aside.
    pub fn draw_top(&mut self) -> Result<EventCard, DeckError> {
        if self.draw_pile.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        let card = self.draw_pile.remove(0);
        self.held_aside.insert(card);
        Ok(card)
    }

    /// Shuffle a held-aside or retired card back into the draw pile.
    ///
    /// The card lands at a random position, not on top.
    pub fn add_card(
        &mut self,
        card: EventCard,
        rng: &mut impl RandomSource,
    ) -> Result<(), DeckError> {
        self.take_out_of_circulation(card)?;
        let idx = rng.insert_index(self.draw_pile.len());
        self.draw_pile.insert(idx, card);
        Ok(())
    }

    /// Put a held-aside card at the bottom of the draw pile.
    pub fn place_on_bottom(&mut self, card: EventCard) -> Result<(), DeckError> {
        if !self.held_aside.remove(&card) {
            return Err(DeckError::NotFound { card });
        }
        self.draw_pile.push(card);
        Ok(())
    }

    /// Retire a card from the draw pile or the held-aside set.
    pub fn remove_card(&mut self, card: EventCard) -> Result<(), DeckError> {
        if let Some(idx) = self.draw_pile.iter().position(|&c| c == card) {
            self.draw_pile.remove(idx);
        } else if !self.held_aside.remove(&card) {
            return Err(DeckError::NotFound { card });
        }
        self.retired.insert(card);
        Ok(())
    }

    /// Reshuffle the draw pile. Held-aside and retired cards stay out.
    pub fn shuffle(&mut self, rng: &mut impl RandomSource) {
        rng.shuffle_cards(&mut self.draw_pile);
    }

    fn take_out_of_circulation(&mut self, card: EventCard) -> Result<(), DeckError> {
        if !self.population.contains(card) {
            return Err(DeckError::InvalidCard {
                card,
                reason: "not part of this deck",
            });
        }
        if self.held_aside.remove(&card) || self.retired.remove(&card) {
            return Ok(());
        }
        Err(DeckError::InvalidCard {
            card,
            reason: "already in the draw pile",
        })
    }

    /// Deck category.
    #[must_use]
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// The cards this deck is made of.
    #[must_use]
    pub fn population(&self) -> &DeckPopulation {
        &self.population
    }

    /// Draw pile in draw order.
    #[must_use]
    pub fn draw_pile(&self) -> &[EventCard] {
        &self.draw_pile
    }

    /// Cards drawn and set aside, ascending.
    pub fn held_aside(&self) -> impl Iterator<Item = EventCard> + '_ {
        self.held_aside.iter().copied()
    }

    /// Cards permanently removed, ascending.
    pub fn retired(&self) -> impl Iterator<Item = EventCard> + '_ {
        self.retired.iter().copied()
    }

    /// Next card to be drawn.
    #[must_use]
    pub fn peek(&self) -> Option<EventCard> {
        self.draw_pile.first().copied()
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Is the draw pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// Where a card is, or `None` if it is not part of this deck.
    #[must_use]
    pub fn location_of(&self, card: EventCard) -> Option<CardLocation> {
        if let Some(idx) = self.draw_pile.iter().position(|&c| c == card) {
            Some(CardLocation::DrawPile(idx))
        } else if self.held_aside.contains(&card) {
            Some(CardLocation::HeldAside)
        } else if self.retired.contains(&card) {
            Some(CardLocation::Retired)
        } else {
            None
        }
    }
}

impl fmt::Display for EventDeck {
    /// The persisted v1 form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::encode(&self.draw_pile, &self.held_aside, &self.retired))
    }
}
