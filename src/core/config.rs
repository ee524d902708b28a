//! Tracker configuration.
//!
//! The tracker never hardcodes which cards make up a deck. Callers provide a
//! [`DeckPopulation`] per category through [`TrackerConfig`], which defaults
//! to the base game's starting decks.

use serde::{Deserialize, Serialize};

use super::card::{EventCard, EventType};
use crate::error::CampaignError;

/// Number of cards in each starting event deck of the base game.
pub const BASE_DECK_SIZE: u32 = 30;

/// The full set of card numbers a deck is made of.
///
/// Stored sorted and without duplicates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<EventCard>", into = "Vec<EventCard>")]
pub struct DeckPopulation {
    cards: Vec<EventCard>,
}

impl DeckPopulation {
    /// Build a population from any set of card numbers.
    ///
    /// Duplicates are collapsed.
    pub fn new(cards: impl IntoIterator<Item = EventCard>) -> Self {
        let mut cards: Vec<EventCard> = cards.into_iter().collect();
        cards.sort_unstable();
        cards.dedup();
        Self { cards }
    }

    /// Population numbered `first..=last`.
    #[must_use]
    pub fn range(first: u32, last: u32) -> Self {
        Self::new((first..=last).map(EventCard))
    }

    /// Does the population include this card?
    #[must_use]
    pub fn contains(&self, card: EventCard) -> bool {
        self.cards.binary_search(&card).is_ok()
    }

    /// Number of cards in the population.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the population empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards, ascending.
    #[must_use]
    pub fn cards(&self) -> &[EventCard] {
        &self.cards
    }
}

impl Default for DeckPopulation {
    fn default() -> Self {
        Self::range(1, BASE_DECK_SIZE)
    }
}

impl From<Vec<EventCard>> for DeckPopulation {
    fn from(cards: Vec<EventCard>) -> Self {
        Self::new(cards)
    }
}

impl From<DeckPopulation> for Vec<EventCard> {
    fn from(population: DeckPopulation) -> Self {
        population.cards
    }
}

/// Campaign tracker configuration.
///
/// Missing fields fall back to the base game defaults when parsed from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Cards in the city event deck.
    pub city_population: DeckPopulation,

    /// Cards in the road event deck.
    pub road_population: DeckPopulation,

    /// Classes available at the start of a campaign.
    pub default_unlocked_classes: Vec<u32>,

    /// Gold per sanctuary donation.
    pub donation_step: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            city_population: DeckPopulation::default(),
            road_population: DeckPopulation::default(),
            default_unlocked_classes: (1..=6).collect(),
            donation_step: 10,
        }
    }
}

impl TrackerConfig {
    /// Create a configuration with base game defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, CampaignError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the city deck population.
    #[must_use]
    pub fn with_city_population(mut self, population: DeckPopulation) -> Self {
        self.city_population = population;
        self
    }

    /// Set the road deck population.
    #[must_use]
    pub fn with_road_population(mut self, population: DeckPopulation) -> Self {
        self.road_population = population;
        self
    }

    /// Set the classes unlocked at campaign start.
    #[must_use]
    pub fn with_default_unlocked_classes(mut self, classes: impl IntoIterator<Item = u32>) -> Self {
        self.default_unlocked_classes = classes.into_iter().collect();
        self
    }

    /// Set the gold per sanctuary donation.
    #[must_use]
    pub fn with_donation_step(mut self, step: u32) -> Self {
        self.donation_step = step;
        self
    }

    /// Population for a category.
    #[must_use]
    pub fn population(&self, event_type: EventType) -> &DeckPopulation {
        match event_type {
            EventType::City => &self.city_population,
            EventType::Road => &self.road_population,
        }
    }
}
