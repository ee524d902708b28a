//! The persisted campaign row.

use serde::{Deserialize, Serialize};

use crate::core::EventType;
use crate::history::EventHistory;

/// A campaign as the data layer stores it.
///
/// Decks are kept in their v1 string form, one field per category. An empty
/// deck string means the deck was never initialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignRecord {
    /// Store-assigned id. `None` until first saved.
    pub id: Option<u64>,

    /// Campaign name.
    pub name: String,

    /// City prosperity track position (1-65).
    pub city_prosperity: u32,

    /// Gold donated to the sanctuary.
    pub donated_gold: u32,

    /// Comma-separated unlocked class ids.
    pub unlocked_classes: String,

    /// City event deck, v1 string.
    pub city_event_deck: String,

    /// Road event deck, v1 string.
    pub road_event_deck: String,

    /// Event deck history for both categories.
    pub event_history: EventHistory,
}

impl CampaignRecord {
    /// Create a blank, unsaved record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            city_prosperity: 1,
            donated_gold: 0,
            unlocked_classes: String::new(),
            city_event_deck: String::new(),
            road_event_deck: String::new(),
            event_history: EventHistory::new(),
        }
    }

    /// Persisted deck string for a category.
    #[must_use]
    pub fn deck_string(&self, event_type: EventType) -> &str {
        match event_type {
            EventType::City => &self.city_event_deck,
            EventType::Road => &self.road_event_deck,
        }
    }

    /// Replace the persisted deck string for a category.
    pub fn set_deck_string(&mut self, event_type: EventType, value: String) {
        match event_type {
            EventType::City => self.city_event_deck = value,
            EventType::Road => self.road_event_deck = value,
        }
    }
}
