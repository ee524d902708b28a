//! Append-only event history.
//!
//! Every deck mutation the campaign performs is recorded here. Positions are
//! assigned per event type: the first entry of a type gets 0 and each later
//! one gets one more than the highest position of that type so far.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{EventCard, EventType};

/// What happened to a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventAction {
    /// Put back into the draw pile, shuffled in or placed on the bottom.
    Added {
        /// Shuffled into a random position rather than placed on the bottom.
        shuffled: bool,
    },
    /// Permanently removed from the deck.
    Removed,
    /// Drawn and resolved.
    Drawn,
}

impl EventAction {
    /// Short label for display.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EventAction::Added { shuffled: true } => "Added, Shuffled",
            EventAction::Added { shuffled: false } => "Added",
            EventAction::Removed => "Removed",
            EventAction::Drawn => "Drawn",
        }
    }
}

/// One history entry. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventHistoryLogItem {
    event_type: EventType,
    reference_number: EventCard,
    action: EventAction,
    outcome: Option<String>,
    decision: Option<u32>,
    position: u32,
}

impl EventHistoryLogItem {
    /// Deck category.
    #[must_use]
    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// The card this entry is about.
    #[must_use]
    pub fn reference_number(&self) -> EventCard {
        self.reference_number
    }

    /// What happened.
    #[must_use]
    pub fn action(&self) -> EventAction {
        self.action
    }

    /// Outcome text of a drawn event.
    #[must_use]
    pub fn outcome(&self) -> Option<&str> {
        self.outcome.as_deref()
    }

    /// Option chosen for a drawn event.
    #[must_use]
    pub fn decision(&self) -> Option<u32> {
        self.decision
    }

    /// Order within this event type's history.
    #[must_use]
    pub fn position(&self) -> u32 {
        self.position
    }
}

/// The campaign's event history.
///
/// Uses an `im` vector so cloning a campaign snapshot is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventHistory {
    entries: Vector<EventHistoryLogItem>,
}

impl EventHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a card put back into the draw pile.
    pub fn record_added(
        &mut self,
        event_type: EventType,
        card: EventCard,
        shuffled: bool,
    ) -> &EventHistoryLogItem {
        self.append(event_type, card, EventAction::Added { shuffled }, None, None)
    }

    /// Record a card permanently removed.
    pub fn record_removed(
        &mut self,
        event_type: EventType,
        card: EventCard,
    ) -> &EventHistoryLogItem {
        self.append(event_type, card, EventAction::Removed, None, None)
    }

    /// Record a drawn card with its outcome.
    pub fn record_drawn(
        &mut self,
        event_type: EventType,
        card: EventCard,
        outcome: Option<String>,
        decision: Option<u32>,
    ) -> &EventHistoryLogItem {
        self.append(event_type, card, EventAction::Drawn, outcome, decision)
    }

    fn append(
        &mut self,
        event_type: EventType,
        reference_number: EventCard,
        action: EventAction,
        outcome: Option<String>,
        decision: Option<u32>,
    ) -> &EventHistoryLogItem {
        let position = self.last_position(event_type).map_or(0, |p| p + 1);
        self.entries.push_back(EventHistoryLogItem {
            event_type,
            reference_number,
            action,
            outcome,
            decision,
            position,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Highest position recorded for this type.
    #[must_use]
    pub fn last_position(&self, event_type: EventType) -> Option<u32> {
        self.entries
            .iter()
            .filter(|e| e.event_type == event_type)
            .map(|e| e.position)
            .max()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &EventHistoryLogItem> {
        self.entries.iter()
    }

    /// Entries of one type, ordered by position.
    #[must_use]
    pub fn for_type(&self, event_type: EventType) -> Vec<&EventHistoryLogItem> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .filter(|e| e.event_type == event_type)
            .collect();
        entries.sort_by_key(|e| e.position);
        entries
    }

    /// Drop every entry of one type.
    pub fn clear_type(&mut self, event_type: EventType) {
        self.entries = self
            .entries
            .iter()
            .filter(|e| e.event_type != event_type)
            .cloned()
            .collect();
    }

    /// Total number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the history empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
