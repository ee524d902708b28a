//! Event card numbers and event categories.

use serde::{Deserialize, Serialize};

/// A printed event card number.
///
/// Cards carry no identity beyond their number. A deck holds each number at
/// most once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EventCard(pub u32);

impl EventCard {
    /// Create a card from its printed number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Get the printed number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EventCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EventCard {
    fn from(number: u32) -> Self {
        Self(number)
    }
}

/// Event deck category.
///
/// The numeric codes are stored in history rows and must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Events drawn while in town.
    City,
    /// Events drawn while travelling to a scenario.
    Road,
}

impl EventType {
    /// Both categories, city first.
    pub const ALL: [EventType; 2] = [EventType::City, EventType::Road];

    /// Persisted numeric code.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            EventType::City => 1,
            EventType::Road => 2,
        }
    }

    /// Look up a category by its persisted code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(EventType::City),
            2 => Some(EventType::Road),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventType::City => write!(f, "City"),
            EventType::Road => write!(f, "Road"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_card() {
        let card = EventCard::new(17);
        assert_eq!(card.number(), 17);
        assert_eq!(format!("{}", card), "17");
        assert_eq!(EventCard::from(17), card);
    }

    #[test]
    fn test_event_card_ordering() {
        assert!(EventCard(2) < EventCard(10));
    }

    #[test]
    fn test_event_type_codes() {
        for event_type in EventType::ALL {
            assert_eq!(EventType::from_code(event_type.code()), Some(event_type));
        }
        assert_eq!(EventType::City.code(), 1);
        assert_eq!(EventType::Road.code(), 2);
        assert_eq!(EventType::from_code(0), None);
        assert_eq!(EventType::from_code(3), None);
    }

    #[test]
    fn test_event_type_display() {
        assert_eq!(format!("{}", EventType::City), "City");
        assert_eq!(format!("{}", EventType::Road), "Road");
    }
}
