//! Error types for decks, stores, and campaigns.

use crate::core::EventCard;

/// Why a persisted deck string was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseReason {
    /// A token is not a card number.
    #[error("invalid token {0:?}")]
    InvalidToken(String),

    /// More groups than draw pile, held aside, and retired.
    #[error("expected at most 3 groups, found {0}")]
    TooManyGroups(usize),

    /// The same card appears twice.
    #[error("card {0} appears more than once")]
    Duplicate(EventCard),

    /// A card the deck's population does not include.
    #[error("card {0} is not part of this deck")]
    OutsidePopulation(EventCard),

    /// The partitions do not add up to the full population.
    #[error("expected {expected} cards, found {found}")]
    PopulationMismatch {
        /// Population size.
        expected: usize,
        /// Cards in the string.
        found: usize,
    },
}

/// Errors raised by event deck operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// The persisted deck string is malformed.
    #[error("cannot parse event deck {input:?}: {reason}")]
    Parse {
        /// The rejected string.
        input: String,
        /// What was wrong with it.
        reason: ParseReason,
    },

    /// The card cannot be added back to the draw pile.
    #[error("card {card} cannot be added: {reason}")]
    InvalidCard {
        /// The rejected card.
        card: EventCard,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// The draw pile has no cards left.
    #[error("the draw pile is empty")]
    EmptyDeck,

    /// The card is not where the operation expected it.
    #[error("card {card} not found")]
    NotFound {
        /// The missing card.
        card: EventCard,
    },
}

/// Errors raised by a campaign store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A row could not be encoded or decoded.
    #[error("record codec error: {0}")]
    Codec(#[from] bincode::Error),

    /// No row with this id.
    #[error("campaign {0} not found")]
    NotFound(u64),

    /// The campaign has never been saved.
    #[error("campaign has not been saved yet")]
    Unsaved,
}

/// Errors surfaced by campaign operations.
#[derive(Debug, thiserror::Error)]
pub enum CampaignError {
    /// A deck operation failed.
    #[error("event deck error: {0}")]
    Deck(#[from] DeckError),

    /// The persistence layer failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_error_messages() {
        let err = DeckError::Parse {
            input: "1,x|".into(),
            reason: ParseReason::InvalidToken("x".into()),
        };
        assert_eq!(err.to_string(), r#"cannot parse event deck "1,x|": invalid token "x""#);

        let err = DeckError::NotFound { card: EventCard(4) };
        assert_eq!(err.to_string(), "card 4 not found");
    }

    #[test]
    fn test_campaign_error_from_deck_error() {
        let err: CampaignError = DeckError::EmptyDeck.into();
        assert!(matches!(err, CampaignError::Deck(DeckError::EmptyDeck)));
        assert_eq!(err.to_string(), "event deck error: the draw pile is empty");
    }

    #[test]
    fn test_campaign_error_from_store_error() {
        let err: CampaignError = StoreError::NotFound(9).into();
        assert_eq!(err.to_string(), "store error: campaign 9 not found");
    }
}
