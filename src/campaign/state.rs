//! Campaign state: both event decks, their history, and the city counters.
//!
//! ## Loading
//!
//! [`Campaign::from_record`] never fails. A deck string that cannot be parsed
//! is replaced by a freshly shuffled deck, and an unparseable class list by the
//! configured defaults. Each recovery is logged and left in
//! [`Campaign::loading_messages`] for the caller to show.
//!
//! ## Mutations
//!
//! Deck operations return `Result`. On success the matching history entry is
//! appended and the record's deck string rewritten; on failure nothing
//! changes. Saving goes through a [`CampaignStore`] and its errors propagate.

use crate::core::{DeckRng, EventCard, EventType, RandomSource, TrackerConfig};
use crate::deck::EventDeck;
use crate::error::{CampaignError, StoreError};
use crate::history::EventHistory;

use super::prosperity;
use super::record::CampaignRecord;
use super::store::CampaignStore;

/// Outcome of a drawn event, as recorded in history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventResolution {
    /// Outcome text.
    pub outcome: Option<String>,
    /// Chosen option.
    pub decision: Option<u32>,
}

impl EventResolution {
    /// A draw with no recorded outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outcome text.
    #[must_use]
    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = Some(outcome.into());
        self
    }

    /// Set the chosen option.
    #[must_use]
    pub fn with_decision(mut self, decision: u32) -> Self {
        self.decision = Some(decision);
        self
    }
}

/// A loaded campaign.
///
/// Generic over the random source so tests can inject a seeded one.
#[derive(Clone, Debug)]
pub struct Campaign<R: RandomSource = DeckRng> {
    record: CampaignRecord,
    config: TrackerConfig,
    city_deck: EventDeck,
    road_deck: EventDeck,
    unlocked_classes: Vec<u32>,
    loading_messages: Vec<String>,
    rng: R,
}

impl<R: RandomSource> Campaign<R> {
    /// Start a new campaign with both decks freshly shuffled.
    pub fn new(name: impl Into<String>, config: TrackerConfig, rng: R) -> Self {
        let mut record = CampaignRecord::new(name);
        record.unlocked_classes = join_classes(&config.default_unlocked_classes);
        Self::from_record(record, config, rng)
    }

    /// Load a campaign from its persisted record, recovering from bad data.
    pub fn from_record(mut record: CampaignRecord, config: TrackerConfig, mut rng: R) -> Self {
        let mut loading_messages = Vec::new();

        let road_deck = load_deck(
            EventType::Road,
            &config,
            &mut record,
            &mut rng,
            &mut loading_messages,
        );
        let city_deck = load_deck(
            EventType::City,
            &config,
            &mut record,
            &mut rng,
            &mut loading_messages,
        );

        let unlocked_classes = match parse_classes(&record.unlocked_classes) {
            Ok(classes) => classes,
            Err(token) => {
                log::warn!(
                    "Campaign {:?}: invalid unlocked class {token:?}, resetting to defaults",
                    record.name
                );
                loading_messages.push(
                    "Unlocked Classes loading error. Unlocked Classes set to default.".to_string(),
                );
                record.unlocked_classes = join_classes(&config.default_unlocked_classes);
                config.default_unlocked_classes.clone()
            }
        };

        Self {
            record,
            config,
            city_deck,
            road_deck,
            unlocked_classes,
            loading_messages,
            rng,
        }
    }

    /// Load a campaign by id from a store.
    pub fn load<S>(store: &S, id: u64, config: TrackerConfig, rng: R) -> Result<Self, CampaignError>
    where
        S: CampaignStore + ?Sized,
    {
        let record = store.get(id)?.ok_or(StoreError::NotFound(id))?;
        Ok(Self::from_record(record, config, rng))
    }

    /// Persist the campaign. Returns its id.
    pub fn save<S>(&mut self, store: &mut S) -> Result<u64, CampaignError>
    where
        S: CampaignStore + ?Sized,
    {
        let id = store.insert_or_replace(&self.record)?;
        self.record.id = Some(id);
        log::info!("Saved campaign {:?} ({id})", self.record.name);
        Ok(id)
    }

    /// Remove the campaign from a store.
    pub fn delete<S>(&self, store: &mut S) -> Result<(), CampaignError>
    where
        S: CampaignStore + ?Sized,
    {
        let id = self.record.id.ok_or(StoreError::Unsaved)?;
        store.delete(id)?;
        log::info!("Deleted campaign {:?} ({id})", self.record.name);
        Ok(())
    }

    // === Accessors ===

    /// The persisted form, always in sync with the decks.
    #[must_use]
    pub fn record(&self) -> &CampaignRecord {
        &self.record
    }

    /// Consume the campaign, keeping its record.
    #[must_use]
    pub fn into_record(self) -> CampaignRecord {
        self.record
    }

    /// Campaign name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Store id, if saved.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        self.record.id
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Event deck for a category.
    #[must_use]
    pub fn deck(&self, event_type: EventType) -> &EventDeck {
        match event_type {
            EventType::City => &self.city_deck,
            EventType::Road => &self.road_deck,
        }
    }

    /// Event history for both categories.
    #[must_use]
    pub fn history(&self) -> &EventHistory {
        &self.record.event_history
    }

    /// Problems recovered from while loading.
    #[must_use]
    pub fn loading_messages(&self) -> &[String] {
        &self.loading_messages
    }

    /// Forget the loading problems once they have been shown.
    pub fn clear_loading_messages(&mut self) {
        self.loading_messages.clear();
    }

    // === Event decks ===

    /// Draw the next event and record how it was resolved.
    pub fn draw_event(
        &mut self,
        event_type: EventType,
        resolution: EventResolution,
    ) -> Result<EventCard, CampaignError> {
        let card = self.deck_mut(event_type).draw_top()?;
        self.record
            .event_history
            .record_drawn(event_type, card, resolution.outcome, resolution.decision);
        self.sync_deck(event_type);
        log::debug!("{event_type} event {card} drawn");
        Ok(card)
    }

    /// Shuffle an event back into its deck.
    pub fn add_event(
        &mut self,
        event_type: EventType,
        card: EventCard,
    ) -> Result<(), CampaignError> {
        let (deck, rng) = self.deck_and_rng(event_type);
        deck.add_card(card, rng)?;
        self.record.event_history.record_added(event_type, card, true);
        self.sync_deck(event_type);
        log::debug!("{event_type} event {card} shuffled into deck");
        Ok(())
    }

    /// Put a drawn event on the bottom of its deck.
    pub fn return_event_to_bottom(
        &mut self,
        event_type: EventType,
        card: EventCard,
    ) -> Result<(), CampaignError> {
        self.deck_mut(event_type).place_on_bottom(card)?;
        self.record.event_history.record_added(event_type, card, false);
        self.sync_deck(event_type);
        log::debug!("{event_type} event {card} returned to bottom");
        Ok(())
    }

    /// Permanently remove an event from its deck.
    pub fn remove_event(
        &mut self,
        event_type: EventType,
        card: EventCard,
    ) -> Result<(), CampaignError> {
        self.deck_mut(event_type).remove_card(card)?;
        self.record.event_history.record_removed(event_type, card);
        self.sync_deck(event_type);
        log::debug!("{event_type} event {card} removed");
        Ok(())
    }

    /// Reset a deck to its full shuffled population and clear its history.
    pub fn initialize_event_deck(&mut self, event_type: EventType) {
        let (deck, rng) = self.deck_and_rng(event_type);
        deck.initialize(rng);
        self.record.event_history.clear_type(event_type);
        self.sync_deck(event_type);
        log::info!("{event_type} event deck reinitialized");
    }

    fn deck_mut(&mut self, event_type: EventType) -> &mut EventDeck {
        match event_type {
            EventType::City => &mut self.city_deck,
            EventType::Road => &mut self.road_deck,
        }
    }

    fn deck_and_rng(&mut self, event_type: EventType) -> (&mut EventDeck, &mut R) {
        match event_type {
            EventType::City => (&mut self.city_deck, &mut self.rng),
            EventType::Road => (&mut self.road_deck, &mut self.rng),
        }
    }

    fn sync_deck(&mut self, event_type: EventType) {
        let encoded = self.deck(event_type).to_string();
        self.record.set_deck_string(event_type, encoded);
    }

    // === City ===

    /// City prosperity track position, clamped to the track.
    #[must_use]
    pub fn prosperity(&self) -> u32 {
        self.record
            .city_prosperity
            .clamp(prosperity::MIN_PROSPERITY, prosperity::MAX_PROSPERITY)
    }

    /// Advance the prosperity track by one, up to the maximum.
    pub fn increase_prosperity(&mut self) {
        self.record.city_prosperity = (self.prosperity() + 1).min(prosperity::MAX_PROSPERITY);
    }

    /// Move the prosperity track back by one, down to the minimum.
    pub fn decrease_prosperity(&mut self) {
        self.record.city_prosperity = self
            .prosperity()
            .saturating_sub(1)
            .max(prosperity::MIN_PROSPERITY);
    }

    /// Current prosperity level (1-9).
    #[must_use]
    pub fn prosperity_level(&self) -> u32 {
        prosperity::level(self.prosperity())
    }

    /// Fraction of the way through `level` towards the next one.
    #[must_use]
    pub fn prosperity_progress(&self, level: u32) -> f64 {
        prosperity::progress(self.prosperity(), level)
    }

    /// Gold donated to the sanctuary.
    #[must_use]
    pub fn donated_gold(&self) -> u32 {
        self.record.donated_gold
    }

    /// Record one sanctuary donation.
    pub fn add_donation(&mut self) {
        self.record.donated_gold = self
            .record
            .donated_gold
            .saturating_add(self.config.donation_step);
    }

    /// Undo one sanctuary donation.
    pub fn remove_donation(&mut self) {
        self.record.donated_gold = self
            .record
            .donated_gold
            .saturating_sub(self.config.donation_step);
    }

    // === Unlocked classes ===

    /// Unlocked class ids in unlock order.
    #[must_use]
    pub fn unlocked_classes(&self) -> &[u32] {
        &self.unlocked_classes
    }

    /// Is this class unlocked?
    #[must_use]
    pub fn has_unlocked_class(&self, class_id: u32) -> bool {
        self.unlocked_classes.contains(&class_id)
    }

    /// Unlock a class. Unlocking twice is a no-op.
    pub fn add_unlocked_class(&mut self, class_id: u32) {
        if !self.has_unlocked_class(class_id) {
            self.unlocked_classes.push(class_id);
        }
        self.record.unlocked_classes = join_classes(&self.unlocked_classes);
    }

    /// Lock a class again.
    pub fn remove_unlocked_class(&mut self, class_id: u32) {
        self.unlocked_classes.retain(|&c| c != class_id);
        self.record.unlocked_classes = join_classes(&self.unlocked_classes);
    }
}

fn load_deck(
    event_type: EventType,
    config: &TrackerConfig,
    record: &mut CampaignRecord,
    rng: &mut impl RandomSource,
    messages: &mut Vec<String>,
) -> EventDeck {
    let mut deck = EventDeck::new(event_type, config.population(event_type).clone());
    let saved = record.deck_string(event_type);

    if saved.trim().is_empty() {
        deck.initialize(rng);
    } else if let Err(e) = deck.load(saved) {
        log::warn!("Campaign {:?}: {e}; reinitializing {event_type} event deck", record.name);
        messages.push(format!("Can't load {event_type} Event Deck. Initialized Event Deck."));
        deck.initialize(rng);
    } else {
        return deck;
    }

    record.set_deck_string(event_type, deck.to_string());
    deck
}

fn parse_classes(input: &str) -> Result<Vec<u32>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(|token| token.trim().parse().map_err(|_| token.to_string()))
        .collect()
}

fn join_classes(classes: &[u32]) -> String {
    classes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
