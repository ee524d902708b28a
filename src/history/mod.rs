//! Event history log kept by the campaign.

pub mod record;

pub use record::{EventAction, EventHistory, EventHistoryLogItem};
