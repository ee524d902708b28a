//! Campaign layer: decks, history, and persistence.
//!
//! ## Key Types
//!
//! - `Campaign`: owns both event decks and applies every mutation to the record
//! - `CampaignRecord`: the persisted row, with decks in string form
//! - `CampaignStore`: persistence façade, with `MemoryStore` as an in-memory store
//! - `EventResolution`: outcome and decision recorded for a drawn event

pub mod prosperity;
pub mod record;
pub mod state;
pub mod store;

pub use record::CampaignRecord;
pub use state::{Campaign, EventResolution};
pub use store::{CampaignStore, MemoryStore};
