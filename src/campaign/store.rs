//! Persistence façade for campaign records.
//!
//! The tracker does not know how records are stored. It talks to a
//! [`CampaignStore`] and propagates whatever error the store reports.

use rustc_hash::FxHashMap;

use super::record::CampaignRecord;
use crate::error::StoreError;

/// Storage for campaign records.
pub trait CampaignStore {
    /// Insert a new record or replace an existing one.
    ///
    /// Records without an id are assigned a fresh one. Returns the id.
    fn insert_or_replace(&mut self, record: &CampaignRecord) -> Result<u64, StoreError>;

    /// Fetch a record by id.
    fn get(&self, id: u64) -> Result<Option<CampaignRecord>, StoreError>;

    /// Delete a record by id.
    fn delete(&mut self, id: u64) -> Result<(), StoreError>;

    /// All records, ordered by id.
    fn list(&self) -> Result<Vec<CampaignRecord>, StoreError>;
}

/// In-memory store.
///
/// Rows are kept bincode-encoded, so each `get` returns an independent copy.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    rows: FxHashMap<u64, Vec<u8>>,
    last_id: u64,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Is the store empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl CampaignStore for MemoryStore {
    fn insert_or_replace(&mut self, record: &CampaignRecord) -> Result<u64, StoreError> {
        let id = match record.id {
            Some(id) => id,
            None => self.last_id + 1,
        };

        let mut row = record.clone();
        row.id = Some(id);
        let bytes = bincode::serialize(&row)?;

        self.rows.insert(id, bytes);
        self.last_id = self.last_id.max(id);
        Ok(id)
    }

    fn get(&self, id: u64) -> Result<Option<CampaignRecord>, StoreError> {
        match self.rows.get(&id) {
            Some(bytes) => Ok(Some(bincode::deserialize(bytes)?)),
            None => Ok(None),
        }
    }

    fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        self.rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<CampaignRecord>, StoreError> {
        let mut ids: Vec<u64> = self.rows.keys().copied().collect();
        ids.sort_unstable();

        let mut records = Vec::with_capacity(ids.len());
        for id in ids {
            records.extend(self.get(id)?);
        }
        Ok(records)
    }
}
