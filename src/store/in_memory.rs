//! InMemoryIngredientStore - HashMap-backed store for testing and development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::ingredient::IngredientRecord;

use super::{IngredientStore, StoreError};

/// Internal stored representation of a record.
///
/// The id is kept alongside the serialized bytes so lookups and removals
/// do not have to deserialize every entry.
struct StoredRecord {
    id: u64,
    bytes: Vec<u8>,
}

/// In-memory ingredient store backed by a HashMap.
///
/// Storage key is the owner id; each owner maps to a Vec in insertion
/// order. Clone-friendly via Arc: clones share storage and the id
/// sequence.
#[derive(Clone)]
pub struct InMemoryIngredientStore {
    storage: Arc<RwLock<HashMap<String, Vec<StoredRecord>>>>,
    next_id: Arc<AtomicU64>,
}

impl Default for InMemoryIngredientStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryIngredientStore {
    /// Create a new empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    fn encode(record: &IngredientRecord) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(record).map_err(|e| StoreError::Serde(e.to_string()))
    }

    fn decode(bytes: &[u8]) -> Result<IngredientRecord, StoreError> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::Serde(e.to_string()))
    }
}

impl IngredientStore for InMemoryIngredientStore {
    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn insert(&self, record: &IngredientRecord) -> Result<(), StoreError> {
        let bytes = Self::encode(record)?;
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("insert"))?;

        let records = storage.entry(record.owner_id.clone()).or_default();
        if records.iter().any(|stored| stored.id == record.id) {
            return Err(StoreError::DuplicateId { id: record.id });
        }
        records.push(StoredRecord {
            id: record.id,
            bytes,
        });
        Ok(())
    }

    fn get_by_id(&self, owner_id: &str, id: u64) -> Result<Option<IngredientRecord>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_by_id"))?;

        match storage
            .get(owner_id)
            .and_then(|records| records.iter().find(|stored| stored.id == id))
        {
            Some(stored) => Ok(Some(Self::decode(&stored.bytes)?)),
            None => Ok(None),
        }
    }

    fn get_all_by_owner(&self, owner_id: &str) -> Result<Vec<IngredientRecord>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_all_by_owner"))?;

        let mut results = Vec::new();
        if let Some(records) = storage.get(owner_id) {
            for stored in records {
                results.push(Self::decode(&stored.bytes)?);
            }
        }
        Ok(results)
    }

    fn update(&self, record: &IngredientRecord) -> Result<(), StoreError> {
        let bytes = Self::encode(record)?;
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        let stored = storage
            .get_mut(&record.owner_id)
            .and_then(|records| records.iter_mut().find(|stored| stored.id == record.id))
            .ok_or(StoreError::NotFound { id: record.id })?;
        stored.bytes = bytes;
        Ok(())
    }

    fn remove(&self, owner_id: &str, id: u64) -> Result<bool, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove"))?;

        let Some(records) = storage.get_mut(owner_id) else {
            return Ok(false);
        };
        let before = records.len();
        records.retain(|stored| stored.id != id);
        Ok(records.len() < before)
    }

    fn remove_where(
        &self,
        owner_id: &str,
        predicate: &dyn Fn(&IngredientRecord) -> bool,
    ) -> Result<usize, StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("remove_where"))?;

        let Some(records) = storage.get_mut(owner_id) else {
            return Ok(0);
        };

        // Decode and decide before touching the Vec, so a corrupt entry
        // fails the whole operation instead of leaving a partial removal.
        let mut keep = Vec::with_capacity(records.len());
        for stored in records.iter() {
            keep.push(!predicate(&Self::decode(&stored.bytes)?));
        }

        let before = records.len();
        let mut flags = keep.into_iter();
        records.retain(|_| flags.next().unwrap_or(true));
        Ok(before - records.len())
    }
}
