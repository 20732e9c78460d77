//! IngredientStore - storage contract for ingredient records.

mod error;
mod in_memory;

pub use error::StoreError;
pub use in_memory::InMemoryIngredientStore;

use crate::ingredient::IngredientRecord;

/// Abstract CRUD storage for ingredient records.
///
/// All reads and writes are scoped to an owner; a record belonging to a
/// different owner behaves exactly like a missing one, so callers cannot
/// probe for existence. Implementations must guarantee read-after-write
/// consistency within one logical session and must preserve insertion
/// order in [`get_all_by_owner`](IngredientStore::get_all_by_owner) —
/// the fridge projection's de-duplication tie-break depends on it.
pub trait IngredientStore: Send + Sync {
    /// Hand out the next record id. Ids are unique across every status
    /// and are never reused, including after a purge.
    fn allocate_id(&self) -> u64;

    /// Insert a new record. Fails if the id is already taken.
    fn insert(&self, record: &IngredientRecord) -> Result<(), StoreError>;

    /// Fetch one record by id. Returns `None` when the record does not
    /// exist or belongs to a different owner.
    fn get_by_id(&self, owner_id: &str, id: u64) -> Result<Option<IngredientRecord>, StoreError>;

    /// All records for an owner, any status, in insertion order.
    fn get_all_by_owner(&self, owner_id: &str) -> Result<Vec<IngredientRecord>, StoreError>;

    /// Replace an existing record, matched by `(owner_id, id)`.
    fn update(&self, record: &IngredientRecord) -> Result<(), StoreError>;

    /// Remove one record. Returns true if it existed for this owner.
    fn remove(&self, owner_id: &str, id: u64) -> Result<bool, StoreError>;

    /// Remove every record of the owner matching the predicate, under a
    /// single write lock: a concurrent reader sees all of them or none.
    /// Returns the number removed.
    fn remove_where(
        &self,
        owner_id: &str,
        predicate: &dyn Fn(&IngredientRecord) -> bool,
    ) -> Result<usize, StoreError>;
}
