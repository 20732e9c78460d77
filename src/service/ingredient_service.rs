//! The service facade over store, lifecycle, and projections.
//!
//! Every mutation goes through here so the state machine is enforced on
//! one path, and every list is recomputed from the store on each call.
//! Operations are owner-scoped: the `owner_id` comes from the external
//! authentication collaborator and is treated as opaque.

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::ingredient::{
    IngredientDraft, IngredientPatch, IngredientRecord, IngredientStatus, StorageCondition,
};
use crate::lifecycle::{self, TransitionError, TransitionEvent, TransitionOutcome};
use crate::store::IngredientStore;
use crate::views::{
    consumed_in_month, project_fridge, project_history, project_trash, SortMode, TrashItem,
};

use super::ServiceError;

pub struct IngredientService<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S: IngredientStore> IngredientService<S> {
    /// Create a service on the wall clock.
    pub fn new(store: S) -> Self {
        Self {
            store,
            clock: SystemClock,
        }
    }
}

impl<S: IngredientStore, C: Clock> IngredientService<S, C> {
    /// Create a service with an explicit clock (tests, replays).
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Validate a draft and insert a new active ingredient.
    pub fn create_ingredient(
        &self,
        owner_id: &str,
        draft: IngredientDraft,
    ) -> Result<IngredientRecord, ServiceError> {
        let id = self.store.allocate_id();
        let record = IngredientRecord::create(id, owner_id, draft, self.clock.today())?;
        self.store.insert(&record)?;
        debug!("created ingredient {} for owner {}", record.id, owner_id);
        Ok(record)
    }

    /// Patch an active ingredient in place. The patch is validated as a
    /// whole against the resulting field values; a rejected patch leaves
    /// the record untouched.
    ///
    /// Edit checks the *stored* status, not the effective one: an
    /// expired-but-never-discarded record may still have its dates
    /// corrected, which is also how it leaves the trash again.
    pub fn edit_ingredient(
        &self,
        owner_id: &str,
        id: u64,
        patch: IngredientPatch,
    ) -> Result<IngredientRecord, ServiceError> {
        let mut record = self.load(owner_id, id)?;
        if record.status != IngredientStatus::Active {
            return Err(TransitionError::InvalidTransition {
                status: record.status,
                event: TransitionEvent::Edit,
            }
            .into());
        }
        record.apply_patch(patch, self.clock.today())?;
        self.store.update(&record)?;
        debug!("edited ingredient {} for owner {}", id, owner_id);
        Ok(record)
    }

    /// Move an active ingredient to the consumption history. Terminal.
    pub fn mark_consumed(&self, owner_id: &str, id: u64) -> Result<(), ServiceError> {
        self.transition(owner_id, id, TransitionEvent::MarkConsumed)
    }

    /// Explicitly move an active ingredient to the trash.
    pub fn discard_ingredient(&self, owner_id: &str, id: u64) -> Result<(), ServiceError> {
        self.transition(owner_id, id, TransitionEvent::Discard)
    }

    /// Bring a discarded ingredient back to the fridge. A record that is
    /// still past its expiration date reappears in the trash on the next
    /// read until its dates are edited.
    pub fn restore_ingredient(&self, owner_id: &str, id: u64) -> Result<(), ServiceError> {
        self.transition(owner_id, id, TransitionEvent::Restore)
    }

    /// Permanently remove one discarded ingredient.
    pub fn purge_ingredient(&self, owner_id: &str, id: u64) -> Result<(), ServiceError> {
        self.transition(owner_id, id, TransitionEvent::Purge)
    }

    /// Permanently remove every ingredient the owner would see in the
    /// trash, in one atomic operation. Returns the number removed.
    pub fn purge_all_discarded(&self, owner_id: &str) -> Result<usize, ServiceError> {
        let today = self.clock.today();
        let removed = self.store.remove_where(owner_id, &|record| {
            lifecycle::effective_status(record, today) == IngredientStatus::Discarded
        })?;
        debug!("purged {} discarded ingredients for owner {}", removed, owner_id);
        Ok(removed)
    }

    /// The fridge list for one compartment tab, recomputed on every call.
    pub fn list_fridge(
        &self,
        owner_id: &str,
        compartment: StorageCondition,
        sort: SortMode,
    ) -> Result<Vec<IngredientRecord>, ServiceError> {
        let records = self.store.get_all_by_owner(owner_id)?;
        Ok(project_fridge(
            &records,
            compartment,
            sort,
            self.clock.today(),
        ))
    }

    /// The trash list with per-item D-Day, recomputed on every call.
    pub fn list_trash(&self, owner_id: &str) -> Result<Vec<TrashItem>, ServiceError> {
        let records = self.store.get_all_by_owner(owner_id)?;
        Ok(project_trash(&records, self.clock.today()))
    }

    /// The consumption history, most recently consumed first.
    pub fn list_consumption_history(
        &self,
        owner_id: &str,
    ) -> Result<Vec<IngredientRecord>, ServiceError> {
        let records = self.store.get_all_by_owner(owner_id)?;
        Ok(project_history(&records))
    }

    /// How many ingredients the owner consumed in the given month.
    pub fn consumed_count_for_month(
        &self,
        owner_id: &str,
        year: i32,
        month: u32,
    ) -> Result<usize, ServiceError> {
        let records = self.store.get_all_by_owner(owner_id)?;
        Ok(consumed_in_month(&records, year, month))
    }

    fn load(&self, owner_id: &str, id: u64) -> Result<IngredientRecord, ServiceError> {
        self.store
            .get_by_id(owner_id, id)?
            .ok_or(ServiceError::NotFound { id })
    }

    fn transition(
        &self,
        owner_id: &str,
        id: u64,
        event: TransitionEvent,
    ) -> Result<(), ServiceError> {
        let mut record = self.load(owner_id, id)?;
        match lifecycle::apply(&mut record, event, self.clock.today())? {
            TransitionOutcome::Updated => self.store.update(&record)?,
            TransitionOutcome::Removed => {
                self.store.remove(owner_id, id)?;
            }
        }
        debug!("applied {} to ingredient {} for owner {}", event, id, owner_id);
        Ok(())
    }
}
