mod clock;
mod dday;
mod ingredient;
mod lifecycle;
mod service;
mod store;
mod views;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dday::{d_day, DDay, DDayLabel, URGENT_WINDOW_DAYS};
pub use ingredient::{
    IngredientDraft, IngredientPatch, IngredientRecord, IngredientStatus, StorageCondition,
    ValidationError, PLACEHOLDER_NAME,
};
pub use lifecycle::{
    effective_status, TransitionError, TransitionEvent, TransitionOutcome, TransitionRecord,
};
pub use service::{IngredientService, ServiceError};
pub use store::{IngredientStore, InMemoryIngredientStore, StoreError};
pub use views::{
    consumed_in_month, project_fridge, project_history, project_trash, SortMode, TrashItem,
};

// Re-export the calendar-date type callers exchange with the service
pub use chrono::NaiveDate;
