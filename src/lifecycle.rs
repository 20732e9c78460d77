//! LifecycleManager - the ingredient state machine.
//!
//! States: `Active`, `Consumed`, `Discarded`. `Consumed` is terminal;
//! `Discarded` is recoverable via restore or removable via purge. Expiry
//! is passive: an `Active` record whose expiration date lies strictly in
//! the past is *treated* as `Discarded` by every read without the stored
//! status changing. [`effective_status`] is the single authority for that
//! rule; preconditions here check it, so racing transitions resolve by
//! precondition failure instead of double-applying a side effect.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ingredient::{IngredientRecord, IngredientStatus};

/// Lifecycle event requested against a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransitionEvent {
    Create,
    Edit,
    MarkConsumed,
    Discard,
    Restore,
    Purge,
}

impl fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionEvent::Create => write!(f, "create"),
            TransitionEvent::Edit => write!(f, "edit"),
            TransitionEvent::MarkConsumed => write!(f, "markConsumed"),
            TransitionEvent::Discard => write!(f, "discard"),
            TransitionEvent::Restore => write!(f, "restore"),
            TransitionEvent::Purge => write!(f, "purge"),
        }
    }
}

/// One applied transition: what happened and on which calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub event: TransitionEvent,
    pub recorded_on: NaiveDate,
}

impl TransitionRecord {
    pub fn new(event: TransitionEvent, recorded_on: NaiveDate) -> Self {
        Self { event, recorded_on }
    }
}

/// The requested event is not legal from the record's current status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionError {
    InvalidTransition {
        status: IngredientStatus,
        event: TransitionEvent,
    },
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::InvalidTransition { status, event } => write!(
                f,
                "cannot apply {} to an ingredient in status {}",
                event, status
            ),
        }
    }
}

impl std::error::Error for TransitionError {}

/// What [`apply`] did to the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The record mutated in place and must be written back.
    Updated,
    /// The record must be removed from the store (purge).
    Removed,
}

/// The status a record logically holds on a given day.
///
/// `Active` with `expiration_date < today` (strict) reads as `Discarded`;
/// `Consumed` and `Discarded` pass through unchanged. Consumed records do
/// not expire further. The stored `status` field is never rewritten by
/// this check; callers that bypass the view layer and read `status`
/// directly see stale data.
pub fn effective_status(record: &IngredientRecord, today: NaiveDate) -> IngredientStatus {
    match record.status {
        IngredientStatus::Active if record.expiration_date < today => {
            IngredientStatus::Discarded
        }
        status => status,
    }
}

/// Validate and apply a lifecycle event in one step.
///
/// Preconditions are evaluated against the *effective* status, so a
/// discard of an already-expired record fails the same way a double
/// discard does, and a purge reaches records that expired but were never
/// explicitly discarded. On success the record's status is updated and a
/// [`TransitionRecord`] appended, or `Removed` is signalled for purge.
pub fn apply(
    record: &mut IngredientRecord,
    event: TransitionEvent,
    today: NaiveDate,
) -> Result<TransitionOutcome, TransitionError> {
    let status = effective_status(record, today);
    let next = match (status, event) {
        (IngredientStatus::Active, TransitionEvent::MarkConsumed) => IngredientStatus::Consumed,
        (IngredientStatus::Active, TransitionEvent::Discard) => IngredientStatus::Discarded,
        (IngredientStatus::Discarded, TransitionEvent::Restore) => IngredientStatus::Active,
        (IngredientStatus::Discarded, TransitionEvent::Purge) => {
            return Ok(TransitionOutcome::Removed);
        }
        _ => return Err(TransitionError::InvalidTransition { status, event }),
    };
    record.status = next;
    record
        .transitions
        .push(TransitionRecord::new(event, today));
    Ok(TransitionOutcome::Updated)
}
