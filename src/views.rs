//! ViewProjector - derives the fridge, trash, and history collections.
//!
//! Projections are pure functions over a slice of records plus "today";
//! nothing is cached and nothing is written back. Every screen must read
//! through here: the projections are where passive expiry is reconciled
//! against the stored status.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dday::{d_day, DDay};
use crate::ingredient::{IngredientRecord, IngredientStatus, StorageCondition};
use crate::lifecycle::effective_status;

/// Ordering of the fridge view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortMode {
    /// Most recently stored first.
    ByRegistration,
    /// Soonest-expiring first.
    ByExpiry,
}

/// One trash entry: the record plus its D-Day for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrashItem {
    pub record: IngredientRecord,
    pub d_day: DDay,
}

/// The fridge list for one compartment tab.
///
/// In order: drop records that are not effectively active (passive
/// expiry), drop blank/placeholder names, de-duplicate by exact name
/// keeping the first in insertion order, then filter to the selected
/// compartment. De-duplication runs before the compartment filter, so a
/// duplicate name in another compartment still suppresses later entries.
/// Sort ties are broken by id ascending for determinism.
pub fn project_fridge(
    records: &[IngredientRecord],
    compartment: StorageCondition,
    sort: SortMode,
    today: NaiveDate,
) -> Vec<IngredientRecord> {
    let mut seen = HashSet::new();
    let mut items: Vec<IngredientRecord> = records
        .iter()
        .filter(|r| effective_status(r, today) == IngredientStatus::Active)
        .filter(|r| !r.has_placeholder_name())
        .filter(|r| seen.insert(r.name.clone()))
        .filter(|r| r.compartment() == compartment)
        .cloned()
        .collect();

    match sort {
        SortMode::ByRegistration => {
            items.sort_by(|a, b| b.storage_date.cmp(&a.storage_date).then(a.id.cmp(&b.id)));
        }
        SortMode::ByExpiry => {
            items.sort_by(|a, b| {
                a.expiration_date
                    .cmp(&b.expiration_date)
                    .then(a.id.cmp(&b.id))
            });
        }
    }
    items
}

/// The trash list: records stored as discarded plus active records whose
/// expiration date has passed, soonest-expired first.
pub fn project_trash(records: &[IngredientRecord], today: NaiveDate) -> Vec<TrashItem> {
    let mut items: Vec<&IngredientRecord> = records
        .iter()
        .filter(|r| effective_status(r, today) == IngredientStatus::Discarded)
        .collect();
    items.sort_by(|a, b| {
        a.expiration_date
            .cmp(&b.expiration_date)
            .then(a.id.cmp(&b.id))
    });
    items
        .into_iter()
        .map(|r| TrashItem {
            d_day: d_day(today, r.expiration_date),
            record: r.clone(),
        })
        .collect()
}

/// The consumption history: consumed records, most recently consumed
/// first. Consumed is terminal, so the stored status is authoritative
/// here and no expiry reconciliation applies.
pub fn project_history(records: &[IngredientRecord]) -> Vec<IngredientRecord> {
    let mut items: Vec<IngredientRecord> = records
        .iter()
        .filter(|r| r.status == IngredientStatus::Consumed)
        .cloned()
        .collect();
    items.sort_by(|a, b| {
        b.consumed_on()
            .cmp(&a.consumed_on())
            .then(b.id.cmp(&a.id))
    });
    items
}

/// How many ingredients were marked consumed in the given month.
pub fn consumed_in_month(records: &[IngredientRecord], year: i32, month: u32) -> usize {
    records
        .iter()
        .filter(|r| r.status == IngredientStatus::Consumed)
        .filter_map(|r| r.consumed_on())
        .filter(|d| d.year() == year && d.month() == month)
        .count()
}
