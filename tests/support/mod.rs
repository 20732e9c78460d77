#![allow(dead_code)]

use chrono::NaiveDate;
use crisper::{FixedClock, IngredientDraft, IngredientService, InMemoryIngredientStore};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A service pinned to a fixed day, plus a clock handle to advance it.
pub fn service_at(
    today: NaiveDate,
) -> (
    IngredientService<InMemoryIngredientStore, FixedClock>,
    FixedClock,
) {
    let clock = FixedClock::new(today);
    let service = IngredientService::with_clock(InMemoryIngredientStore::new(), clock.clone());
    (service, clock)
}

pub fn draft(
    name: &str,
    condition: &str,
    storage: NaiveDate,
    expiration: NaiveDate,
) -> IngredientDraft {
    IngredientDraft {
        name: name.to_string(),
        amount: 1.0,
        unit: None,
        category: None,
        storage_condition: Some(condition.to_string()),
        storage_date: storage,
        expiration_date: expiration,
    }
}
