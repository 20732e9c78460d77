//! IngredientRecord - the single entity tracked by the engine.

use std::fmt;

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::lifecycle::{TransitionEvent, TransitionRecord};

/// Reserved sentinel that upstream forms submit in place of a real name.
/// Records carrying it are filtered out of every view.
pub const PLACEHOLDER_NAME: &str = "string";

/// Storage compartment of an ingredient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageCondition {
    Refrigerated,
    Frozen,
    Ambient,
}

impl StorageCondition {
    /// Recognize a wire label, case-insensitively. Unknown labels are not
    /// an error; they map to `None` and views bucket them as refrigerated.
    pub fn parse(label: &str) -> Option<StorageCondition> {
        match label.trim().to_ascii_uppercase().as_str() {
            "REFRIGERATED" => Some(StorageCondition::Refrigerated),
            "FROZEN" => Some(StorageCondition::Frozen),
            "AMBIENT" => Some(StorageCondition::Ambient),
            _ => None,
        }
    }

    /// Parse an optional raw label, logging when a present-but-unrecognized
    /// value falls back to the refrigerated bucket.
    pub(crate) fn normalize(label: Option<&str>) -> Option<StorageCondition> {
        let label = label?;
        let parsed = Self::parse(label);
        if parsed.is_none() {
            warn!(
                "unrecognized storage condition {:?}, falling back to refrigerated bucket",
                label
            );
        }
        parsed
    }
}

impl fmt::Display for StorageCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageCondition::Refrigerated => write!(f, "REFRIGERATED"),
            StorageCondition::Frozen => write!(f, "FROZEN"),
            StorageCondition::Ambient => write!(f, "AMBIENT"),
        }
    }
}

/// Stored lifecycle status. Callers outside the engine must not act on
/// this field alone: an `Active` record whose expiration date has passed
/// is logically discarded. See [`crate::lifecycle::effective_status`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngredientStatus {
    Active,
    Consumed,
    Discarded,
}

impl fmt::Display for IngredientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientStatus::Active => write!(f, "ACTIVE"),
            IngredientStatus::Consumed => write!(f, "CONSUMED"),
            IngredientStatus::Discarded => write!(f, "DISCARDED"),
        }
    }
}

/// Malformed or inconsistent ingredient input. Never partially applied:
/// a rejected create inserts nothing and a rejected edit changes nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    EmptyName,
    InvalidAmount(f64),
    StorageAfterExpiration {
        storage: NaiveDate,
        expiration: NaiveDate,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "ingredient name must not be empty"),
            ValidationError::InvalidAmount(amount) => {
                write!(f, "amount must be a non-negative finite number, got {}", amount)
            }
            ValidationError::StorageAfterExpiration {
                storage,
                expiration,
            } => write!(
                f,
                "storage date {} is after expiration date {}",
                storage, expiration
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Create input handed over by a collaborator (form screen, transport).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IngredientDraft {
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Raw storage-condition label; anything but the three known tokens
    /// lands in the refrigerated fallback bucket.
    #[serde(default)]
    pub storage_condition: Option<String>,
    pub storage_date: NaiveDate,
    pub expiration_date: NaiveDate,
}

/// Partial edit of an active ingredient. Absent fields keep their value.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IngredientPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub storage_condition: Option<String>,
    #[serde(default)]
    pub storage_date: Option<NaiveDate>,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

/// A single refrigerated-food item owned by one user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub id: u64,
    pub owner_id: String,
    pub name: String,
    pub amount: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// `None` means the input carried no recognizable storage condition;
    /// every view surfaces such records under the refrigerated tab.
    pub storage_condition: Option<StorageCondition>,
    pub storage_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub status: IngredientStatus,
    /// Append-only log of applied transitions, one entry each.
    pub transitions: Vec<TransitionRecord>,
}

impl IngredientRecord {
    /// Validate a draft and build the record in status `Active`.
    pub fn create(
        id: u64,
        owner_id: &str,
        draft: IngredientDraft,
        today: NaiveDate,
    ) -> Result<IngredientRecord, ValidationError> {
        validate(&draft.name, draft.amount, draft.storage_date, draft.expiration_date)?;
        let storage_condition = StorageCondition::normalize(draft.storage_condition.as_deref());
        Ok(IngredientRecord {
            id,
            owner_id: owner_id.to_string(),
            name: draft.name,
            amount: draft.amount,
            unit: draft.unit,
            category: draft.category,
            storage_condition,
            storage_date: draft.storage_date,
            expiration_date: draft.expiration_date,
            status: IngredientStatus::Active,
            transitions: vec![TransitionRecord::new(TransitionEvent::Create, today)],
        })
    }

    /// Apply a patch, all or nothing: the candidate field values are
    /// validated together before any of them is written back.
    pub fn apply_patch(
        &mut self,
        patch: IngredientPatch,
        today: NaiveDate,
    ) -> Result<(), ValidationError> {
        let name = patch.name.unwrap_or_else(|| self.name.clone());
        let amount = patch.amount.unwrap_or(self.amount);
        let storage_date = patch.storage_date.unwrap_or(self.storage_date);
        let expiration_date = patch.expiration_date.unwrap_or(self.expiration_date);
        validate(&name, amount, storage_date, expiration_date)?;

        self.name = name;
        self.amount = amount;
        self.storage_date = storage_date;
        self.expiration_date = expiration_date;
        if let Some(unit) = patch.unit {
            self.unit = Some(unit);
        }
        if let Some(category) = patch.category {
            self.category = Some(category);
        }
        if patch.storage_condition.is_some() {
            self.storage_condition =
                StorageCondition::normalize(patch.storage_condition.as_deref());
        }
        self.transitions
            .push(TransitionRecord::new(TransitionEvent::Edit, today));
        Ok(())
    }

    /// The compartment tab this record belongs to. Records without a
    /// recognized storage condition surface under the refrigerated tab.
    pub fn compartment(&self) -> StorageCondition {
        self.storage_condition
            .unwrap_or(StorageCondition::Refrigerated)
    }

    /// The calendar day this record was marked consumed, if it ever was.
    /// Orders the consumption-history view.
    pub fn consumed_on(&self) -> Option<NaiveDate> {
        self.transitions
            .iter()
            .rev()
            .find(|t| t.event == TransitionEvent::MarkConsumed)
            .map(|t| t.recorded_on)
    }

    /// True when the name is empty, whitespace-only, or the reserved
    /// placeholder token. Such records are excluded from every view.
    pub fn has_placeholder_name(&self) -> bool {
        let trimmed = self.name.trim();
        trimmed.is_empty() || trimmed == PLACEHOLDER_NAME
    }
}

fn validate(
    name: &str,
    amount: f64,
    storage_date: NaiveDate,
    expiration_date: NaiveDate,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !amount.is_finite() || amount < 0.0 {
        return Err(ValidationError::InvalidAmount(amount));
    }
    if storage_date > expiration_date {
        return Err(ValidationError::StorageAfterExpiration {
            storage: storage_date,
            expiration: expiration_date,
        });
    }
    Ok(())
}
