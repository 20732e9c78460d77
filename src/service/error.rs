use std::fmt;

use crate::ingredient::ValidationError;
use crate::lifecycle::TransitionError;
use crate::store::StoreError;

/// Error surface of [`IngredientService`](super::IngredientService).
///
/// A missing record and another owner's record both surface as
/// `NotFound`, so callers cannot distinguish "does not exist" from "not
/// yours". Errors propagate unchanged; the service never retries and
/// never converts a failure into an empty success.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceError {
    Validation(ValidationError),
    Transition(TransitionError),
    NotFound { id: u64 },
    Store(StoreError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Validation(err) => write!(f, "invalid ingredient input: {}", err),
            ServiceError::Transition(err) => write!(f, "{}", err),
            ServiceError::NotFound { id } => write!(f, "ingredient {} not found", id),
            ServiceError::Store(err) => write!(f, "store failure: {}", err),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Validation(err) => Some(err),
            ServiceError::Transition(err) => Some(err),
            ServiceError::NotFound { .. } => None,
            ServiceError::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        ServiceError::Validation(err)
    }
}

impl From<TransitionError> for ServiceError {
    fn from(err: TransitionError) -> Self {
        ServiceError::Transition(err)
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ServiceError::NotFound { id },
            other => ServiceError::Store(other),
        }
    }
}
