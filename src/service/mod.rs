//! IngredientService - the single mutation and query path for callers.

mod error;
mod ingredient_service;

pub use error::ServiceError;
pub use ingredient_service::IngredientService;
