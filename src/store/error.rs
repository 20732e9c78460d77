use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
    NotFound { id: u64 },
    DuplicateId { id: u64 },
    Serde(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
            StoreError::NotFound { id } => write!(f, "ingredient {} not found", id),
            StoreError::DuplicateId { id } => {
                write!(f, "ingredient id {} already exists", id)
            }
            StoreError::Serde(message) => write!(f, "stored record corrupt: {}", message),
        }
    }
}

impl std::error::Error for StoreError {}
