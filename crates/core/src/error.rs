use crate::types::DbId;

/// Generic domain errors shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure reported by a storage backend behind one of the store traits.
///
/// The backend error is kept as the source so callers can log it, but the
/// roll logic never inspects it.
#[derive(Debug, thiserror::Error)]
#[error("Storage error: {0}")]
pub struct StoreError(#[source] pub Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self(Box::new(err))
    }
}

/// How a pool was looked up, for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolKey {
    Id(DbId),
    Type(String),
}

impl std::fmt::Display for PoolKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Type(pool_type) => write!(f, "type '{pool_type}'"),
        }
    }
}

/// Errors raised by range-table maintenance and rolling.
#[derive(Debug, thiserror::Error)]
pub enum GachaError {
    /// Candidate is malformed: `max < min`, `min < 0`, `max > 100` or a
    /// granted amount below one.
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An existing range conflicts with the candidate bounds.
    #[error("Already an item reachable with values: {min} -> {max}")]
    Overlap { min: i32, max: i32 },

    #[error("Pool '{pool_type}' has no ranges to roll against")]
    EmptyPool { pool_type: String },

    #[error("Pool with {0} not found")]
    PoolNotFound(PoolKey),

    #[error("User with id {0} not found")]
    UserNotFound(DbId),

    #[error("Item {0} not found")]
    ItemNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
