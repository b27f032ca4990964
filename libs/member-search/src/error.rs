use thiserror::Error;

/// Library-local result type.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Typed error for the search repository and helpers.
///
/// An empty result set is not an error: both `search` variants return empty
/// collections (and lookups return `None`) for "nothing matched".
#[derive(Debug, Error)]
pub enum SearchError {
    /// Caller-contract violation, rejected before any store access.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying store failure, propagated unchanged. Queries are not
    /// retried here; the store client owns timeouts and idempotency.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
