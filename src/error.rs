// error.rs - Error types for the catalog
//
// Every catalog action catches its own failure and turns it into a user
// notice, so none of these are fatal. They are still returned to callers
// so tests (and the UI) can branch on them.

use thiserror::Error;

/// Failures of the underlying key/value store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,

    #[error("storage quota exceeded ({needed} bytes needed, {limit} allowed)")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("storage rejected the write: {0}")]
    WriteRejected(String),
}

/// Form input that cannot be saved
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("product name must not be empty")]
    EmptyName,

    #[error("product price must be greater than zero")]
    NonPositivePrice,
}

/// Top-level error for catalog actions
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The stored collection could not be read or parsed
    #[error("failed to read stored products: {0}")]
    StoreRead(String),

    /// Persisting the collection failed; in-memory state was left untouched
    #[error("failed to write products: {0}")]
    StoreWrite(#[from] StoreError),

    #[error("invalid product: {0}")]
    Validation(#[from] ValidationError),

    #[error("product {0} no longer exists")]
    NotFound(String),

    #[error("no product form is open")]
    FormClosed,

    /// The current role may only view the catalog
    #[error("this action requires the admin role")]
    NotPermitted,

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::StoreRead(err.to_string())
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, CatalogError>;
