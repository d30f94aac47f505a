//! Error types for the store.

use thiserror::Error;

/// Main error type for store operations.
///
/// Construction is the only fallible surface: well-typed mutation and
/// subscription-management calls always succeed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Invalid store name: must be non-empty")]
    InvalidName,
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
