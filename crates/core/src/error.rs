//! Error types for the partner logo domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all resolver operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Remote asset service ---
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    // --- Persistent cache ---
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // --- Static catalog ---
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

/// Failures while retrieving an asset content document.
///
/// A missing logo, thumbnail, or color inside an otherwise valid document is
/// never one of these; those fields fall back to defaults instead.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Asset service returned status {status_code}: {message}")]
    Status { status_code: u16, message: String },

    #[error("Response body is not valid JSON: {0}")]
    MalformedBody(String),

    #[error("Response has no document for asset {asset_id}")]
    MissingDocument { asset_id: String },

    #[error("Document for asset {asset_id} has no content")]
    MissingContent { asset_id: String },
}

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog at {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("Failed to parse catalog at {path}: {reason}")]
    ParseFailed { path: PathBuf, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_displays_status() {
        let err = Error::Fetch(FetchError::Status {
            status_code: 404,
            message: "asset not found".into(),
        });
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("asset not found"));
    }

    #[test]
    fn missing_document_names_the_asset() {
        let err = FetchError::MissingDocument {
            asset_id: "abc-123".into(),
        };
        assert!(err.to_string().contains("abc-123"));
    }

    #[test]
    fn store_error_converts_into_top_level() {
        let err: Error = StoreError::Storage("disk full".into()).into();
        assert!(matches!(err, Error::Store(_)));
        assert!(err.to_string().contains("disk full"));
    }
}
