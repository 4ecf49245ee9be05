//! Error types for Folio kernel operations.

use std::path::PathBuf;

/// Errors that abort a run before any check executes.
///
/// Reconciliation problems are never represented here; those are collected as
/// [`crate::Finding`] values so that a run always completes both checks.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// An input document does not exist at the resolved path.
    #[error("{} not found", .path.display())]
    DocumentMissing { path: PathBuf },

    /// An input document exists but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", .path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project registry file could not be read.
    #[error("failed to read project registry {}: {source}", .path.display())]
    ReadRegistry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project registry file is not valid TOML for the registry schema.
    #[error("invalid project registry toml at {}: {source}", .path.display())]
    ParseRegistry {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The project registry violates a registry rule.
    #[error("invalid project registry: {0}")]
    Registry(String),
}
