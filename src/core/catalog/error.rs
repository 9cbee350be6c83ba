//! Catalog Error Types
//!
//! Load-time failures. Query and fact extraction never fail; only a
//! missing or malformed catalog file is fatal.

use std::path::PathBuf;

use thiserror::Error;

/// Catalog loading errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Item {item} has unknown gatherable type: {value}")]
    UnknownGatherableType { item: String, value: String },

    #[error("Catalog {origin} contains no items")]
    Empty { origin: String },
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
