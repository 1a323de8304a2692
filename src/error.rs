//! Sync Errors
//!
//! Failures of the remote mirror. They are logged at the sync boundary
//! and never reach the store or the UI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Network or transport failure before a response arrived
    #[error("{method} {url}: request failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("{method} {url}: server returned HTTP {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },

    /// Response body was not the expected JSON
    #[error("{method} {url}: could not decode response: {source}")]
    Decode {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Item has no id, so there is no `/items/{id}` to address
    #[error("item {name:?} has no id and cannot be addressed on the server")]
    MissingId { name: String },
}

pub type SyncResult<T> = Result<T, SyncError>;
