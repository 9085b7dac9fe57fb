//! Typed error hierarchy for the onboarding wizard.
//!
//! `IntegrationError` covers the external-call taxonomy: network/HTTP
//! failure, a non-success response body, and file-read failure. All of them
//! are caught at the call site, shown to the user as a toast, and are locally
//! recoverable — the user may retry the same action.

use thiserror::Error;

/// Errors from the external save/upload adapters.
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Endpoint returned an error: {message}")]
    Endpoint { message: String },

    #[error("Failed to read photo at {path}: {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
