//! Error taxonomy for the remote job API adapter.
//!
//! Only transport- and protocol-level failures surface here. Payload *shape*
//! anomalies (missing fields, wrong types, mixed spellings) are absorbed by
//! the normalizer in jobdeck-core and never become errors.

/// Failure talking to the remote job API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body read, JSON decode).
    #[error("job API transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("job API returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// A favorites mutation referenced a job the backend does not know.
    #[error("favorite not found: {id}")]
    NotFound { id: String },

    /// The response decoded as JSON but is missing a field this endpoint is
    /// contractually required to provide (e.g. `is_favorite` from a toggle).
    #[error("unexpected payload from job API: {0}")]
    UnexpectedPayload(&'static str),

    /// The configuration supplied an empty base-URL list.
    #[error("no job API base URLs configured")]
    NoBaseUrls,
}
