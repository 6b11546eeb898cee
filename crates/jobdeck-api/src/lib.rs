//! jobdeck-api — remote job API adapter for jobdeck.
//!
//! Thin async HTTP layer over the job-listing backend: one shared client,
//! base-URL failover, and an error taxonomy for transport/protocol failures.
//! Every payload it receives is passed to the jobdeck-core normalizer
//! untouched, so inconsistent field names and collection shapes never leak
//! past this crate's return types.
//!
//! Caching, staleness windows, request deduplication, and retry budgets are
//! deliberately not here; callers own that policy.

pub mod client;
pub mod error;
pub mod query;

pub use client::JobsClient;
pub use error::ApiError;
pub use query::JobQuery;
