//! jobdeck — terminal client for remote job-listing APIs.
//!
//! The binary crate exposes its command runners and output formatting as
//! public modules so integration tests can import them directly.
//!
//! # Architecture
//!
//! ```text
//! remote job API ──► jobdeck-api ──► jobdeck-core normalizer ──► output
//!                                                                  ▲
//!                                                       commands (CLI verbs)
//! ```
//!
//! Raw payload shapes stop at the normalizer; everything in this crate works
//! on canonical `JobRecord` values only.

pub mod commands;
pub mod output;
