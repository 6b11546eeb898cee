//! jobdeck-core — canonical job types and the payload normalizer.
//!
//! This crate is the leaf of the workspace: pure data shapes and pure
//! transformations, no I/O.
//!
//! # Architecture
//!
//! ```text
//! remote API ──► jobdeck-api ──► normalizer ──► JobRecord ──► CLI output
//!                                    ▲
//!                              raw serde_json::Value
//! ```
//!
//! The normalizer is the only place raw payload shapes are known; everything
//! downstream sees canonical [`JobRecord`] values only.

pub mod config;
pub mod normalizer;
pub mod types;

pub use types::{Category, FavoriteContext, JobRecord, JobsPage};
