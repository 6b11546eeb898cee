//! Shared test utilities for the jobdeck integration harness.
//!
//! Import everything via `mod common; use common::*;` at the top of each
//! harness file. Not every harness uses every helper.
#![allow(dead_code)]

pub mod fake_job_api;
pub mod fixtures;
pub mod ids;

pub use fixtures::*;
pub use ids::*;
