//! Testing infrastructure for jobboard integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated data directory plus a published data file
//! - `fixtures`: Job record builders and canned collections
//! - `http`: A stub HTTP server for fetch and link-check tests

pub mod fixtures;
pub mod http;
pub mod world;

pub use fixtures::{JobBuilder, descending_jobs, job, to_json};
pub use http::{StubResponse, StubServer, unreachable_url};
pub use world::{CliResult, TestWorld};
