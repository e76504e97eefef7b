//! Shared test utilities for the benchmark integration tests.
//!
//! - `fixtures`: small embedding, question and similarity files on disk

pub mod fixtures;
