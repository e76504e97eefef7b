//! Shared test utilities for the geometry integration tests.
//!
//! - `fixtures`: deterministic embedding tables and points

pub mod fixtures;
