//! Shared test utilities used across hampath crates.

pub mod proptest_profile;
pub mod tracing;
