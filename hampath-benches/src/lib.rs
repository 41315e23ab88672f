//! Benchmark support crate for hampath.
//!
//! Provides seeded graph families and parameter types used by the Criterion
//! benchmarks of the path search engine.

pub mod error;
pub mod families;
pub mod params;
