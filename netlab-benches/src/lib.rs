//! Benchmark support crate for netlab.
//!
//! Provides synthetic ROI tables and parameter types used by the Criterion
//! benchmarks for random-graph generation and ROI record cleaning.

pub mod error;
pub mod params;
pub mod roi;
