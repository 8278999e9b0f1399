//! Benchmark support crate for powergrid.
//!
//! Provides seeded synthetic substation grids and parameter types used by the
//! Criterion benchmarks for graph loading and the Prim engine.

pub mod error;
pub mod params;
pub mod synthetic;
