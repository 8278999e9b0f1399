//! Property-based tests for the Prim MST engine.
//!
//! Checks the engine against a sequential Kruskal oracle using the same
//! `(weight, name, input order)` preference, against exhaustive search on
//! tiny graphs, for structural invariants of the returned tree, and for
//! repeatability across runs and threads.

mod equivalence;
mod strategies;
mod structural;
mod types;
