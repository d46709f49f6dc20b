//! Shared demo workflow types for the examples.
//!
//! Concrete states and nodes live here, not in the framework crate; each
//! example wires them into a graph its own way.

pub mod approval;
