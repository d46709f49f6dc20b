//! Reusable node building blocks.

mod conditional;

pub use conditional::Conditional;
