//! Shared domain types for the campus workspace.
//!
//! Holds the error taxonomy, common type aliases, and the normalization
//! functions applied to every record before it is persisted.

pub mod error;
pub mod normalize;
pub mod types;
