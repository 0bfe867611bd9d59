//! Blog domain records.
//!
//! # Responsibility
//! - Define the Author and Post records and their identifiers.
//! - Route every field assignment through `crate::validation`.
//!
//! # Invariants
//! - Records are never observable in a partially validated state.
//! - No relationship between Author and Post is modelled.

pub mod author;
pub mod post;
