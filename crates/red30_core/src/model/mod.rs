//! Domain records persisted by the repository layer.
//!
//! # Responsibility
//! - Define the canonical shapes for world reference data and the sales
//!   roster.
//!
//! # Invariants
//! - `Country` rows are read-only from this crate's perspective.
//! - Store-assigned ids never appear on insert shapes.

pub mod city;
pub mod salesperson;
