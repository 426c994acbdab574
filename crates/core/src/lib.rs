//! # Courtside Core
//!
//! Shared data model for the Courtside reservation engine: the plain records
//! exchanged with the club-management backend (tariffs, reservations,
//! promotions) and the grid types the agenda builder produces.
//!
//! Everything here is a passive value type. The pricing and agenda logic that
//! operates on these records lives in the `courtside-engine` crate.

/// Error types shared across the engine
pub mod errors;
/// Record and grid value types
pub mod models;
