//! # Courtside Engine
//!
//! The reservation pricing and day-agenda engine for the Courtside
//! club-management application. Two cooperating components:
//!
//! - **Pricing**: resolves which hourly tariff applies to a booking (explicit
//!   override, then day/night club tariff, then generic fallback), computes
//!   the total amount due, classifies start times as day or night, and picks
//!   the best applicable promotional discount.
//! - **Agenda**: lays a day's reservations out per court into a
//!   non-overlapping, time-discretized grid for display.
//!
//! Both components are pure, synchronous transformations over the plain
//! records defined in `courtside-core`: no I/O, no shared state, no internal
//! clock reads. Any "current time" an outcome depends on is an argument.
//! Malformed upstream data degrades to safe defaults (no night window, zero
//! price, invisible reservation) instead of erroring; only caller contract
//! violations such as a zero slot size return `Err`.

/// Day-agenda grid construction
pub mod agenda;
/// Night-window extraction from club records
pub mod night_window;
/// Tariff resolution and amount calculation
pub mod pricing;
