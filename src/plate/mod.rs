//! Plate grammar and parity classification.
//!
//! - [`grammar`] — field rules (region, serial, suffix) and [`grammar::parse_fields`].
//! - [`classifier`] — entry points that turn plate strings into
//!   [`Classification`](crate::models::Classification) labels.

pub mod classifier;
pub mod grammar;
