//! `plate-checkr` — validate license-plate strings and classify them by the
//! parity of their last serial digit.
//!
//! A plate is three whitespace-separated fields: a 1–2 letter uppercase
//! region, a 4-digit serial, and a 1–2 letter uppercase suffix
//! (`"B 1234 XY"`).
//!
//! # Flow
//! 1. Split the plate and validate each field ([`plate::grammar::parse_fields`]).
//! 2. Map the last serial digit to [`Classification::Even`] or [`Classification::Odd`]
//!    ([`models::PlateFields::parity`]).
//! 3. Anything that fails step 1 becomes [`Classification::Invalid`]
//!    ([`plate::classifier::classify_plate`]).
//!
//! ```
//! use plate_checkr::{classify, Classification};
//!
//! let labels = classify(&["D 1011 HY", "D 423", "DA 7890 G"]);
//! assert_eq!(
//!     labels,
//!     vec![Classification::Odd, Classification::Invalid, Classification::Even]
//! );
//! ```

pub mod error;
pub mod models;
pub mod plate;

pub use error::PlateError;
pub use models::{Classification, Field, PlateFields};
pub use plate::classifier::{classify, classify_plate};
pub use plate::grammar::parse_fields;
