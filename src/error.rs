//! Reasons a plate string is rejected.

use thiserror::Error;

use crate::models::Field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlateError {
    #[error("expected 3 whitespace-separated fields, found {0}")]
    FieldCount(usize),

    #[error("malformed {field} field `{value}`")]
    Malformed { field: Field, value: String },
}

pub type Result<T> = std::result::Result<T, PlateError>;
