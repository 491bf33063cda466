use serde::{Deserialize, Serialize};

/// Outcome of classifying a single plate string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    Even,
    Odd,
    Invalid,
}

impl Classification {
    /// The label emitted for this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Even => "Even",
            Classification::Odd => "Odd",
            Classification::Invalid => "Invalid",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the three whitespace-separated fields of a plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    Region,
    Serial,
    Suffix,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Region => write!(f, "region"),
            Field::Serial => write!(f, "serial"),
            Field::Suffix => write!(f, "suffix"),
        }
    }
}

/// A plate split into its fields. Borrowed from the input string; only
/// produced by [`parse_fields`](crate::plate::grammar::parse_fields) once
/// every field has been validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlateFields<'a> {
    pub region: &'a str,
    pub serial: &'a str,
    pub suffix: &'a str,
}

impl PlateFields<'_> {
    /// Parity of the last serial digit.
    pub fn parity(&self) -> Classification {
        match self.serial.chars().last().and_then(|c| c.to_digit(10)) {
            Some(d) if d % 2 == 0 => Classification::Even,
            Some(_) => Classification::Odd,
            // Unreachable for validated fields; still never panics.
            None => Classification::Invalid,
        }
    }
}
