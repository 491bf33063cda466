use std::ops::RangeInclusive;

use crate::error::{PlateError, Result};
use crate::models::{Field, PlateFields};

/// Number of whitespace-separated fields in a plate.
pub const FIELD_COUNT: usize = 3;

/// Allowed length of the region and suffix fields.
pub const LETTER_FIELD_LEN: RangeInclusive<usize> = 1..=2;

/// Exact length of the serial field.
pub const SERIAL_LEN: usize = 4;

/// Region and suffix rule: 1–2 characters, each `A`–`Z`.
pub fn is_letter_field(s: &str) -> bool {
    // All-ASCII, so byte length equals character count.
    LETTER_FIELD_LEN.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_uppercase())
}

/// Serial rule: exactly 4 characters, each `0`–`9`.
pub fn is_serial(s: &str) -> bool {
    s.len() == SERIAL_LEN && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split a plate on whitespace and validate each field.
///
/// Checks run region, serial, suffix; the first failure is returned.
pub fn parse_fields(plate: &str) -> Result<PlateFields<'_>> {
    let tokens: Vec<&str> = plate.split_whitespace().collect();

    let &[region, serial, suffix] = tokens.as_slice() else {
        return Err(PlateError::FieldCount(tokens.len()));
    };

    check(Field::Region, region, is_letter_field)?;
    check(Field::Serial, serial, is_serial)?;
    check(Field::Suffix, suffix, is_letter_field)?;

    Ok(PlateFields { region, serial, suffix })
}

fn check(field: Field, value: &str, rule: fn(&str) -> bool) -> Result<()> {
    if rule(value) {
        Ok(())
    } else {
        Err(PlateError::Malformed {
            field,
            value: value.to_string(),
        })
    }
}
