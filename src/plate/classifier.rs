use log::{debug, trace};

use crate::models::Classification;
use crate::plate::grammar::parse_fields;

/// Classify a single plate string.
///
/// Malformed plates (wrong field count, wrong case, wrong character class,
/// wrong length) yield [`Classification::Invalid`]; valid plates yield the
/// parity of the last serial digit.
pub fn classify_plate(plate: &str) -> Classification {
    match parse_fields(plate) {
        Ok(fields) => {
            let parity = fields.parity();
            trace!("plate {:?} -> {}", plate, parity);
            parity
        }
        Err(e) => {
            debug!("rejected plate {:?}: {}", plate, e);
            Classification::Invalid
        }
    }
}

/// Classify every plate, returning one label per input in input order.
pub fn classify<S: AsRef<str>>(plates: &[S]) -> Vec<Classification> {
    plates.iter().map(|p| classify_plate(p.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::{Even, Invalid, Odd};

    #[test]
    fn test_valid_plates() {
        assert_eq!(classify(&["B 1234 XY", "D 7890 A"]), vec![Even, Even]);
    }

    #[test]
    fn test_invalid_plates() {
        assert_eq!(
            classify(&["BHSS 1234 X", "B 123 XY1", "d 1234 xy"]),
            vec![Invalid, Invalid, Invalid]
        );
    }

    #[test]
    fn test_mixed() {
        assert_eq!(
            classify(&["D 1011 HY", "BHS 123 S", "D 423", "DA 7890 G"]),
            vec![Odd, Invalid, Invalid, Even]
        );
    }

    #[test]
    fn test_empty() {
        let plates: [&str; 0] = [];
        assert!(classify(&plates).is_empty());
    }

    #[test]
    fn test_owned_strings() {
        let plates = vec!["AB 0001 CD".to_string(), "ab 0001 cd".to_string()];
        assert_eq!(classify(&plates), vec![Odd, Invalid]);
    }

    #[test]
    fn test_lowercase_anywhere() {
        assert_eq!(classify_plate("Ab 1234 XY"), Invalid);
        assert_eq!(classify_plate("AB 1234 Xy"), Invalid);
    }

    #[test]
    fn test_unicode_digits_rejected() {
        assert_eq!(classify_plate("B 123٤ XY"), Invalid);
        assert_eq!(classify_plate("B 123² XY"), Invalid);
    }

    #[test]
    fn test_every_last_digit() {
        for d in 0..10u32 {
            let plate = format!("Q 123{} Z", d);
            let expected = if d % 2 == 0 { Even } else { Odd };
            assert_eq!(classify_plate(&plate), expected, "plate {}", plate);
        }
    }
}
