//! Validation primitives shared by domain entities
//!
//! Each check takes the value under test, an optional constraint and the
//! field name used in the error message. Messages are part of the public
//! contract and are asserted on verbatim.

use crate::error::EntityValidationError;

/// Fails when `value` is absent.
pub fn not_null<T: ?Sized>(value: Option<&T>, field: &str) -> Result<(), EntityValidationError> {
    match value {
        Some(_) => Ok(()),
        None => Err(EntityValidationError(format!(
            "{} should not be null",
            field
        ))),
    }
}

/// Fails when `value` is absent, empty, or whitespace-only.
pub fn not_null_or_empty(value: Option<&str>, field: &str) -> Result<(), EntityValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(EntityValidationError(format!(
            "{} should not be empty or null",
            field
        ))),
    }
}

/// Fails when `value` has fewer than `min` characters.
pub fn min_length(value: &str, min: usize, field: &str) -> Result<(), EntityValidationError> {
    if char_len(value) < min {
        return Err(EntityValidationError(format!(
            "{} should be at least {} characters long",
            field, min
        )));
    }
    Ok(())
}

/// Fails when `value` has more than `max` characters.
pub fn max_length(value: &str, max: usize, field: &str) -> Result<(), EntityValidationError> {
    if char_len(value) > max {
        return Err(EntityValidationError(format!(
            "{} should be less or equals {} characters long",
            field, max
        )));
    }
    Ok(())
}

// Lengths count Unicode scalar values, not bytes.
fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_null_ok() {
        assert!(not_null(Some("Home Appliances"), "Description").is_ok());
        assert!(not_null(Some(""), "Description").is_ok());
    }

    #[test]
    fn not_null_fails_when_absent() {
        let err = not_null::<str>(None, "ProductName").unwrap_err();
        assert_eq!(err.to_string(), "ProductName should not be null");
    }

    #[test]
    fn not_null_or_empty_ok() {
        assert!(not_null_or_empty(Some("Books"), "Name").is_ok());
        assert!(not_null_or_empty(Some(" x "), "Name").is_ok());
    }

    #[test]
    fn not_null_or_empty_fails_for_blank_values() {
        for value in [None, Some(""), Some("   "), Some("\t\n")] {
            let err = not_null_or_empty(value, "Title").unwrap_err();
            assert_eq!(err.to_string(), "Title should not be empty or null");
        }
    }

    #[test]
    fn min_length_fails_when_shorter() {
        let err = min_length("123456", 10, "Code").unwrap_err();
        assert_eq!(err.to_string(), "Code should be at least 10 characters long");

        for extra in 1..5 {
            let target = "Ergonomic Chair";
            let min = target.len() + extra;
            let err = min_length(target, min, "Code").unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Code should be at least {} characters long", min)
            );
        }
    }

    #[test]
    fn min_length_ok_at_and_above_bound() {
        assert!(min_length("123456", 6, "Code").is_ok());
        assert!(min_length("123456", 2, "Code").is_ok());
        assert!(min_length("", 0, "Code").is_ok());
    }

    #[test]
    fn max_length_fails_when_longer() {
        let err = max_length("123456", 5, "Code").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Code should be less or equals 5 characters long"
        );
    }

    #[test]
    fn max_length_ok_at_and_below_bound() {
        assert!(max_length("123456", 6, "Code").is_ok());
        assert!(max_length("123456", 10, "Code").is_ok());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // three characters, six bytes
        let value = "çãé";
        assert!(min_length(value, 3, "Name").is_ok());
        assert!(max_length(value, 3, "Name").is_ok());
    }
}
