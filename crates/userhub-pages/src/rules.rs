//! Form validation rules.
//!
//! Each rule yields the screen's exact display message on failure. Forms
//! chain them with `?` so the first failing rule wins, which fixes the
//! message precedence: required, then length/range, then format, fields in
//! declaration order.

use validator::{ValidateEmail, ValidateLength, ValidateRange};

pub(crate) fn required(value: &str, message: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(message.to_string());
    }
    Ok(())
}

pub(crate) fn min_length(value: &str, min: u64, message: &str) -> Result<(), String> {
    if !value.validate_length(Some(min), None, None) {
        return Err(message.to_string());
    }
    Ok(())
}

pub(crate) fn email(value: &str, message: &str) -> Result<(), String> {
    if !value.validate_email() {
        return Err(message.to_string());
    }
    Ok(())
}

pub(crate) fn between(value: i64, min: i64, max: i64, message: &str) -> Result<(), String> {
    if !value.validate_range(Some(min), Some(max), None, None) {
        return Err(message.to_string());
    }
    Ok(())
}

pub(crate) fn at_least(value: i64, min: i64, message: &str) -> Result<(), String> {
    if !value.validate_range(Some(min), None, None, None) {
        return Err(message.to_string());
    }
    Ok(())
}

pub(crate) fn at_most(value: i64, max: i64, message: &str) -> Result<(), String> {
    if !value.validate_range(None, Some(max), None, None) {
        return Err(message.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required("x", "Name is required").is_ok());
        assert_eq!(
            required("", "Name is required"),
            Err("Name is required".to_string())
        );
    }

    #[test]
    fn test_min_length() {
        assert!(min_length("abc", 3, "too short").is_ok());
        assert_eq!(min_length("ab", 3, "too short"), Err("too short".to_string()));
    }

    #[test]
    fn test_email() {
        assert!(email("user@example.com", "invalid").is_ok());
        assert_eq!(email("not-an-email", "invalid"), Err("invalid".to_string()));
    }

    #[test]
    fn test_at_least_and_at_most() {
        assert!(at_least(1, 1, "too small").is_ok());
        assert_eq!(at_least(0, 1, "too small"), Err("too small".to_string()));
        assert!(at_most(150, 150, "too large").is_ok());
        assert_eq!(at_most(151, 150, "too large"), Err("too large".to_string()));
    }

    #[test]
    fn test_between() {
        assert!(between(1, 1, 150, "out of range").is_ok());
        assert!(between(150, 1, 150, "out of range").is_ok());
        assert_eq!(between(0, 1, 150, "out of range"), Err("out of range".to_string()));
        assert_eq!(
            between(151, 1, 150, "out of range"),
            Err("out of range".to_string())
        );
    }
}
