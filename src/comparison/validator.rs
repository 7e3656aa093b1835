//! Model-name input validation.
//!
//! Applied per field at submit time; the looser non-blank check that gates
//! the compare button lives in the view state.

use crate::error::ValidationError;

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 50;

/// Validate a free-text model name.
///
/// Rules are checked in order on the trimmed text: empty, shorter than
/// [`MIN_NAME_LEN`], longer than [`MAX_NAME_LEN`]. Lengths count characters,
/// not bytes.
pub fn validate_model_name(name: &str) -> Option<ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Some(ValidationError::EmptyName);
    }
    let len = trimmed.chars().count();
    if len < MIN_NAME_LEN {
        return Some(ValidationError::TooShort);
    }
    if len > MAX_NAME_LEN {
        return Some(ValidationError::TooLong);
    }
    None
}

/// Validate both fields independently; results are positional.
pub fn validate_pair(name1: &str, name2: &str) -> [Option<ValidationError>; 2] {
    [validate_model_name(name1), validate_model_name(name2)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(validate_model_name(""), Some(ValidationError::EmptyName));
        assert_eq!(validate_model_name("ab"), Some(ValidationError::TooShort));
        assert_eq!(validate_model_name("abc"), None);
        assert_eq!(validate_model_name(&"x".repeat(50)), None);
        assert_eq!(validate_model_name(&"x".repeat(51)), Some(ValidationError::TooLong));
    }

    #[test]
    fn test_trims_before_measuring() {
        assert_eq!(validate_model_name("   ab   "), Some(ValidationError::TooShort));
        assert_eq!(validate_model_name("  RTX 4090  "), None);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        // 3 chars, 6 bytes
        assert_eq!(validate_model_name("äöü"), None);
    }

    #[test]
    fn test_pair_reports_per_field() {
        let errors = validate_pair("ab", "AMD Ryzen 9 7950X");
        assert_eq!(errors, [Some(ValidationError::TooShort), None]);
    }

    proptest! {
        #[test]
        fn prop_short_names_rejected(name in "[A-Za-z0-9]{1,2}") {
            prop_assert_eq!(validate_model_name(&name), Some(ValidationError::TooShort));
        }

        #[test]
        fn prop_mid_length_names_accepted(name in "[A-Za-z0-9][A-Za-z0-9 -]{1,48}[A-Za-z0-9]") {
            prop_assert_eq!(validate_model_name(&name), None);
        }

        #[test]
        fn prop_long_names_rejected(name in "[A-Za-z0-9]{51,80}") {
            prop_assert_eq!(validate_model_name(&name), Some(ValidationError::TooLong));
        }

        #[test]
        fn prop_whitespace_only_is_empty(name in "[ \t\n]{0,64}") {
            prop_assert_eq!(validate_model_name(&name), Some(ValidationError::EmptyName));
        }
    }
}
