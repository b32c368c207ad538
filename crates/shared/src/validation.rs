//! Common validation utilities for invitation capacities.

use validator::ValidationError;

/// Smallest adult capacity an invitation can carry.
pub const MIN_ADULTS: i32 = 1;

/// Largest adult capacity; a value of 2 means a plus-one is offered.
pub const MAX_ADULTS: i32 = 2;

/// Validates that an invitation's adult capacity is 1 or 2.
pub fn validate_max_adults(max_adults: i32) -> Result<(), ValidationError> {
    if (MIN_ADULTS..=MAX_ADULTS).contains(&max_adults) {
        Ok(())
    } else {
        let mut err = ValidationError::new("max_adults_range");
        err.message = Some("max_adults must be 1 or 2".into());
        err.add_param("value".into(), &max_adults);
        Err(err)
    }
}

/// Largest kid capacity the form offers choices for.
pub const MAX_KIDS: i32 = 20;

/// Validates that an invitation's kid capacity lies within `0..=MAX_KIDS`.
pub fn validate_max_kids(max_kids: i32) -> Result<(), ValidationError> {
    if (0..=MAX_KIDS).contains(&max_kids) {
        Ok(())
    } else {
        let mut err = ValidationError::new("max_kids_range");
        err.message = Some(format!("max_kids must be between 0 and {}", MAX_KIDS).into());
        err.add_param("value".into(), &max_kids);
        Err(err)
    }
}

/// Validates that a kid count lies within `0..=max_kids`.
pub fn validate_kid_count(count: i32, max_kids: i32) -> Result<(), ValidationError> {
    if (0..=max_kids).contains(&count) {
        Ok(())
    } else {
        let mut err = ValidationError::new("kid_count_range");
        err.message = Some(format!("kid_count must be between 0 and {}", max_kids).into());
        err.add_param("max".into(), &max_kids);
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_max_adults() {
        assert!(validate_max_adults(1).is_ok());
        assert!(validate_max_adults(2).is_ok());
        assert!(validate_max_adults(0).is_err());
        assert!(validate_max_adults(3).is_err());
    }

    #[test]
    fn test_validate_max_adults_error_message() {
        let err = validate_max_adults(5).unwrap_err();
        assert_eq!(err.message.unwrap().to_string(), "max_adults must be 1 or 2");
    }

    #[test]
    fn test_validate_max_kids() {
        assert!(validate_max_kids(0).is_ok());
        assert!(validate_max_kids(4).is_ok());
        assert!(validate_max_kids(MAX_KIDS).is_ok());
        assert!(validate_max_kids(-1).is_err());
        assert!(validate_max_kids(MAX_KIDS + 1).is_err());
        assert!(validate_max_kids(i32::MAX).is_err());
    }

    #[test]
    fn test_validate_max_kids_error_message() {
        let err = validate_max_kids(-3).unwrap_err();
        assert_eq!(err.code, "max_kids_range");
        assert_eq!(
            err.message.unwrap().to_string(),
            "max_kids must be between 0 and 20"
        );
    }

    #[test]
    fn test_validate_kid_count() {
        assert!(validate_kid_count(0, 0).is_ok());
        assert!(validate_kid_count(0, 3).is_ok());
        assert!(validate_kid_count(3, 3).is_ok());
        assert!(validate_kid_count(4, 3).is_err());
        assert!(validate_kid_count(-1, 3).is_err());
    }

    #[test]
    fn test_validate_kid_count_error_message() {
        let err = validate_kid_count(4, 2).unwrap_err();
        assert_eq!(err.code, "kid_count_range");
        assert_eq!(
            err.message.unwrap().to_string(),
            "kid_count must be between 0 and 2"
        );
    }
}
