// tests/property/name_test.rs

//! Username validation properties.

use proptest::prelude::*;
use spinelauth::core::{AuthError, User};
use spinelauth::validate_name;

proptest! {
    #[test]
    fn test_valid_names_accepted(name in "[A-Za-z][A-Za-z0-9_]{0,40}") {
        prop_assert_eq!(validate_name(&name), Ok(()));
        prop_assert!(User::new(name.as_str(), "digest").is_ok());
    }

    #[test]
    fn test_leading_non_letter_rejected(
        first in "[0-9_]",
        rest in "[A-Za-z0-9_]{0,20}"
    ) {
        let name = format!("{first}{rest}");
        prop_assert_eq!(validate_name(&name), Err(AuthError::InvalidName));
        prop_assert!(matches!(User::new(name, "digest"), Err(AuthError::InvalidName)));
    }

    #[test]
    fn test_foreign_character_rejected(
        head in "[A-Za-z][A-Za-z0-9_]{0,10}",
        bad in "[^A-Za-z0-9_]",
        tail in "[A-Za-z0-9_]{0,10}"
    ) {
        let name = format!("{head}{bad}{tail}");
        prop_assert_eq!(validate_name(&name), Err(AuthError::InvalidName));
    }
}
