//! Structural and checksum validation.
//!
//! Validation runs in a fixed order so that a given input always reports the
//! same error: length, then digit content, then a single right-to-left Luhn
//! scan that also inspects the decommissioned digit when the policy asks for
//! it.

use tracing::debug;

use crate::error::ParseError;
use crate::layout::{self, LENGTH};
use crate::policy::{ParsePolicy, DECOMMISSIONED_DIGIT};

/// Validates `raw` under the default policy.
pub fn validate(raw: &str) -> Result<(), ParseError> {
    validate_with(raw, &ParsePolicy::default())
}

/// Validates `raw` under `policy`.
pub fn validate_with(raw: &str, policy: &ParsePolicy) -> Result<(), ParseError> {
    let result = check(raw, policy);
    if let Err(ref err) = result {
        debug!(kind = err.kind(), error = %err, "identity number rejected");
    }
    result
}

fn check(raw: &str, policy: &ParsePolicy) -> Result<(), ParseError> {
    let len = raw.chars().count();
    if len != LENGTH {
        return Err(ParseError::WrongLength { len });
    }

    let non_digit = raw.chars().enumerate().find(|(_, c)| !c.is_ascii_digit());
    if let Some((position, found)) = non_digit {
        return Err(ParseError::NotNumeric { position, found });
    }

    let mut sum = 0u32;
    let mut double = false;
    for (index, b) in raw.bytes().enumerate().rev() {
        let digit = b - b'0';
        if policy.enforce_decommissioned_field
            && index == layout::DECOMMISSIONED
            && digit != DECOMMISSIONED_DIGIT
        {
            return Err(ParseError::DecommissionedField { found: digit });
        }
        sum += luhn_term(digit, double);
        double = !double;
    }

    if sum % 10 == 0 {
        Ok(())
    } else {
        Err(ParseError::ChecksumMismatch)
    }
}

/// Contribution of one digit to the Luhn sum.
fn luhn_term(digit: u8, double: bool) -> u32 {
    let digit = u32::from(digit);
    if !double {
        return digit;
    }
    let doubled = digit * 2;
    if doubled > 9 {
        doubled - 9
    } else {
        doubled
    }
}

/// Computes the check digit for a 12-digit payload.
///
/// Returns `None` unless `payload` is exactly 12 ASCII digits. Appending the
/// returned digit to the payload yields a number that passes the checksum.
pub fn luhn_digit(payload: &str) -> Option<u8> {
    if payload.len() != LENGTH - 1 || !payload.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // The check digit takes the undoubled rightmost slot, so the payload's
    // own rightmost digit is doubled.
    let sum: u32 = payload
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| luhn_term(b - b'0', i % 2 == 0))
        .sum();

    // sum % 10 < 10, so the result always fits in a single digit.
    Some(((10 - sum % 10) % 10) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_number() {
        assert!(validate("9506245120008").is_ok());
        assert!(validate("9506244120009").is_ok());
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            validate("950624"),
            Err(ParseError::WrongLength { len: 6 })
        );
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            validate("95062451201802"),
            Err(ParseError::WrongLength { len: 14 })
        );
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate(""), Err(ParseError::WrongLength { len: 0 }));
    }

    #[test]
    fn test_length_checked_before_digits() {
        assert_eq!(
            validate("letters"),
            Err(ParseError::WrongLength { len: 7 })
        );
    }

    #[test]
    fn test_multibyte_length_counts_characters() {
        // 13 characters but 14 bytes.
        assert_eq!(
            validate("950624é120008"),
            Err(ParseError::NotNumeric {
                position: 6,
                found: 'é'
            })
        );
    }

    #[test]
    fn test_invalid_character() {
        assert_eq!(
            validate("950624G120008"),
            Err(ParseError::NotNumeric {
                position: 6,
                found: 'G'
            })
        );
    }

    #[test]
    fn test_random_letters() {
        assert!(matches!(
            validate("randomletters"),
            Err(ParseError::NotNumeric { position: 0, .. })
        ));
    }

    #[test]
    fn test_checksum_mismatch() {
        assert_eq!(validate("9506245120009"), Err(ParseError::ChecksumMismatch));
    }

    #[test]
    fn test_decommissioned_field_ignored_by_default() {
        assert!(validate("9506245120008").is_ok());
    }

    #[test]
    fn test_decommissioned_field_enforced_by_strict_policy() {
        assert_eq!(
            validate_with("9506245120008", &ParsePolicy::strict()),
            Err(ParseError::DecommissionedField { found: 0 })
        );
        assert!(validate_with("9506245120081", &ParsePolicy::strict()).is_ok());
    }

    #[test]
    fn test_decommissioned_field_precedes_checksum() {
        // Fails both rules; the field is seen first during the scan.
        assert_eq!(validate("9506245120001"), Err(ParseError::ChecksumMismatch));
        assert_eq!(
            validate_with("9506245120001", &ParsePolicy::strict()),
            Err(ParseError::DecommissionedField { found: 0 })
        );
    }

    #[test]
    fn test_luhn_term_reduces_doubled_values() {
        assert_eq!(luhn_term(4, true), 8);
        assert_eq!(luhn_term(5, true), 1);
        assert_eq!(luhn_term(9, true), 9);
        assert_eq!(luhn_term(9, false), 9);
    }

    #[test]
    fn test_luhn_digit_known_numbers() {
        assert_eq!(luhn_digit("950624512000"), Some(8));
        assert_eq!(luhn_digit("220101480008"), Some(2));
        assert_eq!(luhn_digit("950230512000"), Some(4));
    }

    #[test]
    fn test_luhn_digit_rejects_bad_payload() {
        assert_eq!(luhn_digit("95062451200"), None);
        assert_eq!(luhn_digit("9506245120008"), None);
        assert_eq!(luhn_digit("95062451200x"), None);
    }

    proptest! {
        #[test]
        fn test_validation_is_deterministic(raw in "[0-9]{13}") {
            prop_assert_eq!(validate(&raw), validate(&raw));
        }

        #[test]
        fn test_wrong_length_always_rejected(raw in "[0-9]{0,30}") {
            prop_assume!(raw.len() != LENGTH);
            prop_assert_eq!(validate(&raw), Err(ParseError::WrongLength { len: raw.len() }));
        }

        #[test]
        fn test_non_digit_rejected_anywhere(
            payload in "[0-9]{12}",
            position in 0usize..13,
            found in "[a-zA-Z ./-]",
        ) {
            let mut raw = payload;
            raw.insert_str(position, &found);
            let result = validate(&raw);
            let is_not_numeric = matches!(result, Err(ParseError::NotNumeric { .. }));
            prop_assert!(is_not_numeric);
        }

        #[test]
        fn test_completed_payload_validates(payload in "[0-9]{12}") {
            let check = luhn_digit(&payload).unwrap();
            prop_assert!(check <= 9);
            let raw = format!("{payload}{check}");
            prop_assert!(validate(&raw).is_ok());
        }

        #[test]
        fn test_only_one_check_digit_validates(payload in "[0-9]{12}", other in 0u8..10) {
            let check = luhn_digit(&payload).unwrap();
            prop_assume!(other != check);
            let raw = format!("{payload}{other}");
            prop_assert_eq!(validate(&raw), Err(ParseError::ChecksumMismatch));
        }
    }
}
