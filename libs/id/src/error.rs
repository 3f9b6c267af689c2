//! Error types for identity number parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing or validating an identity number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not exactly 13 characters long.
    #[error("identity number must be 13 characters, got {len}")]
    WrongLength { len: usize },

    /// The input contains a character that is not an ASCII digit.
    #[error("identity number is not numeric: {found:?} at position {position}")]
    NotNumeric { position: usize, found: char },

    /// The decommissioned race digit is present but is not `8`.
    #[error("identity number has an invalid decommissioned digit: expected 8, got {found}")]
    DecommissionedField { found: u8 },

    /// The digits are well-formed but the Luhn checksum does not hold.
    #[error("identity number checksum mismatch")]
    ChecksumMismatch,

    /// The encoded year, month and day do not name a real calendar date.
    #[error("invalid date of birth: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
}

impl ParseError {
    /// Returns true if the input failed a length, digit or fixed-field rule.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            ParseError::WrongLength { .. }
                | ParseError::NotNumeric { .. }
                | ParseError::DecommissionedField { .. }
        )
    }

    /// Returns true if this error is a checksum failure.
    pub fn is_checksum(&self) -> bool {
        matches!(self, ParseError::ChecksumMismatch)
    }

    /// Returns true if this error concerns the encoded date of birth.
    pub fn is_date(&self) -> bool {
        matches!(self, ParseError::InvalidCalendarDate { .. })
    }

    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::WrongLength { .. } => "wrong_length",
            ParseError::NotNumeric { .. } => "not_numeric",
            ParseError::DecommissionedField { .. } => "decommissioned_field",
            ParseError::ChecksumMismatch => "checksum_mismatch",
            ParseError::InvalidCalendarDate { .. } => "invalid_calendar_date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_partition_kinds() {
        let errors = [
            ParseError::WrongLength { len: 6 },
            ParseError::NotNumeric {
                position: 6,
                found: 'G',
            },
            ParseError::DecommissionedField { found: 0 },
            ParseError::ChecksumMismatch,
            ParseError::InvalidCalendarDate {
                year: 1995,
                month: 2,
                day: 30,
            },
        ];

        for err in &errors {
            let hits = [err.is_structural(), err.is_checksum(), err.is_date()]
                .iter()
                .filter(|hit| **hit)
                .count();
            assert_eq!(hits, 1, "{err:?} should match exactly one predicate");
        }
    }

    #[test]
    fn test_calendar_date_message_is_zero_padded() {
        let err = ParseError::InvalidCalendarDate {
            year: 1995,
            month: 2,
            day: 30,
        };
        assert_eq!(err.to_string(), "invalid date of birth: 1995-02-30");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ParseError::ChecksumMismatch.kind(), "checksum_mismatch");
        assert_eq!(ParseError::WrongLength { len: 0 }.kind(), "wrong_length");
    }
}
