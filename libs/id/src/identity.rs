//! The decoded identity number.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use serde::Serialize;
use tracing::trace;

use crate::attributes::{decode_citizenship, decode_sex, Citizenship, Sex};
use crate::checksum::validate_with;
use crate::date::{at_sast_midnight, resolve_date_of_birth_with};
use crate::error::ParseError;
use crate::layout;
use crate::policy::ParsePolicy;

/// A validated South African identity number and the attributes it encodes.
///
/// Values only come out of [`IdentityNumber::parse`] and
/// [`IdentityNumber::parse_with`], so holding one means the number passed
/// every check. The raw digits are kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct IdentityNumber {
    raw: String,
    date_of_birth: NaiveDate,
    sex: Sex,
    citizenship: Citizenship,
}

impl IdentityNumber {
    /// Parses `raw` under the default policy.
    ///
    /// `today` anchors the century of the two-digit birth year.
    pub fn parse(raw: &str, today: NaiveDate) -> Result<Self, ParseError> {
        Self::parse_with(raw, today, &ParsePolicy::default())
    }

    /// Parses `raw` under `policy`.
    ///
    /// Stops at the first failing stage; nothing is decoded from a number
    /// that fails validation.
    pub fn parse_with(
        raw: &str,
        today: NaiveDate,
        policy: &ParsePolicy,
    ) -> Result<Self, ParseError> {
        validate_with(raw, policy)?;
        let date_of_birth = resolve_date_of_birth_with(raw, today, policy)?;

        let id = Self {
            raw: raw.to_string(),
            date_of_birth,
            sex: decode_sex(raw),
            citizenship: decode_citizenship(raw),
        };
        trace!(
            date_of_birth = %id.date_of_birth,
            sex = %id.sex,
            citizenship = %id.citizenship,
            "identity number parsed"
        );
        Ok(id)
    }

    /// The number exactly as it was supplied.
    pub fn value(&self) -> &str {
        &self.raw
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    /// Date of birth at midnight South African time (UTC+2).
    pub fn date_of_birth_at_midnight(&self) -> DateTime<FixedOffset> {
        at_sast_midnight(self.date_of_birth)
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn citizenship(&self) -> Citizenship {
        self.citizenship
    }

    /// The four-digit sequence block that follows the birth date.
    pub fn sequence(&self) -> u16 {
        (layout::SEQUENCE..layout::CITIZENSHIP)
            .map(|index| layout::digit_at(&self.raw, index))
            .fold(0u16, |acc, digit| acc * 10 + u16::from(digit))
    }

    pub fn check_digit(&self) -> u8 {
        layout::digit_at(&self.raw, layout::CHECK)
    }

    /// Completed years of age on `on`, or `None` if `on` precedes the birth.
    pub fn age_on(&self, on: NaiveDate) -> Option<u32> {
        let dob = self.date_of_birth;
        let mut age = on.year() - dob.year();
        if (on.month(), on.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }
}

impl std::fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for IdentityNumber {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

/// Parses `raw` under the default policy.
pub fn parse(raw: &str, today: NaiveDate) -> Result<IdentityNumber, ParseError> {
    IdentityNumber::parse(raw, today)
}

/// Parses `raw` under `policy`.
pub fn parse_with(
    raw: &str,
    today: NaiveDate,
    policy: &ParsePolicy,
) -> Result<IdentityNumber, ParseError> {
    IdentityNumber::parse_with(raw, today, policy)
}
