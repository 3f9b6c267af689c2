//! # said-id
//!
//! Decoding and validation of South African identity numbers.
//!
//! ## Format
//!
//! A number is 13 ASCII digits: `YYMMDD SSSS C R Z`
//!
//! - `YYMMDD` date of birth, with a two-digit year
//! - `SSSS` sequence block; its first digit encodes sex (0-4 female, 5-9 male)
//! - `C` citizenship (0 citizen, 1 permanent resident, 2 refugee)
//! - `R` decommissioned race digit, historically always `8`
//! - `Z` Luhn check digit
//!
//! ## Design Principles
//!
//! - Parsing is a pure function of the input and a caller-supplied `today`
//! - Nothing reads the wall clock; [`today_in_sast`] converts an instant the
//!   caller already has
//! - A parsed [`IdentityNumber`] is immutable and always fully decoded
//! - Every rejection is a distinct [`ParseError`] variant
//!
//! ```
//! use chrono::NaiveDate;
//! use said_id::{parse, Citizenship, Sex};
//!
//! let today = NaiveDate::from_ymd_opt(2020, 6, 20).unwrap();
//! let id = parse("9506245120008", today).unwrap();
//! assert_eq!(id.date_of_birth(), NaiveDate::from_ymd_opt(1995, 6, 24).unwrap());
//! assert_eq!(id.sex(), Sex::Male);
//! assert_eq!(id.citizenship(), Citizenship::Citizen);
//! ```

mod attributes;
mod checksum;
mod date;
mod error;
mod identity;
mod layout;
mod policy;

pub use attributes::{decode_citizenship, decode_sex, Citizenship, Sex};
pub use checksum::{luhn_digit, validate, validate_with};
pub use date::{
    at_sast_midnight, resolve_date_of_birth, resolve_date_of_birth_with, sast, today_in_sast,
    SAST_OFFSET_SECS,
};
pub use error::ParseError;
pub use identity::{parse, parse_with, IdentityNumber};
pub use layout::LENGTH;
pub use policy::{ParsePolicy, DECOMMISSIONED_DIGIT, DEFAULT_MINIMUM_AGE};
