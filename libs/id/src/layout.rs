//! Field positions within the 13-digit number.
//!
//! ```text
//! Y Y M M D D S S S S C R Z
//! 0 1 2 3 4 5 6 7 8 9 10 11 12
//! ```
//!
//! `S` is the sequence block (its first digit encodes sex), `C` the
//! citizenship code, `R` the decommissioned race digit and `Z` the check digit.

/// Length of a well-formed number.
pub const LENGTH: usize = 13;

pub(crate) const YEAR: usize = 0;
pub(crate) const MONTH: usize = 2;
pub(crate) const DAY: usize = 4;
pub(crate) const SEQUENCE: usize = 6;
pub(crate) const SEX: usize = 6;
pub(crate) const CITIZENSHIP: usize = 10;
pub(crate) const DECOMMISSIONED: usize = 11;
pub(crate) const CHECK: usize = 12;

/// Digit value at `index`.
///
/// Callers only pass strings that have passed validation, so every byte is an
/// ASCII digit. Anything else yields a value above 9, which no decoder maps.
pub(crate) fn digit_at(raw: &str, index: usize) -> u8 {
    raw.as_bytes()
        .get(index)
        .map_or(u8::MAX, |b| b.wrapping_sub(b'0'))
}

/// Two-digit field starting at `index`.
pub(crate) fn pair_at(raw: &str, index: usize) -> u32 {
    u32::from(digit_at(raw, index)) * 10 + u32::from(digit_at(raw, index + 1))
}
