//! Sex and citizenship decoding.

use serde::{Deserialize, Serialize};

use crate::layout;

/// Sex category encoded in the sequence block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Unknown,
    Male,
    Female,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Sex::Unknown => "unknown",
            Sex::Male => "male",
            Sex::Female => "female",
        };
        f.write_str(s)
    }
}

/// Citizenship or residency status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    #[default]
    Unknown,
    Citizen,
    PermanentResident,
    Refugee,
}

impl Citizenship {
    /// Returns true for South African citizens.
    ///
    /// This is the two-valued view (citizen or not) that some consumers
    /// still expect.
    pub fn is_citizen(&self) -> bool {
        matches!(self, Citizenship::Citizen)
    }
}

impl std::fmt::Display for Citizenship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Citizenship::Unknown => "unknown",
            Citizenship::Citizen => "citizen",
            Citizenship::PermanentResident => "permanent_resident",
            Citizenship::Refugee => "refugee",
        };
        f.write_str(s)
    }
}

/// Decodes the sex digit: 0-4 female, 5-9 male.
pub fn decode_sex(raw: &str) -> Sex {
    match layout::digit_at(raw, layout::SEX) {
        0..=4 => Sex::Female,
        5..=9 => Sex::Male,
        _ => Sex::Unknown,
    }
}

/// Decodes the citizenship digit: 0 citizen, 1 permanent resident, 2 refugee.
pub fn decode_citizenship(raw: &str) -> Citizenship {
    match layout::digit_at(raw, layout::CITIZENSHIP) {
        0 => Citizenship::Citizen,
        1 => Citizenship::PermanentResident,
        2 => Citizenship::Refugee,
        _ => Citizenship::Unknown,
    }
}
