//! Date-of-birth resolution.
//!
//! The number only carries a two-digit year. The century is chosen relative
//! to a caller-supplied `today`: the most recent century in which the holder
//! would already be old enough to hold a number.
//!
//! Birth dates are civil dates in South Africa, which has no daylight saving.
//! Where a timestamp is needed, the date is placed at midnight in the fixed
//! UTC+2 offset ([`sast`]); no timezone database is involved.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Offset, Utc};
use tracing::debug;

use crate::error::ParseError;
use crate::layout;
use crate::policy::ParsePolicy;

/// South African Standard Time offset from UTC, in seconds.
pub const SAST_OFFSET_SECS: i32 = 2 * 60 * 60;

/// South African Standard Time (UTC+2, no daylight saving).
pub fn sast() -> FixedOffset {
    FixedOffset::east_opt(SAST_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Civil date in South Africa at the instant `now`.
pub fn today_in_sast(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&sast()).date_naive()
}

/// Places `date` at midnight, UTC+2.
pub fn at_sast_midnight(date: NaiveDate) -> DateTime<FixedOffset> {
    let offset = sast();
    let local = date.and_time(NaiveTime::MIN);
    DateTime::from_naive_utc_and_offset(local - offset, offset)
}

/// Resolves the date of birth of an already validated `raw` number.
pub fn resolve_date_of_birth(raw: &str, today: NaiveDate) -> Result<NaiveDate, ParseError> {
    resolve_date_of_birth_with(raw, today, &ParsePolicy::default())
}

/// Resolves the date of birth using the minimum age from `policy`.
pub fn resolve_date_of_birth_with(
    raw: &str,
    today: NaiveDate,
    policy: &ParsePolicy,
) -> Result<NaiveDate, ParseError> {
    let yy = layout::pair_at(raw, layout::YEAR);
    let month = layout::pair_at(raw, layout::MONTH);
    let day = layout::pair_at(raw, layout::DAY);

    let year = resolve_year(yy, month, day, today, policy.minimum_age);

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        let err = ParseError::InvalidCalendarDate { year, month, day };
        debug!(kind = err.kind(), error = %err, "identity number rejected");
        err
    })
}

/// Picks the full year for a two-digit `yy`.
///
/// Starts in the century of `today` and steps back one century when the
/// holder would be younger than `minimum_age`. A birthday that falls on the
/// same month and day as `today` counts as old enough.
fn resolve_year(yy: u32, month: u32, day: u32, today: NaiveDate, minimum_age: u16) -> i32 {
    // yy < 100 by construction.
    let yy = yy as i32;
    let century = today.year().div_euclid(100) * 100;
    let candidate = century + yy;
    let eligible = today.year() - i32::from(minimum_age);

    let too_young = candidate > eligible
        || (candidate == eligible && (month, day) > (today.month(), today.day()));

    if too_young {
        debug!(
            candidate,
            resolved = candidate - 100,
            %today,
            "birth year below minimum age, rolled back one century"
        );
        candidate - 100
    } else {
        candidate
    }
}
