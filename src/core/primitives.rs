use chrono::{Duration, NaiveDateTime, Timelike};

use crate::core::TimeUnit;

/// Shifts `time` by a signed number of base units, saturating at the
/// representable range.
#[must_use]
pub fn shift_by_units(time: NaiveDateTime, unit: TimeUnit, units: i64) -> NaiveDateTime {
    let shifted = units
        .checked_mul(unit.millis())
        .and_then(Duration::try_milliseconds)
        .and_then(|delta| time.checked_add_signed(delta));
    match shifted {
        Some(value) => value,
        None if units < 0 => NaiveDateTime::MIN,
        None => NaiveDateTime::MAX,
    }
}

/// Whole base units from `from` to `to`, floored toward negative infinity.
#[must_use]
pub fn units_between(from: NaiveDateTime, to: NaiveDateTime, unit: TimeUnit) -> i64 {
    let millis = to.signed_duration_since(from).num_milliseconds();
    millis.div_euclid(unit.millis())
}

/// Base units elapsed since midnight, ignoring anything finer than the unit.
#[must_use]
pub fn units_since_midnight(time: NaiveDateTime, unit: TimeUnit) -> i64 {
    match unit {
        TimeUnit::Minute => i64::from(time.hour() * 60 + time.minute()),
        TimeUnit::Second => i64::from(time.num_seconds_from_midnight()),
    }
}
