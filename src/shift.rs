//! Shifting instants by whole calendar periods.

use chrono::{DateTime, Days, TimeDelta, TimeZone};

use crate::boundary;
use crate::local;
use crate::unit::Unit;
use crate::weekday::weekday_number;

/// Shifts `t` by `interval` periods of the unit named by `code`,
/// preserving the time-of-day fields the unit does not imply.
///
/// Year, month, day and week shifts are calendar-date arithmetic (month
/// arithmetic clamps the day-of-month to the target month's length). Hour,
/// minute and second shifts are exact wall-clock deltas with
/// calendar-correct carry. Season and half-year shifts move the period
/// start and land on the same weekday offset within the target period; see
/// [`x_at_unit`].
///
/// An unrecognized code returns `t` unchanged, as does a shift whose
/// result would leave the representable range.
pub fn x_at<Tz: TimeZone>(t: &DateTime<Tz>, code: &str, interval: i64) -> DateTime<Tz> {
    match Unit::from_code(code) {
        Some(unit) => x_at_unit(t, unit, interval),
        None => t.clone(),
    }
}

/// Shifts `t` by `interval` periods of `unit`.
///
/// [`Unit::Season`] and [`Unit::SemiYear`] do not keep the day-of-month:
/// the period start is advanced by `interval` periods, then
/// `weekday_number(t) - 1` calendar days and `t`'s local time-of-day are
/// re-added. The re-added days carry into the following month when they
/// pass the target month's end.
pub fn x_at_unit<Tz: TimeZone>(t: &DateTime<Tz>, unit: Unit, interval: i64) -> DateTime<Tz> {
    shift(t, unit, interval).unwrap_or_else(|| t.clone())
}

/// [`x_at`] with the sign of `interval` discarded: always shifts forward
/// by its magnitude (zero is identity).
pub fn next_x_at<Tz: TimeZone>(t: &DateTime<Tz>, code: &str, interval: i64) -> DateTime<Tz> {
    match interval.checked_abs() {
        Some(magnitude) => x_at(t, code, magnitude),
        None => t.clone(),
    }
}

/// [`x_at_unit`] with the sign of `interval` discarded, shifting forward.
pub fn next_x_at_unit<Tz: TimeZone>(t: &DateTime<Tz>, unit: Unit, interval: i64) -> DateTime<Tz> {
    match interval.checked_abs() {
        Some(magnitude) => x_at_unit(t, unit, magnitude),
        None => t.clone(),
    }
}

/// [`x_at`] with the sign of `interval` discarded: always shifts backward
/// by its magnitude (zero is identity).
pub fn last_x_at<Tz: TimeZone>(t: &DateTime<Tz>, code: &str, interval: i64) -> DateTime<Tz> {
    match interval.checked_abs() {
        Some(magnitude) => x_at(t, code, -magnitude),
        None => t.clone(),
    }
}

/// [`x_at_unit`] with the sign of `interval` discarded, shifting backward.
pub fn last_x_at_unit<Tz: TimeZone>(t: &DateTime<Tz>, unit: Unit, interval: i64) -> DateTime<Tz> {
    match interval.checked_abs() {
        Some(magnitude) => x_at_unit(t, unit, -magnitude),
        None => t.clone(),
    }
}

fn shift<Tz: TimeZone>(t: &DateTime<Tz>, unit: Unit, interval: i64) -> Option<DateTime<Tz>> {
    match unit {
        Unit::Year => local::shift_months(t, interval.checked_mul(12)?),
        Unit::Month => local::shift_months(t, interval),
        Unit::Day => local::shift_days(t, interval),
        Unit::Hour => local::shift_time(t, TimeDelta::try_hours(interval)?),
        Unit::Minute => local::shift_time(t, TimeDelta::try_minutes(interval)?),
        Unit::Second => local::shift_time(t, TimeDelta::try_seconds(interval)?),
        Unit::Week => local::shift_days(t, interval.checked_mul(7)?),
        Unit::Season => anchored_shift(t, Unit::Season, interval.checked_mul(3)?),
        Unit::SemiYear => anchored_shift(t, Unit::SemiYear, interval.checked_mul(6)?),
    }
}

/// Moves the start of `t`'s season or half-year by `months`, then rebuilds
/// an instant at the same weekday offset within the target period with
/// `t`'s local time-of-day.
fn anchored_shift<Tz: TimeZone>(t: &DateTime<Tz>, unit: Unit, months: i64) -> Option<DateTime<Tz>> {
    let start = boundary::begin(t, unit)?;
    let start = local::shift_months(&start, months)?;
    let days = Days::new(u64::from(weekday_number(t)) - 1);
    let date = start.naive_local().date().checked_add_days(days)?;
    local::resolve(t, date.and_time(t.naive_local().time()))
}
