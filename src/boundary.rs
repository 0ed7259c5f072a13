//! Beginning and end instants of the period containing a moment.

use chrono::{DateTime, Datelike, Days, Months, NaiveTime, TimeDelta, TimeZone, Timelike};

use crate::local;
use crate::unit::Unit;
use crate::weekday::weekday_number;

/// Returns the earliest instant of the period named by `code` that
/// contains `t`, preserving `t`'s zone.
///
/// An unrecognized code returns `t` unchanged, as does `"SS"` (a second
/// has no coarser boundary in the original code table) and any result
/// that would leave the representable range.
pub fn beginning_of<Tz: TimeZone>(t: &DateTime<Tz>, code: &str) -> DateTime<Tz> {
    match Unit::from_code(code) {
        Some(unit) => beginning_of_unit(t, unit),
        None => t.clone(),
    }
}

/// Returns the earliest instant of the `unit` period containing `t`.
///
/// See [`beginning_of`] for the identity fallbacks.
pub fn beginning_of_unit<Tz: TimeZone>(t: &DateTime<Tz>, unit: Unit) -> DateTime<Tz> {
    begin(t, unit).unwrap_or_else(|| t.clone())
}

/// Returns the latest representable instant (nanosecond resolution) of the
/// period named by `code` that contains `t`, preserving `t`'s zone.
///
/// Computed as the next period's beginning minus one nanosecond, except
/// for `"dd"` which is constructed directly as 23:59:59.999999999 of
/// `t`'s date. Unrecognized codes and `"SS"` return `t` unchanged.
pub fn end_of<Tz: TimeZone>(t: &DateTime<Tz>, code: &str) -> DateTime<Tz> {
    match Unit::from_code(code) {
        Some(unit) => end_of_unit(t, unit),
        None => t.clone(),
    }
}

/// Returns the latest instant of the `unit` period containing `t`.
///
/// See [`end_of`] for the identity fallbacks.
pub fn end_of_unit<Tz: TimeZone>(t: &DateTime<Tz>, unit: Unit) -> DateTime<Tz> {
    end(t, unit).unwrap_or_else(|| t.clone())
}

pub(crate) fn begin<Tz: TimeZone>(t: &DateTime<Tz>, unit: Unit) -> Option<DateTime<Tz>> {
    let local = t.naive_local();
    let date = local.date();
    match unit {
        Unit::Year => local::resolve(t, date.with_day(1)?.with_month(1)?.and_time(NaiveTime::MIN)),
        Unit::Month => local::resolve(t, date.with_day(1)?.and_time(NaiveTime::MIN)),
        Unit::Day => local::resolve(t, date.and_time(NaiveTime::MIN)),
        Unit::Hour => {
            let time = NaiveTime::from_hms_opt(local.hour(), 0, 0)?;
            local::resolve(t, date.and_time(time))
        }
        Unit::Minute => {
            // Truncation; equivalent to rebuilding the fields with the
            // seconds and sub-second zeroed.
            let time = NaiveTime::from_hms_opt(local.hour(), local.minute(), 0)?;
            local::resolve(t, date.and_time(time))
        }
        Unit::Second => None,
        Unit::Week => {
            let monday = date.checked_sub_days(Days::new(u64::from(weekday_number(t)) - 1))?;
            local::resolve(t, monday.and_time(NaiveTime::MIN))
        }
        Unit::Season => begin_of_span(t, 3),
        Unit::SemiYear => begin_of_span(t, 6),
    }
}

/// First instant of the `span`-month period containing `t`: the month is
/// reduced to the nearest multiple-of-`span` boundary (1, 4, 7, 10 for
/// seasons; 1, 7 for half-years).
fn begin_of_span<Tz: TimeZone>(t: &DateTime<Tz>, span: u32) -> Option<DateTime<Tz>> {
    let date = t.naive_local().date();
    let offset = (date.month() - 1) % span;
    let first = date.with_day(1)?.checked_sub_months(Months::new(offset))?;
    local::resolve(t, first.and_time(NaiveTime::MIN))
}

fn end<Tz: TimeZone>(t: &DateTime<Tz>, unit: Unit) -> Option<DateTime<Tz>> {
    if unit == Unit::Second {
        return None;
    }
    if unit == Unit::Day {
        let close = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)?;
        return local::resolve(t, t.naive_local().date().and_time(close));
    }
    let start = begin(t, unit)?;
    let next = match unit {
        Unit::Year => local::shift_months(&start, 12),
        Unit::Month => local::shift_months(&start, 1),
        Unit::Hour => local::shift_time(&start, TimeDelta::hours(1)),
        Unit::Minute => local::shift_time(&start, TimeDelta::minutes(1)),
        Unit::Week => local::shift_days(&start, 7),
        Unit::Season => local::shift_months(&start, 3),
        Unit::SemiYear => local::shift_months(&start, 6),
        Unit::Day | Unit::Second => None,
    }?;
    local::shift_time(&next, TimeDelta::nanoseconds(-1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn thursday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 10, 24, 15, 4, 5).unwrap()
    }

    #[test]
    fn begin_of_year() {
        assert_eq!(
            beginning_of(&thursday(), "yy"),
            Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn begin_of_season_reduces_month() {
        // October belongs to the Oct/Nov/Dec quarter.
        assert_eq!(
            beginning_of(&thursday(), "SMZ"),
            Utc.with_ymd_and_hms(2019, 10, 1, 0, 0, 0).unwrap()
        );
        // February belongs to the Jan/Feb/Mar quarter.
        let feb = Utc.with_ymd_and_hms(2019, 2, 14, 9, 0, 0).unwrap();
        assert_eq!(
            beginning_of(&feb, "SMZ"),
            Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn begin_of_semi_year_reduces_month() {
        assert_eq!(
            beginning_of(&thursday(), "SMY"),
            Utc.with_ymd_and_hms(2019, 7, 1, 0, 0, 0).unwrap()
        );
        let march = Utc.with_ymd_and_hms(2019, 3, 31, 23, 0, 0).unwrap();
        assert_eq!(
            beginning_of(&march, "SMY"),
            Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn end_of_day_is_direct_construction() {
        let end = end_of(&thursday(), "dd");
        assert_eq!(end.to_rfc3339(), "2019-10-24T23:59:59.999999999+00:00");
    }

    #[test]
    fn end_of_month_handles_lengths() {
        let feb = Utc.with_ymd_and_hms(2020, 2, 10, 0, 0, 0).unwrap(); // leap year
        assert_eq!(
            end_of(&feb, "mm").to_rfc3339(),
            "2020-02-29T23:59:59.999999999+00:00"
        );
    }

    #[test]
    fn second_behaves_like_unknown() {
        let t = thursday();
        assert_eq!(beginning_of(&t, "SS"), t);
        assert_eq!(end_of(&t, "SS"), t);
    }

    #[test]
    fn unknown_code_is_identity() {
        let t = thursday();
        assert_eq!(beginning_of(&t, "foobar"), t);
        assert_eq!(end_of(&t, "foobar"), t);
    }
}
