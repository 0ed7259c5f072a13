//! Wall-clock arithmetic carried out in an instant's own time zone.
//!
//! Every calendar operation in this crate computes on the local
//! (wall-clock) representation of an instant and then reattaches the zone,
//! so a value in any zone keeps that zone across every derived value.
//! Helpers return `None` when a result would leave chrono's representable
//! range; callers fall back to the input instant.

use chrono::{DateTime, LocalResult, Months, NaiveDateTime, Offset, TimeDelta, TimeZone};

/// Resolves a wall-clock value in `t`'s zone.
///
/// Ambiguous local times (a repeated hour at an offset transition) resolve
/// to the earlier instant. Local times skipped by a transition resolve by
/// interpreting the wall clock with `t`'s current UTC offset.
pub(crate) fn resolve<Tz: TimeZone>(t: &DateTime<Tz>, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    match t.timezone().from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earlier, _) => Some(earlier),
        LocalResult::None => {
            let offset = TimeDelta::seconds(i64::from(t.offset().fix().local_minus_utc()));
            let utc = local.checked_sub_signed(offset)?;
            Some(t.timezone().from_utc_datetime(&utc))
        }
    }
}

/// Shifts `t` by whole calendar days, preserving time-of-day.
pub(crate) fn shift_days<Tz: TimeZone>(t: &DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
    let local = t.naive_local().checked_add_signed(TimeDelta::try_days(days)?)?;
    resolve(t, local)
}

/// Shifts `t` by whole calendar months. The day-of-month clamps to the
/// target month's last day (chrono's month arithmetic).
pub(crate) fn shift_months<Tz: TimeZone>(t: &DateTime<Tz>, months: i64) -> Option<DateTime<Tz>> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    let local = if months >= 0 {
        t.naive_local().checked_add_months(magnitude)?
    } else {
        t.naive_local().checked_sub_months(magnitude)?
    };
    resolve(t, local)
}

/// Shifts `t` by an exact wall-clock delta.
pub(crate) fn shift_time<Tz: TimeZone>(t: &DateTime<Tz>, delta: TimeDelta) -> Option<DateTime<Tz>> {
    let local = t.naive_local().checked_add_signed(delta)?;
    resolve(t, local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn fixed(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    #[test]
    fn resolve_keeps_fixed_offset() {
        let t = fixed(5).with_ymd_and_hms(2019, 10, 24, 15, 4, 5).unwrap();
        let shifted = shift_days(&t, 3).unwrap();
        assert_eq!(shifted.offset(), t.offset());
        assert_eq!(shifted.naive_local().time(), t.naive_local().time());
    }

    #[test]
    fn shift_days_negative() {
        let t = Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap();
        let shifted = shift_days(&t, -1).unwrap();
        assert_eq!(shifted, Utc.with_ymd_and_hms(2018, 12, 31, 0, 0, 0).unwrap());
    }

    #[test]
    fn shift_months_clamps_day() {
        let t = Utc.with_ymd_and_hms(2019, 1, 31, 12, 0, 0).unwrap();
        let shifted = shift_months(&t, 1).unwrap();
        assert_eq!(shifted, Utc.with_ymd_and_hms(2019, 2, 28, 12, 0, 0).unwrap());
    }

    #[test]
    fn shift_months_negative() {
        let t = Utc.with_ymd_and_hms(2019, 3, 15, 6, 30, 0).unwrap();
        let shifted = shift_months(&t, -3).unwrap();
        assert_eq!(shifted, Utc.with_ymd_and_hms(2018, 12, 15, 6, 30, 0).unwrap());
    }

    #[test]
    fn out_of_range_is_none() {
        let t = Utc.with_ymd_and_hms(2019, 10, 24, 15, 4, 5).unwrap();
        assert!(shift_months(&t, i64::MAX).is_none());
        assert!(shift_days(&t, i64::MAX).is_none());
    }
}
