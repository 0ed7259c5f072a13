//! Weekday numbering and named-weekday accessors.
//!
//! A week here is the Monday-to-Sunday span containing the instant. The
//! same-week accessors (`monday` .. `sunday`) land within that span; the
//! `next_*` and `last_*` variants shift an unconditional seven days into
//! the adjacent week.

use chrono::{DateTime, Datelike, TimeZone};

use crate::local;

/// Returns the weekday number of `t`: Monday is 1, Sunday is 7.
pub fn weekday_number<Tz: TimeZone>(t: &DateTime<Tz>) -> u32 {
    t.weekday().number_from_monday()
}

/// Lands on `target` (1..=7) within the week containing `t`, shifted by
/// `week_offset` further days. Time-of-day and zone are preserved.
fn weekday_at<Tz: TimeZone>(t: &DateTime<Tz>, target: i64, week_offset: i64) -> DateTime<Tz> {
    let delta = target - i64::from(weekday_number(t)) + week_offset;
    local::shift_days(t, delta).unwrap_or_else(|| t.clone())
}

macro_rules! weekday_accessors {
    ($($day:literal, $number:literal => $same:ident, $next:ident, $last:ident;)+) => {
        $(
            #[doc = concat!("Returns the ", $day, " of the week containing `t`, preserving time-of-day and zone.")]
            pub fn $same<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
                weekday_at(t, $number, 0)
            }

            #[doc = concat!("Returns the ", $day, " of the week after the one containing `t`.")]
            ///
            /// Unconditionally seven days past the same-week accessor, so
            /// the result is in the adjacent week even when `t` itself
            /// falls on that weekday.
            pub fn $next<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
                weekday_at(t, $number, 7)
            }

            #[doc = concat!("Returns the ", $day, " of the week before the one containing `t`.")]
            ///
            /// Unconditionally seven days before the same-week accessor.
            pub fn $last<Tz: TimeZone>(t: &DateTime<Tz>) -> DateTime<Tz> {
                weekday_at(t, $number, -7)
            }
        )+
    };
}

weekday_accessors! {
    "Monday", 1 => monday, next_monday, last_monday;
    "Tuesday", 2 => tuesday, next_tuesday, last_tuesday;
    "Wednesday", 3 => wednesday, next_wednesday, last_wednesday;
    "Thursday", 4 => thursday, next_thursday, last_thursday;
    "Friday", 5 => friday, next_friday, last_friday;
    "Saturday", 6 => saturday, next_saturday, last_saturday;
    "Sunday", 7 => sunday, next_sunday, last_sunday;
}
