//! # calspan
//!
//! Weekday navigation and calendar-period arithmetic for
//! [`chrono`] datetimes.
//!
//! Every function is a pure value-to-value computation over a
//! `DateTime<Tz>`: weekday boundaries of the Monday-to-Sunday week
//! containing an instant, beginning/end instants of an enclosing period
//! (day, week, month, season = calendar quarter, half-year, year), and
//! shifts of an instant by N such periods. The input's zone is preserved
//! across every derived value.
//!
//! Period granularities are selected either with the [`Unit`] enum or with
//! its short string codes (`"yy"`, `"mm"`, `"dd"`, `"HH"`, `"MM"`, `"SS"`,
//! `"WK"`, `"SMZ"`, `"SMY"`). The string-code entry points never fail: an
//! unrecognized code returns the input instant unchanged.
//!
//! ## Quick Start
//!
//! ```ignore
//! use calspan::{beginning_of, end_of, monday, next_monday, x_at, Unit};
//! use chrono::{TimeZone, Utc};
//!
//! let t = Utc.with_ymd_and_hms(2019, 10, 24, 15, 4, 5).unwrap(); // Thursday
//!
//! // Weekday navigation within / around the containing week
//! assert_eq!(monday(&t).to_rfc3339(), "2019-10-21T15:04:05+00:00");
//! assert_eq!(next_monday(&t).to_rfc3339(), "2019-10-28T15:04:05+00:00");
//!
//! // Period boundaries
//! assert_eq!(beginning_of(&t, "WK").to_rfc3339(), "2019-10-21T00:00:00+00:00");
//! assert_eq!(end_of(&t, "dd").to_rfc3339(), "2019-10-24T23:59:59.999999999+00:00");
//!
//! // Period offsets
//! assert_eq!(x_at(&t, "yy", 1).to_rfc3339(), "2020-10-24T15:04:05+00:00");
//! assert_eq!("SMZ".parse::<Unit>().unwrap(), Unit::Season);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `unit` | The `Unit` granularity enum and its string codes |
//! | `weekday` | Weekday numbering and named-weekday accessors |
//! | `boundary` | `beginning_of` / `end_of` period boundaries |
//! | `shift` | `x_at` period offsets and directional wrappers |
//! | `error` | The unit-code parse error |

pub use chrono;

mod boundary;
mod error;
mod local;
mod shift;
mod unit;
mod weekday;

pub use boundary::{beginning_of, beginning_of_unit, end_of, end_of_unit};
pub use error::ParseUnitError;
pub use shift::{last_x_at, last_x_at_unit, next_x_at, next_x_at_unit, x_at, x_at_unit};
pub use unit::Unit;
pub use weekday::{
    friday, last_friday, last_monday, last_saturday, last_sunday, last_thursday, last_tuesday,
    last_wednesday, monday, next_friday, next_monday, next_saturday, next_sunday, next_thursday,
    next_tuesday, next_wednesday, saturday, sunday, thursday, tuesday, wednesday, weekday_number,
};
