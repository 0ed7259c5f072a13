//! Period unit selector and its short string codes.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseUnitError;

/// Calendar granularity selector.
///
/// Each unit maps to a short string code accepted by the string-based entry
/// points: `"yy"` (year), `"mm"` (month), `"dd"` (day), `"HH"` (hour),
/// `"MM"` (minute), `"SS"` (second), `"WK"` (week), `"SMZ"` (season, i.e. a
/// calendar quarter starting Jan/Apr/Jul/Oct), `"SMY"` (semi-year starting
/// Jan or Jul).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Calendar year, code `"yy"`.
    Year,
    /// Calendar month, code `"mm"`.
    Month,
    /// Calendar day, code `"dd"`.
    Day,
    /// Hour, code `"HH"`.
    Hour,
    /// Minute, code `"MM"`.
    Minute,
    /// Second, code `"SS"`.
    Second,
    /// Monday-to-Sunday week, code `"WK"`.
    Week,
    /// Calendar quarter, code `"SMZ"`.
    Season,
    /// Half-year, code `"SMY"`.
    SemiYear,
}

impl Unit {
    /// All units, in code-table order.
    pub const ALL: [Unit; 9] = [
        Unit::Year,
        Unit::Month,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Week,
        Unit::Season,
        Unit::SemiYear,
    ];

    /// Returns the short string code for this unit.
    pub const fn code(self) -> &'static str {
        match self {
            Unit::Year => "yy",
            Unit::Month => "mm",
            Unit::Day => "dd",
            Unit::Hour => "HH",
            Unit::Minute => "MM",
            Unit::Second => "SS",
            Unit::Week => "WK",
            Unit::Season => "SMZ",
            Unit::SemiYear => "SMY",
        }
    }

    /// Parses a short string code, returning `None` for unrecognized input.
    ///
    /// Codes are case-sensitive (`"HH"` is the hour, `"hh"` is nothing).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "yy" => Some(Unit::Year),
            "mm" => Some(Unit::Month),
            "dd" => Some(Unit::Day),
            "HH" => Some(Unit::Hour),
            "MM" => Some(Unit::Minute),
            "SS" => Some(Unit::Second),
            "WK" => Some(Unit::Week),
            "SMZ" => Some(Unit::Season),
            "SMY" => Some(Unit::SemiYear),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ParseUnitError {
            code: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip_all() {
        for unit in Unit::ALL {
            assert_eq!(
                Unit::from_code(unit.code()),
                Some(unit),
                "code roundtrip failed for {unit:?}"
            );
        }
    }

    #[test]
    fn from_code_unknown() {
        assert_eq!(Unit::from_code("foobar"), None);
        assert_eq!(Unit::from_code(""), None);
        assert_eq!(Unit::from_code("YY"), None);
        assert_eq!(Unit::from_code("hh"), None);
    }

    #[test]
    fn from_str_ok() {
        assert_eq!("WK".parse::<Unit>().unwrap(), Unit::Week);
        assert_eq!("SMZ".parse::<Unit>().unwrap(), Unit::Season);
    }

    #[test]
    fn from_str_err() {
        let err = "foobar".parse::<Unit>().unwrap_err();
        assert_eq!(err.code, "foobar");
    }

    #[test]
    fn display_prints_code() {
        assert_eq!(Unit::Year.to_string(), "yy");
        assert_eq!(Unit::SemiYear.to_string(), "SMY");
    }

    #[test]
    fn all_is_distinct() {
        for (i, a) in Unit::ALL.iter().enumerate() {
            for b in &Unit::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<Unit>();
    }
}
