//! Error types for the calspan crate.

/// Error returned when a period-unit code fails to parse.
///
/// Only [`Unit::from_str`](crate::Unit) produces this error. The calendar
/// functions themselves never fail: an unrecognized code passed to them
/// returns the input instant unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized unit code: {code:?} (expected one of yy, mm, dd, HH, MM, SS, WK, SMZ, SMY)")]
pub struct ParseUnitError {
    /// The code that failed to parse.
    pub code: String,
}
