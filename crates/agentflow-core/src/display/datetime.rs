//! Timestamp formatting in the system time zone.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

const FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Formats a `Timestamp` as `YYYY-MM-DD HH:MM:SS TZ` in the system time zone.
///
/// Stored timestamps are UTC; this is the only place they are localized.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_in(self.0, TimeZone::system()))
    }
}

fn format_in(timestamp: &Timestamp, tz: TimeZone) -> String {
    timestamp.to_zoned(tz).strftime(FORMAT).to_string()
}
