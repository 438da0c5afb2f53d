//! Date formatting collaborators.
//!
//! [`DateFormatter`] is the seam the converter renders through. The crate ships
//! [`ChronoFormatter`], which understands Angular-style patterns and renders in
//! a configurable timezone; any closure `Fn(PointInTime, &str) -> String` works
//! as well.

use crate::constants::{INVALID_DATE_OUTPUT, TIMEZONE_LOCAL, TIMEZONE_UTC};
use crate::encoded::PointInTime;
use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local, Utc};
use std::fmt;

pub mod pattern;

/// Maps an instant and a format pattern to display text.
pub trait DateFormatter: Send + Sync {
    fn format(&self, instant: PointInTime, pattern: &str) -> String;
}

impl<F> DateFormatter for F
where
    F: Fn(PointInTime, &str) -> String + Send + Sync,
{
    fn format(&self, instant: PointInTime, pattern: &str) -> String {
        self(instant, pattern)
    }
}

/// Timezone a formatter renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeZoneSetting {
    #[default]
    Utc,
    /// Whatever the host reports as its local zone
    Local,
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    /// Parse `utc`, `local` or an offset such as `+05:30` / `-0300`.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case(TIMEZONE_UTC) || trimmed == "Z" {
            return Ok(Self::Utc);
        }
        if trimmed.eq_ignore_ascii_case(TIMEZONE_LOCAL) {
            return Ok(Self::Local);
        }
        parse_offset(trimmed)
            .map(Self::Fixed)
            .ok_or_else(|| anyhow::anyhow!("Unknown timezone '{}': expected 'utc', 'local' or '+HH:MM'", value))
    }

    fn apply(&self, dt: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Self::Utc => dt.fixed_offset(),
            Self::Local => dt.with_timezone(&Local).fixed_offset(),
            Self::Fixed(offset) => dt.with_timezone(offset),
        }
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => f.write_str(TIMEZONE_UTC),
            Self::Local => f.write_str(TIMEZONE_LOCAL),
            Self::Fixed(offset) => write!(f, "{}", offset),
        }
    }
}

fn parse_offset(value: &str) -> Option<FixedOffset> {
    let (sign, rest) = match value.chars().next()? {
        '+' => (1, &value[1..]),
        '-' => (-1, &value[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) || rest.matches(':').count() > 1 {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Default formatter: Angular-style patterns rendered with chrono.
///
/// The invalid instant renders as an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoFormatter {
    timezone: TimeZoneSetting,
}

impl ChronoFormatter {
    pub fn new(timezone: TimeZoneSetting) -> Self {
        Self { timezone }
    }

    pub fn utc() -> Self {
        Self::new(TimeZoneSetting::Utc)
    }

    pub fn timezone(&self) -> TimeZoneSetting {
        self.timezone
    }
}

impl DateFormatter for ChronoFormatter {
    fn format(&self, instant: PointInTime, pattern: &str) -> String {
        match instant.as_datetime() {
            Some(dt) => pattern::render(&self.timezone.apply(dt), pattern),
            None => INVALID_DATE_OUTPUT.to_string(),
        }
    }
}
