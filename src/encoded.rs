//! Decoding of .NET-style JSON dates
//!
//! An encoded date looks like `/Date(1700000000000)/`: a six character prefix,
//! a signed count of milliseconds since the Unix epoch, and whatever trailer
//! the serializer added (`)/`, a `+0100` offset, ...). Only the prefix length
//! is fixed; its content and the trailer are never inspected.

use crate::constants::PREFIX_LEN;
use crate::error::DateError;
use chrono::{DateTime, Utc};

/// An instant decoded from an encoded date, or the invalid instant.
///
/// The invalid instant stands in for input that carried no usable number.
/// Formatters decide how to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointInTime(Option<DateTime<Utc>>);

impl PointInTime {
    /// Build an instant from milliseconds since the epoch.
    ///
    /// Values outside chrono's range (`DateTime::<Utc>::MIN_UTC` to
    /// `MAX_UTC`, roughly ±262,000 years) produce the invalid instant.
    /// That range is narrower than the ±8.64e15 ms a JavaScript `Date` accepts,
    /// so the extreme tail of JSON dates does not decode.
    pub fn from_epoch_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis))
    }

    pub fn invalid() -> Self {
        Self(None)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        self.0
    }

    pub fn epoch_millis(&self) -> Option<i64> {
        self.0.map(|dt| dt.timestamp_millis())
    }

    /// Re-encode as `/Date(<ms>)/`, the form most JSON serializers emit.
    pub fn to_encoded(&self) -> Option<String> {
        self.epoch_millis().map(|ms| format!("/Date({})/", ms))
    }
}

impl From<DateTime<Utc>> for PointInTime {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(Some(dt))
    }
}

/// Borrowed view over an encoded date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedDate<'a>(&'a str);

impl<'a> EncodedDate<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self(raw)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Everything after the ignored prefix. Empty when the input is too short.
    pub fn payload(&self) -> &'a str {
        match self.0.char_indices().nth(PREFIX_LEN) {
            Some((idx, _)) => &self.0[idx..],
            None => "",
        }
    }

    /// Milliseconds carried by the payload.
    pub fn epoch_millis(&self) -> Result<i64, DateError> {
        parse_leading_int(self.payload()).ok_or_else(|| DateError::NotANumber(self.0.to_string()))
    }

    /// Strict decoding: reports why the value is not a usable instant.
    pub fn decode(&self) -> Result<PointInTime, DateError> {
        let millis = self.epoch_millis()?;
        let point = PointInTime::from_epoch_millis(millis);
        if point.is_valid() {
            Ok(point)
        } else {
            Err(DateError::OutOfRange(millis))
        }
    }

    /// Permissive decoding: malformed input becomes the invalid instant.
    pub fn decode_lenient(&self) -> PointInTime {
        match self.decode() {
            Ok(point) => point,
            Err(e) => {
                log::debug!("Treating {:?} as invalid date: {}", self.0, e);
                PointInTime::invalid()
            }
        }
    }
}

/// Decode an encoded date, reporting malformed input as an error.
pub fn decode(raw: &str) -> Result<PointInTime, DateError> {
    EncodedDate::new(raw).decode()
}

/// Decode an encoded date, mapping malformed input to the invalid instant.
pub fn decode_lenient(raw: &str) -> PointInTime {
    EncodedDate::new(raw).decode_lenient()
}

/// Lenient integer parse: leading whitespace (including U+FEFF), an optional
/// sign, then as many decimal digits as follow. Stops at the first non-digit.
///
/// Returns `None` when no digit is found. Magnitudes that do not fit in an
/// `i64` saturate, so they still fail the range check downstream.
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(b - b'0');
        value = value
            .checked_mul(10)
            .and_then(|v| if negative { v.checked_sub(digit) } else { v.checked_add(digit) })
            .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    }

    seen_digit.then_some(value)
}
