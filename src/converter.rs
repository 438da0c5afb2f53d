//! Encoded date to display string conversion.

use crate::constants::DEFAULT_FORMAT;
use crate::encoded::{self, PointInTime};
use crate::error::DateError;
use crate::formatter::{ChronoFormatter, DateFormatter};
use once_cell::sync::Lazy;

static DEFAULT_CONVERTER: Lazy<DateStringConverter<ChronoFormatter>> =
    Lazy::new(|| DateStringConverter::new(ChronoFormatter::utc()));

/// Turns encoded dates such as `/Date(1700000000000)/` into display text.
///
/// Conversion is permissive: input without usable milliseconds becomes the
/// invalid instant and the formatter decides what that renders as. Use
/// [`DateStringConverter::decode`] when malformed input must be detected.
#[derive(Debug, Clone)]
pub struct DateStringConverter<F> {
    formatter: F,
    default_format: String,
}

impl<F: DateFormatter> DateStringConverter<F> {
    pub fn new(formatter: F) -> Self {
        Self::with_default_format(formatter, DEFAULT_FORMAT)
    }

    /// Converter whose omitted-pattern fallback is `default_format`
    pub fn with_default_format(formatter: F, default_format: impl Into<String>) -> Self {
        Self {
            formatter,
            default_format: default_format.into(),
        }
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    /// Render `value` with `format`.
    pub fn convert(&self, value: &str, format: &str) -> String {
        let instant = encoded::decode_lenient(value);
        self.formatter.format(instant, format)
    }

    /// Render `value` with the default pattern.
    pub fn convert_default(&self, value: &str) -> String {
        self.convert(value, &self.default_format)
    }

    /// Render `value` with `format`, falling back to the default pattern.
    pub fn convert_opt(&self, value: &str, format: Option<&str>) -> String {
        self.convert(value, format.unwrap_or(&self.default_format))
    }

    /// Strict decoding, for callers that must tell malformed input apart.
    pub fn decode(&self, value: &str) -> Result<PointInTime, DateError> {
        encoded::decode(value)
    }
}

/// Convert with the shared UTC converter and `dd-MM-yyyy` fallback.
pub fn convert(value: &str, format: Option<&str>) -> String {
    DEFAULT_CONVERTER.convert_opt(value, format)
}
