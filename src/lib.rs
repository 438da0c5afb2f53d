//! jsondate - render .NET-style JSON dates
//!
//! JSON produced by .NET serializers carries dates as `"\/Date(1700000000000)\/"`:
//! a fixed six character prefix followed by milliseconds since the Unix epoch.
//! This crate decodes that form and renders it with Angular-style format
//! patterns such as `dd-MM-yyyy`.
//!
//! ```
//! assert_eq!(jsondate::convert("/Date(0)/", None), "01-01-1970");
//! assert_eq!(jsondate::convert("/Date(1700000000000)/", Some("yyyy-MM-dd")), "2023-11-14");
//! // malformed input never panics
//! assert_eq!(jsondate::convert("/Date(", None), "");
//! ```
//!
//! # Modules
//!
//! * [`encoded`] - Decoding of encoded dates into [`PointInTime`]
//! * [`formatter`] - The [`DateFormatter`] seam and the chrono-backed default
//! * [`converter`] - [`DateStringConverter`], tying the two together
//! * [`json`] - Serde support for encoded dates
//! * [`config`] - Configuration file handling
//! * [`logger`] - File logging setup

/// Configuration module for managing application settings
pub mod config;

/// Crate constants and default values
pub mod constants;

/// Encoded date to display string conversion
pub mod converter;

/// Decoding of .NET-style JSON dates
pub mod encoded;

/// Error types
pub mod error;

/// Date formatting collaborators
pub mod formatter;

/// Serde support for encoded dates
pub mod json;

/// Logging setup
pub mod logger;

pub use converter::{convert, DateStringConverter};
pub use encoded::{decode, EncodedDate, PointInTime};
pub use error::DateError;
pub use formatter::{ChronoFormatter, DateFormatter, TimeZoneSetting};
