//! Constants used throughout the crate
//!
//! This module centralizes the encoded-date layout, default patterns and
//! user-facing messages.

/// Pattern used when the caller does not supply one (day-month-year)
pub const DEFAULT_FORMAT: &str = "dd-MM-yyyy";

/// Number of leading characters ignored in an encoded date (`/Date(`)
pub const PREFIX_LEN: usize = 6;

/// Rendered output for an invalid instant
pub const INVALID_DATE_OUTPUT: &str = "";

// Timezone names accepted in configuration
pub const TIMEZONE_UTC: &str = "utc";
pub const TIMEZONE_LOCAL: &str = "local";

// Config & log file locations
pub const APP_DIR_NAME: &str = "jsondate";
pub const LOCAL_CONFIG_FILE: &str = "jsondate.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "jsondate.log";

// CLI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const USAGE: &str = "Usage: jsondate <encoded-date> [format]\n       jsondate --init-config [path]";
