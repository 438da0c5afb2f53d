//! Serde support for encoded dates embedded in JSON documents.
//!
//! ```
//! use jsondate::json::JsonDate;
//!
//! #[derive(serde::Deserialize)]
//! struct Order {
//!     created: JsonDate,
//! }
//!
//! let order: Order = serde_json::from_str(r#"{"created":"\/Date(0)\/"}"#).unwrap();
//! assert_eq!(order.created.point().epoch_millis(), Some(0));
//! ```

use crate::encoded::{self, PointInTime};
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};

/// A valid instant read from (and written as) `/Date(<ms>)/`.
///
/// Unlike conversion, deserialization is strict: malformed strings are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JsonDate(PointInTime);

impl JsonDate {
    pub fn point(&self) -> PointInTime {
        self.0
    }
}

impl From<JsonDate> for PointInTime {
    fn from(date: JsonDate) -> Self {
        date.0
    }
}

impl Serialize for JsonDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0.to_encoded() {
            Some(encoded) => serializer.serialize_str(&encoded),
            None => Err(ser::Error::custom("cannot serialize an invalid date")),
        }
    }
}

impl<'de> Deserialize<'de> for JsonDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        encoded::decode(&value).map(JsonDate).map_err(de::Error::custom)
    }
}
