//! Pin metadata: an optional name plus a typed key/value store.

use std::collections::BTreeMap;
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::ser::Error as _;
use serde::{Serialize, Serializer};

use crate::error::PinataError;

/// A value accepted by the Pinata key/value store.
///
/// Pinata only understands strings, numbers, and dates. Dates are stored as
/// UTC RFC 3339 strings at conversion time, so they become
/// [`MetadataValue::String`].
///
/// A non-finite [`MetadataValue::Float`] has no JSON form and fails to
/// serialize.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    String(String),
    Integer(i64),
    Float(f64),
}

impl Serialize for MetadataValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetadataValue::String(s) => serializer.serialize_str(s),
            MetadataValue::Integer(i) => serializer.serialize_i64(*i),
            MetadataValue::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            MetadataValue::Float(f) => Err(S::Error::custom(format_args!(
                "unsupported float value {f} in metadata"
            ))),
        }
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::String(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::String(value.to_string())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for MetadataValue {
                fn from(value: $ty) -> Self {
                    MetadataValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for MetadataValue {
    /// Widens through the shortest decimal form, so `1.1f32` stays `1.1`.
    fn from(value: f32) -> Self {
        let widened = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        MetadataValue::Float(widened)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        MetadataValue::Float(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for MetadataValue {
    fn from(value: DateTime<Tz>) -> Self {
        MetadataValue::String(format_timestamp(&value))
    }
}

impl From<SystemTime> for MetadataValue {
    fn from(value: SystemTime) -> Self {
        DateTime::<Utc>::from(value).into()
    }
}

/// Format an instant as UTC RFC 3339 with second precision, e.g.
/// `2006-01-02T15:04:05Z`.
pub fn format_timestamp<Tz: TimeZone>(value: &DateTime<Tz>) -> String {
    value
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Metadata attached to a pin request.
///
/// # Example
///
/// ```ignore
/// use pinata_client::Metadata;
///
/// let mut meta = Metadata::with_name("such_wow");
/// meta.set_key_value("string_thing", "much_awesome");
/// meta.set_key_value("int_thing", 123);
/// meta.set_key_value("time_thing", chrono::Utc::now());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "String::is_empty")]
    name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    keyvalues: BTreeMap<String, MetadataValue>,
}

impl Metadata {
    /// Create metadata with an empty name and an empty key/value store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create metadata with the given name.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyvalues: BTreeMap::new(),
        }
    }

    /// Get the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the key/value store.
    pub fn keyvalues(&self) -> &BTreeMap<String, MetadataValue> {
        &self.keyvalues
    }

    /// Look up a single value.
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.keyvalues.get(key)
    }

    /// True when there is neither a name nor any key/value pair.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.keyvalues.is_empty()
    }

    /// Store a value under `key`, replacing any previous value.
    pub fn set_key_value(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.keyvalues.insert(key.into(), value.into());
    }

    /// Store a dynamically typed JSON value under `key`.
    ///
    /// Strings and numbers are accepted. Booleans, nulls, arrays, objects,
    /// and integers beyond the `i64` range are rejected with
    /// [`PinataError::UnsupportedMetadataType`] and the store is left as it was.
    pub fn try_set_key_value(
        &mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Result<(), PinataError> {
        let value = match value {
            serde_json::Value::String(s) => MetadataValue::String(s),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    MetadataValue::Integer(i)
                } else if let Some(f) = n.as_f64().filter(|_| n.is_f64()) {
                    MetadataValue::Float(f)
                } else {
                    return Err(PinataError::UnsupportedMetadataType("u64"));
                }
            }
            serde_json::Value::Bool(_) => {
                return Err(PinataError::UnsupportedMetadataType("bool"))
            }
            serde_json::Value::Null => return Err(PinataError::UnsupportedMetadataType("null")),
            serde_json::Value::Array(_) => {
                return Err(PinataError::UnsupportedMetadataType("array"))
            }
            serde_json::Value::Object(_) => {
                return Err(PinataError::UnsupportedMetadataType("object"))
            }
        };
        self.keyvalues.insert(key.into(), value);
        Ok(())
    }
}
