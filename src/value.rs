//! Dynamic values exchanged through meta-property accessors
//!
//! Generic code never touches fields directly. It reads and writes them as
//! [`Value`]s, and every field type implements [`MetaValue`] to convert
//! between its Rust representation, the dynamic value and its lexical form.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};

use crate::error::{Error, Result};
use crate::object::BaseObject;

/// Shape of a meta-property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Scalar with a lexical form (string, number, date/time)
    Scalar,
    /// Single nested schema object
    Object,
    /// Owned-child collection of schema objects
    Collection,
}

impl PropertyKind {
    /// Get the kind as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Scalar => "scalar",
            PropertyKind::Object => "object",
            PropertyKind::Collection => "collection",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field value in dynamic form
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent optional value
    None,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// String
    String(String),
    /// Date and time in UTC
    DateTime(DateTime<Utc>),
    /// Nested schema object
    Object(Box<dyn BaseObject>),
}

impl Value {
    /// Check if this is the absent value
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Get the schema type name of the value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => bool::type_name(),
            Value::Int(_) => i64::type_name(),
            Value::Float(_) => f64::type_name(),
            Value::String(_) => String::type_name(),
            Value::DateTime(_) => <DateTime<Utc>>::type_name(),
            Value::Object(obj) => obj.class_name(),
        }
    }

    /// Borrow the nested object, if any
    pub fn as_object(&self) -> Option<&dyn BaseObject> {
        match self {
            Value::Object(obj) => Some(&**obj),
            _ => None,
        }
    }

    /// Render the lexical form of a scalar value
    pub fn to_text(&self) -> Result<String> {
        match self {
            Value::Bool(v) => Ok(v.to_string()),
            Value::Int(v) => Ok(v.to_string()),
            Value::Float(v) => Ok(float_text(*v)),
            Value::String(v) => Ok(v.clone()),
            Value::DateTime(v) => Ok(v.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::None => Err(Error::Value("absent value has no lexical form".to_string())),
            Value::Object(obj) => Err(Error::Type(format!(
                "{} has no lexical form",
                obj.class_name()
            ))),
        }
    }
}

/// Lexical form of a float, with the XML spellings of the special values
fn float_text(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "INF".to_string()
    } else if v == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        v.to_string()
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}

/// Conversion between a field type and [`Value`]
pub trait MetaValue: Clone + PartialEq + fmt::Debug + 'static {
    /// Property kind of fields holding this type
    const KIND: PropertyKind;

    /// Schema type name (e.g. `float`, `FDSNXML::CounterType`)
    fn type_name() -> &'static str;

    /// Convert to a dynamic value
    fn to_value(&self) -> Value;

    /// Convert from a dynamic value
    fn from_value(value: Value) -> Result<Self>;

    /// Parse from the lexical form
    fn from_text(text: &str) -> Result<Self>;

    /// Borrow as a schema object, for object kinds
    fn as_object(&self) -> Option<&dyn BaseObject> {
        None
    }

    /// Create a default instance as a schema object, for object kinds
    fn create_object() -> Option<Box<dyn BaseObject>> {
        None
    }
}

fn mismatch<T: MetaValue>(value: &Value) -> Error {
    Error::Type(format!(
        "expected {}, got {}",
        T::type_name(),
        value.type_name()
    ))
}

impl MetaValue for String {
    const KIND: PropertyKind = PropertyKind::Scalar;

    fn type_name() -> &'static str {
        "string"
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            other => Err(mismatch::<Self>(&other)),
        }
    }

    fn from_text(text: &str) -> Result<Self> {
        Ok(text.to_string())
    }
}

impl MetaValue for f64 {
    const KIND: PropertyKind = PropertyKind::Scalar;

    fn type_name() -> &'static str {
        "float"
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float(v) => Ok(v),
            Value::Int(v) => Ok(v as f64),
            other => Err(mismatch::<Self>(&other)),
        }
    }

    fn from_text(text: &str) -> Result<Self> {
        let text = text.trim();
        match text {
            "INF" => Ok(f64::INFINITY),
            "-INF" => Ok(f64::NEG_INFINITY),
            "NaN" => Ok(f64::NAN),
            _ => text
                .parse()
                .map_err(|e| Error::Value(format!("invalid float '{}': {}", text, e))),
        }
    }
}

impl MetaValue for i64 {
    const KIND: PropertyKind = PropertyKind::Scalar;

    fn type_name() -> &'static str {
        "int"
    }

    fn to_value(&self) -> Value {
        Value::Int(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Int(v) => Ok(v),
            other => Err(mismatch::<Self>(&other)),
        }
    }

    fn from_text(text: &str) -> Result<Self> {
        let text = text.trim();
        text.parse()
            .map_err(|e| Error::Value(format!("invalid integer '{}': {}", text, e)))
    }
}

impl MetaValue for bool {
    const KIND: PropertyKind = PropertyKind::Scalar;

    fn type_name() -> &'static str {
        "boolean"
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            other => Err(mismatch::<Self>(&other)),
        }
    }

    fn from_text(text: &str) -> Result<Self> {
        match text.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(Error::Value(format!("invalid boolean '{}'", other))),
        }
    }
}

impl MetaValue for DateTime<Utc> {
    const KIND: PropertyKind = PropertyKind::Scalar;

    fn type_name() -> &'static str {
        "datetime"
    }

    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::DateTime(v) => Ok(v),
            other => Err(mismatch::<Self>(&other)),
        }
    }

    fn from_text(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Ok(dt.with_timezone(&Utc));
        }
        // StationXML documents frequently omit the zone designator
        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Utc.from_utc_datetime(&naive))
            .map_err(|e| Error::Value(format!("invalid datetime '{}': {}", text, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fdsnxml::CounterType;

    #[test]
    fn test_scalar_lexical_forms() {
        assert_eq!(Value::Float(1.5).to_text().unwrap(), "1.5");
        assert_eq!(Value::Float(0.1).to_text().unwrap(), "0.1");
        assert_eq!(Value::Int(-3).to_text().unwrap(), "-3");
        assert_eq!(Value::Bool(true).to_text().unwrap(), "true");
        assert_eq!(Value::from("GFZ").to_text().unwrap(), "GFZ");
        assert!(Value::None.to_text().is_err());
        assert!(Value::Object(Box::new(CounterType::new(1))).to_text().is_err());
    }

    #[test]
    fn test_float_text_round_trip() {
        for v in [0.0, -1.25, 1e-12, 123456.789, f64::INFINITY, f64::NEG_INFINITY] {
            let text = v.to_value().to_text().unwrap();
            assert_eq!(f64::from_text(&text).unwrap(), v, "text {}", text);
        }
        let text = f64::NAN.to_value().to_text().unwrap();
        assert!(f64::from_text(&text).unwrap().is_nan());
        assert!(matches!(f64::from_text("abc"), Err(Error::Value(_))));
    }

    #[test]
    fn test_float_special_values_text() {
        assert_eq!(f64::INFINITY.to_value().to_text().unwrap(), "INF");
        assert_eq!(f64::NEG_INFINITY.to_value().to_text().unwrap(), "-INF");
        assert_eq!(f64::NAN.to_value().to_text().unwrap(), "NaN");
        assert_eq!((-0.5f64).to_value().to_text().unwrap(), "-0.5");
    }

    #[test]
    fn test_bool_and_int_parsing() {
        assert!(bool::from_text("1").unwrap());
        assert!(!bool::from_text(" false ").unwrap());
        assert!(bool::from_text("yes").is_err());
        assert_eq!(i64::from_text(" 42 ").unwrap(), 42);
        assert!(i64::from_text("4.2").is_err());
    }

    #[test]
    fn test_datetime_parsing() {
        let dt = <DateTime<Utc>>::from_text("2010-01-01T12:30:00Z").unwrap();
        assert_eq!(dt.to_value().to_text().unwrap(), "2010-01-01T12:30:00Z");

        let naive = <DateTime<Utc>>::from_text("2010-01-01T12:30:00.5").unwrap();
        assert_eq!(naive.to_value().to_text().unwrap(), "2010-01-01T12:30:00.500Z");

        let offset = <DateTime<Utc>>::from_text("2010-01-01T14:30:00+02:00").unwrap();
        assert_eq!(offset, dt);

        assert!(<DateTime<Utc>>::from_text("yesterday").is_err());
    }

    #[test]
    fn test_from_value_type_mismatch() {
        assert!(matches!(
            String::from_value(Value::Int(1)),
            Err(Error::Type(_))
        ));
        assert_eq!(f64::from_value(Value::Int(2)).unwrap(), 2.0);
    }

    #[test]
    fn test_option_into_value() {
        assert!(Value::from(None::<i64>).is_none());
        assert_eq!(Value::from(Some(3i64)), Value::Int(3));
        assert_eq!(Value::Int(3).type_name(), "int");
    }
}
