//! JSON wrappers for model values.
//!
//! Every model type derives serde, so these are thin shims over
//! `serde_json` that fold its error into [`SerdeError`](crate::SerdeError).
//! Dates serialize in their canonical text form and `SDF` decimals as
//! strings so the authored scale survives.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Deserializes a model value from a JSON string.
///
/// # Examples
///
/// ```
/// use arxml_model::DateValue;
/// use arxml_serde::json::from_json_str;
///
/// let date: DateValue = from_json_str(r#""2025-01-02""#).unwrap();
/// assert_eq!(date.to_string(), "2025-01-02");
/// ```
pub fn from_json_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    Ok(serde_json::from_str(s)?)
}

/// Serializes a model value to a compact JSON string.
pub fn to_json_string<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string(value)?)
}

/// Serializes a model value to a pretty-printed JSON string.
pub fn to_json_string_pretty<T>(value: &T) -> Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn to_json_value<T>(value: &T) -> Result<serde_json::Value>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}

pub fn from_json_value<T>(value: serde_json::Value) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arxml_model::{Node, SpecialDataGroup, SpecialDataValue};
    use serde_json::json;

    #[test]
    fn test_sdf_decimal_keeps_scale() {
        let value = SpecialDataValue::new(arxml_model::Numeric::parse("1.50").unwrap());
        let text = to_json_string(&value).unwrap();
        assert_eq!(text, r#"{"value":"1.50"}"#);
        let back: SpecialDataValue = from_json_str(&text).unwrap();
        assert_eq!(back.value.to_string(), "1.50");
    }

    #[test]
    fn test_node_is_tagged() {
        let node = Node::from(SpecialDataGroup::with_gid("g"));
        let value = to_json_value(&node).unwrap();
        assert_eq!(value["type"], json!("SpecialDataGroup"));
        assert_eq!(value["value"]["gid"], json!("g"));
        let back: Node = from_json_value(value).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_invalid_json_is_json_error() {
        let err = from_json_str::<SpecialDataGroup>("{").unwrap_err();
        assert!(matches!(err, crate::SerdeError::Json(_)));
    }
}
