//! Property value types for graph nodes and edges
//!
//! Property values are restricted to a closed set of primitives plus flat
//! sequences of them. Composite (map) values are unrepresentable by
//! construction; external data is funneled through [`PropertyValue::from_json`],
//! which rejects objects with [`GraphError::InvalidPropertyType`].

use super::store::{GraphError, GraphResult};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A single property value
///
/// Supports:
/// - Null
/// - String
/// - Boolean
/// - Integer (i64)
/// - Float (f64)
/// - Array (sequence of the above, homogeneous or not)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    String(String),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Array(Vec<PropertyValue>),
}

impl PropertyValue {
    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    /// Get string value if this is a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get boolean value if this is a boolean
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get array value if this is an array
    pub fn as_array(&self) -> Option<&Vec<PropertyValue>> {
        match self {
            PropertyValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Null => "Null",
            PropertyValue::String(_) => "String",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Array(_) => "Array",
        }
    }

    /// Convert to a plain JSON value
    pub fn to_json(&self) -> Value {
        match self {
            PropertyValue::Null => Value::Null,
            PropertyValue::String(s) => Value::String(s.clone()),
            PropertyValue::Boolean(b) => Value::Bool(*b),
            PropertyValue::Integer(i) => Value::from(*i),
            PropertyValue::Float(f) => Value::from(*f),
            PropertyValue::Array(arr) => Value::Array(arr.iter().map(|v| v.to_json()).collect()),
        }
    }

    /// Convert from a plain JSON value, rejecting composite (object) values
    ///
    /// This is the checked boundary for untrusted data: a JSON object at any
    /// nesting level fails with [`GraphError::InvalidPropertyType`].
    pub fn from_json(value: &Value) -> GraphResult<Self> {
        match value {
            Value::Null => Ok(PropertyValue::Null),
            Value::String(s) => Ok(PropertyValue::String(s.clone())),
            Value::Bool(b) => Ok(PropertyValue::Boolean(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(PropertyValue::Integer(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(PropertyValue::Float(f))
                } else {
                    Err(GraphError::InvalidPropertyType("number".to_string()))
                }
            }
            Value::Array(arr) => {
                let values = arr
                    .iter()
                    .map(PropertyValue::from_json)
                    .collect::<GraphResult<Vec<_>>>()?;
                Ok(PropertyValue::Array(values))
            }
            Value::Object(_) => Err(GraphError::InvalidPropertyType("map".to_string())),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Null => write!(f, "null"),
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::Array(arr) => {
                write!(f, "[")?;
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
        }
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(arr: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(arr)
    }
}

impl From<Vec<String>> for PropertyValue {
    fn from(arr: Vec<String>) -> Self {
        PropertyValue::Array(arr.into_iter().map(PropertyValue::String).collect())
    }
}

/// Property container for nodes and edges
///
/// Keys map to [`PropertyValue`]s in insertion order. Bulk reads hand back
/// independent copies so callers can never mutate internal state through a
/// returned view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Properties {
    values: IndexMap<String, PropertyValue>,
}

impl Properties {
    /// Create an empty property container
    pub fn new() -> Self {
        Properties {
            values: IndexMap::new(),
        }
    }

    /// Create a property container from an existing map
    pub fn from_map(values: IndexMap<String, PropertyValue>) -> Self {
        Properties { values }
    }

    /// Set a property value, returning the previous value if any
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) -> Option<PropertyValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.values.get(key)
    }

    /// Get a property value, falling back to a default when absent
    pub fn get_or<'a>(&'a self, key: &str, default: &'a PropertyValue) -> &'a PropertyValue {
        self.values.get(key).unwrap_or(default)
    }

    /// Remove a property; no-op if absent
    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.values.shift_remove(key)
    }

    /// Check if a key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove all properties
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no properties
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.values.iter()
    }

    /// Return an independent copy of the underlying map
    ///
    /// Mutating the returned map never affects this container.
    pub fn to_map(&self) -> IndexMap<String, PropertyValue> {
        self.values.clone()
    }

    /// Convert to a plain JSON map for serialization
    pub fn to_json_map(&self) -> IndexMap<String, Value> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }

    /// Build from a plain JSON map, rejecting composite values
    pub fn from_json_map(values: &IndexMap<String, Value>) -> GraphResult<Self> {
        let mut properties = Properties::new();
        for (key, value) in values {
            properties.set(key.clone(), PropertyValue::from_json(value)?);
        }
        Ok(properties)
    }
}

impl FromIterator<(String, PropertyValue)> for Properties {
    fn from_iter<T: IntoIterator<Item = (String, PropertyValue)>>(iter: T) -> Self {
        Properties {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, val)) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, val)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_property_value_types() {
        assert_eq!(PropertyValue::Null.type_name(), "Null");
        assert_eq!(
            PropertyValue::String("test".to_string()).type_name(),
            "String"
        );
        assert_eq!(PropertyValue::Boolean(true).type_name(), "Boolean");
        assert_eq!(PropertyValue::Integer(42).type_name(), "Integer");
        assert_eq!(PropertyValue::Float(3.14).type_name(), "Float");
        assert_eq!(PropertyValue::Array(vec![]).type_name(), "Array");
    }

    #[test]
    fn test_property_value_conversions() {
        let string_prop: PropertyValue = "hello".into();
        assert_eq!(string_prop.as_string(), Some("hello"));

        let int_prop: PropertyValue = 42i64.into();
        assert_eq!(int_prop.as_integer(), Some(42));

        let float_prop: PropertyValue = 3.14.into();
        assert_eq!(float_prop.as_float(), Some(3.14));

        let bool_prop: PropertyValue = true.into();
        assert_eq!(bool_prop.as_boolean(), Some(true));

        let arr_prop: PropertyValue = vec!["a".to_string(), "b".to_string()].into();
        assert_eq!(arr_prop.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_set_get_remove() {
        let mut props = Properties::new();
        props.set("name", "Alice");
        props.set("age", 30i64);
        props.set("active", true);

        assert_eq!(props.get("name").unwrap().as_string(), Some("Alice"));
        assert_eq!(props.get("age").unwrap().as_integer(), Some(30));
        assert_eq!(props.get("active").unwrap().as_boolean(), Some(true));
        assert_eq!(props.len(), 3);

        assert!(props.remove("age").is_some());
        assert!(!props.contains_key("age"));

        // Removing an absent key is a no-op
        assert!(props.remove("age").is_none());
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_get_or_default() {
        let mut props = Properties::new();
        props.set("name", "Alice");

        let default = PropertyValue::from("unknown");
        assert_eq!(props.get_or("name", &default).as_string(), Some("Alice"));
        assert_eq!(
            props.get_or("missing", &default).as_string(),
            Some("unknown")
        );
        assert_eq!(props.get("missing"), None);
    }

    #[test]
    fn test_to_map_is_a_defensive_copy() {
        let mut props = Properties::new();
        props.set("name", "Alice");

        let mut copy = props.to_map();
        copy.insert("name".to_string(), "Mallory".into());
        copy.insert("extra".to_string(), 1i64.into());

        assert_eq!(props.get("name").unwrap().as_string(), Some("Alice"));
        assert!(!props.contains_key("extra"));
    }

    #[test]
    fn test_clear() {
        let mut props = Properties::new();
        props.set("a", 1i64);
        props.set("b", 2i64);
        props.clear();

        assert!(props.is_empty());
        assert_eq!(props.len(), 0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut props = Properties::new();
        props.set("z", 1i64);
        props.set("a", 2i64);
        props.set("m", 3i64);

        let keys: Vec<&String> = props.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(
            PropertyValue::from_json(&json!(null)).unwrap(),
            PropertyValue::Null
        );
        assert_eq!(
            PropertyValue::from_json(&json!("x")).unwrap(),
            PropertyValue::String("x".to_string())
        );
        assert_eq!(
            PropertyValue::from_json(&json!(7)).unwrap(),
            PropertyValue::Integer(7)
        );
        assert_eq!(
            PropertyValue::from_json(&json!(1.5)).unwrap(),
            PropertyValue::Float(1.5)
        );
        assert_eq!(
            PropertyValue::from_json(&json!([1, "two", null])).unwrap(),
            PropertyValue::Array(vec![
                PropertyValue::Integer(1),
                PropertyValue::String("two".to_string()),
                PropertyValue::Null,
            ])
        );
    }

    #[test]
    fn test_from_json_rejects_objects() {
        let err = PropertyValue::from_json(&json!({"nested": true})).unwrap_err();
        assert_eq!(err, GraphError::InvalidPropertyType("map".to_string()));

        // Objects hidden inside arrays are rejected too
        let err = PropertyValue::from_json(&json!([1, {"nested": true}])).unwrap_err();
        assert_eq!(err, GraphError::InvalidPropertyType("map".to_string()));
    }

    #[test]
    fn test_json_round_trip() {
        let mut props = Properties::new();
        props.set("name", "Alice");
        props.set("age", 30i64);
        props.set("score", 99.5);
        props.set("tags", vec!["admin".to_string(), "user".to_string()]);
        props.set("nothing", PropertyValue::Null);

        let restored = Properties::from_json_map(&props.to_json_map()).unwrap();
        assert_eq!(restored, props);
    }
}
