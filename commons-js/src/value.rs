use crate::AnyArray;
use crate::NativeError;
use crate::NativeObject;
use serde::Deserialize;
use serde::Serialize;

/// Returned by integer getters when the property is absent.
pub const UNDEFINED_INTEGER: i32 = i32::MIN;
/// Returned by double getters when the property is absent.
pub const UNDEFINED_DOUBLE: f64 = f64::NAN;
/// Returned by string id getters when the property is absent.
pub const UNDEFINED_STRING: &str = "undefined";

/// A value stored in a document property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Undefined,
  Null,
  Bool(bool),
  Number(f64),
  String(String),
  Array(AnyArray),
  Object(NativeObject),
}

/// `typeof`-like classification of a [`Value`]. Arrays are reported separately from objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
  Undefined,
  Null,
  Boolean,
  Number,
  String,
  Array,
  Object,
}

impl Value {
  pub fn object_type(&self) -> ObjectType {
    match self {
      Value::Undefined => ObjectType::Undefined,
      Value::Null => ObjectType::Null,
      Value::Bool(_) => ObjectType::Boolean,
      Value::Number(_) => ObjectType::Number,
      Value::String(_) => ObjectType::String,
      Value::Array(_) => ObjectType::Array,
      Value::Object(_) => ObjectType::Object,
    }
  }

  pub fn is_undefined(&self) -> bool {
    matches!(self, Value::Undefined)
  }

  pub fn as_bool(&self) -> Option<bool> {
    match self {
      Value::Bool(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_number(&self) -> Option<f64> {
    match self {
      Value::Number(n) => Some(*n),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::String(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_object(&self) -> Option<&NativeObject> {
    match self {
      Value::Object(o) => Some(o),
      _ => None,
    }
  }

  pub fn as_array(&self) -> Option<&AnyArray> {
    match self {
      Value::Array(a) => Some(a),
      _ => None,
    }
  }

  /// Builds a document tree from already-parsed JSON.
  ///
  /// Arrays must be homogeneous: all strings, all numbers, all booleans or all objects.
  pub fn from_json(json: &serde_json::Value) -> Result<Value, NativeError> {
    Ok(match json {
      serde_json::Value::Null => Value::Null,
      serde_json::Value::Bool(b) => Value::Bool(*b),
      serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
      serde_json::Value::String(s) => Value::String(s.clone()),
      serde_json::Value::Array(items) => Value::Array(AnyArray::from_json(items)?),
      serde_json::Value::Object(map) => Value::Object(NativeObject::from_json(map)?),
    })
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Self {
    Value::Bool(value)
  }
}

impl From<f64> for Value {
  fn from(value: f64) -> Self {
    Value::Number(value)
  }
}

impl From<i32> for Value {
  fn from(value: i32) -> Self {
    Value::Number(value as f64)
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Value::String(value.to_string())
  }
}

impl From<String> for Value {
  fn from(value: String) -> Self {
    Value::String(value)
  }
}

impl From<AnyArray> for Value {
  fn from(value: AnyArray) -> Self {
    Value::Array(value)
  }
}

impl From<NativeObject> for Value {
  fn from(value: NativeObject) -> Self {
    Value::Object(value)
  }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(value: Option<T>) -> Self {
    match value {
      Some(v) => v.into(),
      None => Value::Null,
    }
  }
}
