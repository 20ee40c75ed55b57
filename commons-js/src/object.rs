use crate::hashing;
use crate::AnyArray;
use crate::NativeError;
use crate::ObjectType;
use crate::PropertyDescriptor;
use crate::Value;
use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::rc::Rc;

#[derive(Debug)]
struct Property {
  key: String,
  descriptor: PropertyDescriptor,
}

#[derive(Debug, Default)]
struct ObjectData {
  // Insertion order is the enumeration order.
  properties: Vec<Property>,
}

impl ObjectData {
  fn find(&self, key: &str) -> Option<usize> {
    self.properties.iter().position(|p| p.key == key)
  }
}

/// A string-keyed document with reference semantics.
///
/// Cloning a `NativeObject` produces another handle to the same storage; a mutation through any
/// handle is visible through all of them. Two handles are equal only when they refer to the same
/// document; there is no structural equality.
#[derive(Clone, Default)]
pub struct NativeObject(Rc<RefCell<ObjectData>>);

impl NativeObject {
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn from_json(
    map: &serde_json::Map<String, serde_json::Value>,
  ) -> Result<Self, NativeError> {
    let object = Self::new();
    for (key, value) in map {
      object.set(key, Value::from_json(value)?);
    }
    Ok(object)
  }

  /// Whether both handles refer to the same document.
  pub fn ptr_eq(&self, other: &NativeObject) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }

  pub(crate) fn address(&self) -> usize {
    Rc::as_ptr(&self.0) as *const () as usize
  }

  /// Whether `key` is an own property, enumerable or not. A property holding
  /// [`Value::Undefined`] still exists.
  pub fn has(&self, key: &str) -> bool {
    self.0.borrow().find(key).is_some()
  }

  /// The descriptor of own property `key`, or `None` if there is no such property.
  pub fn get(&self, key: &str) -> Option<PropertyDescriptor> {
    let data = self.0.borrow();
    data.find(key).map(|i| data.properties[i].descriptor.clone())
  }

  /// The value of `key`, or [`Value::Undefined`] if absent.
  pub fn get_value(&self, key: &str) -> Value {
    let data = self.0.borrow();
    match data.find(key) {
      Some(i) => data.properties[i].descriptor.value.clone(),
      None => Value::Undefined,
    }
  }

  pub fn type_of(&self, key: &str) -> ObjectType {
    let data = self.0.borrow();
    match data.find(key) {
      Some(i) => data.properties[i].descriptor.value.object_type(),
      None => ObjectType::Undefined,
    }
  }

  /// Assigns `value` to `key`.
  ///
  /// A new property is created with every attribute set. An existing property keeps its
  /// attributes; if it is not writable the assignment is ignored and `false` is returned. The
  /// identity hash property is owned by [`hashing`] and cannot be assigned.
  pub fn set(&self, key: &str, value: impl Into<Value>) -> bool {
    if key == hashing::HASH_CODE_PROPERTY {
      tracing::debug!(target: "commons_js::object", key, "assignment to hash code property refused");
      return false;
    }
    let value = value.into();
    let mut data = self.0.borrow_mut();
    match data.find(key) {
      Some(i) => {
        let descriptor = &mut data.properties[i].descriptor;
        if !descriptor.writable {
          return false;
        }
        descriptor.value = value;
      }
      None => data.properties.push(Property {
        key: key.to_string(),
        descriptor: PropertyDescriptor::data(value),
      }),
    }
    true
  }

  /// Removes `key`. Returns `false` only when the property exists and is not configurable.
  pub fn delete(&self, key: &str) -> bool {
    let mut data = self.0.borrow_mut();
    let Some(i) = data.find(key) else {
      return true;
    };
    if !data.properties[i].descriptor.configurable {
      tracing::debug!(target: "commons_js::object", key, "delete of non-configurable property refused");
      return false;
    }
    data.properties.remove(i);
    true
  }

  /// Enumerable own property names in insertion order.
  pub fn keys(&self) -> Vec<String> {
    self
      .0
      .borrow()
      .properties
      .iter()
      .filter(|p| p.descriptor.enumerable)
      .map(|p| p.key.clone())
      .collect()
  }

  /// All own property names in insertion order, including non-enumerable ones.
  pub fn own_keys(&self) -> Vec<String> {
    self.0.borrow().properties.iter().map(|p| p.key.clone()).collect()
  }

  /// Defines or redefines `key` with the value and attributes of `descriptor` in one step.
  ///
  /// An existing non-configurable property is already settled: nothing changes and `false` is
  /// returned.
  pub fn define_property(&self, key: &str, descriptor: PropertyDescriptor) -> bool {
    let mut data = self.0.borrow_mut();
    match data.find(key) {
      Some(i) => {
        let current = &mut data.properties[i].descriptor;
        if !current.configurable {
          tracing::trace!(target: "commons_js::object", key, "property already settled");
          return false;
        }
        *current = descriptor;
      }
      None => data.properties.push(Property {
        key: key.to_string(),
        descriptor,
      }),
    }
    true
  }

  pub fn get_own_property_descriptor(&self, key: &str) -> Option<PropertyDescriptor> {
    self.get(key)
  }

  /// Rewrites the value of an existing property through its writable attribute, bypassing
  /// `configurable`. Used to refresh hidden properties.
  pub(crate) fn overwrite_value(&self, key: &str, value: Value) -> bool {
    let mut data = self.0.borrow_mut();
    match data.find(key) {
      Some(i) if data.properties[i].descriptor.writable => {
        data.properties[i].descriptor.value = value;
        true
      }
      _ => false,
    }
  }

  pub fn get_bool(&self, key: &str, default: bool) -> bool {
    self.get_value(key).as_bool().unwrap_or(default)
  }

  pub fn get_double(&self, key: &str, default: f64) -> f64 {
    self.get_value(key).as_number().unwrap_or(default)
  }

  /// Reads a number property truncated to `i32`.
  pub fn get_int(&self, key: &str, default: i32) -> i32 {
    match self.get_value(key) {
      Value::Number(n) if !n.is_nan() => n as i32,
      _ => default,
    }
  }

  pub fn get_string(&self, key: &str) -> Option<String> {
    match self.get_value(key) {
      Value::String(s) => Some(s),
      _ => None,
    }
  }

  pub fn get_object(&self, key: &str) -> Option<NativeObject> {
    match self.get_value(key) {
      Value::Object(o) => Some(o),
      _ => None,
    }
  }

  pub fn get_array(&self, key: &str) -> Option<AnyArray> {
    match self.get_value(key) {
      Value::Array(a) => Some(a),
      _ => None,
    }
  }
}

impl PartialEq for NativeObject {
  fn eq(&self, other: &Self) -> bool {
    self.ptr_eq(other)
  }
}

impl Eq for NativeObject {}

impl Hash for NativeObject {
  fn hash<H: Hasher>(&self, state: &mut H) {
    hashing::identity_hash(self).hash(state);
  }
}

impl fmt::Debug for NativeObject {
  // Documents may contain themselves, so only own keys are printed.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("NativeObject")
      .field("keys", &self.own_keys())
      .finish()
  }
}
