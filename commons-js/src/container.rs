use crate::hashing;
use crate::hashing::HASH_CODE_PROPERTY;
use crate::Envelope;
use crate::Key;
use crate::NativeArray;
use crate::NativeError;
use crate::NativeObject;
use crate::ObjectType;
use crate::PropertyDescriptor;
use crate::PropertyKey;
use crate::ScalarElement;
use crate::StandardKey;
use crate::Value;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

/// A typed wrapper around a document.
///
/// Implementors only expose their document; the provided methods give key-typed access to it.
/// Writes go through [`PropertyKey`] validation, so reserved internal names cannot be written
/// through a container.
pub trait NativeContainer {
  fn native_object(&self) -> &NativeObject;

  fn has(&self, key: &dyn Key) -> bool {
    self.native_object().has(key.value())
  }

  /// Deletes `key`. `false` only if the property exists and cannot be deleted.
  fn remove(&self, key: &dyn Key) -> bool {
    self.native_object().delete(key.value())
  }

  /// Stores `value` under `key`. `Ok(false)` if the property exists and is read-only.
  fn set_value(&self, key: &dyn Key, value: impl Into<Value>) -> Result<bool, NativeError>
  where
    Self: Sized,
  {
    let key = PropertyKey::from_key(key)?;
    Ok(self.native_object().set(key.value(), value))
  }

  fn get_value(&self, key: &dyn Key) -> Value {
    self.native_object().get_value(key.value())
  }

  fn type_of(&self, key: &dyn Key) -> ObjectType {
    self.native_object().type_of(key.value())
  }

  fn get_string_value(&self, key: &dyn Key, default: &str) -> String {
    self
      .native_object()
      .get_string(key.value())
      .unwrap_or_else(|| default.to_string())
  }

  fn get_int_value(&self, key: &dyn Key, default: i32) -> i32 {
    self.native_object().get_int(key.value(), default)
  }

  fn get_double_value(&self, key: &dyn Key, default: f64) -> f64 {
    self.native_object().get_double(key.value(), default)
  }

  fn get_bool_value(&self, key: &dyn Key, default: bool) -> bool {
    self.native_object().get_bool(key.value(), default)
  }

  fn get_object_value(&self, key: &dyn Key) -> Option<NativeObject> {
    self.native_object().get_object(key.value())
  }

  /// Whether the property under `key` has one of `types`. `false` for an empty `types`.
  fn is_type(&self, key: &dyn Key, types: &[ObjectType]) -> bool {
    let actual = self.type_of(key);
    types.contains(&actual)
  }

  /// Defines `key` as a new, empty nested document.
  fn set_empty_value(&self, key: &dyn Key) -> Result<bool, NativeError> {
    let key = PropertyKey::from_key(key)?;
    Ok(
      self
        .native_object()
        .define_property(key.value(), PropertyDescriptor::data(NativeObject::new())),
    )
  }

  /// Stores `array` under `key`; `None` removes the property.
  fn set_array_value<T: ScalarElement>(
    &self,
    key: &dyn Key,
    array: Option<NativeArray<T>>,
  ) -> Result<bool, NativeError>
  where
    Self: Sized,
  {
    let key = PropertyKey::from_key(key)?;
    Ok(match array {
      Some(array) => self.native_object().set(key.value(), T::into_any(array)),
      None => self.native_object().delete(key.value()),
    })
  }

  /// The array under `key`, or `None` if absent or holding another element kind.
  fn get_array_value<T: ScalarElement>(&self, key: &dyn Key) -> Option<NativeArray<T>>
  where
    Self: Sized,
  {
    self
      .native_object()
      .get_array(key.value())
      .and_then(|array| T::from_any(&array))
  }

  /// Stores a single value when given exactly one, an array otherwise; `None` removes the
  /// property.
  fn set_value_or_array<T: ScalarElement>(
    &self,
    key: &dyn Key,
    values: Option<&[T]>,
  ) -> Result<bool, NativeError>
  where
    Self: Sized,
  {
    match values {
      Some([single]) => self.set_value(key, single.clone()),
      Some(values) => self.set_array_value(key, Some(NativeArray::from_vec(values.to_vec()))),
      None => self.set_array_value::<T>(key, None),
    }
  }

  /// The property under `key` as an array: a stored single value becomes a one-element array,
  /// and an absent property or one of another kind becomes `[default]`.
  fn get_value_or_array<T: ScalarElement>(&self, key: &dyn Key, default: T) -> NativeArray<T>
  where
    Self: Sized,
  {
    let value = self.get_value(key);
    if let Some(single) = T::from_value(&value) {
      return NativeArray::of([single]);
    }
    value
      .as_array()
      .and_then(T::from_any)
      .unwrap_or_else(|| NativeArray::of([default]))
  }

  /// Enumerable keys in insertion order. The hash code property is never included.
  fn keys(&self) -> Vec<StandardKey> {
    self
      .native_object()
      .keys()
      .into_iter()
      .filter(|k| k != HASH_CODE_PROPERTY)
      .filter_map(|k| StandardKey::new(k).ok())
      .collect()
  }

  fn is_empty(&self) -> bool {
    self.keys().is_empty()
  }

  /// Hands the underlying document to another component.
  fn envelope(&self) -> Envelope<NativeObject> {
    Envelope::with_content(self.native_object().clone())
  }
}

/// The plain [`NativeContainer`]: a document and nothing else.
#[derive(Clone, Default)]
pub struct NativeObjectContainer {
  object: NativeObject,
}

impl NativeObjectContainer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn wrap(object: NativeObject) -> Self {
    Self { object }
  }

  /// Takes the document out of an envelope; an empty envelope yields a new document.
  pub fn from_envelope(envelope: Envelope<NativeObject>) -> Self {
    Self::wrap(envelope.into_content().unwrap_or_default())
  }

  pub fn to_json(&self) -> Result<String, NativeError> {
    self.object.to_json()
  }
}

impl NativeContainer for NativeObjectContainer {
  fn native_object(&self) -> &NativeObject {
    &self.object
  }
}

impl PartialEq for NativeObjectContainer {
  fn eq(&self, other: &Self) -> bool {
    self.object.ptr_eq(&other.object)
  }
}

impl Eq for NativeObjectContainer {}

impl Hash for NativeObjectContainer {
  fn hash<H: Hasher>(&self, state: &mut H) {
    hashing::identity_hash(&self.object).hash(state);
  }
}

impl fmt::Debug for NativeObjectContainer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("NativeObjectContainer")
      .field(&self.object)
      .finish()
  }
}

impl fmt::Display for NativeObjectContainer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.to_json() {
      Ok(json) => f.write_str(&json),
      Err(e) => write!(f, "<{e}>"),
    }
  }
}
