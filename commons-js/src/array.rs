use crate::json::JsonOptions;
use crate::json::JsonRenderer;
use crate::NativeError;
use crate::NativeObject;
use ahash::HashSet;
use ahash::HashSetExt;
use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

/// A kind of value a [`NativeArray`] can hold.
pub trait ArrayElement: Clone + fmt::Debug + 'static {
  /// What two elements are compared by. Uses SameValueZero semantics: strings and numbers by value
  /// (with `NaN` equal to itself and `-0` equal to `+0`), documents by reference.
  type Identity: Eq + Hash;

  fn identity(&self) -> Self::Identity;

  fn render(&self, renderer: &mut JsonRenderer) -> Result<serde_json::Value, NativeError>;
}

impl ArrayElement for String {
  type Identity = String;

  fn identity(&self) -> String {
    self.clone()
  }

  fn render(&self, _renderer: &mut JsonRenderer) -> Result<serde_json::Value, NativeError> {
    Ok(serde_json::Value::String(self.clone()))
  }
}

impl ArrayElement for f64 {
  type Identity = u64;

  fn identity(&self) -> u64 {
    if self.is_nan() {
      f64::NAN.to_bits()
    } else if *self == 0.0 {
      0
    } else {
      self.to_bits()
    }
  }

  fn render(&self, _renderer: &mut JsonRenderer) -> Result<serde_json::Value, NativeError> {
    // Whole numbers print without a fraction and non-finite numbers become `null`, as
    // JSON.stringify does.
    if self.fract() == 0.0 && self.abs() < 9_007_199_254_740_992.0 {
      return Ok(serde_json::Value::from(*self as i64));
    }
    Ok(
      serde_json::Number::from_f64(*self)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null),
    )
  }
}

impl ArrayElement for i32 {
  type Identity = i32;

  fn identity(&self) -> i32 {
    *self
  }

  fn render(&self, _renderer: &mut JsonRenderer) -> Result<serde_json::Value, NativeError> {
    Ok(serde_json::Value::from(*self))
  }
}

impl ArrayElement for bool {
  type Identity = bool;

  fn identity(&self) -> bool {
    *self
  }

  fn render(&self, _renderer: &mut JsonRenderer) -> Result<serde_json::Value, NativeError> {
    Ok(serde_json::Value::Bool(*self))
  }
}

impl ArrayElement for NativeObject {
  type Identity = usize;

  fn identity(&self) -> usize {
    self.address()
  }

  fn render(&self, renderer: &mut JsonRenderer) -> Result<serde_json::Value, NativeError> {
    renderer.object(self)
  }
}

/// An ordered, homogeneous sequence with reference semantics.
///
/// Like [`NativeObject`], cloning yields another handle to the same storage.
pub struct NativeArray<T>(Rc<RefCell<Vec<T>>>);

pub type ArrayString = NativeArray<String>;
pub type ArrayDouble = NativeArray<f64>;
pub type ArrayInteger = NativeArray<i32>;
pub type ArrayBoolean = NativeArray<bool>;
pub type ArrayObject = NativeArray<NativeObject>;

impl<T> Clone for NativeArray<T> {
  fn clone(&self) -> Self {
    Self(Rc::clone(&self.0))
  }
}

impl<T> Default for NativeArray<T> {
  fn default() -> Self {
    Self(Rc::new(RefCell::new(Vec::new())))
  }
}

impl<T: ArrayElement> NativeArray<T> {
  pub fn new() -> Self {
    Self::default()
  }

  /// Wraps values produced outside this crate.
  pub fn from_vec(values: Vec<T>) -> Self {
    Self(Rc::new(RefCell::new(values)))
  }

  pub fn of(values: impl IntoIterator<Item = T>) -> Self {
    Self::from_vec(values.into_iter().collect())
  }

  pub fn ptr_eq(&self, other: &NativeArray<T>) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }

  pub fn length(&self) -> usize {
    self.0.borrow().len()
  }

  pub fn is_empty(&self) -> bool {
    self.length() == 0
  }

  /// The element at `index`, or `None` past the end. Reading never grows the array.
  pub fn get(&self, index: usize) -> Option<T> {
    self.0.borrow().get(index).cloned()
  }

  /// Replaces the element at `index`, returning the previous one.
  pub fn set(&self, index: usize, value: T) -> Result<T, NativeError> {
    let mut values = self.0.borrow_mut();
    let len = values.len();
    match values.get_mut(index) {
      Some(slot) => Ok(std::mem::replace(slot, value)),
      None => Err(NativeError::IndexOutOfBounds { index, len }),
    }
  }

  pub fn push(&self, value: T) {
    self.0.borrow_mut().push(value);
  }

  /// Appends every value in order. An empty iterator leaves the array untouched.
  pub fn push_all(&self, values: impl IntoIterator<Item = T>) {
    self.0.borrow_mut().extend(values);
  }

  /// Inserts at `index`, shifting later elements; `index == length()` appends.
  pub fn insert_at(&self, index: usize, value: T) -> Result<(), NativeError> {
    let mut values = self.0.borrow_mut();
    let len = values.len();
    if index > len {
      return Err(NativeError::IndexOutOfBounds { index, len });
    }
    values.insert(index, value);
    Ok(())
  }

  pub fn remove(&self, index: usize) -> Option<T> {
    let mut values = self.0.borrow_mut();
    if index < values.len() {
      Some(values.remove(index))
    } else {
      None
    }
  }

  pub fn index_of(&self, value: &T) -> Option<usize> {
    let id = value.identity();
    self.position(|v| v.identity() == id)
  }

  pub fn last_index_of(&self, value: &T) -> Option<usize> {
    let id = value.identity();
    self.rposition(|v| v.identity() == id)
  }

  pub(crate) fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    self.0.borrow().iter().position(predicate)
  }

  pub(crate) fn rposition(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
    self.0.borrow().iter().rposition(predicate)
  }

  pub fn contains(&self, value: &T) -> bool {
    self.index_of(value).is_some()
  }

  pub fn clear(&self) {
    self.0.borrow_mut().clear();
  }

  /// A new array holding the first occurrence of every distinct element, in order.
  pub fn unique(&self) -> NativeArray<T> {
    self.unique_by(T::identity)
  }

  /// Same as [`NativeArray::unique`], with elements compared by `identity`.
  pub(crate) fn unique_by<I: Eq + Hash>(&self, identity: impl Fn(&T) -> I) -> NativeArray<T> {
    let values = self.0.borrow();
    let mut seen = HashSet::with_capacity(values.len());
    let unique: Vec<T> = values
      .iter()
      .filter(|v| seen.insert(identity(*v)))
      .cloned()
      .collect();
    tracing::trace!(
      target: "commons_js::array",
      before = values.len(),
      after = unique.len(),
      "unique"
    );
    NativeArray::from_vec(unique)
  }

  /// Copies the current elements out.
  pub fn to_vec(&self) -> Vec<T> {
    self.0.borrow().clone()
  }

  pub fn to_json(&self) -> Result<String, NativeError> {
    self.to_json_with(JsonOptions::default())
  }

  pub fn to_json_with(&self, options: JsonOptions) -> Result<String, NativeError> {
    let mut renderer = JsonRenderer::new(options);
    let value = renderer.array(self)?;
    renderer.finish(&value)
  }
}

impl<T> PartialEq for NativeArray<T> {
  fn eq(&self, other: &Self) -> bool {
    Rc::ptr_eq(&self.0, &other.0)
  }
}

impl<T: fmt::Debug> fmt::Debug for NativeArray<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.0.borrow().iter()).finish()
  }
}

impl<T: ArrayElement> FromIterator<T> for NativeArray<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::of(iter)
  }
}

/// An array of any supported element kind, as stored in a document property.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyArray {
  String(ArrayString),
  Double(ArrayDouble),
  Integer(ArrayInteger),
  Boolean(ArrayBoolean),
  Object(ArrayObject),
}

impl AnyArray {
  pub fn length(&self) -> usize {
    match self {
      AnyArray::String(a) => a.length(),
      AnyArray::Double(a) => a.length(),
      AnyArray::Integer(a) => a.length(),
      AnyArray::Boolean(a) => a.length(),
      AnyArray::Object(a) => a.length(),
    }
  }

  pub fn as_strings(&self) -> Option<&ArrayString> {
    match self {
      AnyArray::String(a) => Some(a),
      _ => None,
    }
  }

  pub fn as_doubles(&self) -> Option<&ArrayDouble> {
    match self {
      AnyArray::Double(a) => Some(a),
      _ => None,
    }
  }

  pub fn as_integers(&self) -> Option<&ArrayInteger> {
    match self {
      AnyArray::Integer(a) => Some(a),
      _ => None,
    }
  }

  pub fn as_booleans(&self) -> Option<&ArrayBoolean> {
    match self {
      AnyArray::Boolean(a) => Some(a),
      _ => None,
    }
  }

  pub fn as_objects(&self) -> Option<&ArrayObject> {
    match self {
      AnyArray::Object(a) => Some(a),
      _ => None,
    }
  }

  /// Picks the element kind from the JSON values. Whole numbers that fit `i32` make an integer
  /// array, other numbers a double array; an empty JSON array becomes an empty object array.
  pub(crate) fn from_json(items: &[serde_json::Value]) -> Result<AnyArray, NativeError> {
    use serde_json::Value as J;

    let Some(first) = items.first() else {
      return Ok(AnyArray::Object(NativeArray::new()));
    };
    Ok(match first {
      J::String(_) => AnyArray::String(
        items
          .iter()
          .map(|v| v.as_str().map(str::to_string).ok_or(NativeError::MixedArray))
          .collect::<Result<Vec<_>, _>>()
          .map(NativeArray::from_vec)?,
      ),
      J::Bool(_) => AnyArray::Boolean(
        items
          .iter()
          .map(|v| v.as_bool().ok_or(NativeError::MixedArray))
          .collect::<Result<Vec<_>, _>>()
          .map(NativeArray::from_vec)?,
      ),
      J::Number(_) => {
        let integers: Option<Vec<i32>> = items
          .iter()
          .map(|v| v.as_i64().and_then(|n| i32::try_from(n).ok()))
          .collect();
        match integers {
          Some(values) => AnyArray::Integer(NativeArray::from_vec(values)),
          None => AnyArray::Double(
            items
              .iter()
              .map(|v| v.as_f64().ok_or(NativeError::MixedArray))
              .collect::<Result<Vec<_>, _>>()
              .map(NativeArray::from_vec)?,
          ),
        }
      }
      J::Object(_) => AnyArray::Object(
        items
          .iter()
          .map(|v| match v {
            J::Object(map) => NativeObject::from_json(map),
            _ => Err(NativeError::MixedArray),
          })
          .collect::<Result<Vec<_>, _>>()
          .map(NativeArray::from_vec)?,
      ),
      J::Null | J::Array(_) => return Err(NativeError::MixedArray),
    })
  }
}

impl From<ArrayString> for AnyArray {
  fn from(value: ArrayString) -> Self {
    AnyArray::String(value)
  }
}

impl From<ArrayDouble> for AnyArray {
  fn from(value: ArrayDouble) -> Self {
    AnyArray::Double(value)
  }
}

impl From<ArrayInteger> for AnyArray {
  fn from(value: ArrayInteger) -> Self {
    AnyArray::Integer(value)
  }
}

impl From<ArrayBoolean> for AnyArray {
  fn from(value: ArrayBoolean) -> Self {
    AnyArray::Boolean(value)
  }
}

impl From<ArrayObject> for AnyArray {
  fn from(value: ArrayObject) -> Self {
    AnyArray::Object(value)
  }
}

/// An element kind a property may hold either as a single value or as an array of values.
pub trait ScalarElement: ArrayElement + Into<crate::Value> {
  /// The value as a single element of this kind, if it is one.
  fn from_value(value: &crate::Value) -> Option<Self>;

  /// The array, if it holds elements of this kind.
  fn from_any(array: &AnyArray) -> Option<NativeArray<Self>>;

  fn into_any(array: NativeArray<Self>) -> AnyArray;
}

macro_rules! scalar_element {
  ($ty:ty, $variant:ident, |$v:ident| $extract:expr) => {
    impl ScalarElement for $ty {
      fn from_value($v: &crate::Value) -> Option<Self> {
        $extract
      }

      fn from_any(array: &AnyArray) -> Option<NativeArray<Self>> {
        match array {
          AnyArray::$variant(a) => Some(a.clone()),
          _ => None,
        }
      }

      fn into_any(array: NativeArray<Self>) -> AnyArray {
        AnyArray::$variant(array)
      }
    }
  };
}

scalar_element!(String, String, |v| v.as_str().map(str::to_string));
scalar_element!(f64, Double, |v| v.as_number());
scalar_element!(i32, Integer, |v| v
  .as_number()
  .filter(|n| !n.is_nan())
  .map(|n| n as i32));
scalar_element!(bool, Boolean, |v| v.as_bool());
scalar_element!(NativeObject, Object, |v| v.as_object().cloned());

macro_rules! array_into_value {
  ($($ty:ty),+) => {
    $(
      impl From<$ty> for crate::Value {
        fn from(value: $ty) -> Self {
          crate::Value::Array(value.into())
        }
      }
    )+
  };
}

array_into_value!(ArrayString, ArrayDouble, ArrayInteger, ArrayBoolean, ArrayObject);
