use crate::Key;
use crate::NativeObject;
use crate::Value;
use crate::UNDEFINED_INTEGER;
use crate::UNDEFINED_STRING;
use std::cell::Cell;

/// Reserved property holding the id of a document.
pub const CHARBA_ID: &str = "_charbaId";

// 2^53: whole numbers below this are exact in an f64.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The id stored under [`CHARBA_ID`] as a string, or [`UNDEFINED_STRING`] if there is none.
///
/// Numeric ids are rendered without a fractional part when they are whole.
pub fn get_string_id(object: &NativeObject) -> String {
  match object.get_value(CHARBA_ID) {
    Value::String(s) => s,
    Value::Number(n) if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER => format!("{}", n as i64),
    Value::Number(n) => n.to_string(),
    _ => UNDEFINED_STRING.to_string(),
  }
}

pub fn set_string_id(object: &NativeObject, id: &str) -> bool {
  object.set(CHARBA_ID, id)
}

/// The integer id stored under `key`, or [`UNDEFINED_INTEGER`] if absent or not a number.
pub fn get_integer_id(object: &NativeObject, key: &dyn Key) -> i32 {
  object.get_int(key.value(), UNDEFINED_INTEGER)
}

pub fn set_integer_id(object: &NativeObject, key: &dyn Key, id: i32) -> bool {
  object.set(key.value(), id)
}

/// Hands out increasing integer ids, starting at zero.
#[derive(Debug, Default)]
pub struct IdGenerator {
  next: Cell<i32>,
}

impl IdGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn starting_at(first: i32) -> Self {
    Self {
      next: Cell::new(first),
    }
  }

  pub fn next_id(&self) -> i32 {
    let id = self.next.get();
    self.next.set(id.wrapping_add(1));
    id
  }

  /// Stores a fresh id under `key` unless one is already there, and returns the stored id.
  pub fn assign(&self, object: &NativeObject, key: &dyn Key) -> i32 {
    let current = get_integer_id(object, key);
    if current != UNDEFINED_INTEGER {
      return current;
    }
    let id = self.next_id();
    set_integer_id(object, key, id);
    id
  }
}
