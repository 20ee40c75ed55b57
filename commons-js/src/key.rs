use crate::NativeError;
use std::fmt;

/// Identifies a property of a document.
///
/// Equality and hashing of keys are defined solely by [`Key::value`], so two different key types
/// naming the same string address the same property. Compare mixed key types with
/// [`keys_equal`].
pub trait Key {
  /// The property name. Never empty for a valid key.
  fn value(&self) -> &str;
}

impl<K: Key + ?Sized> Key for &K {
  fn value(&self) -> &str {
    (**self).value()
  }
}

/// A closed set of keys, typically declared with [`key_enum!`](crate::key_enum).
///
/// Lookups over the variants are linear scans in declaration order; the sets are small and a
/// stable order matters more than constant-time access.
pub trait KeyEnum: Key + Copy + 'static {
  fn variants() -> &'static [Self];
}

/// A key built ad hoc from any non-empty string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StandardKey(String);

impl StandardKey {
  pub fn new(value: impl Into<String>) -> Result<Self, NativeError> {
    let value = value.into();
    if value.is_empty() {
      return Err(NativeError::invalid_key("key value is empty"));
    }
    Ok(Self(value))
  }

  /// Copies the name of any other key.
  pub fn from_key(key: &dyn Key) -> Result<Self, NativeError> {
    Self::new(key.value())
  }

  pub fn into_string(self) -> String {
    self.0
  }

  // Raw names read back from a document array. They were written from valid keys.
  pub(crate) fn from_raw(value: String) -> Self {
    Self(value)
  }
}

impl Key for StandardKey {
  fn value(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for StandardKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

impl TryFrom<&str> for StandardKey {
  type Error = NativeError;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl TryFrom<String> for StandardKey {
  type Error = NativeError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

pub fn keys_equal(a: &dyn Key, b: &dyn Key) -> bool {
  a.value() == b.value()
}

pub fn is_valid(key: &dyn Key) -> bool {
  !key.value().is_empty()
}

pub fn check_if_valid(key: &dyn Key) -> Result<(), NativeError> {
  if is_valid(key) {
    Ok(())
  } else {
    Err(NativeError::invalid_key("key value is empty"))
  }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
  if a.is_ascii() && b.is_ascii() {
    return a.eq_ignore_ascii_case(b);
  }
  a.chars()
    .flat_map(char::to_lowercase)
    .eq(b.chars().flat_map(char::to_lowercase))
}

/// Finds the variant of `K` whose value matches `value`, ignoring case.
pub fn get_key_by_value<K: KeyEnum>(value: &str) -> Option<K> {
  K::variants()
    .iter()
    .copied()
    .find(|k| eq_ignore_case(k.value(), value))
}

pub fn get_key_by_value_or<K: KeyEnum>(value: &str, default: K) -> K {
  get_key_by_value(value).unwrap_or(default)
}

pub fn has_key_by_value<K: KeyEnum>(value: &str) -> bool {
  get_key_by_value::<K>(value).is_some()
}

/// Declares a fieldless enum implementing [`Key`] and [`KeyEnum`].
///
/// ```
/// commons_js::key_enum! {
///   pub enum Position {
///     Top => "top",
///     Bottom => "bottom",
///   }
/// }
///
/// use commons_js::Key;
/// assert_eq!(Position::Top.value(), "top");
/// assert_eq!(commons_js::get_key_by_value::<Position>("BOTTOM"), Some(Position::Bottom));
/// ```
#[macro_export]
macro_rules! key_enum {
  (
    $(#[$meta:meta])*
    $vis:vis enum $name:ident {
      $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    $vis enum $name {
      $($(#[$vmeta])* $variant),+
    }

    impl $crate::Key for $name {
      fn value(&self) -> &str {
        match self {
          $(Self::$variant => $value),+
        }
      }
    }

    impl $crate::KeyEnum for $name {
      fn variants() -> &'static [Self] {
        &[$(Self::$variant),+]
      }
    }
  };
}
