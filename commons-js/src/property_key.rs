use crate::hashing::HASH_CODE_PROPERTY;
use crate::Key;
use crate::NativeError;
use crate::StandardKey;
use crate::CHARBA_ID;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// Rules applied by [`PropertyKeyChecker`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyKeyOptions {
  /// Maximum length in chars.
  pub max_length: usize,
  /// Whether whitespace may appear inside a name.
  pub allow_whitespace: bool,
  /// Names owned by this crate that callers may not address directly.
  pub reserved: Vec<String>,
}

impl Default for PropertyKeyOptions {
  fn default() -> Self {
    Self {
      max_length: 1024,
      allow_whitespace: false,
      reserved: vec![CHARBA_ID.to_string(), HASH_CODE_PROPERTY.to_string()],
    }
  }
}

/// Validates strings for use as document property names.
#[derive(Clone, Debug, Default)]
pub struct PropertyKeyChecker {
  options: PropertyKeyOptions,
}

impl PropertyKeyChecker {
  pub fn new(options: PropertyKeyOptions) -> Self {
    Self { options }
  }

  pub fn options(&self) -> &PropertyKeyOptions {
    &self.options
  }

  pub fn check(&self, value: &str) -> Result<(), NativeError> {
    if value.is_empty() {
      return Err(NativeError::invalid_key("property key is empty"));
    }
    let len = value.chars().count();
    if len > self.options.max_length {
      return Err(NativeError::invalid_key(format!(
        "property key is {len} chars long, max is {max}",
        max = self.options.max_length
      )));
    }
    if let Some(c) = value.chars().find(|c| c.is_control()) {
      return Err(NativeError::invalid_key(format!(
        "property key {value:?} contains control character {c:?}"
      )));
    }
    if !self.options.allow_whitespace && value.chars().any(char::is_whitespace) {
      return Err(NativeError::invalid_key(format!(
        "property key {value:?} contains whitespace"
      )));
    }
    if self.options.reserved.iter().any(|r| r == value) {
      return Err(NativeError::invalid_key(format!(
        "property key {value:?} is reserved"
      )));
    }
    Ok(())
  }

  pub fn is_valid(&self, value: &str) -> bool {
    self.check(value).is_ok()
  }
}

/// A [`StandardKey`] that has passed property-key validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyKey(StandardKey);

impl PropertyKey {
  /// Validates with the default rules.
  pub fn new(value: impl Into<String>) -> Result<Self, NativeError> {
    Self::with_checker(value, &PropertyKeyChecker::default())
  }

  pub fn with_checker(
    value: impl Into<String>,
    checker: &PropertyKeyChecker,
  ) -> Result<Self, NativeError> {
    let value = value.into();
    checker.check(&value)?;
    Ok(Self(StandardKey::new(value)?))
  }

  /// Validates the name of an existing key.
  pub fn from_key(key: &dyn Key) -> Result<Self, NativeError> {
    Self::new(key.value())
  }

  pub fn is_valid(value: &str) -> bool {
    PropertyKeyChecker::default().is_valid(value)
  }
}

impl Key for PropertyKey {
  fn value(&self) -> &str {
    self.0.value()
  }
}

impl fmt::Display for PropertyKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.0, f)
  }
}

impl From<PropertyKey> for StandardKey {
  fn from(key: PropertyKey) -> Self {
    key.0
  }
}
