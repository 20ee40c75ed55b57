use crate::Value;

/// A property's value plus its `writable`/`enumerable`/`configurable` attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDescriptor {
  pub value: Value,
  pub writable: bool,
  pub enumerable: bool,
  pub configurable: bool,
}

impl PropertyDescriptor {
  /// A plain data property: every attribute set, as created by an assignment.
  pub fn data(value: impl Into<Value>) -> Self {
    Self {
      value: value.into(),
      writable: true,
      enumerable: true,
      configurable: true,
    }
  }

  /// A property that can be rewritten but is neither listed nor removable.
  pub fn hidden(value: impl Into<Value>) -> Self {
    Self {
      value: value.into(),
      writable: true,
      enumerable: false,
      configurable: false,
    }
  }

  pub fn writable(mut self, writable: bool) -> Self {
    self.writable = writable;
    self
  }

  pub fn enumerable(mut self, enumerable: bool) -> Self {
    self.enumerable = enumerable;
    self
  }

  pub fn configurable(mut self, configurable: bool) -> Self {
    self.configurable = configurable;
    self
  }
}
