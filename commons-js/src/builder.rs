use crate::Key;
use crate::NativeError;
use crate::NativeObject;
use crate::PropertyDescriptor;
use crate::PropertyKey;
use crate::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuilderState {
  #[default]
  Open,
  Consumed,
}

/// Tracks whether a one-shot builder has produced its result.
///
/// The only transition is `Open` to `Consumed`; it is never reversed.
#[derive(Debug, Clone, Default)]
pub struct BuilderValidity {
  state: BuilderState,
}

impl BuilderValidity {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn state(&self) -> BuilderState {
    self.state
  }

  pub fn is_built(&self) -> bool {
    self.state == BuilderState::Consumed
  }

  /// Marks the builder built. `false` after `true` is ignored.
  pub fn set_built(&mut self, built: bool) {
    if built {
      self.state = BuilderState::Consumed;
    }
  }

  pub fn check_validity(&self) -> Result<(), NativeError> {
    if self.is_built() {
      tracing::debug!(target: "commons_js::builder", "builder used after build");
      return Err(NativeError::BuilderConsumed);
    }
    Ok(())
  }
}

/// Assembles a [`NativeObject`] once.
///
/// Every call after [`NativeObjectBuilder::build`] fails with [`NativeError::BuilderConsumed`].
#[derive(Debug, Default)]
pub struct NativeObjectBuilder {
  object: NativeObject,
  validity: BuilderValidity,
}

impl NativeObjectBuilder {
  pub fn create() -> Self {
    Self::default()
  }

  pub fn is_built(&self) -> bool {
    self.validity.is_built()
  }

  /// Sets an ordinary property. The key must be a valid property key.
  pub fn property(
    &mut self,
    key: &dyn Key,
    value: impl Into<Value>,
  ) -> Result<&mut Self, NativeError> {
    self.validity.check_validity()?;
    let key = PropertyKey::from_key(key)?;
    self.object.set(key.value(), value);
    Ok(self)
  }

  /// Defines a property that is writable but neither enumerable nor configurable.
  pub fn hidden(
    &mut self,
    key: &dyn Key,
    value: impl Into<Value>,
  ) -> Result<&mut Self, NativeError> {
    self.validity.check_validity()?;
    let key = PropertyKey::from_key(key)?;
    self
      .object
      .define_property(key.value(), PropertyDescriptor::hidden(value));
    Ok(self)
  }

  pub fn build(&mut self) -> Result<NativeObject, NativeError> {
    self.validity.check_validity()?;
    self.validity.set_built(true);
    Ok(self.object.clone())
  }
}
