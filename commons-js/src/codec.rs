//! Mapping between the raw elements stored in a [`NativeArray`](crate::NativeArray) and the typed
//! items a list or set hands out.

use crate::get_key_by_value_or;
use crate::ArrayElement;
use crate::Key;
use crate::KeyEnum;
use crate::NativeContainer;
use crate::NativeObject;
use crate::StandardKey;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

pub trait Codec: Clone {
  type Item;
  type Raw: ArrayElement;

  fn decode(&self, raw: Self::Raw) -> Self::Item;

  fn encode(&self, item: &Self::Item) -> Self::Raw;

  /// What two stored elements are compared by. Raw elements that decode to the same item must
  /// share an identity.
  fn identity(&self, raw: &Self::Raw) -> <Self::Raw as ArrayElement>::Identity {
    raw.identity()
  }
}

/// Items are the raw elements themselves.
pub struct Plain<T>(PhantomData<fn() -> T>);

impl<T> Plain<T> {
  pub fn new() -> Self {
    Self(PhantomData)
  }
}

impl<T> Default for Plain<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Clone for Plain<T> {
  fn clone(&self) -> Self {
    Self::new()
  }
}

impl<T> fmt::Debug for Plain<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("Plain")
  }
}

impl<T: ArrayElement> Codec for Plain<T> {
  type Item = T;
  type Raw = T;

  fn decode(&self, raw: T) -> T {
    raw
  }

  fn encode(&self, item: &T) -> T {
    item.clone()
  }
}

/// Stores keys as their string values and rebuilds typed keys with a factory.
pub struct KeyCodec<K> {
  factory: Rc<dyn Fn(&str) -> K>,
}

impl<K: Key> KeyCodec<K> {
  pub fn new(factory: impl Fn(&str) -> K + 'static) -> Self {
    Self {
      factory: Rc::new(factory),
    }
  }
}

impl<K: KeyEnum> KeyCodec<K> {
  /// Resolves strings against the variants of `K`, ignoring case; unknown strings become
  /// `default`.
  pub fn enumeration(default: K) -> Self {
    Self::new(move |value| get_key_by_value_or(value, default))
  }
}

impl KeyCodec<StandardKey> {
  /// Decodes every stored name into a [`StandardKey`].
  pub fn standard() -> Self {
    Self::new(|value| StandardKey::from_raw(value.to_string()))
  }
}

impl<K> Clone for KeyCodec<K> {
  fn clone(&self) -> Self {
    Self {
      factory: Rc::clone(&self.factory),
    }
  }
}

impl<K> fmt::Debug for KeyCodec<K> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("KeyCodec")
  }
}

impl<K: Key> Codec for KeyCodec<K> {
  type Item = K;
  type Raw = String;

  fn decode(&self, raw: String) -> K {
    (self.factory)(&raw)
  }

  fn encode(&self, item: &K) -> String {
    item.value().to_string()
  }

  // Stored names are resolved leniently, so compare them by the key they decode to.
  fn identity(&self, raw: &String) -> String {
    self.encode(&self.decode(raw.clone()))
  }
}

/// Stores containers as their documents and rewraps documents with a factory.
pub struct ContainerCodec<E> {
  factory: Rc<dyn Fn(NativeObject) -> E>,
}

impl<E: NativeContainer> ContainerCodec<E> {
  pub fn new(factory: impl Fn(NativeObject) -> E + 'static) -> Self {
    Self {
      factory: Rc::new(factory),
    }
  }
}

impl<E> Clone for ContainerCodec<E> {
  fn clone(&self) -> Self {
    Self {
      factory: Rc::clone(&self.factory),
    }
  }
}

impl<E> fmt::Debug for ContainerCodec<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("ContainerCodec")
  }
}

impl<E: NativeContainer> Codec for ContainerCodec<E> {
  type Item = E;
  type Raw = NativeObject;

  fn decode(&self, raw: NativeObject) -> E {
    (self.factory)(raw)
  }

  fn encode(&self, item: &E) -> NativeObject {
    item.native_object().clone()
  }
}
