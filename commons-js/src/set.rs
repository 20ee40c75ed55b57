use crate::ArrayElement;
use crate::ArrayIterator;
use crate::ArrayList;
use crate::Codec;
use crate::KeyCodec;
use crate::NativeArray;
use crate::NativeError;
use crate::NativeObject;
use crate::Plain;
use std::fmt;

/// A list view whose single mutation entry point, [`ArraySet::add`], refuses elements already
/// present.
///
/// A set built from an existing array wraps a de-duplicated copy of it (see
/// [`NativeArray::unique`]); after that the invariant is kept one `add` at a time. Iteration order
/// is the order of first insertion.
pub struct ArraySet<C: Codec> {
  list: ArrayList<C>,
}

pub type ArrayStringSet = ArraySet<Plain<String>>;
pub type ArrayDoubleSet = ArraySet<Plain<f64>>;
pub type ArrayIntegerSet = ArraySet<Plain<i32>>;
pub type ArrayObjectSet = ArraySet<Plain<NativeObject>>;
pub type ArrayKeySet<K> = ArraySet<KeyCodec<K>>;

impl<C: Codec> Clone for ArraySet<C> {
  fn clone(&self) -> Self {
    Self {
      list: self.list.clone(),
    }
  }
}

impl<T: ArrayElement> ArraySet<Plain<T>> {
  pub fn new() -> Self {
    Self {
      list: ArrayList::new(),
    }
  }

  pub fn from_array(array: &NativeArray<T>) -> Self {
    Self::with_codec(array, Plain::new())
  }
}

impl<T: ArrayElement> Default for ArraySet<Plain<T>> {
  fn default() -> Self {
    Self::new()
  }
}

impl<C: Codec> ArraySet<C> {
  /// Builds a set over the distinct elements of `array`, as told apart by `codec`.
  pub fn with_codec(array: &NativeArray<C::Raw>, codec: C) -> Self {
    let unique = array.unique_by(|raw| codec.identity(raw));
    Self {
      list: ArrayList::with_codec(unique, codec),
    }
  }

  /// Same as [`ArraySet::with_codec`], exposed read-only.
  pub fn unmodifiable_with_codec(array: &NativeArray<C::Raw>, codec: C) -> UnmodifiableSet<C> {
    Self::with_codec(array, codec).unmodifiable()
  }

  pub fn empty_with_codec(codec: C) -> Self {
    Self {
      list: ArrayList::with_codec(NativeArray::new(), codec),
    }
  }

  pub fn array(&self) -> &NativeArray<C::Raw> {
    self.list.array()
  }

  pub fn size(&self) -> usize {
    self.list.size()
  }

  pub fn is_empty(&self) -> bool {
    self.list.is_empty()
  }

  pub fn contains(&self, element: &C::Item) -> bool {
    self.list.contains(element)
  }

  pub fn contains_all(&self, elements: &[C::Item]) -> bool {
    self.list.contains_all(elements)
  }

  /// Adds `element` unless an equal element is already present.
  pub fn add(&self, element: C::Item) -> bool {
    if self.list.contains(&element) {
      return false;
    }
    self.list.add(element)
  }

  /// Adds each element through [`ArraySet::add`]; `true` if at least one was added.
  pub fn add_all<I: IntoIterator<Item = C::Item>>(&self, elements: Option<I>) -> bool {
    let Some(elements) = elements else {
      return false;
    };
    let mut modified = false;
    for element in elements {
      modified |= self.add(element);
    }
    modified
  }

  pub fn remove(&self, element: &C::Item) -> bool {
    self.list.remove(element)
  }

  pub fn remove_all(&self, elements: Option<&[C::Item]>) -> bool {
    self.list.remove_all(elements)
  }

  pub fn retain_all(&self, elements: Option<&[C::Item]>) -> bool {
    self.list.retain_all(elements)
  }

  pub fn clear(&self) {
    self.list.clear();
  }

  /// Iterates in insertion order; the iterator may remove elements.
  pub fn iter(&self) -> ArrayIterator<C> {
    self.list.iter()
  }

  pub fn to_vec(&self) -> Vec<C::Item> {
    self.list.to_vec()
  }

  pub fn unmodifiable(&self) -> UnmodifiableSet<C> {
    UnmodifiableSet { set: self.clone() }
  }

  pub fn to_json(&self) -> Result<String, NativeError> {
    self.list.to_json()
  }
}

impl<C: Codec> fmt::Debug for ArraySet<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArraySet")
      .field("array", self.list.array())
      .finish()
  }
}

impl<C: Codec> fmt::Display for ArraySet<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.to_json() {
      Ok(json) => write!(f, "ArraySet [array={json}]"),
      Err(e) => write!(f, "ArraySet [array=<{e}>]"),
    }
  }
}

impl<'a, C: Codec> IntoIterator for &'a ArraySet<C> {
  type Item = C::Item;
  type IntoIter = ArrayIterator<C>;

  fn into_iter(self) -> ArrayIterator<C> {
    self.iter()
  }
}

/// A read-only view of an [`ArraySet`].
pub struct UnmodifiableSet<C: Codec> {
  set: ArraySet<C>,
}

impl<C: Codec> UnmodifiableSet<C> {
  pub fn size(&self) -> usize {
    self.set.size()
  }

  pub fn is_empty(&self) -> bool {
    self.set.is_empty()
  }

  pub fn contains(&self, element: &C::Item) -> bool {
    self.set.contains(element)
  }

  pub fn contains_all(&self, elements: &[C::Item]) -> bool {
    self.set.contains_all(elements)
  }

  pub fn iter(&self) -> impl Iterator<Item = C::Item> + '_ {
    (0..).map_while(move |i| self.set.list.get(i))
  }

  pub fn to_vec(&self) -> Vec<C::Item> {
    self.set.to_vec()
  }
}

impl<C: Codec> fmt::Debug for UnmodifiableSet<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("UnmodifiableSet").field(&self.set).finish()
  }
}
