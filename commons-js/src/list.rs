use crate::ArrayElement;
use crate::ArrayIterator;
use crate::ArrayListIterator;
use crate::ArrayObject;
use crate::ArrayString;
use crate::Codec;
use crate::ContainerCodec;
use crate::Key;
use crate::KeyCodec;
use crate::KeyEnum;
use crate::NativeArray;
use crate::NativeContainer;
use crate::NativeError;
use crate::NativeObject;
use crate::Plain;
use ahash::HashSet;
use std::fmt;

/// A mutable list view over a [`NativeArray`].
///
/// The list owns no elements of its own: every operation is translated into reads and writes on
/// the backing array, so changes are visible through every other handle to that array.
pub struct ArrayList<C: Codec> {
  array: NativeArray<C::Raw>,
  codec: C,
}

pub type ArrayStringList = ArrayList<Plain<String>>;
pub type ArrayDoubleList = ArrayList<Plain<f64>>;
pub type ArrayIntegerList = ArrayList<Plain<i32>>;
pub type ArrayBooleanList = ArrayList<Plain<bool>>;
pub type ArrayObjectList = ArrayList<Plain<NativeObject>>;
pub type ArrayKeyList<K> = ArrayList<KeyCodec<K>>;
pub type ArrayContainerList<E> = ArrayList<ContainerCodec<E>>;

impl<C: Codec> Clone for ArrayList<C> {
  fn clone(&self) -> Self {
    Self {
      array: self.array.clone(),
      codec: self.codec.clone(),
    }
  }
}

impl<T: ArrayElement> ArrayList<Plain<T>> {
  /// A list over a new, empty array.
  pub fn new() -> Self {
    Self::wrap(NativeArray::new())
  }

  pub fn wrap(array: NativeArray<T>) -> Self {
    Self::with_codec(array, Plain::new())
  }
}

impl<T: ArrayElement> Default for ArrayList<Plain<T>> {
  fn default() -> Self {
    Self::new()
  }
}

impl<C: Codec> ArrayList<C> {
  pub fn with_codec(array: NativeArray<C::Raw>, codec: C) -> Self {
    Self { array, codec }
  }

  pub fn array(&self) -> &NativeArray<C::Raw> {
    &self.array
  }

  pub fn codec(&self) -> &C {
    &self.codec
  }

  pub fn size(&self) -> usize {
    self.array.length()
  }

  pub fn is_empty(&self) -> bool {
    self.size() == 0
  }

  fn check_range(&self, index: usize) -> bool {
    index < self.array.length()
  }

  pub fn get(&self, index: usize) -> Option<C::Item> {
    self.array.get(index).map(|raw| self.codec.decode(raw))
  }

  /// Replaces the element at `index`, returning the previous one, or `None` (and no change) if
  /// `index` is out of range.
  pub fn set(&self, index: usize, element: C::Item) -> Option<C::Item> {
    if !self.check_range(index) {
      return None;
    }
    let raw = self.codec.encode(&element);
    self.array.set(index, raw).ok().map(|old| self.codec.decode(old))
  }

  /// Appends `element`. Always succeeds.
  pub fn add(&self, element: C::Item) -> bool {
    self.array.push(self.codec.encode(&element));
    true
  }

  /// Inserts `element` at `index` (`0..=size()`).
  pub fn add_at(&self, index: usize, element: C::Item) -> Result<(), NativeError> {
    self.array.insert_at(index, self.codec.encode(&element))
  }

  /// Removes the first occurrence of `element`.
  pub fn remove(&self, element: &C::Item) -> bool {
    self.remove_raw(&self.codec.encode(element))
  }

  pub(crate) fn remove_raw(&self, raw: &C::Raw) -> bool {
    match self.raw_index_of(raw) {
      Some(index) => self.array.remove(index).is_some(),
      None => false,
    }
  }

  fn raw_index_of(&self, raw: &C::Raw) -> Option<usize> {
    let id = self.codec.identity(raw);
    self.array.position(|v| self.codec.identity(v) == id)
  }

  pub fn remove_at(&self, index: usize) -> Option<C::Item> {
    self.array.remove(index).map(|raw| self.codec.decode(raw))
  }

  pub fn clear(&self) {
    self.array.clear();
  }

  pub fn contains(&self, element: &C::Item) -> bool {
    self.index_of(element).is_some()
  }

  pub fn contains_all(&self, elements: &[C::Item]) -> bool {
    elements.iter().all(|e| self.contains(e))
  }

  pub fn index_of(&self, element: &C::Item) -> Option<usize> {
    self.raw_index_of(&self.codec.encode(element))
  }

  pub fn last_index_of(&self, element: &C::Item) -> Option<usize> {
    let id = self.codec.identity(&self.codec.encode(element));
    self.array.rposition(|v| self.codec.identity(v) == id)
  }

  /// Appends every element in order.
  ///
  /// Returns `true` only if `elements` was present and non-empty and every append succeeded.
  pub fn add_all<I: IntoIterator<Item = C::Item>>(&self, elements: Option<I>) -> bool {
    let Some(elements) = elements else {
      return false;
    };
    let mut any = false;
    let mut modified = true;
    for element in elements {
      any = true;
      modified &= self.add(element);
    }
    any && modified
  }

  /// Inserts every element starting at `index`, keeping their order.
  pub fn add_all_at<I: IntoIterator<Item = C::Item>>(
    &self,
    index: usize,
    elements: Option<I>,
  ) -> Result<bool, NativeError> {
    let len = self.size();
    if index > len {
      return Err(NativeError::IndexOutOfBounds { index, len });
    }
    let Some(elements) = elements else {
      return Ok(false);
    };
    let mut at = index;
    for element in elements {
      self.add_at(at, element)?;
      at += 1;
    }
    Ok(at > index)
  }

  /// Bulk load: appends every value with no modification tracking.
  pub fn add_values(&self, values: impl IntoIterator<Item = C::Item>) {
    for value in values {
      self.add(value);
    }
  }

  /// Removes the first occurrence of each element.
  ///
  /// Every removal is attempted; the result is `true` only if `elements` was present and non-empty
  /// and every removal found its element.
  pub fn remove_all(&self, elements: Option<&[C::Item]>) -> bool {
    let Some(elements) = elements else {
      return false;
    };
    let mut modified = !elements.is_empty();
    for element in elements {
      let removed = self.remove(element);
      modified = modified && removed;
    }
    modified
  }

  /// Keeps only the elements also present in `elements`.
  ///
  /// The list is scanned first and the elements to drop are buffered, then each buffered element
  /// is removed by value. The result starts as "`elements` was present and non-empty" and is
  /// and-ed with every removal, so one failed removal makes the whole call report `false` even if
  /// other removals happened. A call that removes nothing still reports `true`.
  pub fn retain_all(&self, elements: Option<&[C::Item]>) -> bool {
    let Some(elements) = elements else {
      return false;
    };
    let mut modified = !elements.is_empty();
    if modified {
      let keep: HashSet<_> = elements
        .iter()
        .map(|e| self.codec.identity(&self.codec.encode(e)))
        .collect();
      let buffered: Vec<C::Raw> = self
        .array
        .to_vec()
        .into_iter()
        .filter(|raw| !keep.contains(&self.codec.identity(raw)))
        .collect();
      for raw in &buffered {
        let removed = self.remove_raw(raw);
        modified = modified && removed;
      }
    }
    modified
  }

  pub fn to_vec(&self) -> Vec<C::Item> {
    self
      .array
      .to_vec()
      .into_iter()
      .map(|raw| self.codec.decode(raw))
      .collect()
  }

  pub fn iter(&self) -> ArrayIterator<C> {
    ArrayIterator::new(self.clone())
  }

  pub fn list_iter(&self) -> ArrayListIterator<C> {
    ArrayListIterator::new(self.clone(), 0)
  }

  /// A list iterator whose first `next_element` returns the element at `index` (`0..=size()`).
  pub fn list_iter_at(&self, index: usize) -> Result<ArrayListIterator<C>, NativeError> {
    let len = self.size();
    if index > len {
      return Err(NativeError::IndexOutOfBounds { index, len });
    }
    Ok(ArrayListIterator::new(self.clone(), index))
  }

  pub fn unmodifiable(&self) -> UnmodifiableList<C> {
    UnmodifiableList { list: self.clone() }
  }

  pub fn to_json(&self) -> Result<String, NativeError> {
    self.array.to_json()
  }
}

impl<C: Codec> fmt::Debug for ArrayList<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArrayList")
      .field("array", &self.array)
      .finish()
  }
}

impl<C: Codec> fmt::Display for ArrayList<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.to_json() {
      Ok(json) => write!(f, "ArrayList [array={json}]"),
      Err(e) => write!(f, "ArrayList [array=<{e}>]"),
    }
  }
}

impl<'a, C: Codec> IntoIterator for &'a ArrayList<C> {
  type Item = C::Item;
  type IntoIter = ArrayIterator<C>;

  fn into_iter(self) -> ArrayIterator<C> {
    self.iter()
  }
}

/// A read-only view of an [`ArrayList`]. It still reflects changes made through the list or the
/// backing array.
pub struct UnmodifiableList<C: Codec> {
  list: ArrayList<C>,
}

impl<C: Codec> Clone for UnmodifiableList<C> {
  fn clone(&self) -> Self {
    Self {
      list: self.list.clone(),
    }
  }
}

impl<C: Codec> UnmodifiableList<C> {
  pub fn size(&self) -> usize {
    self.list.size()
  }

  pub fn is_empty(&self) -> bool {
    self.list.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<C::Item> {
    self.list.get(index)
  }

  pub fn contains(&self, element: &C::Item) -> bool {
    self.list.contains(element)
  }

  pub fn contains_all(&self, elements: &[C::Item]) -> bool {
    self.list.contains_all(elements)
  }

  pub fn index_of(&self, element: &C::Item) -> Option<usize> {
    self.list.index_of(element)
  }

  pub fn last_index_of(&self, element: &C::Item) -> Option<usize> {
    self.list.last_index_of(element)
  }

  pub fn iter(&self) -> impl Iterator<Item = C::Item> + '_ {
    (0..).map_while(move |i| self.list.get(i))
  }

  pub fn to_vec(&self) -> Vec<C::Item> {
    self.list.to_vec()
  }

  pub fn to_json(&self) -> Result<String, NativeError> {
    self.list.to_json()
  }
}

impl<C: Codec> fmt::Debug for UnmodifiableList<C> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("UnmodifiableList").field(&self.list).finish()
  }
}

/// A list over `values`, or over a new empty array when there is none.
pub fn list_of<T: ArrayElement>(values: Option<&NativeArray<T>>) -> ArrayList<Plain<T>> {
  match values {
    Some(values) => ArrayList::wrap(values.clone()),
    None => ArrayList::new(),
  }
}

/// A key list over a string array; stored names that match no variant decode as `default`.
pub fn key_list<K: KeyEnum>(array: Option<&ArrayString>, default: K) -> ArrayKeyList<K> {
  let array = array.cloned().unwrap_or_default();
  ArrayList::with_codec(array, KeyCodec::enumeration(default))
}

/// A key list over a new array holding the values of `keys`.
pub fn key_list_of<K: KeyEnum>(keys: &[K], default: K) -> ArrayKeyList<K> {
  let array = keys.iter().map(|k| k.value().to_string()).collect();
  ArrayList::with_codec(array, KeyCodec::enumeration(default))
}

/// A list of containers over an object array, each element wrapped by `factory`.
pub fn container_list<E: NativeContainer>(
  array: Option<&ArrayObject>,
  factory: impl Fn(NativeObject) -> E + 'static,
) -> ArrayContainerList<E> {
  let array = array.cloned().unwrap_or_default();
  ArrayList::with_codec(array, ContainerCodec::new(factory))
}
