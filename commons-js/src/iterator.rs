use crate::ArrayList;
use crate::Codec;
use crate::NativeError;

/// Forward iterator over an [`ArrayList`] that can remove the element it last returned.
///
/// The iterator shares the list's storage and re-reads the size on every call, so it is not a
/// snapshot: changes made to the list by anything other than this iterator are visible mid-flight
/// and are not detected.
pub struct ArrayIterator<C: Codec> {
  list: ArrayList<C>,
  // Index of the next element to return.
  cursor: usize,
  // Index of the element last returned by next/previous, reset by remove/add.
  last_return: Option<usize>,
}

impl<C: Codec> ArrayIterator<C> {
  pub(crate) fn new(list: ArrayList<C>) -> Self {
    Self::starting_at(list, 0)
  }

  fn starting_at(list: ArrayList<C>, cursor: usize) -> Self {
    Self {
      list,
      cursor,
      last_return: None,
    }
  }

  pub fn has_next(&self) -> bool {
    self.cursor != self.list.size()
  }

  pub fn next_element(&mut self) -> Result<C::Item, NativeError> {
    let i = self.cursor;
    if i >= self.list.size() {
      return Err(NativeError::NoSuchElement);
    }
    let item = self.list.get(i).ok_or(NativeError::NoSuchElement)?;
    self.cursor = i + 1;
    self.last_return = Some(i);
    Ok(item)
  }

  /// Removes the element last returned. Allowed once per `next_element`.
  ///
  /// Fails without touching the cursor if the list shrank below that element in the meantime.
  pub fn remove(&mut self) -> Result<(), NativeError> {
    let Some(last) = self.last_return else {
      return Err(NativeError::IllegalState(
        "remove called without a preceding next or previous",
      ));
    };
    if self.list.remove_at(last).is_none() {
      return Err(NativeError::IndexOutOfBounds {
        index: last,
        len: self.list.size(),
      });
    }
    self.cursor = last;
    self.last_return = None;
    Ok(())
  }
}

impl<C: Codec> Iterator for ArrayIterator<C> {
  type Item = C::Item;

  fn next(&mut self) -> Option<C::Item> {
    self.next_element().ok()
  }
}

/// Bidirectional iterator over an [`ArrayList`], with in-place `set` and `add`.
pub struct ArrayListIterator<C: Codec> {
  inner: ArrayIterator<C>,
}

impl<C: Codec> ArrayListIterator<C> {
  pub(crate) fn new(list: ArrayList<C>, index: usize) -> Self {
    Self {
      inner: ArrayIterator::starting_at(list, index),
    }
  }

  pub fn has_next(&self) -> bool {
    self.inner.has_next()
  }

  pub fn next_element(&mut self) -> Result<C::Item, NativeError> {
    self.inner.next_element()
  }

  pub fn has_previous(&self) -> bool {
    self.inner.cursor != 0
  }

  pub fn previous_element(&mut self) -> Result<C::Item, NativeError> {
    let Some(i) = self.inner.cursor.checked_sub(1) else {
      return Err(NativeError::NoSuchElement);
    };
    if i >= self.inner.list.size() {
      return Err(NativeError::NoSuchElement);
    }
    let item = self.inner.list.get(i).ok_or(NativeError::NoSuchElement)?;
    self.inner.cursor = i;
    self.inner.last_return = Some(i);
    Ok(item)
  }

  /// Index of the element `next_element` would return.
  pub fn next_index(&self) -> usize {
    self.inner.cursor
  }

  /// Index of the element `previous_element` would return, `None` at the start of the list.
  pub fn previous_index(&self) -> Option<usize> {
    self.inner.cursor.checked_sub(1)
  }

  pub fn remove(&mut self) -> Result<(), NativeError> {
    self.inner.remove()
  }

  /// Replaces the element last returned by `next_element`/`previous_element`.
  pub fn set(&mut self, element: C::Item) -> Result<(), NativeError> {
    let Some(last) = self.inner.last_return else {
      return Err(NativeError::IllegalState(
        "set called without a preceding next or previous",
      ));
    };
    match self.inner.list.set(last, element) {
      Some(_) => Ok(()),
      None => Err(NativeError::IndexOutOfBounds {
        index: last,
        len: self.inner.list.size(),
      }),
    }
  }

  /// Inserts `element` before the cursor. A following `remove` or `set` is rejected until the next
  /// `next_element`/`previous_element`.
  pub fn add(&mut self, element: C::Item) -> Result<(), NativeError> {
    self.inner.list.add_at(self.inner.cursor, element)?;
    self.inner.cursor += 1;
    self.inner.last_return = None;
    Ok(())
  }
}

impl<C: Codec> Iterator for ArrayListIterator<C> {
  type Item = C::Item;

  fn next(&mut self) -> Option<C::Item> {
    self.next_element().ok()
  }
}
