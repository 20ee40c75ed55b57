use commons_js::{ArrayStringList, ErrorKind, NativeError};

fn list(values: &[&str]) -> ArrayStringList {
  let list = ArrayStringList::new();
  list.add_values(values.iter().map(|v| v.to_string()));
  list
}

#[test]
fn next_walks_to_the_end() -> Result<(), NativeError> {
  let list = list(&["a", "b", "c"]);
  let mut iter = list.iter();
  assert_eq!(iter.next_element()?, "a");
  assert_eq!(iter.next_element()?, "b");
  assert_eq!(iter.next_element()?, "c");
  assert!(!iter.has_next());
  let err = iter.next_element().unwrap_err();
  assert_eq!(err, NativeError::NoSuchElement);
  assert_eq!(err.kind(), ErrorKind::EndOfSequence);
  Ok(())
}

#[test]
fn remove_needs_a_preceding_next() -> Result<(), NativeError> {
  let list = list(&["a", "b"]);
  let mut iter = list.iter();
  let err = iter.remove().unwrap_err();
  assert_eq!(err.kind(), ErrorKind::IllegalState);
  iter.next_element()?;
  iter.remove()?;
  assert!(iter.remove().is_err());
  assert_eq!(iter.next_element()?, "b");
  assert_eq!(list.to_vec(), vec!["b".to_string()]);
  Ok(())
}

#[test]
fn iterator_removal_filters_in_place() -> Result<(), NativeError> {
  let list = list(&["keep", "drop", "keep", "drop"]);
  let mut iter = list.iter();
  while iter.has_next() {
    if iter.next_element()? == "drop" {
      iter.remove()?;
    }
  }
  assert_eq!(list.to_vec(), vec!["keep".to_string(), "keep".to_string()]);
  Ok(())
}

#[test]
fn std_iteration_yields_every_element() {
  let list = list(&["x", "y"]);
  let collected: Vec<String> = list.iter().collect();
  assert_eq!(collected, vec!["x".to_string(), "y".to_string()]);
  let mut seen = 0;
  for _ in &list {
    seen += 1;
  }
  assert_eq!(seen, 2);
}

#[test]
fn previous_undoes_next() -> Result<(), NativeError> {
  let list = list(&["a", "b", "c"]);
  let mut iter = list.list_iter();
  assert!(!iter.has_previous());
  assert_eq!(iter.previous_index(), None);
  assert_eq!(iter.next_element()?, "a");
  assert_eq!(iter.next_element()?, "b");
  assert_eq!(iter.previous_element()?, "b");
  assert_eq!(iter.next_element()?, "b");
  assert_eq!(iter.next_index(), 2);
  assert_eq!(iter.previous_index(), Some(1));
  Ok(())
}

#[test]
fn list_iterator_sets_and_adds() -> Result<(), NativeError> {
  let list = list(&["a", "c"]);
  let mut iter = list.list_iter();
  assert!(iter.set("z".to_string()).is_err());
  iter.next_element()?;
  iter.set("A".to_string())?;
  iter.add("b".to_string())?;
  assert!(iter.set("nope".to_string()).is_err());
  assert!(iter.remove().is_err());
  assert_eq!(iter.next_element()?, "c");
  assert_eq!(
    list.to_vec(),
    vec!["A".to_string(), "b".to_string(), "c".to_string()]
  );
  Ok(())
}

#[test]
fn list_iterator_can_start_at_the_end() -> Result<(), NativeError> {
  let list = list(&["a", "b"]);
  let mut iter = list.list_iter_at(2)?;
  assert!(!iter.has_next());
  assert_eq!(iter.previous_element()?, "b");
  iter.remove()?;
  assert_eq!(list.to_vec(), vec!["a".to_string()]);
  let err = list.list_iter_at(3).err();
  assert_eq!(err, Some(NativeError::IndexOutOfBounds { index: 3, len: 1 }));
  Ok(())
}

#[test]
fn iterators_see_changes_made_elsewhere() -> Result<(), NativeError> {
  let list = list(&["a"]);
  let mut iter = list.iter();
  iter.next_element()?;
  list.add("b".to_string());
  assert!(iter.has_next());
  assert_eq!(iter.next_element()?, "b");
  Ok(())
}

#[test]
fn remove_fails_when_the_list_shrank_elsewhere() -> Result<(), NativeError> {
  let list = list(&["a", "b"]);
  let mut iter = list.iter();
  iter.next_element()?;
  iter.next_element()?;
  list.clear();
  let err = iter.remove().unwrap_err();
  assert_eq!(err, NativeError::IndexOutOfBounds { index: 1, len: 0 });
  assert_eq!(err.kind(), ErrorKind::OutOfRange);
  assert!(list.is_empty());
  Ok(())
}
