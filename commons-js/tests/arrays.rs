use commons_js::{
  ArrayDouble, ArrayInteger, ArrayObject, ArrayString, ErrorKind, NativeError, NativeObject,
};

#[test]
fn reads_past_the_end_do_not_grow() {
  let array = ArrayString::of(["a".to_string()]);
  assert_eq!(array.get(5), None);
  assert_eq!(array.length(), 1);
}

#[test]
fn set_is_bounds_checked() -> Result<(), NativeError> {
  let array = ArrayInteger::of([1, 2]);
  assert_eq!(array.set(1, 5)?, 2);
  let err = array.set(2, 9).unwrap_err();
  assert_eq!(err, NativeError::IndexOutOfBounds { index: 2, len: 2 });
  assert_eq!(err.kind(), ErrorKind::OutOfRange);
  assert_eq!(array.to_vec(), vec![1, 5]);
  Ok(())
}

#[test]
fn insert_and_remove_shift_elements() -> Result<(), NativeError> {
  let array = ArrayInteger::of([1, 3]);
  array.insert_at(1, 2)?;
  array.insert_at(3, 4)?;
  assert!(array.insert_at(9, 0).is_err());
  assert_eq!(array.to_vec(), vec![1, 2, 3, 4]);
  assert_eq!(array.remove(0), Some(1));
  assert_eq!(array.remove(7), None);
  assert_eq!(array.to_vec(), vec![2, 3, 4]);
  Ok(())
}

#[test]
fn push_all_of_nothing_is_a_no_op() {
  let array = ArrayInteger::new();
  array.push_all(Vec::new());
  assert!(array.is_empty());
  array.push_all([1, 2]);
  array.push(3);
  assert_eq!(array.to_vec(), vec![1, 2, 3]);
}

#[test]
fn unique_keeps_first_occurrences() {
  let array = ArrayString::of(["b", "a", "b", "c", "a"].map(String::from));
  let unique = array.unique();
  assert_eq!(unique.to_vec(), vec!["b", "a", "c"]);
  assert!(!unique.ptr_eq(&array));
  assert_eq!(array.length(), 5);
}

#[test]
fn doubles_compare_with_same_value_zero() {
  let array = ArrayDouble::of([f64::NAN, 0.0, -0.0, f64::NAN, 1.0]);
  assert_eq!(array.index_of(&f64::NAN), Some(0));
  assert_eq!(array.last_index_of(&f64::NAN), Some(3));
  assert_eq!(array.index_of(&-0.0), Some(1));
  assert_eq!(array.unique().length(), 3);
}

#[test]
fn objects_compare_by_reference() {
  let a = NativeObject::new();
  let b = NativeObject::new();
  let array = ArrayObject::of([a.clone(), b.clone(), a.clone()]);
  assert_eq!(array.index_of(&b), Some(1));
  assert_eq!(array.last_index_of(&a), Some(2));
  assert!(!array.contains(&NativeObject::new()));
  assert_eq!(array.unique().length(), 2);
}

#[test]
fn clones_share_storage() {
  let array = ArrayInteger::new();
  let other = array.clone();
  other.push(1);
  assert_eq!(array.length(), 1);
  assert_eq!(array, other);
  assert_ne!(array, ArrayInteger::of([1]));
  array.clear();
  assert!(other.is_empty());
}
