use commons_js::{
  ArrayInteger, ArrayIntegerSet, ArrayKeySet, ArrayObjectSet, ArraySet, ArrayString,
  ArrayStringSet, KeyCodec, NativeObject, Plain,
};

commons_js::key_enum! {
  pub enum Event {
    Click => "click",
    Hover => "mousemove",
  }
}

fn owned(values: &[&str]) -> Vec<String> {
  values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn add_refuses_duplicates() {
  let set = ArrayStringSet::new();
  assert!(set.add("a".to_string()));
  assert!(!set.add("a".to_string()));
  assert!(set.add("b".to_string()));
  assert_eq!(set.size(), 2);
  assert_eq!(set.to_vec(), owned(&["a", "b"]));
}

#[test]
fn sets_over_arrays_start_deduplicated() {
  let array = ArrayInteger::of([3, 1, 3, 2, 1]);
  let set = ArrayIntegerSet::from_array(&array);
  assert_eq!(set.to_vec(), vec![3, 1, 2]);
  assert_eq!(array.length(), 5);
  set.add(4);
  assert_eq!(set.array().to_vec(), vec![3, 1, 2, 4]);
}

#[test]
fn add_all_reports_any_addition() {
  let set = ArrayIntegerSet::new();
  assert!(!set.add_all(None::<Vec<i32>>));
  assert!(set.add_all(Some(vec![1, 1, 2])));
  assert!(!set.add_all(Some(vec![2, 1])));
  assert!(set.add_all(Some(vec![2, 3])));
  assert_eq!(set.to_vec(), vec![1, 2, 3]);
}

#[test]
fn bulk_removal_delegates_to_the_list() {
  let set = ArrayIntegerSet::from_array(&ArrayInteger::of([1, 2, 3, 4]));
  assert!(set.retain_all(Some(&[2, 3, 4][..])));
  assert!(set.remove_all(Some(&[4][..])));
  assert!(set.remove(&2));
  assert!(!set.remove(&2));
  assert_eq!(set.to_vec(), vec![3]);
  assert!(set.contains(&3));
  assert!(set.contains_all(&[3]));
  set.clear();
  assert!(set.is_empty());
}

#[test]
fn object_sets_use_reference_identity() {
  let set = ArrayObjectSet::new();
  let a = NativeObject::new();
  assert!(set.add(a.clone()));
  assert!(!set.add(a.clone()));
  assert!(set.add(NativeObject::new()));
  assert_eq!(set.size(), 2);
}

#[test]
fn key_sets_decode_stored_names() {
  let array = ArrayString::of(owned(&["click", "CLICK", "MouseMove"]));
  let set: ArrayKeySet<Event> = ArraySet::with_codec(&array, KeyCodec::enumeration(Event::Click));
  // Names that decode to the same key are duplicates.
  assert_eq!(set.size(), 2);
  assert_eq!(set.to_vec(), vec![Event::Click, Event::Hover]);
  assert!(set.contains(&Event::Hover));
  assert!(!set.add(Event::Hover));
  assert!(!set.add(Event::Click));
  assert_eq!(set.array().to_vec(), owned(&["click", "MouseMove"]));

  let empty = ArraySet::empty_with_codec(KeyCodec::enumeration(Event::Click));
  assert!(empty.add(Event::Hover));
  assert_eq!(empty.array().to_vec(), owned(&["mousemove"]));
}

#[test]
fn unmodifiable_sets_are_read_only_views() {
  let set = ArrayStringSet::new();
  set.add("x".to_string());
  let view = set.unmodifiable();
  set.add("y".to_string());
  assert_eq!(view.size(), 2);
  assert!(view.contains(&"y".to_string()));
  assert_eq!(view.iter().collect::<Vec<_>>(), owned(&["x", "y"]));

  let fixed = ArraySet::unmodifiable_with_codec(
    &ArrayString::of(owned(&["a", "a"])),
    Plain::new(),
  );
  assert_eq!(fixed.to_vec(), owned(&["a"]));
}

#[test]
fn display_renders_backing_array() {
  let set = ArrayIntegerSet::new();
  set.add(1);
  assert_eq!(set.to_string(), "ArraySet [array=[1]]");
}
