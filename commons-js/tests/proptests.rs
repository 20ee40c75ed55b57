use commons_js::{
  get_key_by_value, ArrayInteger, ArrayIntegerList, ArrayString, Key, KeyEnum, StandardKey,
};
use proptest::prelude::*;
use std::collections::HashSet;

commons_js::key_enum! {
  enum Scale {
    Linear => "linear",
    Logarithmic => "logarithmic",
    Category => "category",
    Time => "time",
  }
}

fn small_ints() -> impl Strategy<Value = Vec<i32>> {
  prop::collection::vec(-5i32..5, 0..24)
}

proptest! {
  #[test]
  fn unique_is_idempotent(values in small_ints()) {
    let once = ArrayInteger::of(values).unique();
    prop_assert_eq!(once.unique().to_vec(), once.to_vec());
  }

  #[test]
  fn unique_keeps_first_occurrence_order(values in small_ints()) {
    let mut seen = HashSet::new();
    let expected: Vec<i32> = values.iter().copied().filter(|v| seen.insert(*v)).collect();
    prop_assert_eq!(ArrayInteger::of(values).unique().to_vec(), expected);
  }

  #[test]
  fn retain_all_matches_filter(values in small_ints(), keep in small_ints()) {
    let list = ArrayIntegerList::new();
    list.add_values(values.clone());
    let modified = list.retain_all(Some(keep.as_slice()));
    // An empty keep list is rejected outright and leaves the list alone.
    let expected: Vec<i32> = if keep.is_empty() {
      values
    } else {
      values.iter().copied().filter(|v| keep.contains(v)).collect()
    };
    prop_assert_eq!(list.to_vec(), expected);
    prop_assert_eq!(modified, !keep.is_empty());
  }

  #[test]
  fn remove_all_removes_one_occurrence_each(values in small_ints(), drop in small_ints()) {
    let list = ArrayIntegerList::new();
    list.add_values(values.clone());
    list.remove_all(Some(drop.as_slice()));
    let mut expected = values;
    for d in &drop {
      if let Some(i) = expected.iter().position(|v| v == d) {
        expected.remove(i);
      }
    }
    prop_assert_eq!(list.to_vec(), expected);
  }

  #[test]
  fn standard_keys_round_trip(value in "[a-zA-Z][a-zA-Z0-9_]{0,16}") {
    let key = StandardKey::new(value.clone()).unwrap();
    prop_assert_eq!(key.value(), value.as_str());
    let array = ArrayString::of([key.value().to_string()]);
    prop_assert_eq!(StandardKey::new(array.get(0).unwrap()).unwrap(), key);
  }

  #[test]
  fn enum_lookup_ignores_case(index in 0usize..4, upper in any::<bool>()) {
    let scale = Scale::variants()[index];
    let name = if upper { scale.value().to_uppercase() } else { scale.value().to_string() };
    prop_assert_eq!(get_key_by_value::<Scale>(&name), Some(scale));
  }
}
