use commons_js::{
  check_if_valid, get_key_by_value, get_key_by_value_or, has_key_by_value, is_valid, keys_equal,
  ErrorKind, Key, KeyEnum, NativeError, StandardKey,
};

commons_js::key_enum! {
  pub enum Position {
    Top => "top",
    Left => "left",
    ChartArea => "chartArea",
  }
}

#[test]
fn standard_key_rejects_empty_value() {
  let err = StandardKey::new("").unwrap_err();
  assert!(matches!(err, NativeError::InvalidKey(_)));
  assert_eq!(err.kind(), ErrorKind::InvalidArgument);
  assert!(StandardKey::try_from(String::new()).is_err());
}

#[test]
fn standard_key_keeps_its_value() -> Result<(), NativeError> {
  let key = StandardKey::new("borderWidth")?;
  assert_eq!(key.value(), "borderWidth");
  assert_eq!(key.to_string(), "borderWidth");
  assert_eq!(key.clone().into_string(), "borderWidth");
  assert!(is_valid(&key));
  check_if_valid(&key)?;
  Ok(())
}

#[test]
fn keys_of_different_types_compare_by_value() -> Result<(), NativeError> {
  let standard = StandardKey::new("top")?;
  assert!(keys_equal(&standard, &Position::Top));
  assert!(!keys_equal(&standard, &Position::Left));
  assert_eq!(StandardKey::from_key(&Position::ChartArea)?.value(), "chartArea");
  Ok(())
}

#[test]
fn enumeration_lookup_ignores_case() {
  assert_eq!(get_key_by_value::<Position>("TOP"), Some(Position::Top));
  assert_eq!(get_key_by_value::<Position>("chartarea"), Some(Position::ChartArea));
  assert_eq!(get_key_by_value::<Position>("bottom"), None);
  assert_eq!(get_key_by_value_or("bottom", Position::Left), Position::Left);
  assert!(has_key_by_value::<Position>("Left"));
  assert!(!has_key_by_value::<Position>(""));
}

#[test]
fn variants_keep_declaration_order() {
  assert_eq!(
    Position::variants(),
    &[Position::Top, Position::Left, Position::ChartArea]
  );
}
