use commons_js::hashing::HASH_CODE_PROPERTY;
use commons_js::{
  Key, NativeError, PropertyKey, PropertyKeyChecker, PropertyKeyOptions, StandardKey, CHARBA_ID,
};

fn message(err: NativeError) -> String {
  match err {
    NativeError::InvalidKey(message) => message,
    other => panic!("expected InvalidKey, got {other:?}"),
  }
}

#[test]
fn default_rules_accept_ordinary_names() -> Result<(), NativeError> {
  let key = PropertyKey::new("backgroundColor")?;
  assert_eq!(key.value(), "backgroundColor");
  let standard: StandardKey = key.into();
  assert_eq!(standard.value(), "backgroundColor");
  Ok(())
}

#[test]
fn each_rule_reports_what_failed() {
  assert!(message(PropertyKey::new("").unwrap_err()).contains("empty"));
  assert!(message(PropertyKey::new("a b").unwrap_err()).contains("whitespace"));
  assert!(message(PropertyKey::new("a\u{7}").unwrap_err()).contains("control"));
  assert!(message(PropertyKey::new(HASH_CODE_PROPERTY).unwrap_err()).contains("reserved"));
  assert!(message(PropertyKey::new(CHARBA_ID).unwrap_err()).contains("reserved"));
  assert!(message(PropertyKey::new("x".repeat(1025)).unwrap_err()).contains("max"));
}

#[test]
fn options_relax_the_rules() -> Result<(), NativeError> {
  let checker = PropertyKeyChecker::new(PropertyKeyOptions {
    max_length: 4,
    allow_whitespace: true,
    reserved: Vec::new(),
  });
  assert!(checker.is_valid("a b"));
  assert!(checker.is_valid(HASH_CODE_PROPERTY.get(..4).unwrap_or_default()));
  assert!(!checker.is_valid("abcde"));
  let key = PropertyKey::with_checker("a b", &checker)?;
  assert_eq!(key.to_string(), "a b");
  Ok(())
}

#[test]
fn options_deserialize_with_defaults() {
  let options: PropertyKeyOptions =
    serde_json::from_str(r#"{ "allow_whitespace": true }"#).unwrap();
  assert!(options.allow_whitespace);
  assert_eq!(options.max_length, PropertyKeyOptions::default().max_length);
  assert_eq!(options.reserved, PropertyKeyOptions::default().reserved);
}
