use commons_js::hashing::{ensure_hash, identity_hash, HASH_CODE_PROPERTY};
use commons_js::NativeObject;
use std::collections::HashSet;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

#[test]
fn hash_is_installed_once_and_hidden() {
  let object = NativeObject::new();
  object.set("a", 1);
  let hash = ensure_hash(&object);
  assert_eq!(ensure_hash(&object), hash);
  assert_eq!(identity_hash(&object.clone()), hash);
  assert!(object.has(HASH_CODE_PROPERTY));
  assert_eq!(object.keys(), vec!["a".to_string()]);
  assert!(!object.delete(HASH_CODE_PROPERTY));
  assert_eq!(object.to_json().unwrap(), r#"{"a":1}"#);
}

#[test]
fn assignments_cannot_change_the_hash() {
  let object = NativeObject::new();
  let hash = ensure_hash(&object);
  assert!(!object.set(HASH_CODE_PROPERTY, hash.wrapping_add(1)));
  assert!(!object.set(HASH_CODE_PROPERTY, "garbage"));
  assert_eq!(ensure_hash(&object), hash);
  assert_eq!(object.get_int(HASH_CODE_PROPERTY, 0), hash);
}

#[test]
fn set_members_stay_reachable_after_assignments() {
  let a = NativeObject::new();
  let mut set = HashSet::new();
  set.insert(a.clone());
  let before = identity_hash(&a);
  a.set(HASH_CODE_PROPERTY, before.wrapping_add(1));
  a.set("label", "still here");
  assert_eq!(identity_hash(&a), before);
  assert!(set.contains(&a));
}

#[test]
fn hash_set_before_first_use_is_ignored() {
  let object = NativeObject::new();
  assert!(!object.set(HASH_CODE_PROPERTY, 42));
  assert!(!object.has(HASH_CODE_PROPERTY));
  let hash = ensure_hash(&object);
  assert_eq!(object.get_int(HASH_CODE_PROPERTY, 0), hash);
}

#[test]
fn documents_work_as_hash_set_members() {
  let a = NativeObject::new();
  let b = NativeObject::new();
  let mut set = HashSet::new();
  assert!(set.insert(a.clone()));
  assert!(set.insert(b.clone()));
  assert!(!set.insert(a.clone()));
  assert_eq!(set.len(), 2);
  assert!(set.contains(&b));
}

#[derive(Clone, Default)]
struct SharedWriter {
  buffer: Arc<Mutex<Vec<u8>>>,
}

impl SharedWriter {
  fn contents(&self) -> String {
    String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
  }
}

struct SharedWriterGuard<'a> {
  buffer: &'a Arc<Mutex<Vec<u8>>>,
}

impl<'a> io::Write for SharedWriterGuard<'a> {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.buffer.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl<'a> MakeWriter<'a> for SharedWriter {
  type Writer = SharedWriterGuard<'a>;

  fn make_writer(&'a self) -> Self::Writer {
    SharedWriterGuard {
      buffer: &self.buffer,
    }
  }
}

#[test]
fn hash_installation_is_traced() {
  let writer = SharedWriter::default();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(writer.clone())
    .with_max_level(tracing::Level::TRACE)
    .with_ansi(false)
    .finish();

  tracing::subscriber::with_default(subscriber, || {
    let object = NativeObject::new();
    ensure_hash(&object);
    ensure_hash(&object);
  });

  let output = writer.contents();
  assert_eq!(output.matches("hash code installed").count(), 1);
  assert!(output.contains("commons_js::hashing"));
}
