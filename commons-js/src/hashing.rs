//! Identity hashes for documents.
//!
//! A document has no notion of an identity hash of its own, so one is derived from the reference
//! on first use and cached inside the document under [`HASH_CODE_PROPERTY`]. The property is
//! writable (it can be refreshed here) but neither enumerable (it never shows up in `keys()` or in
//! JSON output) nor configurable (it cannot be deleted or redefined by callers). Plain assignment
//! through [`NativeObject::set`] is refused.

use crate::NativeObject;
use crate::PropertyDescriptor;
use crate::Value;
use std::hash::BuildHasher;

/// Name of the hidden property holding a document's identity hash.
pub const HASH_CODE_PROPERTY: &str = "_charbaHashCode";

fn stable_hasher() -> ahash::RandomState {
  ahash::RandomState::with_seeds(0x5157_4c42, 0x6f6d_6d6f, 0x6e73_6a73, 0x6861_7368)
}

fn reference_hash(object: &NativeObject) -> i32 {
  let h = stable_hasher().hash_one(object.address());
  (h ^ (h >> 32)) as i32
}

/// Returns the identity hash of `object`, installing it on first use.
///
/// The hash is always derived from the reference, so it stays the same for the life of the
/// document (through any handle). The stored copy is only a mirror: if it is missing or holds
/// anything else it is rewritten.
pub fn ensure_hash(object: &NativeObject) -> i32 {
  let hash = reference_hash(object);
  match object.get_value(HASH_CODE_PROPERTY) {
    Value::Number(n) if n == f64::from(hash) => {}
    _ if !object.has(HASH_CODE_PROPERTY) => {
      if object.define_property(HASH_CODE_PROPERTY, PropertyDescriptor::hidden(hash)) {
        tracing::trace!(target: "commons_js::hashing", hash, "hash code installed");
      }
    }
    _ => refresh_hash(object, hash),
  }
  hash
}

// Present but stale: rewrite through the writable attribute, or redefine if still configurable.
fn refresh_hash(object: &NativeObject, hash: i32) {
  let refreshed = object.overwrite_value(HASH_CODE_PROPERTY, Value::from(hash))
    || object.define_property(HASH_CODE_PROPERTY, PropertyDescriptor::hidden(hash));
  if refreshed {
    tracing::trace!(target: "commons_js::hashing", hash, "hash code refreshed");
  } else {
    tracing::debug!(target: "commons_js::hashing", hash, "stale hash code cannot be rewritten");
  }
}

/// The identity hash of `object`. Same as [`ensure_hash`].
pub fn identity_hash(object: &NativeObject) -> i32 {
  ensure_hash(object)
}
