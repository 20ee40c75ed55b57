//! Typed access to untyped, dynamically shaped documents.
//!
//! The document model is a string-keyed object ([`NativeObject`]) and homogeneous arrays
//! ([`NativeArray`]), both with reference semantics: handles are cheap to clone and every handle
//! observes every mutation. On top of that this crate provides:
//! - Keys ([`Key`], [`StandardKey`], [`PropertyKey`], [`key_enum!`]) naming document properties
//! - Property descriptors ([`PropertyDescriptor`]) with the writable/enumerable/configurable
//!   attributes, including hidden properties owned by this crate
//! - Identity hashing ([`hashing`]) cached inside the document itself
//! - Collection views ([`ArrayList`], [`ArraySet`], [`ArrayIterator`], [`ArrayListIterator`]) that
//!   translate every operation into reads and writes on a backing array
//! - Typed containers ([`NativeContainer`]), one-shot builders ([`NativeObjectBuilder`]) and
//!   envelopes ([`Envelope`]) for handing documents between components
//!
//! # Absent values
//!
//! A missing property or out-of-range index is never an error. Typed getters return `Option` or
//! take a default, and ids fall back to the sentinels [`UNDEFINED_INTEGER`] and
//! [`UNDEFINED_STRING`]. Errors ([`NativeError`]) are reserved for rejected arguments, misuse of
//! iterators and builders, and documents that cannot be rendered.
//!
//! # Threading
//!
//! Documents are `Rc`-based and not `Send`; everything here is meant for a single thread, like the
//! runtime the documents come from.

mod array;
mod builder;
mod codec;
mod container;
mod descriptor;
mod envelope;
mod error;
pub mod hashing;
mod id;
mod iterator;
mod json;
mod key;
mod list;
mod object;
mod property_key;
mod set;
mod value;

pub use crate::array::AnyArray;
pub use crate::array::ArrayBoolean;
pub use crate::array::ArrayDouble;
pub use crate::array::ArrayElement;
pub use crate::array::ArrayInteger;
pub use crate::array::ArrayObject;
pub use crate::array::ArrayString;
pub use crate::array::NativeArray;
pub use crate::array::ScalarElement;
pub use crate::builder::BuilderState;
pub use crate::builder::BuilderValidity;
pub use crate::builder::NativeObjectBuilder;
pub use crate::codec::Codec;
pub use crate::codec::ContainerCodec;
pub use crate::codec::KeyCodec;
pub use crate::codec::Plain;
pub use crate::container::NativeContainer;
pub use crate::container::NativeObjectContainer;
pub use crate::descriptor::PropertyDescriptor;
pub use crate::envelope::Envelope;
pub use crate::envelope::MutableEnvelope;
pub use crate::error::ErrorKind;
pub use crate::error::NativeError;
pub use crate::id::get_integer_id;
pub use crate::id::get_string_id;
pub use crate::id::set_integer_id;
pub use crate::id::set_string_id;
pub use crate::id::IdGenerator;
pub use crate::id::CHARBA_ID;
pub use crate::iterator::ArrayIterator;
pub use crate::iterator::ArrayListIterator;
pub use crate::json::JsonOptions;
pub use crate::json::JsonRenderer;
pub use crate::key::check_if_valid;
pub use crate::key::get_key_by_value;
pub use crate::key::get_key_by_value_or;
pub use crate::key::has_key_by_value;
pub use crate::key::is_valid;
pub use crate::key::keys_equal;
pub use crate::key::Key;
pub use crate::key::KeyEnum;
pub use crate::key::StandardKey;
pub use crate::list::container_list;
pub use crate::list::key_list;
pub use crate::list::key_list_of;
pub use crate::list::list_of;
pub use crate::list::ArrayBooleanList;
pub use crate::list::ArrayContainerList;
pub use crate::list::ArrayDoubleList;
pub use crate::list::ArrayIntegerList;
pub use crate::list::ArrayKeyList;
pub use crate::list::ArrayList;
pub use crate::list::ArrayObjectList;
pub use crate::list::ArrayStringList;
pub use crate::list::UnmodifiableList;
pub use crate::object::NativeObject;
pub use crate::property_key::PropertyKey;
pub use crate::property_key::PropertyKeyChecker;
pub use crate::property_key::PropertyKeyOptions;
pub use crate::set::ArrayDoubleSet;
pub use crate::set::ArrayIntegerSet;
pub use crate::set::ArrayKeySet;
pub use crate::set::ArrayObjectSet;
pub use crate::set::ArraySet;
pub use crate::set::ArrayStringSet;
pub use crate::set::UnmodifiableSet;
pub use crate::value::ObjectType;
pub use crate::value::Value;
pub use crate::value::UNDEFINED_DOUBLE;
pub use crate::value::UNDEFINED_INTEGER;
pub use crate::value::UNDEFINED_STRING;
