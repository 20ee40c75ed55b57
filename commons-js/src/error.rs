/// Errors produced by the document adapters and collection views.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NativeError {
  /// A key could not be constructed or failed property-key validation.
  #[error("invalid key: {0}")]
  InvalidKey(String),

  /// An argument was rejected before any state was touched.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// An iterator was asked to `remove`/`set` without a preceding `next`/`previous`.
  #[error("illegal state: {0}")]
  IllegalState(&'static str),

  /// `next`/`previous` was called past the bounds of the collection.
  #[error("no such element")]
  NoSuchElement,

  /// An index-addressed operation was outside `0..len`.
  #[error("index {index} out of bounds for length {len}")]
  IndexOutOfBounds { index: usize, len: usize },

  /// A builder was used again after being marked built.
  #[error("builder is not valid: already built")]
  BuilderConsumed,

  /// A document refers back to itself and cannot be rendered as JSON.
  #[error("cyclic structure cannot be rendered")]
  CyclicStructure,

  /// A JSON array did not hold a single element kind.
  #[error("array elements are not of a single kind")]
  MixedArray,
}

/// Coarse classification of [`NativeError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  InvalidArgument,
  IllegalState,
  EndOfSequence,
  OutOfRange,
}

impl NativeError {
  pub fn kind(&self) -> ErrorKind {
    match self {
      NativeError::InvalidKey(_)
      | NativeError::InvalidArgument(_)
      | NativeError::BuilderConsumed
      | NativeError::CyclicStructure
      | NativeError::MixedArray => ErrorKind::InvalidArgument,
      NativeError::IllegalState(_) => ErrorKind::IllegalState,
      NativeError::NoSuchElement => ErrorKind::EndOfSequence,
      NativeError::IndexOutOfBounds { .. } => ErrorKind::OutOfRange,
    }
  }

  pub(crate) fn invalid_key(message: impl Into<String>) -> Self {
    Self::InvalidKey(message.into())
  }
}
