use crate::NativeError;

/// Carries a single value across an API boundary without widening its visibility.
///
/// The content is fixed at construction for callers outside this crate; see [`MutableEnvelope`]
/// for a carrier whose content can be replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
  content: Option<T>,
}

impl<T> Envelope<T> {
  /// An empty envelope.
  pub fn new() -> Self {
    Self { content: None }
  }

  pub fn with_content(content: T) -> Self {
    Self {
      content: Some(content),
    }
  }

  /// Fails if `content` is `None` and the envelope is not `nullable`.
  pub fn from_option(content: Option<T>, nullable: bool) -> Result<Self, NativeError> {
    if content.is_none() && !nullable {
      return Err(NativeError::InvalidArgument(
        "envelope content is required".to_string(),
      ));
    }
    Ok(Self { content })
  }

  pub fn has_content(&self) -> bool {
    self.content.is_some()
  }

  pub fn content(&self) -> Option<&T> {
    self.content.as_ref()
  }

  pub fn into_content(self) -> Option<T> {
    self.content
  }

  pub(crate) fn set_content(&mut self, content: Option<T>) {
    self.content = content;
  }
}

impl<T> Default for Envelope<T> {
  fn default() -> Self {
    Self::new()
  }
}

/// An [`Envelope`] whose content can be replaced by its holder.
#[derive(Debug, Clone, PartialEq)]
pub struct MutableEnvelope<T> {
  inner: Envelope<T>,
}

impl<T> MutableEnvelope<T> {
  pub fn new() -> Self {
    Self {
      inner: Envelope::new(),
    }
  }

  pub fn with_content(content: T) -> Self {
    Self {
      inner: Envelope::with_content(content),
    }
  }

  pub fn has_content(&self) -> bool {
    self.inner.has_content()
  }

  pub fn content(&self) -> Option<&T> {
    self.inner.content()
  }

  pub fn into_content(self) -> Option<T> {
    self.inner.into_content()
  }

  pub fn set_content(&mut self, content: Option<T>) {
    self.inner.set_content(content);
  }

  /// Seals the current content into an immutable envelope.
  pub fn freeze(self) -> Envelope<T> {
    self.inner
  }
}

impl<T> Default for MutableEnvelope<T> {
  fn default() -> Self {
    Self::new()
  }
}
