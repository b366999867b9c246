use super::Error;
use crate::schema::app::ModelId;

/// Error when metadata is requested for an entity that was never registered.
///
/// Recoverable: the caller may register the entity and retry.
#[derive(Debug)]
pub(super) struct NotRegisteredError {
    model: ModelId,
}

impl std::error::Error for NotRegisteredError {}

impl core::fmt::Display for NotRegisteredError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{:?} is not registered; did you forget to call `Registry::register`?",
            self.model
        )
    }
}

impl Error {
    /// Creates a not registered error for the given model.
    pub fn not_registered(model: ModelId) -> Error {
        Error::from(super::ErrorKind::NotRegistered(NotRegisteredError {
            model,
        }))
    }

    /// Returns `true` if this error is a not registered error.
    pub fn is_not_registered(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::NotRegistered(_))
    }
}
