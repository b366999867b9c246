use super::Error;
use crate::schema::app::ModelId;

/// Error when an embedding references a model that is absent from the schema
/// by the time traversal reaches it.
///
/// Embedded targets are looked up lazily, so declarations may reference
/// not-yet-defined models; the reference must resolve by registration time.
#[derive(Debug)]
pub(super) struct UnresolvedEmbeddableError {
    entity: Box<str>,
    path: Box<str>,
    target: ModelId,
}

impl std::error::Error for UnresolvedEmbeddableError {}

impl core::fmt::Display for UnresolvedEmbeddableError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unresolved embeddable: `{}::{}` references {:?}, which is not in the schema",
            self.entity, self.path, self.target
        )
    }
}

impl Error {
    /// Creates an unresolved embeddable error for the embedding at `path`.
    pub fn unresolved_embeddable(
        entity: impl Into<String>,
        path: impl Into<String>,
        target: ModelId,
    ) -> Error {
        Error::from(super::ErrorKind::UnresolvedEmbeddable(
            UnresolvedEmbeddableError {
                entity: entity.into().into(),
                path: path.into().into(),
                target,
            },
        ))
    }

    /// Returns `true` if this error is an unresolved embeddable error.
    pub fn is_unresolved_embeddable(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnresolvedEmbeddable(_))
    }
}
