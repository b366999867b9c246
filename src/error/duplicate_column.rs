use super::Error;

/// Error when two or more logical paths on one entity resolve to the same
/// physical column name.
///
/// Raised at registration time, before any metadata is published. Silent
/// last-write-wins resolution is never attempted: two logical fields sharing
/// one column would overwrite each other in storage.
#[derive(Debug)]
pub(super) struct DuplicateColumnError {
    entity: Box<str>,
    column: Box<str>,
    paths: Vec<Box<str>>,
}

impl std::error::Error for DuplicateColumnError {}

impl core::fmt::Display for DuplicateColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "duplicate column `{}` on entity `{}`: produced by ",
            self.column, self.entity
        )?;
        for (i, path) in self.paths.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "`{path}`")?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates a duplicate column error naming the entity, the colliding
    /// column, and every logical path that produced it.
    pub fn duplicate_column(
        entity: impl Into<String>,
        column: impl Into<String>,
        paths: Vec<String>,
    ) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumnError {
            entity: entity.into().into(),
            column: column.into().into(),
            paths: paths.into_iter().map(Into::into).collect(),
        }))
    }

    /// Returns `true` if this error is a duplicate column error.
    pub fn is_duplicate_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumn(_))
    }
}
