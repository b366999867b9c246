use super::{app::ModelId, FieldPath, Name, Projection};
use crate::value;

/// Fully resolved storage metadata for one entity.
///
/// Built once by [`super::Resolver`], verified collision-free, and immutable
/// thereafter. Field order is the depth-first declaration order of the
/// entity's property tree.
#[derive(Debug, Clone)]
pub struct EntityMeta {
    /// The entity this metadata describes.
    pub id: ModelId,

    /// Name of the entity.
    pub name: Name,

    /// Number of declared-field slots in the entity's runtime record shape.
    pub width: usize,

    /// Every resolved field: scalar leaves plus one marker per embedding.
    pub fields: Vec<ResolvedField>,
}

/// One resolved field: a scalar leaf, or the marker for an embedding.
#[derive(Debug, Clone)]
pub struct ResolvedField {
    /// Logical path of property names from the entity root.
    pub path: FieldPath,

    /// Positional steps into the nested record shape.
    pub projection: Projection,

    /// Flat physical column name, used verbatim by storage.
    pub column: String,

    pub kind: ResolvedKind,

    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedKind {
    /// Scalar leaf backed by one storage column.
    Scalar(value::Type),

    /// Embedding marker: addresses the whole sub-object as one comparable
    /// unit. Carries the target's record width so hydration can size nested
    /// records without consulting the declarations.
    Embedded { width: usize },
}

impl ResolvedField {
    pub fn is_scalar(&self) -> bool {
        matches!(self.kind, ResolvedKind::Scalar(_))
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self.kind, ResolvedKind::Embedded { .. })
    }
}

impl EntityMeta {
    /// The fields usable for equality and ordering comparisons.
    ///
    /// Embedding markers are included alongside their descendant scalars;
    /// consumers that only want storage-backed leaves use [`scalars`].
    ///
    /// [`scalars`]: EntityMeta::scalars
    pub fn comparable_props(&self) -> impl Iterator<Item = &ResolvedField> {
        self.fields.iter()
    }

    /// The scalar leaves, i.e. the fields backed by storage columns.
    pub fn scalars(&self) -> impl Iterator<Item = &ResolvedField> {
        self.fields.iter().filter(|field| field.is_scalar())
    }

    /// The physical column names, in resolution order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.column.as_str())
    }

    pub fn field_by_column(&self, column: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|field| field.column == column)
    }

    pub fn field_by_path(&self, path: &FieldPath) -> Option<&ResolvedField> {
        self.fields.iter().find(|field| field.path == *path)
    }

    /// The record width of the embedding marker at `projection`, if any.
    pub fn embedded_width(&self, projection: &[usize]) -> Option<usize> {
        self.fields.iter().find_map(|field| match field.kind {
            ResolvedKind::Embedded { width } if field.projection.as_slice() == projection => {
                Some(width)
            }
            _ => None,
        })
    }
}
