use super::{Field, FieldId, Name};
use crate::Result;
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Distinguishes entities (which own storage rows) from embeddables
    /// (which are flattened into their owner's row)
    pub kind: ModelKind,

    /// Properties declared by the model, in declaration order
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Entity with its own identity and storage row
    Entity,

    /// Value object flattened into the owning entity's row
    Embeddable,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelId(pub usize);

impl Model {
    pub fn is_entity(&self) -> bool {
        matches!(self.kind, ModelKind::Entity)
    }

    pub fn is_embeddable(&self) -> bool {
        matches!(self.kind, ModelKind::Embeddable)
    }

    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name.app_name == name)
    }

    pub(crate) fn verify(&self) -> Result<()> {
        for (index, field) in self.fields.iter().enumerate() {
            assert_eq!(
                field.id,
                self.id.field(index),
                "field ID out of sync with declaration position"
            );

            if self.fields[..index]
                .iter()
                .any(|prior| prior.name.app_name == field.name.app_name)
            {
                return Err(crate::Error::invalid_schema(format!(
                    "model `{}` declares property `{}` more than once",
                    self.name.upper_camel_case(),
                    field.name.app_name,
                )));
            }
        }

        Ok(())
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
