use super::{Field, FieldId, Model, ModelId};

use crate::Result;
use indexmap::IndexMap;

#[derive(Debug, Default)]
pub struct Schema {
    pub models: IndexMap<ModelId, Model>,
}

impl Schema {
    /// Builds a schema from explicitly constructed model declarations.
    ///
    /// Declaration order is preserved. Embedded targets are not resolved
    /// here; they may reference models appearing later in the slice and are
    /// only checked when an entity's metadata is resolved.
    pub fn from_models(models: &[Model]) -> Result<Self> {
        let mut schema = Self::default();

        for model in models {
            model.verify()?;

            if schema.models.insert(model.id, model.clone()).is_some() {
                return Err(crate::Error::invalid_schema(format!(
                    "{:?} is declared more than once (second declaration: `{}`)",
                    model.id,
                    model.name.upper_camel_case(),
                )));
            }
        }

        Ok(schema)
    }

    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    /// Get a field by ID
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model)
            .fields
            .get(id.index)
            .expect("invalid field ID")
    }
}
