use crate::schema::{
    app::{Model, ModelId, Schema},
    PrefixBehavior,
};

#[derive(Debug, Clone)]
pub struct Embedded {
    /// The embeddable model being referenced. Looked up in the schema at
    /// traversal time, so the target may be declared after its first use.
    pub target: ModelId,

    /// Column-name prefix contributed by this embedding. When absent, the
    /// embedding's own property name (plus `_`) becomes the prefix segment.
    pub prefix: Option<String>,

    /// How the prefix combines with the ancestor prefix. When absent, the
    /// resolver's configured default applies.
    pub prefix_behavior: Option<PrefixBehavior>,
}

impl Embedded {
    /// An embedding with no prefix configuration.
    pub fn new(target: impl Into<ModelId>) -> Self {
        Self {
            target: target.into(),
            prefix: None,
            prefix_behavior: None,
        }
    }

    pub fn target<'a>(&self, schema: &'a Schema) -> Option<&'a Model> {
        schema.models.get(&self.target)
    }
}
