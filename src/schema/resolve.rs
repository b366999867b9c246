use super::{
    app::{self, Embedded, Field, FieldTy, Model},
    prefix::{resolve_prefix, PrefixBehavior},
    EntityMeta, FieldPath, Projection, ResolvedField, ResolvedKind,
};
use crate::Result;

/// Resolves an entity's declared-property tree into [`EntityMeta`].
#[derive(Debug)]
pub struct Resolver {
    /// Applied when an embedding has an explicit prefix but no explicit
    /// behavior of its own
    default_prefix_behavior: PrefixBehavior,
}

/// Used to track state during one entity's resolution pass
struct ResolveEntity<'a> {
    resolver: &'a Resolver,

    schema: &'a app::Schema,

    /// The entity being resolved
    entity: &'a Model,

    /// Models on the current walk path, for cycle detection
    stack: Vec<app::ModelId>,

    /// Fields as they are resolved, in depth-first declaration order
    fields: Vec<ResolvedField>,
}

impl Resolver {
    pub fn new() -> Self {
        Self {
            default_prefix_behavior: PrefixBehavior::default(),
        }
    }

    pub fn default_prefix_behavior(&mut self, behavior: PrefixBehavior) -> &mut Self {
        self.default_prefix_behavior = behavior;
        self
    }

    /// Walks `entity`'s property tree and produces its verified metadata.
    ///
    /// Embedded targets are looked up at traversal time, so the schema may
    /// contain forward references. Resolution reads the schema only; the
    /// same embeddable may be reached from any number of embeddings, each
    /// with its own accumulated prefix.
    pub fn resolve(
        &self,
        schema: &app::Schema,
        entity: impl Into<app::ModelId>,
    ) -> Result<EntityMeta> {
        let id = entity.into();

        let Some(entity) = schema.models.get(&id) else {
            return Err(crate::Error::invalid_schema(format!(
                "{id:?} is not declared in the schema"
            )));
        };

        if !entity.is_entity() {
            return Err(crate::Error::invalid_schema(format!(
                "`{}` is an embeddable and cannot be resolved as an entity",
                entity.name.upper_camel_case(),
            )));
        }

        let mut resolve = ResolveEntity {
            resolver: self,
            schema,
            entity,
            stack: vec![id],
            fields: vec![],
        };

        resolve.walk_fields(entity, "", &FieldPath::root(), &Projection::identity())?;

        let meta = EntityMeta {
            id,
            name: entity.name.clone(),
            width: entity.fields.len(),
            fields: resolve.fields,
        };

        // Verify the resolved metadata before it is published
        meta.verify()?;

        Ok(meta)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ResolveEntity<'a> {
    fn walk_fields(
        &mut self,
        model: &Model,
        prefix: &str,
        path: &FieldPath,
        projection: &Projection,
    ) -> Result<()> {
        for (index, field) in model.fields.iter().enumerate() {
            let path = path.child(&field.name.app_name);
            let projection = projection.child(index);
            let column = format!("{prefix}{}", field.name.storage_name());

            match &field.ty {
                FieldTy::Scalar(scalar) => {
                    self.fields.push(ResolvedField {
                        path,
                        projection,
                        column,
                        kind: ResolvedKind::Scalar(scalar.ty),
                        nullable: field.nullable,
                    });
                }
                FieldTy::Embedded(embedded) => {
                    let target = self.embedded_target(embedded, &path)?;

                    self.fields.push(ResolvedField {
                        path: path.clone(),
                        projection: projection.clone(),
                        column,
                        kind: ResolvedKind::Embedded {
                            width: target.fields.len(),
                        },
                        nullable: field.nullable,
                    });

                    let prefix = self.embedding_prefix(field, embedded, prefix);

                    self.stack.push(target.id);
                    self.walk_fields(target, &prefix, &path, &projection)?;
                    self.stack.pop();
                }
            }
        }

        Ok(())
    }

    fn embedded_target(&self, embedded: &Embedded, path: &FieldPath) -> Result<&'a Model> {
        let Some(target) = embedded.target(self.schema) else {
            return Err(crate::Error::unresolved_embeddable(
                self.entity.name.upper_camel_case(),
                path.dotted(),
                embedded.target,
            ));
        };

        if !target.is_embeddable() {
            return Err(crate::Error::invalid_schema(format!(
                "`{}::{}` embeds `{}`, which is an entity, not an embeddable",
                self.entity.name.upper_camel_case(),
                path,
                target.name.upper_camel_case(),
            )));
        }

        if self.stack.contains(&target.id) {
            return Err(crate::Error::invalid_schema(format!(
                "embeddable cycle: `{}::{}` embeds `{}`, which already contains it",
                self.entity.name.upper_camel_case(),
                path,
                target.name.upper_camel_case(),
            )));
        }

        Ok(target)
    }

    /// The accumulated prefix carried into the embedding's own properties.
    ///
    /// A wholly unconfigured embedding contributes its property name as the
    /// prefix segment; this is what keeps an unprefixed nested embedding's
    /// columns distinct. Behavior applies one level at a time: a child's
    /// `Relative` concatenates onto its immediate parent's resolved prefix,
    /// never transitively onto the root.
    fn embedding_prefix(&self, field: &Field, embedded: &Embedded, ancestor: &str) -> String {
        match (&embedded.prefix, embedded.prefix_behavior) {
            (None, None) => format!("{ancestor}{}_", field.name.storage_name()),
            (None, Some(behavior)) => resolve_prefix(None, behavior, ancestor),
            (Some(own), behavior) => {
                let behavior = behavior.unwrap_or(self.resolver.default_prefix_behavior);
                resolve_prefix(Some(own), behavior, ancestor)
            }
        }
    }
}
