//! Application-level declarations: entities, embeddables, and their
//! properties, as produced by the declaration front-end.

mod embedded;
pub use embedded::Embedded;

mod field;
pub use field::{Field, FieldId, FieldName, FieldScalar, FieldTy};

mod model;
pub use model::{Model, ModelId, ModelKind};

mod schema;
pub use schema::Schema;

use super::Name;
