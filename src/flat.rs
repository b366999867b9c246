//! Converts nested instance graphs to and from flat column records.
//!
//! Both directions are pure with respect to metadata and never fail for
//! structurally valid metadata: an absent nested object is legitimate
//! "all-null" data, not an error.

use crate::{
    schema::{EntityMeta, ResolvedKind},
    value::{Value, ValueRecord},
};

use indexmap::IndexMap;

/// A flat column-name-to-value record, as handed to or received from
/// storage.
///
/// Entry order follows resolution order on the way out of [`flatten`];
/// arbitrary orders are accepted on the way into [`hydrate`]. A column
/// absent from the record is distinct from a column present with a null
/// value: absence marks a subtree that was never present at all.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlatRecord {
    entries: IndexMap<String, Value>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.entries.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(column, value)| (column.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for FlatRecord {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Converts a nested instance into a flat column record.
///
/// Each scalar leaf is read off the instance by its projection. An absent
/// (null) intermediate embedded object yields no entry for any of its
/// descendant columns; nothing is defaulted and no intermediates are
/// synthesized. Embedding markers never produce entries.
///
/// # Panics
///
/// Panics if the instance's record shape does not match the metadata.
pub fn flatten(instance: &Value, meta: &EntityMeta) -> FlatRecord {
    let mut record = FlatRecord::new();

    if let Value::Record(fields) = instance {
        assert_eq!(
            fields.len(),
            meta.width,
            "instance shape does not match `{}` metadata",
            meta.name.upper_camel_case(),
        );
    }

    for field in meta.scalars() {
        if let Some(value) = leaf(instance, field.projection.as_slice()) {
            if let ResolvedKind::Scalar(ty) = field.kind {
                debug_assert!(
                    value.is_a(ty),
                    "value {value:?} does not fit column `{}`",
                    field.column,
                );
            }

            record.insert(field.column.clone(), value.clone());
        }
    }

    record
}

/// Reconstructs a nested instance from a flat column record.
///
/// Starts from an all-null record and, for each scalar leaf column present
/// in the input, instantiates the intermediate embedded records on demand
/// and assigns the leaf value. Columns absent from the input leave their
/// subtree null.
pub fn hydrate(record: &FlatRecord, meta: &EntityMeta) -> Value {
    let mut fields = ValueRecord::nulls(meta.width);

    for field in meta.scalars() {
        let Some(value) = record.get(&field.column) else {
            continue;
        };

        *slot_mut(&mut fields, meta, field.projection.as_slice()) = value.clone();
    }

    Value::Record(fields)
}

/// Reads the value at `steps`, or `None` if an intermediate is absent.
fn leaf<'a>(value: &'a Value, steps: &[usize]) -> Option<&'a Value> {
    let [first, rest @ ..] = steps else {
        return Some(value);
    };

    match value {
        Value::Record(record) => leaf(&record[*first], rest),
        Value::Null => None,
        _ => panic!("cannot project through scalar value {value:?}"),
    }
}

/// The slot at `steps`, instantiating null intermediates along the way.
fn slot_mut<'a>(root: &'a mut ValueRecord, meta: &EntityMeta, steps: &[usize]) -> &'a mut Value {
    let mut record = root;
    let (last, intermediate) = steps.split_last().expect("scalar projection is never empty");

    for (depth, step) in intermediate.iter().enumerate() {
        let slot = &mut record[*step];

        if slot.is_null() {
            let width = meta
                .embedded_width(&steps[..=depth])
                .expect("embedding marker for projection");
            *slot = Value::Record(ValueRecord::nulls(width));
        }

        record = match slot {
            Value::Record(record) => record,
            _ => panic!("cannot project through scalar value {slot:?}"),
        };
    }

    &mut record[*last]
}
