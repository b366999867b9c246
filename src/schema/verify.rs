use super::{EntityMeta, FieldPath, Result};
use indexmap::IndexMap;

use std::collections::HashSet;

struct Verify<'a> {
    meta: &'a EntityMeta,
}

impl EntityMeta {
    pub(super) fn verify(&self) -> Result<()> {
        Verify { meta: self }.verify()
    }
}

impl Verify<'_> {
    fn verify(&self) -> Result<()> {
        debug_assert!(self.verify_paths_are_unique());

        self.verify_columns_are_unique()?;
        Ok(())
    }

    /// Logical paths cannot collide: each nesting level's property name is
    /// locally unique, which the schema enforces at declaration time.
    fn verify_paths_are_unique(&self) -> bool {
        let mut paths = HashSet::new();

        for field in &self.meta.fields {
            assert!(paths.insert(&field.path), "duplicate path {:?}", field.path);
        }

        true
    }

    fn verify_columns_are_unique(&self) -> Result<()> {
        let mut by_column: IndexMap<&str, Vec<&FieldPath>> = IndexMap::new();

        for field in &self.meta.fields {
            by_column
                .entry(field.column.as_str())
                .or_default()
                .push(&field.path);
        }

        for (column, paths) in &by_column {
            if paths.len() > 1 {
                return Err(crate::Error::duplicate_column(
                    self.meta.name.upper_camel_case(),
                    *column,
                    paths.iter().map(|path| path.dotted()).collect(),
                ));
            }
        }

        Ok(())
    }
}
