use std::sync::Arc;

use serde_derive::{Deserialize, Serialize};

use super::column::Column;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    pub columns: Vec<Column>,
}

/// Schemas are shared between plan nodes and the catalog.
pub type SchemaRef = Arc<Schema>;

impl Schema {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|col| col.name == name)
    }

    /// output layout of a join: left columns, then right columns
    pub fn merge(left: &Schema, right: &Schema) -> Schema {
        Schema {
            columns: left
                .columns
                .iter()
                .chain(right.columns.iter())
                .cloned()
                .collect(),
        }
    }
}
