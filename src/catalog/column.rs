use serde_derive::{Deserialize, Serialize};

use crate::types::LogicalType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub column_type: LogicalType,
    pub name: String,
}

impl Column {
    pub fn new(column_type: LogicalType, name: impl Into<String>) -> Self {
        Self {
            column_type,
            name: name.into(),
        }
    }

    /// same column renamed to `table.column`, as scans expose it
    pub fn qualified(&self, table_name: &str) -> Self {
        Self::new(self.column_type, format!("{table_name}.{}", self.name))
    }
}
