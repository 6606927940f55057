use std::sync::Arc;

use super::{schema::SchemaRef, TableOid};
use crate::store::table::TableHeap;

#[derive(Debug)]
pub struct TableInfo {
    pub name: String,
    pub oid: TableOid,
    pub schema: SchemaRef,
    pub heap: TableHeap,
}

pub type TableInfoRef = Arc<TableInfo>;

impl TableInfo {
    pub fn new(table_name: &str, oid: TableOid, schema: &SchemaRef) -> Self {
        Self {
            name: table_name.to_owned(),
            oid,
            schema: Arc::clone(schema),
            heap: TableHeap::new(),
        }
    }
}
