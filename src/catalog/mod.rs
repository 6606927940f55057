pub mod column;
pub mod schema;
pub mod tableinfo;

use std::collections::HashMap;
use std::sync::Arc;

use log::info;

use self::{
    schema::Schema,
    tableinfo::{TableInfo, TableInfoRef},
};
use crate::{
    error::{Error::Catalog as CatalogErr, Result},
    fmt_err,
};

/// Opaque handle a plan node uses to name a table.
pub type TableOid = u32;

#[derive(Debug, Default)]
pub struct Catalog {
    // indexed by oid
    tables: Vec<TableInfoRef>,
    // table_name => oid
    table_names: HashMap<String, TableOid>,
}

impl Catalog {
    pub fn create_table(&mut self, table_name: &str, schema: Schema) -> Result<TableInfoRef> {
        if self.is_table_exist(table_name) {
            return Err(CatalogErr(fmt_err!("{table_name} is already exist")));
        }

        let oid = self.tables.len() as TableOid;
        let info = Arc::new(TableInfo::new(table_name, oid, &Arc::new(schema)));
        self.tables.push(Arc::clone(&info));
        self.table_names.insert(table_name.to_owned(), oid);
        info!("create table {table_name} with oid {oid}");

        Ok(info)
    }

    pub fn table(&self, oid: TableOid) -> Result<TableInfoRef> {
        match self.tables.get(oid as usize) {
            Some(info) => Ok(Arc::clone(info)),
            None => Err(CatalogErr(fmt_err!("table_oid={oid} is not exist"))),
        }
    }

    pub fn table_by_name(&self, table_name: &str) -> Option<TableInfoRef> {
        self.table_names
            .get(table_name)
            .and_then(|oid| self.tables.get(*oid as usize))
            .map(Arc::clone)
    }

    pub fn is_table_exist(&self, table_name: &str) -> bool {
        self.table_names.contains_key(table_name)
    }
}
