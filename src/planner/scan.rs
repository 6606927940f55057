use super::logical_plan::PlanNodeRef;
use crate::{
    catalog::{schema::Schema, schema::SchemaRef, tableinfo::TableInfo, TableOid},
    types::expr::{Expr, ExprRef},
};

/// Sequential scan over one table, optionally keeping only the tuples the
/// predicate evaluates to true for.
#[derive(Debug)]
pub struct SeqScanPlanNode {
    output_schema: SchemaRef,
    predicate: Option<ExprRef>,
    table_oid: TableOid,
}

impl SeqScanPlanNode {
    pub fn new(output_schema: SchemaRef, predicate: Option<ExprRef>, table_oid: TableOid) -> Self {
        Self {
            output_schema,
            predicate,
            table_oid,
        }
    }

    pub fn output_schema(&self) -> &SchemaRef {
        &self.output_schema
    }

    pub fn predicate(&self) -> Option<&Expr> {
        self.predicate.as_deref()
    }

    pub fn table_oid(&self) -> TableOid {
        self.table_oid
    }

    pub fn children(&self) -> &[PlanNodeRef] {
        &[]
    }

    pub(crate) fn with_children(&self, children: Vec<PlanNodeRef>) -> Self {
        assert!(children.is_empty(), "SeqScan can't take child plans.");
        Self::new(self.output_schema.clone(), self.predicate.clone(), self.table_oid)
    }

    /// every column of the table, qualified as `table.column`
    pub fn infer_scan_schema(table_info: &TableInfo) -> Schema {
        Schema::new(
            table_info
                .schema
                .columns
                .iter()
                .map(|col| col.qualified(&table_info.name))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        catalog::{column::Column, Catalog},
        types::LogicalType,
    };

    #[test]
    fn test_infer_scan_schema() {
        let mut catalog = Catalog::default();
        let info = catalog
            .create_table(
                "user",
                Schema::new(vec![
                    Column::new(LogicalType::Int64, "id"),
                    Column::new(LogicalType::String, "name"),
                ]),
            )
            .unwrap();

        let schema = SeqScanPlanNode::infer_scan_schema(&info);

        assert_eq!(
            schema,
            Schema::new(vec![
                Column::new(LogicalType::Int64, "user.id"),
                Column::new(LogicalType::String, "user.name"),
            ])
        );
    }

    #[test]
    fn test_accessors() {
        let node = SeqScanPlanNode::new(
            Arc::new(Schema::default()),
            Some(Arc::new(Expr::column(0, "id"))),
            4,
        );

        assert_eq!(node.table_oid(), 4);
        assert_eq!(node.predicate(), Some(&Expr::column(0, "id")));
        assert!(node.children().is_empty());
    }

    #[test]
    #[should_panic(expected = "SeqScan can't take child plans.")]
    fn test_with_children_rejects_child() {
        let node = SeqScanPlanNode::new(Arc::new(Schema::default()), None, 0);
        let child = crate::planner::logical_plan::PlanNode::from(SeqScanPlanNode::new(
            Arc::new(Schema::default()),
            None,
            1,
        ))
        .into_ref();
        node.with_children(vec![child]);
    }
}
