use super::logical_plan::PlanNodeRef;
use crate::{catalog::schema::SchemaRef, types::expr::Expr};

/// Literal row source, e.g. the rows of `INSERT ... VALUES` when the insert
/// is fed by a child instead of carrying raw rows.
#[derive(Debug)]
pub struct ValuesPlanNode {
    output_schema: SchemaRef,
    rows: Vec<Vec<Expr>>,
}

impl ValuesPlanNode {
    pub fn new(output_schema: SchemaRef, rows: Vec<Vec<Expr>>) -> Self {
        Self {
            output_schema,
            rows,
        }
    }

    pub fn output_schema(&self) -> &SchemaRef {
        &self.output_schema
    }

    pub fn rows(&self) -> &[Vec<Expr>] {
        &self.rows
    }

    pub fn children(&self) -> &[PlanNodeRef] {
        &[]
    }

    pub(crate) fn with_children(&self, children: Vec<PlanNodeRef>) -> Self {
        assert!(children.is_empty(), "Values can't take child plans.");
        Self::new(self.output_schema.clone(), self.rows.clone())
    }
}
