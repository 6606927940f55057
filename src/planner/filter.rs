use super::logical_plan::PlanNodeRef;
use crate::{
    catalog::schema::SchemaRef,
    types::expr::{Expr, ExprRef},
};

/// Keeps the tuples of its single child the predicate evaluates to true for.
#[derive(Debug)]
pub struct FilterPlanNode {
    output_schema: SchemaRef,
    predicate: ExprRef,
    child: PlanNodeRef,
}

impl FilterPlanNode {
    pub fn new(output_schema: SchemaRef, predicate: ExprRef, child: PlanNodeRef) -> Self {
        Self {
            output_schema,
            predicate,
            child,
        }
    }

    pub fn output_schema(&self) -> &SchemaRef {
        &self.output_schema
    }

    pub fn predicate(&self) -> &Expr {
        &self.predicate
    }

    pub fn predicate_ref(&self) -> &ExprRef {
        &self.predicate
    }

    pub fn children(&self) -> &[PlanNodeRef] {
        std::slice::from_ref(&self.child)
    }

    pub fn get_child_plan(&self) -> &PlanNodeRef {
        &self.child
    }

    pub(crate) fn with_children(&self, mut children: Vec<PlanNodeRef>) -> Self {
        assert!(children.len() == 1, "Filter should have exactly one child plan.");
        Self::new(
            self.output_schema.clone(),
            self.predicate.clone(),
            children.remove(0),
        )
    }
}
