use super::logical_plan::PlanNodeRef;
use crate::{
    catalog::schema::SchemaRef,
    types::expr::{Expr, ExprRef},
};

/// Equi-join of two inputs on a key computed per tuple.
///
/// Child 0 is the left (build) input and child 1 the right (probe) input.
/// An executor indexes every left tuple by its left key, then emits
/// `left ++ right` for each right tuple whose right key equals it. Null and
/// NaN keys never match.
#[derive(Debug)]
pub struct HashJoinPlanNode {
    output_schema: SchemaRef,
    children: Vec<PlanNodeRef>,
    /// computes the join key of a left tuple
    left_key_expression: ExprRef,
    /// computes the join key of a right tuple
    right_key_expression: ExprRef,
}

impl HashJoinPlanNode {
    /// Key expression types are not checked here, the planner must have
    /// done that before building the node.
    pub fn new(
        output_schema: SchemaRef,
        children: Vec<PlanNodeRef>,
        left_key_expression: ExprRef,
        right_key_expression: ExprRef,
    ) -> Self {
        Self {
            output_schema,
            children,
            left_key_expression,
            right_key_expression,
        }
    }

    pub fn output_schema(&self) -> &SchemaRef {
        &self.output_schema
    }

    pub fn children(&self) -> &[PlanNodeRef] {
        &self.children
    }

    pub fn left_join_key_expression(&self) -> &Expr {
        &self.left_key_expression
    }

    pub fn right_join_key_expression(&self) -> &Expr {
        &self.right_key_expression
    }

    pub fn get_left_plan(&self) -> &PlanNodeRef {
        assert!(
            self.children.len() == 2,
            "Hash joins should have exactly two children plans."
        );
        &self.children[0]
    }

    pub fn get_right_plan(&self) -> &PlanNodeRef {
        assert!(
            self.children.len() == 2,
            "Hash joins should have exactly two children plans."
        );
        &self.children[1]
    }

    pub(crate) fn with_children(&self, children: Vec<PlanNodeRef>) -> Self {
        assert!(
            children.len() == 2,
            "Hash joins should have exactly two children plans."
        );
        Self::new(
            self.output_schema.clone(),
            children,
            self.left_key_expression.clone(),
            self.right_key_expression.clone(),
        )
    }
}
