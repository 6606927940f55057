//! Reference executor: interprets a plan tree and materializes the tuples
//! each node produces. Children run before their parent.

mod hash_join;
mod insert;

use std::sync::Arc;

use log::debug;

use crate::{
    catalog::{schema::Schema, Catalog},
    error::{Error::Internal, Result},
    fmt_err,
    planner::{
        filter::FilterPlanNode,
        logical_plan::{PlanNode, PlanNodeRef},
        scan::SeqScanPlanNode,
        values::ValuesPlanNode,
    },
    types::{expr::Expr, tuple::Tuple, value::Value},
};

pub struct ExecutorContext {
    pub catalog: Arc<Catalog>,
}

impl ExecutorContext {
    pub fn new(catalog: &Arc<Catalog>) -> Self {
        Self {
            catalog: Arc::clone(catalog),
        }
    }
}

pub fn execute(ctx: &ExecutorContext, plan: &PlanNodeRef) -> Result<Vec<Tuple>> {
    debug!("execute {plan}");
    match plan.as_ref() {
        PlanNode::SeqScan(node) => execute_seq_scan(ctx, node),
        PlanNode::Values(node) => execute_values(node),
        PlanNode::Filter(node) => execute_filter(ctx, node),
        PlanNode::HashJoin(node) => hash_join::execute_hash_join(ctx, node),
        PlanNode::Insert(node) => insert::execute_insert(ctx, node),
    }
}

/// schema of the tuples `plan` produces; inserts produce none
fn output_schema_of(plan: &PlanNodeRef) -> Result<&Schema> {
    match plan.output_schema() {
        Some(schema) => Ok(schema.as_ref()),
        None => Err(Internal(fmt_err!("{plan} produces no tuples to read"))),
    }
}

fn is_true(predicate: &Expr, tuple: &Tuple, schema: &Schema) -> Result<bool> {
    Ok(matches!(predicate.evaluate(tuple, schema)?, Value::Bool(true)))
}

fn execute_seq_scan(ctx: &ExecutorContext, node: &SeqScanPlanNode) -> Result<Vec<Tuple>> {
    let info = ctx.catalog.table(node.table_oid())?;
    let tuples = info.heap.scan();

    match node.predicate() {
        Some(predicate) => {
            let mut output = vec![];
            for tuple in tuples {
                if is_true(predicate, &tuple, node.output_schema())? {
                    output.push(tuple);
                }
            }
            Ok(output)
        }
        None => Ok(tuples),
    }
}

fn execute_values(node: &ValuesPlanNode) -> Result<Vec<Tuple>> {
    let empty = Tuple::empty();
    let schema = Schema::default();

    node.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|expr| expr.evaluate(&empty, &schema))
                .collect::<Result<Vec<_>>>()
                .map(Tuple)
        })
        .collect()
}

fn execute_filter(ctx: &ExecutorContext, node: &FilterPlanNode) -> Result<Vec<Tuple>> {
    let child = node.get_child_plan();
    let schema = output_schema_of(child)?;

    let mut output = vec![];
    for tuple in execute(ctx, child)? {
        if is_true(node.predicate(), &tuple, schema)? {
            output.push(tuple);
        }
    }
    Ok(output)
}
