use std::collections::HashMap;

use log::{debug, trace};

use super::{execute, output_schema_of, ExecutorContext};
use crate::{
    error::Result,
    planner::hash_join::HashJoinPlanNode,
    types::{tuple::Tuple, value::Value},
};

/// Builds a hash table over the whole left input, then probes it with each
/// right tuple. Every left tuple sharing a key is kept; null and NaN keys
/// never match anything, another null or NaN included.
pub(super) fn execute_hash_join(
    ctx: &ExecutorContext,
    node: &HashJoinPlanNode,
) -> Result<Vec<Tuple>> {
    let left_plan = node.get_left_plan();
    let right_plan = node.get_right_plan();
    let left_schema = output_schema_of(left_plan)?;
    let right_schema = output_schema_of(right_plan)?;

    // build
    let mut table: HashMap<Value, Vec<Tuple>> = HashMap::new();
    let mut build_rows = 0;
    for tuple in execute(ctx, left_plan)? {
        let key = node.left_join_key_expression().evaluate(&tuple, left_schema)?;
        if key.is_null() || key.is_nan() {
            trace!("skip left tuple with unknown key {tuple:?}");
            continue;
        }
        table.entry(key).or_default().push(tuple);
        build_rows += 1;
    }
    debug!("hash join built {} keys from {build_rows} tuples", table.len());

    // probe
    let mut output = vec![];
    for tuple in execute(ctx, right_plan)? {
        let key = node
            .right_join_key_expression()
            .evaluate(&tuple, right_schema)?;
        if key.is_null() || key.is_nan() {
            continue;
        }
        if let Some(matches) = table.get(&key) {
            for left in matches {
                output.push(Tuple::merge(left, &tuple));
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        catalog::{column::Column, schema::Schema},
        planner::{
            logical_plan::{PlanNode, PlanNodeRef},
            values::ValuesPlanNode,
        },
        types::{expr::Expr, LogicalType},
    };

    fn schema() -> Arc<Schema> {
        Arc::new(Schema::new(vec![
            Column::new(LogicalType::Int64, "k"),
            Column::new(LogicalType::String, "v"),
        ]))
    }

    fn values(rows: Vec<(Value, &str)>) -> PlanNodeRef {
        PlanNode::from(ValuesPlanNode::new(
            schema(),
            rows.into_iter()
                .map(|(k, v)| vec![Expr::Literal(k), Expr::Literal(Value::String(v.to_owned()))])
                .collect(),
        ))
        .into_ref()
    }

    fn join(left: PlanNodeRef, right: PlanNodeRef) -> PlanNodeRef {
        PlanNode::from(HashJoinPlanNode::new(
            Arc::new(Schema::merge(&schema(), &schema())),
            vec![left, right],
            Arc::new(Expr::column(0, "k")),
            Arc::new(Expr::column(0, "k")),
        ))
        .into_ref()
    }

    fn run(plan: &PlanNodeRef) -> Vec<Tuple> {
        let ctx = ExecutorContext::new(&Arc::new(crate::catalog::Catalog::default()));
        execute(&ctx, plan).unwrap()
    }

    fn out(lk: i64, lv: &str, rk: i64, rv: &str) -> Tuple {
        Tuple(vec![
            Value::Int(lk),
            Value::String(lv.to_owned()),
            Value::Int(rk),
            Value::String(rv.to_owned()),
        ])
    }

    #[test]
    fn test_unmatched_tuples_dropped() {
        let plan = join(
            values(vec![(Value::Int(1), "a"), (Value::Int(2), "b")]),
            values(vec![(Value::Int(1), "x"), (Value::Int(3), "y")]),
        );

        assert_eq!(run(&plan), vec![out(1, "a", 1, "x")]);
    }

    #[test]
    fn test_null_keys_never_match() {
        let plan = join(
            values(vec![(Value::Null, "a"), (Value::Int(2), "b")]),
            values(vec![(Value::Null, "x"), (Value::Int(2), "y")]),
        );

        assert_eq!(run(&plan), vec![out(2, "b", 2, "y")]);
    }

    #[test]
    fn test_nan_keys_never_match() {
        let plan = join(
            values(vec![(Value::Float(f64::NAN), "a"), (Value::Float(1.5), "b")]),
            values(vec![(Value::Float(f64::NAN), "x"), (Value::Float(1.5), "y")]),
        );

        assert_eq!(
            run(&plan),
            vec![Tuple(vec![
                Value::Float(1.5),
                Value::String("b".to_owned()),
                Value::Float(1.5),
                Value::String("y".to_owned()),
            ])]
        );
    }

    #[test]
    fn test_duplicate_build_keys_kept() {
        let plan = join(
            values(vec![
                (Value::Int(1), "a"),
                (Value::Int(1), "b"),
                (Value::Int(2), "c"),
            ]),
            values(vec![(Value::Int(1), "x"), (Value::Int(1), "y")]),
        );

        let mut result = run(&plan);
        result.sort_by_key(|t| format!("{t:?}"));

        assert_eq!(
            result,
            vec![
                out(1, "a", 1, "x"),
                out(1, "a", 1, "y"),
                out(1, "b", 1, "x"),
                out(1, "b", 1, "y"),
            ]
        );
    }

    #[test]
    fn test_empty_build_side() {
        let plan = join(values(vec![]), values(vec![(Value::Int(1), "x")]));

        assert!(run(&plan).is_empty());
    }

    #[test]
    #[should_panic(expected = "Hash joins should have exactly two children plans.")]
    fn test_malformed_join_panics() {
        let plan = PlanNode::from(HashJoinPlanNode::new(
            schema(),
            vec![values(vec![])],
            Arc::new(Expr::column(0, "k")),
            Arc::new(Expr::column(0, "k")),
        ))
        .into_ref();

        let _ = run(&plan);
    }
}
