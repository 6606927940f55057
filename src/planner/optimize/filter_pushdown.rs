use std::sync::Arc;

use log::debug;

use super::Optimizer;
use crate::planner::{
    logical_plan::{PlanNode, PlanNodeRef},
    scan::SeqScanPlanNode,
};

impl Optimizer {
    /// `Filter(pred) -> SeqScan` becomes `SeqScan(filter=pred)` as long as
    /// the scan doesn't carry a predicate of its own.
    pub(crate) fn merge_filter_scan(&self, plan: PlanNodeRef) -> PlanNodeRef {
        let plan = self.rewrite_children(&plan, Self::merge_filter_scan);

        let PlanNode::Filter(filter) = plan.as_ref() else {
            return plan;
        };
        let PlanNode::SeqScan(scan) = filter.get_child_plan().as_ref() else {
            return plan;
        };
        if scan.predicate().is_some() {
            return plan;
        }

        match self.catalog.table(scan.table_oid()) {
            Ok(info) => debug!("merge filter {} into scan of {}", filter.predicate(), info.name),
            Err(_) => debug!(
                "merge filter {} into scan of table_oid={}",
                filter.predicate(),
                scan.table_oid()
            ),
        }

        PlanNode::from(SeqScanPlanNode::new(
            Arc::clone(scan.output_schema()),
            Some(Arc::clone(filter.predicate_ref())),
            scan.table_oid(),
        ))
        .into_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{column::Column, schema::Schema, Catalog},
        planner::{
            filter::FilterPlanNode, hash_join::HashJoinPlanNode, insert::InsertPlanNode,
            logical_plan::PlanType,
        },
        types::{
            expr::{Expr, Operator},
            value::Value,
            LogicalType,
        },
    };

    fn optimizer() -> Optimizer {
        let mut catalog = Catalog::default();
        catalog
            .create_table("t", Schema::new(vec![Column::new(LogicalType::Int64, "k")]))
            .unwrap();
        Optimizer::new(&Arc::new(catalog))
    }

    fn scan(predicate: Option<Expr>) -> PlanNodeRef {
        PlanNode::from(SeqScanPlanNode::new(
            Arc::new(Schema::new(vec![Column::new(LogicalType::Int64, "t.k")])),
            predicate.map(Arc::new),
            0,
        ))
        .into_ref()
    }

    fn gt(n: i64) -> Expr {
        Expr::binary(Expr::column(0, "k"), Operator::Gt, Expr::Literal(Value::Int(n)))
    }

    fn filter(pred: Expr, child: PlanNodeRef) -> PlanNodeRef {
        PlanNode::from(FilterPlanNode::new(
            Arc::clone(child.output_schema().unwrap()),
            Arc::new(pred),
            child,
        ))
        .into_ref()
    }

    #[test]
    fn test_merge_filter_into_scan() {
        let plan = filter(gt(1), scan(None));

        let optimized = optimizer().optimize(plan);

        assert_eq!(optimized.plan_type(), PlanType::SeqScan);
        match optimized.as_ref() {
            PlanNode::SeqScan(scan) => assert_eq!(scan.predicate(), Some(&gt(1))),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_keep_filter_over_filtered_scan() {
        let plan = filter(gt(1), scan(Some(gt(2))));

        let optimized = optimizer().optimize(Arc::clone(&plan));

        assert!(Arc::ptr_eq(&optimized, &plan));
    }

    #[test]
    fn test_rewrite_under_join_shares_untouched_side() {
        let untouched = scan(None);
        let join = PlanNode::from(HashJoinPlanNode::new(
            Arc::new(Schema::default()),
            vec![Arc::clone(&untouched), filter(gt(1), scan(None))],
            Arc::new(Expr::column(0, "k")),
            Arc::new(Expr::column(0, "k")),
        ))
        .into_ref();
        let plan = PlanNode::from(InsertPlanNode::new_with_child(join, 0)).into_ref();

        let optimized = optimizer().optimize(Arc::clone(&plan));

        assert!(!Arc::ptr_eq(&optimized, &plan));
        let PlanNode::Insert(insert) = optimized.as_ref() else {
            unreachable!()
        };
        let PlanNode::HashJoin(join) = insert.get_child_plan().as_ref() else {
            unreachable!()
        };
        assert!(Arc::ptr_eq(join.get_left_plan(), &untouched));
        assert_eq!(join.get_right_plan().plan_type(), PlanType::SeqScan);
        assert_eq!(
            optimized.explain(),
            "Insert { table_oid=0 }\n  HashJoin { left_key=#0.0, right_key=#0.0 }\n    SeqScan { table_oid=0 }\n    SeqScan { table_oid=0, filter=(#0.0 > 1) }"
        );
    }

    #[test]
    fn test_plan_without_rewrites_is_shared() {
        let plan = PlanNode::from(InsertPlanNode::new_raw(vec![vec![Value::Int(1)]], 0)).into_ref();

        let optimized = optimizer().optimize(Arc::clone(&plan));

        assert!(Arc::ptr_eq(&optimized, &plan));
    }
}
