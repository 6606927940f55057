use std::fmt::Display;
use std::sync::Arc;

use serde_derive::{Deserialize, Serialize};

use super::{
    filter::FilterPlanNode, hash_join::HashJoinPlanNode, insert::InsertPlanNode,
    scan::SeqScanPlanNode, values::ValuesPlanNode,
};
use crate::catalog::schema::SchemaRef;

/// Children are shared: two candidate trees may point at the same subtree.
pub type PlanNodeRef = Arc<PlanNode>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanType {
    SeqScan,
    Values,
    Filter,
    HashJoin,
    Insert,
}

/// One operator of a query plan. Built bottom-up by the planner and never
/// mutated afterwards, so a finished tree can be read from any thread.
#[derive(Debug)]
pub enum PlanNode {
    SeqScan(SeqScanPlanNode),
    Values(ValuesPlanNode),
    Filter(FilterPlanNode),
    HashJoin(HashJoinPlanNode),
    Insert(InsertPlanNode),
}

impl PlanNode {
    pub fn plan_type(&self) -> PlanType {
        match self {
            PlanNode::SeqScan(_) => PlanType::SeqScan,
            PlanNode::Values(_) => PlanType::Values,
            PlanNode::Filter(_) => PlanType::Filter,
            PlanNode::HashJoin(_) => PlanType::HashJoin,
            PlanNode::Insert(_) => PlanType::Insert,
        }
    }

    pub fn children(&self) -> &[PlanNodeRef] {
        match self {
            PlanNode::SeqScan(node) => node.children(),
            PlanNode::Values(node) => node.children(),
            PlanNode::Filter(node) => node.children(),
            PlanNode::HashJoin(node) => node.children(),
            PlanNode::Insert(node) => node.children(),
        }
    }

    /// Panics if `idx` is out of range: asking for a child the node was
    /// never given is a planner bug.
    pub fn child_at(&self, idx: usize) -> &PlanNodeRef {
        let children = self.children();
        assert!(
            idx < children.len(),
            "child index {idx} is out of range, {} has {} children",
            self.plan_type_name(),
            children.len()
        );
        &children[idx]
    }

    /// `None` for nodes that produce no readable output, such as inserts.
    pub fn output_schema(&self) -> Option<&SchemaRef> {
        match self {
            PlanNode::SeqScan(node) => Some(node.output_schema()),
            PlanNode::Values(node) => Some(node.output_schema()),
            PlanNode::Filter(node) => Some(node.output_schema()),
            PlanNode::HashJoin(node) => Some(node.output_schema()),
            PlanNode::Insert(_) => None,
        }
    }

    /// Copy of this node with `children` in place of its own. Panics if
    /// `children` doesn't fit the node kind.
    pub fn with_children(&self, children: Vec<PlanNodeRef>) -> PlanNode {
        match self {
            PlanNode::SeqScan(node) => PlanNode::SeqScan(node.with_children(children)),
            PlanNode::Values(node) => PlanNode::Values(node.with_children(children)),
            PlanNode::Filter(node) => PlanNode::Filter(node.with_children(children)),
            PlanNode::HashJoin(node) => PlanNode::HashJoin(node.with_children(children)),
            PlanNode::Insert(node) => PlanNode::Insert(node.with_children(children)),
        }
    }

    pub fn into_ref(self) -> PlanNodeRef {
        Arc::new(self)
    }

    /// Renders the whole subtree, one node per line, children indented.
    pub fn explain(&self) -> String {
        let mut out = String::new();
        self.explain_into(&mut out, 0);
        out
    }

    fn explain_into(&self, out: &mut String, indent: usize) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&"  ".repeat(indent));
        out.push_str(&self.to_string());
        for child in self.children() {
            child.explain_into(out, indent + 1);
        }
    }

    fn plan_type_name(&self) -> &'static str {
        match self.plan_type() {
            PlanType::SeqScan => "SeqScan",
            PlanType::Values => "Values",
            PlanType::Filter => "Filter",
            PlanType::HashJoin => "HashJoin",
            PlanType::Insert => "Insert",
        }
    }
}

impl Display for PlanNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanNode::SeqScan(node) => match node.predicate() {
                Some(predicate) => write!(
                    f,
                    "SeqScan {{ table_oid={}, filter={} }}",
                    node.table_oid(),
                    predicate
                ),
                None => write!(f, "SeqScan {{ table_oid={} }}", node.table_oid()),
            },
            PlanNode::Values(node) => write!(f, "Values {{ rows={} }}", node.rows().len()),
            PlanNode::Filter(node) => write!(f, "Filter {{ predicate={} }}", node.predicate()),
            PlanNode::HashJoin(node) => write!(
                f,
                "HashJoin {{ left_key={}, right_key={} }}",
                node.left_join_key_expression(),
                node.right_join_key_expression()
            ),
            PlanNode::Insert(node) => write!(f, "Insert {{ table_oid={} }}", node.table_oid()),
        }
    }
}

impl From<SeqScanPlanNode> for PlanNode {
    fn from(node: SeqScanPlanNode) -> Self {
        PlanNode::SeqScan(node)
    }
}

impl From<ValuesPlanNode> for PlanNode {
    fn from(node: ValuesPlanNode) -> Self {
        PlanNode::Values(node)
    }
}

impl From<FilterPlanNode> for PlanNode {
    fn from(node: FilterPlanNode) -> Self {
        PlanNode::Filter(node)
    }
}

impl From<HashJoinPlanNode> for PlanNode {
    fn from(node: HashJoinPlanNode) -> Self {
        PlanNode::HashJoin(node)
    }
}

impl From<InsertPlanNode> for PlanNode {
    fn from(node: InsertPlanNode) -> Self {
        PlanNode::Insert(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{column::Column, schema::Schema},
        types::{
            expr::{Expr, Operator},
            value::Value,
            LogicalType,
        },
    };

    fn scan(table_oid: u32) -> PlanNodeRef {
        PlanNode::from(SeqScanPlanNode::new(
            Arc::new(Schema::new(vec![Column::new(LogicalType::Int64, "k")])),
            None,
            table_oid,
        ))
        .into_ref()
    }

    fn join(children: Vec<PlanNodeRef>) -> PlanNodeRef {
        PlanNode::from(HashJoinPlanNode::new(
            Arc::new(Schema::default()),
            children,
            Arc::new(Expr::column(0, "k")),
            Arc::new(Expr::column(0, "k")),
        ))
        .into_ref()
    }

    #[test]
    fn test_plan_type_is_fixed_per_kind() {
        let left = scan(0);
        let right = scan(1);
        let raw = PlanNode::from(InsertPlanNode::new_raw(vec![vec![Value::Int(1)]], 2));
        let fed = PlanNode::from(InsertPlanNode::new_with_child(Arc::clone(&left), 2));

        assert_eq!(left.plan_type(), PlanType::SeqScan);
        assert_eq!(join(vec![left, right]).plan_type(), PlanType::HashJoin);
        assert_eq!(raw.plan_type(), PlanType::Insert);
        assert_eq!(fed.plan_type(), PlanType::Insert);
    }

    #[test]
    fn test_children_and_child_at() {
        let left = scan(0);
        let right = scan(1);
        let node = join(vec![Arc::clone(&left), Arc::clone(&right)]);

        assert_eq!(node.children().len(), 2);
        assert!(Arc::ptr_eq(node.child_at(0), &left));
        assert!(Arc::ptr_eq(node.child_at(1), &right));
        assert!(left.children().is_empty());
    }

    #[test]
    #[should_panic(expected = "child index 2 is out of range")]
    fn test_child_at_out_of_range() {
        let node = join(vec![scan(0), scan(1)]);
        node.child_at(2);
    }

    #[test]
    fn test_output_schema() {
        let insert = PlanNode::from(InsertPlanNode::new_raw(vec![], 5));
        assert!(insert.output_schema().is_none());
        assert_eq!(scan(0).output_schema().unwrap().len(), 1);
    }

    #[test]
    fn test_shared_subtree() {
        let shared = scan(0);
        let a = join(vec![Arc::clone(&shared), scan(1)]);
        let b = join(vec![scan(1), Arc::clone(&shared)]);

        assert_eq!(Arc::strong_count(&shared), 3);
        drop(a);
        assert_eq!(Arc::strong_count(&shared), 2);
        assert!(Arc::ptr_eq(b.child_at(1), &shared));
    }

    #[test]
    fn test_display() {
        let insert = PlanNode::from(InsertPlanNode::new_raw(vec![], 5));
        assert_eq!(insert.to_string(), "Insert { table_oid=5 }");
        assert_eq!(scan(3).to_string(), "SeqScan { table_oid=3 }");
        assert_eq!(
            join(vec![scan(0), scan(1)]).to_string(),
            "HashJoin { left_key=#0.0, right_key=#0.0 }"
        );
    }

    #[test]
    fn test_explain() {
        let filter = PlanNode::from(FilterPlanNode::new(
            Arc::new(Schema::default()),
            Arc::new(Expr::binary(
                Expr::column(0, "k"),
                Operator::Gt,
                Expr::Literal(Value::Int(1)),
            )),
            scan(1),
        ))
        .into_ref();
        let insert = PlanNode::from(InsertPlanNode::new_with_child(join(vec![scan(0), filter]), 7));

        assert_eq!(
            insert.explain(),
            "Insert { table_oid=7 }\n\
             \x20 HashJoin { left_key=#0.0, right_key=#0.0 }\n\
             \x20   SeqScan { table_oid=0 }\n\
             \x20   Filter { predicate=(#0.0 > 1) }\n\
             \x20     SeqScan { table_oid=1 }"
        );
    }

    #[test]
    fn test_plan_node_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PlanNode>();
        assert_send_sync::<PlanNodeRef>();
    }
}
