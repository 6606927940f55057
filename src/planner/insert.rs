use super::logical_plan::PlanNodeRef;
use crate::{catalog::TableOid, types::value::Value};

#[derive(Debug)]
enum InsertSource {
    /// rows embedded in the plan, may be empty
    Raw(Vec<Vec<Value>>),
    /// rows produced by a child plan
    Child(PlanNodeRef),
}

/// Writes rows into a table. The rows are either embedded in the node (a
/// "raw insert") or produced by exactly one child plan, never both.
///
/// The node has no output schema; reporting the inserted row count is up
/// to the executor.
#[derive(Debug)]
pub struct InsertPlanNode {
    source: InsertSource,
    table_oid: TableOid,
}

impl InsertPlanNode {
    pub fn new_raw(raw_values: Vec<Vec<Value>>, table_oid: TableOid) -> Self {
        Self {
            source: InsertSource::Raw(raw_values),
            table_oid,
        }
    }

    pub fn new_with_child(child: PlanNodeRef, table_oid: TableOid) -> Self {
        Self {
            source: InsertSource::Child(child),
            table_oid,
        }
    }

    pub fn table_oid(&self) -> TableOid {
        self.table_oid
    }

    pub fn children(&self) -> &[PlanNodeRef] {
        match &self.source {
            InsertSource::Raw(_) => &[],
            InsertSource::Child(child) => std::slice::from_ref(child),
        }
    }

    /// `true` if the rows are embedded in the plan, `false` if a child
    /// plan provides them.
    pub fn is_raw_insert(&self) -> bool {
        self.children().is_empty()
    }

    pub fn raw_values(&self) -> &[Vec<Value>] {
        match &self.source {
            InsertSource::Raw(rows) => rows,
            InsertSource::Child(_) => {
                panic!("This is not a raw insert, you should use the child plan.")
            }
        }
    }

    pub fn raw_values_at(&self, idx: usize) -> &[Value] {
        let rows = self.raw_values();
        assert!(
            idx < rows.len(),
            "raw row {idx} is out of range, the insert has {} rows",
            rows.len()
        );
        &rows[idx]
    }

    pub fn get_child_plan(&self) -> &PlanNodeRef {
        match &self.source {
            InsertSource::Child(child) => child,
            InsertSource::Raw(_) => panic!("This is a raw insert, no child plan should be used."),
        }
    }

    pub(crate) fn with_children(&self, mut children: Vec<PlanNodeRef>) -> Self {
        match &self.source {
            InsertSource::Raw(rows) => {
                assert!(children.is_empty(), "A raw insert can't take a child plan.");
                Self::new_raw(rows.clone(), self.table_oid)
            }
            InsertSource::Child(_) => {
                assert!(children.len() == 1, "A child-fed insert should have exactly one child plan.");
                Self::new_with_child(children.remove(0), self.table_oid)
            }
        }
    }
}
