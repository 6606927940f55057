mod filter_pushdown;

use std::sync::Arc;

use super::logical_plan::PlanNodeRef;
use crate::catalog::Catalog;

/// Rewrites a plan into an equivalent, cheaper one.
///
/// Subtrees a rule leaves alone come back as the very same `Arc`, so the
/// input and output trees share them.
pub struct Optimizer {
    catalog: Arc<Catalog>,
}

impl Optimizer {
    pub fn new(catalog: &Arc<Catalog>) -> Self {
        Self {
            catalog: Arc::clone(catalog),
        }
    }

    pub fn optimize(&self, plan: PlanNodeRef) -> PlanNodeRef {
        self.merge_filter_scan(plan)
    }

    /// Applies `rule` to every child first and rebuilds `plan` only if one of
    /// them changed.
    fn rewrite_children(
        &self,
        plan: &PlanNodeRef,
        rule: impl Fn(&Self, PlanNodeRef) -> PlanNodeRef,
    ) -> PlanNodeRef {
        let children: Vec<PlanNodeRef> = plan
            .children()
            .iter()
            .map(|child| rule(self, Arc::clone(child)))
            .collect();

        let unchanged = children
            .iter()
            .zip(plan.children())
            .all(|(new, old)| Arc::ptr_eq(new, old));
        if unchanged {
            Arc::clone(plan)
        } else {
            plan.with_children(children).into_ref()
        }
    }
}
