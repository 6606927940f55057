//! Logical query plans: an immutable tree of operator nodes the planner
//! builds bottom-up and the executor walks top-down.

pub mod filter;
pub mod hash_join;
pub mod insert;
pub mod logical_plan;
pub mod optimize;
pub mod scan;
pub mod values;

pub use self::{
    filter::FilterPlanNode,
    hash_join::HashJoinPlanNode,
    insert::InsertPlanNode,
    logical_plan::{PlanNode, PlanNodeRef, PlanType},
    scan::SeqScanPlanNode,
    values::ValuesPlanNode,
};
