//! Ordering presence detection over the outer plan chain.

use crate::plan::PlanNode;

/// True when explicit ordering is present in the outer chain of `plan`.
///
/// `EagerLoad` sub-plans and `Project` shape bindings are separate ordering
/// scopes: ordering found there answers a different question (is the loaded
/// or projected collection deterministic?) and must neither satisfy nor
/// suppress the outer chain's own need for ordering.
#[must_use]
pub fn has_ordering(plan: &PlanNode) -> bool {
    if plan.is_ordering() {
        return true;
    }

    // sub-scopes stay unvisited; only the outer chain counts
    plan.chain_source().is_some_and(has_ordering)
}
