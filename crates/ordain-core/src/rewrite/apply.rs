//! Default-order insertion for one plan chain.

use crate::{error::RewriteError, model::EntityModel, order::OrderSpec, plan::PlanNode};

/// Splice `spec`'s clauses into `plan` at the correct structural position.
///
/// Precedence, first match wins:
/// 1. ordering goes below a terminal `Project`, so sort fields stay
///    accessible even when the projected shape discards them;
/// 2. ordering goes below trailing `EagerLoad` nodes, so the host engine
///    cannot displace the intended sort when loads are attached after it;
/// 3. otherwise the clause chain is appended atop the plan. Unrecognized
///    node shapes fall through here.
pub(crate) fn apply_default_order(
    entity: &'static EntityModel,
    plan: &PlanNode,
    spec: &OrderSpec,
) -> Result<PlanNode, RewriteError> {
    // Registration validated every clause; a miss here means the registry
    // and the model disagree about the entity.
    for clause in spec {
        if entity.field(clause.field).is_none() {
            return Err(RewriteError::UnresolvedOrderField {
                entity: entity.path,
                field: clause.field,
            });
        }
    }

    Ok(insert(plan, spec))
}

fn insert(plan: &PlanNode, spec: &OrderSpec) -> PlanNode {
    match plan {
        PlanNode::Project { source, .. } | PlanNode::EagerLoad { source, .. } => {
            plan.with_source(insert(source, spec))
        }
        other => append_clauses(other.clone(), spec),
    }
}

fn append_clauses(plan: PlanNode, spec: &OrderSpec) -> PlanNode {
    spec.iter()
        .fold(plan, |chain, clause| clause.op.attach(chain, clause.field))
}
