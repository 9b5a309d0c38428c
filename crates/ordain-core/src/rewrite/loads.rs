//! Nested-load ordering pass: applies per-entity defaults inside eager-load
//! sub-plans before the top-level ordering decision runs.

use crate::{
    error::RewriteError,
    model::{ModelRegistry, NavigationModel},
    obs::{self, RewriteEvent},
    order::OrderRegistry,
    plan::{PlanNode, ProjectionBinding, ProjectionShape},
    rewrite::{apply::apply_default_order, detect::has_ordering},
};
use std::borrow::Cow;

/// Rewrite every collection eager-load in `plan` whose sub-plan lacks
/// explicit ordering, innermost loads first. Returns `Cow::Borrowed` when
/// nothing changed.
pub(crate) fn apply_to_loads<'a>(
    model: &ModelRegistry,
    registry: &OrderRegistry,
    plan: &'a PlanNode,
) -> Result<Cow<'a, PlanNode>, RewriteError> {
    match plan {
        PlanNode::Source { .. } => Ok(Cow::Borrowed(plan)),

        PlanNode::EagerLoad {
            source,
            navigation,
            sub_plan,
        } => {
            let navigation = *navigation;
            let outer = apply_to_loads(model, registry, source)?;
            // depth-first: loads nested inside this load resolve before this
            // sub-plan's own ordering decision
            let inner = apply_to_loads(model, registry, sub_plan)?;

            let ordered = if navigation.is_collection && !has_ordering(&inner) {
                order_sub_plan(model, registry, navigation, &inner)?
            } else {
                None
            };

            let untouched = matches!(outer, Cow::Borrowed(_))
                && matches!(inner, Cow::Borrowed(_))
                && ordered.is_none();
            if untouched {
                return Ok(Cow::Borrowed(plan));
            }

            let sub_plan = ordered.unwrap_or_else(|| inner.into_owned());

            Ok(Cow::Owned(PlanNode::EagerLoad {
                source: Box::new(outer.into_owned()),
                navigation,
                sub_plan: Box::new(sub_plan),
            }))
        }

        PlanNode::Project { source, shape } => {
            let outer = apply_to_loads(model, registry, source)?;
            let reshaped = reshape(model, registry, shape)?;

            if matches!(outer, Cow::Borrowed(_)) && reshaped.is_none() {
                Ok(Cow::Borrowed(plan))
            } else {
                Ok(Cow::Owned(PlanNode::Project {
                    source: Box::new(outer.into_owned()),
                    shape: reshaped.unwrap_or_else(|| shape.clone()),
                }))
            }
        }

        PlanNode::Filter { source, .. }
        | PlanNode::OrderPrimary { source, .. }
        | PlanNode::OrderSecondary { source, .. }
        | PlanNode::Reduce { source, .. }
        | PlanNode::Opaque { source, .. } => match apply_to_loads(model, registry, source)? {
            Cow::Borrowed(_) => Ok(Cow::Borrowed(plan)),
            Cow::Owned(rewritten) => Ok(Cow::Owned(plan.with_source(rewritten))),
        },
    }
}

/// Default ordering for one collection sub-plan, when its element entity has
/// a non-empty spec. `None` means no default applies.
fn order_sub_plan(
    model: &ModelRegistry,
    registry: &OrderRegistry,
    navigation: &'static NavigationModel,
    sub_plan: &PlanNode,
) -> Result<Option<PlanNode>, RewriteError> {
    let Some(entity) = model.entity(navigation.target) else {
        return Err(RewriteError::UnknownNavigationTarget {
            navigation: navigation.name,
            target: navigation.target,
        });
    };

    let Some(spec) = registry.lookup(entity.path) else {
        return Ok(None);
    };
    if spec.clauses().is_empty() {
        return Ok(None);
    }

    let ordered = apply_default_order(entity, sub_plan, spec)?;

    obs::record(RewriteEvent::LoadDefaultApplied {
        entity: entity.path,
        navigation: navigation.name,
        clauses: spec.clauses().len(),
    });

    Ok(Some(ordered))
}

/// Process eager loads embedded inside projection collection bindings.
/// Bindings themselves never receive defaults; only loads within them do.
fn reshape(
    model: &ModelRegistry,
    registry: &OrderRegistry,
    shape: &ProjectionShape,
) -> Result<Option<ProjectionShape>, RewriteError> {
    let mut changed = false;
    let mut bindings = Vec::with_capacity(shape.bindings.len());

    for binding in &shape.bindings {
        match binding {
            ProjectionBinding::Collection { name, plan } => {
                match apply_to_loads(model, registry, plan)? {
                    Cow::Borrowed(_) => bindings.push(binding.clone()),
                    Cow::Owned(rewritten) => {
                        changed = true;
                        bindings.push(ProjectionBinding::Collection {
                            name: *name,
                            plan: rewritten,
                        });
                    }
                }
            }
            ProjectionBinding::Field { .. } => bindings.push(binding.clone()),
        }
    }

    Ok(changed.then(|| ProjectionShape::new(shape.name, bindings)))
}
