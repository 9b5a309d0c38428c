//! Deterministic, read-only explanation of plan trees; must not rewrite or
//! validate.

use crate::{
    order::Direction,
    plan::{PlanNode, ProjectionBinding, ReduceKind},
};
use serde::Serialize;

///
/// ExplainNode
///
/// Stable, serializable projection of a `PlanNode` for observability and
/// structural assertions. Sub-scopes are preserved so explain output shows
/// exactly where ordering was injected.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum ExplainNode {
    Source {
        entity: &'static str,
    },
    Filter {
        source: Box<Self>,
    },
    Project {
        source: Box<Self>,
        collections: Vec<Self>,
    },
    Order {
        source: Box<Self>,
        field: &'static str,
        direction: Direction,
        tie_break: bool,
    },
    EagerLoad {
        source: Box<Self>,
        navigation: &'static str,
        sub_plan: Box<Self>,
    },
    Reduce {
        source: Box<Self>,
        kind: ReduceKind,
    },
    Opaque {
        source: Box<Self>,
        label: &'static str,
    },
}

/// Project a plan into its explain form.
#[must_use]
pub fn explain(plan: &PlanNode) -> ExplainNode {
    match plan {
        &PlanNode::Source { entity } => ExplainNode::Source { entity },

        PlanNode::Filter { source, .. } => ExplainNode::Filter {
            source: Box::new(explain(source)),
        },

        PlanNode::Project { source, shape } => ExplainNode::Project {
            source: Box::new(explain(source)),
            collections: shape
                .bindings
                .iter()
                .filter_map(|binding| match binding {
                    ProjectionBinding::Collection { plan, .. } => Some(explain(plan)),
                    ProjectionBinding::Field { .. } => None,
                })
                .collect(),
        },

        PlanNode::OrderPrimary {
            source,
            field,
            direction,
        } => ExplainNode::Order {
            source: Box::new(explain(source)),
            field: *field,
            direction: *direction,
            tie_break: false,
        },

        PlanNode::OrderSecondary {
            source,
            field,
            direction,
        } => ExplainNode::Order {
            source: Box::new(explain(source)),
            field: *field,
            direction: *direction,
            tie_break: true,
        },

        PlanNode::EagerLoad {
            source,
            navigation,
            sub_plan,
        } => ExplainNode::EagerLoad {
            source: Box::new(explain(source)),
            navigation: navigation.name,
            sub_plan: Box::new(explain(sub_plan)),
        },

        PlanNode::Reduce { source, kind } => ExplainNode::Reduce {
            source: Box::new(explain(source)),
            kind: *kind,
        },

        PlanNode::Opaque { source, label } => ExplainNode::Opaque {
            source: Box::new(explain(source)),
            label: *label,
        },
    }
}
