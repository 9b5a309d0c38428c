//! Passive query-plan model; must not embed rewriting decisions or
//! validation.

pub mod explain;

pub use explain::{ExplainNode, explain};

use crate::{model::NavigationModel, order::Direction};
use serde::Serialize;

///
/// Value
/// Minimal literal surface for predicate comparisons.
///

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Text(String),
    Timestamp(u64),
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

///
/// Predicate
/// Residual row filter carried by `Filter` nodes. Opaque to the rewriter.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Predicate {
    True,
    Compare {
        field: &'static str,
        op: CompareOp,
        value: Value,
    },
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

///
/// ReduceKind
/// Terminal operators that collapse a sequence into a single result.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReduceKind {
    Count,
    Exists,
    First,
    Single,
}

///
/// ProjectionShape
///
/// Output shape of a `Project` node. Collection bindings carry their own
/// sub-plan; ordering inside such a binding belongs to the projected
/// collection, not to the outer query.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectionShape {
    /// Output shape label for diagnostics.
    pub name: &'static str,
    pub bindings: Vec<ProjectionBinding>,
}

impl ProjectionShape {
    #[must_use]
    pub fn new(name: &'static str, bindings: Vec<ProjectionBinding>) -> Self {
        Self { name, bindings }
    }

    /// Shape that copies the named source fields through unchanged.
    #[must_use]
    pub fn fields(name: &'static str, fields: &[&'static str]) -> Self {
        Self {
            name,
            bindings: fields
                .iter()
                .copied()
                .map(|field| ProjectionBinding::Field { name: field })
                .collect(),
        }
    }
}

///
/// ProjectionBinding
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProjectionBinding {
    /// Copy one source field into the output shape.
    Field { name: &'static str },

    /// Materialize a related collection inside the output shape.
    Collection { name: &'static str, plan: PlanNode },
}

///
/// PlanNode
///
/// Structural plan tree. Nodes form a chain through `source`; `EagerLoad`
/// and `Project` additionally carry sub-scopes that an outer-chain walk does
/// not descend into.
///
/// Plans are immutable once built: rewriting always produces new nodes, so
/// the host may cache and reuse plan fragments freely.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PlanNode {
    /// Root scan over one entity.
    Source { entity: &'static str },

    /// Row filter over the wrapped chain.
    Filter {
        source: Box<Self>,
        predicate: Predicate,
    },

    /// Final reshaping of each row.
    Project {
        source: Box<Self>,
        shape: ProjectionShape,
    },

    /// Primary sort.
    OrderPrimary {
        source: Box<Self>,
        field: &'static str,
        direction: Direction,
    },

    /// Tie-break sort chained off the previous ordering node.
    OrderSecondary {
        source: Box<Self>,
        field: &'static str,
        direction: Direction,
    },

    /// Eager-load directive carrying an independent sub-plan over the
    /// navigation's element type.
    EagerLoad {
        source: Box<Self>,
        navigation: &'static NavigationModel,
        sub_plan: Box<Self>,
    },

    /// Terminal reduction to a non-sequence result.
    Reduce { source: Box<Self>, kind: ReduceKind },

    /// Host-specific operator the rewriter passes through untouched.
    Opaque {
        source: Box<Self>,
        label: &'static str,
    },
}

impl PlanNode {
    /// Root scan over `entity`.
    #[must_use]
    pub const fn source(entity: &'static str) -> Self {
        Self::Source { entity }
    }

    #[must_use]
    pub fn filter(self, predicate: Predicate) -> Self {
        Self::Filter {
            source: Box::new(self),
            predicate,
        }
    }

    #[must_use]
    pub fn project(self, shape: ProjectionShape) -> Self {
        Self::Project {
            source: Box::new(self),
            shape,
        }
    }

    #[must_use]
    pub fn order_by(self, field: &'static str, direction: Direction) -> Self {
        Self::OrderPrimary {
            source: Box::new(self),
            field,
            direction,
        }
    }

    #[must_use]
    pub fn then_by(self, field: &'static str, direction: Direction) -> Self {
        Self::OrderSecondary {
            source: Box::new(self),
            field,
            direction,
        }
    }

    #[must_use]
    pub fn eager_load(self, navigation: &'static NavigationModel, sub_plan: Self) -> Self {
        Self::EagerLoad {
            source: Box::new(self),
            navigation,
            sub_plan: Box::new(sub_plan),
        }
    }

    #[must_use]
    pub fn reduce(self, kind: ReduceKind) -> Self {
        Self::Reduce {
            source: Box::new(self),
            kind,
        }
    }

    #[must_use]
    pub fn opaque(self, label: &'static str) -> Self {
        Self::Opaque {
            source: Box::new(self),
            label,
        }
    }

    /// Outer-chain source, when this node wraps one.
    #[must_use]
    pub fn chain_source(&self) -> Option<&Self> {
        match self {
            Self::Source { .. } => None,
            Self::Filter { source, .. }
            | Self::Project { source, .. }
            | Self::OrderPrimary { source, .. }
            | Self::OrderSecondary { source, .. }
            | Self::EagerLoad { source, .. }
            | Self::Reduce { source, .. }
            | Self::Opaque { source, .. } => Some(source.as_ref()),
        }
    }

    /// Entity scanned at the base of the outer chain.
    #[must_use]
    pub fn base_entity(&self) -> &'static str {
        match self {
            Self::Source { entity } => *entity,
            Self::Filter { source, .. }
            | Self::Project { source, .. }
            | Self::OrderPrimary { source, .. }
            | Self::OrderSecondary { source, .. }
            | Self::EagerLoad { source, .. }
            | Self::Reduce { source, .. }
            | Self::Opaque { source, .. } => source.base_entity(),
        }
    }

    /// True when the outer chain ends in a terminal reduction, making the
    /// result a non-sequence for which ordering is moot.
    #[must_use]
    pub fn reduces_to_scalar(&self) -> bool {
        match self {
            Self::Reduce { .. } => true,
            Self::Source { .. } => false,
            _ => self.chain_source().is_some_and(Self::reduces_to_scalar),
        }
    }

    /// True for the two ordering node variants.
    #[must_use]
    pub const fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::OrderPrimary { .. } | Self::OrderSecondary { .. }
        )
    }

    /// Clone of this node with its outer-chain source replaced.
    ///
    /// `Source` nodes wrap nothing; replacing their source is a no-op clone.
    pub(crate) fn with_source(&self, source: Self) -> Self {
        let source = Box::new(source);

        match self {
            &Self::Source { entity } => Self::Source { entity },
            Self::Filter { predicate, .. } => Self::Filter {
                source,
                predicate: predicate.clone(),
            },
            Self::Project { shape, .. } => Self::Project {
                source,
                shape: shape.clone(),
            },
            &Self::OrderPrimary {
                field, direction, ..
            } => Self::OrderPrimary {
                source,
                field,
                direction,
            },
            &Self::OrderSecondary {
                field, direction, ..
            } => Self::OrderSecondary {
                source,
                field,
                direction,
            },
            Self::EagerLoad {
                navigation,
                sub_plan,
                ..
            } => Self::EagerLoad {
                source,
                navigation: *navigation,
                sub_plan: sub_plan.clone(),
            },
            &Self::Reduce { kind, .. } => Self::Reduce { source, kind },
            &Self::Opaque { label, .. } => Self::Opaque { source, label },
        }
    }
}
