//! Order model: directions, clause roles, and per-entity specifications.

mod fluent;
mod registry;

#[cfg(test)]
mod tests;

pub use fluent::EntityOrderBuilder;
pub use registry::{OrderRegistry, RegistryBuilder, SharedRegistry};

use crate::plan::PlanNode;
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// Direction
///
/// Canonical sort direction shared by clause registration and plan nodes.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

///
/// OrderRole
///
/// Primary sorts re-order the whole sequence; secondary clauses chain off
/// the previous clause and only break ties.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderRole {
    Primary,
    Secondary,
}

///
/// OrderOp
///
/// Closed table mapping {role} x {direction} onto the concrete ordering-node
/// constructors. Resolved once when a clause is registered, never re-derived
/// per query.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderOp {
    PrimaryAsc,
    PrimaryDesc,
    SecondaryAsc,
    SecondaryDesc,
}

impl OrderOp {
    #[must_use]
    pub const fn new(role: OrderRole, direction: Direction) -> Self {
        match (role, direction) {
            (OrderRole::Primary, Direction::Asc) => Self::PrimaryAsc,
            (OrderRole::Primary, Direction::Desc) => Self::PrimaryDesc,
            (OrderRole::Secondary, Direction::Asc) => Self::SecondaryAsc,
            (OrderRole::Secondary, Direction::Desc) => Self::SecondaryDesc,
        }
    }

    #[must_use]
    pub const fn role(self) -> OrderRole {
        match self {
            Self::PrimaryAsc | Self::PrimaryDesc => OrderRole::Primary,
            Self::SecondaryAsc | Self::SecondaryDesc => OrderRole::Secondary,
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::PrimaryAsc | Self::SecondaryAsc => Direction::Asc,
            Self::PrimaryDesc | Self::SecondaryDesc => Direction::Desc,
        }
    }

    /// Wrap `source` in the ordering node this op denotes.
    #[must_use]
    pub fn attach(self, source: PlanNode, field: &'static str) -> PlanNode {
        let direction = self.direction();
        let source = Box::new(source);

        match self.role() {
            OrderRole::Primary => PlanNode::OrderPrimary {
                source,
                field,
                direction,
            },
            OrderRole::Secondary => PlanNode::OrderSecondary {
                source,
                field,
                direction,
            },
        }
    }
}

///
/// OrderClause
/// One registered sort key on an entity.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OrderClause {
    pub field: &'static str,
    pub op: OrderOp,
}

impl OrderClause {
    #[must_use]
    pub const fn new(field: &'static str, direction: Direction, role: OrderRole) -> Self {
        Self {
            field,
            op: OrderOp::new(role, direction),
        }
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.op.direction()
    }

    #[must_use]
    pub const fn is_primary(&self) -> bool {
        matches!(self.op.role(), OrderRole::Primary)
    }
}

///
/// OrderSpec
///
/// Registered default ordering for one entity. Non-empty once created; the
/// first clause is always primary and every later clause is a tie-break.
///

#[derive(Clone, Debug, Deref, Eq, IntoIterator, PartialEq)]
pub struct OrderSpec {
    #[deref]
    #[into_iterator(owned, ref)]
    clauses: Vec<OrderClause>,
}

impl OrderSpec {
    /// Create a spec from its primary clause.
    #[must_use]
    pub(crate) fn new(primary: OrderClause) -> Self {
        debug_assert!(primary.is_primary());

        Self {
            clauses: vec![primary],
        }
    }

    /// Append a tie-break clause.
    pub(crate) fn push_secondary(&mut self, clause: OrderClause) {
        debug_assert!(!clause.is_primary());
        self.clauses.push(clause);
    }

    /// Clauses in declared priority order.
    #[must_use]
    pub fn clauses(&self) -> &[OrderClause] {
        &self.clauses
    }
}
