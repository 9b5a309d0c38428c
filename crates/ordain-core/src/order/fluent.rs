//! Fluent registration surface over the shared registry.
//! Ergonomic layer only; clause semantics live in the registry.

use crate::{
    error::ConfigError,
    model::EntityModel,
    order::{Direction, OrderRole, SharedRegistry},
};

///
/// EntityOrderBuilder
///
/// Chainable registration for one entity's default ordering. The first call
/// must declare the primary clause; later calls chain tie-breaks.
///

#[derive(Debug)]
pub struct EntityOrderBuilder<'a> {
    registry: &'a SharedRegistry,
    model: &'static EntityModel,
}

impl<'a> EntityOrderBuilder<'a> {
    pub(crate) const fn new(registry: &'a SharedRegistry, model: &'static EntityModel) -> Self {
        Self { registry, model }
    }

    /// Declare the primary clause, ascending.
    pub fn order_by(self, field: &'static str) -> Result<Self, ConfigError> {
        self.push(field, Direction::Asc, OrderRole::Primary)
    }

    /// Declare the primary clause, descending.
    pub fn order_by_desc(self, field: &'static str) -> Result<Self, ConfigError> {
        self.push(field, Direction::Desc, OrderRole::Primary)
    }

    /// Chain a tie-break clause, ascending.
    pub fn then_by(self, field: &'static str) -> Result<Self, ConfigError> {
        self.push(field, Direction::Asc, OrderRole::Secondary)
    }

    /// Chain a tie-break clause, descending.
    pub fn then_by_desc(self, field: &'static str) -> Result<Self, ConfigError> {
        self.push(field, Direction::Desc, OrderRole::Secondary)
    }

    fn push(
        self,
        field: &'static str,
        direction: Direction,
        role: OrderRole,
    ) -> Result<Self, ConfigError> {
        self.registry.register(self.model, field, direction, role)?;

        Ok(self)
    }
}
