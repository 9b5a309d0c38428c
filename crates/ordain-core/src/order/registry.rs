//! Per-entity default-order registry; single-threaded setup, frozen reads.

use crate::{
    error::ConfigError,
    model::EntityModel,
    order::{Direction, EntityOrderBuilder, OrderClause, OrderRole, OrderSpec},
};
use parking_lot::Mutex;
use std::{collections::BTreeMap, sync::OnceLock};

///
/// RegistryBuilder
///
/// Mutable staging area used during model setup. Registration validates each
/// clause against the entity model so misconfiguration surfaces at setup
/// time, never during query rewriting.
///

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    specs: BTreeMap<&'static str, OrderSpec>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one clause for `entity`.
    pub fn register(
        &mut self,
        entity: &'static EntityModel,
        field: &'static str,
        direction: Direction,
        role: OrderRole,
    ) -> Result<(), ConfigError> {
        let resolved = entity.field(field).ok_or(ConfigError::UnknownField {
            entity: entity.path,
            field,
        })?;

        if !resolved.kind.is_orderable() {
            return Err(ConfigError::UnorderableField {
                entity: entity.path,
                field,
            });
        }

        let clause = OrderClause::new(field, direction, role);

        match (role, self.specs.get_mut(entity.path)) {
            (OrderRole::Primary, Some(_)) => Err(ConfigError::DuplicatePrimaryClause {
                entity: entity.path,
            }),
            (OrderRole::Primary, None) => {
                self.specs.insert(entity.path, OrderSpec::new(clause));
                Ok(())
            }
            (OrderRole::Secondary, Some(spec)) => {
                spec.push_secondary(clause);
                Ok(())
            }
            (OrderRole::Secondary, None) => Err(ConfigError::SecondaryBeforePrimary {
                entity: entity.path,
            }),
        }
    }

    /// Freeze into an immutable registry.
    #[must_use]
    pub fn freeze(self) -> OrderRegistry {
        OrderRegistry { specs: self.specs }
    }
}

///
/// OrderRegistry
///
/// Immutable per-entity spec map. Lookups take no lock; the map never
/// changes after freeze.
///

#[derive(Debug, Default)]
pub struct OrderRegistry {
    specs: BTreeMap<&'static str, OrderSpec>,
}

impl OrderRegistry {
    /// Default ordering registered for an entity path.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&OrderSpec> {
        self.specs.get(path)
    }

    /// True when `path` carries a non-empty default ordering.
    #[must_use]
    pub fn has_order(&self, path: &str) -> bool {
        self.lookup(path).is_some_and(|spec| !spec.clauses().is_empty())
    }
}

///
/// SharedRegistry
///
/// Freeze-on-first-use wrapper around the registry. Setup code registers
/// clauses through the staging builder; the first read swaps the staged
/// state into an immutable snapshot, and later registration fails with a
/// `ConfigError` instead of racing the readers.
///

#[derive(Debug, Default)]
pub struct SharedRegistry {
    staging: Mutex<Option<RegistryBuilder>>,
    frozen: OnceLock<OrderRegistry>,
}

impl SharedRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            staging: Mutex::new(Some(RegistryBuilder::new())),
            frozen: OnceLock::new(),
        }
    }

    /// Fluent registration surface for one entity.
    #[must_use]
    pub const fn entity(&self, model: &'static EntityModel) -> EntityOrderBuilder<'_> {
        EntityOrderBuilder::new(self, model)
    }

    /// Register one clause; fails once the registry is frozen.
    pub fn register(
        &self,
        entity: &'static EntityModel,
        field: &'static str,
        direction: Direction,
        role: OrderRole,
    ) -> Result<(), ConfigError> {
        let mut staging = self.staging.lock();

        match staging.as_mut() {
            Some(builder) => builder.register(entity, field, direction, role),
            None => Err(ConfigError::RegistryFrozen {
                entity: entity.path,
            }),
        }
    }

    /// Frozen snapshot; freezes the staged state on first call.
    pub fn frozen(&self) -> &OrderRegistry {
        self.frozen
            .get_or_init(|| self.staging.lock().take().unwrap_or_default().freeze())
    }
}
