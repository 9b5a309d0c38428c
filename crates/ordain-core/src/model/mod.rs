//! Static runtime metadata for host entities; must not embed ordering or
//! rewriting semantics.

use std::collections::BTreeMap;

///
/// EntityModel
/// Minimal host-supplied runtime model for one entity.
///

#[derive(Debug)]
pub struct EntityModel {
    /// Fully-qualified type path (registry key and diagnostics).
    pub path: &'static str,
    /// Stable external name used in user-facing messages.
    pub entity_name: &'static str,
    /// Ordered field list (authoritative for clause resolution).
    pub fields: &'static [FieldModel],
    /// Eager-load edges declared on this entity.
    pub navigations: &'static [&'static NavigationModel],
}

impl EntityModel {
    /// Resolve a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Resolve a navigation by name.
    #[must_use]
    pub fn navigation(&self, name: &str) -> Option<&'static NavigationModel> {
        self.navigations.iter().find(|nav| nav.name == name).copied()
    }
}

///
/// FieldModel
/// Runtime field metadata used by clause registration and rewriting.
///

#[derive(Debug)]
pub struct FieldModel {
    /// Field name as used in order clauses and predicates.
    pub name: &'static str,
    /// Runtime type shape (no schema-layer nodes).
    pub kind: FieldKind,
}

///
/// FieldKind
///
/// Minimal type surface needed by clause validation. A lossy projection of
/// the host's schema types.
///

#[derive(Debug)]
pub enum FieldKind {
    Bool,
    Int,
    Text,
    Timestamp,

    // Collections
    List(&'static FieldKind),

    /// Marker for fields that cannot participate in ordering.
    Unsupported,
}

impl FieldKind {
    /// True when a field of this kind can carry a sort key.
    #[must_use]
    pub const fn is_orderable(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Unsupported)
    }
}

///
/// NavigationModel
/// One eager-load edge from an owning entity to a related entity.
///

#[derive(Debug, Eq, PartialEq)]
pub struct NavigationModel {
    /// Navigation name as referenced by load directives.
    pub name: &'static str,
    /// Path of the element entity this navigation loads.
    pub target: &'static str,
    /// True when the navigation loads a collection rather than a single row.
    pub is_collection: bool,
}

///
/// ModelRegistry
///
/// Entity lookup surface handed to the rewriting passes by the host.
/// Built once at setup and read-only afterwards.
///

#[derive(Default)]
pub struct ModelRegistry {
    entities: BTreeMap<&'static str, &'static EntityModel>,
}

impl ModelRegistry {
    #[must_use]
    pub fn new(entities: &[&'static EntityModel]) -> Self {
        Self {
            entities: entities.iter().map(|entity| (entity.path, *entity)).collect(),
        }
    }

    /// Resolve an entity by fully-qualified path.
    #[must_use]
    pub fn entity(&self, path: &str) -> Option<&'static EntityModel> {
        self.entities.get(path).copied()
    }

    /// All registered entities, in path order.
    pub fn entities(&self) -> impl Iterator<Item = &'static EntityModel> + '_ {
        self.entities.values().copied()
    }
}
