use thiserror::Error as ThisError;

///
/// ConfigError
///
/// Setup-time configuration failures. Fatal to the integrator and surfaced
/// before any query is rewritten; the rewrite passes never produce these for
/// well-registered models.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    /// A primary clause can be registered exactly once per entity.
    #[error(
        "entity '{entity}' already has a primary default-order clause; chain a secondary clause instead"
    )]
    DuplicatePrimaryClause { entity: &'static str },

    /// Aggregated require-ordering failure naming every offender at once.
    #[error(
        "default ordering is required for all entity types but the following entities have none configured: {}. Register a default order for each listed entity",
        .entities.join(", ")
    )]
    MissingDefaultOrder { entities: Vec<String> },

    /// Registration raced past the first lookup; the snapshot is immutable.
    #[error("cannot register default ordering for entity '{entity}': the registry is frozen")]
    RegistryFrozen { entity: &'static str },

    #[error("secondary default-order clause on entity '{entity}' requires a primary clause first")]
    SecondaryBeforePrimary { entity: &'static str },

    #[error("unknown default-order field '{field}' on entity '{entity}'")]
    UnknownField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("default-order field '{field}' on entity '{entity}' is not orderable")]
    UnorderableField {
        entity: &'static str,
        field: &'static str,
    },
}

///
/// RewriteError
///
/// Rewrite-time failures. Configuration problems reaching this layer are
/// internal-consistency faults: registration must have rejected them
/// already, so they fail loudly instead of silently skipping ordering.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RewriteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An eager-load edge points at an entity missing from the model.
    #[error("navigation '{navigation}' targets unknown entity '{target}'")]
    UnknownNavigationTarget {
        navigation: &'static str,
        target: &'static str,
    },

    /// A registered clause no longer resolves against the entity model.
    #[error("default-order field '{field}' does not resolve on entity '{entity}'")]
    UnresolvedOrderField {
        entity: &'static str,
        field: &'static str,
    },
}
