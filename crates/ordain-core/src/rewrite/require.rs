//! Opt-in "every entity needs a default order" validation.

use crate::{
    error::ConfigError,
    model::ModelRegistry,
    obs::{self, RewriteEvent},
    order::OrderRegistry,
};
use std::sync::OnceLock;

///
/// RequiredOrderCheck
///
/// One-shot validation cell for a single consuming context. Many concurrent
/// rewrites may race to run the check; exactly one computes it and every
/// caller observes the same outcome.
///

#[derive(Debug, Default)]
pub(crate) struct RequiredOrderCheck {
    outcome: OnceLock<Result<(), ConfigError>>,
}

impl RequiredOrderCheck {
    pub(crate) const fn new() -> Self {
        Self {
            outcome: OnceLock::new(),
        }
    }

    pub(crate) fn run(
        &self,
        model: &ModelRegistry,
        registry: &OrderRegistry,
    ) -> Result<(), ConfigError> {
        self.outcome
            .get_or_init(|| validate_all_entities(model, registry))
            .clone()
    }
}

/// Single aggregated failure naming every entity without a default order.
fn validate_all_entities(
    model: &ModelRegistry,
    registry: &OrderRegistry,
) -> Result<(), ConfigError> {
    let missing: Vec<String> = model
        .entities()
        .filter(|entity| !registry.has_order(entity.path))
        .map(|entity| entity.entity_name.to_string())
        .collect();

    obs::record(RewriteEvent::RequiredOrderChecked {
        missing: missing.len(),
    });

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::MissingDefaultOrder { entities: missing })
    }
}
