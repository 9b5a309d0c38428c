//! Rewrite pipeline: nested-load pass, ordering presence detection, and
//! default-order insertion at query-compilation time.

pub(crate) mod apply;
pub(crate) mod detect;
pub(crate) mod loads;
pub(crate) mod require;

#[cfg(test)]
mod tests;

pub use detect::has_ordering;

use crate::{
    error::RewriteError,
    model::ModelRegistry,
    obs::{self, RewriteEvent},
    order::SharedRegistry,
    plan::PlanNode,
    rewrite::require::RequiredOrderCheck,
};
use std::borrow::Cow;

///
/// RewriterOptions
///

#[derive(Clone, Copy, Debug, Default)]
pub struct RewriterOptions {
    /// Fail the first rewrite unless every model entity has a default order.
    pub require_order_for_all_entities: bool,
}

///
/// Rewriter
///
/// One rewriter per consuming host context. Owns the shared registry and
/// the host model; `rewrite` is a pure transform safe for concurrent use
/// from many compilations at once.
///

pub struct Rewriter {
    model: ModelRegistry,
    registry: SharedRegistry,
    options: RewriterOptions,
    required: RequiredOrderCheck,
}

impl Rewriter {
    #[must_use]
    pub fn new(model: ModelRegistry, registry: SharedRegistry) -> Self {
        Self::with_options(model, registry, RewriterOptions::default())
    }

    #[must_use]
    pub fn with_options(
        model: ModelRegistry,
        registry: SharedRegistry,
        options: RewriterOptions,
    ) -> Self {
        Self {
            model,
            registry,
            options,
            required: RequiredOrderCheck::new(),
        }
    }

    /// Host model consumed by the rewrite passes.
    #[must_use]
    pub const fn model(&self) -> &ModelRegistry {
        &self.model
    }

    /// Shared registry; a setup surface until the first rewrite freezes it.
    #[must_use]
    pub const fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// Rewrite one query plan.
    ///
    /// Returns `Cow::Borrowed` when the plan passes through untouched.
    /// Absence of configuration is the normal silent outcome; only
    /// consistency faults and the opt-in require-ordering check fail.
    pub fn rewrite<'a>(&self, plan: &'a PlanNode) -> Result<Cow<'a, PlanNode>, RewriteError> {
        let registry = self.registry.frozen();

        if self.options.require_order_for_all_entities {
            self.required.run(&self.model, registry)?;
        }

        let plan = loads::apply_to_loads(&self.model, registry, plan)?;

        // A reduced result is not a sequence; its loads were still processed.
        if plan.reduces_to_scalar() {
            return Ok(plan);
        }
        if detect::has_ordering(&plan) {
            return Ok(plan);
        }

        let Some(entity) = self.model.entity(plan.base_entity()) else {
            return Ok(plan);
        };
        let Some(spec) = registry.lookup(entity.path) else {
            return Ok(plan);
        };

        let rewritten = apply::apply_default_order(entity, &plan, spec)?;

        obs::record(RewriteEvent::DefaultApplied {
            entity: entity.path,
            clauses: spec.clauses().len(),
        });

        Ok(Cow::Owned(rewritten))
    }
}
