//! Ordain injects a configured default sort order into query plans that
//! omit an explicit one, and leaves explicitly-ordered plans untouched.
//!
//! ## Crate layout
//! - `core`: entity metadata, order registry, plan model, and the
//!   detection/rewriting passes.
//!
//! The `prelude` module mirrors the surface a host-engine integration uses.

pub use ordain_core as core;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use ordain_core::{
    error::{ConfigError, RewriteError},
    rewrite::{Rewriter, RewriterOptions},
};

///
/// Prelude
/// Domain vocabulary only; no sinks or internal helpers are re-exported.
///

pub mod prelude {
    pub use crate::core::{
        model::{EntityModel, FieldKind, FieldModel, ModelRegistry, NavigationModel},
        order::{Direction, OrderRole, SharedRegistry},
        plan::{PlanNode, ProjectionShape},
        rewrite::{Rewriter, RewriterOptions, has_ordering},
    };
}
