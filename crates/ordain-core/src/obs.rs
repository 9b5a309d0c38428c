//! Rewrite observability boundary.
//!
//! Rewrite passes MUST NOT depend on sink state directly.
//! Every signal flows through `RewriteEvent` and the process-global slot;
//! recording is a no-op until a host installs a sink.

use parking_lot::RwLock;
use std::sync::Arc;

///
/// RewriteEvent
///

#[derive(Clone, Copy, Debug)]
pub enum RewriteEvent {
    /// Default ordering appended to a top-level plan.
    DefaultApplied {
        entity: &'static str,
        clauses: usize,
    },

    /// Default ordering appended inside one eager-load sub-plan.
    LoadDefaultApplied {
        entity: &'static str,
        navigation: &'static str,
        clauses: usize,
    },

    /// Require-ordering validation ran for one rewriter.
    RequiredOrderChecked { missing: usize },
}

///
/// EventSink
///

pub trait EventSink: Send + Sync {
    fn record(&self, event: RewriteEvent);
}

static SINK: RwLock<Option<Arc<dyn EventSink>>> = RwLock::new(None);

/// Install the process-global sink, replacing any previous one.
pub fn set_sink(sink: Arc<dyn EventSink>) {
    *SINK.write() = Some(sink);
}

/// Remove the process-global sink.
pub fn clear_sink() {
    *SINK.write() = None;
}

/// Record one event through the installed sink, if any.
pub(crate) fn record(event: RewriteEvent) {
    if let Some(sink) = SINK.read().as_ref() {
        sink.record(event);
    }
}
