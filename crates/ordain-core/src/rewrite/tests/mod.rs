mod apply;
mod properties;

use crate::{
    order::SharedRegistry,
    rewrite::Rewriter,
    test_support::{DEPARTMENT, EMPLOYEE, TASK, TICKET, model},
};

/// Rewriter over the fixture model with the standard defaults registered:
/// tickets newest-first, tasks by category/priority/name, departments by
/// display order, employees by hire date descending. Notes and companies
/// stay unconfigured on purpose.
pub(super) fn fixture_rewriter() -> Rewriter {
    let registry = SharedRegistry::new();

    registry
        .entity(&TICKET)
        .order_by_desc("created_date")
        .expect("ticket primary");
    registry
        .entity(&TASK)
        .order_by("category")
        .expect("task primary")
        .then_by_desc("priority")
        .expect("task tie-break")
        .then_by("name")
        .expect("task tie-break");
    registry
        .entity(&DEPARTMENT)
        .order_by("display_order")
        .expect("department primary");
    registry
        .entity(&EMPLOYEE)
        .order_by_desc("hire_date")
        .expect("employee primary");

    Rewriter::new(model(), registry)
}

/// Rewriter with no default ordering registered at all.
pub(super) fn empty_rewriter() -> Rewriter {
    Rewriter::new(model(), SharedRegistry::new())
}
