use crate::{
    order::Direction,
    plan::{PlanNode, Predicate, ProjectionShape, ReduceKind},
    rewrite::has_ordering,
    rewrite::tests::{empty_rewriter, fixture_rewriter},
    test_support::{DEPARTMENT, DEPARTMENT_EMPLOYEES, EMPLOYEE},
};
use proptest::prelude::*;
use std::borrow::Cow;

/// Random department-rooted chains mixing filters, opaque operators,
/// explicit ordering, reductions, loads, and projections.
fn arb_plan() -> impl Strategy<Value = PlanNode> {
    let leaf = Just(PlanNode::source(DEPARTMENT.path));

    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|plan| plan.filter(Predicate::True)),
            inner.clone().prop_map(|plan| plan.opaque("page")),
            inner
                .clone()
                .prop_map(|plan| plan.order_by("name", Direction::Asc)),
            inner.clone().prop_map(|plan| plan.reduce(ReduceKind::Count)),
            inner.clone().prop_map(|plan| {
                plan.eager_load(&DEPARTMENT_EMPLOYEES, PlanNode::source(EMPLOYEE.path))
            }),
            inner.prop_map(|plan| {
                plan.project(ProjectionShape::fields("department_view", &["name"]))
            }),
        ]
    })
}

proptest! {
    #[test]
    fn rewriting_is_idempotent(plan in arb_plan()) {
        let rewriter = fixture_rewriter();

        let once = rewriter.rewrite(&plan).expect("first rewrite").into_owned();
        let twice = rewriter.rewrite(&once).expect("second rewrite");

        prop_assert!(matches!(twice, Cow::Borrowed(_)));
        prop_assert_eq!(twice.into_owned(), once);
    }

    #[test]
    fn empty_registry_always_passes_through(plan in arb_plan()) {
        let rewriter = empty_rewriter();

        let rewritten = rewriter.rewrite(&plan).expect("rewrite");

        prop_assert!(matches!(rewritten, Cow::Borrowed(_)));
    }

    #[test]
    fn rewritten_plans_carry_ordering_unless_reduced(plan in arb_plan()) {
        let rewriter = fixture_rewriter();

        let rewritten = rewriter.rewrite(&plan).expect("rewrite");

        prop_assert!(has_ordering(&rewritten) || rewritten.reduces_to_scalar());
    }
}
