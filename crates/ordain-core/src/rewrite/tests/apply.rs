use crate::{
    error::RewriteError,
    model::EntityModel,
    order::{Direction, OrderRole, OrderSpec, RegistryBuilder},
    plan::{PlanNode, Predicate, ProjectionShape},
    rewrite::apply::apply_default_order,
    test_support::{
        COMPANY, DEPARTMENT, DEPARTMENT_COMPANY, DEPARTMENT_EMPLOYEES, EMPLOYEE, TASK, TICKET,
    },
};

fn spec_for(
    entity: &'static EntityModel,
    clauses: &[(&'static str, Direction, OrderRole)],
) -> OrderSpec {
    let mut builder = RegistryBuilder::new();

    for &(field, direction, role) in clauses {
        builder
            .register(entity, field, direction, role)
            .expect("valid clause");
    }

    builder
        .freeze()
        .lookup(entity.path)
        .expect("spec registered")
        .clone()
}

fn ticket_spec() -> OrderSpec {
    spec_for(
        &TICKET,
        &[("created_date", Direction::Desc, OrderRole::Primary)],
    )
}

#[test]
fn appends_clause_atop_a_plain_chain() {
    let plan = PlanNode::source(TICKET.path).filter(Predicate::True);

    let rewritten = apply_default_order(&TICKET, &plan, &ticket_spec()).expect("rewrite");

    let expected = PlanNode::source(TICKET.path)
        .filter(Predicate::True)
        .order_by("created_date", Direction::Desc);
    assert_eq!(rewritten, expected);
}

#[test]
fn multi_clause_chain_preserves_declared_sequence() {
    let spec = spec_for(
        &TASK,
        &[
            ("category", Direction::Asc, OrderRole::Primary),
            ("priority", Direction::Desc, OrderRole::Secondary),
            ("name", Direction::Asc, OrderRole::Secondary),
        ],
    );
    let plan = PlanNode::source(TASK.path);

    let rewritten = apply_default_order(&TASK, &plan, &spec).expect("rewrite");

    let expected = PlanNode::source(TASK.path)
        .order_by("category", Direction::Asc)
        .then_by("priority", Direction::Desc)
        .then_by("name", Direction::Asc);
    assert_eq!(rewritten, expected);
}

#[test]
fn ordering_is_inserted_below_a_terminal_projection() {
    let shape = ProjectionShape::fields("ticket_view", &["name"]);
    let plan = PlanNode::source(TICKET.path)
        .filter(Predicate::True)
        .project(shape.clone());

    let rewritten = apply_default_order(&TICKET, &plan, &ticket_spec()).expect("rewrite");

    let expected = PlanNode::source(TICKET.path)
        .filter(Predicate::True)
        .order_by("created_date", Direction::Desc)
        .project(shape);
    assert_eq!(rewritten, expected);
}

#[test]
fn ordering_is_inserted_below_trailing_loads_in_original_order() {
    let spec = spec_for(
        &DEPARTMENT,
        &[("display_order", Direction::Asc, OrderRole::Primary)],
    );
    let plan = PlanNode::source(DEPARTMENT.path)
        .eager_load(&DEPARTMENT_EMPLOYEES, PlanNode::source(EMPLOYEE.path))
        .eager_load(&DEPARTMENT_COMPANY, PlanNode::source(COMPANY.path));

    let rewritten = apply_default_order(&DEPARTMENT, &plan, &spec).expect("rewrite");

    let expected = PlanNode::source(DEPARTMENT.path)
        .order_by("display_order", Direction::Asc)
        .eager_load(&DEPARTMENT_EMPLOYEES, PlanNode::source(EMPLOYEE.path))
        .eager_load(&DEPARTMENT_COMPANY, PlanNode::source(COMPANY.path));
    assert_eq!(rewritten, expected);
}

#[test]
fn projection_above_loads_cascades_to_the_base_chain() {
    let spec = spec_for(
        &DEPARTMENT,
        &[("display_order", Direction::Asc, OrderRole::Primary)],
    );
    let shape = ProjectionShape::fields("department_view", &["name"]);
    let plan = PlanNode::source(DEPARTMENT.path)
        .eager_load(&DEPARTMENT_EMPLOYEES, PlanNode::source(EMPLOYEE.path))
        .project(shape.clone());

    let rewritten = apply_default_order(&DEPARTMENT, &plan, &spec).expect("rewrite");

    let expected = PlanNode::source(DEPARTMENT.path)
        .order_by("display_order", Direction::Asc)
        .eager_load(&DEPARTMENT_EMPLOYEES, PlanNode::source(EMPLOYEE.path))
        .project(shape);
    assert_eq!(rewritten, expected);
}

#[test]
fn unrecognized_shapes_fall_through_to_a_plain_append() {
    let plan = PlanNode::source(TICKET.path).opaque("distinct");

    let rewritten = apply_default_order(&TICKET, &plan, &ticket_spec()).expect("rewrite");

    let expected = PlanNode::source(TICKET.path)
        .opaque("distinct")
        .order_by("created_date", Direction::Desc);
    assert_eq!(rewritten, expected);
}

#[test]
fn clause_that_no_longer_resolves_is_a_consistency_fault() {
    // a ticket spec applied against the employee model cannot resolve
    let plan = PlanNode::source(EMPLOYEE.path);

    let err = apply_default_order(&EMPLOYEE, &plan, &ticket_spec()).expect_err("fault");

    assert_eq!(
        err,
        RewriteError::UnresolvedOrderField {
            entity: EMPLOYEE.path,
            field: "created_date",
        }
    );
}
