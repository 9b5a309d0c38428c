use crate::{
    error::ConfigError,
    order::{Direction, OrderOp, OrderRole, RegistryBuilder, SharedRegistry},
    test_support::{NOTE, TASK, TICKET},
};

#[test]
fn registers_primary_then_secondaries_in_declared_sequence() {
    let mut builder = RegistryBuilder::new();

    builder
        .register(&TASK, "category", Direction::Asc, OrderRole::Primary)
        .expect("primary clause");
    builder
        .register(&TASK, "priority", Direction::Desc, OrderRole::Secondary)
        .expect("secondary clause");
    builder
        .register(&TASK, "name", Direction::Asc, OrderRole::Secondary)
        .expect("secondary clause");

    let registry = builder.freeze();
    let spec = registry.lookup(TASK.path).expect("spec registered");

    let ops: Vec<_> = spec
        .clauses()
        .iter()
        .map(|clause| (clause.field, clause.op))
        .collect();

    assert_eq!(
        ops,
        vec![
            ("category", OrderOp::PrimaryAsc),
            ("priority", OrderOp::SecondaryDesc),
            ("name", OrderOp::SecondaryAsc),
        ]
    );
}

#[test]
fn duplicate_primary_clause_fails_at_setup() {
    let mut builder = RegistryBuilder::new();

    builder
        .register(&TICKET, "created_date", Direction::Desc, OrderRole::Primary)
        .expect("first primary clause");

    let err = builder
        .register(&TICKET, "name", Direction::Asc, OrderRole::Primary)
        .expect_err("second primary clause");

    assert_eq!(
        err,
        ConfigError::DuplicatePrimaryClause {
            entity: TICKET.path
        }
    );
    assert!(err.to_string().contains("test::Ticket"));
}

#[test]
fn secondary_clause_requires_primary_first() {
    let mut builder = RegistryBuilder::new();

    let err = builder
        .register(&TICKET, "name", Direction::Asc, OrderRole::Secondary)
        .expect_err("secondary without primary");

    assert!(matches!(err, ConfigError::SecondaryBeforePrimary { .. }));
}

#[test]
fn unknown_field_fails_at_setup() {
    let mut builder = RegistryBuilder::new();

    let err = builder
        .register(&TICKET, "missing", Direction::Asc, OrderRole::Primary)
        .expect_err("unknown field");

    assert_eq!(
        err,
        ConfigError::UnknownField {
            entity: TICKET.path,
            field: "missing",
        }
    );
}

#[test]
fn unorderable_field_fails_at_setup() {
    let mut builder = RegistryBuilder::new();

    let err = builder
        .register(&TASK, "tags", Direction::Asc, OrderRole::Primary)
        .expect_err("list field");

    assert_eq!(
        err,
        ConfigError::UnorderableField {
            entity: TASK.path,
            field: "tags",
        }
    );
}

#[test]
fn absent_spec_is_a_silent_lookup_miss() {
    let registry = RegistryBuilder::new().freeze();

    assert!(registry.lookup(NOTE.path).is_none());
    assert!(!registry.has_order(NOTE.path));
}

#[test]
fn fluent_chain_registers_through_shared_registry() {
    let registry = SharedRegistry::new();

    registry
        .entity(&TASK)
        .order_by("category")
        .expect("primary")
        .then_by_desc("priority")
        .expect("tie-break")
        .then_by("name")
        .expect("tie-break");

    let frozen = registry.frozen();
    let spec = frozen.lookup(TASK.path).expect("spec registered");

    assert_eq!(spec.clauses().len(), 3);
    assert!(spec.clauses()[0].is_primary());
    assert!(!spec.clauses()[1].is_primary());
}

#[test]
fn registration_after_freeze_fails() {
    let registry = SharedRegistry::new();

    registry
        .entity(&TICKET)
        .order_by_desc("created_date")
        .expect("primary");

    // first read freezes the staged state
    assert!(registry.frozen().has_order(TICKET.path));

    let err = registry
        .entity(&TASK)
        .order_by("category")
        .expect_err("frozen registry");

    assert_eq!(err, ConfigError::RegistryFrozen { entity: TASK.path });
}

#[test]
fn order_op_table_round_trips_role_and_direction() {
    for role in [OrderRole::Primary, OrderRole::Secondary] {
        for direction in [Direction::Asc, Direction::Desc] {
            let op = OrderOp::new(role, direction);

            assert_eq!(op.role(), role);
            assert_eq!(op.direction(), direction);
        }
    }
}
