//! Static test-only entity models shared by the core tests.

use crate::model::{EntityModel, FieldKind, FieldModel, ModelRegistry, NavigationModel};

/// Build a runtime field model for test entities.
pub(crate) const fn field(name: &'static str, kind: FieldKind) -> FieldModel {
    FieldModel { name, kind }
}

static TICKET_FIELDS: [FieldModel; 3] = [
    field("id", FieldKind::Int),
    field("name", FieldKind::Text),
    field("created_date", FieldKind::Timestamp),
];

pub(crate) static TICKET: EntityModel = EntityModel {
    path: "test::Ticket",
    entity_name: "Ticket",
    fields: &TICKET_FIELDS,
    navigations: &[],
};

static TASK_FIELDS: [FieldModel; 5] = [
    field("id", FieldKind::Int),
    field("category", FieldKind::Text),
    field("priority", FieldKind::Int),
    field("name", FieldKind::Text),
    field("tags", FieldKind::List(&FieldKind::Text)),
];

pub(crate) static TASK: EntityModel = EntityModel {
    path: "test::Task",
    entity_name: "Task",
    fields: &TASK_FIELDS,
    navigations: &[],
};

static NOTE_FIELDS: [FieldModel; 2] = [
    field("id", FieldKind::Int),
    field("value", FieldKind::Text),
];

/// Entity with no default ordering registered anywhere.
pub(crate) static NOTE: EntityModel = EntityModel {
    path: "test::Note",
    entity_name: "Note",
    fields: &NOTE_FIELDS,
    navigations: &[],
};

static COMPANY_FIELDS: [FieldModel; 3] = [
    field("id", FieldKind::Int),
    field("name", FieldKind::Text),
    field("founded", FieldKind::Timestamp),
];

pub(crate) static COMPANY: EntityModel = EntityModel {
    path: "test::Company",
    entity_name: "Company",
    fields: &COMPANY_FIELDS,
    navigations: &[&COMPANY_DEPARTMENTS],
};

static DEPARTMENT_FIELDS: [FieldModel; 4] = [
    field("id", FieldKind::Int),
    field("company_id", FieldKind::Int),
    field("name", FieldKind::Text),
    field("display_order", FieldKind::Int),
];

pub(crate) static DEPARTMENT: EntityModel = EntityModel {
    path: "test::Department",
    entity_name: "Department",
    fields: &DEPARTMENT_FIELDS,
    navigations: &[&DEPARTMENT_EMPLOYEES, &DEPARTMENT_COMPANY],
};

static EMPLOYEE_FIELDS: [FieldModel; 5] = [
    field("id", FieldKind::Int),
    field("department_id", FieldKind::Int),
    field("name", FieldKind::Text),
    field("hire_date", FieldKind::Timestamp),
    field("salary", FieldKind::Int),
];

pub(crate) static EMPLOYEE: EntityModel = EntityModel {
    path: "test::Employee",
    entity_name: "Employee",
    fields: &EMPLOYEE_FIELDS,
    navigations: &[],
};

pub(crate) static COMPANY_DEPARTMENTS: NavigationModel = NavigationModel {
    name: "departments",
    target: "test::Department",
    is_collection: true,
};

pub(crate) static DEPARTMENT_EMPLOYEES: NavigationModel = NavigationModel {
    name: "employees",
    target: "test::Employee",
    is_collection: true,
};

pub(crate) static DEPARTMENT_COMPANY: NavigationModel = NavigationModel {
    name: "company",
    target: "test::Company",
    is_collection: false,
};

/// Navigation whose target is missing from the model registry.
pub(crate) static DANGLING_NAV: NavigationModel = NavigationModel {
    name: "orphans",
    target: "test::Missing",
    is_collection: true,
};

/// Model registry over every test entity.
pub(crate) fn model() -> ModelRegistry {
    ModelRegistry::new(&[&TICKET, &TASK, &NOTE, &COMPANY, &DEPARTMENT, &EMPLOYEE])
}
