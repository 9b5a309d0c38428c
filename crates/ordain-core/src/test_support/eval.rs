//! Minimal in-memory evaluator for ordering semantics.
//!
//! Executes the row-visible behavior of a plan over fixture tables so tests
//! can assert concrete row order. Reductions pass rows through untouched;
//! tests assert reduction structure, never scalar results.

use crate::{
    order::Direction,
    plan::{CompareOp, PlanNode, Predicate, ProjectionBinding, Value},
};
use std::{cmp::Ordering, collections::BTreeMap};

///
/// Row
/// One materialized row: scalar fields plus loaded collections.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Row {
    pub fields: BTreeMap<&'static str, Value>,
    pub loaded: BTreeMap<&'static str, Vec<Row>>,
}

impl Row {
    pub(crate) fn new(fields: &[(&'static str, Value)]) -> Self {
        Self {
            fields: fields.iter().cloned().collect(),
            loaded: BTreeMap::new(),
        }
    }

    /// Text field accessor for terse assertions.
    pub(crate) fn text(&self, field: &str) -> &str {
        match self.fields.get(field) {
            Some(Value::Text(text)) => text,
            _ => "",
        }
    }
}

///
/// Link
/// Parent/child join used when evaluating eager loads and projected
/// collections.
///

pub(crate) struct Link {
    pub navigation: &'static str,
    pub child_key: &'static str,
    pub parent_key: &'static str,
}

///
/// Dataset
/// In-memory tables keyed by entity path.
///

#[derive(Default)]
pub(crate) struct Dataset {
    pub tables: BTreeMap<&'static str, Vec<Row>>,
    pub links: Vec<Link>,
}

impl Dataset {
    pub(crate) fn run(&self, plan: &PlanNode) -> Vec<Row> {
        self.eval(plan)
    }

    fn eval(&self, plan: &PlanNode) -> Vec<Row> {
        match plan {
            PlanNode::Source { entity } => self.tables.get(entity).cloned().unwrap_or_default(),

            PlanNode::Filter { source, predicate } => self
                .eval(source)
                .into_iter()
                .filter(|row| matches(predicate, row))
                .collect(),

            PlanNode::OrderPrimary { .. } | PlanNode::OrderSecondary { .. } => {
                // collect the contiguous ordering run so tie-breaks refine
                // the primary sort instead of re-sorting the sequence
                let mut keys: Vec<(&'static str, Direction)> = Vec::new();
                let mut node = plan;

                while let PlanNode::OrderSecondary {
                    source,
                    field,
                    direction,
                } = node
                {
                    keys.push((*field, *direction));
                    node = source.as_ref();
                }
                if let PlanNode::OrderPrimary {
                    source,
                    field,
                    direction,
                } = node
                {
                    keys.push((*field, *direction));
                    node = source.as_ref();
                }
                keys.reverse();

                let mut rows = self.eval(node);
                rows.sort_by(|a, b| compare_rows(a, b, &keys));
                rows
            }

            PlanNode::EagerLoad {
                source,
                navigation,
                sub_plan,
            } => {
                let mut rows = self.eval(source);
                let children = self.eval(sub_plan);

                for row in &mut rows {
                    let matched = self.relate(navigation.name, row, &children);
                    row.loaded.insert(navigation.name, matched);
                }

                rows
            }

            PlanNode::Project { source, shape } => self
                .eval(source)
                .into_iter()
                .map(|row| {
                    let mut out = Row::default();

                    for binding in &shape.bindings {
                        match binding {
                            ProjectionBinding::Field { name } => {
                                if let Some(value) = row.fields.get(name) {
                                    out.fields.insert(*name, value.clone());
                                }
                            }
                            ProjectionBinding::Collection { name, plan } => {
                                let children = self.eval(plan);
                                out.loaded.insert(*name, self.relate(name, &row, &children));
                            }
                        }
                    }

                    out
                })
                .collect(),

            PlanNode::Reduce { source, .. } | PlanNode::Opaque { source, .. } => self.eval(source),
        }
    }

    /// Children of `row` through the named link; all children when no link
    /// is declared.
    fn relate(&self, navigation: &str, row: &Row, children: &[Row]) -> Vec<Row> {
        match self.links.iter().find(|link| link.navigation == navigation) {
            Some(link) => children
                .iter()
                .filter(|child| child.fields.get(link.child_key) == row.fields.get(link.parent_key))
                .cloned()
                .collect(),
            None => children.to_vec(),
        }
    }
}

fn matches(predicate: &Predicate, row: &Row) -> bool {
    match predicate {
        Predicate::True => true,
        Predicate::Compare { field, op, value } => {
            row.fields.get(field).is_some_and(|actual| {
                let ordering = actual.cmp(value);
                match op {
                    CompareOp::Eq => ordering == Ordering::Equal,
                    CompareOp::Ne => ordering != Ordering::Equal,
                    CompareOp::Lt => ordering == Ordering::Less,
                    CompareOp::Lte => ordering != Ordering::Greater,
                    CompareOp::Gt => ordering == Ordering::Greater,
                    CompareOp::Gte => ordering != Ordering::Less,
                }
            })
        }
        Predicate::And(parts) => parts.iter().all(|part| matches(part, row)),
        Predicate::Or(parts) => parts.iter().any(|part| matches(part, row)),
        Predicate::Not(inner) => !matches(inner, row),
    }
}

fn compare_rows(a: &Row, b: &Row, keys: &[(&'static str, Direction)]) -> Ordering {
    for (field, direction) in keys {
        let ordering = match (a.fields.get(field), b.fields.get(field)) {
            (Some(left), Some(right)) => left.cmp(right),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        };

        let ordering = match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}
