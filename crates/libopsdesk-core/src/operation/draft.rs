use crate::operation::OperationKind;
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Read-only view of a builder's accumulated state, consumed by
/// [`render`](crate::operation::render).
///
/// A draft borrows everything from the owning builder, so rendering never
/// consumes or resets builder state: building twice from an unchanged
/// builder yields byte-identical documents.
#[derive(Clone, Copy, Debug)]
pub struct OperationDraft<'builder> {
    pub kind: OperationKind,
    pub operation_name: Option<&'builder str>,
    /// Variable declarations in insertion order, name (without `$`) to
    /// GraphQL type string (e.g. `"ID!"`, `"[String!]"`).
    pub variable_definitions: &'builder IndexMap<String, String>,
    /// The field the operation's selections hang off (e.g. `tickets`,
    /// `createClient`).
    pub primary_field: &'builder str,
    /// Pre-assembled argument list for the primary field, without the
    /// surrounding parentheses; empty when the field takes no arguments.
    pub arguments: &'builder str,
    pub selections: &'builder [String],
    /// Fragment names referenced by the selections. Transitive dependencies
    /// are resolved at render time.
    pub fragments: &'builder BTreeSet<String>,
}
