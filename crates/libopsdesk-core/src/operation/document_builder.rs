use crate::types::serialize::VariableSerializeError;
use crate::types::serialize::to_variable;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;
use thiserror::Error;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// The configuration surface shared by [`QueryBuilder`] and
/// [`MutationBuilder`]: operation naming, variable declaration/binding, and
/// fragment registration.
///
/// Implemented with [`inherent::inherent`] so the methods are callable
/// without importing this trait.
///
/// [`QueryBuilder`]: crate::operation::QueryBuilder
/// [`MutationBuilder`]: crate::operation::MutationBuilder
pub trait DocumentBuilder: Sized {
    /// Set the operation name rendered in the document header.
    fn operation_name<S: Into<String>>(self, name: S) -> Self;

    /// Declare a GraphQL variable without binding a value (a nullable
    /// variable the transport may supply later).
    fn declare_variable<N, T>(self, name: N, type_def: T) -> Self
    where
        N: Into<String>,
        T: Into<String>;

    /// Declare a variable and bind its serialized value.
    ///
    /// `name` is the variable name without the `$`; `type_def` is the
    /// GraphQL type string (e.g. `"ID!"`, `"TicketFilter"`). The value is
    /// serialized through
    /// [`to_variable`](crate::types::serialize::to_variable).
    fn bind_variable<N, T, V>(self, name: N, type_def: T, value: &V) -> Result<Self>
    where
        N: Into<String>,
        T: Into<String>,
        V: Serialize + ?Sized;

    /// Reference a fragment by name. Set semantics: re-adding a name is a
    /// no-op.
    fn add_fragment<S: Into<String>>(self, name: S) -> Self;

    /// Reference several fragments at once.
    fn add_fragments<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>;

    /// A copy of the bound variable values, keyed to match the `$name`
    /// tokens in the document (without the `$`). Suitable for direct JSON
    /// encoding alongside the document.
    fn variables(&self) -> JsonMap<String, JsonValue>;
}

/// The accumulator state shared by both builders.
///
/// Declarations and values are kept in sync by construction: binding always
/// declares, and nothing ever removes a declaration.
#[derive(Clone, Debug, Default)]
pub(super) struct DraftCore {
    pub(super) operation_name: Option<String>,
    pub(super) variable_definitions: IndexMap<String, String>,
    pub(super) variable_values: JsonMap<String, JsonValue>,
    pub(super) fragments: BTreeSet<String>,
}

impl DraftCore {
    pub(super) fn declare(&mut self, name: String, type_def: String) {
        self.variable_definitions.insert(name, type_def);
    }

    pub(super) fn bind<V>(
        &mut self,
        name: String,
        type_def: String,
        value: &V,
    ) -> std::result::Result<(), VariableSerializeError>
    where
        V: Serialize + ?Sized,
    {
        let serialized = to_variable(value)?;
        self.variable_definitions.insert(name.clone(), type_def);
        self.variable_values.insert(name, serialized);
        Ok(())
    }

    /// Whether `name` has been declared AND bound to a value. Optional
    /// query arguments are only rendered for bound variables.
    pub(super) fn is_bound(&self, name: &str) -> bool {
        self.variable_values.contains_key(name)
    }
}

#[derive(Debug, Error)]
pub enum DocumentBuildError {
    /// A mutation document was finished without ever setting its primary
    /// mutation field.
    #[error("No mutation field was set before building the mutation document.")]
    MissingMutationField,

    #[error("Failed to serialize a variable value: {0}")]
    VariableSerialize(#[from] VariableSerializeError),
}
