use crate::fragments::FragmentRegistry;
use crate::fragments::registry;
use crate::operation::DocumentBuildError;
use crate::operation::DocumentBuilder;
use crate::operation::OperationDraft;
use crate::operation::OperationKind;
use crate::operation::document_builder::DraftCore;
use crate::operation::render;
use inherent::inherent;
use serde::Serialize;
use serde_json::Map as JsonMap;
use serde_json::Value as JsonValue;

type Result<T> = std::result::Result<T, DocumentBuildError>;

/// Builder for mutation documents.
///
/// Unlike queries, a mutation has a required terminal configuration step:
/// [`MutationBuilder::mutation_field`] must be called before
/// [`MutationBuilder::build`], which otherwise fails with
/// [`DocumentBuildError::MissingMutationField`]. This is the builder's only
/// internally-detected invariant violation.
#[derive(Clone, Debug)]
pub struct MutationBuilder<'fragreg> {
    core: DraftCore,
    fragment_registry: &'fragreg FragmentRegistry,
    mutation_arguments: String,
    mutation_field: Option<String>,
    return_fields: Vec<String>,
}

impl MutationBuilder<'static> {
    /// A builder backed by the standard fragment
    /// [`registry`](crate::fragments::registry).
    pub fn new() -> Self {
        Self::with_registry(registry())
    }
}

impl Default for MutationBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'fragreg> MutationBuilder<'fragreg> {
    pub fn with_registry(fragment_registry: &'fragreg FragmentRegistry) -> Self {
        Self {
            core: DraftCore::default(),
            fragment_registry,
            mutation_arguments: String::new(),
            mutation_field: None,
            return_fields: vec![],
        }
    }

    /// Set the primary mutation field and its pre-assembled argument list
    /// (without parentheses, e.g. `"id: $id, input: $input"`).
    pub fn mutation_field(
        mut self,
        field: impl Into<String>,
        arguments: impl Into<String>,
    ) -> Self {
        self.mutation_field = Some(field.into());
        self.mutation_arguments = arguments.into();
        self
    }

    /// Append a return-field selection after any previously added ones.
    pub fn return_field(mut self, field: impl AsRef<str>) -> Self {
        self.return_fields.push(field.as_ref().trim().to_string());
        self
    }

    /// Replace all return fields. Used where the payload shape differs
    /// wholesale from the default (e.g. delete acknowledgements).
    pub fn set_return_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.return_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Drop all referenced fragments. Paired with
    /// [`MutationBuilder::set_return_fields`] when the replacement payload
    /// no longer spreads any of them.
    pub fn clear_fragments(mut self) -> Self {
        self.core.fragments.clear();
        self
    }

    /// Render the complete mutation document.
    ///
    /// Errors if no mutation field was ever set; any other configuration is
    /// accepted as-is.
    pub fn build(&self) -> Result<String> {
        let mutation_field = self
            .mutation_field
            .as_deref()
            .ok_or(DocumentBuildError::MissingMutationField)?;

        Ok(render(
            &OperationDraft {
                kind: OperationKind::Mutation,
                operation_name: self.core.operation_name.as_deref(),
                variable_definitions: &self.core.variable_definitions,
                primary_field: mutation_field,
                arguments: &self.mutation_arguments,
                selections: &self.return_fields,
                fragments: &self.core.fragments,
            },
            self.fragment_registry,
        ))
    }
}

#[inherent]
impl<'fragreg> DocumentBuilder for MutationBuilder<'fragreg> {
    pub fn operation_name<S: Into<String>>(mut self, name: S) -> Self {
        self.core.operation_name = Some(name.into());
        self
    }

    pub fn declare_variable<N, T>(mut self, name: N, type_def: T) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        self.core.declare(name.into(), type_def.into());
        self
    }

    pub fn bind_variable<N, T, V>(mut self, name: N, type_def: T, value: &V) -> Result<Self>
    where
        N: Into<String>,
        T: Into<String>,
        V: Serialize + ?Sized,
    {
        self.core.bind(name.into(), type_def.into(), value)?;
        Ok(self)
    }

    pub fn add_fragment<S: Into<String>>(mut self, name: S) -> Self {
        self.core.fragments.insert(name.into());
        self
    }

    pub fn add_fragments<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.core
            .fragments
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn variables(&self) -> JsonMap<String, JsonValue> {
        self.core.variable_values.clone()
    }
}
