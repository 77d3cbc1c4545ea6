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

/// Builder for query documents with field selection.
///
/// Configuration methods are chainable and idempotent-safe to repeat, but a
/// single builder instance is one logical document: it must not be shared
/// across threads. [`QueryBuilder::build`] borrows rather than consumes, so
/// repeated builds of an unchanged builder reproduce the same document and
/// [`QueryBuilder::variables`] stays available afterwards.
#[derive(Clone, Debug)]
pub struct QueryBuilder<'fragreg> {
    core: DraftCore,
    fragment_registry: &'fragreg FragmentRegistry,
    selections: Vec<String>,
}

impl QueryBuilder<'static> {
    /// A builder backed by the standard fragment
    /// [`registry`](crate::fragments::registry).
    pub fn new() -> Self {
        Self::with_registry(registry())
    }
}

impl Default for QueryBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'fragreg> QueryBuilder<'fragreg> {
    pub fn with_registry(fragment_registry: &'fragreg FragmentRegistry) -> Self {
        Self {
            core: DraftCore::default(),
            fragment_registry,
            selections: vec![],
        }
    }

    /// Append a field-selection block after any previously added selections.
    pub fn add_selection(mut self, selection: impl AsRef<str>) -> Self {
        self.selections.push(selection.as_ref().trim().to_string());
        self
    }

    pub fn selections(&self) -> &[String] {
        &self.selections
    }

    pub(super) fn is_bound(&self, name: &str) -> bool {
        self.core.is_bound(name)
    }

    /// Render the complete query document: header, `query_field` with its
    /// argument list wrapping the accumulated selections, and the resolved
    /// fragment definitions.
    pub fn build(&self, query_field: &str, arguments: &str) -> String {
        render(
            &OperationDraft {
                kind: OperationKind::Query,
                operation_name: self.core.operation_name.as_deref(),
                variable_definitions: &self.core.variable_definitions,
                primary_field: query_field,
                arguments,
                selections: &self.selections,
                fragments: &self.core.fragments,
            },
            self.fragment_registry,
        )
    }
}

#[inherent]
impl<'fragreg> DocumentBuilder for QueryBuilder<'fragreg> {
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
