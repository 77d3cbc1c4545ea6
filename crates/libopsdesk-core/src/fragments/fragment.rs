use std::collections::BTreeSet;
use std::fmt;

/// A named, reusable GraphQL field-selection block tied to a specific type,
/// potentially composed of other fragments via `...Name` spreads in its
/// field text.
///
/// Fragments are immutable once registered; the set of dependency names is
/// declared up front rather than parsed out of the field text.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    name: String,
    on_type: String,
    fields: String,
    dependencies: BTreeSet<String>,
}

impl Fragment {
    /// Surrounding whitespace on the field block is stripped at construction
    /// so rendering stays uniform regardless of how the literal was written.
    pub fn new(
        name: impl Into<String>,
        on_type: impl Into<String>,
        fields: impl AsRef<str>,
        dependencies: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            on_type: on_type.into(),
            fields: fields.as_ref().trim().to_string(),
            dependencies: dependencies.iter().map(|dep| (*dep).to_string()).collect(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The GraphQL type this fragment's type condition names.
    pub fn on_type(&self) -> &str {
        self.on_type.as_str()
    }

    pub fn fields(&self) -> &str {
        self.fields.as_str()
    }

    /// Names of the fragments spread inside this fragment's field text.
    ///
    /// Callers must not rely on every name resolving: unknown names pass
    /// through resolution as opaque references.
    pub fn dependencies(&self) -> &BTreeSet<String> {
        &self.dependencies
    }

    /// The `...Name` spread form used inside selection sets.
    pub fn spread(&self) -> String {
        format!("...{}", self.name)
    }
}

/// Renders the full `fragment <Name> on <Type> { ... }` definition.
impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fragment {} on {} {{\n{}\n}}",
            self.name, self.on_type, self.fields,
        )
    }
}
