use crate::fragments::FragmentRegistry;
use crate::operation::OperationDraft;

/// Assembles the complete operation document from a draft.
///
/// Layout:
///
/// ```text
/// <kind> [<name>][(<$var>: <Type>, ...)] {
/// <primary field>(<args>) {
///   <selections>
/// }
/// }
///
/// <fragment definitions, blank-line separated, lexicographic>
/// ```
///
/// Referenced fragments are expanded to their transitive dependency closure
/// through `registry` before rendering; names the registry does not know
/// are carried through resolution and dropped at rendering.
pub fn render(draft: &OperationDraft<'_>, registry: &FragmentRegistry) -> String {
    let mut header = draft.kind.keyword().to_string();
    if let Some(name) = draft.operation_name {
        header.push(' ');
        header.push_str(name);
    }
    if !draft.variable_definitions.is_empty() {
        let definitions: Vec<String> = draft
            .variable_definitions
            .iter()
            .map(|(name, type_def)| format!("${name}: {type_def}"))
            .collect();
        header.push('(');
        header.push_str(&definitions.join(", "));
        header.push(')');
    }

    let selections: Vec<String> = draft
        .selections
        .iter()
        .map(|selection| format!("  {selection}"))
        .collect();
    let selections = selections.join("\n");

    let body = if draft.arguments.is_empty() {
        format!("{} {{\n{selections}\n}}", draft.primary_field)
    } else {
        format!(
            "{}({}) {{\n{selections}\n}}",
            draft.primary_field, draft.arguments,
        )
    };

    let mut document = format!("{header} {{\n{body}\n}}");

    if !draft.fragments.is_empty() {
        let resolved = registry.resolve(draft.fragments.iter().map(String::as_str));
        let fragment_definitions =
            registry.render(resolved.iter().map(String::as_str));
        if !fragment_definitions.is_empty() {
            document.push_str("\n\n");
            document.push_str(&fragment_definitions);
        }
    }

    document
}
