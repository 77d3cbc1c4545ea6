//! Direct tests of the pure document-assembly function, independent of any
//! builder.

use crate::fragments::Fragment;
use crate::fragments::FragmentRegistryBuilder;
use crate::operation::OperationDraft;
use crate::operation::OperationKind;
use crate::operation::render;
use indexmap::IndexMap;
use std::collections::BTreeSet;

#[test]
fn renders_header_body_and_fragments_with_blank_line_separation() {
    let mut builder = FragmentRegistryBuilder::new();
    builder.register(Fragment::new("ThingFields", "Thing", "id\nname", &[]));
    let registry = builder.build();

    let mut variable_definitions = IndexMap::new();
    variable_definitions.insert("id".to_string(), "ID!".to_string());
    let selections = vec!["...ThingFields".to_string()];
    let fragments: BTreeSet<String> = ["ThingFields".to_string()].into();

    let document = render(
        &OperationDraft {
            kind: OperationKind::Query,
            operation_name: Some("GetThing"),
            variable_definitions: &variable_definitions,
            primary_field: "thing",
            arguments: "id: $id",
            selections: &selections,
            fragments: &fragments,
        },
        &registry,
    );

    assert_eq!(
        document,
        "query GetThing($id: ID!) {\n\
         thing(id: $id) {\n  ...ThingFields\n}\n}\n\n\
         fragment ThingFields on Thing {\nid\nname\n}",
    );
}

#[test]
fn omits_parentheses_without_declarations_or_arguments() {
    let variable_definitions = IndexMap::new();
    let selections = vec!["id".to_string()];
    let fragments = BTreeSet::new();

    let document = render(
        &OperationDraft {
            kind: OperationKind::Mutation,
            operation_name: None,
            variable_definitions: &variable_definitions,
            primary_field: "ping",
            arguments: "",
            selections: &selections,
            fragments: &fragments,
        },
        &FragmentRegistryBuilder::new().build(),
    );

    assert_eq!(document, "mutation {\nping {\n  id\n}\n}");
}

#[test]
fn fragment_closure_is_expanded_at_render_time() {
    let mut builder = FragmentRegistryBuilder::new();
    builder.register(Fragment::new(
        "OuterFields",
        "Thing",
        "...InnerFields\nname",
        &["InnerFields"],
    ));
    builder.register(Fragment::new("InnerFields", "Thing", "id", &[]));
    let registry = builder.build();

    let variable_definitions = IndexMap::new();
    let selections = vec!["...OuterFields".to_string()];
    let fragments: BTreeSet<String> = ["OuterFields".to_string()].into();

    let document = render(
        &OperationDraft {
            kind: OperationKind::Query,
            operation_name: None,
            variable_definitions: &variable_definitions,
            primary_field: "things",
            arguments: "",
            selections: &selections,
            fragments: &fragments,
        },
        &registry,
    );

    // InnerFields sorts before OuterFields.
    let inner_pos = document.find("fragment InnerFields").unwrap();
    let outer_pos = document.find("fragment OuterFields").unwrap();
    assert!(inner_pos < outer_pos);
}
