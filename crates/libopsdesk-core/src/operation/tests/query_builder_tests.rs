use crate::operation::QueryBuilder;
use serde_json::json;

#[test]
fn minimal_query_layout() {
    let builder = QueryBuilder::new().add_selection("id");
    assert_eq!(builder.build("ping", ""), "query {\nping {\n  id\n}\n}");
}

#[test]
fn header_includes_operation_name_and_declarations_in_insertion_order() {
    let builder = QueryBuilder::new()
        .operation_name("GetThings")
        .declare_variable("second", "String")
        .declare_variable("first", "Int!")
        .add_selection("id");
    let document = builder.build("things", "");
    assert!(document.starts_with(
        "query GetThings($second: String, $first: Int!) {"
    ));
}

#[test]
fn declared_but_unbound_variables_render_without_a_value() {
    let builder = QueryBuilder::new()
        .declare_variable("cursor", "String")
        .add_selection("id");
    let document = builder.build("things", "");
    assert!(document.contains("($cursor: String)"));
    assert!(builder.variables().is_empty());
}

#[test]
fn bound_variables_appear_in_the_variables_map() {
    let builder = QueryBuilder::new()
        .bind_variable("id", "ID!", "abc-123")
        .unwrap()
        .add_selection("id");
    assert_eq!(builder.variables().get("id").unwrap(), &json!("abc-123"));
}

#[test]
fn selections_are_indented_two_spaces_and_kept_in_order() {
    let builder = QueryBuilder::new()
        .add_selection("first")
        .add_selection("second {\n  nested\n}");
    let document = builder.build("things", "");
    assert_eq!(
        document,
        "query {\nthings {\n  first\n  second {\n  nested\n}\n}\n}",
    );
}

#[test]
fn referenced_fragments_are_appended_with_dependencies_once() {
    let builder = QueryBuilder::new()
        .add_selection("...TicketCoreFields")
        .add_fragment("TicketCoreFields");
    let document = builder.build("tickets", "");
    assert_eq!(
        document.matches("fragment TicketCoreFields on Ticket {").count(),
        1,
    );
    assert_eq!(
        document.matches("fragment BaseFields on BaseModel {").count(),
        1,
    );
}

#[test]
fn re_adding_a_fragment_is_a_no_op() {
    let builder = QueryBuilder::new()
        .add_selection("...TicketCoreFields")
        .add_fragment("TicketCoreFields")
        .add_fragment("TicketCoreFields")
        .add_fragments(["TicketCoreFields"]);
    let document = builder.build("tickets", "");
    assert_eq!(
        document.matches("fragment TicketCoreFields on Ticket {").count(),
        1,
    );
}

#[test]
fn unknown_fragment_references_are_dropped_from_output() {
    let builder = QueryBuilder::new()
        .add_selection("...ExternalFields")
        .add_fragment("ExternalFields");
    let document = builder.build("things", "");
    assert!(!document.contains("fragment ExternalFields"));
}

#[test]
fn building_twice_reproduces_the_same_document() {
    let builder = QueryBuilder::new()
        .operation_name("ListThings")
        .bind_variable("page", "Int", &1)
        .unwrap()
        .add_selection("id")
        .add_fragment("PaginationInfo");
    let first = builder.build("things", "page: $page");
    let second = builder.build("things", "page: $page");
    assert_eq!(first, second);

    // variables() stays available after building.
    assert_eq!(builder.variables().get("page").unwrap(), &json!(1));
}

#[test]
fn generated_documents_parse() {
    let builder = QueryBuilder::new()
        .operation_name("ListTickets")
        .bind_variable("page", "Int", &1)
        .unwrap()
        .add_selection("items {\n  ...TicketCoreFields\n}")
        .add_fragment("TicketCoreFields");
    let document = builder.build("tickets", "page: $page");
    graphql_parser::parse_query::<String>(&document).unwrap();
}
