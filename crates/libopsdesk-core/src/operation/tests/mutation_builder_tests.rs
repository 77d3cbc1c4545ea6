use crate::operation::DocumentBuildError;
use crate::operation::MutationBuilder;
use serde_json::json;

#[test]
fn building_without_a_mutation_field_is_an_error() {
    let builder = MutationBuilder::new().return_field("id");
    let error = builder.build().unwrap_err();
    assert!(matches!(error, DocumentBuildError::MissingMutationField));
}

#[test]
fn mutation_layout() {
    let builder = MutationBuilder::new()
        .bind_variable("input", "ClientInput!", &json!({"name": "Acme"}))
        .unwrap()
        .mutation_field("createClient", "input: $input")
        .return_field("id")
        .return_field("name");
    assert_eq!(
        builder.build().unwrap(),
        "mutation($input: ClientInput!) {\n\
         createClient(input: $input) {\n  id\n  name\n}\n}",
    );
}

#[test]
fn mutation_with_operation_name() {
    let builder = MutationBuilder::new()
        .operation_name("CreateClient")
        .bind_variable("input", "ClientInput!", &json!({"name": "Acme"}))
        .unwrap()
        .mutation_field("createClient", "input: $input")
        .return_field("id");
    let document = builder.build().unwrap();
    assert!(document.starts_with("mutation CreateClient($input: ClientInput!) {"));
}

#[test]
fn set_return_fields_replaces_previous_ones() {
    let builder = MutationBuilder::new()
        .return_field("...ClientCoreFields")
        .set_return_fields(["success", "message"])
        .mutation_field("deleteClient", "id: $id")
        .declare_variable("id", "ID!");
    let document = builder.build().unwrap();
    assert!(document.contains("  success\n  message"));
    assert!(!document.contains("ClientCoreFields"));
}

#[test]
fn referenced_fragments_are_appended_after_the_body() {
    let builder = MutationBuilder::new()
        .bind_variable("input", "TicketInput!", &json!({"title": "Help"}))
        .unwrap()
        .mutation_field("createTicket", "input: $input")
        .return_field("...TicketCoreFields")
        .add_fragment("TicketCoreFields");
    let document = builder.build().unwrap();
    let body_end = document.find("\n}\n\n").unwrap();
    let fragment_pos = document.find("fragment TicketCoreFields").unwrap();
    assert!(fragment_pos > body_end);
}

#[test]
fn building_twice_reproduces_the_same_document() {
    let builder = MutationBuilder::new()
        .bind_variable("id", "ID!", "t-1")
        .unwrap()
        .mutation_field("deleteTicket", "id: $id")
        .set_return_fields(["success", "message"]);
    assert_eq!(builder.build().unwrap(), builder.build().unwrap());
    assert_eq!(builder.variables().get("id").unwrap(), &json!("t-1"));
}

#[test]
fn generated_documents_parse() {
    let builder = MutationBuilder::new()
        .operation_name("CreateTicket")
        .bind_variable("input", "TicketInput!", &json!({"title": "Help"}))
        .unwrap()
        .mutation_field("createTicket", "input: $input")
        .return_field("...TicketCoreFields")
        .add_fragment("TicketCoreFields");
    graphql_parser::parse_query::<String>(&builder.build().unwrap()).unwrap();
}
