use crate::operation::DetailLevel;
use crate::operation::ResourceMutationBuilder;
use crate::operation::ResourceQueryBuilder;
use crate::operation::descriptors;
use crate::types::ClientInput;
use crate::types::PaginationArgs;
use crate::types::SortArgs;
use crate::types::TicketFilter;
use crate::types::TicketStatus;
use serde_json::json;

#[test]
fn ticket_list_with_filter_and_pagination() {
    let filter = TicketFilter {
        status: Some(TicketStatus::Open),
        ..TicketFilter::default()
    };
    let pagination = PaginationArgs::new(1, 50).unwrap();
    let builder = ResourceQueryBuilder::new(&descriptors::TICKET, DetailLevel::Core)
        .list(Some(&filter), Some(&pagination), None)
        .unwrap();

    let document = builder.build_list();
    assert!(document.contains(
        "tickets(filter: $filter, page: $page, pageSize: $pageSize) {"
    ));

    let variables = builder.variables();
    assert_eq!(variables.get("filter").unwrap(), &json!({"status": "OPEN"}));
    assert_eq!(variables.get("page").unwrap(), &json!(1));
    assert_eq!(variables.get("pageSize").unwrap(), &json!(50));

    // The core fragment and its base dependency are each present exactly once.
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
fn list_argument_order_is_fixed_regardless_of_what_is_supplied() {
    let sort = SortArgs::descending("createdAt");
    let builder = ResourceQueryBuilder::new(&descriptors::TICKET, DetailLevel::Core)
        .list::<TicketFilter>(None, None, Some(&sort))
        .unwrap();
    let document = builder.build_list();
    assert!(document.contains(
        "tickets(sortField: $sortField, sortDirection: $sortDirection) {"
    ));
    assert_eq!(
        builder.variables().get("sortDirection").unwrap(),
        &json!("DESC"),
    );
}

#[test]
fn list_without_arguments_renders_a_bare_field() {
    let builder = ResourceQueryBuilder::new(&descriptors::CLIENT, DetailLevel::Summary)
        .list::<TicketFilter>(None, None, None)
        .unwrap();
    let document = builder.build_list();
    assert!(document.contains("clients {\n"));
    assert!(builder.variables().is_empty());
}

#[test]
fn list_selections_include_items_and_pagination_blocks() {
    let builder = ResourceQueryBuilder::new(&descriptors::CLIENT, DetailLevel::Core)
        .list::<TicketFilter>(None, None, None)
        .unwrap();
    let document = builder.build_list();
    assert!(document.contains("  items {\n  ...ClientCoreFields\n}"));
    assert!(document.contains("  pagination {\n  ...PaginationInfo\n}"));
    assert_eq!(
        document.matches("fragment PaginationInfo on PaginationInfo {").count(),
        1,
    );
}

#[test]
fn nested_sections_are_opt_in() {
    let plain = ResourceQueryBuilder::new(&descriptors::TICKET, DetailLevel::Core)
        .list::<TicketFilter>(None, None, None)
        .unwrap()
        .build_list();
    assert!(!plain.contains("comments"));

    let with_comments =
        ResourceQueryBuilder::new(&descriptors::TICKET, DetailLevel::Core)
            .with_section("comments")
            .list::<TicketFilter>(None, None, None)
            .unwrap()
            .build_list();
    assert!(with_comments.contains(
        "items {\n  ...TicketCoreFields\n  comments {\n    ...TicketCommentFields\n  }\n}"
    ));
    assert_eq!(
        with_comments
            .matches("fragment TicketCommentFields on TicketComment {")
            .count(),
        1,
    );
}

#[test]
fn undeclared_sections_are_ignored() {
    let builder = ResourceQueryBuilder::new(&descriptors::CLIENT, DetailLevel::Core)
        .with_section("comments")
        .list::<TicketFilter>(None, None, None)
        .unwrap();
    assert!(!builder.build_list().contains("comments"));
}

#[test]
fn get_by_id_uses_the_singular_field() {
    let builder = ResourceQueryBuilder::new(&descriptors::TICKET, DetailLevel::Full)
        .get("t-42")
        .unwrap();
    let document = builder.build_get();
    assert!(document.contains("ticket(id: $id) {"));
    assert!(document.contains("($id: ID!)"));
    assert_eq!(builder.variables().get("id").unwrap(), &json!("t-42"));

    // full -> core -> base closure, each rendered exactly once.
    for fragment in ["TicketFullFields", "TicketCoreFields", "BaseFields"] {
        assert_eq!(
            document.matches(&format!("fragment {fragment} on")).count(),
            1,
        );
    }
}

#[test]
fn get_with_sections_nests_them_at_the_top_level() {
    let builder = ResourceQueryBuilder::new(&descriptors::TICKET, DetailLevel::Core)
        .with_section("comments")
        .get("t-42")
        .unwrap();
    let document = builder.build_get();
    assert!(document.contains(
        "  ...TicketCoreFields\ncomments {\n  ...TicketCommentFields\n}"
    ));
}

#[test]
fn create_mutation_shape() {
    let input = ClientInput {
        name: "Acme".to_string(),
        ..ClientInput::default()
    };
    let builder = ResourceMutationBuilder::new(&descriptors::CLIENT, DetailLevel::Core)
        .create(&input)
        .unwrap();
    let document = builder.build().unwrap();
    assert!(document.contains("createClient(input: $input) {"));
    assert!(document.contains("($input: ClientInput!)"));
    assert!(document.contains("  ...ClientCoreFields"));
    assert_eq!(
        builder.variables().get("input").unwrap(),
        &json!({"name": "Acme"}),
    );
}

#[test]
fn update_mutation_shape() {
    let input = ClientInput {
        name: "Acme".to_string(),
        notes: Some("renewed".to_string()),
        ..ClientInput::default()
    };
    let builder = ResourceMutationBuilder::new(&descriptors::CLIENT, DetailLevel::Core)
        .update("c-7", &input)
        .unwrap();
    let document = builder.build().unwrap();
    assert!(document.contains("updateClient(id: $id, input: $input) {"));
    assert!(document.contains("($id: ID!, $input: ClientInput!)"));
    assert_eq!(
        builder.variables().get("input").unwrap(),
        &json!({"name": "Acme", "notes": "renewed"}),
    );
}

#[test]
fn delete_mutation_returns_an_acknowledgement_without_fragments() {
    let builder = ResourceMutationBuilder::new(&descriptors::CLIENT, DetailLevel::Core)
        .delete("c-7")
        .unwrap();
    let document = builder.build().unwrap();
    assert!(document.contains("deleteClient(id: $id) {\n  success\n  message\n}"));
    assert!(!document.contains("fragment"));
}

#[test]
fn mutation_without_an_action_fails_to_build() {
    let builder =
        ResourceMutationBuilder::new(&descriptors::CLIENT, DetailLevel::Core);
    assert!(builder.build().is_err());
}

#[test]
fn every_resource_generates_parseable_documents() {
    for descriptor in descriptors::ALL.iter().copied() {
        let list = ResourceQueryBuilder::new(descriptor, DetailLevel::Core)
            .list::<TicketFilter>(None, None, None)
            .unwrap()
            .build_list();
        graphql_parser::parse_query::<String>(&list).unwrap_or_else(|err| {
            panic!("{} list document does not parse: {err}", descriptor.name)
        });

        let get = ResourceQueryBuilder::new(descriptor, DetailLevel::Full)
            .get("x-1")
            .unwrap()
            .build_get();
        graphql_parser::parse_query::<String>(&get).unwrap_or_else(|err| {
            panic!("{} get document does not parse: {err}", descriptor.name)
        });

        let delete = ResourceMutationBuilder::new(descriptor, DetailLevel::Core)
            .delete("x-1")
            .unwrap()
            .build()
            .unwrap();
        graphql_parser::parse_query::<String>(&delete).unwrap_or_else(|err| {
            panic!("{} delete document does not parse: {err}", descriptor.name)
        });
    }
}
