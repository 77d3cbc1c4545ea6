use crate::operation::DetailLevel;
use crate::operation::ResourceQueryBuilder;
use crate::operation::descriptors;
use crate::queries;
use crate::queries::CommonQueryError;
use crate::types::ClientFilter;
use crate::types::ClientStatus;
use crate::types::PaginationArgs;
use chrono::TimeZone;
use chrono::Utc;
use serde_json::json;

#[test]
fn list_active_clients_matches_hand_assembled_output() {
    let (document, variables) =
        queries::list_active_clients(1, 25, DetailLevel::Core).unwrap();

    let filter = ClientFilter {
        status: Some(ClientStatus::Active),
        ..ClientFilter::default()
    };
    let pagination = PaginationArgs::new(1, 25).unwrap();
    let expected = ResourceQueryBuilder::new(&descriptors::CLIENT, DetailLevel::Core)
        .list(Some(&filter), Some(&pagination), None)
        .unwrap();

    assert_eq!(document, expected.build_list());
    assert_eq!(variables, expected.variables());
}

#[test]
fn invalid_pagination_propagates_as_a_configuration_error() {
    let error = queries::list_all_clients(
        0,
        50,
        crate::types::SortArgs::ascending("name"),
        DetailLevel::Core,
    )
    .unwrap_err();
    assert!(matches!(error, CommonQueryError::Pagination(_)));
}

#[test]
fn list_open_tickets_filters_on_open_status() {
    let (document, variables) =
        queries::list_open_tickets(1, 50, DetailLevel::Core, false).unwrap();
    assert!(document.contains(
        "tickets(filter: $filter, page: $page, pageSize: $pageSize, \
         sortField: $sortField, sortDirection: $sortDirection) {"
    ));
    assert_eq!(variables.get("filter").unwrap(), &json!({"status": "OPEN"}));
    assert_eq!(variables.get("sortField").unwrap(), &json!("createdAt"));
    assert_eq!(variables.get("sortDirection").unwrap(), &json!("DESC"));
}

#[test]
fn get_ticket_by_id_can_include_comments() {
    let (document, variables) =
        queries::get_ticket_by_id("t-1", DetailLevel::Full, true).unwrap();
    assert!(document.contains("ticket(id: $id) {"));
    assert!(document.contains("comments {\n  ...TicketCommentFields\n}"));
    assert_eq!(variables.get("id").unwrap(), &json!("t-1"));
}

#[test]
fn list_overdue_tickets_binds_the_cutoff_timestamp() {
    let as_of = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let (_, variables) =
        queries::list_overdue_tickets(as_of, 1, 50, DetailLevel::Full).unwrap();
    let filter = variables.get("filter").unwrap();
    assert!(
        filter
            .get("dueBefore")
            .unwrap()
            .as_str()
            .unwrap()
            .starts_with("2024-03-01"),
    );
}

#[test]
fn prepared_queries_parse() {
    let prepared = [
        queries::list_all_clients(
            2,
            10,
            crate::types::SortArgs::ascending("name"),
            DetailLevel::Summary,
        )
        .unwrap(),
        queries::search_clients_by_name("acme", 1, 50, DetailLevel::Core).unwrap(),
        queries::get_client_by_id("c-1", DetailLevel::Full).unwrap(),
        queries::list_urgent_tickets(1, 50, DetailLevel::Full).unwrap(),
        queries::list_assets_by_client("c-1", 1, 50, DetailLevel::Core).unwrap(),
        queries::list_active_assets(1, 50, DetailLevel::Core).unwrap(),
        queries::search_assets_by_type("SERVER", 1, 50, DetailLevel::Core).unwrap(),
        queries::get_asset_by_id("a-1", DetailLevel::Full).unwrap(),
    ];
    for (document, _) in &prepared {
        graphql_parser::parse_query::<String>(document).unwrap();
    }
}
