use crate::types::ClientFilter;
use crate::types::ClientStatus;
use crate::types::TicketFilter;
use crate::types::TicketInput;
use crate::types::TicketStatus;
use crate::types::serialize::serialize_value;
use crate::types::serialize::snake_to_camel;
use crate::types::serialize::to_variable;
use chrono::TimeZone;
use chrono::Utc;
use serde_json::json;

#[test]
fn snake_to_camel_is_mechanical() {
    assert_eq!(snake_to_camel("name"), "name");
    assert_eq!(snake_to_camel("created_after"), "createdAfter");
    assert_eq!(snake_to_camel("a_b_c"), "aBC");
    assert_eq!(snake_to_camel("custom_fields"), "customFields");
    assert_eq!(snake_to_camel("alreadyCamel"), "alreadyCamel");
    assert_eq!(snake_to_camel(""), "");
}

#[test]
fn sparse_filters_serialize_only_set_fields() {
    let filter = ClientFilter {
        name: Some("Acme".to_string()),
        ..ClientFilter::default()
    };
    assert_eq!(to_variable(&filter).unwrap(), json!({"name": "Acme"}));
}

#[test]
fn unset_fields_are_omitted_not_null() {
    let filter = TicketFilter {
        status: Some(TicketStatus::Open),
        ..TicketFilter::default()
    };
    let value = to_variable(&filter).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(!object.contains_key("clientId"));
}

#[test]
fn enums_serialize_to_their_wire_codes() {
    assert_eq!(
        to_variable(&ClientStatus::Active).unwrap(),
        json!("ACTIVE"),
    );
    assert_eq!(
        to_variable(&TicketStatus::InProgress).unwrap(),
        json!("IN_PROGRESS"),
    );
}

#[test]
fn timestamps_serialize_to_iso8601() {
    let filter = TicketFilter {
        due_before: Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
        ..TicketFilter::default()
    };
    let value = to_variable(&filter).unwrap();
    let due_before = value.get("dueBefore").unwrap().as_str().unwrap();
    assert!(due_before.starts_with("2024-06-01T12:00:00"));
}

#[test]
fn field_names_convert_to_camel_case() {
    let filter = TicketFilter {
        client_id: Some("c-1".to_string()),
        assigned_to: Some("u-9".to_string()),
        ..TicketFilter::default()
    };
    let value = to_variable(&filter).unwrap();
    assert_eq!(value, json!({"assignedTo": "u-9", "clientId": "c-1"}));
}

#[test]
fn sequences_serialize_element_wise() {
    let filter = ClientFilter {
        tags: Some(vec!["vip".to_string(), "msp".to_string()]),
        ..ClientFilter::default()
    };
    assert_eq!(
        to_variable(&filter).unwrap(),
        json!({"tags": ["vip", "msp"]}),
    );
}

#[test]
fn nested_objects_convert_recursively() {
    let value = serialize_value(json!({
        "outer_key": {
            "inner_key": 1,
            "dropped_key": null,
        },
        "kept": [1, null, 2],
    }));
    assert_eq!(
        value,
        json!({
            "outerKey": {"innerKey": 1},
            "kept": [1, null, 2],
        }),
    );
}

#[test]
fn scalars_pass_through_unchanged() {
    assert_eq!(serialize_value(json!(42)), json!(42));
    assert_eq!(serialize_value(json!(true)), json!(true));
    assert_eq!(serialize_value(json!("plain")), json!("plain"));
}

#[test]
fn inputs_serialize_required_and_set_optional_fields() {
    let input = TicketInput {
        client_id: "c-1".to_string(),
        title: "Printer on fire".to_string(),
        status: Some(TicketStatus::Open),
        ..TicketInput::default()
    };
    assert_eq!(
        to_variable(&input).unwrap(),
        json!({
            "clientId": "c-1",
            "status": "OPEN",
            "title": "Printer on fire",
        }),
    );
}
