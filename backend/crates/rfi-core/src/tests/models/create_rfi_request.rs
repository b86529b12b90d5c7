use crate::{Assignee, CoreError, CreateRfiRequest};

use chrono::NaiveDate;
use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serde_json::{Value, json};

fn minimal() -> CreateRfiRequest {
    CreateRfiRequest::new(
        "Need spec clarification",
        "Please clarify section 4",
        "High",
        "PRJ-100",
    )
}

fn full() -> CreateRfiRequest {
    CreateRfiRequest::new(
        "Material delay",
        "Steel delivery delayed 2 weeks",
        "Urgent",
        "PRJ-204",
    )
    .with_deadline("2024-06-01")
    .with_assigned_to_username("jdoe")
    .with_assigned_group_name("procurement")
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn given_required_fields_when_new_then_optional_fields_absent() {
    let request = minimal();

    assert_that!(request.title.as_str(), eq("Need spec clarification"));
    assert_that!(request.description.as_str(), eq("Please clarify section 4"));
    assert_that!(request.priority.as_str(), eq("High"));
    assert_that!(request.project_code.as_str(), eq("PRJ-100"));
    assert!(request.deadline.is_none());
    assert!(request.assigned_to_username.is_none());
    assert!(request.assigned_group_name.is_none());
}

#[test]
fn given_builder_methods_when_chained_then_all_fields_present() {
    let request = full();

    assert_eq!(request.deadline.as_deref(), Some("2024-06-01"));
    assert_eq!(request.assigned_to_username.as_deref(), Some("jdoe"));
    assert_eq!(request.assigned_group_name.as_deref(), Some("procurement"));
}

#[test]
fn given_empty_strings_when_new_then_accepted_as_is() {
    let request = CreateRfiRequest::new("", "", "", "");

    assert_that!(request.title.as_str(), eq(""));
    assert_that!(request.priority.as_str(), eq(""));
}

// =========================================================================
// Wire format
// =========================================================================

#[test]
fn given_minimal_request_when_serialized_then_optional_keys_omitted() {
    let value: Value = serde_json::to_value(minimal()).unwrap();

    assert_eq!(
        value,
        json!({
            "title": "Need spec clarification",
            "description": "Please clarify section 4",
            "priority": "High",
            "projectCode": "PRJ-100"
        })
    );
}

#[test]
fn given_full_request_when_serialized_then_keys_are_camel_case() {
    let value: Value = serde_json::to_value(full()).unwrap();

    assert_eq!(value["projectCode"], "PRJ-204");
    assert_eq!(value["deadline"], "2024-06-01");
    assert_eq!(value["assignedToUsername"], "jdoe");
    assert_eq!(value["assignedGroupName"], "procurement");
    assert!(value.get("project_code").is_none());
}

#[test]
fn given_full_request_when_round_tripped_through_json_then_equal() {
    let original = full();

    let json = original.to_json().unwrap();
    let parsed = CreateRfiRequest::from_json(&json).unwrap();

    assert_eq!(parsed, original);
}

#[test]
fn given_minimal_request_when_round_tripped_then_optional_fields_stay_absent() {
    let json = minimal().to_json().unwrap();
    let parsed = CreateRfiRequest::from_json(&json).unwrap();

    assert!(parsed.deadline.is_none());
    assert!(parsed.assigned_to_username.is_none());
    assert!(parsed.assigned_group_name.is_none());
}

#[test]
fn given_explicit_nulls_when_parsed_then_optional_fields_absent() {
    let parsed = CreateRfiRequest::from_json(
        r#"{
            "title": "t",
            "description": "d",
            "priority": "Low",
            "projectCode": "PRJ-1",
            "deadline": null,
            "assignedToUsername": null,
            "assignedGroupName": null
        }"#,
    )
    .unwrap();

    assert!(parsed.deadline.is_none());
    assert!(parsed.assigned_to_username.is_none());
    assert!(parsed.assigned_group_name.is_none());
}

#[test]
fn given_missing_title_when_parsed_then_rejected() {
    let result = CreateRfiRequest::from_json(
        r#"{"description": "...", "priority": "Low", "projectCode": "PRJ-300"}"#,
    );

    let err = result.unwrap_err();
    assert!(matches!(err, CoreError::Json { .. }));
    assert!(err.to_string().contains("missing field `title`"));
}

#[test]
fn given_each_required_field_missing_when_parsed_then_rejected() {
    let full = json!({
        "title": "t",
        "description": "d",
        "priority": "Low",
        "projectCode": "PRJ-1"
    });

    for field in ["title", "description", "priority", "projectCode"] {
        let mut payload = full.clone();
        payload.as_object_mut().unwrap().remove(field);

        let result = CreateRfiRequest::from_json(&payload.to_string());

        assert!(result.is_err(), "payload without {field} was accepted");
    }
}

#[test]
fn given_null_required_field_when_parsed_then_rejected() {
    let result = CreateRfiRequest::from_json(
        r#"{"title": null, "description": "d", "priority": "Low", "projectCode": "PRJ-1"}"#,
    );

    assert!(result.is_err());
}

#[test]
fn given_unknown_keys_when_parsed_then_ignored() {
    let parsed = CreateRfiRequest::from_json(
        r#"{"title": "t", "description": "d", "priority": "Low", "projectCode": "P", "extra": 1}"#,
    );

    assert_that!(parsed, ok(anything()));
}

// =========================================================================
// Helpers
// =========================================================================

#[test]
fn given_assignee_combinations_when_classified_then_all_permitted() {
    assert_eq!(minimal().assignee(), Assignee::Unassigned);
    assert_eq!(
        minimal().with_assigned_to_username("jdoe").assignee(),
        Assignee::User("jdoe")
    );
    assert_eq!(
        minimal().with_assigned_group_name("procurement").assignee(),
        Assignee::Group("procurement")
    );
    assert_eq!(
        full().assignee(),
        Assignee::UserAndGroup {
            user: "jdoe",
            group: "procurement"
        }
    );
}

#[test]
fn given_iso_deadline_when_deadline_date_then_parsed() {
    let date = full().deadline_date().unwrap().unwrap();

    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
}

#[test]
fn given_free_text_deadline_when_deadline_date_then_error_and_raw_kept() {
    let request = minimal().with_deadline("next week");

    let result = request.deadline_date().unwrap();

    assert!(matches!(result, Err(CoreError::InvalidDeadline { .. })));
    assert_eq!(request.deadline.as_deref(), Some("next week"));
}

#[test]
fn given_padded_deadline_when_deadline_date_then_error() {
    let request = minimal().with_deadline(" 2024-06-01 ");

    let result = request.deadline_date().unwrap();

    assert!(matches!(result, Err(CoreError::InvalidDeadline { .. })));
    assert_eq!(request.deadline.as_deref(), Some(" 2024-06-01 "));
}

#[test]
fn given_no_deadline_when_deadline_date_then_none() {
    assert!(minimal().deadline_date().is_none());
}
