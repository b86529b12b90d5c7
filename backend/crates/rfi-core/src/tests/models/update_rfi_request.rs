use crate::{RfiStatus, UpdateRfiRequest};

use serde_json::json;

#[test]
fn test_update_rfi_request_default_is_empty() {
    let request = UpdateRfiRequest::default();

    assert!(request.is_empty());
    assert_eq!(serde_json::to_value(&request).unwrap(), json!({}));
}

#[test]
fn test_update_rfi_request_serializes_only_set_fields() {
    let request = UpdateRfiRequest {
        status: Some(RfiStatus::Resolved),
        due_date: Some("2024-07-01T00:00:00".to_string()),
        ..Default::default()
    };

    assert!(!request.is_empty());
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "status": "RESOLVED", "dueDate": "2024-07-01T00:00:00" })
    );
}
