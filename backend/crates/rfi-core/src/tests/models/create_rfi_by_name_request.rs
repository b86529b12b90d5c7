use crate::CreateRfiByNameRequest;

use serde_json::json;

#[test]
fn test_by_name_request_uses_email_key() {
    let request: CreateRfiByNameRequest = serde_json::from_value(json!({
        "title": "Material delay",
        "description": "Steel delivery delayed 2 weeks",
        "priority": "Urgent",
        "projectCode": "PRJ-204",
        "deadline": "2024-06-01",
        "assignedToEmail": "jdoe@example.com"
    }))
    .unwrap();

    assert_eq!(request.assigned_to_email.as_deref(), Some("jdoe@example.com"));
    assert!(request.assigned_group_name.is_none());

    let value = serde_json::to_value(&request).unwrap();
    assert!(value.get("assignedGroupName").is_none());
    assert!(value.get("assignedToUsername").is_none());
}

#[test]
fn test_by_name_request_requires_project_code() {
    let result = serde_json::from_value::<CreateRfiByNameRequest>(json!({
        "title": "t",
        "description": "d",
        "priority": "Low"
    }));

    assert!(result.is_err());
}
