use crate::{ApiEnvelope, RfiDto};

use serde_json::{Value, json};

#[test]
fn test_api_envelope_success_with_data() {
    let envelope: ApiEnvelope<Value> = serde_json::from_value(json!({
        "status": "success",
        "message": "RFI created successfully",
        "data": { "id": "abc" }
    }))
    .unwrap();

    assert!(envelope.is_success());
    assert_eq!(envelope.message.as_deref(), Some("RFI created successfully"));
    assert_eq!(envelope.into_data().unwrap()["id"], "abc");
}

#[test]
fn test_api_envelope_error_without_data() {
    let envelope: ApiEnvelope<RfiDto> = serde_json::from_value(json!({
        "status": "error",
        "message": "Project not found"
    }))
    .unwrap();

    assert!(!envelope.is_success());
    assert!(envelope.into_data().is_none());
}
