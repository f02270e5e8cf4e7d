use serde_json::{Value, json};
use serverless_bridge::api::helpers::{error_body, error_response};
use serverless_bridge::api::response::ResponseWriter;
use serverless_bridge::core::config::AdapterConfig;
use serverless_bridge::errors::AdapterError;

#[test]
fn test_writer_defaults_to_200_uncommitted() {
    let writer = ResponseWriter::new();
    assert_eq!(writer.status_code(), 200);
    assert!(!writer.is_committed());
}

#[test]
fn test_writer_json_sets_content_type_and_commits() {
    let mut writer = ResponseWriter::new();
    writer.status(201).json(&json!({ "id": 7 })).unwrap();

    assert!(writer.is_committed());
    assert_eq!(
        writer.header_value("content-type"),
        Some("application/json; charset=utf-8")
    );

    let response = writer.into_response();
    assert_eq!(response.status_code, 201);
    assert_eq!(response.body, r#"{"id":7}"#);
}

#[test]
fn test_writer_ignores_writes_after_commit() {
    let mut writer = ResponseWriter::new();
    writer.status(200).send("first");
    writer.status(500).header("X-Late", "1").send("second");

    let response = writer.into_response();
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "first");
    assert!(!response.headers.contains_key("X-Late"));
}

#[test]
fn test_writer_header_replaces_case_insensitively() {
    let mut writer = ResponseWriter::new();
    writer.header("Cache-Control", "no-store");
    writer.header("cache-control", "max-age=60");

    let response = writer.into_response();
    assert_eq!(response.headers.len(), 1);
    assert_eq!(
        response.headers.get("cache-control").map(String::as_str),
        Some("max-age=60")
    );
}

#[test]
fn test_writer_base64_body() {
    let mut writer = ResponseWriter::new();
    writer.send_base64("aGVsbG8=");

    let response = writer.into_response();
    assert!(response.is_base64_encoded);
    assert_eq!(response.body, "aGVsbG8=");
}

#[test]
fn test_error_response_omits_stack_key_in_production() {
    let err = AdapterError::Delegation(anyhow::anyhow!("boom"));
    let response = error_response(&err, &AdapterConfig::default());

    assert_eq!(response.status_code, 500);
    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(
        body,
        json!({ "error": "Internal Server Error", "message": "boom" })
    );
    assert!(body.get("stack").is_none(), "stack key must be absent, not null");
}

#[test]
fn test_error_body_has_stack_in_development() {
    let err = AdapterError::Load(anyhow::anyhow!("cannot find module"));
    let body = error_body(&err, &AdapterConfig::development());

    assert_eq!(body.error, "Internal Server Error");
    assert_eq!(body.message, "cannot find module");
    assert!(body.stack.is_some_and(|s| s.contains("cannot find module")));
}

#[test]
fn test_error_response_body_is_compact_json() {
    let err = AdapterError::Delegation(anyhow::anyhow!("boom"));
    let response = error_response(&err, &AdapterConfig::default());

    assert_eq!(
        response.body,
        r#"{"error":"Internal Server Error","message":"boom"}"#
    );
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json; charset=utf-8")
    );
}
