#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for all test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert an error response carries the standard
/// `{"success": false, "error": <status>, "message": <message>}` body.
pub async fn assert_error_body(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_message: &str,
) {
    assert_eq!(resp.status().as_u16(), expected_status);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["error"], Value::from(expected_status));
    assert_eq!(body["message"], Value::from(expected_message));
}
