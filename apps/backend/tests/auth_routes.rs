//! HTTP-level authorization tests
//!
//! Builds the real route tree on an in-process service (no database) and
//! asserts guard behavior plus the standard error body shape.
//!
//! Run with:
//!   cargo test --test auth_routes

mod common;
mod support;

use actix_web::http::header;
use actix_web::{test, web, App, HttpRequest, HttpResponse};
use backend::middleware::request_id::RequestId;
use backend::{AppError, AppState, Claims};
use serde_json::{json, Value};

use crate::common::assert_error_body;
use crate::support::auth::{mint_token, test_authenticator, valid_claims};

/// Test-only protected endpoint that hands back the verified claims.
async fn secure_probe(
    req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let claims: Claims = app_state
        .auth
        .authorize(
            req.headers().get(header::AUTHORIZATION),
            "get:drinks-detail",
        )
        .await?;

    Ok(HttpResponse::Ok().json(claims))
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .wrap(RequestId)
                .app_data(web::Data::new(AppState::without_db(test_authenticator())))
                .route("/secure", web::get().to(secure_probe))
                .configure(backend::routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn test_missing_header_renders_error_body() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/drinks-detail").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.headers().contains_key("x-request-id"));
    assert_error_body(resp, 401, "Authorization header is expected.").await;
}

#[actix_web::test]
async fn test_malformed_scheme_renders_error_body() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/drinks-detail")
        .insert_header((header::AUTHORIZATION, "Token abc"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 401, "Authorization header must start with \"Bearer\".").await;
}

#[actix_web::test]
async fn test_two_token_fragments_render_error_body() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/drinks-detail")
        .insert_header((header::AUTHORIZATION, "Bearer abc def"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 401, "Authorization header must be a bearer token.").await;
}

#[actix_web::test]
async fn test_delete_without_permission_is_forbidden() {
    let app = test_app!();
    let token = mint_token(&valid_claims(&["get:drinks-detail"]));

    let req = test::TestRequest::delete()
        .uri("/drinks/1")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(
        resp,
        403,
        "The user is not authorized for this actiondelete:drinks",
    )
    .await;
}

#[actix_web::test]
async fn test_patch_requires_its_own_permission() {
    let app = test_app!();
    let token = mint_token(&valid_claims(&["post:drinks"]));

    let req = test::TestRequest::patch()
        .uri("/drinks/1")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"title": "cold brew"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(
        resp,
        403,
        "The user is not authorized for this actionpatch:drinks",
    )
    .await;
}

#[actix_web::test]
async fn test_authorized_probe_returns_claims() {
    let app = test_app!();
    let token = mint_token(&valid_claims(&["get:drinks-detail"]));

    let req = test::TestRequest::get()
        .uri("/secure")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["aud"], json!("coffee_shop"));
    assert_eq!(body["permissions"], json!(["get:drinks-detail"]));
}

#[actix_web::test]
async fn test_unknown_path_renders_standard_404() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/espressos").to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 404, "resource not found").await;
}

#[actix_web::test]
async fn test_authorized_write_without_db_does_not_leak_detail() {
    let app = test_app!();
    let token = mint_token(&valid_claims(&["post:drinks"]));

    // Auth passes, then the missing database surfaces as a generic 500.
    let req = test::TestRequest::post()
        .uri("/drinks")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({
            "title": "matcha latte",
            "recipe": [{"name": "matcha", "color": "green", "parts": 1}],
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 500, "database unavailable").await;
}

#[actix_web::test]
async fn test_wrongly_typed_body_is_unprocessable() {
    let app = test_app!();
    let token = mint_token(&valid_claims(&["post:drinks"]));

    let req = test::TestRequest::post()
        .uri("/drinks")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .set_json(json!({"title": "mocha", "recipe": "chocolate"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, 422, "Invalid JSON: wrong types for one or more fields").await;
}

#[actix_web::test]
async fn test_syntactically_broken_body_is_bad_request() {
    let app = test_app!();
    let token = mint_token(&valid_claims(&["post:drinks"]));

    let req = test::TestRequest::post()
        .uri("/drinks")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(r#"{"title": "mocha", "recipe": "#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    let status = resp.status().as_u16();
    assert_eq!(status, 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!(400));
}
