//! Tests for the account creation handler.

use super::*;
use crate::domain::ports::{MockAccountRegistration, MockTokenIssuance};
use crate::domain::{DisplayName, Email, Error};
use crate::inbound::http::configure;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

fn profile(email: &str, name: &str) -> AccountProfile {
    AccountProfile {
        email: Email::new(email).expect("email"),
        name: DisplayName::new(name).expect("name"),
    }
}

fn test_app(
    registration: MockAccountRegistration,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(registration), Arc::new(MockTokenIssuance::new()));
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}

#[actix_web::test]
async fn create_user_returns_created_profile() {
    let mut registration = MockAccountRegistration::new();
    registration
        .expect_register()
        .withf(|request| {
            request.email == "test@gmail.com"
                && request.password == "password"
                && request.name.as_deref() == Some("Name")
        })
        .times(1)
        .returning(|_| Ok(profile("test@gmail.com", "Name")));
    let app = actix_test::init_service(test_app(registration)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({
            "email": "test@gmail.com",
            "password": "password",
            "name": "Name",
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "email": "test@gmail.com", "name": "Name" }));
    assert!(body.get("password").is_none());
}

#[rstest]
#[case(json!({ "password": "password" }))]
#[case(json!({ "email": "test@gmail.com" }))]
#[actix_web::test]
async fn missing_fields_reach_the_service_as_empty_strings(#[case] payload: Value) {
    let mut registration = MockAccountRegistration::new();
    registration
        .expect_register()
        .withf(|request| request.email.is_empty() || request.password.is_empty())
        .times(1)
        .returning(|_| {
            Err(Error::invalid_request("missing field")
                .with_details(json!({ "field": "email", "code": "missing_field" })))
        });
    let app = actix_test::init_service(test_app(registration)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("invalid_request"));
}

#[actix_web::test]
async fn internal_failures_are_redacted() {
    let mut registration = MockAccountRegistration::new();
    registration
        .expect_register()
        .returning(|_| Err(Error::internal("account repository error: refused")));
    let app = actix_test::init_service(test_app(registration)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .set_json(json!({ "email": "test@gmail.com", "password": "password" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Internal server error")
    );
}

#[actix_web::test]
async fn malformed_json_is_rejected_without_calling_the_service() {
    let mut registration = MockAccountRegistration::new();
    registration.expect_register().never();
    let app = actix_test::init_service(test_app(registration)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\":")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("code").and_then(Value::as_str), Some("invalid_request"));
}
