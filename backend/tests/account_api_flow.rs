//! End-to-end registration and token flows against the in-memory adapters.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use account_api::Trace;
use account_api::domain::ports::{AccountRepository, PasswordHasher};
use account_api::domain::{
    AccountRegistryService, Email, INVALID_CREDENTIALS_MESSAGE, Password, PasswordPolicy,
    TokenIssuerService,
};
use account_api::inbound::http::configure;
use account_api::inbound::http::state::HttpState;
use account_api::outbound::persistence::{InMemoryAccountRepository, InMemoryTokenStore};
use account_api::outbound::security::Argon2PasswordHasher;

const CREATE_USER_URL: &str = "/api/v1/users";
const TOKEN_URL: &str = "/api/v1/tokens";

struct Harness {
    accounts: Arc<InMemoryAccountRepository>,
    hasher: Arc<Argon2PasswordHasher>,
    tokens: Arc<InMemoryTokenStore>,
    state: web::Data<HttpState>,
}

#[fixture]
fn harness() -> Harness {
    let accounts = Arc::new(InMemoryAccountRepository::new());
    let hasher = Arc::new(Argon2PasswordHasher::with_params(1024, 1, 1).expect("argon2 params"));
    let tokens = Arc::new(InMemoryTokenStore::new());
    let registration = AccountRegistryService::new(
        accounts.clone(),
        hasher.clone(),
        PasswordPolicy::default(),
    );
    let issuer = TokenIssuerService::new(accounts.clone(), hasher.clone(), tokens.clone());
    let state = web::Data::new(HttpState::new(Arc::new(registration), Arc::new(issuer)));
    Harness {
        accounts,
        hasher,
        tokens,
        state,
    }
}

async fn post(harness: &Harness, uri: &str, payload: Value) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(harness.state.clone())
            .wrap(Trace)
            .configure(configure),
    )
    .await;
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

async fn create_user(harness: &Harness, email: &str, password: &str) {
    let (status, _) = post(
        harness,
        CREATE_USER_URL,
        json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[rstest]
#[actix_web::test]
async fn create_valid_user_success(harness: Harness) {
    let (status, body) = post(
        &harness,
        CREATE_USER_URL,
        json!({ "email": "test@gmail.com", "password": "password", "name": "Name" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "email": "test@gmail.com", "name": "Name" }));
    assert!(body.get("password").is_none());

    let email = Email::new("test@gmail.com").expect("email");
    let account = harness
        .accounts
        .find_by_email(&email)
        .await
        .expect("lookup")
        .expect("account stored");
    assert_ne!(account.password_digest().as_str(), "password");
    assert!(
        harness
            .hasher
            .verify(&Password::new("password"), account.password_digest())
            .expect("verify")
    );
}

#[rstest]
#[actix_web::test]
async fn user_exists(harness: Harness) {
    create_user(&harness, "test@gmail.com", "testpass").await;

    let (status, body) = post(
        &harness,
        CREATE_USER_URL,
        json!({ "email": "test@gmail.com", "password": "testpass" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "email_taken");
    assert_eq!(harness.accounts.len().await, 1);
}

#[rstest]
#[actix_web::test]
async fn password_too_short(harness: Harness) {
    let (status, body) = post(
        &harness,
        CREATE_USER_URL,
        json!({ "email": "test@gmail.com", "password": "oop", "name": "Test" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "password");
    assert_eq!(body["details"]["code"], "password_too_short");

    let email = Email::new("test@gmail.com").expect("email");
    let stored = harness.accounts.find_by_email(&email).await.expect("lookup");
    assert!(stored.is_none());
}

#[rstest]
#[actix_web::test]
async fn create_token_for_user(harness: Harness) {
    create_user(&harness, "test@gmail.com", "testpass").await;

    let (status, body) = post(
        &harness,
        TOKEN_URL,
        json!({ "email": "test@gmail.com", "password": "testpass" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token present");
    assert_eq!(token.len(), 40);
    assert_eq!(harness.tokens.len().await, 1);
}

#[rstest]
#[actix_web::test]
async fn each_login_mints_a_new_token(harness: Harness) {
    create_user(&harness, "test@gmail.com", "testpass").await;
    let credentials = json!({ "email": "test@gmail.com", "password": "testpass" });

    let (_, first) = post(&harness, TOKEN_URL, credentials.clone()).await;
    let (_, second) = post(&harness, TOKEN_URL, credentials).await;

    assert_ne!(first["token"], second["token"]);
    assert_eq!(harness.tokens.len().await, 2);
}

#[rstest]
#[case(json!({ "email": "test@gmail.com", "password": " wrong" }), "invalid_credentials")]
#[case(json!({ "email": "nobody@gmail.com", "password": "testpass" }), "invalid_credentials")]
#[case(json!({ "email": "one", "password": "" }), "invalid_request")]
#[actix_web::test]
async fn token_refused(harness: Harness, #[case] payload: Value, #[case] code: &str) {
    create_user(&harness, "test@gmail.com", "testpass").await;

    let (status, body) = post(&harness, TOKEN_URL, payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("token").is_none());
    assert_eq!(body["code"], code);
    assert_eq!(harness.tokens.len().await, 0);
}

#[rstest]
#[actix_web::test]
async fn unknown_email_and_wrong_password_are_indistinguishable(harness: Harness) {
    create_user(&harness, "test@gmail.com", "testpass").await;

    let (_, wrong_password) = post(
        &harness,
        TOKEN_URL,
        json!({ "email": "test@gmail.com", "password": " wrong" }),
    )
    .await;
    let (_, unknown) = post(
        &harness,
        TOKEN_URL,
        json!({ "email": "nobody@gmail.com", "password": "testpass" }),
    )
    .await;

    assert_eq!(wrong_password["message"], INVALID_CREDENTIALS_MESSAGE);
    assert_eq!(wrong_password["message"], unknown["message"]);
    assert_eq!(wrong_password["code"], unknown["code"]);
}

#[rstest]
#[actix_web::test]
async fn concurrent_registrations_admit_one_account(harness: Harness) {
    let app = actix_test::init_service(
        App::new()
            .app_data(harness.state.clone())
            .configure(configure),
    )
    .await;

    let requests = (0..8).map(|_| {
        actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(CREATE_USER_URL)
                .set_json(json!({ "email": "race@gmail.com", "password": "testpass" }))
                .to_request(),
        )
    });
    let responses = futures::future::join_all(requests).await;

    let created = responses
        .iter()
        .filter(|response| response.status() == StatusCode::CREATED)
        .count();
    assert_eq!(created, 1);
    assert!(
        responses
            .iter()
            .all(|r| matches!(r.status(), StatusCode::CREATED | StatusCode::BAD_REQUEST))
    );
    assert_eq!(harness.accounts.len().await, 1);
}
