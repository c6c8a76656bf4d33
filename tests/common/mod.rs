#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::test;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use daily_progress::auth::{AuthResponse, Authenticator, TokenKeys};
use daily_progress::collections::{DailyLogs, Habits, Tasks};
use daily_progress::store::InMemoryCredentialStore;
use daily_progress::{build_app, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

/// bcrypt's minimum work factor keeps the suite fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub struct TestUser {
    pub id: Uuid,
    pub token: String,
}

impl TestUser {
    pub fn bearer(&self) -> (&'static str, String) {
        ("Authorization", format!("Bearer {}", self.token))
    }
}

pub fn test_state() -> AppState {
    let authenticator = Authenticator::new(
        Arc::new(InMemoryCredentialStore::new()),
        TokenKeys::new(TEST_SECRET, 7).unwrap(),
        TEST_BCRYPT_COST,
    );
    AppState::new(
        authenticator,
        Habits::in_memory(),
        Tasks::in_memory(),
        DailyLogs::in_memory(),
    )
}

pub async fn init_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error> {
    test::init_service(build_app(state)).await
}

pub async fn register_and_login_user(
    app: &impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>,
    email: &str,
    password: &str,
) -> Result<TestUser, String> {
    let req_register = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp_register = test::call_service(app, req_register).await;
    let status = resp_register.status();
    if !status.is_success() {
        let body = test::read_body(resp_register).await;
        return Err(format!(
            "Failed to register user. Status: {}. Body: {}",
            status,
            String::from_utf8_lossy(&body)
        ));
    }

    let req_login = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "email": email, "password": password }))
        .to_request();
    let resp_login = test::call_service(app, req_login).await;
    let status = resp_login.status();
    let body = test::read_body(resp_login).await;
    if !status.is_success() {
        return Err(format!(
            "Failed to log in. Status: {}. Body: {}",
            status,
            String::from_utf8_lossy(&body)
        ));
    }

    let auth: AuthResponse = serde_json::from_slice(&body)
        .map_err(|e| format!("Failed to parse login response: {}", e))?;
    Ok(TestUser {
        id: auth.user.id,
        token: auth.token,
    })
}
