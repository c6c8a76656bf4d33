mod common;

use actix_web::http::StatusCode;
use actix_web::{rt, test, HttpServer};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{init_app, register_and_login_user, test_state, TestUser};
use daily_progress::auth::AuthResponse;
use daily_progress::config::Config;
use daily_progress::models::Task;
use daily_progress::{build_app, AppState};

async fn create_task(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
    >,
    user: &TestUser,
    title: &str,
) -> Task {
    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header(user.bearer())
        .set_json(json!({ "title": title }))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    test::read_body_json(resp).await
}

#[test_log::test(actix_rt::test)]
async fn test_create_and_list_tasks() {
    let app = init_app(test_state()).await;
    let user = register_and_login_user(&app, "tasks@example.com", "pw")
        .await
        .unwrap();

    let first = create_task(&app, &user, "Write report").await;
    let second = create_task(&app, &user, "Call plumber").await;
    assert!(!first.completed);
    assert_ne!(first.id, second.id);

    let req = test::TestRequest::get()
        .uri("/api/tasks")
        .insert_header(user.bearer())
        .to_request();
    let listed: Vec<Task> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed, vec![first, second]);
}

#[actix_rt::test]
async fn test_complete_task_twice() {
    let app = init_app(test_state()).await;
    let user = register_and_login_user(&app, "complete@example.com", "pw")
        .await
        .unwrap();
    let task = create_task(&app, &user, "Pay rent").await;

    for _ in 0..2 {
        let req = test::TestRequest::put()
            .uri(&format!("/api/tasks/{}/complete", task.id))
            .insert_header(user.bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Task = test::read_body_json(resp).await;
        assert!(updated.completed);
        assert_eq!(updated.title, "Pay rent");
    }
}

#[actix_rt::test]
async fn test_complete_unknown_task() {
    let app = init_app(test_state()).await;
    let user = register_and_login_user(&app, "unknown-task@example.com", "pw")
        .await
        .unwrap();
    create_task(&app, &user, "exists").await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{}/complete", Uuid::new_v4()))
        .insert_header(user.bearer())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "message": "Task not found" }));

    let req = test::TestRequest::get()
        .uri("/api/tasks")
        .insert_header(user.bearer())
        .to_request();
    let listed: Vec<Task> = test::call_and_read_body_json(&app, req).await;
    assert!(listed.iter().all(|t| !t.completed));
}

#[actix_rt::test]
async fn test_blank_task_title_rejected() {
    let app = init_app(test_state()).await;
    let user = register_and_login_user(&app, "blank-task@example.com", "pw")
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/api/tasks")
        .insert_header(user.bearer())
        .set_json(json!({ "title": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn test_create_task_unauthorized() {
    let state = test_state();

    let server = HttpServer::new(move || build_app(state.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind random port");
    let port = server.addrs()[0].port();
    let server = server.run();
    let handle = server.handle();
    rt::spawn(server);

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("http://127.0.0.1:{}/api/tasks", port))
        .json(&json!({ "title": "Unauthorized Task" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(resp.status(), reqwest::StatusCode::UNAUTHORIZED);
    let body: Value = resp.json().await.expect("error body is JSON");
    assert_eq!(body["message"], "Missing token");

    let resp = client
        .get(format!("http://127.0.0.1:{}/health", port))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    handle.stop(true).await;
}

#[actix_rt::test]
async fn test_server_built_from_config() {
    let config = Config {
        server_port: 0,
        server_host: "127.0.0.1".to_string(),
        jwt_secret: "config-test-secret".to_string(),
        token_ttl_days: 30,
        bcrypt_cost: 4,
        daily_reset_enabled: false,
    };
    let state = AppState::from_config(&config).unwrap();

    let server = HttpServer::new(move || build_app(state.clone()))
        .workers(1)
        .bind((config.server_host.as_str(), config.server_port))
        .expect("Failed to bind random port");
    let base = format!("http://127.0.0.1:{}", server.addrs()[0].port());
    let server = server.run();
    let handle = server.handle();
    rt::spawn(server);

    let client = reqwest::Client::new();
    let credentials = json!({ "email": "server@example.com", "password": "pw" });
    let resp = client
        .post(format!("{}/api/auth/register", base))
        .json(&credentials)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let login: AuthResponse = client
        .post(format!("{}/api/auth/login", base))
        .json(&credentials)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("login body is JSON");

    let resp = client
        .post(format!("{}/api/tasks", base))
        .bearer_auth(&login.token)
        .json(&json!({ "title": "Ship it" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(resp.status(), reqwest::StatusCode::CREATED);
    let task: Task = resp.json().await.expect("task body is JSON");
    assert_eq!(task.title, "Ship it");

    handle.stop(true).await;
}
