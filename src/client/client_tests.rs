#![cfg(test)]

use httptest::{
    Expectation, Server,
    matchers::{all_of, contains, key, not, request, url_decoded},
    responders::{json_encoded, status_code},
};
use reqwest::{Client as ReqwestClient, StatusCode};
use secrecy::SecretString;
use serde_json::json;

use super::ReqwestClientWrapper;
use super::interface::HttpClient;
use super::types::{LoginPayload, RegisterPayload};
use crate::error::CliError;

fn setup_test_server() -> (Server, ReqwestClientWrapper) {
    let server = Server::run();
    // Matches the production base-URL shape: scheme + host + ":" + port,
    // no trailing slash.
    let base_url = format!("http://{}", server.addr());
    let wrapper = ReqwestClientWrapper::new(ReqwestClient::new(), base_url);
    (server, wrapper)
}

fn login_payload(username: &str, password: &str) -> LoginPayload {
    LoginPayload {
        username: username.to_string(),
        password: SecretString::new(password.to_string().into_boxed_str()),
    }
}

#[tokio::test]
async fn test_login_success_parses_token_pair() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(request::method_path("POST", "/login"))
            .respond_with(json_encoded(json!({
                "access_token": "A",
                "refresh_token": "R"
            }))),
    );

    let tokens = client.login(&login_payload("alice", "secret")).await.unwrap();
    assert_eq!(tokens.access_token, "A");
    assert_eq!(tokens.refresh_token, "R");
}

#[tokio::test]
async fn test_login_defaults_absent_refresh_token() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(request::method_path("POST", "/login"))
            .respond_with(json_encoded(json!({ "access_token": "A" }))),
    );

    let tokens = client.login(&login_payload("alice", "secret")).await.unwrap();
    assert_eq!(tokens.access_token, "A");
    assert_eq!(tokens.refresh_token, "");
}

#[tokio::test]
async fn test_login_failure_unauthorized() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(request::method_path("POST", "/login")).respond_with(
            status_code(401).body(json!({"msg": "Bad username or password"}).to_string()),
        ),
    );

    let result = client.login(&login_payload("alice", "wrong")).await;
    match result.err().unwrap() {
        CliError::AuthFailed(msg) => {
            assert!(msg.contains("Bad username or password"), "message was: {msg}")
        }
        e => panic!("expected AuthFailed, got {e:?}"),
    }
}

#[tokio::test]
async fn test_register_returns_raw_body() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(request::method_path("POST", "/register"))
            .respond_with(status_code(201).body(json!({"msg": "User created"}).to_string())),
    );

    let payload = RegisterPayload {
        username: "bob".to_string(),
        email: "bob@example.com".to_string(),
        password: SecretString::new("secret123".to_string().into_boxed_str()),
    };
    let body = client.register(&payload).await.unwrap();
    assert!(body.contains("User created"));
}

#[tokio::test]
async fn test_register_conflict_is_typed() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(request::method_path("POST", "/register")).respond_with(
            status_code(409).body(json!({"msg": "User already exists"}).to_string()),
        ),
    );

    let payload = RegisterPayload {
        username: "bob".to_string(),
        email: "bob@example.com".to_string(),
        password: SecretString::new("secret123".to_string().into_boxed_str()),
    };
    match client.register(&payload).await.err().unwrap() {
        CliError::RegistrationFailed(msg) => {
            assert!(msg.contains("User already exists"), "message was: {msg}")
        }
        e => panic!("expected RegistrationFailed, got {e:?}"),
    }
}

#[tokio::test]
async fn test_refresh_sends_refresh_token_as_bearer() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/refresh"),
            request::headers(contains(("authorization", "Bearer RTOK"))),
        ])
        .respond_with(json_encoded(json!({ "access_token": "A2" }))),
    );

    let refreshed = client.refresh("RTOK").await.unwrap();
    assert_eq!(refreshed.access_token, "A2");
}

#[tokio::test]
async fn test_refresh_failure_is_api_error() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(request::method_path("POST", "/refresh")).respond_with(
            status_code(401).body(json!({"msg": "Token has expired"}).to_string()),
        ),
    );

    match client.refresh("RTOK").await.err().unwrap() {
        CliError::ApiError { status, message } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(message, "Token has expired");
        }
        e => panic!("expected ApiError, got {e:?}"),
    }
}

#[tokio::test]
async fn test_protected_sends_access_token_as_bearer() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/protected"),
            request::headers(contains(("authorization", "Bearer ATOK"))),
        ])
        .respond_with(json_encoded(json!({"msg": "hello alice"}))),
    );

    let body = client.protected("ATOK").await.unwrap();
    assert!(body.contains("hello alice"));
}

#[tokio::test]
async fn test_search_books_without_query_sends_no_query_string() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/books"),
            request::query(url_decoded(not(contains(key("q"))))),
            request::headers(contains(("authorization", "Bearer ATOK"))),
        ])
        .respond_with(json_encoded(json!([]))),
    );

    let records = client.search_books("ATOK", "").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_search_books_with_query_sends_q_parameter() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/books"),
            request::query(url_decoded(contains(("q", "dune")))),
        ])
        .respond_with(json_encoded(json!([
            {"isbn": "123", "title": "Dune", "year": 1965}
        ]))),
    );

    let records = client.search_books("ATOK", "dune").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].isbn, "123");
    assert_eq!(records[0].title, "Dune");
    assert_eq!(records[0].year, "1965");
    assert_eq!(records[0].author, "");
}

#[tokio::test]
async fn test_search_books_malformed_body_degrades_to_empty() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/books"))
            .respond_with(json_encoded(json!({"unexpected": "object"}))),
    );

    let records = client.search_books("ATOK", "").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_search_books_unauthorized_is_typed() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/books")).respond_with(
            status_code(401).body(json!({"msg": "Missing Authorization Header"}).to_string()),
        ),
    );

    match client.search_books("", "").await.err().unwrap() {
        CliError::ApiError { status, .. } => assert_eq!(status, StatusCode::UNAUTHORIZED),
        e => panic!("expected ApiError, got {e:?}"),
    }
}

#[tokio::test]
async fn test_health_check_healthy_on_200() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(200).body("catalog service up")),
    );

    let status = client.health_check().await.unwrap();
    assert!(status.healthy);
}

#[tokio::test]
async fn test_health_check_unhealthy_on_error_status() {
    let (server, client) = setup_test_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .respond_with(status_code(503).body("")),
    );

    let status = client.health_check().await.unwrap();
    assert!(!status.healthy);
}

#[tokio::test]
async fn test_health_check_connection_error_surfaces() {
    // Nothing listens on port 9; a transport failure must be an Err, not a
    // status.
    let client = ReqwestClientWrapper::new(ReqwestClient::new(), "http://127.0.0.1:9".to_string());
    let result = client.health_check().await;
    assert!(matches!(result, Err(CliError::Reqwest(_))));
}
