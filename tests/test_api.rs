// tests/test_api.rs
use std::sync::Arc;

use linkstash::api::{router, AppContext};
use linkstash::infrastructure::di::ServiceContainer;
use linkstash::util::testing::{StubMetadataFetcher, StubSummaryFetcher, TestDb};
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    _test_db: TestDb,
}

impl TestServer {
    async fn spawn() -> Self {
        let test_db = TestDb::new();
        let container = ServiceContainer::with_fetchers(
            test_db.pool.clone(),
            Arc::new(StubMetadataFetcher::returning(
                Some("Example Domain"),
                Some("An example page"),
            )),
            Arc::new(StubSummaryFetcher::failing()),
        );
        let app = router(AppContext::from(container));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            _test_db: test_db,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn register(&self, email: &str) -> String {
        let response = self
            .client
            .post(self.url("/api/users"))
            .json(&json!({ "email": email, "password": "password123" }))
            .send()
            .await
            .expect("Register request failed");
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = response.json().await.expect("Invalid register response");
        body["token"].as_str().expect("No token in response").to_string()
    }
}

#[tokio::test]
async fn test_health_endpoint() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_register_and_login() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .post(server.url("/api/users"))
        .json(&json!({ "email": "alice@example.com", "password": "password123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["email"], "alice@example.com");
    assert!(!body["token"].as_str().unwrap().is_empty());

    let response = server
        .client
        .post(server.url("/api/users/login"))
        .json(&json!({ "email": "alice@example.com", "password": "password123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server
        .client
        .post(server.url("/api/users/login"))
        .json(&json!({ "email": "alice@example.com", "password": "wrong-password" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_register_validation_errors() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .post(server.url("/api/users"))
        .json(&json!({ "email": "not-an-email", "password": "password123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = server
        .client
        .post(server.url("/api/users"))
        .json(&json!({ "email": "alice@example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bookmarks_require_token() {
    let server = TestServer::spawn().await;

    let response = server
        .client
        .get(server.url("/api/bookmarks"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Not authorized, no token");

    let response = server
        .client
        .get(server.url("/api/bookmarks"))
        .bearer_auth("bogus-token")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Not authorized, token failed");
}

#[tokio::test]
async fn test_bookmark_lifecycle() {
    let server = TestServer::spawn().await;
    let token = server.register("alice@example.com").await;

    // Create
    let response = server
        .client
        .post(server.url("/api/bookmarks"))
        .bearer_auth(&token)
        .json(&json!({ "url": "example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = response.json().await.unwrap();
    assert_eq!(created["url"], "https://example.com");
    assert_eq!(created["title"], "Example Domain");
    assert_eq!(created["description"], "An example page");
    let id = created["id"].as_i64().unwrap();

    // Duplicate rejected
    let response = server
        .client
        .post(server.url("/api/bookmarks"))
        .bearer_auth(&token)
        .json(&json!({ "url": "https://example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Bookmark already exists");

    // List
    let response = server
        .client
        .get(server.url("/api/bookmarks"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed: Value = response.json().await.unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"].as_i64().unwrap(), id);

    // Delete
    let response = server
        .client
        .delete(server.url(&format!("/api/bookmarks/{}", id)))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server
        .client
        .get(server.url("/api/bookmarks"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    let listed: Value = response.json().await.unwrap();
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_bookmark_requires_url() {
    let server = TestServer::spawn().await;
    let token = server.register("alice@example.com").await;

    let response = server
        .client
        .post(server.url("/api/bookmarks"))
        .bearer_auth(&token)
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Please provide a URL");
}

#[tokio::test]
async fn test_delete_other_users_bookmark() {
    let server = TestServer::spawn().await;
    let alice = server.register("alice@example.com").await;
    let bob = server.register("bob@example.com").await;

    let response = server
        .client
        .post(server.url("/api/bookmarks"))
        .bearer_auth(&alice)
        .json(&json!({ "url": "https://example.com" }))
        .send()
        .await
        .unwrap();
    let created: Value = response.json().await.unwrap();
    let id = created["id"].as_i64().unwrap();

    let response = server
        .client
        .delete(server.url(&format!("/api/bookmarks/{}", id)))
        .bearer_auth(&bob)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Not authorized to delete this bookmark");
}

#[tokio::test]
async fn test_delete_missing_bookmark() {
    let server = TestServer::spawn().await;
    let token = server.register("alice@example.com").await;

    let response = server
        .client
        .delete(server.url("/api/bookmarks/9999"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Bookmark not found");
}

#[tokio::test]
async fn test_logout_invalidates_token() {
    let server = TestServer::spawn().await;
    let token = server.register("alice@example.com").await;

    let response = server
        .client
        .post(server.url("/api/users/logout"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server
        .client
        .get(server.url("/api/bookmarks"))
        .bearer_auth(&token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
