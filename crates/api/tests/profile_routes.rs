//! HTTP coverage for the profile routes.

mod support;

use axum::http::{Method, StatusCode};
use devfolio_domain::IdentityId;
use serde_json::json;
use support::TestApp;

fn profile_form() -> serde_json::Value {
    json!({
        "company": "Acme",
        "website": "https://acme.dev",
        "status": "Developer",
        "skills": "rust, go ,  python",
        "githubUsername": "octocat",
        "twitter": "https://twitter.com/octocat"
    })
}

#[tokio::test(flavor = "multi_thread")]
async fn identity_required_routes_reject_missing_header() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/profile/me", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json(), json!({"msg": "No identity, authorization denied"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn malformed_identity_header_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app.send_as("not-an-identity", Method::POST, "/api/profile", Some(profile_form())).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json(), json!({"msg": "Identity is not valid"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn upsert_rejects_missing_required_fields() {
    let app = TestApp::spawn().await;
    let owner = app.seed_identity("Ada").await;

    let response = app.send(Method::POST, "/api/profile", Some(owner), Some(json!({}))).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json(),
        json!({"errors": [
            {"param": "status", "msg": "Status is required"},
            {"param": "skills", "msg": "Skills is required"}
        ]})
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn upsert_with_empty_body_reports_violations() {
    let app = TestApp::spawn().await;
    let owner = app.seed_identity("Ada").await;

    let response = app.send(Method::POST, "/api/profile", Some(owner), None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["errors"].as_array().map(Vec::len), Some(2));
}

#[tokio::test(flavor = "multi_thread")]
async fn upsert_creates_then_merges() {
    let app = TestApp::spawn().await;
    let owner = app.seed_identity("Ada").await;

    let created = app
        .send(Method::POST, "/api/profile", Some(owner), Some(profile_form()))
        .await;
    assert_eq!(created.status, StatusCode::OK);
    let created = created.json();
    assert_eq!(created["owner"], json!(owner.to_string()));
    assert_eq!(created["skills"], json!(["rust", "go", "python"]));
    assert_eq!(created["social"]["twitter"], json!("https://twitter.com/octocat"));
    assert_eq!(created["experience"], json!([]));

    let updated = app
        .send(
            Method::POST,
            "/api/profile",
            Some(owner),
            Some(json!({"status": "Senior Developer", "skills": "rust", "youtube": "https://yt.dev"})),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    let updated = updated.json();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["status"], json!("Senior Developer"));
    assert_eq!(updated["company"], json!("Acme"));
    assert_eq!(updated["skills"], json!(["rust"]));
    assert_eq!(updated["social"]["twitter"], json!("https://twitter.com/octocat"));
    assert_eq!(updated["social"]["youtube"], json!("https://yt.dev"));
}

#[tokio::test(flavor = "multi_thread")]
async fn own_profile_joins_identity() {
    let app = TestApp::spawn().await;
    let owner = app.seed_identity("Ada").await;

    let missing = app.get("/api/profile/me", Some(owner)).await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.json(), json!({"msg": "There is no profile for this user"}));

    app.send(Method::POST, "/api/profile", Some(owner), Some(profile_form())).await;

    let view = app.get("/api/profile/me", Some(owner)).await;
    assert_eq!(view.status, StatusCode::OK);
    let view = view.json();
    assert_eq!(view["status"], json!("Developer"));
    assert_eq!(view["user"]["name"], json!("Ada"));
    assert_eq!(view["user"]["avatar"], json!("https://avatars.example.com/Ada"));
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_every_profile() {
    let app = TestApp::spawn().await;

    let empty = app.get("/api/profile", None).await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.json(), json!([]));

    let ada = app.seed_identity("Ada").await;
    let grace = app.seed_identity("Grace").await;
    app.send(Method::POST, "/api/profile", Some(ada), Some(profile_form())).await;
    app.send(Method::POST, "/api/profile", Some(grace), Some(profile_form())).await;

    let listed = app.get("/api/profile", None).await.json();
    let names: Vec<_> = listed
        .as_array()
        .expect("list should be an array")
        .iter()
        .map(|view| view["user"]["name"].clone())
        .collect();
    assert_eq!(names, vec![json!("Ada"), json!("Grace")]);
}

#[tokio::test(flavor = "multi_thread")]
async fn profiles_by_owner() {
    let app = TestApp::spawn().await;
    let owner = app.seed_identity("Ada").await;
    app.send(Method::POST, "/api/profile", Some(owner), Some(profile_form())).await;

    let found = app.get(&format!("/api/profile/user/{owner}"), None).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.json().as_array().map(Vec::len), Some(1));

    let none = app.get(&format!("/api/profile/user/{}", IdentityId::new()), None).await;
    assert_eq!(none.status, StatusCode::OK);
    assert_eq!(none.json(), json!([]));

    let malformed = app.get("/api/profile/user/not-an-id", None).await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
    assert_eq!(malformed.json(), json!({"msg": "Profile not found"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_profile_and_account() {
    let app = TestApp::spawn().await;
    let owner = app.seed_identity("Ada").await;
    app.send(Method::POST, "/api/profile", Some(owner), Some(profile_form())).await;

    let deleted = app.send(Method::DELETE, "/api/profile", Some(owner), None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.json(), json!({"msg": "User deleted"}));

    assert_eq!(app.get("/api/profile", None).await.json(), json!([]));
    assert!(app.ctx.identities.get_by_id(owner).await.unwrap().is_none());

    // Nothing left to remove still succeeds
    let again = app.send(Method::DELETE, "/api/profile", Some(owner), None).await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_ok() {
    let app = TestApp::spawn().await;

    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], json!("ok"));
}
