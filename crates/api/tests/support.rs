#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use devfolio_api::{router, AppContext, IDENTITY_HEADER};
use devfolio_domain::{Config, Identity, IdentityId};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::MockServer;

/// Router over a fresh database and a mock repository-listing upstream.
pub struct TestApp {
    pub router: Router,
    pub ctx: Arc<AppContext>,
    pub github: MockServer,
    /// Keep temporary directory alive for the lifetime of the app.
    _temp_dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body should be JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temporary database directory");
        let github = MockServer::start().await;

        let mut config = Config::default();
        config.database.path = temp_dir.path().join("devfolio.db").display().to_string();
        config.database.pool_size = 4;
        config.github.api_base_url = github.uri();
        config.github.client_id = "test-client".to_string();
        config.github.client_secret = "test-secret".to_string();

        let ctx = Arc::new(AppContext::new(config).expect("failed to initialise app context"));
        let router = router(Arc::clone(&ctx));

        Self { router, ctx, github, _temp_dir: temp_dir }
    }

    /// Store an account and return its id.
    pub async fn seed_identity(&self, name: &str) -> IdentityId {
        let identity = Identity {
            id: IdentityId::new(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            avatar: Some(format!("https://avatars.example.com/{name}")),
            created_at: Utc::now(),
        };
        let id = identity.id;
        self.ctx.identities.create(identity).await.expect("failed to seed identity");
        id
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        identity: Option<IdentityId>,
        body: Option<Value>,
    ) -> TestResponse {
        self.dispatch(identity.map(|id| id.to_string()), method, uri, body).await
    }

    /// Send with a raw identity header value.
    pub async fn send_as(
        &self,
        header: &str,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> TestResponse {
        self.dispatch(Some(header.to_string()), method, uri, body).await
    }

    async fn dispatch(
        &self,
        header: Option<String>,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = header {
            builder = builder.header(IDENTITY_HEADER, value);
        }
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("request should build"))
            .await
            .expect("router is infallible");

        let status = response.status();
        let body = to_bytes(response.into_body(), 1_000_000).await.expect("body should read");
        TestResponse { status, body: body.to_vec() }
    }

    pub async fn get(&self, uri: &str, identity: Option<IdentityId>) -> TestResponse {
        self.send(Method::GET, uri, identity, None).await
    }
}
