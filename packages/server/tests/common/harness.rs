//! Test harness that drives the real router in-process.
//!
//! Each test gets a fresh in-memory ledger and a recording mailer, so tests
//! are independent and need no network.

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use server_core::kernel::{MockMailer, TestDependencies};
use server_core::server::build_app;
use test_context::AsyncTestContext;
use tower::ServiceExt;

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &mut TestHarness) {
///     let response = ctx.get("/").await;
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub deps: TestDependencies,
    pub app: Router,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        // Respect RUST_LOG; try_init so repeated setup doesn't panic.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self::with_deps(TestDependencies::new())
    }
}

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

impl TestHarness {
    pub fn with_deps(deps: TestDependencies) -> Self {
        let app = build_app(deps.server_deps());
        Self { deps, app }
    }

    pub fn mailer(&self) -> &MockMailer {
        &self.deps.mailer
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    /// POST a body with only the given headers (no default `Content-Type`).
    pub async fn post_raw(&self, uri: &str, body: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut builder = Request::builder().method("POST").uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::from(body.to_string())).unwrap();
        self.send(request).await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(&self, uri: &str, form: &str) -> TestResponse {
        self.post_form_with_headers(uri, form, &[]).await
    }

    pub async fn post_form_with_headers(
        &self,
        uri: &str,
        form: &str,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::from(form.to_string())).unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// Submit an access request and return the request id from the owner's
    /// approval email.
    pub async fn request_access(&self, email: &str) -> String {
        let response = self
            .post_form("/request_access", &format!("email={}", email))
            .await;
        assert_eq!(response.status, StatusCode::OK);

        let approval = self
            .mailer()
            .last()
            .expect("owner should receive an approval email");
        extract_after(&approval.html, "/approve/")
    }

    /// Approve a request and return the token from the visitor's email.
    pub async fn approve(&self, request_id: &str) -> String {
        let response = self.get(&format!("/approve/{}", request_id)).await;
        assert_eq!(response.status, StatusCode::OK);

        let approved = self
            .mailer()
            .last()
            .expect("visitor should receive an approval email");
        extract_after(&approved.html, "/portfolio/")
    }
}

/// Pull the path segment that follows `marker` out of an email body.
pub fn extract_after(html: &str, marker: &str) -> String {
    let start = html.find(marker).expect("marker present in email") + marker.len();
    html[start..]
        .chars()
        .take_while(|c| c.is_ascii_hexdigit() || *c == '-')
        .collect()
}
