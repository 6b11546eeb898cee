//! Fake job-listing API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `GET /jobs` — the configured jobs inside an `{"items": […]}` envelope
//! - `GET /categories` — a raw payload stored verbatim by the test
//!
//! Any instance can be forced into a failure mode with
//! [`FakeJobApi::set_status`], which makes every route answer with a bare
//! status code. Requests are counted across routes so tests can assert which
//! base URLs were actually consulted.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_job_api::FakeJobApi;
//!
//! let api = FakeJobApi::start().await.unwrap();
//! api.add_job(serde_json::json!({"id": 1, "title": "Rust Engineer"})).await;
//!
//! // Point your client at api.base_url()
//! let url = api.base_url();
//! # });
//! ```

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
#[derive(Default)]
struct ApiState {
    jobs: Vec<Value>,
    categories: Option<Value>,
    /// When set, every route answers with this status and a detail body.
    forced_status: Option<u16>,
    /// Requests served so far, across all routes.
    hits: usize,
}

/// Handle to the running fake job API server.
pub struct FakeJobApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeJobApi {
    /// Start the fake job API server on a random port. Returns once the
    /// server is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/jobs", get(list_jobs))
            .route("/categories", get(list_categories))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Add one raw job payload to the `/jobs` listing.
    pub async fn add_job(&self, job: Value) {
        self.state.lock().await.jobs.push(job);
    }

    /// Payload served verbatim by `/categories`.
    pub async fn set_categories(&self, payload: Value) {
        self.state.lock().await.categories = Some(payload);
    }

    /// Force every route to answer with this status code.
    pub async fn set_status(&self, status: u16) {
        self.state.lock().await.forced_status = Some(status);
    }

    /// Number of requests served so far.
    pub async fn hits(&self) -> usize {
        self.state.lock().await.hits
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn list_jobs(State(state): State<Arc<Mutex<ApiState>>>) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.hits += 1;
    if let Some(status) = state.forced_status {
        return (status_of(status), Json(json!({"detail": "unavailable"})));
    }

    let items = state.jobs.clone();
    let count = items.len();
    let body = json!({
        "items": items,
        "total": count,
        "page": 1,
        "per_page": count,
        "total_pages": 1
    });
    (StatusCode::OK, Json(body))
}

async fn list_categories(State(state): State<Arc<Mutex<ApiState>>>) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.hits += 1;
    if let Some(status) = state.forced_status {
        return (status_of(status), Json(json!({"detail": "unavailable"})));
    }

    let body = state.categories.clone().unwrap_or_else(|| json!([]));
    (StatusCode::OK, Json(body))
}

fn status_of(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
