//! HTTP client for the remote job-listing API.
//!
//! [`JobsClient`] owns a shared `reqwest` client (JSON headers, configured
//! timeout and user agent) and the ordered base-URL list. Every response body
//! is handed to the jobdeck-core normalizer as an opaque `serde_json::Value`;
//! this crate never inspects raw payload field names itself.
//!
//! # Base-URL failover
//!
//! The upstream service has historically been reachable under more than one
//! host, so each request walks the configured base URLs in order. Transport
//! errors and 5xx responses move on to the next URL; any 4xx is a definitive
//! answer from the service and is returned as-is. The last failure wins when
//! every URL is exhausted.

use jobdeck_core::config::ApiConfig;
use jobdeck_core::{normalizer, Category, FavoriteContext, JobRecord, JobsPage};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

use crate::error::ApiError;
use crate::query::JobQuery;

/// Client for the job-listing backend (`/jobs`, `/categories`, `/favorites`).
#[derive(Debug, Clone)]
pub struct JobsClient {
    http: reqwest::Client,
    base_urls: Vec<String>,
}

impl JobsClient {
    /// Build a client from the `[api]` configuration section.
    pub fn new(cfg: &ApiConfig) -> Result<Self, ApiError> {
        let base_urls = cfg.base_urls();
        if base_urls.is_empty() {
            return Err(ApiError::NoBaseUrls);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(cfg.user_agent.clone())
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;

        Ok(Self { http, base_urls })
    }

    // -----------------------------------------------------------------------
    // Jobs
    // -----------------------------------------------------------------------

    /// Fetch one page of job listings.
    ///
    /// The raw envelope is normalized with [`FavoriteContext::Listing`];
    /// missing or mistyped envelope metadata degrades to item-count-derived
    /// defaults instead of failing.
    pub async fn list_jobs(&self, query: &JobQuery) -> Result<JobsPage, ApiError> {
        let payload = self
            .json_response(Method::GET, "/jobs", &query.to_params(), None)
            .await?;
        Ok(normalizer::normalize_page(&payload, FavoriteContext::Listing))
    }

    /// Fetch a single job by id.
    ///
    /// `Ok(None)` for an unknown id (HTTP 404) and for a body that is not
    /// object-shaped; the detail surface has no other soft-failure mode.
    pub async fn job_by_id(&self, id: &str) -> Result<Option<JobRecord>, ApiError> {
        let path = format!("/jobs/{}", encode_segment(id));
        let resp = self.send(Method::GET, &path, &[], None).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let payload: Value = ensure_success(resp)?.json().await?;
        Ok(normalizer::normalize_record(&payload, FavoriteContext::Listing))
    }

    /// Fetch the category listing that drives the `--category` filter.
    ///
    /// Tolerates every shape the endpoint has answered with: a bare array or
    /// a `jobs` / `categories` / `data` wrapper, entries spelled
    /// `{value, label}` or `{slug, name}`. Entries come back sorted by label.
    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let payload = self
            .json_response(Method::GET, "/categories", &[], None)
            .await?;
        Ok(normalizer::normalize_categories(&payload))
    }

    // -----------------------------------------------------------------------
    // Favorites
    // -----------------------------------------------------------------------

    /// Fetch the favorites list.
    ///
    /// The backend has answered with both a bare array and an
    /// `{"items": […]}` wrapper over time; both normalize transparently.
    pub async fn favorites(&self) -> Result<Vec<JobRecord>, ApiError> {
        let payload = self
            .json_response(Method::GET, "/favorites", &[], None)
            .await?;
        Ok(normalizer::normalize_listing(&payload, FavoriteContext::Favorites))
    }

    /// Add a job to the favorites list.
    pub async fn add_favorite(&self, id: &str) -> Result<(), ApiError> {
        let body = json!({ "job_id": id });
        let resp = self.send(Method::POST, "/favorites", &[], Some(body)).await?;
        ensure_success(resp)?;
        Ok(())
    }

    /// Remove a job from the favorites list.
    pub async fn remove_favorite(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/favorites/{}", encode_segment(id));
        let resp = self.send(Method::DELETE, &path, &[], None).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { id: id.to_string() });
        }
        ensure_success(resp)?;
        Ok(())
    }

    /// Toggle a job's favorite state; returns the new state.
    pub async fn toggle_favorite(&self, id: &str) -> Result<bool, ApiError> {
        let path = format!("/favorites/{}/toggle", encode_segment(id));
        let payload = self.json_response(Method::POST, &path, &[], None).await?;
        favorite_state(&payload)
    }

    /// Ask whether a job is currently favorited.
    pub async fn check_favorite(&self, id: &str) -> Result<bool, ApiError> {
        let path = format!("/favorites/check/{}", encode_segment(id));
        let payload = self.json_response(Method::GET, &path, &[], None).await?;
        favorite_state(&payload)
    }

    // -----------------------------------------------------------------------
    // Request plumbing
    // -----------------------------------------------------------------------

    /// Send a request and decode the body as JSON, erroring on non-success.
    async fn json_response(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let resp = self.send(method, path, params, body).await?;
        Ok(ensure_success(resp)?.json().await?)
    }

    /// Send a request with base-URL failover.
    async fn send(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut last: Option<ApiError> = None;

        for base in &self.base_urls {
            let url = format!("{base}{path}");
            tracing::debug!(%method, %url, "job API request");

            let mut req = self.http.request(method.clone(), &url);
            if !params.is_empty() {
                req = req.query(params);
            }
            if let Some(body) = &body {
                req = req.json(body);
            }

            match req.send().await {
                Ok(resp) if resp.status().is_server_error() => {
                    tracing::warn!(%url, status = %resp.status(), "job API server error, trying next base URL");
                    last = Some(ApiError::Status {
                        status: resp.status(),
                        url,
                    });
                }
                Ok(resp) => return Ok(resp),
                Err(err) => {
                    tracing::warn!(%url, error = %err, "job API unreachable, trying next base URL");
                    last = Some(ApiError::Http(err));
                }
            }
        }

        Err(last.unwrap_or(ApiError::NoBaseUrls))
    }
}

/// Map a non-2xx response to [`ApiError::Status`].
fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            status,
            url: resp.url().to_string(),
        })
    }
}

/// Extract the `is_favorite` flag a toggle/check response must carry.
fn favorite_state(payload: &Value) -> Result<bool, ApiError> {
    payload
        .get("is_favorite")
        .and_then(Value::as_bool)
        .ok_or(ApiError::UnexpectedPayload("missing boolean is_favorite"))
}

/// Percent-encode one path segment (RFC 3986 unreserved characters pass
/// through untouched).
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
