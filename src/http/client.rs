//! HTTP client for the tender backend.
//!
//! Single place where auth headers are attached, bodies are serialized and
//! responses are classified. Session expiry (401) is handled here and nowhere
//! else: the token is cleared, the user is sent to the login entry point, and
//! the call fails with [`ApiError::Unauthorized`]. No retries, no caching.

use anyhow::{Context, Result};
use reqwest::{header, multipart, Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::session::Session;

/// Response body after the JSON-or-text content-type split.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    Json(serde_json::Value),
    Text(String),
}

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    session: Session,
}

impl HttpClient {
    pub fn new(base_url: Url, timeout_seconds: u64, session: Session) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Absolute URL for a backend path (paths are given with a leading `/`,
    /// possibly including a query string).
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.get_raw(path).await?;
        decode(body)
    }

    /// GET returning the raw JSON-or-text body, classified by the response
    /// `Content-Type`.
    pub async fn get_raw(&self, path: &str) -> ApiResult<RawBody> {
        tracing::debug!(path, "GET");
        let response = self.execute(self.client.get(self.url(path))).await?;
        read_body(response).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        tracing::debug!(path, "POST");
        let response = self
            .execute(self.client.post(self.url(path)).json(body))
            .await?;
        decode(read_body(response).await?)
    }

    /// POST without a body (and without a `Content-Type` header).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        tracing::debug!(path, "POST (empty)");
        let response = self.execute(self.client.post(self.url(path))).await?;
        decode(read_body(response).await?)
    }

    /// POST a multipart form. The form is passed through untouched; reqwest
    /// supplies the boundary content type.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> ApiResult<T> {
        tracing::debug!(path, "POST (multipart)");
        let response = self
            .execute(self.client.post(self.url(path)).multipart(form))
            .await?;
        decode(read_body(response).await?)
    }

    /// Fetch a static attachment (`GET /download/{file}`).
    pub async fn get_bytes(&self, path: &str) -> ApiResult<Vec<u8>> {
        tracing::debug!(path, "GET (bytes)");
        let response = self.execute(self.client.get(self.url(path))).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Attach the bearer token when one is stored, send, classify the status.
    async fn execute(&self, request: RequestBuilder) -> ApiResult<Response> {
        let request = match self.session.token() {
            Some(token) => request.header(header::AUTHORIZATION, format!("Bearer {token}")),
            None => request,
        };

        let response = request.send().await?;
        self.check_response(response).await
    }

    async fn check_response(&self, response: Response) -> ApiResult<Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("session expired, forcing logout");
            self.session.expire();
            return Err(ApiError::Unauthorized);
        }

        if !status.is_success() {
            let detail = extract_detail(response)
                .await
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            tracing::warn!(status = status.as_u16(), %detail, "request failed");
            return Err(ApiError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response)
    }
}

/// Server-provided error message: the JSON `detail` field when present, else
/// the serialized error payload.
async fn extract_detail(response: Response) -> Option<String> {
    let value: serde_json::Value = response.json().await.ok()?;
    match value.get("detail") {
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
        None => Some(value.to_string()).filter(|s| s != "null"),
    }
}

async fn read_body(response: Response) -> ApiResult<RawBody> {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    if is_json {
        let value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(RawBody::Json(value))
    } else {
        Ok(RawBody::Text(response.text().await?))
    }
}

fn decode<T: DeserializeOwned>(body: RawBody) -> ApiResult<T> {
    match body {
        RawBody::Json(value) => {
            serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
        }
        RawBody::Text(_) => Err(ApiError::Decode(
            "expected a JSON response, got plain text".into(),
        )),
    }
}
