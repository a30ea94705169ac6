//! REST operations against the chat backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs resolving to a synthesized `unavailable`
//! failure since the backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns an [`ApiResponse`] unconditionally: one request
//! per call, never retried. The HTTP status is deliberately never inspected;
//! the parsed envelope's `success` flag is the whole contract. Send failures
//! and unparsable bodies (connectivity loss, proxy error pages) come back as
//! synthesized `network_error` failures, so callers handle exactly one shape.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    ApiResponse, ChatRequest, ChatResponse, HealthData, IngestRequest, IngestResponse, TemplateIngestData,
    TemplateMeta,
};

/// Base URL used when `CHAT_API_BASE_URL` is not set at build time.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api/v1";

/// Backend base URL, baked in at compile time.
pub fn api_base() -> &'static str {
    option_env!("CHAT_API_BASE_URL").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn ingest_template_body(template_id: &str) -> serde_json::Value {
    serde_json::json!({ "template_id": template_id })
}

/// Check backend liveness via `GET /health`.
pub async fn get_health() -> ApiResponse<HealthData> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/health").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ApiResponse::unavailable()
    }
}

/// Send one chat turn via `POST /chat`.
pub async fn post_chat(body: &ChatRequest) -> ApiResponse<ChatResponse> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/chat", body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        ApiResponse::unavailable()
    }
}

/// Submit raw documents for indexing via `POST /ingest`.
pub async fn ingest_documents(body: &IngestRequest) -> ApiResponse<IngestResponse> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/ingest", body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        ApiResponse::unavailable()
    }
}

/// Fetch the predefined template list via `GET /templates`.
pub async fn list_templates() -> ApiResponse<Vec<TemplateMeta>> {
    #[cfg(feature = "hydrate")]
    {
        fetch_json("/templates").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ApiResponse::unavailable()
    }
}

/// Index a predefined template via `POST /ingest-template`.
pub async fn ingest_template(template_id: &str) -> ApiResponse<TemplateIngestData> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/ingest-template", &ingest_template_body(template_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = template_id;
        ApiResponse::unavailable()
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_json<T>(path: &str) -> ApiResponse<T>
where
    T: serde::de::DeserializeOwned,
{
    let url = endpoint(path);
    parse_envelope(gloo_net::http::Request::get(&url).send().await).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T, B>(path: &str, body: &B) -> ApiResponse<T>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    let url = endpoint(path);
    let request = match gloo_net::http::Request::post(&url).json(body) {
        Ok(request) => request,
        Err(e) => return ApiResponse::network_failure(e.to_string()),
    };
    parse_envelope(request.send().await).await
}

#[cfg(feature = "hydrate")]
async fn parse_envelope<T>(sent: Result<gloo_net::http::Response, gloo_net::Error>) -> ApiResponse<T>
where
    T: serde::de::DeserializeOwned,
{
    let response = match sent {
        Ok(response) => response,
        Err(e) => return ApiResponse::network_failure(e.to_string()),
    };
    match response.json::<ApiResponse<T>>().await {
        Ok(parsed) => parsed,
        Err(e) => ApiResponse::network_failure(e.to_string()),
    }
}
