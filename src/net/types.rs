//! Wire DTOs for the chat backend API.
//!
//! DESIGN
//! ======
//! Every endpoint wraps its payload in the same `{ success, data, error,
//! trace_id }` envelope. Deserialization branches on the `success` flag
//! exclusively (HTTP status is never consulted), and degenerate envelopes
//! collapse into synthesized failures so callers only ever see one of the
//! two `ApiResponse` variants fully populated.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Error code synthesized when a request fails below the envelope layer
/// (connectivity loss, non-JSON proxy error pages, malformed bodies).
pub const NETWORK_ERROR_CODE: &str = "network_error";

/// Error code synthesized when an envelope violates its own invariant
/// (e.g. `success: true` with no data).
pub const INVALID_ENVELOPE_CODE: &str = "invalid_envelope";

/// Error code returned by transport stubs outside the browser.
pub const UNAVAILABLE_CODE: &str = "unavailable";

/// Structured error payload carried by failure envelopes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Machine-readable error code (e.g. `"rate_limited"`).
    pub code: String,
    /// Human-readable message, shown to the user when present.
    pub message: String,
    /// Optional provider-specific detail object.
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ErrorInfo {
    /// Build a client-synthesized error with no details.
    pub fn synthesized(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_owned(),
            message: message.into(),
            details: None,
        }
    }

    /// Message suitable for direct display, present only when the error
    /// actually came from the server. Client-synthesized failures carry
    /// diagnostic text for logs, not for the user.
    pub fn server_message(&self) -> Option<String> {
        match self.code.as_str() {
            NETWORK_ERROR_CODE | INVALID_ENVELOPE_CODE | UNAVAILABLE_CODE => None,
            _ => Some(self.message.clone()),
        }
    }
}

/// Uniform API outcome: exactly one variant is populated per response.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse<T> {
    /// The envelope reported `success: true` and carried data.
    Success { data: T, trace_id: String },
    /// The envelope reported failure, or the request never produced a
    /// parsable envelope.
    Failure { error: ErrorInfo, trace_id: String },
}

impl<T> ApiResponse<T> {
    /// Failure synthesized from a transport-level error (send failure or
    /// unparsable body). No server trace id exists for these.
    pub fn network_failure(message: impl Into<String>) -> Self {
        Self::Failure {
            error: ErrorInfo::synthesized(NETWORK_ERROR_CODE, message),
            trace_id: String::new(),
        }
    }

    /// Failure returned by stubbed transport operations outside the browser.
    pub fn unavailable() -> Self {
        Self::Failure {
            error: ErrorInfo::synthesized(UNAVAILABLE_CODE, "not available outside the browser"),
            trace_id: String::new(),
        }
    }

    /// Server-assigned trace id, empty for synthesized failures.
    pub fn trace_id(&self) -> &str {
        match self {
            Self::Success { trace_id, .. } | Self::Failure { trace_id, .. } => trace_id,
        }
    }

    fn from_wire(wire: WireEnvelope<T>) -> Self {
        let WireEnvelope {
            success,
            data,
            error,
            trace_id,
        } = wire;

        if success {
            match data {
                Some(data) => Self::Success { data, trace_id },
                None => Self::Failure {
                    error: ErrorInfo::synthesized(INVALID_ENVELOPE_CODE, "success envelope carried no data"),
                    trace_id,
                },
            }
        } else {
            Self::Failure {
                error: error.unwrap_or_else(|| {
                    ErrorInfo::synthesized(INVALID_ENVELOPE_CODE, "failure envelope carried no error")
                }),
                trace_id,
            }
        }
    }
}

impl<'de, T> Deserialize<'de> for ApiResponse<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        WireEnvelope::<T>::deserialize(deserializer).map(Self::from_wire)
    }
}

/// Raw envelope shape as it appears on the wire.
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct WireEnvelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    error: Option<ErrorInfo>,
    #[serde(default)]
    trace_id: String,
}

/// Author of a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One prior turn as sent in the chat request history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub role: Role,
    pub content: String,
}

/// Request body for `POST /chat`.
///
/// `history` is always serialized, even when empty; `doc_ids` and `top_k`
/// are omitted entirely when unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryTurn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

/// Success data for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    #[serde(default)]
    pub sources: Vec<ChatSource>,
}

/// Citation metadata attached to an assistant answer.
///
/// Every field is optional; the backend returns whatever its retriever knows
/// about the passage. `document_id` arrives as either a JSON number or a
/// string depending on the store backing the index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct ChatSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_string_from_value")]
    pub document_id: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub article_reference: Option<String>,
}

/// Success data for `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthData {
    pub status: String,
}

/// One template as listed by `GET /templates`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMeta {
    pub template_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One document submitted to `POST /ingest`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestDocument {
    pub doc_id: String,
    pub text: String,
}

/// Request body for `POST /ingest`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestRequest {
    pub documents: Vec<IngestDocument>,
}

/// Per-document outcome in the ingest response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestResult {
    pub doc_id: String,
    pub ok: bool,
    pub chunks: i64,
    pub upserts: i64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Success data for `POST /ingest`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestResponse {
    pub results: Vec<IngestResult>,
}

/// Success data for `POST /ingest-template`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateIngestData {
    pub doc_id: String,
    pub chunks: i64,
    pub upserts: i64,
}

fn deserialize_opt_string_from_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(D::Error::custom("expected string or number")),
    }
}
