#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Success body of `POST /chat`.
///
/// `response` is plain text for simple replies; agent backends serialize
/// their whole run result into it instead.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Success body of `POST /company-description`. The backend reports
/// lookup failures in-band via `error` rather than an HTTP status.
#[derive(Clone, Debug, Deserialize)]
pub struct CompanyReply {
    pub description: Option<String>,
    pub error: Option<String>,
}

/// Structured agent run result, as serialized into `ChatReply::response`
/// by backends that emit JSON instead of a repr string.
///
/// Every field is defaulted so partial payloads still parse; consumed
/// opportunistically by the dev-mode pretty-printer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    pub original_query: String,
    pub collection_names: Vec<String>,
    pub searches: Vec<SearchSpec>,
    pub usage: Usage,
    pub total_time: f64,
    pub final_answer: String,
    pub sources: Vec<SourceRef>,
}

/// One retrieval pass the agent ran against a collection.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSpec {
    pub queries: Vec<String>,
    pub filters: Vec<serde_json::Value>,
    pub filter_operators: String,
    pub collection: String,
}

/// Token accounting reported by the agent.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub requests: u64,
    pub request_tokens: u64,
    pub response_tokens: u64,
    pub total_tokens: u64,
    pub details: Option<serde_json::Value>,
}

/// Pointer to a retrieved object backing the answer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceRef {
    pub object_id: String,
    pub collection: String,
}

impl ChatResponse {
    /// Best-effort parse of a serialized agent payload.
    ///
    /// Returns `None` unless the payload is JSON carrying a non-empty
    /// `final_answer`; with all fields defaulted, any bare object would
    /// otherwise "parse" and swallow its contents.
    pub fn parse(raw: &str) -> Option<Self> {
        let parsed: Self = serde_json::from_str(raw).ok()?;
        if parsed.final_answer.is_empty() {
            return None;
        }
        Some(parsed)
    }
}
