//! REST API helpers for the chat and company-description backends.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning errors, so the state/test suite compiles
//! without a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` so every failure degrades to a single
//! in-view message: the chat view folds it into an error turn, the company
//! view substitutes its fixed fallback string. No retries.

#![allow(clippy::unused_async)]

use crate::net::types::{ChatReply, CompanyReply};

/// Base URL of the backend services; fixed for local development.
pub const API_BASE: &str = "http://localhost:8000";

/// Send a chat turn via `POST /chat`.
///
/// # Errors
///
/// Returns the transport/decode error message, or a status line when the
/// backend answers non-OK.
pub async fn send_chat_message(message: &str) -> Result<ChatReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/chat");
        let body = serde_json::json!({ "message": message });
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| {
                log::warn!("chat request failed: {e}");
                e.to_string()
            })?;
        if !resp.ok() {
            log::warn!("chat request returned status {}", resp.status());
            return Err(format!("Request failed with status {}", resp.status()));
        }
        resp.json::<ChatReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available outside the browser".to_owned())
    }
}

/// Look up a company via `POST /company-description`.
///
/// The backend reports lookup failures in the body's `error` field, so no
/// status check happens here; the caller inspects the reply.
///
/// # Errors
///
/// Returns the transport/decode error message.
pub async fn fetch_company_description(company_name: &str) -> Result<CompanyReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/company-description");
        let body = serde_json::json!({ "company_name": company_name });
        let resp = gloo_net::http::Request::post(&url)
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| {
                log::warn!("company lookup failed: {e}");
                e.to_string()
            })?;
        resp.json::<CompanyReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = company_name;
        Err("not available outside the browser".to_owned())
    }
}
