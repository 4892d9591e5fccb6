//! Best-effort extraction and display of agent reply payloads.
//!
//! Agent backends serialize their run result into the `response` string,
//! single-quoted repr style. `parse_final_answer` scrapes the readable
//! answer back out; `pretty_response` renders the whole payload for the
//! dev-mode view.

#[cfg(test)]
#[path = "answer_test.rs"]
mod answer_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::ChatResponse;

static FINAL_ANSWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"final_answer='([^']+)'").expect("final_answer pattern"));

/// Pull the `final_answer` field out of a repr-style payload.
///
/// Returns the first capture on a match, the input unchanged otherwise.
/// The single-quote coupling is part of the backend contract: values
/// containing apostrophes truncate, and non-matching payloads fall
/// through verbatim rather than erroring.
pub fn parse_final_answer(response: &str) -> &str {
    FINAL_ANSWER
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map_or(response, |m| m.as_str())
}

/// Render a stored payload for the dev-mode view.
///
/// Structured agent payloads pretty-print through the typed shape, other
/// JSON pretty-prints generically, and anything else comes back verbatim.
pub fn pretty_response(raw: &str) -> String {
    if let Some(parsed) = ChatResponse::parse(raw) {
        return serde_json::to_string_pretty(&parsed).unwrap_or_else(|_| raw.to_owned());
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| raw.to_owned()),
        Err(_) => raw.to_owned(),
    }
}
