#[cfg(test)]
#[path = "company_test.rs"]
mod company_test;

use crate::net::types::CompanyReply;

/// State for the company lookup view.
///
/// `description` and `error` are mutually exclusive: every terminal
/// transition sets one and clears the other.
#[derive(Clone, Debug, Default)]
pub struct CompanyState {
    pub company_name: String,
    pub description: String,
    pub error: String,
    pub loading: bool,
}

impl CompanyState {
    /// Fallback shown when the request itself fails (network or parse).
    pub const FETCH_FAILED: &'static str =
        "Failed to fetch company description. Please try again.";

    /// Mark a lookup as in flight. Clears any prior error; the previous
    /// description stays visible until the result arrives.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error.clear();
    }

    /// Terminal success transition.
    pub fn finish_ok(&mut self, description: String) {
        self.description = description;
        self.error.clear();
        self.loading = false;
    }

    /// Terminal failure transition.
    pub fn finish_err(&mut self, message: String) {
        self.error = message;
        self.description.clear();
        self.loading = false;
    }

    /// Apply a backend reply: a non-empty `error` field wins over the
    /// description, anything else counts as success.
    pub fn apply(&mut self, reply: CompanyReply) {
        match reply.error {
            Some(err) if !err.is_empty() => self.finish_err(err),
            _ => self.finish_ok(reply.description.unwrap_or_default()),
        }
    }
}
