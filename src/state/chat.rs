#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::answer::parse_final_answer;

/// State for the chat view: the transcript plus the in-flight flag.
///
/// Held in an `RwSignal` context provided at the application root.
/// Messages are append-only and never truncated within a session.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
}

/// A single transcript entry.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub text: String,
    /// Verbatim backend payload, retained on successful bot turns so the
    /// dev-mode view can re-render it. `None` for user and error turns.
    pub raw: Option<String>,
}

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

impl ChatState {
    /// Append the user's turn and mark its request as in flight.
    ///
    /// Callers must not submit while `loading` is set: one bot turn per
    /// user turn keeps the transcript strictly alternating.
    pub fn push_user(&mut self, text: String) {
        self.messages.push(ChatMessage {
            id: new_id(),
            role: Role::User,
            text,
            raw: None,
        });
        self.loading = true;
    }

    /// Append the bot reply for the outstanding request.
    ///
    /// Display text is the extracted final answer; the payload is kept
    /// verbatim for the dev-mode view.
    pub fn push_bot(&mut self, response: String) {
        let text = parse_final_answer(&response).to_owned();
        self.messages.push(ChatMessage {
            id: new_id(),
            role: Role::Bot,
            text,
            raw: Some(response),
        });
        self.loading = false;
    }

    /// Append an error turn for the outstanding request.
    pub fn push_error(&mut self, message: &str) {
        self.messages.push(ChatMessage {
            id: new_id(),
            role: Role::Bot,
            text: format!("Error: {message}"),
            raw: None,
        });
        self.loading = false;
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
