//! Backend wire formats, HTTP helpers, and response parsing.

pub mod answer;
pub mod api;
pub mod types;
