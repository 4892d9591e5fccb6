#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared across the chat view.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub response_view: ResponseView,
}

/// How bot replies are rendered in the transcript.
///
/// `Dev` substitutes a pretty-printed dump of the raw backend payload for
/// the extracted answer. Display-only; stored turns are untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseView {
    #[default]
    Normal,
    Dev,
}
