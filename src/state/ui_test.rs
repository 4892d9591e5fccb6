use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_view_is_normal() {
    let state = UiState::default();
    assert_eq!(state.response_view, ResponseView::Normal);
}

// =============================================================
// ResponseView
// =============================================================

#[test]
fn response_view_default_is_normal() {
    assert_eq!(ResponseView::default(), ResponseView::Normal);
}

#[test]
fn response_view_variants_are_distinct() {
    assert_ne!(ResponseView::Normal, ResponseView::Dev);
}
