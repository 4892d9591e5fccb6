use super::*;

// =============================================================
// CompanyState defaults
// =============================================================

#[test]
fn company_state_default_is_empty() {
    let state = CompanyState::default();
    assert!(state.company_name.is_empty());
    assert!(state.description.is_empty());
    assert!(state.error.is_empty());
    assert!(!state.loading);
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut state = CompanyState::default();
    state.error = "old error".to_owned();
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_empty());
}

#[test]
fn begin_keeps_previous_description_visible() {
    let mut state = CompanyState::default();
    state.description = "Acme makes anvils.".to_owned();
    state.begin();
    assert_eq!(state.description, "Acme makes anvils.");
}

// =============================================================
// Terminal transitions
// =============================================================

#[test]
fn finish_ok_sets_description_and_clears_error() {
    let mut state = CompanyState::default();
    state.begin();
    state.finish_ok("Acme makes anvils.".to_owned());

    assert_eq!(state.description, "Acme makes anvils.");
    assert!(state.error.is_empty());
    assert!(!state.loading);
}

#[test]
fn finish_err_sets_error_and_clears_description() {
    let mut state = CompanyState::default();
    state.description = "stale".to_owned();
    state.begin();
    state.finish_err("not found".to_owned());

    assert_eq!(state.error, "not found");
    assert!(state.description.is_empty());
    assert!(!state.loading);
}

#[test]
fn description_and_error_never_coexist() {
    let mut state = CompanyState::default();
    state.finish_ok("desc".to_owned());
    assert!(state.error.is_empty());
    state.finish_err("err".to_owned());
    assert!(state.description.is_empty());
    state.finish_ok("desc again".to_owned());
    assert!(state.error.is_empty());
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_surfaces_backend_error_verbatim() {
    let mut state = CompanyState::default();
    state.description = "stale".to_owned();
    state.begin();
    state.apply(CompanyReply {
        description: None,
        error: Some("not found".to_owned()),
    });

    assert_eq!(state.error, "not found");
    assert!(state.description.is_empty());
    assert!(!state.loading);
}

#[test]
fn apply_takes_description_on_success() {
    let mut state = CompanyState::default();
    state.begin();
    state.apply(CompanyReply {
        description: Some("Acme had $5B revenue.".to_owned()),
        error: None,
    });

    assert_eq!(state.description, "Acme had $5B revenue.");
    assert!(state.error.is_empty());
}

#[test]
fn apply_treats_empty_error_field_as_success() {
    let mut state = CompanyState::default();
    state.apply(CompanyReply {
        description: Some("desc".to_owned()),
        error: Some(String::new()),
    });
    assert_eq!(state.description, "desc");
    assert!(state.error.is_empty());
}

#[test]
fn apply_with_missing_description_leaves_it_empty() {
    let mut state = CompanyState::default();
    state.apply(CompanyReply {
        description: None,
        error: None,
    });
    assert!(state.description.is_empty());
    assert!(state.error.is_empty());
}
