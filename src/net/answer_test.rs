use super::*;

// =============================================================
// parse_final_answer
// =============================================================

#[test]
fn extracts_single_quoted_final_answer() {
    let payload = "AgentRunResult(usage=Usage(requests=2), final_answer='Acme had $5B revenue', total_time=3.4)";
    assert_eq!(parse_final_answer(payload), "Acme had $5B revenue");
}

#[test]
fn returns_input_unchanged_without_marker() {
    assert_eq!(
        parse_final_answer("plain text with no marker"),
        "plain text with no marker"
    );
}

#[test]
fn is_idempotent_on_non_matching_input() {
    let once = parse_final_answer("Hi there!");
    assert_eq!(parse_final_answer(once), "Hi there!");
}

#[test]
fn truncates_at_apostrophe_inside_value() {
    // Known contract fragility: the scrape stops at the first apostrophe.
    let payload = "final_answer='Acme's revenue grew'";
    assert_eq!(parse_final_answer(payload), "Acme");
}

#[test]
fn empty_final_answer_falls_through_to_input() {
    let payload = "final_answer=''";
    assert_eq!(parse_final_answer(payload), payload);
}

#[test]
fn first_marker_wins_when_repeated() {
    let payload = "final_answer='first' final_answer='second'";
    assert_eq!(parse_final_answer(payload), "first");
}

#[test]
fn double_quoted_payloads_do_not_match() {
    let payload = r#"{"final_answer":"Acme builds rockets"}"#;
    assert_eq!(parse_final_answer(payload), payload);
}

// =============================================================
// pretty_response
// =============================================================

#[test]
fn pretty_response_returns_non_json_verbatim() {
    let payload = "AgentRunResult(final_answer='Acme builds rockets')";
    assert_eq!(pretty_response(payload), payload);
}

#[test]
fn pretty_response_indents_generic_json() {
    let out = pretty_response(r#"{"response":"Hi there!"}"#);
    assert!(out.contains("\n"));
    assert!(out.contains(r#""response": "Hi there!""#));
}

#[test]
fn pretty_response_uses_typed_shape_for_agent_payloads() {
    let out = pretty_response(r#"{"final_answer":"Acme builds rockets","total_time":1.5}"#);
    assert!(out.contains(r#""final_answer": "Acme builds rockets""#));
    // Typed rendering fills in the defaulted fields.
    assert!(out.contains(r#""usage""#));
    assert!(out.contains(r#""sources""#));
}

#[test]
fn pretty_response_keeps_invalid_json_as_is() {
    assert_eq!(pretty_response("{not json"), "{not json");
}
