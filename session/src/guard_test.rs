use super::*;

#[test]
fn token_present_allows() {
    assert_eq!(guard(false, Some("mock-token-123456")), GuardDecision::Allow);
}

#[test]
fn token_absent_redirects_to_login() {
    assert_eq!(guard(false, None), GuardDecision::Redirect("/"));
}

#[test]
fn empty_token_counts_as_absent() {
    assert_eq!(guard(false, Some("")), GuardDecision::Redirect("/"));
}

#[test]
fn pending_session_renders_nothing_yet() {
    assert_eq!(guard(true, None), GuardDecision::Pending);
    assert_eq!(guard(true, Some("tok")), GuardDecision::Pending);
}
