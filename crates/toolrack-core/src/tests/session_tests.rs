//! Tests for the suggestion session: transitions, saturation, commit cascade

use super::fixtures::*;
use crate::session::{SearchSession, SessionEvent, SubmitFallback, SurfaceConfig};
use toolrack_types::NavTarget;

fn header_session() -> SearchSession {
    SearchSession::new(SurfaceConfig::header())
}

fn tools_session() -> SearchSession {
    SearchSession::new(SurfaceConfig::tools_page())
}

#[test]
fn test_header_stays_closed_on_empty_query() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "");
    assert!(!session.is_open());
    assert_eq!(session.match_count(), 0);
}

#[test]
fn test_header_opens_on_nonempty_query() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "calc");
    assert!(session.is_open());
    assert_eq!(session.highlighted(), None);
}

#[test]
fn test_tools_page_opens_even_when_blank() {
    let registry = small_registry();
    let mut session = tools_session();
    type_query(&mut session, &registry, "");
    assert!(session.is_open());
    assert_eq!(session.match_count(), registry.len());
}

#[test]
fn test_every_keystroke_resets_the_highlight() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "calc");
    session.process(SessionEvent::SelectNext, &registry);
    assert_eq!(session.highlighted(), Some(0));

    type_query(&mut session, &registry, "calcu");
    assert_eq!(session.highlighted(), None);
}

#[test]
fn test_select_next_saturates_at_last_match() {
    let registry = small_registry();
    let mut session = header_session();
    // "calculator" matches Age Calculator and GST Calculator
    type_query(&mut session, &registry, "calculator");
    assert_eq!(session.match_count(), 2);

    session.process(SessionEvent::SelectNext, &registry);
    session.process(SessionEvent::SelectNext, &registry);
    assert_eq!(session.highlighted(), Some(1));
    session.process(SessionEvent::SelectNext, &registry);
    assert_eq!(session.highlighted(), Some(1), "no wrap past the end");
}

#[test]
fn test_select_previous_saturates_at_none() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "calculator");

    session.process(SessionEvent::SelectPrevious, &registry);
    assert_eq!(session.highlighted(), None, "no-op from no selection");

    session.process(SessionEvent::SelectNext, &registry);
    session.process(SessionEvent::SelectPrevious, &registry);
    assert_eq!(session.highlighted(), None);
    session.process(SessionEvent::SelectPrevious, &registry);
    assert_eq!(session.highlighted(), None);
}

#[test]
fn test_arrows_are_ignored_while_closed() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "calc");
    session.process(SessionEvent::Dismiss, &registry);

    session.process(SessionEvent::SelectNext, &registry);
    assert_eq!(session.highlighted(), None);
}

#[test]
fn test_submit_commits_the_highlighted_match() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "calculator");
    session.process(SessionEvent::SelectNext, &registry);
    session.process(SessionEvent::SelectNext, &registry);

    let target = session.process(SessionEvent::Submit, &registry);
    match target {
        Some(NavTarget::Tool { record }) => assert_eq!(record.path, "/gst-calculator"),
        other => panic!("expected a tool commit, got {other:?}"),
    }
}

#[test]
fn test_submit_without_highlight_falls_back_to_first_match() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "calculator");

    let target = session.process(SessionEvent::Submit, &registry);
    match target {
        Some(NavTarget::Tool { record }) => assert_eq!(record.path, "/age-calculator"),
        other => panic!("expected the first match, got {other:?}"),
    }
}

#[test]
fn test_never_fallback_goes_to_the_search_route() {
    let registry = small_registry();
    let mut session = tools_session();
    type_query(&mut session, &registry, "calculator");
    assert_eq!(session.match_count(), 2);

    let target = session.process(SessionEvent::Submit, &registry);
    assert_eq!(
        target,
        Some(NavTarget::Query {
            query: "calculator".to_string()
        })
    );
}

#[test]
fn test_submit_with_no_matches_carries_the_raw_query() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "doesnotexist123");
    assert_eq!(session.match_count(), 0);

    let target = session.process(SessionEvent::Submit, &registry);
    assert_eq!(
        target,
        Some(NavTarget::Query {
            query: "doesnotexist123".to_string()
        })
    );
}

#[test]
fn test_submit_with_empty_query_is_a_noop() {
    let registry = small_registry();
    let mut session = header_session();
    let target = session.process(SessionEvent::Submit, &registry);
    assert_eq!(target, None);
    assert!(!session.is_open());
}

#[test]
fn test_whitespace_query_still_submits_raw() {
    let registry = small_registry();
    let mut session = header_session();
    // Blank for matching purposes, but non-empty for the Enter cascade
    type_query(&mut session, &registry, "  ");
    assert_eq!(session.match_count(), 0);

    let target = session.process(SessionEvent::Submit, &registry);
    assert_eq!(
        target,
        Some(NavTarget::Query {
            query: "  ".to_string()
        })
    );
}

#[test]
fn test_commit_resets_the_session() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "calculator");
    session.process(SessionEvent::SelectNext, &registry);
    session.process(SessionEvent::Submit, &registry);

    assert_eq!(session.query(), "");
    assert!(!session.is_open());
    assert_eq!(session.highlighted(), None);
    assert_eq!(session.match_count(), 0);
}

#[test]
fn test_dismiss_keeps_the_query_and_is_idempotent() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "word");
    session.process(SessionEvent::SelectNext, &registry);

    session.process(SessionEvent::Dismiss, &registry);
    assert!(!session.is_open());
    assert_eq!(session.highlighted(), None);
    assert_eq!(session.query(), "word");

    session.process(SessionEvent::Dismiss, &registry);
    assert!(!session.is_open());
    assert_eq!(session.highlighted(), None);
    assert_eq!(session.query(), "word");
}

#[test]
fn test_focus_lost_behaves_like_dismiss() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "word");

    session.process(SessionEvent::FocusLost, &registry);
    assert!(!session.is_open());
    assert_eq!(session.query(), "word");
}

#[test]
fn test_focus_reopens_with_the_existing_query() {
    let registry = small_registry();
    let mut session = header_session();
    type_query(&mut session, &registry, "word");
    session.process(SessionEvent::Dismiss, &registry);

    session.process(SessionEvent::Focused, &registry);
    assert!(session.is_open());
    assert_eq!(session.highlighted(), None);
    assert_eq!(session.match_count(), 1);
}

#[test]
fn test_focus_with_empty_query_keeps_header_closed() {
    let registry = small_registry();
    let mut session = header_session();
    session.process(SessionEvent::Focused, &registry);
    assert!(!session.is_open());
}

#[test]
fn test_suggestion_click_commits_that_index() {
    let registry = small_registry();
    let mut session = tools_session();
    type_query(&mut session, &registry, "calculator");

    let target = session.process(SessionEvent::SuggestionClicked { index: 1 }, &registry);
    match target {
        Some(NavTarget::Tool { record }) => assert_eq!(record.path, "/gst-calculator"),
        other => panic!("expected a tool commit, got {other:?}"),
    }
    assert_eq!(session.query(), "", "click commit resets the session");
}

#[test]
fn test_suggestion_click_out_of_range_is_ignored() {
    let registry = small_registry();
    let mut session = tools_session();
    type_query(&mut session, &registry, "calculator");

    let target = session.process(SessionEvent::SuggestionClicked { index: 99 }, &registry);
    assert_eq!(target, None);
    assert_eq!(session.query(), "calculator");
    assert!(session.is_open());
}

#[test]
fn test_session_events_round_trip_through_json() {
    let events = [
        SessionEvent::QueryChanged {
            query: "bmi".to_string(),
        },
        SessionEvent::SelectNext,
        SessionEvent::SelectPrevious,
        SessionEvent::Submit,
        SessionEvent::Dismiss,
        SessionEvent::FocusLost,
        SessionEvent::Focused,
        SessionEvent::SuggestionClicked { index: 2 },
    ];
    for event in events {
        let json = serde_json::to_string(&event).expect("serialize");
        let parsed: SessionEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, event);
    }

    let json = serde_json::to_string(&SessionEvent::SelectNext).expect("serialize");
    assert_eq!(json, r#"{"type":"select_next"}"#);
}

#[test]
fn test_result_cap_bounds_the_match_list() {
    let registry = small_registry();
    let mut session = SearchSession::new(SurfaceConfig {
        empty_query: crate::search::EmptyQueryPolicy::ShowAll,
        result_cap: Some(2),
        submit_fallback: SubmitFallback::Never,
    });
    type_query(&mut session, &registry, "");
    assert_eq!(session.match_count(), 2);
    assert_eq!(session.matches(&registry)[0].path, "/age-calculator");
}
