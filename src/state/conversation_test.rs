use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_empty_and_idle() {
    let state = ConversationState::default();
    assert!(state.turns.is_empty());
    assert!(!state.busy);
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_appends_one_user_turn_and_raises_busy() {
    let mut state = ConversationState::default();
    let history = state.begin_send("Hello");

    assert_eq!(history, Some(Vec::new()));
    assert_eq!(state.turns.len(), 1);
    assert_eq!(state.turns[0].role, Role::User);
    assert_eq!(state.turns[0].content, "Hello");
    assert!(state.turns[0].sources.is_empty());
    assert!(state.busy);
}

#[test]
fn begin_send_trims_surrounding_whitespace() {
    let mut state = ConversationState::default();
    state.begin_send("  Hello  ").unwrap();
    assert_eq!(state.turns[0].content, "Hello");
}

#[test]
fn begin_send_returns_prior_turns_excluding_the_new_message() {
    let mut state = ConversationState::default();
    state.begin_send("first").unwrap();
    state.resolve_success("answer".to_owned(), Vec::new());

    let history = state.begin_send("second").unwrap();
    let contents: Vec<&str> = history.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "answer"]);
}

#[test]
fn begin_send_rejects_whitespace_only_input() {
    let mut state = ConversationState::default();
    assert_eq!(state.begin_send("   \n\t "), None);
    assert!(state.turns.is_empty());
    assert!(!state.busy);
}

#[test]
fn begin_send_rejects_while_busy() {
    let mut state = ConversationState::default();
    state.begin_send("first").unwrap();

    assert_eq!(state.begin_send("second"), None);
    assert_eq!(state.turns.len(), 1);
    assert!(state.busy);
}

// =============================================================
// resolve_success
// =============================================================

#[test]
fn resolve_success_appends_assistant_turn_with_sources_and_clears_busy() {
    let mut state = ConversationState::default();
    state.begin_send("question").unwrap();

    let source = ChatSource {
        snippet: Some("passage".to_owned()),
        ..ChatSource::default()
    };
    state.resolve_success("answer".to_owned(), vec![source.clone()]);

    assert_eq!(state.turns.len(), 2);
    assert_eq!(state.turns[1].role, Role::Assistant);
    assert_eq!(state.turns[1].content, "answer");
    assert_eq!(state.turns[1].sources, vec![source]);
    assert!(!state.busy);
}

#[test]
fn turns_stay_in_chronological_order_across_sends() {
    let mut state = ConversationState::default();
    state.begin_send("q1").unwrap();
    state.resolve_success("a1".to_owned(), Vec::new());
    state.begin_send("q2").unwrap();
    state.resolve_failure(None);

    let contents: Vec<&str> = state.turns.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["q1", "a1", "q2", SEND_FAILED_FALLBACK]);
}

// =============================================================
// resolve_failure
// =============================================================

#[test]
fn resolve_failure_prefers_the_server_message() {
    let mut state = ConversationState::default();
    state.begin_send("question").unwrap();
    state.resolve_failure(Some("rate limited".to_owned()));

    assert_eq!(state.turns[1].role, Role::Assistant);
    assert_eq!(state.turns[1].content, "rate limited");
    assert!(!state.busy);
}

#[test]
fn resolve_failure_falls_back_when_message_is_absent_or_empty() {
    let mut state = ConversationState::default();
    state.begin_send("one").unwrap();
    state.resolve_failure(None);
    assert_eq!(state.turns[1].content, SEND_FAILED_FALLBACK);

    state.begin_send("two").unwrap();
    state.resolve_failure(Some(String::new()));
    assert_eq!(state.turns[3].content, SEND_FAILED_FALLBACK);
}

#[test]
fn conversation_remains_usable_after_failure() {
    let mut state = ConversationState::default();
    state.begin_send("first").unwrap();
    state.resolve_failure(None);

    assert!(state.begin_send("second").is_some());
    assert!(state.busy);
}
