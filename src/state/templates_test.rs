use super::*;

fn template(id: &str, title: &str) -> TemplateMeta {
    TemplateMeta {
        template_id: id.to_owned(),
        title: title.to_owned(),
        description: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_has_no_items_and_no_selection() {
    let state = TemplatesState::default();
    assert!(state.items.is_empty());
    assert_eq!(state.selected, None);
    assert_eq!(state.error, None);
}

// =============================================================
// loaded
// =============================================================

#[test]
fn loaded_default_selects_the_first_entry() {
    let mut state = TemplatesState::default();
    state.loaded(vec![template("t-1", "First"), template("t-2", "Second")]);

    assert_eq!(state.selected.as_deref(), Some("t-1"));
    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
}

#[test]
fn loaded_with_empty_list_leaves_no_selection() {
    let mut state = TemplatesState::default();
    state.loaded(Vec::new());
    assert_eq!(state.selected, None);
}

#[test]
fn loaded_keeps_an_existing_selection() {
    let mut state = TemplatesState::default();
    state.select("t-2".to_owned());
    state.loaded(vec![template("t-1", "First"), template("t-2", "Second")]);
    assert_eq!(state.selected.as_deref(), Some("t-2"));
}

#[test]
fn loaded_clears_a_previous_error() {
    let mut state = TemplatesState::default();
    state.failed("boom".to_owned());
    state.loaded(vec![template("t-1", "First")]);
    assert_eq!(state.error, None);
}

// =============================================================
// failed / select
// =============================================================

#[test]
fn failed_records_the_error_and_stops_loading() {
    let mut state = TemplatesState {
        loading: true,
        ..TemplatesState::default()
    };
    state.failed("fetch failed".to_owned());

    assert_eq!(state.error.as_deref(), Some("fetch failed"));
    assert!(!state.loading);
    assert!(state.items.is_empty());
}

#[test]
fn select_changes_only_the_selection() {
    let mut state = TemplatesState::default();
    state.loaded(vec![template("t-1", "First"), template("t-2", "Second")]);
    state.select("t-2".to_owned());

    assert_eq!(state.selected.as_deref(), Some("t-2"));
    assert_eq!(state.items.len(), 2);
}

#[test]
fn selected_meta_finds_the_matching_template() {
    let mut state = TemplatesState::default();
    state.loaded(vec![template("t-1", "First"), template("t-2", "Second")]);
    state.select("t-2".to_owned());

    assert_eq!(state.selected_meta().map(|t| t.title.as_str()), Some("Second"));
}

#[test]
fn selected_meta_is_none_for_unknown_selection() {
    let mut state = TemplatesState::default();
    state.loaded(vec![template("t-1", "First")]);
    state.select("gone".to_owned());
    assert_eq!(state.selected_meta(), None);
}
