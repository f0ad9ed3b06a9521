use super::*;
use crate::net::types::ItemKind;

fn sticky(id: &str, text: &str) -> Item {
    Item {
        id: id.to_owned(),
        kind: ItemKind::Sticky,
        content: Some(text.to_owned()),
        image_url: None,
        caption: None,
        position: GridPosition { grid_column: Some(1), grid_row: Some(1), ..GridPosition::default() },
        background_color: Some("bg-sky-100".to_owned()),
        created_at: None,
        created_by: None,
    }
}

fn ids(state: &WallState) -> Vec<&str> {
    state.items.iter().map(|i| i.id.as_str()).collect()
}

// =============================================================
// Fetch ordering
// =============================================================

#[test]
fn starts_loading_and_empty() {
    let state = WallState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert!(!state.edit_mode);
}

#[test]
fn fetch_result_applies_in_server_order() {
    let mut state = WallState::default();
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, vec![sticky("b", "2"), sticky("a", "1")]));
    assert_eq!(ids(&state), ["b", "a"]);
    assert!(!state.loading);
}

#[test]
fn older_fetch_is_discarded() {
    let mut state = WallState::default();
    let first = state.begin_fetch();
    let second = state.begin_fetch();
    assert!(state.apply_fetch(second, vec![sticky("new", "")]));
    assert!(!state.apply_fetch(first, vec![sticky("old", "")]));
    assert_eq!(ids(&state), ["new"]);
}

#[test]
fn fetch_started_before_mutation_is_discarded() {
    let mut state = WallState::default();
    let seq = state.begin_fetch();
    state.append_item(sticky("added", "hi"));
    assert!(!state.apply_fetch(seq, Vec::new()));
    assert_eq!(ids(&state), ["added"]);
}

#[test]
fn fetch_started_after_mutation_applies() {
    let mut state = WallState::default();
    state.append_item(sticky("a", ""));
    let seq = state.begin_fetch();
    assert!(state.apply_fetch(seq, vec![sticky("a", ""), sticky("b", "")]));
    assert_eq!(ids(&state), ["a", "b"]);
}

#[test]
fn failed_fetch_keeps_items_and_clears_loading() {
    let mut state = WallState::default();
    state.append_item(sticky("a", ""));
    state.begin_fetch();
    state.fetch_failed();
    assert!(!state.loading);
    assert_eq!(ids(&state), ["a"]);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn append_adds_after_existing_exactly_once() {
    let mut state = WallState::default();
    state.append_item(sticky("a", "1"));
    state.append_item(sticky("b", "2"));
    state.append_item(sticky("b", "2 again"));
    assert_eq!(ids(&state), ["a", "b"]);
    assert_eq!(state.items[1].content.as_deref(), Some("2 again"));
}

#[test]
fn replace_keeps_position_in_list() {
    let mut state = WallState::default();
    for id in ["a", "b", "c"] {
        state.append_item(sticky(id, "old"));
    }
    state.replace_item(sticky("b", "new"));
    assert_eq!(ids(&state), ["a", "b", "c"]);
    assert_eq!(state.item("b").unwrap().content.as_deref(), Some("new"));
}

#[test]
fn replace_unknown_id_is_ignored() {
    let mut state = WallState::default();
    state.append_item(sticky("a", ""));
    state.replace_item(sticky("zzz", ""));
    assert_eq!(ids(&state), ["a"]);
}

#[test]
fn remove_drops_item_by_id() {
    let mut state = WallState::default();
    state.append_item(sticky("a", ""));
    state.append_item(sticky("b", ""));
    state.remove_item("a");
    assert_eq!(ids(&state), ["b"]);
    assert!(state.item("a").is_none());
}

#[test]
fn removed_item_stays_gone_after_stale_poll() {
    let mut state = WallState::default();
    let seq = state.begin_fetch();
    state.apply_fetch(seq, vec![sticky("a", ""), sticky("b", "")]);

    let poll = state.begin_fetch();
    state.remove_item("a");
    assert!(!state.apply_fetch(poll, vec![sticky("a", ""), sticky("b", "")]));
    assert_eq!(ids(&state), ["b"]);
}

#[test]
fn failure_report_and_dismiss() {
    let mut state = WallState::default();
    state.report_failure("Failed to delete item".into());
    assert_eq!(state.error.as_deref(), Some("Failed to delete item"));
    state.dismiss_error();
    assert!(state.error.is_none());
}

// =============================================================
// Edit mode and polling
// =============================================================

#[test]
fn toggle_edit_requires_authentication() {
    let mut state = WallState::default();
    assert_eq!(state.toggle_edit(false), EditToggle::LoginRequired);
    assert!(!state.edit_mode);
}

#[test]
fn toggle_edit_flips_mode_and_polling() {
    let mut state = WallState::default();
    assert!(state.should_poll());
    assert_eq!(state.toggle_edit(true), EditToggle::Entered);
    assert!(!state.should_poll());
    assert_eq!(state.toggle_edit(true), EditToggle::Exited);
    assert!(state.should_poll());
}

#[test]
fn exit_edit_clears_drag() {
    let mut state = WallState::default();
    state.toggle_edit(true);
    state.start_drag("a");
    state.exit_edit();
    assert!(!state.edit_mode);
    assert!(state.dragging.is_none());
}

// =============================================================
// Drag and drop
// =============================================================

#[test]
fn drag_ignored_outside_edit_mode() {
    let mut state = WallState::default();
    state.start_drag("a");
    assert!(state.dragging.is_none());
}

#[test]
fn drop_yields_target_position() {
    let mut state = WallState::default();
    state.append_item(sticky("a", ""));
    let mut target = sticky("b", "");
    target.position = GridPosition { grid_column: Some(4), grid_row: Some(3), ..GridPosition::default() };
    state.append_item(target);
    state.toggle_edit(true);

    state.start_drag("a");
    let moved = state.drop_on("b").unwrap();
    assert_eq!(moved.source_id, "a");
    assert_eq!(moved.position.grid_column, Some(4));
    assert_eq!(moved.position.grid_row, Some(3));
    assert!(state.dragging.is_none());
    assert_eq!(ids(&state), ["a", "b"]);
}

#[test]
fn drop_on_self_or_without_drag_is_noop() {
    let mut state = WallState::default();
    state.append_item(sticky("a", ""));
    state.toggle_edit(true);
    assert!(state.drop_on("a").is_none());
    state.start_drag("a");
    assert!(state.drop_on("a").is_none());
}
