use super::*;
use crate::net::types::GridPosition;

fn sticky(id: &str, text: &str, column: i32) -> Item {
    Item {
        id: id.to_owned(),
        kind: ItemKind::Sticky,
        content: Some(text.to_owned()),
        image_url: None,
        caption: None,
        position: GridPosition { grid_column: Some(column), grid_row: Some(1), ..GridPosition::default() },
        background_color: Some("bg-sky-100".to_owned()),
        created_at: None,
        created_by: None,
    }
}

#[test]
fn empty_state_hint_depends_on_sign_in() {
    assert_eq!(empty_state_hint(false), "Sign in to start building your wall");
    assert!(empty_state_hint(true).starts_with("Start adding screenshots"));
}

#[test]
fn cell_class_marks_only_dragged_item() {
    assert_eq!(cell_class("a", Some("a")), "wall-grid__cell wall-grid__cell--dragging");
    assert_eq!(cell_class("a", Some("b")), "wall-grid__cell");
    assert_eq!(cell_class("a", None), "wall-grid__cell");
}

#[test]
fn poll_interval_is_thirty_seconds() {
    assert_eq!(POLL_INTERVAL_SECS, 30);
}

#[test]
fn render_key_ignores_position() {
    assert_eq!(render_key(&sticky("a", "thanks", 1)), render_key(&sticky("a", "thanks", 4)));
}

#[test]
fn render_key_changes_with_displayed_fields() {
    let before = sticky("a", "thanks", 1);
    let mut recolored = before.clone();
    recolored.background_color = Some("bg-rose-100".to_owned());
    let mut captioned = before.clone();
    captioned.caption = Some("from Ada".to_owned());

    assert_ne!(render_key(&before), render_key(&sticky("a", "thank you", 1)));
    assert_ne!(render_key(&before), render_key(&recolored));
    assert_ne!(render_key(&before), render_key(&captioned));
}

#[test]
fn render_key_separates_items_with_same_content() {
    assert_ne!(render_key(&sticky("a", "thanks", 1)), render_key(&sticky("b", "thanks", 1)));
}
