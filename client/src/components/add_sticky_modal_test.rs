use super::*;

#[test]
fn whitespace_only_text_is_rejected() {
    assert_eq!(note_text(""), None);
    assert_eq!(note_text("   \n\t "), None);
    assert!(!can_submit("   ", false));
}

#[test]
fn text_is_trimmed() {
    assert_eq!(note_text("  thank you!  ").as_deref(), Some("thank you!"));
}

#[test]
fn single_character_is_enough() {
    assert!(can_submit("x", false));
}

#[test]
fn submit_disabled_while_submitting() {
    assert!(!can_submit("hello", true));
}
