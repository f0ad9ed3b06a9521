use super::*;

#[test]
fn palette_has_five_colors_with_sky_first() {
    assert_eq!(STICKY_COLORS.len(), 5);
    assert_eq!(STICKY_COLORS[0].class, DEFAULT_STICKY_COLOR);
}

#[test]
fn text_class_tracks_background() {
    assert_eq!(text_class_for(Some("bg-sky-100")), "text-sky-800");
    assert_eq!(text_class_for(Some("bg-pink-100")), "text-pink-800");
    assert_eq!(text_class_for(Some("bg-amber-100")), "text-amber-800");
    assert_eq!(text_class_for(Some("bg-lime-100")), "text-lime-800");
}

#[test]
fn purple_and_unknown_use_slate_text() {
    assert_eq!(text_class_for(Some("bg-purple-100")), "text-slate-800");
    assert_eq!(text_class_for(Some("bg-red-500")), "text-slate-800");
}

#[test]
fn missing_background_uses_default() {
    assert_eq!(text_class_for(None), "text-sky-800");
    assert_eq!(background_class(None), "bg-sky-100");
}

#[test]
fn background_class_rejects_foreign_tags() {
    assert_eq!(background_class(Some("bg-lime-100")), "bg-lime-100");
    assert_eq!(background_class(Some("evil\" onclick=\"x")), "bg-sky-100");
}
