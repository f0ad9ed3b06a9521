//! Sticky-note color palette.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StickyColor {
    pub label: &'static str,
    /// Background class stored on the item.
    pub class: &'static str,
}

pub const STICKY_COLORS: &[StickyColor] = &[
    StickyColor { label: "Sky Blue", class: "bg-sky-100" },
    StickyColor { label: "Pink", class: "bg-pink-100" },
    StickyColor { label: "Amber", class: "bg-amber-100" },
    StickyColor { label: "Lime", class: "bg-lime-100" },
    StickyColor { label: "Purple", class: "bg-purple-100" },
];

pub const DEFAULT_STICKY_COLOR: &str = "bg-sky-100";

/// Text color class for a sticky background. Unknown backgrounds get slate.
#[must_use]
pub fn text_class_for(background: Option<&str>) -> &'static str {
    match background.unwrap_or(DEFAULT_STICKY_COLOR) {
        "bg-sky-100" => "text-sky-800",
        "bg-pink-100" => "text-pink-800",
        "bg-amber-100" => "text-amber-800",
        "bg-lime-100" => "text-lime-800",
        _ => "text-slate-800",
    }
}

/// Background class to render; tags outside the palette fall back to the default.
#[must_use]
pub fn background_class(background: Option<&str>) -> &'static str {
    background
        .and_then(|bg| STICKY_COLORS.iter().find(|c| c.class == bg))
        .map_or(DEFAULT_STICKY_COLOR, |c| c.class)
}
