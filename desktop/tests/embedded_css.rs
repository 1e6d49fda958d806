#![cfg(test)]
//! The desktop shell inlines the shared theme with `include_str!`; a broken
//! path or a truncated file would only show up as unstyled pages at runtime.
//! If the theme moves, update this test and `MAIN_CSS_INLINE` in
//! `desktop/src/main.rs` together.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded theme is empty."
    );
}

#[test]
fn embedded_css_defines_navbar_palette() {
    for token in ["--color-nav-bg", "--color-nav-fg", "--color-nav-active", "body {"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}
