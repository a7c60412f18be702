#![cfg(test)]
//! Selector lint for the shared theme embedded by the desktop build.
//!
//! Every class the shared components emit must have a rule in
//! `ui/assets/theme/main.css`. When a component's markup changes, update the
//! list below together with the stylesheet.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Header
    ".app-header",
    ".app-header__inner",
    ".app-header__brand",
    ".app-header__brand-mark",
    ".app-header__brand-subtitle",
    ".app-header__locale",
    // Analysis page
    ".analysis__header",
    ".analysis__title",
    ".analysis__loading",
    ".analysis__error",
    ".analysis__status",
    ".analysis__stage",
    // Word cloud
    ".word-cloud",
    ".word-cloud svg",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Export bar
    ".export-bar",
    ".export-bar__actions",
    ".export-bar__meta",
    ".export-bar__meta--success",
    ".export-bar__meta--error",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .copied()
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_500,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}

