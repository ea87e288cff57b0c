#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The desktop binary embeds `ui/assets/theme/main.css`, so a selector dropped
during a refactor only shows up as a styling regression in packaged builds.
This checks that the classes the shared components emit are still defined.

When renaming or removing a selector, update the component markup and
REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Upload form
    ".upload-form {",
    ".upload-form__button",
    ".upload-form__select",
    ".upload-form__submit",
    ".upload-form__error",
    // Cards
    ".results-card {",
    ".results-card__header",
    ".results-card__meta",
    ".results-card__meta--error",
    ".results-card__placeholder",
    // Metrics
    ".results-detail__grid",
    ".results-detail__metric-label",
    ".results-detail__metric-value",
    ".results-metrics__matrix",
    ".results-highlights",
    ".results-highlight",
    ".results-highlight__value",
    // Diagnostics & notes
    ".results-detail__diagnostic",
    ".results-detail__notes",
    // Charts
    ".results-charts__grid",
    ".results-chart {",
    ".results-chart--tall",
    ".results-clusters__swatch",
    // Confusion matrix
    ".confusion__table",
    ".confusion__cell--correct",
    ".confusion__cell--error",
    // Models page
    ".models__grid",
    ".models__list",
    // Responsive block
    "@media (max-width: 720px)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__brand-mark",
    ".navbar__links",
    ".navbar__link",
    ".navbar__locale",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors.iter().copied().filter(|sel| !css.contains(sel)).collect()
}

#[test]
fn unified_theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_stylesheet_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(missing.is_empty(), "Missing navbar selectors:\n{}", missing.join("\n"));
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
