use dioxus::prelude::*;
use guidance::preferences::document_classes;
use guidance::user::AppearancePreferences;

/// Put the theme and font-size classes on the document root.
///
/// Both candidate class lists are computed here; the script only decides
/// between them using `prefers-color-scheme`.
pub fn apply_appearance(appearance: &AppearancePreferences) {
    let light = document_classes(appearance, false);
    let dark = document_classes(appearance, true);
    tracing::debug!(?appearance, "applying appearance");
    let js = format!(
        r#"
        const root = document.documentElement;
        const prefersDark = window.matchMedia && window.matchMedia('(prefers-color-scheme: dark)').matches;
        const classes = prefersDark ? {dark:?} : {light:?};
        root.classList.remove('dark', 'font-small', 'font-medium', 'font-large');
        classes.forEach((c) => root.classList.add(c));
        "#
    );
    document::eval(&js);
}
