//! Application state context and hooks for the UI.

use dioxus::prelude::*;
use guidance::{i18n, Action, AppState, GuidanceConfig, PreferenceChange};

use crate::apply_appearance;

/// Get the application state.
/// Returns a signal that updates on every dispatched action.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

/// Get the configuration the app was launched with.
pub fn use_config() -> GuidanceConfig {
    use_context::<GuidanceConfig>()
}

/// Run `action` through the reducer and store the result.
pub fn dispatch(state: &mut Signal<AppState>, action: Action) {
    let next = state().reduce(action);
    state.set(next);
}

/// Translator bound to the user's current language.
///
/// Reading through the returned closure subscribes the calling component to
/// language changes.
pub fn use_translate() -> impl Fn(&'static str) -> &'static str + Copy {
    let state = use_app_state();
    move |key| i18n::resolve(state.read().user.preferences.appearance.language, key)
}

/// Provider component that owns the application state.
/// Wrap your app with this component.
#[component]
pub fn AppProvider(config: GuidanceConfig, children: Element) -> Element {
    let locale = config.locale.default;
    let state = use_signal(move || {
        AppState::new().reduce(Action::SetPreference(PreferenceChange::Language(locale)))
    });
    use_context_provider(|| state);
    use_context_provider(|| config.clone());

    // Keep document classes in step with the appearance preferences.
    use_effect(move || {
        let appearance = state.read().user.preferences.appearance;
        apply_appearance(&appearance);
    });

    rsx! {
        {children}
    }
}
