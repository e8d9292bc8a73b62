use dioxus::prelude::*;
use guidance::Action;

use crate::{dispatch, use_app_state, use_translate};

#[component]
pub fn Header() -> Element {
    let mut state = use_app_state();
    let t = use_translate();
    let user = state.read().user.clone();
    let title = t("career_corrector");
    let role = t("student");

    rsx! {
        header {
            class: "app-header",

            div {
                class: "app-brand",
                span { class: "app-logo", "CC" }
                span { class: "app-title", "{title}" }
            }

            // Decorative only; each panel has its own search.
            div {
                class: "app-search",
                input {
                    r#type: "text",
                    placeholder: t("search_placeholder"),
                }
            }

            div {
                class: "app-user",
                button {
                    class: "app-bell",
                    title: "Notifications",
                    "\u{1F514}"
                    span { class: "app-bell-count", "3" }
                }
                div {
                    class: "app-user-card",
                    div {
                        class: "app-user-text",
                        div { class: "app-user-name", "{user.full_name}" }
                        div { class: "app-user-role", "{role}" }
                    }
                    span { class: "app-avatar", "{user.initials()}" }
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| dispatch(&mut state, Action::Logout),
                    "Logout"
                }
            }
        }
    }
}
