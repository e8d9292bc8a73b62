//! Development login: any non-empty name and password.

use dioxus::prelude::*;
use guidance::Action;

use crate::{dispatch, scheduler, use_app_state, use_config};

#[component]
pub fn LoginView() -> Element {
    let mut state = use_app_state();
    let config = use_config();
    let mut name = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let error = state.read().login_error.clone();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let action = Action::Login {
            name: name(),
            password: password(),
        };
        let (_handle, pending) = scheduler(config.login_delay()).submit(move || action);
        spawn(async move {
            loading.set(true);
            if let Some(action) = pending.await {
                dispatch(&mut state, action);
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "login-page",
            form {
                class: "login-card",
                onsubmit: handle_login,

                h1 { class: "login-title", "Career Corrector" }
                p { class: "view-muted", "Sign in to continue" }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if let Some(err) = error {
                    p { class: "text-danger", "{err}" }
                }

                button {
                    class: "btn btn-primary w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign In" }
                }
            }
        }
    }
}
