use dioxus::prelude::*;
use guidance::profile::{ProfileField, ProfileForm, ACADEMIC_LEVELS, INTEREST_OPTIONS, PREFERRED_FIELDS};
use guidance::Action;

use crate::{dispatch, scheduler, use_app_state, use_config, use_translate};

#[component]
fn TextField(
    #[props(into)] label: String,
    field: ProfileField,
    form: Signal<ProfileForm>,
    #[props(into, default = "text".to_string())] input_type: String,
    on_edit: EventHandler<()>,
) -> Element {
    let mut form = form;
    rsx! {
        div {
            class: "field",
            label { class: "field-label", "{label}" }
            input {
                class: "input",
                r#type: "{input_type}",
                value: form.read().get(field).to_string(),
                oninput: move |evt: FormEvent| {
                    form.write().set(field, evt.value());
                    on_edit.call(());
                },
            }
        }
    }
}

#[component]
fn SelectField(
    #[props(into)] label: String,
    field: ProfileField,
    options: &'static [(&'static str, &'static str)],
    form: Signal<ProfileForm>,
    on_edit: EventHandler<()>,
) -> Element {
    let mut form = form;
    let current = form.read().get(field).to_string();
    rsx! {
        div {
            class: "field",
            label { class: "field-label", "{label}" }
            select {
                class: "input",
                value: "{current}",
                onchange: move |evt: FormEvent| {
                    form.write().set(field, evt.value());
                    on_edit.call(());
                },
                for (value, text) in options.iter().copied() {
                    option { key: "{value}", value: "{value}", selected: value == current, "{text}" }
                }
            }
        }
    }
}

#[component]
pub fn ProfileView() -> Element {
    let mut state = use_app_state();
    let config = use_config();
    let t = use_translate();
    let mut form = use_signal(|| ProfileForm::from_user(&state.read().user));
    let mut saving = use_signal(|| false);
    let mut saved = use_signal(|| false);

    let handle_save = move |_| {
        let f = form();
        let (_handle, pending) = scheduler(config.profile_save_delay()).submit(move || Action::SaveAccount {
            full_name: f.full_name,
            email: f.email,
            phone_number: f.phone_number,
        });
        let banner_for = config.banner_duration();
        spawn(async move {
            saving.set(true);
            let Some(action) = pending.await else {
                saving.set(false);
                return;
            };
            dispatch(&mut state, action);
            saving.set(false);
            saved.set(true);
            let (_banner, banner) = scheduler(banner_for).submit(|| ());
            if banner.await.is_some() {
                saved.set(false);
            }
        });
    };

    let on_edit = EventHandler::new(move |_: ()| saved.set(false));
    let title = t("profile_setup");

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{title}" }
            p { class: "view-muted", "Tell us about yourself so we can tailor your guidance" }

            div {
                class: "card",
                h3 { class: "view-section-title", "Basic Information" }
                div {
                    class: "card-grid cols-2",
                    TextField { label: t("full_name"), field: ProfileField::FullName, form, on_edit }
                    TextField { label: t("email_address"), field: ProfileField::Email, form, input_type: "email", on_edit }
                    TextField { label: t("phone_number"), field: ProfileField::PhoneNumber, form, input_type: "tel", on_edit }
                    TextField { label: "Date of Birth", field: ProfileField::DateOfBirth, form, input_type: "date", on_edit }
                    TextField { label: "Gender", field: ProfileField::Gender, form, on_edit }
                    TextField { label: "Address", field: ProfileField::Address, form, on_edit }
                }
            }

            div {
                class: "card",
                h3 { class: "view-section-title", "Academic Information" }
                div {
                    class: "card-grid cols-2",
                    SelectField { label: "Current Academic Level", field: ProfileField::AcademicLevel, options: ACADEMIC_LEVELS, form, on_edit }
                    SelectField { label: "Preferred Field", field: ProfileField::PreferredField, options: PREFERRED_FIELDS, form, on_edit }
                }
            }

            div {
                class: "card",
                h3 { class: "view-section-title", "Interests" }
                div {
                    class: "chip-row",
                    for interest in INTEREST_OPTIONS.iter().copied() {
                        button {
                            key: "{interest}",
                            class: if form.read().has_interest(interest) { "chip chip-active" } else { "chip" },
                            onclick: move |_| {
                                form.write().toggle_interest(interest);
                                saved.set(false);
                            },
                            "{interest}"
                        }
                    }
                }
            }

            div {
                class: "form-actions",
                if saved() {
                    span { class: "text-success", "\u{2713} Profile saved successfully!" }
                }
                button {
                    class: "btn btn-primary",
                    disabled: saving(),
                    onclick: handle_save,
                    if saving() { "Saving..." } else { "Save Profile" }
                }
            }
        }
    }
}
