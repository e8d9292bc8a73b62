use dioxus::prelude::*;
use guidance::i18n::Locale;
use guidance::preferences::NotificationKind;
use guidance::user::{FontSize, ProfileVisibility, Theme};
use guidance::{Action, PreferenceChange};

use crate::{dispatch, scheduler, use_app_state, use_config, use_translate};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Account,
    Notifications,
    Privacy,
    Appearance,
    Language,
}

impl Tab {
    const ALL: [Tab; 5] = [Tab::Account, Tab::Notifications, Tab::Privacy, Tab::Appearance, Tab::Language];
}

/// Tabbed settings view.
///
/// Preference controls apply immediately; only the account form has a save
/// step.
#[component]
pub fn SettingsView() -> Element {
    let t = use_translate();
    let mut tab = use_signal(|| Tab::Account);

    let title = t("settings");
    let account_label = t("account_settings");
    let tab_label = move |item: Tab| match item {
        Tab::Account => account_label,
        Tab::Notifications => "Notifications",
        Tab::Privacy => "Privacy",
        Tab::Appearance => "Appearance",
        Tab::Language => "Language",
    };

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{title}" }
            p { class: "view-muted", "Manage your account and preferences" }

            div {
                class: "settings-layout",
                nav {
                    class: "settings-tabs card",
                    for item in Tab::ALL {
                        button {
                            key: "{tab_label(item)}",
                            class: if tab() == item { "settings-tab active" } else { "settings-tab" },
                            onclick: move |_| tab.set(item),
                            "{tab_label(item)}"
                        }
                    }
                }

                div {
                    class: "card settings-panel",
                    {match tab() {
                        Tab::Account => rsx! { AccountSection {} },
                        Tab::Notifications => rsx! { NotificationsSection {} },
                        Tab::Privacy => rsx! { PrivacySection {} },
                        Tab::Appearance => rsx! { AppearanceSection {} },
                        Tab::Language => rsx! { LanguageSection {} },
                    }}
                }
            }
        }
    }
}

#[component]
fn AccountSection() -> Element {
    let mut state = use_app_state();
    let config = use_config();
    let t = use_translate();

    let mut full_name = use_signal(|| state.read().user.full_name.clone());
    let mut email = use_signal(|| state.read().user.email.clone());
    let mut phone = use_signal(|| state.read().user.phone_number.clone());
    let mut saving = use_signal(|| false);
    let mut saved = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let action = Action::SaveAccount {
            full_name: full_name(),
            email: email(),
            phone_number: phone(),
        };
        let (_handle, pending) = scheduler(config.account_save_delay()).submit(move || action);
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

    let heading = t("account_settings");
    let name_label = t("full_name");
    let email_label = t("email_address");
    let phone_label = t("phone_number");
    let save_label = t("save_changes");

    rsx! {
        h2 { class: "view-section-title", "{heading}" }

        if saved() {
            div { class: "banner banner-success", "\u{2713} Changes saved successfully!" }
        }

        form {
            onsubmit: handle_save,
            div {
                class: "field",
                label { class: "field-label", "{name_label}" }
                input {
                    class: "input w-full",
                    r#type: "text",
                    value: full_name(),
                    oninput: move |evt: FormEvent| full_name.set(evt.value()),
                }
            }
            div {
                class: "field",
                label { class: "field-label", "{email_label}" }
                input {
                    class: "input w-full",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div {
                class: "field",
                label { class: "field-label", "{phone_label}" }
                input {
                    class: "input w-full",
                    r#type: "tel",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "{save_label}" }
                }
            }
        }

        div {
            class: "danger-zone",
            h3 { class: "text-danger", "Delete Account" }
            p { class: "view-muted", "Once you delete your account, there is no going back. Please be certain." }
            button { class: "btn btn-danger", "Delete Account" }
        }
    }
}

#[component]
fn Toggle(
    #[props(into)] label: String,
    #[props(into)] description: String,
    checked: bool,
    on_change: EventHandler<bool>,
) -> Element {
    rsx! {
        label {
            class: "toggle-row",
            div {
                div { class: "toggle-label", "{label}" }
                p { class: "view-muted", "{description}" }
            }
            input {
                class: "toggle",
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt: FormEvent| on_change.call(evt.checked()),
            }
        }
    }
}

#[component]
fn NotificationsSection() -> Element {
    let mut state = use_app_state();
    let notifications = state.read().user.preferences.notifications;

    rsx! {
        h2 { class: "view-section-title", "Notification Preferences" }
        for kind in NotificationKind::ALL {
            Toggle {
                key: "{kind.label()}",
                label: kind.label(),
                description: kind.description(),
                checked: notifications.get(kind),
                on_change: move |value| {
                    dispatch(&mut state, Action::SetPreference(PreferenceChange::Notification(kind, value)));
                },
            }
        }
    }
}

#[component]
fn PrivacySection() -> Element {
    let mut state = use_app_state();
    let privacy = state.read().user.preferences.privacy;

    rsx! {
        h2 { class: "view-section-title", "Privacy Settings" }

        div {
            class: "field",
            label { class: "field-label", "Profile Visibility" }
            div {
                class: "radio-group",
                for visibility in ProfileVisibility::ALL {
                    label {
                        key: "{visibility.label()}",
                        class: "radio-option",
                        input {
                            r#type: "radio",
                            name: "profile-visibility",
                            checked: privacy.profile_visibility == visibility,
                            onchange: move |_| {
                                dispatch(&mut state, Action::SetPreference(PreferenceChange::ProfileVisibility(visibility)));
                            },
                        }
                        span { "{visibility.label()}" }
                    }
                }
            }
        }

        Toggle {
            label: "Data Sharing",
            description: "Allow sharing of anonymized data for research",
            checked: privacy.data_sharing,
            on_change: move |value| {
                dispatch(&mut state, Action::SetPreference(PreferenceChange::DataSharing(value)));
            },
        }
        Toggle {
            label: "Analytics",
            description: "Help us improve by sharing usage analytics",
            checked: privacy.analytics,
            on_change: move |value| {
                dispatch(&mut state, Action::SetPreference(PreferenceChange::Analytics(value)));
            },
        }
    }
}

#[component]
fn AppearanceSection() -> Element {
    let mut state = use_app_state();
    let appearance = state.read().user.preferences.appearance;

    rsx! {
        h2 { class: "view-section-title", "Appearance" }

        div {
            class: "field",
            label { class: "field-label", "Theme" }
            p { class: "view-muted", "Choose your preferred color theme" }
            div {
                class: "radio-group",
                for theme in Theme::ALL {
                    label {
                        key: "{theme.label()}",
                        class: if appearance.theme == theme { "theme-card active" } else { "theme-card" },
                        input {
                            r#type: "radio",
                            name: "theme",
                            checked: appearance.theme == theme,
                            onchange: move |_| {
                                dispatch(&mut state, Action::SetPreference(PreferenceChange::Theme(theme)));
                            },
                        }
                        span { "{theme.label()}" }
                    }
                }
            }
        }

        div {
            class: "field",
            label { class: "field-label", "Font Size" }
            p { class: "view-muted", "Adjust the text size for better readability" }
            div {
                class: "radio-group",
                for size in FontSize::ALL {
                    label {
                        key: "{size.label()}",
                        class: if appearance.font_size == size { "theme-card active" } else { "theme-card" },
                        input {
                            r#type: "radio",
                            name: "font-size",
                            checked: appearance.font_size == size,
                            onchange: move |_| {
                                dispatch(&mut state, Action::SetPreference(PreferenceChange::FontSize(size)));
                            },
                        }
                        span { "{size.label()}" }
                    }
                }
            }
        }
    }
}

#[component]
fn LanguageSection() -> Element {
    let mut state = use_app_state();
    let current = state.read().user.preferences.appearance.language;

    rsx! {
        h2 { class: "view-section-title", "Language" }
        p { class: "view-muted", "Select your preferred language for the interface" }
        div {
            class: "card-grid cols-3",
            for locale in Locale::ALL {
                button {
                    key: "{locale.code()}",
                    class: if current == locale { "language-option active" } else { "language-option" },
                    onclick: move |_| {
                        dispatch(&mut state, Action::SetPreference(PreferenceChange::Language(locale)));
                    },
                    span { "{locale.native_name()}" }
                    if locale.is_pending() {
                        span { class: "badge", "Coming soon" }
                    }
                }
            }
        }
    }
}
