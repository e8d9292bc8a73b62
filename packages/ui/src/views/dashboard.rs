use dioxus::prelude::*;
use guidance::dashboard::{self, Pressure, RECENT_ACTIVITY, STATS, UPCOMING_DEADLINES};

use crate::{use_app_state, use_translate};

fn pressure_class(pressure: Pressure) -> &'static str {
    match pressure {
        Pressure::High => "text-danger",
        Pressure::Medium => "text-warning",
        Pressure::Low => "text-success",
    }
}

#[component]
pub fn DashboardView() -> Element {
    let state = use_app_state();
    let t = use_translate();
    let (locale, full_name) = {
        let s = state.read();
        (s.user.preferences.appearance.language, s.user.full_name.clone())
    };
    let welcome = dashboard::welcome_line(locale, &full_name);
    let subtitle = t("career_journey");

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{welcome}" }
            p { class: "view-muted", "{subtitle}" }

            div {
                class: "card-grid cols-4",
                for stat in STATS {
                    div {
                        key: "{stat.label}",
                        class: "card stat-card",
                        p { class: "view-muted", "{stat.label}" }
                        p { class: "stat-value", "{stat.value}" }
                    }
                }
            }

            div {
                class: "card-grid cols-2",
                div {
                    class: "card",
                    h3 { class: "view-section-title", "Recent Activity" }
                    for item in RECENT_ACTIVITY {
                        div { key: "{item}", class: "list-row", "{item}" }
                    }
                }
                div {
                    class: "card",
                    h3 { class: "view-section-title", "Upcoming Deadlines" }
                    for deadline in UPCOMING_DEADLINES {
                        div {
                            key: "{deadline.title}",
                            class: "list-row",
                            span { "{deadline.title}" }
                            span {
                                class: pressure_class(deadline.pressure),
                                "{deadline.remaining}"
                            }
                        }
                    }
                }
            }
        }
    }
}
