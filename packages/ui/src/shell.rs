use dioxus::prelude::*;
use guidance::Section;

use crate::views::{
    AssistantView, DashboardView, ExplorerView, HelpView, LoginView, ProfileView, QuizView,
    ResumeView, ScholarshipsView, SettingsView, TimelineView,
};
use crate::{use_app_state, AppSidebar, Header, MAIN_CSS};

/// Login screen until signed in, then the header, sidebar and active panel.
#[component]
pub fn AppShell() -> Element {
    let state = use_app_state();
    let authenticated = state.read().authenticated;
    let active = state.read().active_section();

    if !authenticated {
        return rsx! {
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            LoginView {}
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div {
            class: "app-layout",
            Header {}
            div {
                class: "app-body",
                AppSidebar {}
                main {
                    class: "app-main",
                    {match active {
                        Section::Dashboard => rsx! { DashboardView {} },
                        Section::Profile => rsx! { ProfileView {} },
                        Section::Quiz => rsx! { QuizView {} },
                        Section::Explorer => rsx! { ExplorerView {} },
                        Section::Assistant => rsx! { AssistantView {} },
                        Section::Timeline => rsx! { TimelineView {} },
                        Section::Scholarships => rsx! { ScholarshipsView {} },
                        Section::Resume => rsx! { ResumeView {} },
                        Section::Settings => rsx! { SettingsView {} },
                        Section::Help => rsx! { HelpView {} },
                    }}
                }
            }
        }
    }
}
