use dioxus::prelude::*;
use guidance::{Action, Section};

use crate::{dispatch, use_app_state, use_translate};

fn icon(section: Section) -> &'static str {
    match section {
        Section::Dashboard => "\u{1F3E0}",
        Section::Profile => "\u{1F464}",
        Section::Quiz => "\u{1F4DD}",
        Section::Explorer => "\u{1F50D}",
        Section::Assistant => "\u{1F916}",
        Section::Timeline => "\u{1F4C5}",
        Section::Scholarships => "\u{1F393}",
        Section::Resume => "\u{1F4C4}",
        Section::Settings => "\u{2699}",
        Section::Help => "\u{2753}",
    }
}

/// Section navigation.
#[component]
pub fn AppSidebar() -> Element {
    let mut state = use_app_state();
    let t = use_translate();
    let active = state.read().active_section();
    let items = Section::ALL.map(|section| (section, t(section.label_key())));

    rsx! {
        nav {
            class: "sidebar",
            for (section, label) in items {
                button {
                    key: "{section.id()}",
                    class: if section == active { "sidebar-item active" } else { "sidebar-item" },
                    onclick: move |_| dispatch(&mut state, Action::SelectSection(section)),
                    span { class: "icon", "{icon(section)}" }
                    span { "{label}" }
                }
            }
        }
    }
}
