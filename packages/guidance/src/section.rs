//! Sidebar sections and the single-value view router.

use serde::{Deserialize, Serialize};

/// A top-level content panel selectable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Dashboard,
    Profile,
    Quiz,
    Explorer,
    Assistant,
    Timeline,
    Scholarships,
    Resume,
    Settings,
    Help,
}

impl Section {
    /// Sidebar order.
    pub const ALL: [Section; 10] = [
        Section::Dashboard,
        Section::Profile,
        Section::Quiz,
        Section::Explorer,
        Section::Assistant,
        Section::Timeline,
        Section::Scholarships,
        Section::Resume,
        Section::Settings,
        Section::Help,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Profile => "profile",
            Section::Quiz => "quiz",
            Section::Explorer => "explorer",
            Section::Assistant => "assistant",
            Section::Timeline => "timeline",
            Section::Scholarships => "scholarships",
            Section::Resume => "resume",
            Section::Settings => "settings",
            Section::Help => "help",
        }
    }

    /// Translation key of the sidebar label.
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Profile => "profile_setup",
            Section::Quiz => "career_quiz",
            Section::Explorer => "college_explorer",
            Section::Assistant => "ai_assistant",
            Section::Timeline => "timeline_events",
            Section::Scholarships => "scholarships",
            Section::Resume => "resume_builder",
            Section::Settings => "settings",
            Section::Help => "help_support",
        }
    }

    /// Look up a section by id. Unknown ids resolve to the dashboard.
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.id() == id)
            .unwrap_or_default()
    }
}

/// Holds the active section. No history and no guards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewRouter {
    active: Section,
}

impl ViewRouter {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn select(&mut self, section: Section) {
        if self.active != section {
            tracing::debug!(from = self.active.id(), to = section.id(), "section changed");
        }
        self.active = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{self, Locale};

    #[test]
    fn test_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), section);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_dashboard() {
        assert_eq!(Section::from_id("reports"), Section::Dashboard);
        assert_eq!(Section::from_id(""), Section::Dashboard);
    }

    #[test]
    fn test_labels_are_translated() {
        for section in Section::ALL {
            assert_ne!(i18n::resolve(Locale::En, section.label_key()), section.label_key());
        }
    }

    #[test]
    fn test_router_starts_on_dashboard() {
        let mut router = ViewRouter::default();
        assert_eq!(router.active(), Section::Dashboard);
        router.select(Section::Timeline);
        assert_eq!(router.active(), Section::Timeline);
    }
}
