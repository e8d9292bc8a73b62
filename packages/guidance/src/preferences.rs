//! # Preference updates
//!
//! A settings control produces one [`PreferenceChange`]; [`set_preference`]
//! applies it and returns a new [`User`] in which exactly that leaf differs.
//! Every category has its own `with_*` update so that no control can replace a
//! whole category by accident.
//!
//! Theme and font size also have a visual side effect on the document root.
//! [`document_classes`] computes the class list; applying it is the UI's job.

use crate::i18n::Locale;
use crate::user::{
    AppearancePreferences, FontSize, NotificationPreferences, PrivacyPreferences,
    ProfileVisibility, Theme, User,
};

/// A single notification flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Email,
    Push,
    Sms,
    Newsletters,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 4] = [
        NotificationKind::Email,
        NotificationKind::Push,
        NotificationKind::Sms,
        NotificationKind::Newsletters,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Email => "Email Notifications",
            NotificationKind::Push => "Push Notifications",
            NotificationKind::Sms => "SMS Notifications",
            NotificationKind::Newsletters => "Newsletter",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NotificationKind::Email => "Receive updates via email",
            NotificationKind::Push => "Receive push notifications in browser",
            NotificationKind::Sms => "Receive important updates via SMS",
            NotificationKind::Newsletters => "Receive weekly career tips and updates",
        }
    }
}

/// One leaf of the preference tree and its new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreferenceChange {
    Notification(NotificationKind, bool),
    ProfileVisibility(ProfileVisibility),
    DataSharing(bool),
    Analytics(bool),
    Theme(Theme),
    Language(Locale),
    FontSize(FontSize),
}

impl PreferenceChange {
    /// Whether applying this change alters the document's classes.
    pub fn affects_document(self) -> bool {
        matches!(self, PreferenceChange::Theme(_) | PreferenceChange::FontSize(_))
    }
}

impl NotificationPreferences {
    pub fn get(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::Email => self.email,
            NotificationKind::Push => self.push,
            NotificationKind::Sms => self.sms,
            NotificationKind::Newsletters => self.newsletters,
        }
    }

    pub fn with(self, kind: NotificationKind, value: bool) -> Self {
        match kind {
            NotificationKind::Email => Self { email: value, ..self },
            NotificationKind::Push => Self { push: value, ..self },
            NotificationKind::Sms => Self { sms: value, ..self },
            NotificationKind::Newsletters => Self { newsletters: value, ..self },
        }
    }
}

impl PrivacyPreferences {
    pub fn with_visibility(self, profile_visibility: ProfileVisibility) -> Self {
        Self { profile_visibility, ..self }
    }

    pub fn with_data_sharing(self, data_sharing: bool) -> Self {
        Self { data_sharing, ..self }
    }

    pub fn with_analytics(self, analytics: bool) -> Self {
        Self { analytics, ..self }
    }
}

impl AppearancePreferences {
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    pub fn with_language(self, language: Locale) -> Self {
        Self { language, ..self }
    }

    pub fn with_font_size(self, font_size: FontSize) -> Self {
        Self { font_size, ..self }
    }
}

/// Apply `change` to a copy of `user`.
pub fn set_preference(user: &User, change: PreferenceChange) -> User {
    let mut next = user.clone();
    let prefs = &mut next.preferences;
    match change {
        PreferenceChange::Notification(kind, value) => {
            prefs.notifications = prefs.notifications.with(kind, value);
        }
        PreferenceChange::ProfileVisibility(v) => {
            prefs.privacy = prefs.privacy.with_visibility(v);
        }
        PreferenceChange::DataSharing(v) => {
            prefs.privacy = prefs.privacy.with_data_sharing(v);
        }
        PreferenceChange::Analytics(v) => {
            prefs.privacy = prefs.privacy.with_analytics(v);
        }
        PreferenceChange::Theme(v) => {
            prefs.appearance = prefs.appearance.with_theme(v);
        }
        PreferenceChange::Language(v) => {
            prefs.appearance = prefs.appearance.with_language(v);
        }
        PreferenceChange::FontSize(v) => {
            prefs.appearance = prefs.appearance.with_font_size(v);
        }
    }
    next
}

/// Classes the document root should carry for these appearance settings.
///
/// `prefers_dark` is the environment's color-scheme preference and only
/// matters for [`Theme::System`].
pub fn document_classes(appearance: &AppearancePreferences, prefers_dark: bool) -> Vec<&'static str> {
    let dark = match appearance.theme {
        Theme::Light => false,
        Theme::Dark => true,
        Theme::System => prefers_dark,
    };
    let font = match appearance.font_size {
        FontSize::Small => "font-small",
        FontSize::Medium => "font-medium",
        FontSize::Large => "font-large",
    };
    let mut classes = Vec::with_capacity(2);
    if dark {
        classes.push("dark");
    }
    classes.push(font);
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_toggle_changes_only_that_leaf() {
        let user = User::default();
        let before = user.preferences.notifications;
        assert!(!before.sms);

        let next = set_preference(&user, PreferenceChange::Notification(NotificationKind::Sms, true));
        let after = next.preferences.notifications;

        assert!(after.sms);
        assert_eq!(after.email, before.email);
        assert_eq!(after.push, before.push);
        assert_eq!(after.newsletters, before.newsletters);
        assert_eq!(next.preferences.privacy, user.preferences.privacy);
        assert_eq!(next.preferences.appearance, user.preferences.appearance);
        assert_eq!(next.full_name, user.full_name);
    }

    #[test]
    fn test_original_is_untouched() {
        let user = User::default();
        let _ = set_preference(&user, PreferenceChange::Theme(Theme::Dark));
        assert_eq!(user.preferences.appearance.theme, Theme::Light);
    }

    #[test]
    fn test_privacy_updates() {
        let user = User::default();
        let next = set_preference(&user, PreferenceChange::ProfileVisibility(ProfileVisibility::Contacts));
        let next = set_preference(&next, PreferenceChange::DataSharing(true));

        assert_eq!(next.preferences.privacy.profile_visibility, ProfileVisibility::Contacts);
        assert!(next.preferences.privacy.data_sharing);
        assert!(next.preferences.privacy.analytics);
    }

    #[test]
    fn test_appearance_updates() {
        let user = User::default();
        let next = set_preference(&user, PreferenceChange::Language(Locale::Ta));
        let next = set_preference(&next, PreferenceChange::FontSize(FontSize::Large));

        let appearance = next.preferences.appearance;
        assert_eq!(appearance.language, Locale::Ta);
        assert_eq!(appearance.font_size, FontSize::Large);
        assert_eq!(appearance.theme, Theme::Light);
    }

    #[test]
    fn test_notification_get_matches_with() {
        for kind in NotificationKind::ALL {
            let prefs = NotificationPreferences::default().with(kind, true);
            assert!(prefs.get(kind));
            let prefs = prefs.with(kind, false);
            assert!(!prefs.get(kind));
        }
    }

    #[test]
    fn test_document_classes() {
        let mut appearance = AppearancePreferences::default();
        assert_eq!(document_classes(&appearance, true), vec!["font-medium"]);

        appearance.theme = Theme::Dark;
        appearance.font_size = FontSize::Small;
        assert_eq!(document_classes(&appearance, false), vec!["dark", "font-small"]);

        appearance.theme = Theme::System;
        assert_eq!(document_classes(&appearance, true), vec!["dark", "font-small"]);
        assert_eq!(document_classes(&appearance, false), vec!["font-small"]);
    }

    #[test]
    fn test_affects_document() {
        assert!(PreferenceChange::Theme(Theme::Dark).affects_document());
        assert!(PreferenceChange::FontSize(FontSize::Large).affects_document());
        assert!(!PreferenceChange::Language(Locale::Hi).affects_document());
        assert!(!PreferenceChange::Analytics(false).affects_document());
    }
}
