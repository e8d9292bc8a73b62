//! # The signed-in student
//!
//! [`User`] holds identity fields and a typed preference tree with three
//! categories: [`NotificationPreferences`], [`PrivacyPreferences`] and
//! [`AppearancePreferences`]. Updates never mutate a category in place; see
//! [`crate::preferences`] for the one-leaf update functions.

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Display name restored on logout.
pub const DEFAULT_FULL_NAME: &str = "Roshini ks";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    /// Avatar URL; empty renders initials instead.
    pub avatar: String,
    pub preferences: Preferences,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            full_name: DEFAULT_FULL_NAME.to_string(),
            email: "roshiniks@example.com".to_string(),
            phone_number: "+91-9876543210".to_string(),
            avatar: String::new(),
            preferences: Preferences::default(),
        }
    }
}

impl User {
    /// Up to two upper-case initials, one per word: "Roshini ks" -> "RK".
    pub fn initials(&self) -> String {
        self.full_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub notifications: NotificationPreferences,
    pub privacy: PrivacyPreferences,
    pub appearance: AppearancePreferences,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPreferences {
    pub email: bool,
    pub push: bool,
    pub sms: bool,
    pub newsletters: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            sms: false,
            newsletters: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileVisibility {
    #[default]
    Public,
    Private,
    Contacts,
}

impl ProfileVisibility {
    pub const ALL: [ProfileVisibility; 3] = [
        ProfileVisibility::Public,
        ProfileVisibility::Private,
        ProfileVisibility::Contacts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProfileVisibility::Public => "Public",
            ProfileVisibility::Private => "Private",
            ProfileVisibility::Contacts => "Contacts",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrivacyPreferences {
    pub profile_visibility: ProfileVisibility,
    pub data_sharing: bool,
    pub analytics: bool,
}

impl Default for PrivacyPreferences {
    fn default() -> Self {
        Self {
            profile_visibility: ProfileVisibility::Public,
            data_sharing: false,
            analytics: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    /// Follow the OS `prefers-color-scheme`.
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System Default",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearancePreferences {
    pub theme: Theme,
    pub language: Locale,
    pub font_size: FontSize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_user() {
        let user = User::default();
        assert_eq!(user.full_name, "Roshini ks");
        assert!(user.preferences.notifications.email);
        assert!(!user.preferences.notifications.sms);
        assert_eq!(user.preferences.privacy.profile_visibility, ProfileVisibility::Public);
        assert!(user.preferences.privacy.analytics);
        assert_eq!(user.preferences.appearance.theme, Theme::Light);
        assert_eq!(user.preferences.appearance.language, Locale::En);
        assert_eq!(user.preferences.appearance.font_size, FontSize::Medium);
    }

    #[test]
    fn test_initials() {
        let mut user = User::default();
        assert_eq!(user.initials(), "RK");

        user.full_name = "ada".to_string();
        assert_eq!(user.initials(), "A");

        user.full_name = "Mary Ann Evans".to_string();
        assert_eq!(user.initials(), "MA");

        user.full_name = "   ".to_string();
        assert_eq!(user.initials(), "");
    }
}
