//! # Application state
//!
//! One [`AppState`] value owns everything the shell needs: the session flag,
//! the user record and the active section. The UI never edits it field by
//! field; it dispatches an [`Action`] and stores the result of
//! [`AppState::reduce`].
//!
//! | Action | Effect |
//! |--------|--------|
//! | `Login` | both fields non-empty: authenticated, full name set; otherwise `login_error` set |
//! | `Logout` | unauthenticated, default full name restored |
//! | `SelectSection` | active section replaced |
//! | `SetPreference` | exactly one preference leaf replaced |
//! | `SaveAccount` | name, email and phone copied into the user |
//!
//! The active section survives logout, so signing back in returns to the
//! panel that was open.

use crate::error::LoginError;
use crate::preferences::{self, PreferenceChange};
use crate::section::{Section, ViewRouter};
use crate::session;
use crate::user::{User, DEFAULT_FULL_NAME};

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Login { name: String, password: String },
    Logout,
    SelectSection(Section),
    SetPreference(PreferenceChange),
    SaveAccount {
        full_name: String,
        email: String,
        phone_number: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub authenticated: bool,
    pub user: User,
    pub router: ViewRouter,
    /// Set by a refused login, cleared by the next successful one.
    pub login_error: Option<LoginError>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Signed out, default user, dashboard selected.
    pub fn new() -> Self {
        Self {
            authenticated: false,
            user: User::default(),
            router: ViewRouter::default(),
            login_error: None,
        }
    }

    /// Back to [`AppState::new`].
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn active_section(&self) -> Section {
        self.router.active()
    }

    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::Login { name, password } => match session::check_credentials(&name, &password) {
                Ok(name) => {
                    tracing::info!(user = name, "signed in");
                    self.user.full_name = name.to_string();
                    self.authenticated = true;
                    self.login_error = None;
                }
                Err(err) => {
                    tracing::debug!("login refused: {err}");
                    self.login_error = Some(err);
                }
            },
            Action::Logout => {
                tracing::info!(user = %self.user.full_name, "signed out");
                self.authenticated = false;
                self.user.full_name = DEFAULT_FULL_NAME.to_string();
            }
            Action::SelectSection(section) => self.router.select(section),
            Action::SetPreference(change) => {
                tracing::debug!(?change, "preference changed");
                self.user = preferences::set_preference(&self.user, change);
            }
            Action::SaveAccount {
                full_name,
                email,
                phone_number,
            } => {
                tracing::info!("account details saved");
                self.user.full_name = full_name;
                self.user.email = email;
                self.user.phone_number = phone_number;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::preferences::NotificationKind;
    use crate::user::Theme;

    fn login(name: &str, password: &str) -> Action {
        Action::Login {
            name: name.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_with_both_fields() {
        let state = AppState::new().reduce(login("Asha", "pw"));
        assert!(state.authenticated);
        assert_eq!(state.user.full_name, "Asha");
        assert_eq!(state.login_error, None);
    }

    #[test]
    fn test_login_with_missing_field() {
        for (name, password) in [("", "pw"), ("Asha", ""), ("", "")] {
            let state = AppState::new().reduce(login(name, password));
            assert!(!state.authenticated);
            assert_eq!(state.user.full_name, DEFAULT_FULL_NAME);
            let err = state.login_error.expect("error message");
            assert_eq!(err.to_string(), "Please enter both name and password.");
        }
    }

    #[test]
    fn test_successful_login_clears_error() {
        let state = AppState::new().reduce(login("", "")).reduce(login("Asha", "pw"));
        assert!(state.authenticated);
        assert_eq!(state.login_error, None);
    }

    #[test]
    fn test_logout_restores_default_name() {
        let state = AppState::new()
            .reduce(login("Asha", "pw"))
            .reduce(Action::SelectSection(Section::Quiz))
            .reduce(Action::Logout);
        assert!(!state.authenticated);
        assert_eq!(state.user.full_name, DEFAULT_FULL_NAME);
        assert_eq!(state.active_section(), Section::Quiz);
    }

    #[test]
    fn test_set_preference_touches_one_leaf() {
        let before = AppState::new();
        let after = before
            .clone()
            .reduce(Action::SetPreference(PreferenceChange::Notification(NotificationKind::Sms, true)));
        assert!(after.user.preferences.notifications.sms);
        assert_eq!(after.user.preferences.privacy, before.user.preferences.privacy);
        assert_eq!(after.user.preferences.appearance, before.user.preferences.appearance);

        let after = after
            .reduce(Action::SetPreference(PreferenceChange::Theme(Theme::Dark)))
            .reduce(Action::SetPreference(PreferenceChange::Language(Locale::Ta)));
        assert_eq!(after.user.preferences.appearance.theme, Theme::Dark);
        assert_eq!(after.user.preferences.appearance.language, Locale::Ta);
    }

    #[test]
    fn test_save_account() {
        let state = AppState::new().reduce(Action::SaveAccount {
            full_name: "Asha".into(),
            email: "asha@example.com".into(),
            phone_number: "+91-9000000000".into(),
        });
        assert_eq!(state.user.full_name, "Asha");
        assert_eq!(state.user.email, "asha@example.com");
        assert_eq!(state.user.phone_number, "+91-9000000000");
    }

    #[test]
    fn test_reset() {
        let mut state = AppState::new()
            .reduce(login("Asha", "pw"))
            .reduce(Action::SelectSection(Section::Help));
        state.reset();
        assert_eq!(state, AppState::new());
    }
}
