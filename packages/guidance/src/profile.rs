//! Profile setup form.
//!
//! The form is seeded from the [`User`] and edited locally. Saving only
//! carries the contact fields (name, email and phone) back into the user
//! record; the academic fields live and die with the form.

use std::collections::BTreeSet;

use crate::user::User;

/// Interests offered as toggle chips, in display order.
pub const INTEREST_OPTIONS: &[&str] = &[
    "Technology",
    "Medicine",
    "Engineering",
    "Business",
    "Arts",
    "Science",
    "Sports",
    "Music",
    "Literature",
    "Mathematics",
    "Physics",
    "Chemistry",
];

/// `(value, label)` pairs of the academic level select. The empty value is the placeholder.
pub const ACADEMIC_LEVELS: &[(&str, &str)] = &[
    ("", "Select Level"),
    ("10th", "10th Grade"),
    ("12th", "12th Grade"),
    ("undergraduate", "Undergraduate"),
    ("postgraduate", "Postgraduate"),
];

/// `(value, label)` pairs of the preferred field select.
pub const PREFERRED_FIELDS: &[(&str, &str)] = &[
    ("", "Select Field"),
    ("engineering", "Engineering"),
    ("medicine", "Medicine"),
    ("business", "Business"),
    ("arts", "Arts"),
    ("science", "Science"),
    ("law", "Law"),
];

/// A free-text field of the profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
    FullName,
    Email,
    PhoneNumber,
    DateOfBirth,
    Gender,
    Address,
    AcademicLevel,
    PreferredField,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub interests: BTreeSet<String>,
    pub academic_level: String,
    pub preferred_field: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FullName => &self.full_name,
            ProfileField::Email => &self.email,
            ProfileField::PhoneNumber => &self.phone_number,
            ProfileField::DateOfBirth => &self.date_of_birth,
            ProfileField::Gender => &self.gender,
            ProfileField::Address => &self.address,
            ProfileField::AcademicLevel => &self.academic_level,
            ProfileField::PreferredField => &self.preferred_field,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::FullName => &mut self.full_name,
            ProfileField::Email => &mut self.email,
            ProfileField::PhoneNumber => &mut self.phone_number,
            ProfileField::DateOfBirth => &mut self.date_of_birth,
            ProfileField::Gender => &mut self.gender,
            ProfileField::Address => &mut self.address,
            ProfileField::AcademicLevel => &mut self.academic_level,
            ProfileField::PreferredField => &mut self.preferred_field,
        };
        *slot = value.into();
    }

    /// Add the interest if absent, remove it if present.
    pub fn toggle_interest(&mut self, interest: &str) {
        if !self.interests.remove(interest) {
            self.interests.insert(interest.to_string());
        }
    }

    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.contains(interest)
    }

    /// A copy of `user` with the form's contact fields applied.
    pub fn apply_to(&self, user: &User) -> User {
        User {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            ..user.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_from_user() {
        let user = User::default();
        let form = ProfileForm::from_user(&user);
        assert_eq!(form.full_name, user.full_name);
        assert_eq!(form.email, user.email);
        assert_eq!(form.phone_number, user.phone_number);
        assert!(form.interests.is_empty());
        assert_eq!(form.get(ProfileField::AcademicLevel), "");
    }

    #[test]
    fn test_toggle_interest() {
        let mut form = ProfileForm::default();
        form.toggle_interest("Music");
        form.toggle_interest("Physics");
        assert!(form.has_interest("Music"));
        form.toggle_interest("Music");
        assert!(!form.has_interest("Music"));
        assert_eq!(form.interests.len(), 1);
    }

    #[test]
    fn test_apply_copies_contact_fields_only() {
        let user = User::default();
        let mut form = ProfileForm::from_user(&user);
        form.set(ProfileField::FullName, "Asha");
        form.set(ProfileField::Email, "asha@example.com");
        form.set(ProfileField::PhoneNumber, "+91-9000000000");
        form.set(ProfileField::Address, "Coimbatore");

        let saved = form.apply_to(&user);
        assert_eq!(saved.full_name, "Asha");
        assert_eq!(saved.email, "asha@example.com");
        assert_eq!(saved.phone_number, "+91-9000000000");
        assert_eq!(saved.id, user.id);
        assert_eq!(saved.preferences, user.preferences);
    }
}
