//! # Translations
//!
//! Each [`Locale`] owns a flat key → text dictionary. Lookups go through
//! [`resolve`], which falls back to [`Locale::DEFAULT`] and finally to the key
//! itself, so an incomplete dictionary never produces an empty label.
//!
//! English, Hindi and Tamil are complete. The remaining locales are selectable
//! but have no translations yet; they are listed in [`PENDING`] and render in
//! English until their dictionaries are filled in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A selectable interface language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
    Ta,
    Te,
    Kn,
    Ml,
    Gu,
    Bn,
    Mr,
}

/// Locales whose dictionaries are knowingly incomplete.
pub const PENDING: &[Locale] = &[
    Locale::Te,
    Locale::Kn,
    Locale::Ml,
    Locale::Gu,
    Locale::Bn,
    Locale::Mr,
];

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    pub const ALL: [Locale; 9] = [
        Locale::En,
        Locale::Hi,
        Locale::Ta,
        Locale::Te,
        Locale::Kn,
        Locale::Ml,
        Locale::Gu,
        Locale::Bn,
        Locale::Mr,
    ];

    /// ISO 639-1 code, as stored in the user's appearance preferences.
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
            Locale::Ta => "ta",
            Locale::Te => "te",
            Locale::Kn => "kn",
            Locale::Ml => "ml",
            Locale::Gu => "gu",
            Locale::Bn => "bn",
            Locale::Mr => "mr",
        }
    }

    pub fn from_code(code: &str) -> Option<Locale> {
        Locale::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Label for the language picker, in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Hi => "हिंदी (Hindi)",
            Locale::Ta => "தமிழ் (Tamil)",
            Locale::Te => "తెలుగు (Telugu)",
            Locale::Kn => "ಕನ್ನಡ (Kannada)",
            Locale::Ml => "മലയാളം (Malayalam)",
            Locale::Gu => "ગુજરાતી (Gujarati)",
            Locale::Bn => "বাংলা (Bengali)",
            Locale::Mr => "मराठी (Marathi)",
        }
    }

    pub fn is_pending(self) -> bool {
        PENDING.contains(&self)
    }

    fn dictionary(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => EN,
            Locale::Hi => HI,
            Locale::Ta => TA,
            _ => &[],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Look up `key` in `locale`, then in [`Locale::DEFAULT`], then return the key.
pub fn resolve<'a>(locale: Locale, key: &'a str) -> &'a str {
    lookup(locale, key)
        .or_else(|| lookup(Locale::DEFAULT, key))
        .unwrap_or(key)
}

fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    locale
        .dictionary()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
}

/// Keys present in the default dictionary but absent from `locale`.
pub fn missing_keys(locale: Locale) -> Vec<&'static str> {
    Locale::DEFAULT
        .dictionary()
        .iter()
        .map(|(k, _)| *k)
        .filter(|k| lookup(locale, k).is_none())
        .collect()
}

const EN: &[(&str, &str)] = &[
    ("career_corrector", "Career Corrector"),
    ("dashboard", "Dashboard"),
    ("profile_setup", "Profile Setup"),
    ("career_quiz", "Career Quiz"),
    ("college_explorer", "College Explorer"),
    ("ai_assistant", "AI Career Assistant"),
    ("timeline_events", "Timeline & Events"),
    ("scholarships", "Scholarships"),
    ("resume_builder", "Resume Builder"),
    ("settings", "Settings"),
    ("help_support", "Help & Support"),
    ("welcome_back", "Welcome back"),
    ("career_journey", "Here's your career journey overview"),
    ("search_placeholder", "Search colleges, courses, scholarships..."),
    ("student", "Student"),
    ("save_changes", "Save Changes"),
    ("account_settings", "Account Settings"),
    ("full_name", "Full Name"),
    ("email_address", "Email Address"),
    ("phone_number", "Phone Number"),
];

const HI: &[(&str, &str)] = &[
    ("career_corrector", "करियर सुधारक"),
    ("dashboard", "डैशबोर्ड"),
    ("profile_setup", "प्रोफ़ाइल सेटअप"),
    ("career_quiz", "करियर क्विज़"),
    ("college_explorer", "कॉलेज एक्सप्लोरर"),
    ("ai_assistant", "AI करियर सहायक"),
    ("timeline_events", "समयरेखा और घटनाएं"),
    ("scholarships", "छात्रवृत्ति"),
    ("resume_builder", "रिज्यूमे बिल्डर"),
    ("settings", "सेटिंग्स"),
    ("help_support", "सहायता और समर्थन"),
    ("welcome_back", "वापस स्वागत है"),
    ("career_journey", "यहाँ आपकी करियर यात्रा का अवलोकन है"),
    ("search_placeholder", "कॉलेज, कोर्स, छात्रवृत्ति खोजें..."),
    ("student", "छात्र"),
    ("save_changes", "परिवर्तन सहेजें"),
    ("account_settings", "खाता सेटिंग्स"),
    ("full_name", "पूरा नाम"),
    ("email_address", "ईमेल पता"),
    ("phone_number", "फोन नंबर"),
];

const TA: &[(&str, &str)] = &[
    ("career_corrector", "தொழில் திருத்தி"),
    ("dashboard", "டாஷ்போர்டு"),
    ("profile_setup", "சுயவிவர அமைப்பு"),
    ("career_quiz", "தொழில் வினாடி வினா"),
    ("college_explorer", "கல்லூரி ஆராய்ச்சி"),
    ("ai_assistant", "AI தொழில் உதவியாளர்"),
    ("timeline_events", "காலவரிசை மற்றும் நிகழ்வுகள்"),
    ("scholarships", "உதவித்தொகை"),
    ("resume_builder", "விண்ணப்ப கட்டுமானம்"),
    ("settings", "அமைப்புகள்"),
    ("help_support", "உதவி மற்றும் ஆதரவு"),
    ("welcome_back", "மீண்டும் வரவேற்கிறோம்"),
    ("career_journey", "இங்கே உங்கள் தொழில் பயணத்தின் கண்ணோட்டம்"),
    ("search_placeholder", "கல்லூரிகள், படிப்புகள், உதவித்தொகை தேடுங்கள்..."),
    ("student", "மாணவர்"),
    ("save_changes", "மாற்றங்களை சேமிக்கவும்"),
    ("account_settings", "கணக்கு அமைப்புகள்"),
    ("full_name", "முழு பெயர்"),
    ("email_address", "மின்னஞ்சல் முகவரி"),
    ("phone_number", "தொலைபேசி எண்"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_locale_entry() {
        assert_eq!(resolve(Locale::Hi, "dashboard"), "डैशबोर्ड");
        assert_eq!(resolve(Locale::En, "dashboard"), "Dashboard");
    }

    #[test]
    fn test_pending_locale_falls_back_to_default() {
        assert_eq!(resolve(Locale::Te, "settings"), "Settings");
        assert_eq!(resolve(Locale::Mr, "welcome_back"), "Welcome back");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(resolve(Locale::Ta, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_every_default_key_is_translated_or_pending() {
        for locale in Locale::ALL {
            let missing = missing_keys(locale);
            if locale.is_pending() {
                continue;
            }
            assert!(
                missing.is_empty(),
                "{locale} is missing {missing:?} but is not declared pending"
            );
        }
    }

    #[test]
    fn test_pending_list_is_accurate() {
        // A locale that has been completed should be removed from PENDING.
        for locale in PENDING {
            assert!(!missing_keys(*locale).is_empty(), "{locale} is complete");
        }
        assert!(!Locale::DEFAULT.is_pending());
    }

    #[test]
    fn test_code_roundtrip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_code("fr"), None);
    }
}
