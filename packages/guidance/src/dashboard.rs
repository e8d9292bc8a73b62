//! Static dashboard content.

use crate::i18n::{self, Locale};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

/// How pressing an upcoming deadline is, used only for colouring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pressure {
    High,
    Medium,
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline {
    pub title: &'static str,
    pub remaining: &'static str,
    pub pressure: Pressure,
}

pub const STATS: &[Stat] = &[
    Stat { label: "Career Matches", value: "12" },
    Stat { label: "College Options", value: "85" },
    Stat { label: "Scholarships", value: "23" },
    Stat { label: "Connections", value: "156" },
];

pub const RECENT_ACTIVITY: &[&str] = &[
    "Completed Career Assessment",
    "Applied to 3 scholarships",
    "Updated resume",
];

pub const UPCOMING_DEADLINES: &[Deadline] = &[
    Deadline { title: "IIT JEE Application", remaining: "2 days left", pressure: Pressure::High },
    Deadline { title: "Merit Scholarship", remaining: "1 week left", pressure: Pressure::Medium },
    Deadline { title: "College Fair Registration", remaining: "2 weeks left", pressure: Pressure::Low },
];

/// "Welcome back, <name>!" in the given locale.
pub fn welcome_line(locale: Locale, full_name: &str) -> String {
    format!("{}, {}!", i18n::resolve(locale, "welcome_back"), full_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_line() {
        assert_eq!(welcome_line(Locale::En, "Asha"), "Welcome back, Asha!");
        // Pending locales fall back to English.
        assert_eq!(welcome_line(Locale::Te, "Asha"), "Welcome back, Asha!");
    }

    #[test]
    fn test_static_stats() {
        let values: Vec<_> = STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, vec!["12", "85", "23", "156"]);
    }
}
