use chrono::{Local, NaiveDate};
use serde::Serialize;

use super::Searchable;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scholarship {
    pub id: &'static str,
    pub name: &'static str,
    pub provider: &'static str,
    pub amount: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub deadline: &'static str,
    pub eligibility: &'static [&'static str],
    pub r#type: &'static str,
    pub description: &'static str,
    pub application_link: &'static str,
    pub requirements: &'static [&'static str],
}

/// Badge shown next to a scholarship, by days until its deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeadlineUrgency {
    /// A week or less, including deadlines already passed.
    Urgent,
    /// A month or less.
    Soon,
    Open,
}

impl DeadlineUrgency {
    pub fn from_days_left(days: i64) -> Self {
        if days <= 7 {
            DeadlineUrgency::Urgent
        } else if days <= 30 {
            DeadlineUrgency::Soon
        } else {
            DeadlineUrgency::Open
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DeadlineUrgency::Urgent => "Urgent",
            DeadlineUrgency::Soon => "Soon",
            DeadlineUrgency::Open => "Open",
        }
    }
}

impl Scholarship {
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.deadline, "%Y-%m-%d").ok()
    }

    /// Whole days from `today` until the deadline; negative once it has passed.
    pub fn days_left(&self, today: NaiveDate) -> Option<i64> {
        self.deadline_date().map(|d| (d - today).num_days())
    }

    /// Urgency relative to `today`. Unparseable deadlines are treated as open.
    pub fn urgency(&self, today: NaiveDate) -> DeadlineUrgency {
        self.days_left(today)
            .map_or(DeadlineUrgency::Open, DeadlineUrgency::from_days_left)
    }

    /// [`urgency`](Self::urgency) against the local calendar date.
    pub fn urgency_today(&self) -> DeadlineUrgency {
        self.urgency(Local::now().date_naive())
    }
}

impl Searchable for Scholarship {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.provider, self.description]
    }

    fn kind(&self) -> Option<&str> {
        Some(self.r#type)
    }
}

/// Options of the type select box; the first is the "all" sentinel.
pub const SCHOLARSHIP_TYPES: &[&str] = &["all", "Merit-based", "Need-based", "Sports", "Arts"];

pub const SCHOLARSHIPS: &[Scholarship] = &[
    Scholarship {
        id: "1",
        name: "Merit Scholarship for Engineering Students",
        provider: "Tamil Nadu Government",
        amount: "₹50,000 per year",
        deadline: "2025-02-15",
        eligibility: &["12th grade with 85%+ marks", "Engineering admission confirmed", "Family income < ₹8 LPA"],
        r#type: "Merit-based",
        description: "Government scholarship for meritorious students pursuing engineering courses in Tamil Nadu.",
        application_link: "https://tnscholarship.gov.in",
        requirements: &["Academic transcripts", "Income certificate", "Admission letter", "Bank details"],
    },
    Scholarship {
        id: "2",
        name: "Karpagam Excellence Scholarship",
        provider: "Karpagam College of Engineering",
        amount: "₹75,000 per year",
        deadline: "2025-01-30",
        eligibility: &["JEE Main score > 85 percentile", "Admission to Karpagam College", "Academic excellence"],
        r#type: "Merit-based",
        description: "Institutional scholarship for top performers admitted to Karpagam College of Engineering.",
        application_link: "https://www.kce.ac.in/scholarships",
        requirements: &["JEE Main scorecard", "Academic certificates", "Application form", "Recommendation letter"],
    },
    Scholarship {
        id: "3",
        name: "SC/ST Scholarship Scheme",
        provider: "Central Government",
        amount: "₹1,20,000 per year",
        deadline: "2025-03-01",
        eligibility: &["SC/ST category", "Family income < ₹2.5 LPA", "Pursuing higher education"],
        r#type: "Need-based",
        description: "Central government scholarship for SC/ST students pursuing higher education.",
        application_link: "https://scholarships.gov.in",
        requirements: &["Caste certificate", "Income certificate", "Academic records", "Bank account details"],
    },
    Scholarship {
        id: "4",
        name: "Women in Technology Scholarship",
        provider: "Tech Foundation India",
        amount: "₹1,00,000 one-time",
        deadline: "2025-02-28",
        eligibility: &["Female students", "Pursuing Computer Science/IT", "Academic merit > 80%"],
        r#type: "Merit-based",
        description: "Encouraging women to pursue careers in technology and engineering fields.",
        application_link: "https://techfoundation.org.in",
        requirements: &["Academic transcripts", "Essay on technology", "Project portfolio", "Recommendation letters"],
    },
    Scholarship {
        id: "5",
        name: "Rural Student Support Scholarship",
        provider: "Education Trust of India",
        amount: "₹60,000 per year",
        deadline: "2025-01-20",
        eligibility: &["Rural background", "First generation college student", "Family income < ₹5 LPA"],
        r#type: "Need-based",
        description: "Supporting rural students to access quality higher education opportunities.",
        application_link: "https://educationtrust.org.in",
        requirements: &["Rural residence proof", "Income certificate", "Academic records", "Personal statement"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_urgency_thresholds() {
        assert_eq!(DeadlineUrgency::from_days_left(-3), DeadlineUrgency::Urgent);
        assert_eq!(DeadlineUrgency::from_days_left(7), DeadlineUrgency::Urgent);
        assert_eq!(DeadlineUrgency::from_days_left(8), DeadlineUrgency::Soon);
        assert_eq!(DeadlineUrgency::from_days_left(30), DeadlineUrgency::Soon);
        assert_eq!(DeadlineUrgency::from_days_left(31), DeadlineUrgency::Open);
    }

    #[test]
    fn test_urgency_against_date() {
        let merit = &SCHOLARSHIPS[0];
        assert_eq!(merit.days_left(date("2025-02-10")), Some(5));
        assert_eq!(merit.urgency(date("2025-02-10")), DeadlineUrgency::Urgent);
        assert_eq!(merit.urgency(date("2025-01-20")), DeadlineUrgency::Soon);
        assert_eq!(merit.urgency(date("2024-12-01")), DeadlineUrgency::Open);
    }

    #[test]
    fn test_every_deadline_parses() {
        assert!(SCHOLARSHIPS.iter().all(|s| s.deadline_date().is_some()));
    }

    #[test]
    fn test_types_cover_catalog() {
        for s in SCHOLARSHIPS {
            assert!(SCHOLARSHIP_TYPES.contains(&s.r#type));
        }
    }
}
