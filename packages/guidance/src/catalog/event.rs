use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Deadline,
    Exam,
    Event,
    Application,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Deadline => "deadline",
            EventKind::Exam => "exam",
            EventKind::Event => "event",
            EventKind::Application => "application",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Event {
    pub id: &'static str,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub kind: EventKind,
    pub priority: Priority,
    pub description: &'static str,
    /// Days remaining, as recorded in the catalog rather than computed.
    pub days_left: u32,
}

impl Event {
    pub fn countdown_label(&self) -> String {
        match self.days_left {
            0 => "Today".to_string(),
            1 => "Tomorrow".to_string(),
            n => format!("{n} days left"),
        }
    }

    pub fn is_urgent(&self) -> bool {
        self.priority == Priority::High && self.days_left <= 7
    }

    /// The catalog ordered soonest first.
    pub fn sorted_by_days_left() -> Vec<&'static Event> {
        let mut events: Vec<_> = EVENTS.iter().collect();
        events.sort_by_key(|e| e.days_left);
        events
    }
}

/// Counts shown above the timeline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimelineSummary {
    pub urgent: usize,
    pub exams: usize,
    pub events: usize,
}

impl TimelineSummary {
    pub fn of(events: &[Event]) -> Self {
        events.iter().fold(Self::default(), |mut acc, e| {
            acc.urgent += usize::from(e.is_urgent());
            acc.exams += usize::from(e.kind == EventKind::Exam);
            acc.events += usize::from(e.kind == EventKind::Event);
            acc
        })
    }
}

pub const EVENTS: &[Event] = &[
    Event {
        id: "1",
        title: "JEE Main Application Deadline",
        date: "2025-01-15",
        time: "11:59 PM",
        location: "Online",
        kind: EventKind::Deadline,
        priority: Priority::High,
        description: "Last date to submit JEE Main application form for April session",
        days_left: 2,
    },
    Event {
        id: "2",
        title: "NEET Exam",
        date: "2025-05-05",
        time: "2:00 PM",
        location: "Various Centers",
        kind: EventKind::Exam,
        priority: Priority::High,
        description: "National Eligibility cum Entrance Test for medical courses",
        days_left: 112,
    },
    Event {
        id: "3",
        title: "College Fair - Coimbatore",
        date: "2025-01-25",
        time: "10:00 AM",
        location: "CODISSIA Trade Fair Complex",
        kind: EventKind::Event,
        priority: Priority::Medium,
        description: "Meet representatives from top colleges and universities",
        days_left: 12,
    },
    Event {
        id: "4",
        title: "Scholarship Application - Merit Based",
        date: "2025-02-01",
        time: "11:59 PM",
        location: "Online",
        kind: EventKind::Application,
        priority: Priority::Medium,
        description: "Apply for merit-based scholarships for undergraduate programs",
        days_left: 19,
    },
    Event {
        id: "5",
        title: "TNEA Counselling",
        date: "2025-06-15",
        time: "9:00 AM",
        location: "Chennai",
        kind: EventKind::Event,
        priority: Priority::High,
        description: "Tamil Nadu Engineering Admissions counselling process",
        days_left: 153,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_soonest_first() {
        let ids: Vec<_> = Event::sorted_by_days_left().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["1", "3", "4", "2", "5"]);
    }

    #[test]
    fn test_summary_counts() {
        let summary = TimelineSummary::of(EVENTS);
        assert_eq!(summary, TimelineSummary { urgent: 1, exams: 1, events: 2 });
    }

    #[test]
    fn test_countdown_label() {
        let mut event = EVENTS[0].clone();
        assert_eq!(event.countdown_label(), "2 days left");
        event.days_left = 1;
        assert_eq!(event.countdown_label(), "Tomorrow");
        event.days_left = 0;
        assert_eq!(event.countdown_label(), "Today");
    }
}
