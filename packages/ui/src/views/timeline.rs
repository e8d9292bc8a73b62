use dioxus::prelude::*;
use guidance::catalog::{Event, EventKind, TimelineSummary, EVENTS};

use crate::use_translate;

fn kind_icon(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Deadline => "\u{26A0}",
        EventKind::Exam => "\u{23F1}",
        EventKind::Event => "\u{1F4C5}",
        EventKind::Application => "\u{1F4CD}",
    }
}

#[component]
pub fn TimelineView() -> Element {
    let t = use_translate();
    let title = t("timeline_events");
    let summary = TimelineSummary::of(EVENTS);
    let events = Event::sorted_by_days_left();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{title}" }
            p { class: "view-muted", "Track important deadlines and career milestones" }

            div {
                class: "card-grid cols-3",
                div {
                    class: "card summary-urgent",
                    p { class: "stat-value", "{summary.urgent}" }
                    p { "Urgent Deadlines" }
                }
                div {
                    class: "card summary-exams",
                    p { class: "stat-value", "{summary.exams}" }
                    p { "Upcoming Exams" }
                }
                div {
                    class: "card summary-events",
                    p { class: "stat-value", "{summary.events}" }
                    p { "Career Events" }
                }
            }

            div {
                class: "card",
                h2 { class: "view-section-title", "Upcoming Events" }
                div {
                    class: "timeline",
                    for event in events {
                        div {
                            key: "{event.id}",
                            class: "timeline-item",
                            span { class: "timeline-icon", "{kind_icon(event.kind)}" }
                            div {
                                class: "timeline-body",
                                span {
                                    class: "badge priority-{event.priority.as_str()}",
                                    "{event.countdown_label()}"
                                }
                                h3 { "{event.title}" }
                                p { class: "view-muted", "{event.description}" }
                                div {
                                    class: "list-row view-muted",
                                    span { "\u{1F4C5} {event.date}" }
                                    span { "\u{23F0} {event.time}" }
                                    span { "\u{1F4CD} {event.location}" }
                                }
                            }
                            button { class: "btn btn-outline", "Add Reminder" }
                        }
                    }
                }
            }
        }
    }
}
