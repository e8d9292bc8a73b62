use dioxus::prelude::*;
use guidance::catalog::{self, DeadlineUrgency, KindFilter, Scholarship, SCHOLARSHIPS, SCHOLARSHIP_TYPES};

use crate::use_translate;

fn urgency_class(urgency: DeadlineUrgency) -> &'static str {
    match urgency {
        DeadlineUrgency::Urgent => "badge badge-danger",
        DeadlineUrgency::Soon => "badge badge-warning",
        DeadlineUrgency::Open => "badge badge-success",
    }
}

fn urgency_badge(scholarship: &Scholarship) -> Element {
    let urgency = scholarship.urgency_today();
    rsx! {
        span { class: urgency_class(urgency), "{urgency.label()}" }
    }
}

#[component]
pub fn ScholarshipsView() -> Element {
    let t = use_translate();
    let mut query = use_signal(String::new);
    let mut kind = use_signal(KindFilter::default);
    let mut selected = use_signal(|| Option::<&'static Scholarship>::None);

    let title = t("scholarships");
    let results = catalog::filter(SCHOLARSHIPS, &query.read(), &kind.read());
    let current_kind = kind.read().as_str().to_string();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{title}" }
            p { class: "view-muted", "Discover funding opportunities for your education" }

            div {
                class: "filter-row",
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Search scholarships...",
                    value: query(),
                    oninput: move |evt: FormEvent| query.set(evt.value()),
                }
                select {
                    class: "input",
                    value: "{current_kind}",
                    onchange: move |evt: FormEvent| kind.set(KindFilter::parse(&evt.value())),
                    for value in SCHOLARSHIP_TYPES.iter().copied() {
                        option {
                            key: "{value}",
                            value: "{value}",
                            selected: value == current_kind,
                            if value == catalog::ALL { "All Types" } else { "{value}" }
                        }
                    }
                }
            }

            div {
                class: "card-grid cols-2",
                for s in results {
                    div {
                        key: "{s.id}",
                        class: "card",
                        div {
                            class: "list-row",
                            h3 { class: "view-section-title", "{s.name}" }
                            {urgency_badge(s)}
                        }
                        p { class: "view-muted", "{s.provider}" }
                        div {
                            class: "list-row",
                            div { h4 { class: "field-label", "Amount" } p { class: "text-success", "{s.amount}" } }
                            div { h4 { class: "field-label", "Deadline" } p { "{s.deadline}" } }
                        }
                        p { "{s.description}" }
                        div {
                            class: "list-row",
                            span { class: "badge", "{s.r#type}" }
                            button {
                                class: "btn btn-link",
                                onclick: move |_| selected.set(Some(s)),
                                "View Details \u{2192}"
                            }
                        }
                    }
                }
            }

            div {
                class: "card-grid cols-3",
                div { class: "card", p { class: "stat-value", "{SCHOLARSHIPS.len()}" } p { "Available Scholarships" } }
                div { class: "card", p { class: "stat-value", "\u{20B9}45L+" } p { "Total Funding Available" } }
                div { class: "card", p { class: "stat-value", "1,200+" } p { "Students Benefited" } }
            }

            if let Some(s) = selected() {
                ScholarshipDetail { scholarship: s, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
fn ScholarshipDetail(scholarship: &'static Scholarship, on_close: EventHandler<()>) -> Element {
    let s = scholarship;
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                h2 { class: "view-title", "{s.name}" }
                p { class: "view-muted", "{s.provider}" }

                div {
                    class: "card-grid cols-2",
                    div { h4 { class: "field-label", "Amount" } p { "{s.amount}" } }
                    div { h4 { class: "field-label", "Deadline" } p { "{s.deadline}" } }
                }

                h4 { class: "field-label", "Description" }
                p { "{s.description}" }

                h4 { class: "field-label", "Eligibility Criteria" }
                ul {
                    for item in s.eligibility.iter() {
                        li { key: "{item}", "{item}" }
                    }
                }

                h4 { class: "field-label", "Required Documents" }
                ul {
                    for item in s.requirements.iter() {
                        li { key: "{item}", "{item}" }
                    }
                }

                div {
                    class: "form-actions",
                    button { class: "btn btn-outline", onclick: move |_| on_close.call(()), "Close" }
                    a { class: "btn btn-primary", href: "{s.application_link}", target: "_blank", "Apply Now" }
                }
            }
        }
    }
}
