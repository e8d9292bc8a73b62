use dioxus::prelude::*;
use guidance::catalog::{self, College, KindFilter, COLLEGES};

use crate::use_translate;

#[component]
pub fn ExplorerView() -> Element {
    let t = use_translate();
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| Option::<&'static College>::None);

    let title = t("college_explorer");
    let results = catalog::filter(COLLEGES, &query.read(), &KindFilter::All);

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{title}" }
            p { class: "view-muted", "Find and compare colleges in Coimbatore" }

            input {
                class: "input w-full",
                r#type: "text",
                placeholder: "Search colleges by name, location, or type...",
                value: query(),
                oninput: move |evt: FormEvent| query.set(evt.value()),
            }

            div {
                class: "card-grid cols-2",
                for college in results {
                    div {
                        key: "{college.id}",
                        class: "card college-card",
                        onclick: move |_| selected.set(Some(college)),
                        img { class: "card-image", src: "{college.image}", alt: "{college.name}" }
                        div {
                            class: "list-row",
                            h3 { class: "view-section-title", "{college.name}" }
                            span { class: "badge", "\u{2605} {college.rating}" }
                        }
                        p { class: "view-muted", "{college.location}" }
                        p { class: "view-muted", "{college.r#type}" }
                        div {
                            class: "list-row",
                            span { "{college.students} students" }
                            span { "{college.courses} courses" }
                        }
                        p { class: "text-primary", "{college.fees}" }
                    }
                }
            }

            if let Some(college) = selected() {
                CollegeDetail { college, on_close: move |_| selected.set(None) }
            }
        }
    }
}

#[component]
fn CollegeDetail(college: &'static College, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),

                img { class: "card-image", src: "{college.image}", alt: "{college.name}" }
                h2 { class: "view-title", "{college.name}" }
                p { "{college.description}" }

                div {
                    class: "card-grid cols-2",
                    div { h4 { class: "field-label", "Established" } p { "{college.established}" } }
                    div { h4 { class: "field-label", "Rating" } p { "{college.rating}/5" } }
                    div { h4 { class: "field-label", "Students" } p { "{college.students}" } }
                    div { h4 { class: "field-label", "Courses" } p { "{college.courses}" } }
                    div { h4 { class: "field-label", "Annual Fees" } p { "{college.fees}" } }
                }

                h4 { class: "field-label", "Accreditation" }
                div {
                    class: "chip-row",
                    for body in college.accreditation.iter() {
                        span { key: "{body}", class: "chip", "{body}" }
                    }
                }

                h3 { class: "view-section-title", "Contact Information" }
                p { "\u{1F4DE} {college.phone}" }
                p { "\u{2709} {college.email}" }
                a { href: "{college.website}", target: "_blank", "Visit Website" }

                div {
                    class: "form-actions",
                    button { class: "btn btn-outline", onclick: move |_| on_close.call(()), "Close" }
                    a { class: "btn btn-primary", href: "{college.website}", target: "_blank", "Apply Now" }
                }
            }
        }
    }
}
