use dioxus::prelude::*;
use guidance::catalog::{self, KindFilter, FAQS, FAQ_CATEGORIES};

use crate::use_translate;

const SUPPORT_PHONE: &str = "tel:+91-9876543210";
const SUPPORT_EMAIL: &str = "mailto:support@careercorrector.com";

#[component]
pub fn HelpView() -> Element {
    let t = use_translate();
    let mut query = use_signal(String::new);
    let mut category = use_signal(KindFilter::default);
    let mut open = use_signal(|| Option::<&'static str>::None);

    let title = t("help_support");
    let results = catalog::filter(FAQS, &query.read(), &category.read());
    let current = category.read().as_str().to_string();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{title}" }
            p { class: "view-muted", "Find answers to common questions or get in touch with our support team" }

            div {
                class: "card-grid cols-3",
                div {
                    class: "card contact-card",
                    h3 { class: "view-section-title", "Live Chat" }
                    p { class: "view-muted", "Chat with our support team in real time" }
                    button { class: "btn btn-primary", "Start Chat" }
                }
                div {
                    class: "card contact-card",
                    h3 { class: "view-section-title", "Phone Support" }
                    p { class: "view-muted", "Mon-Fri, 9 AM to 6 PM" }
                    a { class: "btn btn-primary", href: SUPPORT_PHONE, "Call Now" }
                }
                div {
                    class: "card contact-card",
                    h3 { class: "view-section-title", "Email Support" }
                    p { class: "view-muted", "We reply within 24 hours" }
                    a { class: "btn btn-primary", href: SUPPORT_EMAIL, "Send Email" }
                }
            }

            div {
                class: "card",
                h2 { class: "view-section-title", "Frequently Asked Questions" }
                div {
                    class: "filter-row",
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Search FAQs...",
                        value: query(),
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                    }
                    select {
                        class: "input",
                        value: "{current}",
                        onchange: move |evt: FormEvent| category.set(KindFilter::parse(&evt.value())),
                        for c in FAQ_CATEGORIES.iter() {
                            option { key: "{c.id}", value: "{c.id}", selected: c.id == current, "{c.name}" }
                        }
                    }
                }

                if results.is_empty() {
                    p { class: "view-muted", "No FAQs found matching your search." }
                }
                for faq in results {
                    div {
                        key: "{faq.id}",
                        class: "faq-item",
                        button {
                            class: "faq-question",
                            onclick: move |_| {
                                let next = if open() == Some(faq.id) { None } else { Some(faq.id) };
                                open.set(next);
                            },
                            "{faq.question}"
                        }
                        if open() == Some(faq.id) {
                            p { class: "faq-answer", "{faq.answer}" }
                        }
                    }
                }
            }

            div {
                class: "card",
                h2 { class: "view-section-title", "Additional Resources" }
                div {
                    class: "card-grid cols-2",
                    div {
                        class: "resource",
                        h3 { "User Guide" }
                        p { class: "view-muted", "Step-by-step instructions for every feature" }
                    }
                    div {
                        class: "resource",
                        h3 { "Community Forum" }
                        p { class: "view-muted", "Ask questions and share experiences with other students" }
                    }
                }
            }
        }
    }
}
