use dioxus::prelude::*;
use guidance::resume::{PersonalField, ResumeData, Template};

use crate::{use_app_state, use_translate};

const PERSONAL_FIELDS: [(PersonalField, &str, &str); 6] = [
    (PersonalField::Name, "text", "Full Name"),
    (PersonalField::Email, "email", "Email"),
    (PersonalField::Phone, "tel", "Phone"),
    (PersonalField::Location, "text", "Location"),
    (PersonalField::Linkedin, "url", "LinkedIn"),
    (PersonalField::Github, "url", "GitHub"),
];

#[component]
pub fn ResumeView() -> Element {
    let state = use_app_state();
    let t = use_translate();
    let mut resume = use_signal(|| ResumeData::for_user(&state.read().user));
    let mut new_skill = use_signal(String::new);

    let title = t("resume_builder");
    let data = resume.read().clone();
    let (shown_skills, hidden_skills) = data.preview_skills();
    let shown_skills = shown_skills.to_vec();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{title}" }
            p { class: "view-muted", "Create a professional resume that stands out" }

            div {
                class: "card-grid cols-2",

                // Editor
                div {
                    div {
                        class: "card",
                        h3 { class: "view-section-title", "Choose Template" }
                        div {
                            class: "card-grid cols-2",
                            for template in Template::ALL {
                                button {
                                    key: "{template.name()}",
                                    class: if data.template == template { "template-card active" } else { "template-card" },
                                    onclick: move |_| resume.write().select_template(template),
                                    strong { "{template.name()}" }
                                    p { class: "view-muted", "{template.blurb()}" }
                                }
                            }
                        }
                    }

                    div {
                        class: "card",
                        h3 { class: "view-section-title", "Personal Information" }
                        div {
                            class: "card-grid cols-2",
                            for (field, kind, placeholder) in PERSONAL_FIELDS {
                                input {
                                    key: "{placeholder}",
                                    class: "input",
                                    r#type: kind,
                                    placeholder: placeholder,
                                    value: data.personal_field(field).to_string(),
                                    oninput: move |evt: FormEvent| resume.write().set_personal(field, evt.value()),
                                }
                            }
                        }
                    }

                    div {
                        class: "card",
                        h3 { class: "view-section-title", "Professional Summary" }
                        textarea {
                            class: "input w-full",
                            rows: 4,
                            placeholder: "Write a brief summary about yourself...",
                            value: "{data.summary}",
                            oninput: move |evt: FormEvent| resume.write().set_summary(evt.value()),
                        }
                    }

                    div {
                        class: "card",
                        h3 { class: "view-section-title", "Skills" }
                        form {
                            class: "filter-row",
                            onsubmit: move |evt: FormEvent| {
                                evt.prevent_default();
                                if resume.write().add_skill(&new_skill.read()) {
                                    new_skill.set(String::new());
                                }
                            },
                            input {
                                class: "input",
                                r#type: "text",
                                placeholder: "Enter a new skill",
                                value: new_skill(),
                                oninput: move |evt: FormEvent| new_skill.set(evt.value()),
                            }
                            button { class: "btn btn-primary", r#type: "submit", "+ Add Skill" }
                        }
                        div {
                            class: "chip-row",
                            for (index, skill) in data.skills.iter().enumerate() {
                                button {
                                    key: "{index}-{skill}",
                                    class: "chip chip-removable",
                                    title: "Remove",
                                    onclick: move |_| {
                                        resume.write().remove_skill(index);
                                    },
                                    "{skill} \u{00D7}"
                                }
                            }
                        }
                    }
                }

                // Preview
                div {
                    class: "card resume-preview template-{data.template.name()}",
                    h3 { class: "view-section-title", "Preview" }
                    h2 { "{data.personal.name}" }
                    p { class: "view-muted", "{data.personal.email} \u{2022} {data.personal.phone}" }
                    p { class: "view-muted", "{data.personal.location}" }
                    p { "{data.summary}" }

                    h4 { class: "field-label", "Skills" }
                    div {
                        class: "chip-row",
                        for skill in shown_skills {
                            span { key: "{skill}", class: "chip", "{skill}" }
                        }
                        if hidden_skills > 0 {
                            span { class: "chip", "+{hidden_skills}" }
                        }
                    }

                    h4 { class: "field-label", "Education" }
                    for edu in data.education.iter() {
                        div {
                            key: "{edu.degree}",
                            strong { "{edu.degree}" }
                            div { "{edu.institution}" }
                            div { class: "view-muted", "{edu.year} \u{2022} {edu.grade}" }
                        }
                    }

                    h4 { class: "field-label", "Projects" }
                    for project in data.projects.iter() {
                        div {
                            key: "{project.name}",
                            strong { "{project.name}" }
                            div { class: "view-muted", "{project.description}" }
                        }
                    }

                    div {
                        class: "form-actions",
                        button { class: "btn btn-primary", "Download PDF" }
                        button { class: "btn btn-outline", "Full Preview" }
                    }
                }
            }
        }
    }
}
