use dioxus::prelude::*;
use guidance::QuizEngine;

use crate::use_translate;

#[component]
pub fn QuizView() -> Element {
    let mut quiz = use_signal(QuizEngine::new);
    let t = use_translate();
    let title = t("career_quiz");

    let results = quiz.read().results();
    if let Some(matches) = results {
        return rsx! {
            div {
                class: "view-page",
                h1 { class: "view-title", "Career Assessment Results" }
                p { class: "view-muted", "Based on your responses, here are your top career matches" }

                for m in matches {
                    div {
                        key: "{m.career}",
                        class: "card",
                        div {
                            class: "list-row",
                            h3 { class: "view-section-title", "{m.career}" }
                            span { class: "badge badge-primary", "{m.score}% Match" }
                        }
                        p { "{m.description}" }
                        div {
                            class: "card-grid cols-3",
                            div {
                                h4 { class: "field-label", "Key Skills" }
                                div {
                                    class: "chip-row",
                                    for skill in m.skills.iter() {
                                        span { key: "{skill}", class: "chip", "{skill}" }
                                    }
                                }
                            }
                            div {
                                h4 { class: "field-label", "Salary Range" }
                                p { "{m.salary}" }
                            }
                            div {
                                h4 { class: "field-label", "Growth Potential" }
                                p { "{m.growth}" }
                            }
                        }
                    }
                }

                button {
                    class: "btn btn-primary",
                    onclick: move |_| quiz.write().reset(),
                    "Take Quiz Again"
                }
            }
        };
    }

    let engine = quiz.read().clone();
    let question = engine.current_question().clone();
    let answer = engine.current_answer().map(str::to_string);
    let position = engine.current_index() + 1;
    let total = engine.len();
    let percent = engine.progress_percent();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{title}" }
            p { class: "view-muted", "Discover your ideal career path through our comprehensive assessment" }

            div {
                class: "card",
                div {
                    class: "list-row",
                    span { class: "view-muted", "Question {position} of {total}" }
                    span { class: "view-muted", "{percent}% Complete" }
                }
                div {
                    class: "progress",
                    div { class: "progress-bar", style: "width: {percent}%" }
                }

                h2 { class: "quiz-question", "{question.question}" }
                div {
                    class: "quiz-options",
                    for option in question.options.iter().copied() {
                        button {
                            key: "{option}",
                            class: if answer.as_deref() == Some(option) { "quiz-option selected" } else { "quiz-option" },
                            onclick: move |_| quiz.write().select_answer(option),
                            "{option}"
                        }
                    }
                }

                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-outline",
                        disabled: position == 1,
                        onclick: move |_| quiz.write().retreat(),
                        "Previous"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: answer.is_none(),
                        onclick: move |_| {
                            quiz.write().advance();
                        },
                        if engine.is_last() { "Get Results" } else { "Next \u{203A}" }
                    }
                }
            }
        }
    }
}
