use dioxus::prelude::*;
use guidance::responder::{self, QUICK_QUESTIONS};
use guidance::{Conversation, Sender, TaskHandle};

use crate::{scheduler, use_config, use_translate};

#[component]
pub fn AssistantView() -> Element {
    let config = use_config();
    let t = use_translate();
    let mut conversation = use_signal(Conversation::new);
    let mut draft = use_signal(String::new);
    let mut pending = use_signal(Vec::<TaskHandle>::new);

    // Replies still waiting when the panel closes are dropped.
    use_drop(move || {
        for handle in pending.peek().iter() {
            handle.cancel();
        }
    });

    let reply_delay = config.reply_delay();
    let mut send = move |text: String| {
        let Some(question) = conversation.write().send(&text) else {
            return;
        };
        draft.set(String::new());
        let (handle, reply) = scheduler(reply_delay).submit(move || responder::respond(&question));
        pending.write().push(handle.clone());
        spawn(async move {
            match reply.await {
                Some(answer) => conversation.write().receive(answer),
                None => conversation.write().abandon_reply(),
            }
            pending.write().retain(|h| !h.same_task(&handle));
        });
    };

    let title = t("ai_assistant");
    let messages = conversation.read().messages().to_vec();
    let typing = conversation.read().is_typing();

    rsx! {
        div {
            class: "view-page",
            h1 { class: "view-title", "{title}" }
            p { class: "view-muted", "Get personalized career guidance powered by AI" }

            div {
                class: "card chat",
                div {
                    class: "chat-log",
                    for message in messages {
                        div {
                            key: "{message.id}",
                            class: if message.sender == Sender::User { "chat-message from-user" } else { "chat-message from-assistant" },
                            p { class: "chat-text", "{message.text}" }
                            span { class: "chat-time", "{message.time_label()}" }
                        }
                    }
                    if typing {
                        div { class: "chat-message from-assistant typing", "\u{2022}\u{2022}\u{2022}" }
                    }
                }

                div {
                    class: "chat-quick",
                    span { class: "field-label", "Quick Questions:" }
                    for q in QUICK_QUESTIONS.iter().copied() {
                        button {
                            key: "{q}",
                            class: "chip",
                            onclick: move |_| draft.set(q.to_string()),
                            "{q}"
                        }
                    }
                }

                form {
                    class: "chat-input",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        send(draft());
                    },
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Ask me anything about careers, colleges, or scholarships...",
                        value: draft(),
                        oninput: move |evt: FormEvent| draft.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: draft.read().trim().is_empty(),
                        "Send"
                    }
                }
            }
        }
    }
}
