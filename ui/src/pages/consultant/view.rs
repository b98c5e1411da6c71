use dioxus::prelude::*;

use crate::components::PageHeader;
use crate::config::AppConfig;
use crate::core::estimation::use_estimation;
use crate::core::timing::local_now;
use crate::i18n::Language;
use crate::t;

use super::engine::{Consultant, Suggestion, Transcript};

#[component]
pub fn ConsultantPage(lang: Language) -> Element {
    let config = use_context::<AppConfig>();
    let mut estimation = use_estimation(Consultant::new(config.latency.consultant));
    let mut transcript = use_signal(|| Transcript::new(local_now()));
    let mut input = use_signal(String::new);

    let typing = estimation.is_loading();

    let mut send = move || {
        if estimation.is_loading() {
            return;
        }
        let text = input.read().clone();
        let Some(question) = transcript.write().push_user(&text, local_now()) else {
            return;
        };
        input.set(String::new());
        estimation.submit_with(question, move |topic| {
            transcript.write().push_reply(*topic, local_now());
        });
    };

    let log = transcript.read().clone();

    rsx! {
        section { class: "page page-consultant",
            PageHeader {
                lang,
                title: t!(lang, "consultant-title"),
                subtitle: t!(lang, "consultant-subtitle"),
            }
            div { class: "card chat",
                div { class: "chat__log", role: "log", aria_live: "polite",
                    for message in log.messages().iter() {
                        div {
                            key: "{message.id}",
                            class: if message.is_from_user() { "chat__message chat__message--user" } else { "chat__message chat__message--bot" },
                            div { class: "chat__avatar", aria_hidden: "true",
                                if message.is_from_user() { "👤" } else { "🤖" }
                            }
                            div { class: "chat__bubble",
                                p { class: "chat__text", {message.text(lang)} }
                                span { class: "chat__time", {message.clock()} }
                            }
                        }
                    }
                    if typing {
                        div { class: "chat__message chat__message--bot chat__message--typing",
                            div { class: "chat__avatar", aria_hidden: "true", "🤖" }
                            div { class: "chat__bubble",
                                span { class: "chat__dots", aria_hidden: "true", "• • •" }
                                span { class: "visually-hidden", {t!(lang, "consultant-typing")} }
                            }
                        }
                    }
                }

                if log.shows_suggestions() {
                    div { class: "chat__suggestions",
                        h2 { class: "chat__suggestions-title", {t!(lang, "consultant-suggestions-title")} }
                        div { class: "chat__suggestion-list",
                            for suggestion in Suggestion::ALL {
                                button {
                                    key: "{suggestion:?}",
                                    r#type: "button",
                                    class: "chat__suggestion",
                                    onclick: move |_| input.set(suggestion.text(lang)),
                                    {suggestion.text(lang)}
                                }
                            }
                        }
                    }
                }

                form {
                    class: "chat__composer",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        send();
                    },
                    input {
                        class: "field__input chat__input",
                        r#type: "text",
                        placeholder: t!(lang, "consultant-placeholder"),
                        value: "{input}",
                        oninput: move |evt: FormEvent| input.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
                                evt.prevent_default();
                                send();
                            }
                        },
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary",
                        disabled: typing || input.read().trim().is_empty(),
                        {t!(lang, "consultant-send")}
                    }
                }
            }
        }
    }
}
