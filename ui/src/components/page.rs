use dioxus::prelude::*;

use crate::i18n::Language;
use crate::shell::ShellAction;
use crate::t;
use crate::views::shell::use_shell;

#[component]
pub fn BackButton(lang: Language) -> Element {
    let mut shell = use_shell();

    rsx! {
        button {
            r#type: "button",
            class: "back-button",
            onclick: move |_| shell.write().dispatch(ShellAction::Back),
            "← "
            {t!(lang, "nav-back")}
        }
    }
}

/// Back button, page title and subtitle.
#[component]
pub fn PageHeader(lang: Language, title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "page__header",
            BackButton { lang }
            h1 { class: "page__title", "{title}" }
            p { class: "page__subtitle", "{subtitle}" }
        }
    }
}

#[component]
pub fn LoadingIndicator(label: String) -> Element {
    rsx! {
        div { class: "loading", role: "status", aria_live: "polite",
            span { class: "loading__spinner", aria_hidden: "true" }
            span { class: "loading__label", "{label}" }
        }
    }
}

/// Shown in the result column before the first submission.
#[component]
pub fn ResultPlaceholder(text: String) -> Element {
    rsx! {
        div { class: "card card--placeholder",
            p { "{text}" }
        }
    }
}

#[component]
pub fn StatCard(label: String, value: String, #[props(default)] modifier: String) -> Element {
    rsx! {
        div { class: "stat {modifier}",
            span { class: "stat__label", "{label}" }
            strong { class: "stat__value", "{value}" }
        }
    }
}

/// Horizontal bar filled to `percent` (0–100).
#[component]
pub fn MeterBar(percent: f64, #[props(default = "neutral")] tone: &'static str) -> Element {
    let width = percent.clamp(0.0, 100.0);

    rsx! {
        div { class: "meter",
            div { class: "meter__fill meter__fill--{tone}", style: "width: {width:.1}%" }
        }
    }
}
