//! Draft-bound form controls.
//!
//! Each control reads and writes one field of a page's [`FormDraft`] signal;
//! the draft, not the DOM, is the source of truth.

use dioxus::prelude::*;

use crate::catalog::SelectOption;
use crate::core::draft::{choice_field, FormDraft};
use crate::i18n::Language;
use crate::t;

/// `(value, label)` pairs for every option of `T`, labelled in `lang`.
pub fn choices<T: SelectOption>(lang: Language) -> Vec<(&'static str, String)> {
    T::ALL
        .iter()
        .map(|option| (option.value(), option.label(lang)))
        .collect()
}

#[component]
pub fn TextInput(
    draft: Signal<FormDraft>,
    field: &'static str,
    label: String,
    #[props(default)] placeholder: String,
    #[props(default = "text")] kind: &'static str,
    #[props(default)] required: bool,
) -> Element {
    let mut draft = draft;
    let value = draft.read().get(field).to_string();

    rsx! {
        label { class: "field",
            span { class: "field__label", "{label}" }
            input {
                class: "field__input",
                name: field,
                r#type: kind,
                placeholder: "{placeholder}",
                required,
                value: "{value}",
                oninput: move |evt: FormEvent| draft.write().set(field, evt.value()),
            }
        }
    }
}

#[component]
pub fn NumberInput(
    draft: Signal<FormDraft>,
    field: &'static str,
    label: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
) -> Element {
    let mut draft = draft;
    let value = draft.read().get(field).to_string();

    rsx! {
        label { class: "field",
            span { class: "field__label", "{label}" }
            input {
                class: "field__input",
                name: field,
                r#type: "number",
                step: "any",
                placeholder: "{placeholder}",
                required,
                value: "{value}",
                oninput: move |evt: FormEvent| draft.write().set(field, evt.value()),
            }
        }
    }
}

#[component]
pub fn SelectInput(
    draft: Signal<FormDraft>,
    field: &'static str,
    label: String,
    placeholder: String,
    options: Vec<(&'static str, String)>,
    #[props(default = true)] required: bool,
) -> Element {
    let mut draft = draft;
    let selected = draft.read().get(field).to_string();

    rsx! {
        label { class: "field",
            span { class: "field__label", "{label}" }
            select {
                class: "field__input field__input--select",
                name: field,
                required,
                value: "{selected}",
                onchange: move |evt: FormEvent| draft.write().set(field, evt.value()),
                option { value: "", disabled: true, selected: selected.is_empty(), "{placeholder}" }
                for (value, text) in options {
                    option { key: "{value}", value, selected: selected == value, "{text}" }
                }
            }
        }
    }
}

/// Password field with a show/hide toggle.
#[component]
pub fn PasswordInput(
    lang: Language,
    draft: Signal<FormDraft>,
    field: &'static str,
    label: String,
    placeholder: String,
) -> Element {
    let mut draft = draft;
    let mut visible = use_signal(|| false);
    let value = draft.read().get(field).to_string();
    let toggle_label = if visible() {
        t!(lang, "password-hide")
    } else {
        t!(lang, "password-show")
    };

    rsx! {
        label { class: "field",
            span { class: "field__label", "{label}" }
            span { class: "field__password",
                input {
                    class: "field__input",
                    name: field,
                    r#type: if visible() { "text" } else { "password" },
                    placeholder: "{placeholder}",
                    required: true,
                    value: "{value}",
                    oninput: move |evt: FormEvent| draft.write().set(field, evt.value()),
                }
                button {
                    r#type: "button",
                    class: "field__reveal",
                    aria_label: "{toggle_label}",
                    title: "{toggle_label}",
                    onclick: move |_| visible.toggle(),
                    if visible() { "🙈" } else { "👁" }
                }
            }
        }
    }
}

#[component]
pub fn Checkbox(draft: Signal<FormDraft>, field: String, children: Element) -> Element {
    let mut draft = draft;
    let checked = draft.read().is_checked(&field);

    rsx! {
        label { class: "checkbox",
            input {
                r#type: "checkbox",
                name: "{field}",
                checked,
                onchange: move |evt: FormEvent| draft.write().set_checked(&field, evt.checked()),
            }
            span { class: "checkbox__label", {children} }
        }
    }
}

/// `(draft key, label)` pairs for a checkbox group over `T`.
pub fn checkbox_choices<T: SelectOption>(group: &str, lang: Language) -> Vec<(String, String)> {
    T::ALL
        .iter()
        .map(|option| (choice_field(group, *option), option.label(lang)))
        .collect()
}

#[component]
pub fn CheckboxGroup(
    draft: Signal<FormDraft>,
    label: String,
    options: Vec<(String, String)>,
) -> Element {
    rsx! {
        fieldset { class: "field field--group",
            legend { class: "field__label", "{label}" }
            div { class: "checkbox-grid",
                for (field, text) in options {
                    Checkbox { key: "{field}", draft, field: field.clone(), "{text}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;

    #[component]
    fn AreaField() -> Element {
        let draft = use_signal(FormDraft::new);
        rsx! {
            NumberInput { draft, field: "area", label: "Area".to_string(), required: true }
        }
    }

    #[test]
    fn number_input_constrains_only_type_and_requiredness() {
        let mut dom = VirtualDom::new(AreaField);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"type="number""#), "{html}");
        assert!(html.contains("required"), "{html}");
        assert!(!html.contains("min="), "negative numbers must stay submittable: {html}");
        assert!(!html.contains("max="), "{html}");
    }
}
