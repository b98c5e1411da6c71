use dioxus::prelude::*;

use crate::components::{BackButton, Checkbox, PasswordInput, TextInput};
use crate::config::AppConfig;
use crate::core::draft::FormDraft;
use crate::core::estimation::use_estimation;
use crate::i18n::Language;
use crate::shell::{PageKey, ShellAction};
use crate::t;
use crate::views::shell::use_shell;

use super::engine::{Registrar, RegistrationRequest, TERMS_FIELD};

#[component]
pub fn RegisterPage(lang: Language) -> Element {
    let config = use_context::<AppConfig>();
    let mut shell = use_shell();
    let mut estimation = use_estimation(Registrar::new(config.latency.register));
    let draft = use_signal(FormDraft::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match RegistrationRequest::try_from(&*draft.read()) {
            Ok(request) => estimation.submit_with(request, move |_| {
                shell.write().dispatch(ShellAction::RegistrationCompleted);
            }),
            Err(err) => tracing::debug!(%err, "registration submission ignored"),
        }
    };

    let loading = estimation.is_loading();
    let terms_accepted = draft.read().is_checked(TERMS_FIELD);

    rsx! {
        section { class: "page page-auth",
            BackButton { lang }
            form { class: "card form auth", onsubmit: on_submit,
                div { class: "auth__header",
                    h1 { class: "page__title", {t!(lang, "register-title")} }
                    p { class: "page__subtitle", {t!(lang, "register-subtitle")} }
                }
                div { class: "form__row",
                    TextInput {
                        draft,
                        field: "first_name",
                        label: t!(lang, "register-first-name"),
                        placeholder: t!(lang, "register-first-name-placeholder"),
                        required: true,
                    }
                    TextInput {
                        draft,
                        field: "last_name",
                        label: t!(lang, "register-last-name"),
                        placeholder: t!(lang, "register-last-name-placeholder"),
                        required: true,
                    }
                }
                TextInput {
                    draft,
                    field: "email",
                    kind: "email",
                    label: t!(lang, "register-email"),
                    placeholder: t!(lang, "register-email-placeholder"),
                    required: true,
                }
                PasswordInput {
                    lang,
                    draft,
                    field: "password",
                    label: t!(lang, "register-password"),
                    placeholder: t!(lang, "register-password-placeholder"),
                }
                PasswordInput {
                    lang,
                    draft,
                    field: "confirm_password",
                    label: t!(lang, "register-confirm-password"),
                    placeholder: t!(lang, "register-confirm-password-placeholder"),
                }
                Checkbox { draft, field: TERMS_FIELD.to_string(),
                    {t!(lang, "register-terms-prefix")}
                    " "
                    a { class: "link", href: "#", onclick: move |evt| evt.prevent_default(),
                        {t!(lang, "register-terms-link")}
                    }
                    " "
                    {t!(lang, "register-terms-and")}
                    " "
                    a { class: "link", href: "#", onclick: move |evt| evt.prevent_default(),
                        {t!(lang, "register-privacy-link")}
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn--primary btn--block",
                    disabled: loading || !terms_accepted,
                    if loading {
                        {t!(lang, "register-submitting")}
                    } else {
                        {t!(lang, "register-submit")}
                    }
                }
                p { class: "auth__switch",
                    {t!(lang, "register-have-account")}
                    " "
                    button {
                        r#type: "button",
                        class: "link",
                        onclick: move |_| shell.write().dispatch(ShellAction::Navigate(PageKey::Login)),
                        {t!(lang, "register-sign-in")}
                    }
                }
            }
        }
    }
}
