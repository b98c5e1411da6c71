use dioxus::prelude::*;

use crate::components::{BackButton, PasswordInput, TextInput};
use crate::config::AppConfig;
use crate::core::draft::FormDraft;
use crate::core::estimation::use_estimation;
use crate::i18n::Language;
use crate::shell::{PageKey, ShellAction};
use crate::t;
use crate::views::shell::use_shell;

use super::engine::{Authenticator, LoginRequest};

#[component]
pub fn LoginPage(lang: Language) -> Element {
    let config = use_context::<AppConfig>();
    let mut shell = use_shell();
    let mut estimation = use_estimation(Authenticator::new(config.latency.login));
    let draft = use_signal(FormDraft::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match LoginRequest::try_from(&*draft.read()) {
            Ok(request) => estimation.submit_with(request, move |_| {
                shell.write().dispatch(ShellAction::LoginSucceeded);
            }),
            Err(err) => tracing::debug!(%err, "login submission ignored"),
        }
    };

    let loading = estimation.is_loading();

    rsx! {
        section { class: "page page-auth",
            BackButton { lang }
            form { class: "card form auth", onsubmit: on_submit,
                div { class: "auth__header",
                    h1 { class: "page__title", {t!(lang, "login-title")} }
                    p { class: "page__subtitle", {t!(lang, "login-subtitle")} }
                }
                TextInput {
                    draft,
                    field: "email",
                    kind: "email",
                    label: t!(lang, "login-email"),
                    placeholder: t!(lang, "login-email-placeholder"),
                    required: true,
                }
                PasswordInput {
                    lang,
                    draft,
                    field: "password",
                    label: t!(lang, "login-password"),
                    placeholder: t!(lang, "login-password-placeholder"),
                }
                div { class: "auth__aside",
                    // Inert link.
                    a { class: "link", href: "#", onclick: move |evt| evt.prevent_default(),
                        {t!(lang, "login-forgot")}
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn--primary btn--block",
                    disabled: loading,
                    if loading {
                        {t!(lang, "login-submitting")}
                    } else {
                        {t!(lang, "login-submit")}
                    }
                }
                p { class: "auth__switch",
                    {t!(lang, "login-no-account")}
                    " "
                    button {
                        r#type: "button",
                        class: "link",
                        onclick: move |_| shell.write().dispatch(ShellAction::Navigate(PageKey::Register)),
                        {t!(lang, "login-sign-up")}
                    }
                }
            }
        }
    }
}
