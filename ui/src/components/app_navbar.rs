//! Application header: brand, language toggles, auth buttons and the
//! collapsible mobile menu.
//!
//! Every control dispatches a [`ShellAction`] into the shared shell signal;
//! the header keeps no state of its own apart from whether the mobile menu is
//! open.

use dioxus::prelude::*;

use crate::i18n::Language;
use crate::shell::{PageKey, ShellAction};
use crate::t;
use crate::views::shell::use_shell;

#[component]
pub fn AppNavbar() -> Element {
    let mut shell = use_shell();
    let mut menu_open = use_signal(|| false);
    let lang = shell.read().language;

    let mut act = move |action: ShellAction| {
        shell.write().dispatch(action);
        menu_open.set(false);
    };

    let menu_class = if menu_open() {
        "navbar__menu navbar__menu--open"
    } else {
        "navbar__menu"
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                button {
                    r#type: "button",
                    class: "navbar__brand",
                    onclick: move |_| act(ShellAction::Navigate(PageKey::Home)),
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", {t!(lang, "brand-name")} }
                }

                div { class: "navbar__actions",
                    div {
                        class: "navbar__locale",
                        role: "group",
                        aria_label: t!(lang, "header-language-label"),
                        for option in Language::ALL {
                            button {
                                key: "{option.tag()}",
                                r#type: "button",
                                class: if option == lang { "navbar__lang navbar__lang--active" } else { "navbar__lang" },
                                aria_pressed: option == lang,
                                onclick: move |_| act(ShellAction::SetLanguage(option)),
                                "{option.short_label()}"
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        class: "btn btn--ghost",
                        onclick: move |_| act(ShellAction::Navigate(PageKey::Login)),
                        {t!(lang, "header-login")}
                    }
                    button {
                        r#type: "button",
                        class: "btn btn--primary",
                        onclick: move |_| act(ShellAction::Navigate(PageKey::Register)),
                        {t!(lang, "header-register")}
                    }
                }

                button {
                    r#type: "button",
                    class: "navbar__toggle",
                    aria_label: t!(lang, "header-menu-toggle"),
                    aria_expanded: menu_open(),
                    onclick: move |_| menu_open.toggle(),
                    if menu_open() { "✕" } else { "☰" }
                }
            }

            nav { class: "{menu_class}",
                for option in Language::ALL {
                    button {
                        key: "{option.tag()}",
                        r#type: "button",
                        class: if option == lang { "navbar__menu-item navbar__menu-item--active" } else { "navbar__menu-item" },
                        onclick: move |_| act(ShellAction::SetLanguage(option)),
                        "{option.native_name()}"
                    }
                }
                button {
                    r#type: "button",
                    class: "navbar__menu-item",
                    onclick: move |_| act(ShellAction::Navigate(PageKey::Login)),
                    {t!(lang, "header-login")}
                }
                button {
                    r#type: "button",
                    class: "navbar__menu-item",
                    onclick: move |_| act(ShellAction::Navigate(PageKey::Register)),
                    {t!(lang, "header-register")}
                }
            }
        }
    }
}
