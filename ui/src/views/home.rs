use dioxus::prelude::*;

use crate::i18n::Language;
use crate::shell::{PageKey, ShellAction};
use crate::t;

use super::shell::use_shell;

#[component]
pub fn Home(lang: Language) -> Element {
    let mut shell = use_shell();
    let mut go = move |page: PageKey| shell.write().dispatch(ShellAction::Navigate(page));

    let destinations = [
        (PageKey::Prediction, "📈", t!(lang, "home-nav-prediction")),
        (PageKey::Forecasting, "🔮", t!(lang, "home-nav-forecasting")),
        (PageKey::Trends, "📊", t!(lang, "home-nav-trends")),
        (PageKey::Comparison, "⚖️", t!(lang, "home-nav-compare")),
        (PageKey::Valuation, "🏷️", t!(lang, "home-nav-valuation")),
        (PageKey::Map, "🗺️", t!(lang, "home-nav-map")),
        (PageKey::Consultant, "💬", t!(lang, "home-nav-consultant")),
    ];
    let features = [
        ("🧠", t!(lang, "home-feature-ai-title"), t!(lang, "home-feature-ai-desc")),
        ("🗂️", t!(lang, "home-feature-data-title"), t!(lang, "home-feature-data-desc")),
        ("🎯", t!(lang, "home-feature-accuracy-title"), t!(lang, "home-feature-accuracy-desc")),
        ("🔭", t!(lang, "home-feature-forecast-title"), t!(lang, "home-feature-forecast-desc")),
    ];

    rsx! {
        section { class: "page page-home",
            div { class: "hero",
                h1 { class: "hero__headline", {t!(lang, "home-headline")} }
                p { class: "hero__subheadline", {t!(lang, "home-subheadline")} }
                div { class: "hero__actions",
                    button {
                        r#type: "button",
                        class: "btn btn--primary btn--large",
                        onclick: move |_| go(PageKey::Prediction),
                        {t!(lang, "home-cta")}
                    }
                    a { class: "btn btn--ghost btn--large", href: "#features",
                        {t!(lang, "home-learn-more")}
                    }
                }
            }

            nav { class: "home-nav",
                for (page, icon, label) in destinations {
                    button {
                        key: "{page.as_str()}",
                        r#type: "button",
                        class: "home-nav__item",
                        onclick: move |_| go(page),
                        span { class: "home-nav__icon", aria_hidden: "true", "{icon}" }
                        span { class: "home-nav__label", "{label}" }
                        if page.requires_auth() {
                            span { class: "home-nav__lock", aria_hidden: "true", "🔒" }
                        }
                    }
                }
            }

            div { id: "features", class: "features",
                h2 { class: "features__title", {t!(lang, "home-features-title")} }
                div { class: "features__grid",
                    for (icon, title, desc) in features {
                        article { key: "{icon}", class: "feature-card",
                            div { class: "feature-card__icon", aria_hidden: "true", "{icon}" }
                            h3 { class: "feature-card__title", "{title}" }
                            p { class: "feature-card__desc", "{desc}" }
                        }
                    }
                }
            }

            footer { class: "footer",
                span { class: "footer__copyright", {t!(lang, "home-footer-copyright")} }
                button {
                    r#type: "button",
                    class: "footer__premium",
                    onclick: move |_| go(PageKey::Subscription),
                    "⭐ "
                    {t!(lang, "home-footer-premium")}
                }
            }
        }
    }
}
