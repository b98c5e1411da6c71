use dioxus::prelude::*;

use crate::components::LoadingIndicator;
use crate::config::AppConfig;
use crate::core::estimation::{use_estimation, Phase};
use crate::i18n::Language;
use crate::shell::ShellAction;
use crate::t;
use crate::views::shell::use_shell;

use super::engine::Activation;

#[component]
pub fn SubscriptionPage(lang: Language) -> Element {
    let config = use_context::<AppConfig>();
    let mut shell = use_shell();
    let mut estimation = use_estimation(Activation::new(config.latency.subscription));

    // Activation starts as soon as the page mounts.
    use_hook(move || estimation.submit(()));

    if estimation.phase() != Phase::Result {
        return rsx! {
            section { class: "page page-subscription",
                LoadingIndicator { label: t!(lang, "subscription-processing") }
            }
        };
    }

    let product = estimation.result().flatten();
    let features = [
        t!(lang, "subscription-feature-prediction"),
        t!(lang, "subscription-feature-trends"),
        t!(lang, "subscription-feature-comparison"),
        t!(lang, "subscription-feature-forecasting"),
        t!(lang, "subscription-feature-valuation"),
    ];

    rsx! {
        section { class: "page page-subscription",
            article { class: "card success",
                div { class: "success__badge", aria_hidden: "true", "✓" }
                h1 { class: "page__title", {t!(lang, "subscription-title")} }
                p { class: "page__subtitle", {t!(lang, "subscription-subtitle")} }
                p { {t!(lang, "subscription-message")} }

                if let Some(product) = product {
                    div { class: "plan",
                        span { class: "plan__label", {t!(lang, "subscription-plan")} }
                        strong { class: "plan__name", "{product.name}" }
                        span { class: "plan__price",
                            {product.price.unwrap_or_default()}
                            " "
                            {product.currency.unwrap_or_default()}
                        }
                        p { class: "plan__description", "{product.description}" }
                    }
                }

                h2 { class: "result__section", {t!(lang, "subscription-features")} }
                ul { class: "feature-checklist",
                    for feature in features {
                        li { "✓ {feature}" }
                    }
                }

                button {
                    r#type: "button",
                    class: "btn btn--primary",
                    onclick: move |_| shell.write().dispatch(ShellAction::Back),
                    {t!(lang, "subscription-back-to-app")}
                }
            }
        }
    }
}
