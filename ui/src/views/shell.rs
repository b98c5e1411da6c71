//! Root component: owns the [`AppShell`] signal and mounts the visible page.

use dioxus::prelude::*;

use crate::components::AppNavbar;
use crate::config::AppConfig;
use crate::core::platform::Platform;
use crate::i18n::detect_language;
use crate::pages::{
    ComparisonPage, ConsultantPage, ForecastingPage, LoginPage, MapPage, PredictionPage,
    RegisterPage, SubscriptionPage, TrendsPage, ValuationPage,
};
use crate::shell::{AppShell, PageKey};

use super::home::Home;

/// Application stylesheet, inlined so every launcher renders identically.
pub const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// The shell store provided by [`App`].
pub fn use_shell() -> Signal<AppShell> {
    use_context::<Signal<AppShell>>()
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(AppConfig::load_or_default);
    let shell = use_context_provider(|| {
        let language = config.default_language.unwrap_or_else(detect_language);
        tracing::info!(platform = %Platform::current(), %language, "ThaiPropertyAI starting");
        Signal::new(AppShell::new(language))
    });

    let state = shell.read().clone();
    let lang = state.language;
    let page = state.visible_page();
    let title = crate::t!(lang, "brand-name");

    rsx! {
        document::Style { "{MAIN_CSS}" }
        document::Title { "{title}" }
        div { class: "app", lang: lang.tag(),
            AppNavbar {}
            main { class: "app__main", "data-page": page.as_str(),
                {match page {
                    PageKey::Home => rsx! { Home { lang } },
                    PageKey::Prediction => rsx! { PredictionPage { lang } },
                    PageKey::Comparison => rsx! { ComparisonPage { lang } },
                    PageKey::Trends => rsx! { TrendsPage { lang } },
                    PageKey::Login => rsx! { LoginPage { lang } },
                    PageKey::Register => rsx! { RegisterPage { lang } },
                    PageKey::Valuation => rsx! { ValuationPage { lang } },
                    PageKey::Forecasting => rsx! { ForecastingPage { lang } },
                    PageKey::Map => rsx! { MapPage { lang } },
                    PageKey::Consultant => rsx! { ConsultantPage { lang } },
                    PageKey::Subscription => rsx! { SubscriptionPage { lang } },
                }}
            }
        }
    }
}
