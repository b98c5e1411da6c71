use dioxus::prelude::*;

use crate::catalog::{PropertyType, Province};
use crate::components::{
    choices, LoadingIndicator, MeterBar, NumberInput, PageHeader, ResultPlaceholder, SelectInput,
};
use crate::config::AppConfig;
use crate::core::draft::FormDraft;
use crate::core::estimation::{use_estimation, Phase};
use crate::core::format::{format_baht, format_percent};
use crate::i18n::Language;
use crate::t;

use super::engine::{PricePrediction, PricePredictor, PredictionRequest};

#[component]
pub fn PredictionPage(lang: Language) -> Element {
    let config = use_context::<AppConfig>();
    let mut estimation = use_estimation(PricePredictor::new(config.latency.prediction));
    let draft = use_signal(FormDraft::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match PredictionRequest::try_from(&*draft.read()) {
            Ok(request) => estimation.submit(request),
            Err(err) => tracing::debug!(%err, "prediction submission ignored"),
        }
    };

    let loading = estimation.is_loading();

    rsx! {
        section { class: "page page-prediction",
            PageHeader {
                lang,
                title: t!(lang, "prediction-title"),
                subtitle: t!(lang, "prediction-subtitle"),
            }
            div { class: "page__columns",
                form { class: "card form", onsubmit: on_submit,
                    h2 { class: "card__title", {t!(lang, "section-property-details")} }
                    SelectInput {
                        draft,
                        field: "property_type",
                        label: t!(lang, "field-property-type"),
                        placeholder: t!(lang, "common-select-property-type"),
                        options: choices::<PropertyType>(lang),
                    }
                    SelectInput {
                        draft,
                        field: "location",
                        label: t!(lang, "field-location"),
                        placeholder: t!(lang, "common-select-location"),
                        options: choices::<Province>(lang),
                    }
                    NumberInput {
                        draft,
                        field: "area",
                        label: t!(lang, "field-area"),
                        placeholder: t!(lang, "common-example-area"),
                        required: true,
                    }
                    div { class: "form__row",
                        NumberInput { draft, field: "bedrooms", label: t!(lang, "field-bedrooms"), required: true }
                        NumberInput { draft, field: "bathrooms", label: t!(lang, "field-bathrooms"), required: true }
                    }
                    div { class: "form__row",
                        NumberInput { draft, field: "parking", label: t!(lang, "field-parking") }
                        NumberInput { draft, field: "age", label: t!(lang, "field-age") }
                        NumberInput { draft, field: "floor", label: t!(lang, "field-floor") }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary btn--block",
                        disabled: loading,
                        if loading {
                            {t!(lang, "common-analyzing")}
                        } else {
                            {t!(lang, "prediction-submit")}
                        }
                    }
                }

                {match (estimation.phase(), estimation.result()) {
                    (Phase::Loading, _) => rsx! {
                        LoadingIndicator { label: t!(lang, "common-analyzing") }
                    },
                    (Phase::Result, Some(prediction)) => rsx! {
                        PredictionResult { lang, prediction }
                    },
                    _ => rsx! {
                        ResultPlaceholder { text: t!(lang, "prediction-placeholder") }
                    },
                }}
            }
        }
    }
}

#[component]
fn PredictionResult(lang: Language, prediction: PricePrediction) -> Element {
    let range = t!(
        lang,
        "prediction-price-range",
        min = format_baht(prediction.price_min),
        max = format_baht(prediction.price_max)
    );
    let factors = [
        (t!(lang, "prediction-factor-location"), prediction.factors.location),
        (t!(lang, "prediction-factor-size"), prediction.factors.size),
        (t!(lang, "prediction-factor-age"), prediction.factors.age),
        (t!(lang, "prediction-factor-amenities"), prediction.factors.amenities),
    ];

    rsx! {
        article { class: "card result",
            h2 { class: "card__title", {t!(lang, "prediction-result")} }
            div { class: "result__headline",
                span { class: "result__label", {t!(lang, "prediction-estimated-price")} }
                strong { class: "result__value", {format_baht(prediction.estimated_price)} }
                span { class: "result__note", "{range}" }
            }
            div { class: "result__row",
                span { {t!(lang, "prediction-confidence")} }
                strong { "{format_percent(prediction.confidence, 1)}" }
            }
            MeterBar { percent: prediction.confidence, tone: "positive" }

            h3 { class: "result__section", {t!(lang, "prediction-factors")} }
            ul { class: "factor-list",
                for (label, weight) in factors {
                    li { class: "factor-list__item",
                        span { "{label}" }
                        span { class: "factor-list__value", "{format_percent(weight, 1)}" }
                        MeterBar { percent: weight }
                    }
                }
            }
        }
    }
}
