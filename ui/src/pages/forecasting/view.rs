use dioxus::prelude::*;

use crate::catalog::{ForecastPeriod, PropertyType, Province, SelectOption};
use crate::components::{
    choices, LoadingIndicator, MeterBar, NumberInput, PageHeader, ResultPlaceholder, SelectInput,
    StatCard,
};
use crate::config::AppConfig;
use crate::core::draft::FormDraft;
use crate::core::estimation::{use_estimation, Phase};
use crate::core::format::{format_baht, format_percent, format_signed_percent};
use crate::i18n::Language;
use crate::t;

use super::engine::{Forecast, ForecastRequest, Forecaster};

#[component]
pub fn ForecastingPage(lang: Language) -> Element {
    let config = use_context::<AppConfig>();
    let mut estimation = use_estimation(Forecaster::new(config.latency.forecasting));
    let draft = use_signal(FormDraft::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match ForecastRequest::try_from(&*draft.read()) {
            Ok(request) => estimation.submit(request),
            Err(err) => tracing::debug!(%err, "forecast submission ignored"),
        }
    };

    let loading = estimation.is_loading();

    rsx! {
        section { class: "page page-forecasting",
            PageHeader {
                lang,
                title: t!(lang, "forecasting-title"),
                subtitle: t!(lang, "forecasting-subtitle"),
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
                    NumberInput {
                        draft,
                        field: "current_price",
                        label: t!(lang, "field-current-price"),
                        placeholder: "5000000",
                        required: true,
                    }
                    SelectInput {
                        draft,
                        field: "forecast_period",
                        label: t!(lang, "field-forecast-period"),
                        placeholder: t!(lang, "forecasting-select-period"),
                        options: choices::<ForecastPeriod>(lang),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary btn--block",
                        disabled: loading,
                        if loading {
                            {t!(lang, "forecasting-generating")}
                        } else {
                            {t!(lang, "forecasting-submit")}
                        }
                    }
                }

                {match (estimation.phase(), estimation.result()) {
                    (Phase::Loading, _) => rsx! {
                        LoadingIndicator { label: t!(lang, "forecasting-generating") }
                    },
                    (Phase::Result, Some(forecast)) => rsx! {
                        ForecastResult { lang, forecast }
                    },
                    _ => rsx! {
                        ResultPlaceholder { text: t!(lang, "forecasting-placeholder") }
                    },
                }}
            }
        }
    }
}

#[component]
fn ForecastResult(lang: Language, forecast: Forecast) -> Element {
    let conditions = forecast.conditions;

    rsx! {
        div { class: "result-stack",
            article { class: "card result",
                h2 { class: "card__title", {t!(lang, "forecasting-results")} }
                h3 { class: "result__section", {t!(lang, "forecasting-price-predictions")} }
                ul { class: "horizon-list",
                    for prediction in forecast.predictions.iter().copied() {
                        li {
                            key: "{prediction.horizon.value()}",
                            class: "horizon-list__item",
                            div { class: "result__row",
                                span { class: "horizon-list__label", {prediction.horizon.label(lang)} }
                                strong { {format_baht(prediction.price)} }
                            }
                            div { class: "result__row result__row--muted",
                                span {
                                    class: if prediction.change >= 0.0 { "text--positive" } else { "text--negative" },
                                    {format_signed_percent(prediction.change)}
                                }
                                span {
                                    {t!(lang, "forecasting-confidence", percent = format!("{:.0}", prediction.confidence))}
                                }
                            }
                            MeterBar { percent: prediction.confidence, tone: "positive" }
                        }
                    }
                }
            }

            article { class: "card result",
                h3 { class: "result__section", {t!(lang, "forecasting-market-factors")} }
                ul { class: "factor-list",
                    for factor in forecast.factors.iter().copied() {
                        li { key: "{factor.factor.value()}", class: "factor-list__item",
                            span { {factor.factor.label(lang)} }
                            span { class: "factor-list__value text--{factor.trend.css_modifier()}",
                                "{format_percent(factor.impact, 1)}"
                            }
                            MeterBar { percent: factor.impact, tone: factor.trend.css_modifier() }
                        }
                    }
                }
            }

            article { class: "card result",
                h3 { class: "result__section", {t!(lang, "forecasting-market-conditions")} }
                div { class: "stat-grid",
                    StatCard {
                        label: t!(lang, "forecasting-sentiment"),
                        value: conditions.sentiment.label(lang),
                        modifier: format!("stat--{}", conditions.sentiment.value()),
                    }
                    StatCard {
                        label: t!(lang, "forecasting-volatility"),
                        value: format_percent(conditions.volatility, 1),
                    }
                    StatCard {
                        label: t!(lang, "forecasting-liquidity"),
                        value: format_percent(conditions.liquidity, 1),
                    }
                }
            }

            article { class: "card result result--insight",
                h3 { class: "result__section", {t!(lang, "forecasting-ai-insights")} }
                p { {t!(lang, "forecasting-insight-outlook")} }
                p { {t!(lang, "forecasting-insight-watch")} }
            }
        }
    }
}
