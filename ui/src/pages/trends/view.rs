use dioxus::prelude::*;

use crate::catalog::{MarketSegment, Province, SelectOption, Timeframe};
use crate::components::{choices, LoadingIndicator, MeterBar, PageHeader, SelectInput, StatCard};
use crate::config::AppConfig;
use crate::core::draft::FormDraft;
use crate::core::estimation::{use_estimation, Phase};
use crate::core::format::{format_baht, format_signed_percent, group_thousands};
use crate::i18n::Language;
use crate::t;

use super::engine::{MarketSnapshot, TrendsFeed, TrendsRequest};

#[component]
pub fn TrendsPage(lang: Language) -> Element {
    let config = use_context::<AppConfig>();
    let mut estimation = use_estimation(TrendsFeed::new(config.latency.trends));
    let draft = use_signal(FormDraft::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match TrendsRequest::try_from(&*draft.read()) {
            Ok(request) => estimation.submit(request),
            Err(err) => tracing::debug!(%err, "trends submission ignored"),
        }
    };

    let phase = estimation.phase();

    rsx! {
        section { class: "page page-trends",
            PageHeader {
                lang,
                title: t!(lang, "trends-title"),
                subtitle: t!(lang, "trends-subtitle"),
            }
            {match (phase, estimation.result()) {
                (Phase::Result, Some(snapshot)) => rsx! {
                    TrendsResult { lang, snapshot, on_new_search: move |_| estimation.reset() }
                },
                _ => rsx! {
                    form { class: "card form form--narrow", onsubmit: on_submit,
                        SelectInput {
                            draft,
                            field: "location",
                            label: t!(lang, "field-location"),
                            placeholder: t!(lang, "trends-select-location"),
                            options: choices::<Province>(lang),
                        }
                        SelectInput {
                            draft,
                            field: "property_type",
                            label: t!(lang, "field-property-type"),
                            placeholder: t!(lang, "trends-select-property-type"),
                            options: choices::<MarketSegment>(lang),
                        }
                        SelectInput {
                            draft,
                            field: "timeframe",
                            label: t!(lang, "trends-select-timeframe"),
                            placeholder: t!(lang, "trends-select-timeframe"),
                            options: choices::<Timeframe>(lang),
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn--primary btn--block",
                            disabled: phase == Phase::Loading,
                            if phase == Phase::Loading {
                                {t!(lang, "common-loading")}
                            } else {
                                {t!(lang, "trends-submit")}
                            }
                        }
                    }
                    if phase == Phase::Loading {
                        LoadingIndicator { label: t!(lang, "common-loading") }
                    }
                },
            }}
        }
    }
}

#[component]
fn TrendsResult(lang: Language, snapshot: MarketSnapshot, on_new_search: EventHandler<()>) -> Element {
    let peak = snapshot
        .monthly
        .iter()
        .map(|point| point.average_price)
        .fold(0.0_f64, f64::max);

    rsx! {
        div { class: "result-stack",
            article { class: "card result",
                h2 { class: "card__title", {t!(lang, "trends-market-overview")} }
                div { class: "stat-grid",
                    StatCard { label: t!(lang, "trends-price-index"), value: format!("{:.1}", snapshot.price_index) }
                    StatCard { label: t!(lang, "trends-average-price"), value: format_baht(snapshot.average_price) }
                    StatCard {
                        label: t!(lang, "trends-total-transactions"),
                        value: group_thousands(i64::from(snapshot.transactions)),
                    }
                    StatCard {
                        label: t!(lang, "trends-price-change"),
                        value: format_signed_percent(snapshot.price_change),
                        modifier: "stat--positive",
                    }
                }
            }

            article { class: "card result",
                h3 { class: "result__section", {t!(lang, "trends-monthly")} }
                ul { class: "month-list",
                    for point in snapshot.monthly {
                        li { key: "{point.month.value()}", class: "month-list__item",
                            span { class: "month-list__month", {point.month.label(lang)} }
                            span { class: "month-list__price", {format_baht(point.average_price)} }
                            span { class: "month-list__growth text--positive",
                                {format_signed_percent(snapshot.growth_since_start(&point))}
                            }
                            span { class: "month-list__count",
                                {t!(lang, "trends-transactions", count = point.transactions)}
                            }
                            MeterBar { percent: point.average_price / peak * 100.0, tone: "positive" }
                        }
                    }
                }
            }

            article { class: "card result",
                h3 { class: "result__section", {t!(lang, "trends-top-areas")} }
                ul { class: "area-list",
                    for area in snapshot.top_areas {
                        li { key: "{area.name}", class: "area-list__item",
                            span { class: "area-list__name", "{area.name}" }
                            span { class: "area-list__price", {format_baht(area.average_price)} }
                            span { class: "area-list__change text--positive",
                                {format_signed_percent(area.change)}
                            }
                        }
                    }
                }
            }

            button {
                r#type: "button",
                class: "btn btn--secondary",
                onclick: move |_| on_new_search.call(()),
                {t!(lang, "trends-new-search")}
            }
        }
    }
}
