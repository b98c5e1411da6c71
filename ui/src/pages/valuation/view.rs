use dioxus::prelude::*;

use crate::catalog::{Amenity, Condition, PropertyType, Province, SelectOption};
use crate::components::{
    checkbox_choices, choices, CheckboxGroup, LoadingIndicator, MeterBar, NumberInput, PageHeader,
    ResultPlaceholder, SelectInput,
};
use crate::config::AppConfig;
use crate::core::draft::FormDraft;
use crate::core::estimation::{use_estimation, Phase};
use crate::core::format::format_baht;
use crate::i18n::Language;
use crate::t;

use super::engine::{Recommendation, ScoreBand, Valuation, ValuationRequest, Valuer, AMENITY_GROUP};

#[component]
pub fn ValuationPage(lang: Language) -> Element {
    let config = use_context::<AppConfig>();
    let mut estimation = use_estimation(Valuer::new(config.latency.valuation));
    let draft = use_signal(FormDraft::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match ValuationRequest::try_from(&*draft.read()) {
            Ok(request) => estimation.submit(request),
            Err(err) => tracing::debug!(%err, "valuation submission ignored"),
        }
    };

    let loading = estimation.is_loading();

    rsx! {
        section { class: "page page-valuation",
            PageHeader {
                lang,
                title: t!(lang, "valuation-title"),
                subtitle: t!(lang, "valuation-subtitle"),
            }
            div { class: "page__columns",
                form { class: "card form", onsubmit: on_submit,
                    h2 { class: "card__title", {t!(lang, "section-property-details")} }
                    div { class: "form__row",
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
                    }
                    div { class: "form__row",
                        NumberInput {
                            draft,
                            field: "area",
                            label: t!(lang, "field-area"),
                            placeholder: t!(lang, "common-example-area"),
                            required: true,
                        }
                        NumberInput { draft, field: "bedrooms", label: t!(lang, "field-bedrooms"), required: true }
                        NumberInput { draft, field: "bathrooms", label: t!(lang, "field-bathrooms"), required: true }
                    }
                    div { class: "form__row",
                        NumberInput { draft, field: "parking", label: t!(lang, "field-parking") }
                        NumberInput { draft, field: "age", label: t!(lang, "field-age") }
                        NumberInput { draft, field: "floor", label: t!(lang, "field-floor") }
                    }
                    SelectInput {
                        draft,
                        field: "condition",
                        label: t!(lang, "field-condition"),
                        placeholder: t!(lang, "valuation-select-condition"),
                        options: choices::<Condition>(lang),
                    }
                    CheckboxGroup {
                        draft,
                        label: t!(lang, "field-amenities"),
                        options: checkbox_choices::<Amenity>(AMENITY_GROUP, lang),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary btn--block",
                        disabled: loading,
                        if loading {
                            {t!(lang, "common-analyzing")}
                        } else {
                            {t!(lang, "valuation-submit")}
                        }
                    }
                }

                {match (estimation.phase(), estimation.result()) {
                    (Phase::Loading, _) => rsx! {
                        LoadingIndicator { label: t!(lang, "common-analyzing") }
                    },
                    (Phase::Result, Some(valuation)) => rsx! {
                        ValuationResult { lang, valuation }
                    },
                    _ => rsx! {
                        ResultPlaceholder { text: t!(lang, "valuation-placeholder") }
                    },
                }}
            }
        }
    }
}

#[component]
fn ValuationResult(lang: Language, valuation: Valuation) -> Element {
    let rent = t!(lang, "valuation-rent-value", amount = format_baht(valuation.rent_value));
    let appreciation = t!(
        lang,
        "valuation-appreciation-annual",
        percent = format!("{:.1}", valuation.appreciation)
    );
    let (advice, advice_class) = match valuation.recommendation {
        Recommendation::Buy => (t!(lang, "valuation-recommend-buy"), "advice advice--buy"),
        Recommendation::Hold => (t!(lang, "valuation-recommend-hold"), "advice advice--hold"),
    };

    rsx! {
        article { class: "card result",
            h2 { class: "card__title", {t!(lang, "valuation-result")} }
            div { class: "result__headline",
                span { class: "result__label", {t!(lang, "valuation-market-value")} }
                strong { class: "result__value", {format_baht(valuation.market_value)} }
                span { class: "result__note", "{rent}" }
            }
            ScoreRow { label: t!(lang, "valuation-investment-score"), score: valuation.investment_score }
            ScoreRow { label: t!(lang, "valuation-liquidity-score"), score: valuation.liquidity_score }
            div { class: "result__row",
                span { {t!(lang, "valuation-appreciation")} }
                strong { class: "text--positive", "{appreciation}" }
            }
            div { class: "result__row",
                span { {t!(lang, "valuation-risk-level")} }
                strong { class: "risk risk--{valuation.risk.value()}", {valuation.risk.label(lang)} }
            }
            h3 { class: "result__section", {t!(lang, "valuation-recommendation")} }
            p { class: "{advice_class}", "{advice}" }
        }
    }
}

#[component]
fn ScoreRow(label: String, score: f64) -> Element {
    let band = ScoreBand::of(score);

    rsx! {
        div { class: "score score--{band.css_modifier()}",
            div { class: "result__row",
                span { "{label}" }
                strong { "{score:.0}/100" }
            }
            MeterBar { percent: score, tone: band.css_modifier() }
        }
    }
}
