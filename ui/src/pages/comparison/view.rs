use dioxus::prelude::*;
use uuid::Uuid;

use crate::catalog::{PropertyType, SelectOption};
use crate::components::{NumberInput, PageHeader, SelectInput, TextInput};
use crate::core::draft::FormDraft;
use crate::core::format::{format_baht, format_percent};
use crate::i18n::Language;
use crate::t;

use super::engine::{ComparisonBoard, ComparisonEntry, NewEntry, Trend};

#[component]
pub fn ComparisonPage(lang: Language) -> Element {
    let mut board = use_signal(ComparisonBoard::new);
    let mut adding = use_signal(|| false);
    let mut draft = use_signal(FormDraft::new);

    let on_add = move |evt: FormEvent| {
        evt.prevent_default();
        let parsed = NewEntry::try_from(&*draft.read());
        match parsed {
            Ok(entry) => {
                board.write().add(entry, &mut rand::thread_rng());
                draft.write().clear();
                adding.set(false);
            }
            Err(err) => tracing::debug!(%err, "comparison entry ignored"),
        }
    };

    let remove = move |id: Uuid| {
        board.write().remove(id);
    };

    let snapshot = board.read().clone();

    rsx! {
        section { class: "page page-comparison",
            PageHeader {
                lang,
                title: t!(lang, "comparison-title"),
                subtitle: t!(lang, "comparison-subtitle"),
            }

            div { class: "page__toolbar",
                button {
                    r#type: "button",
                    class: "btn btn--primary",
                    onclick: move |_| adding.set(true),
                    "+ "
                    {t!(lang, "comparison-add-property")}
                }
            }

            if adding() {
                div { class: "modal", role: "dialog", aria_modal: "true",
                    div { class: "modal__backdrop", onclick: move |_| adding.set(false) }
                    form { class: "card modal__body form", onsubmit: on_add,
                        div { class: "modal__header",
                            h2 { class: "card__title", {t!(lang, "comparison-add-property")} }
                            button {
                                r#type: "button",
                                class: "modal__close",
                                aria_label: t!(lang, "comparison-close"),
                                onclick: move |_| adding.set(false),
                                "✕"
                            }
                        }
                        TextInput {
                            draft,
                            field: "name",
                            label: t!(lang, "comparison-property-name"),
                            required: true,
                        }
                        SelectInput {
                            draft,
                            field: "property_type",
                            label: t!(lang, "comparison-type"),
                            placeholder: t!(lang, "common-select-property-type"),
                            options: PropertyType::COMPARABLE
                                .iter()
                                .map(|kind| (kind.value(), kind.label(lang)))
                                .collect::<Vec<_>>(),
                        }
                        TextInput {
                            draft,
                            field: "location",
                            label: t!(lang, "comparison-location"),
                            required: true,
                        }
                        div { class: "form__row",
                            NumberInput {
                                draft,
                                field: "price",
                                label: t!(lang, "comparison-price"),
                                placeholder: t!(lang, "comparison-price-placeholder"),
                                required: true,
                            }
                            NumberInput {
                                draft,
                                field: "area",
                                label: t!(lang, "comparison-area"),
                                placeholder: t!(lang, "comparison-area-placeholder"),
                                required: true,
                            }
                        }
                        div { class: "form__row",
                            NumberInput { draft, field: "bedrooms", label: t!(lang, "comparison-bedrooms"), required: true }
                            NumberInput { draft, field: "bathrooms", label: t!(lang, "comparison-bathrooms"), required: true }
                        }
                        button { r#type: "submit", class: "btn btn--primary btn--block",
                            {t!(lang, "comparison-add-property")}
                        }
                    }
                }
            }

            if snapshot.is_empty() {
                div { class: "card empty-state",
                    div { class: "empty-state__icon", aria_hidden: "true", "🏠" }
                    h2 { {t!(lang, "comparison-empty-title")} }
                    p { {t!(lang, "comparison-empty-hint")} }
                    button {
                        r#type: "button",
                        class: "btn btn--primary",
                        onclick: move |_| adding.set(true),
                        {t!(lang, "comparison-add-property")}
                    }
                }
            } else {
                div { class: "card table-card",
                    table { class: "compare-table",
                        thead {
                            tr {
                                th { {t!(lang, "comparison-property-name")} }
                                th { {t!(lang, "comparison-type")} }
                                th { {t!(lang, "comparison-location")} }
                                th { {t!(lang, "comparison-price")} }
                                th { {t!(lang, "comparison-area")} }
                                th { {t!(lang, "comparison-price-per-sqm")} }
                                th { {t!(lang, "comparison-trend")} }
                                th { span { class: "visually-hidden", {t!(lang, "comparison-remove")} } }
                            }
                        }
                        tbody {
                            for entry in snapshot.entries().iter().cloned() {
                                EntryRow { key: "{entry.id}", lang, entry, on_remove: remove }
                            }
                        }
                    }
                }
                SummaryCards { lang, board: snapshot.clone() }
            }
        }
    }
}

#[component]
fn EntryRow(lang: Language, entry: ComparisonEntry, on_remove: EventHandler<Uuid>) -> Element {
    let id = entry.id;
    let (arrow, trend_class) = match entry.trend {
        Trend::Up => ("↑", "text--positive"),
        Trend::Down => ("↓", "text--negative"),
    };

    rsx! {
        tr {
            td {
                div { class: "compare-table__name", "{entry.name}" }
                div { class: "compare-table__rooms",
                    {t!(lang, "comparison-rooms", bedrooms = entry.bedrooms, bathrooms = entry.bathrooms)}
                }
            }
            td { {entry.property_type.label(lang)} }
            td { "{entry.location}" }
            td { {format_baht(entry.price)} }
            td { {t!(lang, "comparison-area-value", area = format!("{}", entry.area_sqm))} }
            td { {format_baht(entry.price_per_sqm)} }
            td { class: "{trend_class}", "{arrow} {format_percent(entry.trend_percent, 1)}" }
            td {
                button {
                    r#type: "button",
                    class: "compare-table__remove",
                    aria_label: t!(lang, "comparison-remove"),
                    onclick: move |_| on_remove.call(id),
                    "✕"
                }
            }
        }
    }
}

#[component]
fn SummaryCards(lang: Language, board: ComparisonBoard) -> Element {
    let Some(summary) = board.summary() else {
        return rsx! {};
    };
    let name_of = |id: Uuid| {
        board
            .entry(id)
            .map(|entry| entry.name.clone())
            .unwrap_or_default()
    };
    let cards = [
        (t!(lang, "comparison-cheapest"), summary.cheapest, "summary--cheapest"),
        (t!(lang, "comparison-most-expensive"), summary.most_expensive, "summary--expensive"),
        (t!(lang, "comparison-best-value"), summary.best_value, "summary--value"),
        (t!(lang, "comparison-largest"), summary.largest, "summary--largest"),
    ];

    rsx! {
        div { class: "card result",
            h2 { class: "card__title", {t!(lang, "comparison-results")} }
            div { class: "stat-grid",
                for (label, id, modifier) in cards {
                    div { key: "{modifier}", class: "stat summary {modifier}",
                        span { class: "stat__label", "{label}" }
                        strong { class: "stat__value", {name_of(id)} }
                    }
                }
            }
        }
    }
}
