use dioxus::prelude::*;

use crate::catalog::{PropertyRecord, SelectOption};
use crate::components::PageHeader;
use crate::config::{AppConfig, GeoPoint};
use crate::core::format::format_amount;
use crate::i18n::Language;
use crate::t;

use super::engine::{filter_records, MapViewport, TrendBucket};

const VIEW_WIDTH: u32 = 960;
const VIEW_HEIGHT: u32 = 540;

#[component]
pub fn MapPage(lang: Language) -> Element {
    let config = use_context::<AppConfig>();
    let mut query = use_signal(String::new);
    let mut selected = use_signal(|| None::<u32>);

    let settings = config.map.clone();
    let viewport = MapViewport::from_settings(&settings, VIEW_WIDTH, VIEW_HEIGHT);
    let tiles = viewport.tiles(&settings);
    let records = filter_records(&query.read(), lang);
    let open = selected().and_then(|id| records.iter().copied().find(|record| record.id == id));

    rsx! {
        section { class: "page page-map",
            PageHeader {
                lang,
                title: t!(lang, "map-title"),
                subtitle: t!(lang, "map-subtitle"),
            }
            div { class: "map__search",
                input {
                    class: "field__input",
                    r#type: "search",
                    placeholder: t!(lang, "map-search-placeholder"),
                    value: "{query}",
                    oninput: move |evt: FormEvent| {
                        query.set(evt.value());
                        selected.set(None);
                    },
                }
            }
            if records.is_empty() {
                p { class: "map__empty", {t!(lang, "map-no-results")} }
            }
            div {
                class: "map",
                style: "width: {VIEW_WIDTH}px; height: {VIEW_HEIGHT}px",
                div { class: "map__tiles", aria_hidden: "true",
                    for tile in tiles {
                        img {
                            key: "{tile.url}@{tile.left},{tile.top}",
                            class: "map__tile",
                            src: "{tile.url}",
                            alt: "",
                            draggable: "false",
                            style: "left: {tile.left}px; top: {tile.top}px",
                        }
                    }
                }
                for record in records.iter().copied() {
                    MapMarker {
                        key: "{record.id}",
                        lang,
                        record: *record,
                        position: viewport.locate(GeoPoint { lat: record.lat, lon: record.lon }),
                        active: selected() == Some(record.id),
                        on_select: move |id| selected.set(Some(id)),
                    }
                }
                if let Some(record) = open {
                    MarkerPopup {
                        lang,
                        record: *record,
                        position: viewport.locate(GeoPoint { lat: record.lat, lon: record.lon }),
                        on_close: move |_| selected.set(None),
                    }
                }
                div { class: "map__attribution", "{settings.attribution}" }
            }
        }
    }
}

#[component]
fn MapMarker(
    lang: Language,
    record: PropertyRecord,
    position: (f64, f64),
    active: bool,
    on_select: EventHandler<u32>,
) -> Element {
    let (x, y) = position;
    let name = record.name();

    rsx! {
        button {
            r#type: "button",
            class: if active { "map__marker map__marker--active" } else { "map__marker" },
            style: "left: {x:.0}px; top: {y:.0}px",
            title: "{name} · {record.kind.label(lang)}",
            aria_label: "{name}",
            onclick: move |_| on_select.call(record.id),
            "📍"
        }
    }
}

#[component]
fn MarkerPopup(
    lang: Language,
    record: PropertyRecord,
    position: (f64, f64),
    on_close: EventHandler<()>,
) -> Element {
    let (x, y) = position;
    // Decorative only; redrawn on every render.
    let trend = TrendBucket::random(&mut rand::thread_rng());
    let price = t!(lang, "map-price-value", amount = format_amount(record.price as f64));

    rsx! {
        div { class: "map__popup", style: "left: {x:.0}px; top: {y:.0}px",
            button {
                r#type: "button",
                class: "map__popup-close",
                onclick: move |_| on_close.call(()),
                "✕"
            }
            h3 { class: "map__popup-title", {record.name()} }
            p { class: "map__popup-price",
                "💰 "
                {t!(lang, "map-price")}
                ": {price}"
            }
            ul { class: "map__popup-facts",
                li { "📐 " {t!(lang, "map-size", size = record.size_sqm)} }
                li { "🛏 " {t!(lang, "map-bedrooms", count = record.bedrooms)} }
                li { "🛁 " {t!(lang, "map-bathrooms", count = record.bathrooms)} }
                li { "🛋 " {t!(lang, "map-furnished", value = record.furnished.label(lang))} }
            }
            p { class: "map__popup-trend trend--{trend.css_modifier()}",
                {t!(lang, "map-trend")}
                ": "
                {trend.label(lang)}
            }
        }
    }
}
