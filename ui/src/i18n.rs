//! Internationalization (i18n) support for `thaiproperty-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (asset loading + OS/browser language requesters)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/thaiproperty-ui.ftl   (compile-time reference)
//!   th-TH/thaiproperty-ui.ftl
//! ```
//!
//! Every [`Language`] owns a dedicated loader whose fallback is the language
//! itself. A Thai lookup therefore never silently resolves to English; a key
//! missing from `th-TH` is caught by the completeness tests instead.
//!
//! Usage in a component:
//! ```ignore
//! use crate::t;
//! let title = t!(lang, "prediction-title");
//! let range = t!(lang, "prediction-price-range", min = "฿1", max = "฿2");
//! ```
use std::fmt;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Translation macro keyed by the active [`Language`].
/// Examples:
///     t!(lang, "nav-back")
///     t!(lang, "map-bedrooms", count = 3)
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the FTL filename).
const DOMAIN: &str = "thaiproperty-ui"; // pinned explicitly (must equal CARGO_PKG_NAME for `fl!`)

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// The closed set of display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Th,
    #[default]
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Th, Language::En];

    /// Locale folder / BCP-47 tag for this language.
    pub const fn tag(self) -> &'static str {
        match self {
            Language::Th => "th-TH",
            Language::En => "en-US",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Language::Th => "TH",
            Language::En => "EN",
        }
    }

    /// Name of the language written in that language (used by the mobile menu).
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::Th => "ไทย",
            Language::En => "English",
        }
    }

    fn identifier(self) -> LanguageIdentifier {
        self.tag().parse().unwrap_or_default()
    }

    /// First supported language among `requested`, matched on the primary subtag.
    pub fn from_requested(requested: &[LanguageIdentifier]) -> Option<Self> {
        requested
            .iter()
            .find_map(|id| match id.language.as_str() {
                "th" => Some(Language::Th),
                "en" => Some(Language::En),
                _ => None,
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

struct Loaders {
    th: FluentLanguageLoader,
    en: FluentLanguageLoader,
}

static LOADERS: Lazy<Loaders> = Lazy::new(|| Loaders {
    th: build_loader(Language::Th),
    en: build_loader(Language::En),
});

fn build_loader(language: Language) -> FluentLanguageLoader {
    let id = language.identifier();
    let loader = FluentLanguageLoader::new(DOMAIN, id.clone());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[id]) {
        tracing::error!(%language, %err, "failed loading localization bundle");
    }
    // Plain strings; no bidi isolation marks around placeables.
    loader.set_use_isolating(false);
    loader
}

/// Loader backing `t!` lookups for `language`.
pub fn loader(language: Language) -> &'static FluentLanguageLoader {
    match language {
        Language::Th => &LOADERS.th,
        Language::En => &LOADERS.en,
    }
}

/// List available (embedded) locale folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

/// Pick the start-up language from the OS/browser preference list.
pub fn detect_language() -> Language {
    Language::from_requested(&requested_languages()).unwrap_or_default()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n_embed::LanguageLoader;

    #[test]
    fn both_locales_are_embedded() {
        let langs = available_languages();
        for language in Language::ALL {
            assert!(
                langs.iter().any(|l| l == language.tag()),
                "missing embedded locale {language}"
            );
        }
    }

    #[test]
    fn lookups_follow_the_requested_language() {
        assert_eq!(crate::t!(Language::En, "nav-back"), "Back");
        assert_eq!(crate::t!(Language::Th, "nav-back"), "กลับ");
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        let text = crate::t!(Language::En, "map-bedrooms", count = 3);
        assert_eq!(text, "3 bedrooms");
    }

    #[test]
    fn thai_loader_does_not_fall_back_to_english() {
        assert_eq!(loader(Language::Th).current_language().to_string(), "th-TH");
        assert_eq!(loader(Language::En).current_language().to_string(), "en-US");
    }

    #[test]
    fn requested_language_matches_on_primary_subtag() {
        let requested: Vec<LanguageIdentifier> = ["fr-FR", "th", "en-GB"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(Language::from_requested(&requested), Some(Language::Th));

        let none: Vec<LanguageIdentifier> = vec!["de-DE".parse().unwrap()];
        assert_eq!(Language::from_requested(&none), None);
        assert_eq!(Language::from_requested(&[]), None);
    }
}
