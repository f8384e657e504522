//! Internationalization (i18n) support for `haweya-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language negotiation + asset loading)
//! - `FluentLanguageLoader` from `i18n-embed` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/haweya-ui.ftl   (fallback/reference)
//!   ar-LY/haweya-ui.ftl   (Arabic, right-to-left)
//! ```
//!
//! Unlike a single global loader that gets switched at runtime, each
//! [`Language`] owns its own loader. The active language is an ordinary value
//! carried through context, so two views (or two tests) can render different
//! languages side by side.
//!
//! Usage in a component:
//! ```ignore
//! use crate::i18n::Language;
//! use crate::t;
//! let lang = Language::Arabic;
//! let title = t!(lang, "services-title");
//! let dynamic = ui::i18n::tr(lang, "status-ready");
//! ```
//!
//! `t!` is checked against the fallback file at compile time; `tr` is for keys
//! built at runtime and returns the key itself when nothing matches.
use std::fmt;

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Localized lookup for a static key in a given language.
/// Examples:
///     t!(lang, "nav-home")
///     t!(lang, "dashboard-welcome", name = user.name.as_str())
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
    ($lang:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
pub(crate) const DOMAIN: &str = "haweya-ui";

const FALLBACK_TAG: &str = "en-US";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static ENGLISH: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::English));
static ARABIC: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Language::Arabic));

/// Display languages offered by the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

/// Reading direction of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Arabic];

    /// Locale folder / BCP 47 tag of the embedded bundle.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => FALLBACK_TAG,
            Language::Arabic => "ar-LY",
        }
    }

    /// Short code used for the HTML `lang` attribute and date locales.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Language::English => TextDirection::Ltr,
            Language::Arabic => TextDirection::Rtl,
        }
    }

    pub fn is_rtl(self) -> bool {
        self.direction() == TextDirection::Rtl
    }

    /// The other language (the site has exactly two).
    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    /// Match a language tag (`ar`, `ar-EG`, `en-GB`, ...) by primary subtag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Language::English),
            "ar" => Some(Language::Arabic),
            _ => None,
        }
    }

    /// First supported language among the ones the OS/browser asks for.
    pub fn detect() -> Self {
        requested_languages()
            .iter()
            .find_map(|id| Self::from_tag(&id.to_string()))
            .unwrap_or_default()
    }

    fn identifier(self) -> LanguageIdentifier {
        self.tag().parse().unwrap_or_default()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

fn build_loader(lang: Language) -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_TAG.parse().unwrap_or_default();
    let loader = FluentLanguageLoader::new(DOMAIN, fallback);
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang.identifier()]) {
        tracing::warn!(%lang, %err, "failed selecting language; continuing with fallback");
    }
    loader
}

/// Loader holding the bundle for `lang` (plus the English fallback).
pub fn loader(lang: Language) -> &'static FluentLanguageLoader {
    match lang {
        Language::English => &ENGLISH,
        Language::Arabic => &ARABIC,
    }
}

/// Runtime lookup. A key without a message resolves to the key itself.
pub fn tr(lang: Language, key: &str) -> String {
    let loader = loader(lang);
    if loader.has(key) {
        loader.get(key)
    } else {
        tracing::debug!(%lang, key, "missing translation");
        key.to_string()
    }
}

/// Pick between the two halves of a bilingual literal.
pub fn pick<'a>(lang: Language, en: &'a str, ar: &'a str) -> &'a str {
    match lang {
        Language::English => en,
        Language::Arabic => ar,
    }
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

    #[test]
    fn every_language_has_an_embedded_bundle() {
        for lang in Language::ALL {
            let path = format!("{}/{DOMAIN}.ftl", lang.tag());
            assert!(Localizations::get(&path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn compile_time_domain_matches_runtime_domain() {
        const CONFIG: &str = include_str!("../i18n.toml");
        let domain = CONFIG
            .lines()
            .filter_map(|line| line.trim().strip_prefix("domain"))
            .filter_map(|rest| rest.trim().strip_prefix('='))
            .map(|value| value.trim().trim_matches('"'))
            .next();
        assert_eq!(domain, Some(DOMAIN));
        assert!(CONFIG.contains(&format!("fallback_language = \"{FALLBACK_TAG}\"")));
    }

    #[test]
    fn lookup_follows_requested_language() {
        assert_eq!(tr(Language::English, "nav-home"), "Home");
        assert_eq!(tr(Language::Arabic, "nav-home"), "الرئيسية");
        assert_eq!(crate::t!(Language::Arabic, "order-submit"), "إرسال الطلب");
    }

    #[test]
    fn missing_key_returns_key_verbatim() {
        assert_eq!(tr(Language::English, "no-such-key"), "no-such-key");
        assert_eq!(tr(Language::Arabic, "status-unknown"), "status-unknown");
    }

    #[test]
    fn direction_follows_language() {
        assert_eq!(Language::Arabic.direction().as_str(), "rtl");
        assert_eq!(Language::English.direction().as_str(), "ltr");
        assert!(Language::Arabic.is_rtl());
        assert_eq!(Language::English.toggled(), Language::Arabic);
    }

    #[test]
    fn tags_match_by_primary_subtag() {
        assert_eq!(Language::from_tag("ar-EG"), Some(Language::Arabic));
        assert_eq!(Language::from_tag("en_GB"), Some(Language::English));
        assert_eq!(Language::from_tag("fr-FR"), None);
        assert_eq!(Language::from_tag(""), None);
    }
}
