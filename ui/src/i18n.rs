//! Localized strings for the navbar and pages.
//!
//! Messages live in `i18n/<locale>/dq-ui.ftl` (en-US is the reference and
//! fallback) and are embedded at compile time. Lookups go through one global
//! `FluentLanguageLoader`; the `t!` macro is the only way components read
//! strings, which keeps ids checked by `fl!` at compile time.
//!
//! Language state has a single owner: the loader. `current_language()` is
//! what the picker and the shell's language signal must be seeded from, and
//! `set_language` reports the language that is actually active afterwards.
//!
//! ```ignore
//! ui::i18n::init(); // OS / browser preference, once
//! let lang = ui::i18n::current_language(); // e.g. "fr-FR"
//! let active = ui::i18n::set_language("es-ES")?; // "es-ES"
//! ```
use std::sync::Once;

use dioxus::logger::tracing;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::{I18nEmbedError, LanguageLoader};
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `t!("nav-dashboard")`, or with Fluent arguments `t!(<key>, name = value)`.
/// Routes every lookup through `LOADER`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain, also the `.ftl` file stem in every locale folder.
const DOMAIN: &str = "dq-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Locales;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback = FALLBACK_LANGUAGE
        .parse::<LanguageIdentifier>()
        .unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

fn select(requested: &[LanguageIdentifier]) -> Result<(), I18nEmbedError> {
    i18n_embed::select(&*LOADER, &Locales, requested).map(|selected| {
        tracing::debug!(?selected, "i18n: languages selected");
    })
}

/// Load bundles for the platform's preferred languages. Safe to call from
/// every component; only the first call does work.
pub fn init() {
    INIT.call_once(|| {
        if let Err(err) = select(&platform_languages()) {
            tracing::warn!("i18n: {err}; staying on {FALLBACK_LANGUAGE}");
        }
    });
}

/// Tag of the language the loader currently renders with.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Switch language and return the tag now in effect.
///
/// An unparseable tag leaves the current language untouched and is not an
/// error; an unknown but well-formed tag falls back like `init` does.
pub fn set_language(tag: &str) -> Result<String, I18nEmbedError> {
    match tag.parse::<LanguageIdentifier>() {
        Ok(lang) => select(&[lang])?,
        Err(err) => tracing::debug!("i18n: ignoring language tag {tag:?} ({err})"),
    }
    Ok(current_language())
}

/// Embedded language tags, sorted and deduplicated.
pub fn available_languages() -> Vec<String> {
    let mut tags: Vec<String> = Locales::iter()
        .filter_map(|file| file.split_once('/').map(|(dir, _)| dir.to_string()))
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(target_arch = "wasm32")]
fn platform_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

/// Serialises tests that switch the global language.
#[cfg(test)]
pub(crate) fn language_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
