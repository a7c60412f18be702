//! Localization for `wordglass-ui`.
//!
//! Fluent bundles live under `i18n/<lang>/wordglass-ui.ftl` and are embedded at
//! compile time with `rust-embed`. `en-US` is the fallback and the reference
//! for compile-time key checks done by `fl!`; `ja-JP` mirrors it.
//!
//! ```ignore
//! ui::i18n::init(); // idempotent
//! let label = ui::t!("rebuild-button");
//! ```
//!
//! Desktop builds pick the OS locale list, web builds `navigator.languages`.
use std::sync::Once;

use dioxus::prelude::{try_use_context, Signal};
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Look up a message through the shared [`LOADER`].
///
/// `t!("loading")`, `t!("export-saved", path = path)`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Bundle file stem: `i18n/<lang>/{DOMAIN}.ftl`.
const DOMAIN: &str = "wordglass-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub const FALLBACK_LANGUAGE: &str = "en-US";

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(new_loader);

fn new_loader() -> FluentLanguageLoader {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
}

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => debug!(?selected, "localization ready"),
            Err(err) => warn!(error = %err, "language selection failed, using fallback"),
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language currently used for lookups.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}

/// Subscribe the calling component to runtime language switches.
///
/// The platform shares the active tag as a `Signal<String>` in context. Reading
/// it here makes the component re-render in place (hooks and state intact) when
/// the header switches language. Without that context the loader's tag is used.
pub fn use_language() -> String {
    match try_use_context::<Signal<String>>() {
        Some(code) => code(),
        None => current_language(),
    }
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
