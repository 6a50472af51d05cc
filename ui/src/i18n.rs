//! Internationalization (i18n) support for `hamagen-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   he/hamagen-ui.ftl   (fallback/reference)
//!   en/hamagen-ui.ftl
//!   ar/hamagen-ui.ftl
//!   ru/hamagen-ui.ftl
//! ```
//!
//! Locale folders use the bare language codes of the locale catalog
//! (`core::locale`), so a resolved locale selects its bundle directly.
//!
//! Usage in a component (after calling `i18n::init()` once at app start):
//! ```ignore
//! use crate::t;
//! let title = t!("home-title");
//! ```
//!
//! Screens that need a bundle for a specific locale (independent of the
//! global selection) build one with `loader_for`.
//!
//! To add a new locale:
//! 1. Copy `he/hamagen-ui.ftl` to `i18n/<code>/hamagen-ui.ftl`.
//! 2. Translate each message value (keep IDs identical).
//! 3. Add the code to `assets/config/locale_data.json`.
//! 4. Run tests to ensure completeness.
//!
//! Messages that end in a space (a lead-in followed by a place name) keep it
//! with a `{" "}` literal because Fluent trims trailing blanks.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

use crate::core::config::LocaleData;
use crate::core::locale::{self, LocaleCatalog, FALLBACK_LOCALE};

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "hamagen-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
pub(crate) struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(new_loader);

static INIT: Once = Once::new();

fn fallback_language() -> LanguageIdentifier {
    LanguageIdentifier::from_bytes(FALLBACK_LOCALE.as_bytes()).unwrap_or_default()
}

fn new_loader() -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, fallback_language());
    loader.set_use_isolating(false);
    loader
}

/// Initialize i18n with the OS-preferred supported locale (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let catalog = LocaleData::embedded_or_default().languages;
        let locale = detect_locale(&catalog);
        debug!(%locale, "initial language");
        if let Err(err) = select(&LOADER, &locale) {
            warn!("failed selecting language {locale} ({err}); continuing with fallback");
        }
    });
}

/// First OS-requested language present in `catalog`, else the fallback.
pub fn detect_locale(catalog: &LocaleCatalog) -> String {
    let requested = requested_languages();
    locale::resolve_requested(requested.iter().map(|l| l.to_string()), catalog)
}

/// Switch the global language at runtime. Unknown or unparsable tags are
/// ignored (Ok returned) so the current selection stays in place.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    if !available_languages().iter().any(|l| l == tag) {
        debug!(tag, "ignoring language without an embedded bundle");
        return Ok(());
    }
    select(&LOADER, tag)
}

/// Language currently selected on the global loader.
pub fn current_language() -> String {
    LOADER.current_language().language.as_str().to_string()
}

/// A standalone loader for `locale`, falling back to the reference bundle.
pub fn loader_for(locale: &str) -> FluentLanguageLoader {
    let loader = new_loader();
    if let Err(err) = select(&loader, locale) {
        warn!("failed loading bundle for {locale} ({err}); using fallback");
        let _ = select(&loader, FALLBACK_LOCALE);
    }
    loader
}

fn select(loader: &FluentLanguageLoader, tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()), // Silently ignore invalid tags.
    };
    i18n_embed::select(loader, &Localizations, &[lang]).map(|_| ())
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
