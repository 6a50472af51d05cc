//! Locale resolution against the catalog of supported display languages.
//!
//! The catalog always contains [`FALLBACK_LOCALE`]; construction enforces it,
//! so [`resolve`] never fails.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

/// Locale used whenever the requested one is not supported.
pub const FALLBACK_LOCALE: &str = "he";

/// Supported locales with their short (switcher) and long (display) labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog", into = "RawCatalog")]
pub struct LocaleCatalog {
    short: BTreeMap<String, String>,
    long: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawCatalog {
    short: BTreeMap<String, String>,
    #[serde(default)]
    long: BTreeMap<String, String>,
}

impl LocaleCatalog {
    pub fn new(
        short: BTreeMap<String, String>,
        long: BTreeMap<String, String>,
    ) -> Result<Self, CatalogError> {
        if short.is_empty() {
            return Err(CatalogError::Empty);
        }
        if !short.contains_key(FALLBACK_LOCALE) {
            return Err(CatalogError::MissingFallback(FALLBACK_LOCALE));
        }
        Ok(Self { short, long })
    }

    /// Catalog holding only the fallback locale. Used when the configured
    /// catalog cannot be loaded.
    pub fn fallback_only() -> Self {
        let mut short = BTreeMap::new();
        short.insert(FALLBACK_LOCALE.to_string(), "עב".to_string());
        let mut long = BTreeMap::new();
        long.insert(FALLBACK_LOCALE.to_string(), "עברית".to_string());
        Self { short, long }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.short.contains_key(code)
    }

    /// Supported codes in stable (sorted) order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.short.keys().map(String::as_str)
    }

    pub fn short_label<'a>(&'a self, code: &'a str) -> &'a str {
        self.short.get(code).map(String::as_str).unwrap_or(code)
    }

    /// Long display name, falling back to the short label.
    pub fn display_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.long
            .get(code)
            .map(String::as_str)
            .unwrap_or_else(|| self.short_label(code))
    }
}

impl TryFrom<RawCatalog> for LocaleCatalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Self::new(raw.short, raw.long)
    }
}

impl From<LocaleCatalog> for RawCatalog {
    fn from(catalog: LocaleCatalog) -> Self {
        Self {
            short: catalog.short,
            long: catalog.long,
        }
    }
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        Self::fallback_only()
    }
}

/// Return `requested` if the catalog supports it, otherwise the fallback.
pub fn resolve<'a>(requested: &'a str, catalog: &LocaleCatalog) -> &'a str {
    if catalog.contains(requested) {
        requested
    } else {
        FALLBACK_LOCALE
    }
}

/// Pick the first OS-requested language whose primary subtag is supported.
///
/// Tags such as `en-US` or `ru_RU` are reduced to `en` / `ru` before lookup.
pub fn resolve_requested<I, S>(requested: I, catalog: &LocaleCatalog) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    requested
        .into_iter()
        .find_map(|tag| {
            let primary = tag.as_ref().split(['-', '_']).next()?.to_ascii_lowercase();
            catalog.contains(&primary).then_some(primary)
        })
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Layout direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn for_locale(code: &str) -> Self {
        match code {
            "he" | "ar" => Self::Rtl,
            _ => Self::Ltr,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    /// Value for the HTML `dir` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}
