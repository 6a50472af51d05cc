//! Locale data: supported languages and the external link map.
//!
//! The default document ships inside the binary
//! (`assets/config/locale_data.json`). Its shape matches what the
//! localization backend serves, so a fetched copy parses the same way.

use serde::{Deserialize, Serialize};
use tracing::error;

use super::error::ConfigError;
use super::links::ExternalUrls;
use super::locale::LocaleCatalog;

const EMBEDDED_LOCALE_DATA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/config/locale_data.json"
));

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleData {
    pub languages: LocaleCatalog,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

impl LocaleData {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_LOCALE_DATA)
    }

    /// Embedded data, or a fallback-only catalog with no links if the
    /// embedded document is broken.
    pub fn embedded_or_default() -> Self {
        Self::embedded().unwrap_or_else(|err| {
            error!("embedded locale data rejected ({err}); continuing with fallback locale only");
            Self::default()
        })
    }
}
