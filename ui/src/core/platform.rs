//! Platform glue: local clock offset, URL opening, platform labels.

use dioxus::prelude::document;
use std::sync::Once;

use futures::future::{FutureExt, LocalBoxFuture};
use time::{OffsetDateTime, UtcOffset};
use tracing::warn;

use super::error::OpenError;
use super::links::UrlOpener;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
    Mobile,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

static OFFSET_FALLBACK: Once = Once::new();

/// Offset of the viewer's time zone in force at `instant`, so daylight
/// saving is applied as it was at that moment rather than as it is now.
///
/// The zone can be unavailable (multi-threaded process on some Unix
/// targets); UTC is used then and the fallback is logged once per process.
pub fn offset_at(instant: OffsetDateTime) -> UtcOffset {
    UtcOffset::local_offset_at(instant).unwrap_or_else(|err| {
        OFFSET_FALLBACK.call_once(|| {
            warn!(platform = Platform::current().as_str(), "local offset unavailable ({err}); using UTC");
        });
        UtcOffset::UTC
    })
}

/// Opens links through the renderer's JS bridge. Every Dioxus renderer
/// (web, desktop webview, mobile webview) routes `window.open` with a
/// `_blank` target to the system handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open(&self, url: String) -> LocalBoxFuture<'static, Result<(), OpenError>> {
        async move {
            let literal = serde_json::to_string(&url).map_err(|err| OpenError::Rejected {
                url: url.clone(),
                reason: err.to_string(),
            })?;
            let script = format!("window.open({literal}, \"_blank\", \"noopener\"); return true;");
            document::eval(&script)
                .await
                .map(|_| ())
                .map_err(|err| OpenError::Rejected {
                    url,
                    reason: err.to_string(),
                })
        }
        .boxed_local()
    }
}
