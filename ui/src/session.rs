//! Reactive app state shared by the platform shells and views.

use dioxus::prelude::*;
use tracing::warn;

use crate::core::config::LocaleData;
use crate::core::exposure::Exposure;
use crate::core::storage::ExposureStore;
use crate::i18n;

/// Current locale, locale data and the exposure awaiting review.
///
/// Provided as context by [`use_exposure_session`]. The `locale` signal is
/// also provided on its own as `Signal<String>` so components that only care
/// about language changes can subscribe to it.
#[derive(Clone, Copy, PartialEq)]
pub struct ExposureSession {
    pub locale: Signal<String>,
    pub data: Signal<LocaleData>,
    pub exposure: Signal<Option<Exposure>>,
    store: Signal<Option<ExposureStore>>,
}

impl ExposureSession {
    /// The user reported the exposure as wrong: forget it.
    pub fn dismiss(self) {
        if let Some(store) = &*self.store.peek() {
            if let Err(err) = store.clear() {
                warn!("failed to clear stored exposure: {err}");
            }
        }
        let mut exposure = self.exposure;
        exposure.set(None);
    }
}

/// Create the session for the app root and provide it as context.
pub fn use_exposure_session() -> ExposureSession {
    use_exposure_session_with(|| {
        ExposureStore::platform()
            .map_err(|err| warn!("exposure storage unavailable: {err}"))
            .ok()
    })
}

/// Like [`use_exposure_session`], reading and clearing the exposure in the
/// store returned by `store` (`None` keeps the session in memory only).
pub fn use_exposure_session_with(
    store: impl FnOnce() -> Option<ExposureStore>,
) -> ExposureSession {
    let locale = use_signal(i18n::current_language);
    let data = use_signal(LocaleData::embedded_or_default);
    let store = use_signal(store);
    let exposure = use_signal(|| {
        let store = store.peek();
        let Some(store) = &*store else {
            return None;
        };
        store.load().unwrap_or_else(|err| {
            warn!("ignoring stored exposure: {err}");
            None
        })
    });

    use_context_provider(|| locale);
    use_context_provider(|| ExposureSession {
        locale,
        data,
        exposure,
        store,
    })
}
