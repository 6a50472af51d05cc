use dioxus::prelude::*;

use crate::core::locale::{TextDirection, FALLBACK_LOCALE};
use crate::session::ExposureSession;

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code
        .as_ref()
        .map(|s| s())
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string());

    // Lightweight render trace for diagnosing i18n refresh issues.
    #[cfg(debug_assertions)]
    {
        tracing::debug!(lang = %lang_current, "home render");
    }

    let exposed = try_use_context::<ExposureSession>()
        .map(|session| session.exposure.read().is_some())
        .unwrap_or(false);
    let dir = TextDirection::for_locale(&lang_current).as_attr();

    rsx! {
        section { class: "page page-home", dir,
            h1 { {crate::t!("home-title")} }
            if exposed {
                p { class: "page-home__status page-home__status--exposed",
                    {crate::t!("home-exposure-found")}
                }
            } else {
                p { class: "page-home__status",
                    {crate::t!("home-no-exposure")}
                }
            }
        }
    }
}
