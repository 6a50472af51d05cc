use dioxus::prelude::*;

use crate::core::format::ExposureStrings;
use crate::core::locale::{self, TextDirection};
use crate::i18n;
use crate::session::ExposureSession;
use crate::views::ExposureInstructions;

/// Routed page: feeds the session's exposure into [`ExposureInstructions`].
#[component]
pub fn ExposureDetails() -> Element {
    let session = use_context::<ExposureSession>();

    let locale_code = session.locale.cloned();
    let data = session.data.cloned();
    let resolved = locale::resolve(&locale_code, &data.languages).to_string();

    // Bundle for the resolved locale; rebuilt only when the locale changes.
    let strings = use_memo(move || {
        let data = session.data.read();
        let code = session.locale.read();
        let resolved = locale::resolve(&code, &data.languages);
        ExposureStrings::from_loader(&i18n::loader_for(resolved))
    });

    match session.exposure.cloned() {
        Some(exposure) => rsx! {
            ExposureInstructions {
                direction: TextDirection::for_locale(&resolved),
                strings: strings(),
                locale: locale_code,
                languages: data.languages,
                external_urls: data.external_urls,
                exposure,
                on_dismiss: move |_| session.dismiss(),
            }
        },
        None => rsx! {
            section { class: "page page-exposure", dir: TextDirection::for_locale(&resolved).as_attr(),
                p { class: "page-home__status", {crate::t!("home-no-exposure")} }
            }
        },
    }
}
