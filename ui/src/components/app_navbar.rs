use crate::core::locale::TextDirection;
use crate::i18n::{self};
use crate::session::ExposureSession;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::warn;

// Navbar stylesheet (inlined as well on native release builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// Each function receives the localized label and returns a `Link` that
/// already contains it:
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// fn nav_home(label: &str) -> Element {
///     rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } )
/// }
/// register_nav(NavBuilder { home: nav_home, exposure: nav_exposure });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub exposure: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let session = try_use_context::<ExposureSession>();
    // Global language code signal (provided by the session); falls back to a local one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let mut current_lang = use_signal(i18n::current_language);
    let lang_marker = lang_code_ctx
        .as_ref()
        .map(|c| c())
        .unwrap_or_else(|| current_lang());

    let catalog = session
        .map(|s| s.data.read().languages.clone())
        .unwrap_or_default();
    let choices: Vec<(String, String)> = catalog
        .codes()
        .map(|code| (code.to_string(), catalog.display_name(code).to_string()))
        .collect();
    let show_switcher = choices.len() > 1;

    #[cfg(debug_assertions)]
    {
        tracing::debug!(lang = %lang_marker, "AppNavbar render");
    }

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!("language switch to {val} failed: {err}"),
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let exposure = (b.exposure)(&t!("nav-exposure"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {exposure}
            }
        }
    });

    let tagline = t!("tagline");
    let dir = TextDirection::for_locale(&lang_marker).as_attr();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            dir,
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Hamagen" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{lang_marker}",
                            oninput: on_change,
                            for (code, name) in choices {
                                option { key: "{code}", value: "{code}", "{name}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
