use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::session::use_exposure_session;
use ui::views::{ExposureDetails, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(MobileNavbar)]
    #[route("/")]
    Home {},
    #[route("/exposure")]
    ExposureDetails {},
}

// The mobile webview has no dev server to serve assets from; inline the theme.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_exposure(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::ExposureDetails {}, "{label}" })
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    let session = use_exposure_session();

    register_nav(NavBuilder {
        home: nav_home,
        exposure: nav_exposure,
    });

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{session.locale}",
            Router::<Route> {}
        }
    }
}

/// A mobile-specific Router around the shared `AppNavbar` component
/// which allows us to use the mobile-specific `Route` enum.
#[component]
fn MobileNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
