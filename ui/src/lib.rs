//! Shared UI crate for Hamagen. Exposure logic and views live here; the
//! platform crates only launch and route.

pub mod core;
pub mod i18n;
pub mod session;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}
