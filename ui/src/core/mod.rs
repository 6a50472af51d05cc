//! Platform-agnostic logic behind the exposure screens.

pub mod config;
pub mod error;
pub mod exposure;
pub mod format;
pub mod links;
pub mod locale;
pub mod platform;
pub mod storage;
