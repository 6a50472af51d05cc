//! Local persistence of the exposure currently awaiting the user's review.
//!
//! Native targets keep a JSON file in the platform data directory; the web
//! build uses `localStorage`. The stored value is the exposure's wire shape.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

use tracing::{debug, info};

use super::error::StorageError;
use super::exposure::Exposure;

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "hamagen.valid-exposure";

#[cfg(not(target_arch = "wasm32"))]
const STORAGE_FILE: &str = "valid_exposure.json";

/// Location of the stored exposure: a file on native targets, a
/// `localStorage` key on the web.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposureStore {
    #[cfg(not(target_arch = "wasm32"))]
    path: PathBuf,
    #[cfg(target_arch = "wasm32")]
    key: &'static str,
}

impl ExposureStore {
    /// The store the app uses on this platform.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform() -> Result<Self, StorageError> {
        directories::ProjectDirs::from("il.gov", "health", "hamagen")
            .map(|dirs| Self::at(dirs.data_dir().join(STORAGE_FILE)))
            .ok_or(StorageError::Unavailable("no home directory"))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn platform() -> Result<Self, StorageError> {
        Ok(Self { key: STORAGE_KEY })
    }

    /// A store backed by the file at `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Option<Exposure>, StorageError> {
        match backend::read(self)? {
            Some(raw) if !raw.trim().is_empty() => {
                let exposure = serde_json::from_str(&raw)?;
                debug!("loaded stored exposure");
                Ok(Some(exposure))
            }
            _ => Ok(None),
        }
    }

    pub fn save(&self, exposure: &Exposure) -> Result<(), StorageError> {
        let raw = serde_json::to_string(exposure)?;
        backend::write(self, &raw)
    }

    /// Forget the stored exposure. Clearing an empty store is not an error.
    pub fn clear(&self) -> Result<(), StorageError> {
        backend::remove(self)?;
        info!("stored exposure cleared");
        Ok(())
    }
}

pub fn load_valid_exposure() -> Result<Option<Exposure>, StorageError> {
    ExposureStore::platform()?.load()
}

/// Record an exposure for the user to review. This is the hand-off point for
/// the exposure-detection layer; the screen only reads and clears it.
pub fn save_valid_exposure(exposure: &Exposure) -> Result<(), StorageError> {
    ExposureStore::platform()?.save(exposure)
}

/// Forget the stored exposure (the user marked it as wrong).
pub fn clear_valid_exposure() -> Result<(), StorageError> {
    ExposureStore::platform()?.clear()
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::fs;
    use std::io::ErrorKind;

    use super::{ExposureStore, StorageError};

    pub(super) fn read(store: &ExposureStore) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&store.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub(super) fn write(store: &ExposureStore, raw: &str) -> Result<(), StorageError> {
        if let Some(dir) = store.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&store.path, raw)?;
        Ok(())
    }

    pub(super) fn remove(store: &ExposureStore) -> Result<(), StorageError> {
        match fs::remove_file(&store.path) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod backend {
    use super::{ExposureStore, StorageError};

    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable("localStorage"))
    }

    pub(super) fn read(store: &ExposureStore) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(store.key)
            .map_err(|_| StorageError::Unavailable("localStorage read"))
    }

    pub(super) fn write(store: &ExposureStore, raw: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(store.key, raw)
            .map_err(|_| StorageError::Unavailable("localStorage write"))
    }

    pub(super) fn remove(store: &ExposureStore) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(store.key)
            .map_err(|_| StorageError::Unavailable("localStorage remove"))
    }
}
