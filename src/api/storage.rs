//! localStorage Token Store

use menu_workflow::TokenStore;
use web_sys::Storage;

pub struct LocalStorageTokens {
    key: String,
}

impl LocalStorageTokens {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        self.storage()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        match self.storage() {
            Some(storage) => {
                if storage.set_item(&self.key, token).is_err() {
                    log::warn!("Could not persist token under {}", self.key);
                }
            }
            None => log::warn!("localStorage unavailable, token not persisted"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}
