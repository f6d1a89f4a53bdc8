use common::store::parse_score;
use common::{ScoreStore, StoreError};
use web_sys::Storage;

/// Best score kept in the browser's `localStorage`, as a decimal string.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("localStorage is not available, best score will not persist");
        }
        LocalStore { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("no localStorage".to_string()))
    }
}

impl ScoreStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<u32>, StoreError> {
        let value = self
            .storage()?
            .get_item(key)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?;
        value.map(|value| parse_score(key, &value)).transpose()
    }

    fn set(&mut self, key: &str, score: u32) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, &score.to_string())
            .map_err(|err| StoreError::Rejected {
                key: key.to_string(),
                reason: format!("{err:?}"),
            })
    }
}
