//! Persisted Session
//!
//! The registered user survives page reloads as JSON in local storage.

use crate::models::User;

/// String key-value storage (browser `localStorage` in the app)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`; every operation is a no-op when storage is
/// unavailable (private mode, disabled cookies)
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if storage.set_item(key, value).is_err() {
                log::warn!("could not write {} to local storage", key);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("could not remove {} from local storage", key);
            }
        }
    }
}

/// Load the stored user. A value that no longer parses is dropped.
pub fn load_current_user(store: &impl KeyValueStore, key: &str) -> Option<User> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::warn!("discarding stored user: {}", err);
            store.remove(key);
            None
        }
    }
}

pub fn save_current_user(store: &impl KeyValueStore, key: &str, user: &User) {
    match serde_json::to_string(user) {
        Ok(json) => store.set(key, &json),
        Err(err) => log::error!("could not serialize user {}: {}", user.id, err),
    }
}

pub fn clear_current_user(store: &impl KeyValueStore, key: &str) {
    store.remove(key);
}
