//! String key/value storage behind the link list and the admin flag.
//!
//! In the browser this is `localStorage` / `sessionStorage`; `MemoryStore`
//! stands in everywhere else.

use crate::error::StoreError;
use std::collections::HashMap;
use web_sys::Storage;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;
}

impl KeyValueStore for Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(Storage::get_item(self, key)?)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        Ok(Storage::set_item(self, key, value)?)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        Ok(Storage::remove_item(self, key)?)
    }
}

#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StoreError> {
        self.items.remove(key);
        Ok(())
    }
}

pub fn local_storage() -> Result<Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    window.local_storage()?.ok_or(StoreError::Unavailable)
}

pub fn session_storage() -> Result<Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    window.session_storage()?.ok_or(StoreError::Unavailable)
}
