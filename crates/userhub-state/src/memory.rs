use std::{collections::HashMap, sync::RwLock};

use crate::store::SessionStore;

/// In-memory [`SessionStore`], the process-lifetime analog of a browser
/// profile. Used as the default store and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<String, String>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .expect("RwLock is not poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.values
            .write()
            .expect("RwLock is not poisoned")
            .insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.values
            .write()
            .expect("RwLock is not poisoned")
            .remove(key);
    }
}
