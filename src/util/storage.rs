//! Durable key/value storage behind a single capability-scoped interface.
//!
//! DESIGN
//! ======
//! Every operation returns an explicit `Result` so callers decide at one choke
//! point whether a persistence failure is ignorable (session caching) or worth
//! logging. In the browser (`hydrate`) this is `localStorage`; native builds
//! (SSR and unit tests) share a thread-local map so the same code paths run
//! without a browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the JSON-serialized current user.
pub const USER_KEY: &str = "user";

/// Durable storage was unavailable or rejected the operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("durable storage unavailable")]
pub struct StorageError;

/// Read the raw string stored under `key`, if any.
pub fn read(key: &str) -> Result<Option<String>, StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        storage.get_item(key).map_err(|_| StorageError)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(memory::read(key))
    }
}

/// Store `value` under `key`.
pub fn write(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        storage.set_item(key, value).map_err(|_| StorageError)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        memory::write(key, value);
        Ok(())
    }
}

/// Remove `key`. Removing an absent key is not an error.
pub fn remove(key: &str) -> Result<(), StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        storage.remove_item(key).map_err(|_| StorageError)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        memory::remove(key);
        Ok(())
    }
}

/// Read and JSON-decode the value stored under `key`.
///
/// A present but undecodable value reads as `None` rather than an error; stale
/// garbage in storage must never wedge startup hydration.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Result<Option<T>, StorageError> {
    let Some(raw) = read(key)? else {
        return Ok(None);
    };
    Ok(serde_json::from_str(&raw).ok())
}

/// JSON-encode `value` and store it under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|_| StorageError)?;
    write(key, &raw)
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError)
}

#[cfg(not(feature = "hydrate"))]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    thread_local! {
        static STORE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
    }

    pub fn read(key: &str) -> Option<String> {
        STORE.with(|s| s.borrow().get(key).cloned())
    }

    pub fn write(key: &str, value: &str) {
        STORE.with(|s| {
            s.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }

    pub fn remove(key: &str) {
        STORE.with(|s| {
            s.borrow_mut().remove(key);
        });
    }

    pub fn clear() {
        STORE.with(|s| s.borrow_mut().clear());
    }
}

/// Wipe the native backing map. Tests call this for isolation; each test
/// thread has its own map.
#[cfg(not(feature = "hydrate"))]
pub fn clear_all() {
    memory::clear();
}
