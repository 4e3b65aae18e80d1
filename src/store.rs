//! Key-value storage for persisted trainer state.

use std::collections::HashMap;

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};

// -------------------------------------------------------------------------------------------------

/// A simple string key-value store, e.g. a settings file or a browser's local storage.
pub trait KeyValueStore {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);
}

/// Read and deserialize the JSON value stored under `key`.
/// Returns `Ok(None)` when the key does not exist.
pub fn read_json<S: KeyValueStore + ?Sized, T: DeserializeOwned>(
    store: &S,
    key: &str,
) -> anyhow::Result<Option<T>> {
    match store.get(key) {
        Some(json) => serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse stored '{}' value", key))
            .map(Some),
        None => Ok(None),
    }
}

/// Serialize the given value as JSON and write it to `key`.
pub fn write_json<S: KeyValueStore + ?Sized, T: Serialize>(
    store: &mut S,
    key: &str,
    value: &T,
) -> anyhow::Result<()> {
    let json = serde_json::to_string(value)
        .with_context(|| format!("Failed to serialize '{}' value", key))?;
    store.set(key, json);
    Ok(())
}

// -------------------------------------------------------------------------------------------------

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn json_values() -> anyhow::Result<()> {
        let mut store = MemoryStore::new();
        assert_eq!(read_json::<_, Vec<u32>>(&store, "numbers")?, None);

        write_json(&mut store, "numbers", &vec![1, 2, 3])?;
        assert_eq!(store.get("numbers").as_deref(), Some("[1,2,3]"));
        assert_eq!(read_json::<_, Vec<u32>>(&store, "numbers")?, Some(vec![1, 2, 3]));

        store.set("numbers", "{oops".to_string());
        assert!(read_json::<_, Vec<u32>>(&store, "numbers").is_err());
        Ok(())
    }
}
