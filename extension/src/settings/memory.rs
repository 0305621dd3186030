// Test double for the settings store

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cell::{Cell, RefCell};

use super::{SettingsPatch, SettingsStore, StoredRecord, StoredSettings};
use crate::error::Result;

/// In-memory store with the same key layout as chrome.storage.local
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<Map<String, Value>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls that wrote at least one key
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw value under a store key
    pub fn raw(&self, key: &str) -> Option<Value> {
        self.items.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: Value) {
        self.items.borrow_mut().insert(key.to_string(), value);
    }
}

#[async_trait(?Send)]
impl SettingsStore for MemoryStore {
    async fn get(&self) -> Result<StoredSettings> {
        let snapshot = Value::Object(self.items.borrow().clone());
        let record: StoredRecord = serde_json::from_value(snapshot)?;
        Ok(record.into_settings())
    }

    async fn set(&self, patch: SettingsPatch) -> Result<()> {
        if patch.is_empty() {
            return Ok(());
        }

        if let Value::Object(fields) = serde_json::to_value(patch)? {
            self.items.borrow_mut().extend(fields);
        }
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Speed, KEY_SETTINGS_SPEED, KEY_SETTINGS_VISIBLE};
    use futures::executor::block_on;

    #[test]
    fn test_empty_store_reads_absent() {
        let store = MemoryStore::new();
        assert_eq!(block_on(store.get()).unwrap(), StoredSettings::default());
    }

    #[test]
    fn test_read_after_write() {
        let store = MemoryStore::new();
        block_on(store.set(SettingsPatch::visible(false))).unwrap();
        block_on(store.set(SettingsPatch::speed(Speed::X0_75))).unwrap();

        let stored = block_on(store.get()).unwrap();
        assert_eq!(stored.visible, Some(false));
        assert_eq!(stored.speed, Some(Speed::X0_75));
        assert_eq!(store.raw(KEY_SETTINGS_SPEED), Some(Value::from("sp0.75")));
    }

    #[test]
    fn test_single_field_write_leaves_other_key() {
        let store = MemoryStore::new();
        block_on(store.set(SettingsPatch::visible(false))).unwrap();
        block_on(store.set(SettingsPatch::speed(Speed::X5_00))).unwrap();

        assert_eq!(store.raw(KEY_SETTINGS_VISIBLE), Some(Value::Bool(false)));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn test_empty_patch_is_not_a_write() {
        let store = MemoryStore::new();
        block_on(store.set(SettingsPatch::default())).unwrap();
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_wrong_types_read_as_absent() {
        let store = MemoryStore::new();
        store.insert_raw(KEY_SETTINGS_VISIBLE, Value::from("yes"));
        store.insert_raw(KEY_SETTINGS_SPEED, Value::from(5));

        let stored = block_on(store.get()).unwrap();
        assert_eq!(stored, StoredSettings::default());
        assert_eq!(stored.resolve(), crate::settings::Settings::default());
    }

    #[test]
    fn test_one_bad_key_keeps_the_other() {
        let store = MemoryStore::new();
        store.insert_raw(KEY_SETTINGS_VISIBLE, Value::Bool(false));
        store.insert_raw(KEY_SETTINGS_SPEED, Value::from(1.0));

        let stored = block_on(store.get()).unwrap();
        assert_eq!(stored.visible, Some(false));
        assert_eq!(stored.speed, None);
    }
}
