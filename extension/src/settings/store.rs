use async_trait::async_trait;

use super::{SettingsPatch, StoredSettings};
use crate::error::Result;

/// Settings repository backed by a host key-value store.
///
/// No caching: every `get` reads the store, every `set` writes the
/// fields present in the patch and nothing else.
#[async_trait(?Send)]
pub trait SettingsStore {
    async fn get(&self) -> Result<StoredSettings>;

    async fn set(&self, patch: SettingsPatch) -> Result<()>;
}
