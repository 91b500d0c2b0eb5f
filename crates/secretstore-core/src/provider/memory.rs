//! In-memory provider

use std::collections::HashMap;
use std::sync::RwLock;

use super::traits::{SecretStoreResult, SecureStorageProvider};

/// In-memory provider for testing and ephemeral use
///
/// Entries live in process memory and are lost when the provider is
/// dropped; nothing is persisted.
///
/// # Thread Safety
///
/// The provider uses `RwLock` internally and is safe to use from multiple
/// threads. A completed upsert is visible to every later lookup.
///
/// # Example
///
/// ```
/// use secretstore_core::provider::{SecureStorageProvider, MemoryProvider};
///
/// let provider = MemoryProvider::new();
/// provider.upsert("acct1", "pw1").unwrap();
/// assert_eq!(provider.lookup("acct1").unwrap(), Some("pw1".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryProvider {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryProvider {
    /// Create a new empty provider
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Create a provider with initial entries
    pub fn with_entries(initial: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(initial),
        }
    }

    /// Remove all entries
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap();
        entries.clear();
    }

    /// Get the number of stored entries
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap();
        entries.len()
    }

    /// Check if the provider holds no entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SecureStorageProvider for MemoryProvider {
    fn name(&self) -> &str {
        "memory"
    }

    fn lookup(&self, identifier: &str) -> SecretStoreResult<Option<String>> {
        let entries = self.entries.read().unwrap();
        Ok(entries.get(identifier).cloned())
    }

    fn upsert(&self, identifier: &str, value: &str) -> SecretStoreResult<()> {
        let mut entries = self.entries.write().unwrap();
        entries.insert(identifier.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, identifier: &str) -> SecretStoreResult<()> {
        let mut entries = self.entries.write().unwrap();
        entries.remove(identifier);
        Ok(())
    }
}

impl Clone for MemoryProvider {
    fn clone(&self) -> Self {
        let entries = self.entries.read().unwrap();
        Self {
            entries: RwLock::new(entries.clone()),
        }
    }
}
