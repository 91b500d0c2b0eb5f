//! Identifier-keyed secret storage facade

use std::sync::Arc;

use tracing::warn;

use crate::provider::{
    KeychainProvider, SecretStoreError, SecretStoreResult, SecureStorageProvider,
};

/// Facade mapping caller-chosen identifiers to confidential string values
///
/// The store holds no cache: every call is a direct round trip to the
/// injected provider, so a value written through one `SecretStore` is
/// immediately visible through any other store sharing the same provider.
///
/// Create/update/delete are folded into [`set`](SecretStore::set): a present
/// value upserts the entry, an absent value deletes it. Retrieval returns
/// absence rather than failing when nothing is stored, and an empty-string
/// value is present, distinct from absence.
///
/// Two surfaces are offered. The `Result`-returning methods expose provider
/// failures as [`SecretStoreError`]; the `*_secure_string` convenience
/// methods collapse failures into `false`/`None` for call sites that only
/// care whether a value is there.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use secretstore_core::SecretStore;
/// use secretstore_core::provider::MemoryProvider;
///
/// let store = SecretStore::new(Arc::new(MemoryProvider::new()));
///
/// assert!(store.set_secure_string("acct1", Some("pw1")));
/// assert_eq!(store.get_secure_string("acct1"), Some("pw1".to_string()));
///
/// // Absent value deletes the entry
/// assert!(store.set_secure_string("acct1", None));
/// assert_eq!(store.get_secure_string("acct1"), None);
/// ```
pub struct SecretStore {
    provider: Arc<dyn SecureStorageProvider>,
}

impl SecretStore {
    /// Create a store backed by the given provider
    pub fn new(provider: Arc<dyn SecureStorageProvider>) -> Self {
        Self { provider }
    }

    /// Create a store backed by the system keychain
    ///
    /// Equivalent to `SecretStore::new(Arc::new(KeychainProvider::new()))`.
    pub fn with_keychain() -> Self {
        Self::new(Arc::new(KeychainProvider::new()))
    }

    /// Get the underlying provider
    pub fn provider(&self) -> &Arc<dyn SecureStorageProvider> {
        &self.provider
    }

    fn check_identifier(identifier: &str) -> SecretStoreResult<()> {
        if identifier.is_empty() {
            return Err(SecretStoreError::EmptyIdentifier);
        }
        Ok(())
    }

    /// Set, overwrite, or delete the entry for an identifier
    ///
    /// With `Some(value)` this upserts: the entry is created if absent and
    /// overwritten if present. With `None` it deletes the entry; deleting
    /// an identifier that has no entry is not an error.
    ///
    /// A failed set leaves the prior entry state unchanged.
    pub fn set(&self, identifier: &str, value: Option<&str>) -> SecretStoreResult<()> {
        Self::check_identifier(identifier)?;
        match value {
            Some(value) => self.provider.upsert(identifier, value),
            None => self.provider.delete(identifier),
        }
    }

    /// Retrieve the value stored under an identifier
    ///
    /// `Ok(None)` means no entry is stored; `Err` means the provider failed.
    /// An empty-string value comes back as `Ok(Some(String::new()))`.
    pub fn get(&self, identifier: &str) -> SecretStoreResult<Option<String>> {
        Self::check_identifier(identifier)?;
        self.provider.lookup(identifier)
    }

    /// Delete the entry for an identifier
    ///
    /// Idempotent; equivalent to `set(identifier, None)`.
    pub fn delete(&self, identifier: &str) -> SecretStoreResult<()> {
        self.set(identifier, None)
    }

    /// Check if an entry exists for an identifier
    pub fn contains(&self, identifier: &str) -> SecretStoreResult<bool> {
        Ok(self.get(identifier)?.is_some())
    }

    /// Boolean-result variant of [`set`](SecretStore::set)
    ///
    /// Returns `false` on any failure, including an empty identifier; the
    /// failure detail is logged, not surfaced.
    pub fn set_secure_string(&self, identifier: &str, value: Option<&str>) -> bool {
        match self.set(identifier, value) {
            Ok(()) => true,
            Err(e) => {
                warn!(identifier, error = %e, "set_secure_string failed");
                false
            }
        }
    }

    /// Optional-result variant of [`get`](SecretStore::get)
    ///
    /// Collapses provider failures into `None`, indistinguishable from
    /// absence; callers that need to tell the two apart should use
    /// [`get`](SecretStore::get) instead.
    pub fn get_secure_string(&self, identifier: &str) -> Option<String> {
        match self.get(identifier) {
            Ok(value) => value,
            Err(e) => {
                warn!(identifier, error = %e, "get_secure_string failed");
                None
            }
        }
    }
}

impl Default for SecretStore {
    fn default() -> Self {
        Self::with_keychain()
    }
}

impl std::fmt::Debug for SecretStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretStore")
            .field("provider", &self.provider.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::MemoryProvider;

    fn memory_store() -> SecretStore {
        SecretStore::new(Arc::new(MemoryProvider::new()))
    }

    #[test]
    fn test_set_then_get() {
        let store = memory_store();

        store.set("acct1", Some("pw1")).unwrap();
        assert_eq!(store.get("acct1").unwrap(), Some("pw1".to_string()));
    }

    #[test]
    fn test_upsert_overwrites() {
        let store = memory_store();

        store.set("acct1", Some("pw1")).unwrap();
        store.set("acct1", Some("pw2")).unwrap();
        assert_eq!(store.get("acct1").unwrap(), Some("pw2".to_string()));
    }

    #[test]
    fn test_set_none_deletes() {
        let store = memory_store();

        store.set("acct1", Some("pw1")).unwrap();
        store.set("acct1", None).unwrap();
        assert_eq!(store.get("acct1").unwrap(), None);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = memory_store();

        store.set("acct1", None).unwrap();
        store.set("acct1", None).unwrap();
        assert_eq!(store.get("acct1").unwrap(), None);

        store.delete("acct1").unwrap();
    }

    #[test]
    fn test_unknown_identifier_is_absent() {
        let store = memory_store();
        assert_eq!(store.get("never-set").unwrap(), None);
        assert!(!store.contains("never-set").unwrap());
    }

    #[test]
    fn test_empty_value_distinct_from_absence() {
        let store = memory_store();

        store.set("acct2", Some("")).unwrap();
        assert_eq!(store.get("acct2").unwrap(), Some(String::new()));
        assert!(store.contains("acct2").unwrap());
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let store = memory_store();

        assert!(matches!(
            store.set("", Some("pw")),
            Err(SecretStoreError::EmptyIdentifier)
        ));
        assert!(matches!(
            store.get(""),
            Err(SecretStoreError::EmptyIdentifier)
        ));
        assert!(!store.set_secure_string("", Some("pw")));
        assert_eq!(store.get_secure_string(""), None);
    }

    #[test]
    fn test_convenience_surface() {
        let store = memory_store();

        assert!(store.set_secure_string("acct1", Some("pw1")));
        assert_eq!(store.get_secure_string("acct1"), Some("pw1".to_string()));

        assert!(store.set_secure_string("acct1", None));
        assert_eq!(store.get_secure_string("acct1"), None);
    }

    #[test]
    fn test_no_facade_caching() {
        let provider = Arc::new(MemoryProvider::new());
        let store_a = SecretStore::new(provider.clone());
        let store_b = SecretStore::new(provider);

        store_a.set("acct1", Some("pw1")).unwrap();
        assert_eq!(store_b.get("acct1").unwrap(), Some("pw1".to_string()));

        store_b.set("acct1", None).unwrap();
        assert_eq!(store_a.get("acct1").unwrap(), None);
    }

    #[test]
    fn test_debug_names_provider() {
        let store = memory_store();
        assert_eq!(format!("{:?}", store), "SecretStore { provider: \"memory\" }");
    }
}
