//! System keychain provider
//!
//! Uses the OS keychain for secure secret storage:
//! - macOS: Keychain
//! - Windows: Credential Manager
//! - Linux: Secret Service (GNOME Keyring, KWallet)

use keyring::Entry;
use tracing::{debug, warn};

use super::traits::{SecretStoreError, SecretStoreResult, SecureStorageProvider};

/// Provider backed by the system keychain
///
/// This delegates confidentiality and integrity of persisted entries to the
/// operating system's native credential management:
///
/// - **macOS**: Keychain Services
/// - **Windows**: Credential Manager
/// - **Linux**: Secret Service API (GNOME Keyring, KWallet, etc.)
///
/// # Example
///
/// ```no_run
/// use secretstore_core::provider::{KeychainProvider, SecureStorageProvider};
///
/// let provider = KeychainProvider::new();
///
/// provider.upsert("acct1", "pw1").unwrap();
/// assert_eq!(provider.lookup("acct1").unwrap(), Some("pw1".to_string()));
/// ```
pub struct KeychainProvider {
    service_name: String,
}

impl KeychainProvider {
    /// Create a new keychain provider with the default service name "secretstore"
    pub fn new() -> Self {
        Self::with_service("secretstore")
    }

    /// Create a new keychain provider with a custom service name
    ///
    /// The service name namespaces entries in the keychain, so two
    /// applications using different service names never collide on the
    /// same identifier.
    pub fn with_service(service: impl Into<String>) -> Self {
        Self {
            service_name: service.into(),
        }
    }

    /// Get a keyring entry for the given identifier
    fn entry(&self, identifier: &str) -> SecretStoreResult<Entry> {
        Entry::new(&self.service_name, identifier).map_err(map_keyring_error)
    }
}

impl Default for KeychainProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureStorageProvider for KeychainProvider {
    fn name(&self) -> &str {
        "keychain"
    }

    fn is_available(&self) -> bool {
        // Entry creation fails on headless hosts without a keychain daemon
        match Entry::new(&self.service_name, "__secretstore_availability_check__") {
            Ok(_) => true,
            Err(e) => {
                warn!(service = %self.service_name, error = %e, "keychain not available");
                false
            }
        }
    }

    fn lookup(&self, identifier: &str) -> SecretStoreResult<Option<String>> {
        let entry = self.entry(identifier)?;
        match entry.get_password() {
            Ok(value) => {
                debug!(identifier, value_len = value.len(), "keychain lookup hit");
                Ok(Some(value))
            }
            Err(keyring::Error::NoEntry) => {
                debug!(identifier, "keychain lookup miss");
                Ok(None)
            }
            Err(e) => {
                warn!(identifier, error = %e, "keychain lookup failed");
                Err(map_keyring_error(e))
            }
        }
    }

    fn upsert(&self, identifier: &str, value: &str) -> SecretStoreResult<()> {
        debug!(identifier, service = %self.service_name, value_len = value.len(), "keychain upsert");
        let entry = self.entry(identifier)?;
        entry.set_password(value).map_err(|e| {
            warn!(identifier, error = %e, "keychain upsert failed");
            map_keyring_error(e)
        })
    }

    fn delete(&self, identifier: &str) -> SecretStoreResult<()> {
        let entry = self.entry(identifier)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already deleted
            Err(e) => {
                warn!(identifier, error = %e, "keychain delete failed");
                Err(map_keyring_error(e))
            }
        }
    }
}

/// Map a keyring error to the provider error taxonomy
///
/// `NoEntry` never reaches this function; callers treat it as absence.
fn map_keyring_error(err: keyring::Error) -> SecretStoreError {
    match err {
        keyring::Error::NoStorageAccess(e) => SecretStoreError::AccessDenied(e.to_string()),
        keyring::Error::PlatformFailure(e) => SecretStoreError::Unavailable(e.to_string()),
        other => SecretStoreError::Provider(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: these tests require a running keychain service.
    // They may fail on CI systems without proper keychain setup.

    #[test]
    #[ignore] // Requires system keychain
    fn test_upsert_and_lookup() {
        let provider = KeychainProvider::with_service("secretstore-test");

        // Clean up any existing test entry
        let _ = provider.delete("test_identifier");

        provider.upsert("test_identifier", "test_value").unwrap();
        assert_eq!(
            provider.lookup("test_identifier").unwrap(),
            Some("test_value".to_string())
        );

        // Clean up
        provider.delete("test_identifier").unwrap();
        assert_eq!(provider.lookup("test_identifier").unwrap(), None);
    }

    #[test]
    #[ignore] // Requires system keychain
    fn test_delete_is_idempotent() {
        let provider = KeychainProvider::with_service("secretstore-test");

        let _ = provider.delete("never_stored");

        // Deleting an absent entry succeeds both times
        provider.delete("never_stored").unwrap();
        provider.delete("never_stored").unwrap();
        assert_eq!(provider.lookup("never_stored").unwrap(), None);
    }

    #[test]
    fn test_name() {
        let provider = KeychainProvider::new();
        assert_eq!(provider.name(), "keychain");
    }

    #[test]
    fn test_custom_service_name() {
        let provider = KeychainProvider::with_service("my-app");
        assert_eq!(provider.service_name, "my-app");
    }
}
