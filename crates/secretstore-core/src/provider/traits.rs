//! Core trait and types for secure-storage providers

use thiserror::Error;

/// Errors that can occur during secret store operations
#[derive(Error, Debug)]
pub enum SecretStoreError {
    #[error("identifier must not be empty")]
    EmptyIdentifier,

    #[error("provider not available: {0}")]
    Unavailable(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("provider error: {0}")]
    Provider(String),
}

pub type SecretStoreResult<T> = Result<T, SecretStoreError>;

/// Trait for secure-storage backends
///
/// A provider owns the persisted representation of every secret entry:
/// at most one string value per identifier, upserted and deleted as whole
/// values. Implementations can be:
/// - The OS keychain (`KeychainProvider`)
/// - In-memory for testing (`MemoryProvider`)
/// - Custom implementations (hardware token, remote vault, etc.)
///
/// Implementations must uphold the visibility contract: an `upsert` that
/// has returned is observed by any `lookup` that starts afterwards.
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
pub trait SecureStorageProvider: Send + Sync {
    /// Human-readable name of this provider
    fn name(&self) -> &str;

    /// Check if this provider is available
    ///
    /// For example, a keychain provider might not be available on a
    /// headless server without a keychain daemon.
    fn is_available(&self) -> bool {
        true
    }

    /// Retrieve the value stored under an identifier
    ///
    /// Returns `Ok(Some(value))` when an entry exists, `Ok(None)` when
    /// no entry is stored (absence is not an error), and `Err` only for
    /// genuine provider failures.
    fn lookup(&self, identifier: &str) -> SecretStoreResult<Option<String>>;

    /// Create or overwrite the entry for an identifier
    ///
    /// A failed upsert must leave the prior entry untouched.
    fn upsert(&self, identifier: &str, value: &str) -> SecretStoreResult<()>;

    /// Delete the entry for an identifier
    ///
    /// Idempotent: deleting an identifier with no entry succeeds.
    fn delete(&self, identifier: &str) -> SecretStoreResult<()>;

    /// Check if an entry exists for an identifier
    fn contains(&self, identifier: &str) -> SecretStoreResult<bool> {
        Ok(self.lookup(identifier)?.is_some())
    }
}
