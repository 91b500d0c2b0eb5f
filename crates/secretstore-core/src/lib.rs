//! SecretStore Core
//!
//! Runtime-agnostic secret-storage facade: map a caller-chosen string
//! identifier to one confidential string value, persisted by a pluggable
//! secure-storage provider (OS keychain by default). This crate provides
//! the core functionality that can be used from any environment (native
//! CLI, desktop application, language bindings, etc.)
//!
//! Create/update/delete are folded into one `set` operation: a present
//! value upserts the entry for an identifier, an absent value deletes it.
//! Retrieval returns absence rather than failing when nothing is stored.
//!
//! ```
//! use std::sync::Arc;
//! use secretstore_core::SecretStore;
//! use secretstore_core::provider::MemoryProvider;
//!
//! let store = SecretStore::new(Arc::new(MemoryProvider::new()));
//!
//! store.set("acct1", Some("pw1")).unwrap();
//! assert_eq!(store.get("acct1").unwrap(), Some("pw1".to_string()));
//!
//! store.set("acct1", None).unwrap();
//! assert_eq!(store.get("acct1").unwrap(), None);
//! ```

pub mod provider;
pub mod store;

// Re-export commonly used types
pub use provider::{
    create_provider, has_provider, list_providers, register_provider,
    KeychainProvider, MemoryProvider, SecretStoreError, SecretStoreResult,
    SecureStorageProvider,
};
pub use store::SecretStore;
