//! Secure-storage providers
//!
//! This module provides a pluggable storage backend system with:
//! - `SecureStorageProvider` trait for implementing custom backends
//! - Built-in implementations: `KeychainProvider`, `MemoryProvider`
//! - A registry for discovering and creating providers by name

mod keychain;
mod memory;
mod registry;
mod traits;

pub use keychain::KeychainProvider;
pub use memory::MemoryProvider;
pub use registry::{
    create_provider, has_provider, list_providers, register_provider, unregister_provider,
    ProviderDefinition, ProviderFactory,
};
pub use traits::{SecretStoreError, SecretStoreResult, SecureStorageProvider};
