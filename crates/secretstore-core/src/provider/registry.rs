//! Provider registry for discovering and creating providers by name

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use super::keychain::KeychainProvider;
use super::memory::MemoryProvider;
use super::traits::SecureStorageProvider;

/// Factory function type for creating providers
pub type ProviderFactory = Box<dyn Fn() -> Arc<dyn SecureStorageProvider> + Send + Sync>;

/// Definition of a registered provider
pub struct ProviderDefinition {
    /// Unique name for this provider
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: ProviderFactory,
}

impl std::fmt::Debug for ProviderDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Global registry of providers
static REGISTRY: Lazy<RwLock<HashMap<String, ProviderDefinition>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    // Register built-in providers
    map.insert(
        "keychain".to_string(),
        ProviderDefinition {
            name: "keychain".to_string(),
            description: "System keychain (macOS Keychain, Windows Credential Manager, Linux Secret Service)".to_string(),
            factory: Box::new(|| Arc::new(KeychainProvider::new())),
        },
    );

    map.insert(
        "memory".to_string(),
        ProviderDefinition {
            name: "memory".to_string(),
            description: "In-memory storage for testing".to_string(),
            factory: Box::new(|| Arc::new(MemoryProvider::new())),
        },
    );

    RwLock::new(map)
});

/// Register a new provider type
///
/// # Arguments
/// * `name` - Unique name for the provider
/// * `description` - Human-readable description
/// * `factory` - Factory function to create instances
///
/// # Example
///
/// ```
/// use secretstore_core::provider::{register_provider, MemoryProvider};
/// use std::sync::Arc;
///
/// register_provider(
///     "custom",
///     "My custom provider",
///     Box::new(|| Arc::new(MemoryProvider::new())),
/// );
/// ```
pub fn register_provider(name: &str, description: &str, factory: ProviderFactory) {
    let mut registry = REGISTRY.write().unwrap();
    registry.insert(
        name.to_string(),
        ProviderDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    );
}

/// Create a provider by name
///
/// Returns the created provider, or None if the name is not registered.
///
/// # Example
///
/// ```
/// use secretstore_core::provider::create_provider;
///
/// let provider = create_provider("memory").expect("memory provider should exist");
/// ```
pub fn create_provider(name: &str) -> Option<Arc<dyn SecureStorageProvider>> {
    let registry = REGISTRY.read().unwrap();
    registry.get(name).map(|def| (def.factory)())
}

/// List all registered providers as (name, description) pairs
pub fn list_providers() -> Vec<(String, String)> {
    let registry = REGISTRY.read().unwrap();
    registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect()
}

/// Check if a provider is registered
pub fn has_provider(name: &str) -> bool {
    let registry = REGISTRY.read().unwrap();
    registry.contains_key(name)
}

/// Unregister a provider (mainly for testing)
pub fn unregister_provider(name: &str) -> bool {
    let mut registry = REGISTRY.write().unwrap();
    registry.remove(name).is_some()
}
