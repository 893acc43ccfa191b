use crate::error::{GenerationError, Result};
use crate::provider::ProviderConfig;
use std::collections::HashMap;
use std::env;

/// Source of API keys, looked up by secret name.
pub trait SecretStore {
    fn secret(&self, name: &str) -> Option<String>;
}

/// Reads secrets from the process environment, which `dotenv` fills from `.env`.
pub struct EnvSecretStore;

impl SecretStore for EnvSecretStore {
    fn secret(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl SecretStore for HashMap<String, String> {
    fn secret(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

pub fn resolve_api_key(store: &dyn SecretStore, provider: &ProviderConfig) -> Result<String> {
    store
        .secret(provider.secret_name)
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| GenerationError::MissingApiKey(provider.secret_name.to_string()))
}
