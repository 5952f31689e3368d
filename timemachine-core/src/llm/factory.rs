use super::providers::{HuggingFaceProvider, OpenRouterProvider};
use crate::config::api_keys::ProviderCredentials;
use crate::config::models::Provider;
use crate::llm::provider::BackendClient;
use std::collections::HashMap;
use std::sync::Arc;

/// Backend client registry, one shared client per provider
///
/// Built once at startup and read-only afterwards, so it can be shared across concurrent
/// requests behind an `Arc`.
#[derive(Clone, Default)]
pub struct BackendRegistry {
    clients: HashMap<Provider, Arc<dyn BackendClient>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the built-in HuggingFace and OpenRouter clients
    pub fn from_credentials(credentials: &ProviderCredentials) -> Self {
        let http_client = reqwest::Client::new();
        let mut registry = Self::new();

        registry.register(Arc::new(HuggingFaceProvider::from_config(
            credentials.huggingface_token.clone(),
            credentials.huggingface_base_url.clone(),
            http_client.clone(),
        )));

        registry.register(Arc::new(OpenRouterProvider::from_config(
            credentials.openrouter_api_key.clone(),
            credentials.openrouter_base_url.clone(),
            credentials.app_url.clone(),
            http_client,
        )));

        registry
    }

    /// Register a client under the provider it reports, replacing any previous one
    pub fn register(&mut self, client: Arc<dyn BackendClient>) {
        self.clients.insert(client.provider(), client);
    }

    pub fn with_client(mut self, client: Arc<dyn BackendClient>) -> Self {
        self.register(client);
        self
    }

    pub fn client_for(&self, provider: Provider) -> Option<Arc<dyn BackendClient>> {
        self.clients.get(&provider).cloned()
    }

    /// Registered providers in declaration order
    pub fn list_providers(&self) -> Vec<Provider> {
        Provider::all_providers()
            .into_iter()
            .filter(|provider| self.clients.contains_key(provider))
            .collect()
    }
}

impl std::fmt::Debug for BackendRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendRegistry")
            .field("providers", &self.list_providers())
            .finish()
    }
}
