//! Typed async helpers over the scoring API for the views.

use fraudscope_core::client::check_api_status;
use fraudscope_core::{
    ClientConfig, FraudScopeError, HealthStatus, ModelInfo, PredictResponse, ScoringApi,
    ScoringClient, TransactionInput,
};
use leptos::prelude::*;
use tracing::error;

use crate::dom;

/// Config for the running page: the API shares the page's origin.
pub fn app_config() -> ClientConfig {
    match dom::page_origin() {
        Some(origin) => ClientConfig::with_base_url(origin),
        None => ClientConfig::default(),
    }
}

/// The page's one `ScoringClient`, built at mount and shared through context.
#[derive(Clone, Copy)]
pub struct Api {
    client: StoredValue<Option<ScoringClient>, LocalStorage>,
}

impl Api {
    pub fn new(config: &ClientConfig) -> Self {
        let client = match ScoringClient::new(&config.api_base_url) {
            Ok(client) => Some(client),
            Err(e) => {
                error!("Cannot build API client: {}", e);
                None
            }
        };
        Self {
            client: StoredValue::new_local(client),
        }
    }

    fn client(&self) -> Result<ScoringClient, FraudScopeError> {
        self.client
            .with_value(|c| c.clone())
            .ok_or_else(|| FraudScopeError::Config("API client unavailable".to_string()))
    }

    /// Errors stay typed here so the caller can tell API messages from
    /// transport failures when wording the toast.
    pub async fn predict(self, input: &TransactionInput) -> Result<PredictResponse, FraudScopeError> {
        self.client()?.predict(input).await
    }

    /// Startup status check; only logs.
    pub async fn check_status(self) -> Option<HealthStatus> {
        match self.client() {
            Ok(client) => check_api_status(&client).await,
            Err(_) => None,
        }
    }

    pub async fn get_health(self) -> Result<HealthStatus, String> {
        Ok(self.client()?.health().await?)
    }

    pub async fn get_model_info(self) -> Result<ModelInfo, String> {
        Ok(self.client()?.model_info().await?)
    }
}

pub fn use_api() -> Api {
    expect_context::<Api>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_share_the_page_client() {
        let api = Api::new(&ClientConfig::with_base_url("http://127.0.0.1:9/"));
        let copy = api;
        assert_eq!(api.client().unwrap().base_url(), "http://127.0.0.1:9");
        assert_eq!(copy.client().unwrap().base_url(), "http://127.0.0.1:9");
    }

    #[test]
    fn test_missing_client_is_config_error() {
        let api = Api {
            client: StoredValue::new_local(None),
        };
        match api.client() {
            Err(FraudScopeError::Config(msg)) => assert_eq!(msg, "API client unavailable"),
            other => panic!("expected config error, got {:?}", other.map(|_| ())),
        }
    }
}
