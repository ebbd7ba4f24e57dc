//! HTTP client for the scoring service.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use crate::error::FraudScopeError;
use crate::types::{ApiErrorBody, HealthStatus, ModelInfo, PredictResponse, TransactionInput};

const PREDICT_FALLBACK: &str = "Analysis request failed";
const HEALTH_FALLBACK: &str = "API is not responding";
const MODEL_INFO_FALLBACK: &str = "Model information unavailable";

/// The scoring service as seen by the rest of the client.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single UI thread.
#[async_trait(?Send)]
pub trait ScoringApi {
    async fn health(&self) -> Result<HealthStatus, FraudScopeError>;

    async fn predict(&self, input: &TransactionInput) -> Result<PredictResponse, FraudScopeError>;

    /// Score several transactions in one request. Predictions come back in
    /// input order.
    async fn predict_batch(
        &self,
        inputs: &[TransactionInput],
    ) -> Result<PredictResponse, FraudScopeError>;

    async fn model_info(&self) -> Result<ModelInfo, FraudScopeError>;
}

/// reqwest-backed `ScoringApi`. No timeout and no retry: a hung request
/// only holds up the submission that issued it.
#[derive(Debug, Clone)]
pub struct ScoringClient {
    client: reqwest::Client,
    base_url: String,
}

impl ScoringClient {
    pub fn new(base_url: &str) -> Result<Self, FraudScopeError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| FraudScopeError::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Use a preconfigured reqwest client (proxy settings, default headers).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read<T: DeserializeOwned>(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, FraudScopeError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        interpret_response(status, &body, fallback)
    }
}

#[async_trait(?Send)]
impl ScoringApi for ScoringClient {
    async fn health(&self) -> Result<HealthStatus, FraudScopeError> {
        let response = self.client.get(self.endpoint("health")).send().await?;
        Self::read(response, HEALTH_FALLBACK).await
    }

    async fn predict(&self, input: &TransactionInput) -> Result<PredictResponse, FraudScopeError> {
        debug!("Sending transaction: {:?}", input);
        let response = self
            .client
            .post(self.endpoint("predict"))
            .json(input)
            .send()
            .await?;
        let result: PredictResponse = Self::read(response, PREDICT_FALLBACK).await.map_err(|e| {
            error!("Scoring API error: {}", e);
            e
        })?;
        debug!("Received result: {:?}", result);
        Ok(result)
    }

    async fn predict_batch(
        &self,
        inputs: &[TransactionInput],
    ) -> Result<PredictResponse, FraudScopeError> {
        debug!("Sending batch of {} transactions", inputs.len());
        let response = self
            .client
            .post(self.endpoint("predict"))
            .json(inputs)
            .send()
            .await?;
        let result: PredictResponse = Self::read(response, PREDICT_FALLBACK).await?;
        if result.predictions.len() != inputs.len() {
            warn!(
                "Batch of {} transactions returned {} predictions",
                inputs.len(),
                result.predictions.len()
            );
        }
        Ok(result)
    }

    async fn model_info(&self) -> Result<ModelInfo, FraudScopeError> {
        let response = self.client.get(self.endpoint("model-info")).send().await?;
        Self::read(response, MODEL_INFO_FALLBACK).await
    }
}

/// Turn a status code and body into a typed result.
///
/// Non-2xx bodies are expected to look like `{"error": "..."}`; when the
/// message is missing or the body is not JSON, `fallback` and the status
/// code are reported instead.
pub fn interpret_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<T, FraudScopeError> {
    if (200..300).contains(&status) {
        return serde_json::from_str(body).map_err(|e| FraudScopeError::Decode(e.to_string()));
    }

    let message = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("{} (HTTP {})", fallback, status));
    Err(FraudScopeError::Api(message))
}

/// Startup connectivity check. Logs the outcome and never fails: the form
/// stays usable whatever the service reports.
pub async fn check_api_status<A: ScoringApi + ?Sized>(api: &A) -> Option<HealthStatus> {
    match api.health().await {
        Ok(status) if status.is_healthy() => {
            info!("API is healthy and ready");
            Some(status)
        }
        Ok(status) => {
            warn!("API is not healthy (status: {})", status.status);
            Some(status)
        }
        Err(FraudScopeError::Api(msg)) => {
            error!("API is not responding: {}", msg);
            None
        }
        Err(e) => {
            error!("Cannot connect to API: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let client = ScoringClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.endpoint("predict"), "http://localhost:8080/predict");
        assert_eq!(client.endpoint("/health"), "http://localhost:8080/health");
    }

    #[test]
    fn test_success_body_parses() {
        let body = r#"{"predictions":[{"prediction":0,"prediction_label":"no_fraud","confidence":{"fraud":0.1,"no_fraud":0.9}}]}"#;
        let resp: PredictResponse = interpret_response(200, body, PREDICT_FALLBACK).unwrap();
        assert_eq!(resp.predictions[0].confidence.fraud, 0.1);
    }

    #[test]
    fn test_api_error_message_extracted() {
        let result: Result<PredictResponse, _> =
            interpret_response(400, r#"{"error":"bad input"}"#, PREDICT_FALLBACK);
        match result {
            Err(FraudScopeError::Api(msg)) => assert_eq!(msg, "bad input"),
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_api_error_falls_back() {
        let result: Result<PredictResponse, _> = interpret_response(500, "<html>oops</html>", PREDICT_FALLBACK);
        match result {
            Err(FraudScopeError::Api(msg)) => assert_eq!(msg, "Analysis request failed (HTTP 500)"),
            other => panic!("expected API error, got {:?}", other),
        }

        let result: Result<PredictResponse, _> = interpret_response(502, r#"{"detail":"x"}"#, PREDICT_FALLBACK);
        assert!(matches!(result, Err(FraudScopeError::Api(m)) if m == "Analysis request failed (HTTP 502)"));
    }

    #[test]
    fn test_malformed_success_body() {
        let result: Result<PredictResponse, _> = interpret_response(200, r#"{"predictions":"nope"}"#, PREDICT_FALLBACK);
        assert!(matches!(result, Err(FraudScopeError::Decode(_))));
    }
}
