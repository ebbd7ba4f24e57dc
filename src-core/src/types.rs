use serde::{Deserialize, Serialize};

/// One transaction as the scoring model expects it.
///
/// Field declaration order is the serialization order, and the scoring
/// service reads features positionally, so do not reorder these. The
/// `ContactAvaliabilityID` spelling is part of the service's schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    #[serde(rename = "Gender")]
    pub gender: i64,
    #[serde(rename = "Age")]
    pub age: i64,
    #[serde(rename = "HouseTypeID")]
    pub house_type_id: i64,
    #[serde(rename = "ContactAvaliabilityID")]
    pub contact_availability_id: i64,
    #[serde(rename = "HomeCountry")]
    pub home_country: i64,
    #[serde(rename = "AccountNo")]
    pub account_no: i64,
    #[serde(rename = "CardExpiryDate")]
    pub card_expiry_date: i64,
    #[serde(rename = "TransactionAmount")]
    pub transaction_amount: f64,
    #[serde(rename = "TransactionCountry")]
    pub transaction_country: i64,
    #[serde(rename = "LargePurchase")]
    pub large_purchase: i64,
    #[serde(rename = "ProductID")]
    pub product_id: i64,
    #[serde(rename = "CIF")]
    pub cif: i64,
    #[serde(rename = "TransactionCurrencyCode")]
    pub transaction_currency_code: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionLabel {
    Fraud,
    NoFraud,
}

impl PredictionLabel {
    pub fn is_fraud(self) -> bool {
        matches!(self, PredictionLabel::Fraud)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PredictionLabel::Fraud => "fraud",
            PredictionLabel::NoFraud => "no_fraud",
        }
    }
}

/// Class probabilities reported by the model. Expected to sum to 1.0,
/// which is not checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Confidence {
    pub fraud: f64,
    pub no_fraud: f64,
}

/// A single scored transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<u32>,
    /// Binary decision: 1 flags the transaction as fraud.
    pub prediction: u8,
    pub prediction_label: PredictionLabel,
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Prediction {
    pub fn is_flagged(&self) -> bool {
        self.prediction == 1
    }

    pub fn fraud_probability(&self) -> f64 {
        self.confidence.fraud
    }
}

/// Model summary attached to every `/predict` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseModelInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub f1_score: f64,
}

/// Body of a successful `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<Prediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_info: Option<ResponseModelInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model_loaded: Option<bool>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Body of `GET /model-info`. Only the commonly reported keys are typed;
/// anything else the service includes is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub f1_score: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Error body returned by the service with a non-2xx status.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> TransactionInput {
        TransactionInput {
            gender: 1,
            age: 37,
            house_type_id: 0,
            contact_availability_id: 1,
            home_country: 1,
            account_no: 12345,
            card_expiry_date: 202512,
            transaction_amount: 0.0,
            transaction_country: 1,
            large_purchase: 0,
            product_id: 3,
            cif: 67890,
            transaction_currency_code: 1,
        }
    }

    #[test]
    fn test_payload_key_order() {
        let json = serde_json::to_string(&sample_input()).unwrap();
        let keys = [
            "Gender",
            "Age",
            "HouseTypeID",
            "ContactAvaliabilityID",
            "HomeCountry",
            "AccountNo",
            "CardExpiryDate",
            "TransactionAmount",
            "TransactionCountry",
            "LargePurchase",
            "ProductID",
            "CIF",
            "TransactionCurrencyCode",
        ];
        let positions: Vec<usize> = keys
            .iter()
            .map(|k| json.find(&format!("\"{}\"", k)).unwrap_or_else(|| panic!("missing {}", k)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "keys out of order: {}", json);
    }

    #[test]
    fn test_amount_serializes_as_float() {
        let value = serde_json::to_value(sample_input()).unwrap();
        assert!(value["TransactionAmount"].is_f64());
        assert!(value["Age"].is_i64());
    }

    #[test]
    fn test_parse_full_predict_response() {
        let body = r#"{
            "predictions": [{
                "transaction_id": 0,
                "prediction": 1,
                "prediction_label": "fraud",
                "confidence": {"no_fraud": 0.2, "fraud": 0.8},
                "timestamp": "2025-01-01T10:00:00"
            }],
            "model_info": {"name": "RandomForest", "f1_score": 0.91},
            "timestamp": "2025-01-01T10:00:00"
        }"#;
        let resp: PredictResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.predictions.len(), 1);
        let p = &resp.predictions[0];
        assert!(p.is_flagged());
        assert_eq!(p.prediction_label, PredictionLabel::Fraud);
        assert_eq!(p.fraud_probability(), 0.8);
        assert_eq!(resp.model_info.unwrap().name, "RandomForest");
    }

    #[test]
    fn test_parse_minimal_predict_response() {
        let body = r#"{"predictions":[{"prediction":0,"prediction_label":"no_fraud","confidence":{"fraud":0.1,"no_fraud":0.9}}]}"#;
        let resp: PredictResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.predictions[0].prediction_label, PredictionLabel::NoFraud);
        assert!(resp.model_info.is_none());
    }

    #[test]
    fn test_model_info_keeps_unknown_keys() {
        let body = r#"{"model_name":"XGB","accuracy":0.97,"f1_score":0.9,"features":["Age","CIF"],"trained_on":"2025-01"}"#;
        let info: ModelInfo = serde_json::from_str(body).unwrap();
        assert_eq!(info.model_name.as_deref(), Some("XGB"));
        assert_eq!(info.features.len(), 2);
        assert_eq!(info.extra["trained_on"], "2025-01");
    }

    #[test]
    fn test_health_status() {
        let ok: HealthStatus = serde_json::from_str(r#"{"status":"healthy","model_loaded":true}"#).unwrap();
        assert!(ok.is_healthy());
        let down: HealthStatus = serde_json::from_str(r#"{"status":"unhealthy"}"#).unwrap();
        assert!(!down.is_healthy());
    }
}
