use serde::{Deserialize, Serialize};

use crate::types::Prediction;

/// Fraud probability above which a transaction is high risk.
pub const HIGH_RISK_THRESHOLD: f64 = 0.5;
/// Fraud probability above which a transaction is at least moderate risk.
pub const MODERATE_RISK_THRESHOLD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    pub fn from_probability(fraud_probability: f64) -> Self {
        if fraud_probability > HIGH_RISK_THRESHOLD {
            RiskTier::High
        } else if fraud_probability > MODERATE_RISK_THRESHOLD {
            RiskTier::Moderate
        } else {
            RiskTier::Low
        }
    }

    /// Classes for the result header and risk indicator.
    pub fn color_class(self) -> &'static str {
        match self {
            RiskTier::High => "bg-danger text-white",
            RiskTier::Moderate => "bg-warning text-dark",
            RiskTier::Low => "bg-success text-white",
        }
    }

    /// Background class for the risk bar and history badges.
    pub fn bar_class(self) -> &'static str {
        match self {
            RiskTier::High => "bg-danger",
            RiskTier::Moderate => "bg-warning",
            RiskTier::Low => "bg-success",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::High => "🔴 HIGH RISK",
            RiskTier::Moderate => "🟡 MODERATE RISK",
            RiskTier::Low => "🟢 LOW RISK",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }
}

/// What the analyst should do next with a scored transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    ImmediateAction,
    EnhancedMonitoring,
    Approved,
}

impl Recommendation {
    /// The model's binary decision takes precedence over the probability:
    /// a flagged transaction always gets the immediate-action template.
    pub fn for_prediction(prediction: &Prediction) -> Self {
        if prediction.is_flagged() {
            Recommendation::ImmediateAction
        } else if prediction.fraud_probability() > MODERATE_RISK_THRESHOLD {
            Recommendation::EnhancedMonitoring
        } else {
            Recommendation::Approved
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Recommendation::ImmediateAction => "Immediate Action Required",
            Recommendation::EnhancedMonitoring => "Enhanced Monitoring",
            Recommendation::Approved => "Transaction Approved",
        }
    }

    pub fn alert_class(self) -> &'static str {
        match self {
            Recommendation::ImmediateAction => "alert alert-danger",
            Recommendation::EnhancedMonitoring => "alert alert-warning",
            Recommendation::Approved => "alert alert-success",
        }
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Recommendation::ImmediateAction => "bi bi-exclamation-triangle",
            Recommendation::EnhancedMonitoring => "bi bi-shield-exclamation",
            Recommendation::Approved => "bi bi-check-circle",
        }
    }

    pub fn actions(self) -> &'static [&'static str] {
        match self {
            Recommendation::ImmediateAction => &[
                "Temporarily block the transaction",
                "Contact the customer immediately",
                "Review the account's transaction history",
                "Report to the security team",
            ],
            Recommendation::EnhancedMonitoring => &[
                "Analyse the transaction patterns",
                "Review the customer's history",
                "Monitor upcoming transactions",
                "Consider a manual review",
            ],
            Recommendation::Approved => &[
                "Approve the transaction",
                "Continue normal monitoring",
                "Record it in the history",
                "Keep the current trust level",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Confidence, PredictionLabel};

    fn prediction(flag: u8, fraud: f64) -> Prediction {
        Prediction {
            transaction_id: None,
            prediction: flag,
            prediction_label: if flag == 1 {
                PredictionLabel::Fraud
            } else {
                PredictionLabel::NoFraud
            },
            confidence: Confidence {
                fraud,
                no_fraud: 1.0 - fraud,
            },
            timestamp: None,
        }
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(RiskTier::from_probability(0.0), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(0.3), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(0.300_001), RiskTier::Moderate);
        assert_eq!(RiskTier::from_probability(0.5), RiskTier::Moderate);
        assert_eq!(RiskTier::from_probability(0.500_001), RiskTier::High);
        assert_eq!(RiskTier::from_probability(1.0), RiskTier::High);
    }

    #[test]
    fn test_tier_classes() {
        assert_eq!(RiskTier::High.color_class(), "bg-danger text-white");
        assert_eq!(RiskTier::Moderate.color_class(), "bg-warning text-dark");
        assert_eq!(RiskTier::Low.bar_class(), "bg-success");
    }

    #[test]
    fn test_flag_overrides_probability() {
        assert_eq!(
            Recommendation::for_prediction(&prediction(1, 0.1)),
            Recommendation::ImmediateAction
        );
    }

    #[test]
    fn test_recommendation_by_probability() {
        assert_eq!(
            Recommendation::for_prediction(&prediction(0, 0.45)),
            Recommendation::EnhancedMonitoring
        );
        assert_eq!(
            Recommendation::for_prediction(&prediction(0, 0.3)),
            Recommendation::Approved
        );
    }

    #[test]
    fn test_each_template_has_four_actions() {
        for rec in [
            Recommendation::ImmediateAction,
            Recommendation::EnhancedMonitoring,
            Recommendation::Approved,
        ] {
            assert_eq!(rec.actions().len(), 4);
        }
    }
}
