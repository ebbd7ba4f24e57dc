//! Side-effect-free view models for the result panel, history table and
//! transaction detail dialog. Rendering layers only read these.

use crate::history::HistoryEntry;
use crate::risk::{Recommendation, RiskTier};
use crate::types::{Prediction, PredictionLabel};

pub fn format_percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

pub fn format_amount(amount: f64) -> String {
    format!("{:.2}€", amount)
}

pub fn country_name(code: i64) -> &'static str {
    match code {
        1 => "France",
        2 => "United States",
        3 => "United Kingdom",
        4 => "Germany",
        5 => "Other",
        _ => "Unknown",
    }
}

pub fn house_type_name(code: i64) -> &'static str {
    match code {
        1 => "House",
        2 => "Apartment",
        3 => "Villa",
        _ => "Unknown",
    }
}

pub fn gender_name(code: i64) -> &'static str {
    if code == 1 {
        "Male"
    } else {
        "Female"
    }
}

/// Badge class and text for a prediction label.
pub fn label_badge(label: PredictionLabel) -> (&'static str, &'static str) {
    match label {
        PredictionLabel::Fraud => ("bg-danger", "🚨 Fraud"),
        PredictionLabel::NoFraud => ("bg-success", "✅ Legitimate"),
    }
}

/// Everything the result panel shows for one prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub tier: RiskTier,
    pub header_class: &'static str,
    pub headline: &'static str,
    pub fraud_percent: String,
    /// Probability of the more likely class.
    pub confidence_percent: String,
    /// Risk bar width in percent, clamped to 0..=100.
    pub bar_width: f64,
    pub bar_class: &'static str,
    pub risk_label: &'static str,
    pub recommendation: Recommendation,
}

impl ResultView {
    pub fn from_prediction(prediction: &Prediction) -> Self {
        let fraud = prediction.confidence.fraud;
        let no_fraud = prediction.confidence.no_fraud;
        let tier = RiskTier::from_probability(fraud);

        let headline = if prediction.prediction_label.is_fraud() {
            "🚨 SUSPICIOUS TRANSACTION"
        } else {
            "✅ LEGITIMATE TRANSACTION"
        };

        Self {
            tier,
            header_class: tier.color_class(),
            headline,
            fraud_percent: format_percent(fraud),
            confidence_percent: format_percent(fraud.max(no_fraud)),
            bar_width: (fraud * 100.0).clamp(0.0, 100.0),
            bar_class: tier.bar_class(),
            risk_label: tier.label(),
            recommendation: Recommendation::for_prediction(prediction),
        }
    }

    pub fn bar_style(&self) -> String {
        format!("width: {:.1}%", self.bar_width)
    }
}

/// One row of the history table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRowView {
    pub id: i64,
    pub timestamp: String,
    pub amount: String,
    pub country: &'static str,
    pub label_class: &'static str,
    pub label_text: &'static str,
    pub risk_percent: String,
    pub risk_class: &'static str,
}

impl From<&HistoryEntry> for HistoryRowView {
    fn from(entry: &HistoryEntry) -> Self {
        let (label_class, label_text) = label_badge(entry.prediction);
        Self {
            id: entry.id,
            timestamp: entry.timestamp.clone(),
            amount: format_amount(entry.amount),
            country: country_name(entry.country),
            label_class,
            label_text,
            risk_percent: format_percent(entry.risk),
            risk_class: RiskTier::from_probability(entry.risk).bar_class(),
        }
    }
}

/// Contents of the transaction detail dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDetailView {
    pub id: i64,
    pub timestamp: String,
    pub gender: &'static str,
    pub age: String,
    pub housing: &'static str,
    pub amount: String,
    pub country: &'static str,
    pub large_purchase: &'static str,
    pub label_class: &'static str,
    pub label_text: &'static str,
    pub risk_percent: String,
}

impl From<&HistoryEntry> for TransactionDetailView {
    fn from(entry: &HistoryEntry) -> Self {
        let data = &entry.data;
        let (label_class, label_text) = label_badge(entry.prediction);
        Self {
            id: entry.id,
            timestamp: entry.timestamp.clone(),
            gender: gender_name(data.gender),
            age: format!("{} years", data.age),
            housing: house_type_name(data.house_type_id),
            amount: format_amount(data.transaction_amount),
            country: country_name(data.transaction_country),
            large_purchase: if data.large_purchase == 1 { "Yes" } else { "No" },
            label_class,
            label_text,
            risk_percent: format_percent(entry.risk),
        }
    }
}
