//! Client-side plumbing for the FraudScope transaction scoring service.
//!
//! The scoring model lives behind the service's `/predict` endpoint. This
//! crate owns everything on the client side of that wire: form validation,
//! payload marshalling, risk tiering, view models for the result panel and
//! a bounded history of past analyses behind a pluggable storage port.

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod history;
pub mod risk;
pub mod types;
pub mod validation;
pub mod view;

pub use analysis::{AnalysisOutcome, Notice, NoticeKind};
pub use client::{ScoringApi, ScoringClient};
pub use config::ClientConfig;
pub use error::FraudScopeError;
pub use fields::{FieldId, FormPreset, FormValues};
pub use history::{HistoryEntry, HistoryStore, MemoryStorage, StoragePort};
pub use risk::{Recommendation, RiskTier};
pub use types::{Confidence, HealthStatus, ModelInfo, PredictResponse, Prediction, PredictionLabel, TransactionInput};
pub use view::{HistoryRowView, ResultView, TransactionDetailView};
