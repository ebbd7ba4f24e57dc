//! The submit pipeline: validate → score → render → record.
//!
//! Split into a synchronous `prepare`, the network call, and a synchronous
//! `complete`, so a UI can hold its state only around the sync halves and
//! never across the await.

use tracing::{info, warn};

use crate::client::ScoringApi;
use crate::error::FraudScopeError;
use crate::fields::FormValues;
use crate::history::{HistoryEntry, HistoryStore, StoragePort};
use crate::types::{Prediction, PredictResponse, TransactionInput};
use crate::validation::{parse_input, validate_form};
use crate::view::ResultView;

pub const MSG_ANALYSIS_DONE: &str = "Analysis completed successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Warning,
    Error,
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    /// Notification for a failed submission.
    pub fn from_error(err: &FraudScopeError) -> Self {
        Self::error(err.user_message())
    }

    pub fn alert_class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "alert-success",
            NoticeKind::Info => "alert-info",
            NoticeKind::Warning => "alert-warning",
            NoticeKind::Error => "alert-danger",
        }
    }
}

/// Result of a scored submission.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOutcome {
    pub input: TransactionInput,
    pub prediction: Prediction,
    pub view: ResultView,
    /// `None` when the history could not be persisted.
    pub entry: Option<HistoryEntry>,
    pub notice: Notice,
}

/// Validate every field, then parse. Nothing reaches the network unless
/// both succeed.
pub fn prepare(values: &FormValues) -> Result<TransactionInput, FraudScopeError> {
    validate_form(values)?;
    parse_input(values)
}

/// Build the result view from the first prediction and record it.
///
/// A history write failure does not hide the result: the outcome still
/// carries the view, with an error notice in place of the success one.
pub fn complete<S: StoragePort>(
    history: &mut HistoryStore<S>,
    input: TransactionInput,
    response: PredictResponse,
) -> Result<AnalysisOutcome, FraudScopeError> {
    let prediction = response
        .predictions
        .into_iter()
        .next()
        .ok_or_else(|| FraudScopeError::Decode("response contained no predictions".to_string()))?;

    let view = ResultView::from_prediction(&prediction);
    info!(
        "Scored transaction: {} (fraud {:.3}, {} risk)",
        prediction.prediction_label.as_str(),
        prediction.fraud_probability(),
        view.tier.as_str()
    );

    let (entry, notice) = match history.record(&prediction, &input) {
        Ok(entry) => (Some(entry), Notice::success(MSG_ANALYSIS_DONE)),
        Err(e) => {
            warn!("Result shown but not saved to history: {}", e);
            (None, Notice::from_error(&e))
        }
    };

    Ok(AnalysisOutcome {
        input,
        prediction,
        view,
        entry,
        notice,
    })
}

/// Run the whole pipeline against `api`.
pub async fn submit<A, S>(
    api: &A,
    history: &mut HistoryStore<S>,
    values: &FormValues,
) -> Result<AnalysisOutcome, FraudScopeError>
where
    A: ScoringApi + ?Sized,
    S: StoragePort,
{
    let input = prepare(values)?;
    let response = api.predict(&input).await?;
    complete(history, input, response)
}
