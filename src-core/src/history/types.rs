use serde::{Deserialize, Serialize};

use crate::types::{PredictionLabel, TransactionInput};

/// One past analysis, as persisted.
///
/// Keys are kept short (`risk`, `data`, ...) because this is the layout
/// already sitting in users' browser storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation time in epoch milliseconds; unique within a store.
    pub id: i64,
    /// Local creation time, formatted for display.
    pub timestamp: String,
    pub amount: f64,
    pub country: i64,
    pub prediction: PredictionLabel,
    /// Fraud probability at the time of the analysis.
    pub risk: f64,
    pub data: TransactionInput,
}
