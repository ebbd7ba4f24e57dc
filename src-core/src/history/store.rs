use chrono::{DateTime, Local};
use tracing::{info, warn};

use super::storage::StoragePort;
use super::types::HistoryEntry;
use crate::error::FraudScopeError;
use crate::types::{Prediction, TransactionInput};

/// Most entries kept; older ones are dropped on insert.
pub const DEFAULT_CAPACITY: usize = 50;
/// Storage key the history blob lives under.
pub const DEFAULT_STORAGE_KEY: &str = "transactionHistory";

const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Bounded, newest-first list of past analyses mirrored to a `StoragePort`.
///
/// The whole list is rewritten on every insert. There is a single writer
/// (the UI event loop or the CLI), so no locking is done.
#[derive(Debug, Clone)]
pub struct HistoryStore<S: StoragePort> {
    entries: Vec<HistoryEntry>,
    storage: S,
    key: String,
    capacity: usize,
}

impl<S: StoragePort> HistoryStore<S> {
    pub fn open(storage: S) -> Self {
        Self::open_with(storage, DEFAULT_STORAGE_KEY, DEFAULT_CAPACITY)
    }

    /// Load the persisted list. A missing key starts an empty history; an
    /// unreadable or corrupt blob does too, after logging a warning.
    /// `capacity` is clamped to `1..=DEFAULT_CAPACITY`.
    pub fn open_with(storage: S, key: &str, capacity: usize) -> Self {
        let mut entries = match storage.get(key) {
            Ok(Some(blob)) => match serde_json::from_str::<Vec<HistoryEntry>>(&blob) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding corrupt history under '{}': {}", key, e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read history under '{}': {}", key, e);
                Vec::new()
            }
        };
        let capacity = capacity.clamp(1, DEFAULT_CAPACITY);
        entries.truncate(capacity);
        info!("Loaded {} history entries", entries.len());

        Self {
            entries,
            storage,
            key: key.to_string(),
            capacity,
        }
    }

    /// Record a finished analysis at the current local time.
    pub fn record(
        &mut self,
        prediction: &Prediction,
        input: &TransactionInput,
    ) -> Result<HistoryEntry, FraudScopeError> {
        self.record_at(prediction, input, Local::now())
    }

    /// Prepend a new entry, evict past capacity, and persist.
    ///
    /// If persisting fails the entry stays in memory and the storage
    /// error is returned.
    pub fn record_at(
        &mut self,
        prediction: &Prediction,
        input: &TransactionInput,
        at: DateTime<Local>,
    ) -> Result<HistoryEntry, FraudScopeError> {
        let mut id = at.timestamp_millis();
        if let Some(newest) = self.entries.first() {
            if id <= newest.id {
                id = newest.id + 1;
            }
        }

        let entry = HistoryEntry {
            id,
            timestamp: at.format(DISPLAY_FORMAT).to_string(),
            amount: input.transaction_amount,
            country: input.transaction_country,
            prediction: prediction.prediction_label,
            risk: prediction.fraud_probability(),
            data: input.clone(),
        };

        self.entries.insert(0, entry.clone());
        self.entries.truncate(self.capacity);
        self.persist()?;

        info!(
            "Recorded analysis {} ({}, risk {:.3})",
            entry.id,
            entry.prediction.as_str(),
            entry.risk
        );
        Ok(entry)
    }

    fn persist(&mut self) -> Result<(), FraudScopeError> {
        let blob = serde_json::to_string(&self.entries)
            .map_err(|e| FraudScopeError::Storage(format!("Failed to serialize history: {}", e)))?;
        self.storage.set(&self.key, &blob).map_err(|e| {
            warn!("Failed to persist history: {}", e);
            e
        })
    }

    /// Newest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn lookup(&self, id: i64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::history::storage::MemoryStorage;
    use crate::types::{Confidence, PredictionLabel};

    fn input(amount: f64) -> TransactionInput {
        TransactionInput {
            gender: 1,
            age: 37,
            house_type_id: 0,
            contact_availability_id: 1,
            home_country: 1,
            account_no: 12345,
            card_expiry_date: 202512,
            transaction_amount: amount,
            transaction_country: 2,
            large_purchase: 0,
            product_id: 3,
            cif: 67890,
            transaction_currency_code: 1,
        }
    }

    fn prediction(fraud: f64) -> Prediction {
        Prediction {
            transaction_id: Some(0),
            prediction: u8::from(fraud > 0.5),
            prediction_label: if fraud > 0.5 {
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

    fn at(secs: i64) -> DateTime<Local> {
        Local.timestamp_opt(1_760_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_record_builds_entry() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        let entry = store.record_at(&prediction(0.1), &input(42.5), at(0)).unwrap();

        assert_eq!(entry.id, at(0).timestamp_millis());
        assert_eq!(entry.amount, 42.5);
        assert_eq!(entry.country, 2);
        assert_eq!(entry.prediction, PredictionLabel::NoFraud);
        assert_eq!(entry.risk, 0.1);
        assert_eq!(entry.data, input(42.5));
        assert_eq!(entry.timestamp, at(0).format("%d/%m/%Y %H:%M:%S").to_string());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_newest_first_and_capacity() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        for i in 0..51 {
            store.record_at(&prediction(0.2), &input(i as f64), at(i)).unwrap();
        }

        assert_eq!(store.len(), DEFAULT_CAPACITY);
        assert_eq!(store.entries()[0].amount, 50.0);
        assert_eq!(store.entries()[49].amount, 1.0);
        assert!(store.entries().iter().all(|e| e.amount != 0.0), "oldest entry should be evicted");
    }

    #[test]
    fn test_persisted_blob_is_capped() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        for i in 0..60 {
            store.record_at(&prediction(0.2), &input(i as f64), at(i)).unwrap();
        }
        let blob = store.storage().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        let persisted: Vec<HistoryEntry> = serde_json::from_str(&blob).unwrap();
        assert_eq!(persisted.len(), 50);
    }

    #[test]
    fn test_reopen_reproduces_sequence() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        for i in 0..5 {
            store.record_at(&prediction(0.1 * i as f64), &input(i as f64), at(i)).unwrap();
        }
        let before = store.entries().to_vec();

        let reopened = HistoryStore::open(store.into_storage());
        assert_eq!(reopened.entries(), before.as_slice());
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        let a = store.record_at(&prediction(0.1), &input(1.0), at(0)).unwrap();
        let b = store.record_at(&prediction(0.1), &input(2.0), at(0)).unwrap();
        assert_eq!(b.id, a.id + 1);
        assert_eq!(store.lookup(a.id).unwrap().amount, 1.0);
        assert_eq!(store.lookup(b.id).unwrap().amount, 2.0);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let mut store = HistoryStore::open(MemoryStorage::new());
        store.record_at(&prediction(0.1), &input(1.0), at(0)).unwrap();
        assert!(store.lookup(-1).is_none());
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let storage = MemoryStorage::new().with_value(DEFAULT_STORAGE_KEY, "{not json");
        let store = HistoryStore::open(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_loads_browser_written_history() {
        let blob = r#"[{"id":1760000000000,"timestamp":"09/10/2025 10:53:20","amount":0,"country":1,
            "prediction":"fraud","risk":0.87,
            "data":{"Gender":0,"Age":37,"HouseTypeID":0,"ContactAvaliabilityID":1,"HomeCountry":1,
            "AccountNo":12345,"CardExpiryDate":202512,"TransactionAmount":0,"TransactionCountry":1,
            "LargePurchase":0,"ProductID":3,"CIF":67890,"TransactionCurrencyCode":1}}]"#;
        let store = HistoryStore::open(MemoryStorage::new().with_value(DEFAULT_STORAGE_KEY, blob));

        assert_eq!(store.len(), 1);
        let entry = store.lookup(1_760_000_000_000).unwrap();
        assert_eq!(entry.prediction, PredictionLabel::Fraud);
        assert_eq!(entry.data.gender, 0);
    }

    #[test]
    fn test_failed_persist_keeps_entry_in_memory() {
        let mut store = HistoryStore::open(MemoryStorage::rejecting_writes());
        let result = store.record_at(&prediction(0.1), &input(1.0), at(0));
        assert!(matches!(result, Err(FraudScopeError::Storage(_))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_custom_key_and_capacity() {
        let mut store = HistoryStore::open_with(MemoryStorage::new(), "custom", 3);
        for i in 0..5 {
            store.record_at(&prediction(0.1), &input(i as f64), at(i)).unwrap();
        }
        assert_eq!(store.len(), 3);
        assert!(store.storage().get("custom").unwrap().is_some());
        assert!(store.storage().get(DEFAULT_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_capacity_never_exceeds_cap() {
        let mut store = HistoryStore::open_with(MemoryStorage::new(), DEFAULT_STORAGE_KEY, 120);
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);
        for i in 0..100 {
            store.record_at(&prediction(0.1), &input(i as f64), at(i)).unwrap();
        }
        assert_eq!(store.len(), DEFAULT_CAPACITY);

        let store = HistoryStore::open_with(MemoryStorage::new(), DEFAULT_STORAGE_KEY, 0);
        assert_eq!(store.capacity(), 1);
    }
}
