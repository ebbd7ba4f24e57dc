//! Application state shared through Leptos context.

use std::time::Duration;

use fraudscope_core::analysis;
use fraudscope_core::{
    ClientConfig, FraudScopeError, HistoryStore, Notice, PredictResponse, ResultView, StoragePort,
    TransactionInput,
};
use leptos::prelude::*;
use tracing::error;

use crate::dom::BrowserStorage;

/// How long a toast stays up unless dismissed.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(5);
/// Delay between a request finishing and the loading overlay going away.
pub const LOADING_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notice });
        id
    }

    /// Dismissing a toast that is already gone is fine.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Deferred state change, run by a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Followup {
    HideLoading,
    DismissToast(u64),
}

/// What a settled scoring request left to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    /// A result was rendered and should be scrolled into view.
    pub scored: bool,
    pub followups: Vec<(Duration, Followup)>,
}

pub struct AppState<S: StoragePort + Send + Sync + 'static = BrowserStorage> {
    pub history: RwSignal<HistoryStore<S>>,
    /// Latest scored result; `None` keeps the result section hidden.
    pub result: RwSignal<Option<ResultView>>,
    pub toasts: RwSignal<ToastQueue>,
    pub loading: RwSignal<bool>,
    /// History entry shown in the detail modal.
    pub selected: RwSignal<Option<i64>>,
}

impl<S: StoragePort + Send + Sync + 'static> Clone for AppState<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: StoragePort + Send + Sync + 'static> Copy for AppState<S> {}

impl AppState<BrowserStorage> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_storage(BrowserStorage, config)
    }
}

impl<S: StoragePort + Send + Sync + 'static> AppState<S> {
    pub fn with_storage(storage: S, config: &ClientConfig) -> Self {
        let history = HistoryStore::open_with(storage, &config.storage_key, config.history_capacity);
        Self {
            history: RwSignal::new(history),
            result: RwSignal::new(None),
            toasts: RwSignal::new(ToastQueue::default()),
            loading: RwSignal::new(false),
            selected: RwSignal::new(None),
        }
    }

    /// Queue a toast without scheduling its removal.
    pub fn post(&self, notice: Notice) -> Followup {
        let mut id = 0;
        self.toasts.update(|q| id = q.push(notice));
        Followup::DismissToast(id)
    }

    /// Show a toast and schedule its removal.
    pub fn notify(&self, notice: Notice) {
        let dismiss = self.post(notice);
        self.schedule(TOAST_LIFETIME, dismiss);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|q| q.dismiss(id));
    }

    pub fn run(&self, followup: Followup) {
        match followup {
            Followup::HideLoading => self.loading.set(false),
            Followup::DismissToast(id) => self.dismiss(id),
        }
    }

    pub fn schedule(&self, delay: Duration, followup: Followup) {
        let state = *self;
        set_timeout(move || state.run(followup), delay);
    }

    /// Apply the response to a submission: record and show the result, or
    /// report the failure. Either way the loading overlay is due to hide.
    pub fn settle(
        &self,
        input: TransactionInput,
        response: Result<PredictResponse, FraudScopeError>,
    ) -> Settled {
        let outcome = match response {
            Ok(response) => self
                .history
                .try_update(|h| analysis::complete(h, input, response)),
            Err(e) => Some(Err(e)),
        };

        let mut followups = Vec::new();
        let mut scored = false;
        match outcome {
            Some(Ok(outcome)) => {
                self.result.set(Some(outcome.view));
                followups.push((TOAST_LIFETIME, self.post(outcome.notice)));
                scored = true;
            }
            Some(Err(e)) => {
                error!("Analysis failed: {}", e);
                followups.push((TOAST_LIFETIME, self.post(Notice::from_error(&e))));
            }
            None => {}
        }
        followups.push((LOADING_GRACE, Followup::HideLoading));

        Settled { scored, followups }
    }
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fraudscope_core::validation::parse_input;
    use fraudscope_core::{
        Confidence, FormValues, MemoryStorage, Prediction, PredictionLabel,
    };

    fn state() -> AppState<MemoryStorage> {
        let state = AppState::with_storage(MemoryStorage::new(), &ClientConfig::default());
        state.loading.set(true);
        state
    }

    fn low_risk_response() -> PredictResponse {
        PredictResponse {
            predictions: vec![Prediction {
                transaction_id: Some(0),
                prediction: 0,
                prediction_label: PredictionLabel::NoFraud,
                confidence: Confidence { fraud: 0.1, no_fraud: 0.9 },
                timestamp: None,
            }],
            model_info: None,
            timestamp: None,
        }
    }

    fn run_all<S: StoragePort + Send + Sync + 'static>(state: &AppState<S>, settled: &Settled) {
        for &(_, followup) in &settled.followups {
            state.run(followup);
        }
    }

    #[test]
    fn test_toast_ids_are_unique() {
        let mut q = ToastQueue::default();
        let a = q.push(Notice::info("a"));
        let b = q.push(Notice::error("b"));
        assert_ne!(a, b);
        assert_eq!(q.toasts().len(), 2);
        assert_eq!(q.toasts()[0].notice.message, "a");
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let mut q = ToastQueue::default();
        let a = q.push(Notice::info("a"));
        let b = q.push(Notice::info("b"));
        q.dismiss(a);
        assert_eq!(q.toasts().len(), 1);
        assert_eq!(q.toasts()[0].id, b);

        q.dismiss(a);
        assert_eq!(q.toasts().len(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_dismiss() {
        let mut q = ToastQueue::default();
        let a = q.push(Notice::info("a"));
        q.dismiss(a);
        let b = q.push(Notice::info("b"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_settle_success_shows_result_and_hides_loading() {
        let state = state();
        let input = parse_input(&FormValues::default()).unwrap();

        let settled = state.settle(input, Ok(low_risk_response()));
        assert!(settled.scored);
        assert!(settled.followups.contains(&(LOADING_GRACE, Followup::HideLoading)));
        assert_eq!(state.history.with(|h| h.len()), 1);
        assert_eq!(state.result.with(|r| r.as_ref().map(|v| v.fraud_percent.clone())), Some("10.0%".to_string()));
        assert_eq!(
            state.toasts.with(|q| q.toasts()[0].notice.message.clone()),
            "Analysis completed successfully"
        );

        // Still loading until the grace period runs out
        assert!(state.loading.get_untracked());
        run_all(&state, &settled);
        assert!(!state.loading.get_untracked());
        assert!(state.toasts.with(|q| q.toasts().is_empty()));
    }

    #[test]
    fn test_settle_api_error_reports_message_and_hides_loading() {
        let state = state();
        let input = parse_input(&FormValues::default()).unwrap();

        let settled = state.settle(input, Err(FraudScopeError::Api("bad input".to_string())));
        assert!(!settled.scored);
        assert!(settled.followups.contains(&(LOADING_GRACE, Followup::HideLoading)));
        assert!(state.history.with(|h| h.is_empty()));
        assert!(state.result.with(|r| r.is_none()));
        assert_eq!(state.toasts.with(|q| q.toasts()[0].notice.message.clone()), "bad input");

        run_all(&state, &settled);
        assert!(!state.loading.get_untracked());
    }

    #[test]
    fn test_settle_transport_error_wording() {
        let state = state();
        let input = parse_input(&FormValues::default()).unwrap();

        state.settle(input, Err(FraudScopeError::Transport("connection refused".to_string())));
        assert_eq!(
            state.toasts.with(|q| q.toasts()[0].notice.message.clone()),
            "Analysis failed: Network error: connection refused"
        );
    }
}
