//! # News Store
//!
//! The controller that owns the dashboard's [`NewsState`] and performs the two
//! backend operations. One store exists per view; clones share the same state.
//!
//! ```text
//! load_news():  LoadStarted → fetch → NewsLoaded | LoadFailed → LoadSettled
//! refresh():    RefreshStarted → trigger → RefreshAccepted → load_news()
//!                                        └→ RefreshFailed
//!               → RefreshSettled
//! ```
//!
//! Each step goes through [`update`], and every applied action is forwarded
//! to the optional observer so a UI loop knows when to redraw. The state lock
//! is only held inside `dispatch`, never across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Local;
use log::{debug, info, warn};
use tokio::sync::mpsc::UnboundedSender;

use crate::api::NewsBackend;
use crate::core::action::{Action, Effect, update};
use crate::core::state::NewsState;

#[derive(Clone)]
pub struct NewsStore {
    inner: Arc<Inner>,
}

struct Inner {
    backend: Arc<dyn NewsBackend>,
    state: Mutex<NewsState>,
    observer: Option<UnboundedSender<Action>>,
}

impl NewsStore {
    pub fn new(backend: Arc<dyn NewsBackend>) -> Self {
        Self::build(backend, None)
    }

    /// Like [`NewsStore::new`], but forwards every applied action to `observer`.
    pub fn with_observer(backend: Arc<dyn NewsBackend>, observer: UnboundedSender<Action>) -> Self {
        Self::build(backend, Some(observer))
    }

    fn build(backend: Arc<dyn NewsBackend>, observer: Option<UnboundedSender<Action>>) -> Self {
        info!("News store created with {} backend", backend.name());
        Self {
            inner: Arc::new(Inner {
                backend,
                state: Mutex::new(NewsState::new()),
                observer,
            }),
        }
    }

    /// A copy of the current state for rendering.
    pub fn snapshot(&self) -> NewsState {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, NewsState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn dispatch(&self, action: Action) -> Effect {
        debug!("Dispatching {:?}", action);
        let effect = update(&mut self.lock(), action.clone());

        if effect == Effect::AlreadyInFlight {
            return effect;
        }
        if let Some(observer) = &self.inner.observer
            && observer.send(action).is_err()
        {
            debug!("Store observer dropped; action not forwarded");
        }
        effect
    }

    /// Fetches the news list and replaces `items` on success.
    ///
    /// Failures land in `error` and leave `items` untouched. `loading` is
    /// cleared on completion regardless of outcome.
    pub async fn load_news(&self) {
        self.dispatch(Action::LoadStarted);

        match self.inner.backend.fetch_news().await {
            Ok(items) => {
                info!("Loaded {} news items", items.len());
                self.dispatch(Action::NewsLoaded {
                    items,
                    at: Local::now(),
                });
            }
            Err(e) => {
                warn!("News fetch failed: {}", e);
                self.dispatch(Action::LoadFailed(e.to_string()));
            }
        }

        self.dispatch(Action::LoadSettled);
    }

    /// Asks the backend to re-source news, then reloads the list.
    ///
    /// The reload is awaited before `refreshing` clears, so the new items are
    /// in place by the time the control re-enables. A failed trigger skips
    /// the reload. Calling this while a refresh is running does nothing.
    pub async fn refresh(&self) {
        if self.dispatch(Action::RefreshStarted) == Effect::AlreadyInFlight {
            info!("Refresh already in flight, ignoring request");
            return;
        }

        match self.inner.backend.trigger_refresh().await {
            Ok(()) => {
                info!("Refresh accepted, reloading news");
                self.dispatch(Action::RefreshAccepted);
                self.load_news().await;
            }
            Err(e) => {
                warn!("Refresh failed: {}", e);
                self.dispatch(Action::RefreshFailed(e.to_string()));
            }
        }

        self.dispatch(Action::RefreshSettled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, Endpoint};
    use crate::test_support::{ScriptedBackend, news_item};
    use tokio::sync::mpsc;

    fn store_with(backend: &Arc<ScriptedBackend>) -> NewsStore {
        NewsStore::new(backend.clone())
    }

    fn observed(
        backend: &Arc<ScriptedBackend>,
    ) -> (NewsStore, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (NewsStore::with_observer(backend.clone(), tx), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<Action>) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    #[tokio::test]
    async fn test_load_news_replaces_items_in_server_order() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_news(Ok(vec![news_item(2, "B"), news_item(1, "A")]));
        let store = store_with(&backend);

        store.load_news().await;

        let state = store.snapshot();
        let titles: Vec<&str> = state.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_load_news_status_failure_keeps_previous_items() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_news(Ok(vec![news_item(1, "Kept")]));
        backend.push_news(Err(ApiError::Status {
            endpoint: Endpoint::News,
            status: 500,
        }));
        let store = store_with(&backend);

        store.load_news().await;
        store.load_news().await;

        let state = store.snapshot();
        assert_eq!(state.items, vec![news_item(1, "Kept")]);
        assert_eq!(state.error.as_deref(), Some("Failed to fetch news"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_load_news_network_failure_uses_underlying_message() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_news(Err(ApiError::Network("connection refused".to_string())));
        let store = store_with(&backend);

        store.load_news().await;

        assert_eq!(store.snapshot().error.as_deref(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_load_news_action_sequence() {
        let backend = Arc::new(ScriptedBackend::new());
        let (store, mut rx) = observed(&backend);

        store.load_news().await;

        let actions = drain(&mut rx);
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0], Action::LoadStarted);
        assert!(matches!(actions[1], Action::NewsLoaded { ref items, .. } if items.is_empty()));
        assert_eq!(actions[2], Action::LoadSettled);
    }

    #[tokio::test]
    async fn test_refresh_chains_load() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_news(Ok(vec![news_item(1, "Fresh")]));
        let (store, mut rx) = observed(&backend);

        store.refresh().await;

        let state = store.snapshot();
        assert_eq!(state.items, vec![news_item(1, "Fresh")]);
        assert!(!state.refreshing);
        assert!(!state.loading);
        assert_eq!(backend.refresh_count(), 1);
        assert_eq!(backend.fetch_count(), 1);

        let actions = drain(&mut rx);
        let last = actions.len() - 1;
        assert_eq!(actions[0], Action::RefreshStarted);
        assert_eq!(actions[1], Action::RefreshAccepted);
        assert_eq!(actions[2], Action::LoadStarted);
        assert!(matches!(actions[3], Action::NewsLoaded { .. }));
        assert_eq!(actions[4], Action::LoadSettled);
        assert_eq!(actions[last], Action::RefreshSettled);
        assert_eq!(actions.len(), 6);
    }

    #[tokio::test]
    async fn test_refresh_failure_skips_load() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_refresh(Err(ApiError::Status {
            endpoint: Endpoint::Refresh,
            status: 500,
        }));
        let store = store_with(&backend);

        store.refresh().await;

        let state = store.snapshot();
        assert_eq!(state.error.as_deref(), Some("Failed to refresh news"));
        assert!(!state.refreshing);
        assert_eq!(backend.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_load_clears_refresh_error() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_refresh(Err(ApiError::Network("timed out".to_string())));
        let store = store_with(&backend);

        store.refresh().await;
        assert_eq!(store.snapshot().error.as_deref(), Some("timed out"));

        store.load_news().await;
        assert!(store.snapshot().error.is_none());
    }

    #[tokio::test]
    async fn test_flags_while_requests_are_in_flight() {
        let backend = Arc::new(ScriptedBackend::gated());
        backend.push_news(Ok(vec![news_item(1, "After refresh")]));
        let (store, mut rx) = observed(&backend);

        let task = tokio::spawn({
            let store = store.clone();
            async move { store.refresh().await }
        });

        // Trigger in flight: only `refreshing` is up.
        assert_eq!(rx.recv().await, Some(Action::RefreshStarted));
        let state = store.snapshot();
        assert!(state.refreshing);
        assert!(!state.loading);

        backend.release_refresh();
        assert_eq!(rx.recv().await, Some(Action::RefreshAccepted));

        // Nested list fetch in flight: both flags up.
        assert_eq!(rx.recv().await, Some(Action::LoadStarted));
        let state = store.snapshot();
        assert!(state.refreshing);
        assert!(state.loading);
        assert!(state.items.is_empty());

        backend.release_news();
        assert!(matches!(rx.recv().await, Some(Action::NewsLoaded { .. })));

        // Items are already in place before `refreshing` clears.
        assert_eq!(rx.recv().await, Some(Action::LoadSettled));
        let state = store.snapshot();
        assert_eq!(state.items.len(), 1);
        assert!(!state.loading);

        assert_eq!(rx.recv().await, Some(Action::RefreshSettled));
        task.await.unwrap();
        let state = store.snapshot();
        assert!(!state.refreshing);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_overlapping_refresh_is_ignored() {
        let backend = Arc::new(ScriptedBackend::gated());
        let (store, mut rx) = observed(&backend);

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.refresh().await }
        });
        assert_eq!(rx.recv().await, Some(Action::RefreshStarted));

        // Returns immediately without touching the backend.
        store.refresh().await;
        assert!(store.snapshot().refreshing);
        assert!(rx.try_recv().is_err());

        backend.release_refresh();
        backend.release_news();
        first.await.unwrap();

        assert_eq!(backend.refresh_count(), 1);
        assert_eq!(backend.fetch_count(), 1);
        assert!(!store.snapshot().refreshing);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let backend = Arc::new(ScriptedBackend::new());
        backend.push_news(Ok(vec![news_item(4, "Shared")]));
        let store = store_with(&backend);
        let other = store.clone();

        other.load_news().await;

        assert_eq!(store.snapshot().items, vec![news_item(4, "Shared")]);
    }
}
