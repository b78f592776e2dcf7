//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::api::{ApiError, NewsBackend, NewsItem};

/// A backend that replays scripted responses instead of making HTTP calls.
///
/// Unscripted calls succeed (`[]` for the list, `()` for refresh). When built
/// with [`ScriptedBackend::gated`], every call also parks until the matching
/// `release_*` is called, which lets tests inspect in-flight state.
#[derive(Default)]
pub struct ScriptedBackend {
    news: Mutex<VecDeque<Result<Vec<NewsItem>, ApiError>>>,
    refresh: Mutex<VecDeque<Result<(), ApiError>>>,
    gates: Option<Gates>,
    pub fetch_calls: AtomicUsize,
    pub refresh_calls: AtomicUsize,
}

#[derive(Default)]
struct Gates {
    news: Notify,
    refresh: Notify,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated() -> Self {
        Self {
            gates: Some(Gates::default()),
            ..Self::default()
        }
    }

    pub fn push_news(&self, response: Result<Vec<NewsItem>, ApiError>) {
        self.news.lock().unwrap().push_back(response);
    }

    pub fn push_refresh(&self, response: Result<(), ApiError>) {
        self.refresh.lock().unwrap().push_back(response);
    }

    pub fn release_news(&self) {
        if let Some(gates) = &self.gates {
            gates.news.notify_one();
        }
    }

    pub fn release_refresh(&self) {
        if let Some(gates) = &self.gates {
            gates.refresh.notify_one();
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn refresh_count(&self) -> usize {
        self.refresh_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NewsBackend for ScriptedBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_news(&self) -> Result<Vec<NewsItem>, ApiError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gates) = &self.gates {
            gates.news.notified().await;
        }
        let next = self.news.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn trigger_refresh(&self) -> Result<(), ApiError> {
        self.refresh_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gates) = &self.gates {
            gates.refresh.notified().await;
        }
        let next = self.refresh.lock().unwrap().pop_front();
        next.unwrap_or(Ok(()))
    }
}

/// Builds a news item with predictable fields.
pub fn news_item(rank: u32, title: &str) -> NewsItem {
    NewsItem {
        rank,
        title: title.to_string(),
        url: format!("https://example.com/{rank}"),
        explanation: format!("Explanation for {title}"),
    }
}
