///! NEO feed updater
///!
///! Fetch → parse → render one cycle, plus the single-shot background task
///! wrapper. The task owns the whole cycle; dropping its handle aborts the
///! in-flight request, so a discarded caller never receives a result.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task::JoinHandle;

use super::parser::parse_feed_json;
use super::render::render_feed;
use crate::client::NeoApiClient;

pub struct FeedUpdater {
    client: NeoApiClient,
}

impl FeedUpdater {
    pub fn new(client: NeoApiClient) -> Self {
        Self { client }
    }

    /// Fetch → parse → render one cycle. Returns the formatted summary
    /// text; any failure along the way surfaces as one error.
    pub async fn update(&self, start_date: &str, end_date: &str) -> Result<String> {
        let body = self
            .client
            .fetch_feed(start_date, end_date)
            .await
            .context("Failed to GET NEO feed")?;

        let snapshot = parse_feed_json(&body).context("Failed to parse NEO feed JSON")?;

        tracing::info!(
            "NEO feed snapshot: {} objects in {} date groups, fetched at {}",
            snapshot.total_objects(),
            snapshot.groups.len(),
            snapshot.fetched_at
        );

        Ok(render_feed(&snapshot))
    }

    /// Spawn the fetch as a one-shot background task. The caller awaits
    /// [`FeedTask::into_result`] to receive the outcome exactly once.
    pub fn spawn(self: Arc<Self>, start_date: String, end_date: String) -> FeedTask {
        let handle = tokio::spawn(async move { self.update(&start_date, &end_date).await });
        FeedTask {
            handle: Some(handle),
        }
    }
}

/// Handle to one in-flight feed fetch. Aborts the task when dropped
/// without being awaited.
pub struct FeedTask {
    handle: Option<JoinHandle<Result<String>>>,
}

impl FeedTask {
    /// Wait for the fetch to finish. Consumes the handle, so the result
    /// is delivered at most once.
    pub async fn into_result(mut self) -> Result<String> {
        let handle = self.handle.take().expect("handle taken only here");
        handle.await.context("Feed task was cancelled")?
    }

    pub fn abort(&self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}

impl Drop for FeedTask {
    fn drop(&mut self) {
        if let Some(handle) = &self.handle {
            handle.abort();
        }
    }
}
