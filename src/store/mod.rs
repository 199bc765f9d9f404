pub mod refresh;
pub mod state;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::{ApiError, ExecutionApi};
use crate::models::FilterPatch;

pub use state::StoreState;

/// Locally cached, paginated, filtered view of the execution log plus the
/// unread badge counter. Every mutation goes through a command here; the
/// presentation surface reads snapshots and calls commands, nothing else.
#[derive(Clone)]
pub struct NotificationStore {
    api: Arc<dyn ExecutionApi>,
    state: Arc<RwLock<StoreState>>,
    refresh_task: Arc<Mutex<Option<JoinHandle<()>>>>,
    refresh_interval: Duration,
}

impl NotificationStore {
    pub fn new(api: Arc<dyn ExecutionApi>) -> Self {
        Self::with_refresh_interval(api, crate::config::DEFAULT_REFRESH_INTERVAL)
    }

    pub fn with_refresh_interval(api: Arc<dyn ExecutionApi>, refresh_interval: Duration) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(StoreState::default())),
            refresh_task: Arc::new(Mutex::new(None)),
            refresh_interval,
        }
    }

    pub async fn snapshot(&self) -> StoreState {
        self.state.read().await.clone()
    }

    pub async fn unread_count(&self) -> u64 {
        self.state.read().await.unread_count
    }

    /// Fetch the current page under the active filter and replace the
    /// cached list. A response that arrives after a newer fetch has been
    /// issued is discarded, success or failure alike.
    pub async fn fetch_executions(&self) -> Result<(), ApiError> {
        let (seq, page, filter) = {
            let mut state = self.state.write().await;
            state.loading = true;
            state.fetch_seq += 1;
            (state.fetch_seq, state.current_page, state.filter.clone())
        };

        match self.api.list_executions(page, &filter).await {
            Ok(fetched) => {
                let mut state = self.state.write().await;
                if state.fetch_seq != seq {
                    debug!("Discarding stale execution page (seq {})", seq);
                    return Ok(());
                }

                state.executions = fetched.executions;
                state.unread_count = fetched.unread_count;
                state.total_pages = state::total_pages(fetched.total, fetched.limit);
                state.last_error = None;
                state.loading = false;
                Ok(())
            }
            Err(err) => {
                warn!("Failed to fetch executions: {}", err);

                let mut state = self.state.write().await;
                if state.fetch_seq == seq {
                    // Keep the stale list on screen, surface the message.
                    state.last_error = Some(err.to_string());
                    state.loading = false;
                }
                Err(err)
            }
        }
    }

    /// Badge-only refresh. Runs unattended on the timer, so failures are
    /// logged and swallowed rather than surfaced.
    pub async fn fetch_unread_count(&self) {
        match self.api.unread_count().await {
            Ok(count) => {
                self.state.write().await.unread_count = count;
            }
            Err(err) => {
                warn!("Failed to refresh unread count: {}", err);
            }
        }
    }

    /// Optimistically mark one execution read. Restored if the remote call
    /// fails. Marking an already-read record again leaves the counter
    /// untouched.
    pub async fn mark_as_read(&self, id: &str) -> Result<(), ApiError> {
        let was_unread = {
            let mut state = self.state.write().await;
            let newly_read = match state.executions.iter_mut().find(|e| e.id == id) {
                Some(record) if !record.is_read => {
                    record.is_read = true;
                    true
                }
                _ => false,
            };
            if newly_read {
                state.unread_count = state.unread_count.saturating_sub(1);
            }
            newly_read
        };

        match self.api.mark_read(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("Failed to mark execution {} as read: {}", id, err);
                if was_unread {
                    let mut state = self.state.write().await;
                    if let Some(record) = state.executions.iter_mut().find(|e| e.id == id) {
                        record.is_read = false;
                    }
                    state.unread_count += 1;
                }
                Err(err)
            }
        }
    }

    /// Optimistically mark every cached execution read and zero the badge.
    pub async fn mark_all_as_read(&self) -> Result<(), ApiError> {
        let (unread_ids, prior_count) = {
            let mut state = self.state.write().await;
            let unread_ids: Vec<String> = state
                .executions
                .iter()
                .filter(|e| !e.is_read)
                .map(|e| e.id.clone())
                .collect();
            let prior_count = state.unread_count;

            for record in &mut state.executions {
                record.is_read = true;
            }
            state.unread_count = 0;

            (unread_ids, prior_count)
        };

        match self.api.mark_all_read().await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("Failed to mark all executions read: {}", err);
                let mut state = self.state.write().await;
                for record in &mut state.executions {
                    if unread_ids.contains(&record.id) {
                        record.is_read = false;
                    }
                }
                state.unread_count = prior_count;
                Err(err)
            }
        }
    }

    /// Optimistically drop one execution from the cache; unread records
    /// also decrement the badge. Reinserted in place if the remote delete
    /// fails.
    pub async fn delete_execution(&self, id: &str) -> Result<(), ApiError> {
        let removed = {
            let mut state = self.state.write().await;
            match state.executions.iter().position(|e| e.id == id) {
                Some(index) => {
                    let record = state.executions.remove(index);
                    if !record.is_read {
                        state.unread_count = state.unread_count.saturating_sub(1);
                    }
                    Some((index, record))
                }
                None => None,
            }
        };

        match self.api.delete_execution(id).await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("Failed to delete execution {}: {}", id, err);
                if let Some((index, record)) = removed {
                    let mut state = self.state.write().await;
                    let index = index.min(state.executions.len());
                    if !record.is_read {
                        state.unread_count += 1;
                    }
                    state.executions.insert(index, record);
                }
                Err(err)
            }
        }
    }

    /// Empty the cache and the badge, then delete everything remotely.
    pub async fn clear_all(&self) -> Result<(), ApiError> {
        let (prior_executions, prior_count) = {
            let mut state = self.state.write().await;
            let executions = std::mem::take(&mut state.executions);
            let count = state.unread_count;
            state.unread_count = 0;
            (executions, count)
        };

        match self.api.delete_all().await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!("Failed to clear executions: {}", err);
                let mut state = self.state.write().await;
                state.executions = prior_executions;
                state.unread_count = prior_count;
                Err(err)
            }
        }
    }

    /// Merge a filter change, reset to page 1, refetch.
    pub async fn apply_filter(&self, patch: FilterPatch) -> Result<(), ApiError> {
        {
            let mut state = self.state.write().await;
            state.filter.apply(patch);
            state.current_page = 1;
        }
        self.fetch_executions().await
    }

    /// Jump to a page and refetch. The store does not clamp; callers keep
    /// `page` within `[1, total_pages]`.
    pub async fn set_page(&self, page: u32) -> Result<(), ApiError> {
        {
            let mut state = self.state.write().await;
            state.current_page = page;
        }
        self.fetch_executions().await
    }

    pub async fn open_panel(&self) {
        self.state.write().await.panel_open = true;
    }

    pub async fn close_panel(&self) {
        self.state.write().await.panel_open = false;
    }

    pub async fn toggle_panel(&self) {
        let mut state = self.state.write().await;
        state.panel_open = !state.panel_open;
    }
}
