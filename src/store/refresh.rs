use tracing::{debug, info, warn};

use crate::store::NotificationStore;

impl NotificationStore {
    /// Install the background reconciliation task. At most one exists per
    /// store; calling this while one is running is a no-op. Each tick does
    /// a full page resync when the panel is open and a cheap badge refresh
    /// otherwise.
    pub async fn start_auto_refresh(&self) {
        let mut task = self.refresh_task.lock().await;
        if task.is_some() {
            debug!("Auto-refresh already running");
            return;
        }

        info!("Starting auto-refresh every {:?}", self.refresh_interval);

        let store = self.clone();
        *task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(store.refresh_interval);
            // The first tick completes immediately; the period starts now.
            interval.tick().await;

            loop {
                interval.tick().await;

                let panel_open = store.state.read().await.panel_open;
                if panel_open {
                    if let Err(err) = store.fetch_executions().await {
                        warn!("Auto-refresh fetch failed: {}", err);
                    }
                } else {
                    store.fetch_unread_count().await;
                }
            }
        }));
    }

    /// Cancel the reconciliation task if one is running.
    pub async fn stop_auto_refresh(&self) {
        if let Some(task) = self.refresh_task.lock().await.take() {
            info!("Stopping auto-refresh");
            task.abort();
        }
    }

    pub async fn auto_refresh_running(&self) -> bool {
        self.refresh_task.lock().await.is_some()
    }
}
