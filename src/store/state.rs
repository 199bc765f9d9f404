use crate::models::{Execution, ExecutionFilter};

/// Everything the notification panel renders from. Owned by
/// [`NotificationStore`](crate::store::NotificationStore); consumers read
/// snapshots and never mutate fields directly.
#[derive(Debug, Clone)]
pub struct StoreState {
    pub executions: Vec<Execution>,

    pub unread_count: u64,

    pub filter: ExecutionFilter,

    // 1-based. Consumers keep it within [1, total_pages].
    pub current_page: u32,
    pub total_pages: u32,

    pub loading: bool,

    // Only fetch_executions failures land here (panel inline error).
    pub last_error: Option<String>,

    pub panel_open: bool,

    pub(crate) fetch_seq: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            executions: Vec::new(),
            unread_count: 0,
            filter: ExecutionFilter::default(),
            current_page: 1,
            total_pages: 0,
            loading: false,
            last_error: None,
            panel_open: false,
            fetch_seq: 0,
        }
    }
}

pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    total.div_ceil(limit as u64) as u32
}
