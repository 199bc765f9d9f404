use serde::{Deserialize, Serialize};

use crate::models::execution::{Execution, ExecutionStatus};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionFilter {
    pub status: Option<ExecutionStatus>,

    pub action_id: Option<String>,

    pub unread_only: Option<bool>,

    pub limit: u32,
}

impl Default for ExecutionFilter {
    fn default() -> Self {
        Self {
            status: None,
            action_id: None,
            unread_only: None,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ExecutionFilter {
    /// Query parameters for the list endpoint. `page` is appended by the
    /// caller since pagination lives outside the filter.
    pub fn to_query(&self, page: u32) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("page", page.to_string()),
            ("limit", self.limit.to_string()),
        ];

        if let Some(status) = self.status {
            query.push(("status", status.as_str().to_string()));
        }

        if let Some(action_id) = &self.action_id {
            query.push(("action_id", action_id.clone()));
        }

        if self.unread_only == Some(true) {
            query.push(("unread_only", "true".to_string()));
        }

        query
    }

    /// Merge a partial update into this filter. `None` fields are left
    /// untouched; the outer `Some` on optional filters carries the new
    /// value, including `Some(None)` to clear one.
    pub fn apply(&mut self, patch: FilterPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(action_id) = patch.action_id {
            self.action_id = action_id;
        }
        if let Some(unread_only) = patch.unread_only {
            self.unread_only = unread_only;
        }
        if let Some(limit) = patch.limit {
            self.limit = limit;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub status: Option<Option<ExecutionStatus>>,
    pub action_id: Option<Option<String>>,
    pub unread_only: Option<Option<bool>>,
    pub limit: Option<u32>,
}

impl FilterPatch {
    pub fn status(status: Option<ExecutionStatus>) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn action(action_id: Option<String>) -> Self {
        Self {
            action_id: Some(action_id),
            ..Self::default()
        }
    }

    pub fn unread_only(unread_only: Option<bool>) -> Self {
        Self {
            unread_only: Some(unread_only),
            ..Self::default()
        }
    }
}

/// One page of the list endpoint, as the server reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionPage {
    pub executions: Vec<Execution>,
    pub total: u64,
    pub unread_count: u64,
    pub limit: u32,
}
