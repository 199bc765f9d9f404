//! Shared fixtures: execution builders and a recording mock of the
//! execution-log API.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use hubnotify::client::{ApiError, ExecutionApi};
use hubnotify::models::{
    Execution, ExecutionFilter, ExecutionPage, ExecutionStatus, RequestInfo, ResponseInfo,
};

pub fn execution(id: &str, status: ExecutionStatus, is_read: bool) -> Execution {
    Execution {
        id: id.to_string(),
        action_id: "act-1".to_string(),
        action_name: "Notify CRM".to_string(),
        user_id: "usr-1".to_string(),
        status,
        request: RequestInfo {
            url: "https://hooks.example.com/crm".to_string(),
            method: "POST".to_string(),
            headers: None,
            payload: None,
        },
        response: ResponseInfo::default(),
        duration_ms: match status {
            ExecutionStatus::Pending => None,
            _ => Some(120),
        },
        is_read,
        created_at: Utc::now(),
    }
}

pub fn page(executions: Vec<Execution>, total: u64, unread_count: u64) -> ExecutionPage {
    ExecutionPage {
        executions,
        total,
        unread_count,
        limit: 20,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    List {
        page: u32,
        status: Option<ExecutionStatus>,
        unread_only: Option<bool>,
    },
    UnreadCount,
    MarkRead(String),
    MarkAllRead,
    Delete(String),
    DeleteAll,
}

/// Scripted stand-in for the remote service. Each list call pops the next
/// queued page (falling back to an empty one) after an optional queued
/// delay; any operation listed in `failures` answers with a 500.
#[derive(Default)]
pub struct MockApi {
    pub calls: Mutex<Vec<MockCall>>,
    pub list_pages: Mutex<VecDeque<ExecutionPage>>,
    pub list_delays: Mutex<VecDeque<Duration>>,
    pub unread: Mutex<u64>,
    pub failures: Mutex<Vec<&'static str>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_page(&self, page: ExecutionPage) {
        self.list_pages.lock().unwrap().push_back(page);
    }

    pub fn queue_delay(&self, delay: Duration) {
        self.list_delays.lock().unwrap().push_back(delay);
    }

    pub fn set_unread(&self, count: u64) {
        *self.unread.lock().unwrap() = count;
    }

    pub fn fail_on(&self, op: &'static str) {
        self.failures.lock().unwrap().push(op);
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count_of(&self, matcher: impl Fn(&MockCall) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| matcher(c)).count()
    }

    fn failing(&self, op: &'static str) -> Option<ApiError> {
        if self.failures.lock().unwrap().contains(&op) {
            Some(ApiError::Status {
                status: 500,
                message: format!("{} unavailable", op),
            })
        } else {
            None
        }
    }
}

#[async_trait]
impl ExecutionApi for MockApi {
    async fn list_executions(
        &self,
        page: u32,
        filter: &ExecutionFilter,
    ) -> Result<ExecutionPage, ApiError> {
        self.calls.lock().unwrap().push(MockCall::List {
            page,
            status: filter.status,
            unread_only: filter.unread_only,
        });

        // Claim the response before sleeping so concurrent calls consume
        // queued pages in call order.
        let next = self.list_pages.lock().unwrap().pop_front();
        let delay = self.list_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.failing("list") {
            return Err(err);
        }
        Ok(next.unwrap_or_else(|| ExecutionPage {
            executions: Vec::new(),
            total: 0,
            unread_count: 0,
            limit: filter.limit,
        }))
    }

    async fn unread_count(&self) -> Result<u64, ApiError> {
        self.calls.lock().unwrap().push(MockCall::UnreadCount);
        if let Some(err) = self.failing("unread_count") {
            return Err(err);
        }
        Ok(*self.unread.lock().unwrap())
    }

    async fn mark_read(&self, id: &str) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(MockCall::MarkRead(id.to_string()));
        match self.failing("mark_read") {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn mark_all_read(&self) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(MockCall::MarkAllRead);
        match self.failing("mark_all_read") {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn delete_execution(&self, id: &str) -> Result<(), ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push(MockCall::Delete(id.to_string()));
        match self.failing("delete") {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn delete_all(&self) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(MockCall::DeleteAll);
        match self.failing("delete_all") {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
