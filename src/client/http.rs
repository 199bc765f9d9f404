use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::client::error::ApiError;
use crate::client::ExecutionApi;
use crate::models::{Execution, ExecutionFilter, ExecutionPage};
use crate::session::SessionTokens;

#[derive(Deserialize)]
struct UnreadCountBody {
    count: u64,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

/// HTTP client for the execution-log service.
#[derive(Clone)]
pub struct ExecutionClient {
    client: Client,
    base_url: String,
    session: SessionTokens,
}

impl ExecutionClient {
    pub fn new(base_url: &str, timeout: Duration, session: SessionTokens) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    /// Fetch a single execution for the detail view.
    pub async fn get_execution(&self, id: &str) -> Result<Execution, ApiError> {
        let response = self
            .authorize(self.client.get(self.url(&format!("/executions/{}", id))))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // The request still goes out without a token; the server answers 401.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.get() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed
                .error
                .or(parsed.message)
                .unwrap_or_else(|| status.to_string()),
            Err(_) if !body.is_empty() => body,
            Err(_) => status.to_string(),
        };

        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ExecutionApi for ExecutionClient {
    async fn list_executions(
        &self,
        page: u32,
        filter: &ExecutionFilter,
    ) -> Result<ExecutionPage, ApiError> {
        debug!("Fetching executions page {} from {}", page, self.base_url);

        let response = self
            .authorize(self.client.get(self.url("/executions")))
            .query(&filter.to_query(page))
            .send()
            .await?;

        Ok(Self::check(response).await?.json().await?)
    }

    async fn unread_count(&self) -> Result<u64, ApiError> {
        let response = self
            .authorize(self.client.get(self.url("/executions/unread/count")))
            .send()
            .await?;

        let body: UnreadCountBody = Self::check(response).await?.json().await?;
        Ok(body.count)
    }

    async fn mark_read(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(
                self.client
                    .patch(self.url(&format!("/executions/{}/read", id))),
            )
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn mark_all_read(&self) -> Result<(), ApiError> {
        let response = self
            .authorize(self.client.post(self.url("/executions/mark-all-read")))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn delete_execution(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(self.client.delete(self.url(&format!("/executions/{}", id))))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), ApiError> {
        let response = self
            .authorize(self.client.delete(self.url("/executions")))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}
