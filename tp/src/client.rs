//! HTTP client for the users/todos REST API

use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::domain::{Employee, EmployeeId, TodoItem};
use crate::error::ReportError;

/// Thin wrapper over a `reqwest::Client` bound to one base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client; `timeout: None` keeps reqwest's default behavior
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ReportError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|source| ReportError::Transport {
            url: base_url.clone(),
            source,
        })?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `/users/{id}`
    pub async fn fetch_employee(&self, id: EmployeeId) -> Result<Employee, ReportError> {
        let url = format!("{}/users/{}", self.base_url, id);
        self.get_json(&url, &[]).await
    }

    /// Fetch `/todos?userId={id}`
    pub async fn fetch_todos(&self, id: EmployeeId) -> Result<Vec<TodoItem>, ReportError> {
        let url = format!("{}/todos", self.base_url);
        let todos: Vec<TodoItem> = self.get_json(&url, &[("userId", id.get())]).await?;

        let foreign = todos
            .iter()
            .filter(|t| t.user_id.is_some_and(|uid| uid != id.get()))
            .count();
        if foreign > 0 {
            warn!("{} todo(s) returned for employee {} belong to another user", foreign, id);
        }

        Ok(todos)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, u64)]) -> Result<T, ReportError> {
        debug!("GET {} {:?}", url, query);

        let transport = |source| ReportError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).query(query).send().await.map_err(transport)?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);
        if !status.is_success() {
            return Err(ReportError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(transport)?;

        serde_json::from_str(&body).map_err(|source| ReportError::DataShape {
            url: url.to_string(),
            source,
        })
    }
}
