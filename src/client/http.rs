//! HTTP implementation of the job, news and analytics services

use crate::config::ApiConfig;
use crate::core::{
    error::{ClientError, ConfigError},
    job::{Job, JobPatch, JobPayload},
    news::PulseUpdate,
    query::{JobsMeta, JobsQuery, PageResult},
    service::{AnalyticsService, JobService, NewsService},
};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Job backend client over HTTP
///
/// Use [`HttpJobService::builder`] or [`HttpJobService::from_config`] to
/// construct instances.
///
/// # Examples
///
/// ```rust,no_run
/// use medexjob::prelude::*;
///
/// # async fn example() -> Result<(), ClientError> {
/// let service = HttpJobService::builder()
///     .base_url("http://localhost:8081")
///     .timeout(std::time::Duration::from_secs(10))
///     .build()?;
///
/// let page = service.list(&JobsQuery::new().search("nurse")).await?;
/// println!("{} jobs", page.total_elements);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpJobService {
    base_url: String,
    jobs_url: Url,
    http_client: reqwest::Client,
    bearer_token: Option<String>,
}

impl HttpJobService {
    /// Create a new builder for configuring the client
    pub fn builder() -> HttpJobServiceBuilder {
        HttpJobServiceBuilder::new()
    }

    /// Build a client from the `api` section of the configuration
    pub fn from_config(config: &ApiConfig) -> Result<Self, ClientError> {
        let mut builder = Self::builder().base_url(&config.base_url);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(token) = &config.bearer_token {
            builder = builder.bearer_token(token);
        }
        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/api/jobs/{id}` with the id escaped as a single path segment
    fn job_url(&self, id: &str) -> String {
        let mut url = self.jobs_url.clone();
        // build() rejects base URLs that cannot carry path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        url.into()
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let request = self.http_client.request(method, url);
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, ClientError> {
        let response = request.send().await.map_err(|e| ClientError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        tracing::debug!(url = %url, status = status.as_u16(), "Backend responded");

        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, ClientError> {
        let bytes = response.bytes().await.map_err(|e| ClientError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.get_url(self.url(path)).await
    }

    async fn get_url<T: DeserializeOwned>(&self, url: String) -> Result<T, ClientError> {
        let response = self.send(self.request(Method::GET, &url), &url).await?;
        Self::decode(response, &url).await
    }
}

#[async_trait]
impl JobService for HttpJobService {
    async fn list(&self, query: &JobsQuery) -> Result<PageResult<Job>, ClientError> {
        let url = self.url("/api/jobs");
        let request = self
            .request(Method::GET, &url)
            .query(&query.to_query_pairs());
        let response = self.send(request, &url).await?;
        Self::decode(response, &url).await
    }

    async fn get(&self, id: &str) -> Result<Job, ClientError> {
        self.get_url(self.job_url(id)).await
    }

    async fn meta(&self) -> Result<JobsMeta, ClientError> {
        self.get_json("/api/jobs/meta").await
    }

    async fn create(&self, payload: &JobPayload) -> Result<Job, ClientError> {
        let url = self.url("/api/jobs");
        let request = self.request(Method::POST, &url).json(payload);
        let response = self.send(request, &url).await?;
        Self::decode(response, &url).await
    }

    async fn update(&self, id: &str, patch: &JobPatch) -> Result<Job, ClientError> {
        let url = self.job_url(id);
        let request = self.request(Method::PUT, &url).json(patch);
        let response = self.send(request, &url).await?;
        Self::decode(response, &url).await
    }

    async fn delete(&self, id: &str) -> Result<(), ClientError> {
        let url = self.job_url(id);
        self.send(self.request(Method::DELETE, &url), &url).await?;
        Ok(())
    }
}

#[async_trait]
impl NewsService for HttpJobService {
    async fn pulse_updates(&self) -> Result<Vec<PulseUpdate>, ClientError> {
        self.get_json("/api/news/pulse").await
    }
}

#[async_trait]
impl AnalyticsService for HttpJobService {
    async fn overview(&self) -> Result<Value, ClientError> {
        self.get_json("/api/analytics/overview").await
    }

    async fn jobs_by_category(&self) -> Result<Value, ClientError> {
        self.get_json("/api/analytics/jobs-by-category").await
    }

    async fn jobs_by_location(&self) -> Result<Value, ClientError> {
        self.get_json("/api/analytics/jobs-by-location").await
    }

    async fn top_jobs(&self) -> Result<Value, ClientError> {
        self.get_json("/api/analytics/top-jobs").await
    }
}

/// Builder for [`HttpJobService`]
#[derive(Debug, Default)]
pub struct HttpJobServiceBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    bearer_token: Option<String>,
}

impl HttpJobServiceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend base URL; a trailing slash is ignored
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Overall request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Token sent as `Authorization: Bearer <token>`
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<HttpJobService, ClientError> {
        let base_url = self
            .base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingField {
                field: "base_url".to_string(),
                context: "http client".to_string(),
            })?;

        let jobs_url = Url::parse(&format!("{}/api/jobs", base_url))
            .ok()
            .filter(|url| !url.cannot_be_a_base())
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "base_url".to_string(),
                message: format!("'{}' is not an absolute URL", base_url),
            })?;

        let mut client_builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let http_client = client_builder.build().map_err(|e| ConfigError::InvalidValue {
            field: "http client".to_string(),
            message: e.to_string(),
        })?;

        Ok(HttpJobService {
            base_url,
            jobs_url,
            http_client,
            bearer_token: self.bearer_token,
        })
    }
}
