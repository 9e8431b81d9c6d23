//! Service traits for the remote job backend

use crate::core::{
    error::ClientError,
    job::{Job, JobPatch, JobPayload},
    news::PulseUpdate,
    query::{JobsMeta, JobsQuery, PageResult},
};
use async_trait::async_trait;
use serde_json::Value;

/// Remote job listing operations
///
/// Implementations talk to the backend. They report every failure as a
/// [`ClientError`]; deciding whether to fall back is the resolver's job.
#[async_trait]
pub trait JobService: Send + Sync {
    /// `GET /api/jobs`
    async fn list(&self, query: &JobsQuery) -> Result<PageResult<Job>, ClientError>;

    /// `GET /api/jobs/{id}`
    async fn get(&self, id: &str) -> Result<Job, ClientError>;

    /// `GET /api/jobs/meta`
    async fn meta(&self) -> Result<JobsMeta, ClientError>;

    /// `POST /api/jobs`
    async fn create(&self, payload: &JobPayload) -> Result<Job, ClientError>;

    /// `PUT /api/jobs/{id}`
    async fn update(&self, id: &str, patch: &JobPatch) -> Result<Job, ClientError>;

    /// `DELETE /api/jobs/{id}`
    async fn delete(&self, id: &str) -> Result<(), ClientError>;
}

/// Remote news operations
#[async_trait]
pub trait NewsService: Send + Sync {
    /// `GET /api/news/pulse`
    async fn pulse_updates(&self) -> Result<Vec<PulseUpdate>, ClientError>;
}

/// Dashboard analytics reads
///
/// Reports are returned as the JSON the backend sends. There is no local
/// fallback for them, so every failure reaches the caller.
#[async_trait]
pub trait AnalyticsService: Send + Sync {
    /// `GET /api/analytics/overview`
    async fn overview(&self) -> Result<Value, ClientError>;

    /// `GET /api/analytics/jobs-by-category`
    async fn jobs_by_category(&self) -> Result<Value, ClientError>;

    /// `GET /api/analytics/jobs-by-location`
    async fn jobs_by_location(&self) -> Result<Value, ClientError>;

    /// `GET /api/analytics/top-jobs`
    async fn top_jobs(&self) -> Result<Value, ClientError>;
}
