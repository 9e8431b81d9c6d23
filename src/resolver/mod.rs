//! Job query resolution with graceful degradation to the local corpus
//!
//! The resolver asks the backend first. When the backend fails, or answers
//! with nothing, the same query is answered from the in-memory corpus so
//! callers always receive a page in the backend's shape.

pub mod news;

pub use news::PulseFeed;

#[cfg(feature = "http")]
use crate::config::ClientConfig;
use crate::config::QueryDefaults;
use crate::core::{
    error::ClientError,
    job::{Job, JobPatch, JobPayload},
    query::{JobsMeta, JobsQuery, PageResult},
    service::JobService,
    store::QueryableStore,
};
use crate::storage::InMemoryJobStore;
use std::sync::Arc;
use validator::Validate;

/// Where a resolved page came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Remote,
    Fallback,
}

/// Classification of a remote listing call
#[derive(Debug)]
pub enum RemoteOutcome {
    /// The backend returned at least one record
    Usable(PageResult<Job>),
    /// The backend answered but had no records
    Empty,
    /// The call failed
    Failed(ClientError),
}

impl RemoteOutcome {
    /// Any error counts as "no usable remote data"; callers never see it
    pub fn classify(result: Result<PageResult<Job>, ClientError>) -> Self {
        match result {
            Ok(page) if page.has_content() => RemoteOutcome::Usable(page),
            Ok(_) => RemoteOutcome::Empty,
            Err(err) => RemoteOutcome::Failed(err),
        }
    }
}

/// Resolves job queries against the backend with a local fallback
///
/// Read operations ([`resolve`](Self::resolve), [`fetch_job`](Self::fetch_job),
/// [`fetch_meta`](Self::fetch_meta)) never fail. Write operations pass
/// straight through to the backend and report its errors.
#[derive(Clone)]
pub struct JobResolver {
    remote: Arc<dyn JobService>,
    corpus: InMemoryJobStore,
    defaults: QueryDefaults,
    fallback_enabled: bool,
}

impl JobResolver {
    /// Resolver over `remote` falling back to `corpus`
    pub fn new(remote: Arc<dyn JobService>, corpus: InMemoryJobStore) -> Self {
        Self {
            remote,
            corpus,
            defaults: QueryDefaults::default(),
            fallback_enabled: true,
        }
    }

    /// Build the HTTP service and corpus described by the configuration
    #[cfg(feature = "http")]
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let remote = crate::client::HttpJobService::from_config(&config.api)?;
        let corpus = config.fallback.load_corpus()?;

        Ok(Self::new(Arc::new(remote), corpus)
            .with_defaults(config.defaults.clone())
            .with_fallback(config.fallback.enabled))
    }

    /// Override the page, size and sort used when a query leaves them unset
    pub fn with_defaults(mut self, defaults: QueryDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Enable or disable the corpus fallback
    pub fn with_fallback(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }

    pub fn corpus(&self) -> &InMemoryJobStore {
        &self.corpus
    }

    /// Resolve a listing query; backend errors are absorbed
    pub async fn resolve(&self, query: &JobsQuery) -> PageResult<Job> {
        self.resolve_with_source(query).await.0
    }

    /// Resolve a listing query and report which source answered it
    pub async fn resolve_with_source(&self, query: &JobsQuery) -> (PageResult<Job>, DataSource) {
        let query = query.clone().with_defaults(
            self.defaults.page,
            self.defaults.size,
            &self.defaults.sort,
        );

        match RemoteOutcome::classify(self.remote.list(&query).await) {
            RemoteOutcome::Usable(page) => {
                tracing::debug!(
                    total = page.total_elements,
                    page = page.number,
                    "Serving jobs from backend"
                );
                (page, DataSource::Remote)
            }
            RemoteOutcome::Empty => {
                tracing::warn!("Backend returned no jobs, serving fallback corpus");
                (self.fallback_page(&query), DataSource::Fallback)
            }
            RemoteOutcome::Failed(err) => {
                tracing::warn!(error = %err, code = err.error_code(), "Backend unavailable, serving fallback corpus");
                (self.fallback_page(&query), DataSource::Fallback)
            }
        }
    }

    fn fallback_page(&self, query: &JobsQuery) -> PageResult<Job> {
        if !self.fallback_enabled {
            return PageResult::empty(query.page_index(), query.page_size());
        }
        self.corpus.query_page(query)
    }

    /// Fetch one job; `None` when neither the backend nor the corpus has it
    pub async fn fetch_job(&self, id: &str) -> Option<Job> {
        match self.remote.get(id).await {
            Ok(job) => Some(job),
            Err(err) => {
                tracing::warn!(job_id = %id, error = %err, "Job lookup failed, checking fallback corpus");
                self.fallback_enabled
                    .then(|| self.corpus.find(id))
                    .flatten()
            }
        }
    }

    /// Fetch filter metadata, derived from the corpus when the backend has none
    pub async fn fetch_meta(&self) -> JobsMeta {
        match self.remote.meta().await {
            Ok(meta) if !meta.is_empty() => meta,
            Ok(_) => {
                tracing::warn!("Backend returned empty job metadata, deriving from fallback corpus");
                self.fallback_meta()
            }
            Err(err) => {
                tracing::warn!(error = %err, "Job metadata unavailable, deriving from fallback corpus");
                self.fallback_meta()
            }
        }
    }

    fn fallback_meta(&self) -> JobsMeta {
        if self.fallback_enabled {
            self.corpus.meta()
        } else {
            JobsMeta::default()
        }
    }

    /// Validate and create a job on the backend
    pub async fn create_job(&self, payload: &JobPayload) -> Result<Job, ClientError> {
        payload.validate()?;
        let job = self.remote.create(payload).await?;
        tracing::info!(job_id = %job.id, "Job created");
        Ok(job)
    }

    /// Validate and apply a partial update on the backend
    pub async fn update_job(&self, id: &str, patch: &JobPatch) -> Result<Job, ClientError> {
        patch.validate()?;
        let job = self.remote.update(id, patch).await?;
        tracing::info!(job_id = %id, "Job updated");
        Ok(job)
    }

    /// Delete a job on the backend
    pub async fn delete_job(&self, id: &str) -> Result<(), ClientError> {
        self.remote.delete(id).await?;
        tracing::info!(job_id = %id, "Job deleted");
        Ok(())
    }
}
