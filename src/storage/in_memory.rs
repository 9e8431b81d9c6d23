//! In-memory job corpus used as the read-only fallback dataset

use crate::core::{
    error::ConfigError,
    job::Job,
    query::{JobsMeta, JobsQuery},
    store::QueryableStore,
};
use crate::storage::fixtures;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

/// Immutable job corpus
///
/// Cloning is cheap: clones share the same records. The corpus never changes
/// after construction, so concurrent queries need no locking.
#[derive(Debug, Clone)]
pub struct InMemoryJobStore {
    jobs: Arc<[Job]>,
}

impl InMemoryJobStore {
    /// Store over the given records, kept in the order supplied
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        Self { jobs: jobs.into() }
    }

    /// Store over the bundled sample listings
    pub fn builtin() -> Self {
        Self::from_jobs(fixtures::sample_jobs())
    }

    /// Store with no records at all
    pub fn empty() -> Self {
        Self::from_jobs(Vec::new())
    }

    /// Parse a JSON array of jobs
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let jobs: Vec<Job> = serde_json::from_str(json).map_err(|e| ConfigError::CorpusLoad {
            path: "<inline json>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_jobs(jobs))
    }

    /// Parse a YAML sequence of jobs
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let jobs: Vec<Job> = serde_yaml::from_str(yaml).map_err(|e| ConfigError::CorpusLoad {
            path: "<inline yaml>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self::from_jobs(jobs))
    }

    /// Load a corpus file; `.yaml`/`.yml` files are read as YAML, anything else as JSON
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CorpusLoad {
            path: display.clone(),
            message: e.to_string(),
        })?;

        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let parsed = if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        };

        parsed.map_err(|e| match e {
            ConfigError::CorpusLoad { message, .. } => ConfigError::CorpusLoad {
                path: display.clone(),
                message,
            },
            other => other,
        })
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Look up a record by id
    pub fn find(&self, id: &str) -> Option<Job> {
        self.jobs.iter().find(|job| job.id == id).cloned()
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self.jobs.iter().map(|j| j.category.as_str()).collect();
        unique.into_iter().map(str::to_string).collect()
    }

    /// Distinct locations, sorted
    pub fn locations(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self.jobs.iter().map(|j| j.location.as_str()).collect();
        unique.into_iter().map(str::to_string).collect()
    }

    /// Filter metadata derived from the corpus
    pub fn meta(&self) -> JobsMeta {
        JobsMeta {
            categories: self.categories(),
            locations: self.locations(),
        }
    }

    fn matches(job: &Job, query: &JobsQuery) -> bool {
        let search = query
            .search_term()
            .is_none_or(|s| job.search_text().to_lowercase().contains(&s.to_lowercase()));
        let sector = query.sector.is_none_or(|s| job.sector == s);
        let category = query.category_name().is_none_or(|c| job.category == c);
        let location = query
            .location_name()
            .is_none_or(|l| job.location.to_lowercase().contains(&l.to_lowercase()));
        let featured = query.featured.is_none_or(|f| job.featured == f);
        let status = query.status.is_none_or(|s| job.status == s);

        search && sector && category && location && featured && status
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl QueryableStore<Job> for InMemoryJobStore {
    type Query = JobsQuery;

    fn list_all(&self) -> Vec<Job> {
        self.jobs.to_vec()
    }

    fn apply_filters(&self, data: Vec<Job>, query: &JobsQuery) -> Vec<Job> {
        data.into_iter()
            .filter(|job| Self::matches(job, query))
            .collect()
    }

    fn apply_sort(&self, mut data: Vec<Job>) -> Vec<Job> {
        // Newest first; sort_by is stable so equal dates keep corpus order
        data.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));
        data
    }

    fn page_of(&self, query: &JobsQuery) -> (usize, usize) {
        (query.page_index(), query.page_size())
    }
}
