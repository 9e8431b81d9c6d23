//! Resolver behaviour against a scripted backend
//!
//! These tests verify that:
//! - Usable backend pages are returned untouched
//! - Failed or empty backend answers are replaced by corpus pages
//! - Fallback pages obey the pagination invariants
//! - Lookups, metadata and writes follow their own degradation rules

use medexjob::prelude::*;
use medexjob::storage::fixtures;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// =============================================================================
// Scripted Backend
// =============================================================================

#[derive(Clone)]
enum Listing {
    Fail,
    Empty,
    Serve(PageResult<Job>),
}

struct ScriptedBackend {
    listing: Listing,
    meta: Option<JobsMeta>,
    jobs: Vec<Job>,
    last_query: Mutex<Option<JobsQuery>>,
    write_calls: AtomicUsize,
}

impl ScriptedBackend {
    fn new(listing: Listing) -> Self {
        Self {
            listing,
            meta: None,
            jobs: Vec::new(),
            last_query: Mutex::new(None),
            write_calls: AtomicUsize::new(0),
        }
    }

    fn with_meta(mut self, meta: JobsMeta) -> Self {
        self.meta = Some(meta);
        self
    }

    fn with_jobs(mut self, jobs: Vec<Job>) -> Self {
        self.jobs = jobs;
        self
    }

    fn last_query(&self) -> Option<JobsQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

fn offline() -> ClientError {
    ClientError::Transport {
        url: "http://backend.invalid/api/jobs".to_string(),
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl JobService for ScriptedBackend {
    async fn list(&self, query: &JobsQuery) -> Result<PageResult<Job>, ClientError> {
        *self.last_query.lock().unwrap() = Some(query.clone());
        match &self.listing {
            Listing::Fail => Err(offline()),
            Listing::Empty => Ok(PageResult::empty(query.page_index(), query.page_size())),
            Listing::Serve(page) => Ok(page.clone()),
        }
    }

    async fn get(&self, id: &str) -> Result<Job, ClientError> {
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .ok_or_else(|| ClientError::Status {
                url: format!("http://backend.invalid/api/jobs/{}", id),
                status: 404,
            })
    }

    async fn meta(&self) -> Result<JobsMeta, ClientError> {
        self.meta.clone().ok_or_else(offline)
    }

    async fn create(&self, payload: &JobPayload) -> Result<Job, ClientError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let mut job = remote_job("created", &payload.title, "2025-10-20");
        job.organization = payload.organization.clone();
        Ok(job)
    }

    async fn update(&self, id: &str, patch: &JobPatch) -> Result<Job, ClientError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        let mut job = self.get(id).await?;
        if let Some(status) = patch.status {
            job.status = status;
        }
        Ok(job)
    }

    async fn delete(&self, _id: &str) -> Result<(), ClientError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        Err(ClientError::Status {
            url: "http://backend.invalid/api/jobs/1".to_string(),
            status: 403,
        })
    }
}

fn remote_job(id: &str, title: &str, last_date: &str) -> Job {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "organization": "Apollo Hospitals",
        "sector": "private",
        "category": "Cardiology",
        "location": "Hyderabad",
        "lastDate": last_date,
        "status": "active",
        "createdAt": "2025-10-01T08:30:00Z"
    }))
    .unwrap()
}

fn resolver(backend: ScriptedBackend) -> (JobResolver, Arc<ScriptedBackend>) {
    let backend = Arc::new(backend);
    let resolver = JobResolver::new(backend.clone(), InMemoryJobStore::builtin());
    (resolver, backend)
}

fn offline_resolver() -> JobResolver {
    resolver(ScriptedBackend::new(Listing::Fail)).0
}

fn assert_page_invariants(page: &PageResult<Job>, query: &JobsQuery) {
    let size = query.page_size();
    let number = query.page_index();
    assert_eq!(page.size, size);
    assert_eq!(page.number, number);
    assert_eq!(page.total_pages, page.total_elements.div_ceil(size));
    let expected_len = size.min(page.total_elements.saturating_sub(number * size));
    assert_eq!(page.content.len(), expected_len);
}

// =============================================================================
// Listing
// =============================================================================

mod listing_tests {
    use super::*;

    #[tokio::test]
    async fn test_remote_page_returned_verbatim() {
        // Deliberately inconsistent totals: the resolver must not recompute them
        let remote = PageResult {
            content: vec![remote_job("r1", "Cardiologist", "2025-12-01")],
            total_elements: 57,
            total_pages: 3,
            number: 1,
            size: 25,
        };
        let (resolver, _) = resolver(ScriptedBackend::new(Listing::Serve(remote.clone())));

        let query = JobsQuery::new().sector(Sector::Government).page(1);
        let (page, source) = resolver.resolve_with_source(&query).await;

        assert_eq!(source, DataSource::Remote);
        assert_eq!(page, remote);
        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            serde_json::to_value(&remote).unwrap()
        );
    }

    #[tokio::test]
    async fn test_remote_receives_defaults() {
        let (resolver, backend) = resolver(ScriptedBackend::new(Listing::Empty));
        resolver.resolve(&JobsQuery::new().search("nurse")).await;

        let sent = backend.last_query().unwrap();
        assert_eq!(sent.page, Some(0));
        assert_eq!(sent.size, Some(20));
        assert_eq!(sent.sort.as_deref(), Some("createdAt,desc"));
        assert_eq!(sent.search.as_deref(), Some("nurse"));
    }

    #[tokio::test]
    async fn test_failed_and_empty_remote_are_indistinguishable() {
        let (empty_resolver, _) = resolver(ScriptedBackend::new(Listing::Empty));
        let failing_resolver = offline_resolver();

        let query = JobsQuery::new().category("Radiology");
        let (from_empty, empty_source) = empty_resolver.resolve_with_source(&query).await;
        let (from_failure, failure_source) = failing_resolver.resolve_with_source(&query).await;

        assert_eq!(empty_source, DataSource::Fallback);
        assert_eq!(failure_source, DataSource::Fallback);
        assert_eq!(from_empty, from_failure);
        assert_eq!(from_empty.total_elements, 2);
    }

    #[tokio::test]
    async fn test_private_sector_against_failing_remote() {
        let resolver = offline_resolver();
        let query = JobsQuery::new().sector(Sector::Private).page(0).size(20);

        let page = resolver.resolve(&query).await;

        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "content": [],
                "totalElements": 0,
                "totalPages": 0,
                "number": 0,
                "size": 20
            })
        );
    }

    #[tokio::test]
    async fn test_radiologist_search_is_limited_and_sorted() {
        let resolver = offline_resolver();
        let query = JobsQuery::new().search("radiologist").page(0).size(2);

        let page = resolver.resolve(&query).await;

        assert!(page.content.len() <= 2);
        assert!(!page.content.is_empty());
        assert!(page
            .content
            .iter()
            .all(|job| job.search_text().to_lowercase().contains("radiologist")));
        assert!(page
            .content
            .windows(2)
            .all(|pair| pair[0].sort_key() >= pair[1].sort_key()));
        assert_page_invariants(&page, &query);
    }

    #[tokio::test]
    async fn test_fallback_invariants_hold_across_pages() {
        let resolver = offline_resolver();

        for size in 1..=7 {
            for number in 0..=7 {
                let query = JobsQuery::new().page(number).size(size);
                let page = resolver.resolve(&query).await;
                assert_eq!(page.total_elements, 6);
                assert_page_invariants(&page, &query);
            }
        }
    }

    #[tokio::test]
    async fn test_adding_constraints_never_grows_results() {
        let resolver = offline_resolver();
        let steps = [
            JobsQuery::new(),
            JobsQuery::new().status(JobStatus::Active),
            JobsQuery::new().status(JobStatus::Active).sector(Sector::Government),
            JobsQuery::new()
                .status(JobStatus::Active)
                .sector(Sector::Government)
                .search("radio"),
            JobsQuery::new()
                .status(JobStatus::Active)
                .sector(Sector::Government)
                .search("radio")
                .featured(true),
            JobsQuery::new()
                .status(JobStatus::Active)
                .sector(Sector::Government)
                .search("radio")
                .featured(true)
                .location("chennai"),
        ];

        let mut previous = usize::MAX;
        for query in &steps {
            let total = resolver.resolve(query).await.total_elements;
            assert!(total <= previous, "{:?} grew the result set", query);
            previous = total;
        }
        assert_eq!(previous, 1);
    }

    #[tokio::test]
    async fn test_consecutive_pages_partition_the_set() {
        let resolver = offline_resolver();
        let everything = resolver.resolve(&JobsQuery::new().size(100)).await;

        let mut collected = Vec::new();
        for number in 0..3 {
            let page = resolver.resolve(&JobsQuery::new().page(number).size(2)).await;
            collected.extend(page.content.into_iter().map(|job| job.id));
        }

        let expected: Vec<String> = everything.content.into_iter().map(|job| job.id).collect();
        assert_eq!(collected, expected);
    }

    #[tokio::test]
    async fn test_fallback_sorted_newest_first() {
        let resolver = offline_resolver();
        let page = resolver.resolve(&JobsQuery::new()).await;

        let ids: Vec<&str> = page.content.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "4", "2", "5", "6"]);
    }

    #[tokio::test]
    async fn test_unfiltered_fields_are_not_fallback_constraints() {
        let resolver = offline_resolver();
        let all = resolver.resolve(&JobsQuery::new()).await;
        let with_level = resolver
            .resolve(
                &JobsQuery::new()
                    .experience_level(ExperienceLevel::Executive)
                    .duty_type(DutyType::Contract)
                    .speciality("Neurosurgery"),
            )
            .await;

        assert_eq!(all.total_elements, with_level.total_elements);
    }

    #[tokio::test]
    async fn test_disabled_fallback_yields_empty_page() {
        let (resolver, _) = resolver(ScriptedBackend::new(Listing::Fail));
        let resolver = resolver.with_fallback(false);

        let page = resolver.resolve(&JobsQuery::new().page(1).size(5)).await;
        assert_eq!(page, PageResult::empty(1, 5));
    }

    #[tokio::test]
    async fn test_configured_defaults_apply_to_fallback() {
        let (resolver, backend) = resolver(ScriptedBackend::new(Listing::Fail));
        let resolver = resolver.with_defaults(QueryDefaults {
            page: 0,
            size: 4,
            sort: "lastDate,asc".to_string(),
        });

        let page = resolver.resolve(&JobsQuery::new()).await;
        assert_eq!(page.size, 4);
        assert_eq!(page.content.len(), 4);
        assert_eq!(page.total_pages, 2);
        assert_eq!(
            backend.last_query().unwrap().sort.as_deref(),
            Some("lastDate,asc")
        );
    }

    #[tokio::test]
    async fn test_injected_corpus_is_used() {
        let corpus = InMemoryJobStore::from_jobs(vec![
            remote_job("a", "Cardiac Surgeon", "2025-11-01"),
            remote_job("b", "Cardiac Nurse", "2025-12-01"),
        ]);
        let resolver = JobResolver::new(Arc::new(ScriptedBackend::new(Listing::Fail)), corpus);

        let page = resolver
            .resolve(&JobsQuery::new().sector(Sector::Private))
            .await;
        let ids: Vec<&str> = page.content.iter().map(|job| job.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }
}

// =============================================================================
// Lookup and Metadata
// =============================================================================

mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_job_prefers_remote() {
        let remote = remote_job("1", "Remote Title", "2025-12-31");
        let (resolver, _) =
            resolver(ScriptedBackend::new(Listing::Fail).with_jobs(vec![remote.clone()]));

        assert_eq!(resolver.fetch_job("1").await, Some(remote));
    }

    #[tokio::test]
    async fn test_fetch_job_falls_back_to_corpus() {
        let resolver = offline_resolver();

        let job = resolver.fetch_job("4").await.unwrap();
        assert_eq!(job.title, "Staff Nurse");
        assert_eq!(resolver.fetch_job("404").await, None);
    }

    #[tokio::test]
    async fn test_fetch_job_with_disabled_fallback() {
        let resolver = offline_resolver().with_fallback(false);
        assert_eq!(resolver.fetch_job("4").await, None);
    }

    #[tokio::test]
    async fn test_meta_from_remote() {
        let meta = JobsMeta {
            categories: vec!["Dermatology".to_string()],
            locations: Vec::new(),
        };
        let (resolver, _) = resolver(ScriptedBackend::new(Listing::Fail).with_meta(meta.clone()));

        assert_eq!(resolver.fetch_meta().await, meta);
    }

    #[tokio::test]
    async fn test_meta_derived_when_remote_empty_or_failing() {
        let (empty, _) =
            resolver(ScriptedBackend::new(Listing::Fail).with_meta(JobsMeta::default()));
        let failing = offline_resolver();

        let expected = InMemoryJobStore::builtin().meta();
        assert_eq!(empty.fetch_meta().await, expected);
        assert_eq!(failing.fetch_meta().await, expected);
        assert_eq!(
            expected.categories,
            vec![
                "Anaesthesiology",
                "General Medicine",
                "Nursing",
                "Pharmacy",
                "Radiology"
            ]
        );
    }
}

// =============================================================================
// Writes
// =============================================================================

mod write_tests {
    use super::*;

    fn payload() -> JobPayload {
        JobPayload::new(
            "Resident Medical Officer",
            "Fortis Healthcare",
            Sector::Private,
            "General Medicine",
            "Bengaluru",
            "MBBS",
            "1 year",
            "Night shifts in emergency",
            "2025-12-20",
        )
    }

    #[tokio::test]
    async fn test_create_passes_through() {
        let (resolver, backend) = resolver(ScriptedBackend::new(Listing::Fail));
        let job = resolver.create_job(&payload()).await.unwrap();

        assert_eq!(job.title, "Resident Medical Officer");
        assert_eq!(backend.write_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_backend() {
        let (resolver, backend) = resolver(ScriptedBackend::new(Listing::Fail));
        let mut invalid = payload();
        invalid.title.clear();
        invalid.last_date = "next week".to_string();

        let err = resolver.create_job(&invalid).await.unwrap_err();

        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        match err {
            ClientError::Validation(ValidationError::FieldErrors(fields)) => {
                let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["last_date", "title"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(backend.write_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_write_errors_propagate() {
        let (resolver, _) = resolver(
            ScriptedBackend::new(Listing::Fail).with_jobs(fixtures::sample_jobs()),
        );

        let patch = JobPatch {
            status: Some(JobStatus::Closed),
            ..Default::default()
        };
        let updated = resolver.update_job("2", &patch).await.unwrap();
        assert_eq!(updated.status, JobStatus::Closed);

        let missing = resolver.update_job("missing", &patch).await.unwrap_err();
        assert_eq!(missing.status(), Some(404));

        let denied = resolver.delete_job("1").await.unwrap_err();
        assert_eq!(denied.status(), Some(403));
    }
}

// =============================================================================
// News
// =============================================================================

mod news_tests {
    use super::*;

    struct Pulse(Option<Vec<PulseUpdate>>);

    #[async_trait]
    impl NewsService for Pulse {
        async fn pulse_updates(&self) -> Result<Vec<PulseUpdate>, ClientError> {
            self.0.clone().ok_or_else(offline)
        }
    }

    #[tokio::test]
    async fn test_remote_pulse_used_when_present() {
        let update = PulseUpdate {
            id: "remote-1".to_string(),
            title: "New AIIMS campus announced".to_string(),
            kind: PulseType::Govt,
            date: "2025-10-18".to_string(),
            breaking: Some(true),
        };
        let feed = PulseFeed::new(Arc::new(Pulse(Some(vec![update.clone()]))));

        assert_eq!(feed.pulse_updates().await, vec![update]);
    }

    #[tokio::test]
    async fn test_pulse_fallback() {
        let empty = PulseFeed::new(Arc::new(Pulse(Some(Vec::new()))));
        let failing = PulseFeed::new(Arc::new(Pulse(None)));

        assert_eq!(empty.pulse_updates().await, fixtures::sample_pulse_updates());
        assert_eq!(failing.pulse_updates().await.len(), 6);

        let silent = PulseFeed::with_fallback(Arc::new(Pulse(None)), Vec::new());
        assert!(silent.pulse_updates().await.is_empty());
    }
}
