//! # MedexJob Client
//!
//! Client library for the MedexJob medical recruitment marketplace.
//!
//! ## Features
//!
//! - **Typed Job Model**: listings, write payloads and partial updates with validation
//! - **Graceful Degradation**: listing, lookup and metadata reads fall back to a
//!   bundled corpus when the backend is unreachable or empty
//! - **Source-Agnostic Pages**: fallback pages have exactly the backend's shape
//! - **Injected Corpus**: the fallback dataset is an immutable value passed to
//!   the resolver, loadable from JSON or YAML
//! - **Configuration-Based**: backend URL, defaults and fallback via YAML
//! - **Analytics**: dashboard reports passed through from the backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use medexjob::prelude::*;
//!
//! let config = ClientConfig::from_yaml_file("medexjob.yaml")?;
//! let resolver = JobResolver::from_config(&config)?;
//!
//! // Never fails: backend errors degrade to the local corpus
//! let page = resolver
//!     .resolve(&JobsQuery::new().search("radiologist").size(2))
//!     .await;
//!
//! for job in &page.content {
//!     println!("{} at {}", job.title, job.organization);
//! }
//! ```

#[cfg(feature = "http")]
pub mod client;
pub mod config;
pub mod core;
pub mod resolver;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        error::{ClientError, ConfigError, ErrorResponse, FieldError, ValidationError},
        job::{DutyType, ExperienceLevel, Job, JobPatch, JobPayload, JobStatus, Sector},
        news::{PulseType, PulseUpdate},
        query::{JobsMeta, JobsQuery, PageResult},
        service::{AnalyticsService, JobService, NewsService},
        store::QueryableStore,
    };

    // === Resolution ===
    pub use crate::resolver::{DataSource, JobResolver, PulseFeed, RemoteOutcome};

    // === Storage ===
    pub use crate::storage::InMemoryJobStore;

    // === Config ===
    pub use crate::config::{ApiConfig, ClientConfig, FallbackConfig, QueryDefaults};

    // === Client ===
    #[cfg(feature = "http")]
    pub use crate::client::{HttpJobService, HttpJobServiceBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
