//! Core module containing the data model and service traits

pub mod error;
pub mod job;
mod lenient;
pub mod news;
pub mod query;
pub mod service;
pub mod store;

pub use error::{ClientError, ConfigError, ErrorResponse, FieldError, ValidationError};
pub use job::{DutyType, ExperienceLevel, Job, JobPatch, JobPayload, JobStatus, Sector};
pub use news::{PulseType, PulseUpdate};
pub use query::{JobsMeta, JobsQuery, PageResult};
pub use service::{AnalyticsService, JobService, NewsService};
pub use store::QueryableStore;
