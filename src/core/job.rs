//! Job records and write payloads

use crate::core::lenient::{null_as_default, string_or_number};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// Employer classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Government,
    Private,
}

/// Publication state of a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Active,
    Closed,
    Pending,
    Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DutyType {
    FullTime,
    PartTime,
    Contract,
}

/// Wire names for an enum; decoding ignores ASCII case (`PRIVATE`, `Private`)
macro_rules! wire_name {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Name used on the wire and in query strings
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            pub fn from_wire(value: &str) -> Option<Self> {
                let value = value.trim();
                $(
                    if value.eq_ignore_ascii_case($name) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Self::from_wire(&value)
                    .ok_or_else(|| serde::de::Error::unknown_variant(&value, &[$($name),+]))
            }
        }
    };
}

wire_name!(Sector { Government => "government", Private => "private" });
wire_name!(JobStatus { Active => "active", Closed => "closed", Pending => "pending", Draft => "draft" });
wire_name!(ExperienceLevel { Entry => "entry", Mid => "mid", Senior => "senior", Executive => "executive" });
wire_name!(DutyType { FullTime => "full_time", PartTime => "part_time", Contract => "contract" });

/// A job listing as returned by the backend
///
/// Dates are kept as the raw strings the backend sends (`yyyy-MM-dd`).
/// Fields this crate does not model are kept in `extra`, so a record fetched
/// remotely serializes back to the same JSON it arrived as. Decoding is
/// forgiving: a numeric `id` is read as its decimal string and `null` reads as
/// the field's default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub organization: String,

    pub sector: Sector,

    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub qualification: String,

    /// Free-text experience requirement ("2+ years", "Fresher", ...)
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speciality: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_type: Option<DutyType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_posts: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Last date to apply
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_date: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: JobStatus,

    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub views: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub applications: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_link: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Job {
    /// Date used to order listings: posted date, then last date, then `""`
    ///
    /// Ordering compares these strings directly, which is only chronological
    /// for `yyyy-MM-dd` values.
    pub fn sort_key(&self) -> &str {
        match self.posted_date.as_deref() {
            Some(posted) if !posted.is_empty() => posted,
            _ => &self.last_date,
        }
    }

    /// Text the free-text search runs against
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.organization, self.location)
    }
}

/// Body for `POST /api/jobs`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub organization: String,

    pub sector: Sector,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: String,

    pub qualification: String,
    pub experience: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub speciality: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty_type: Option<DutyType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub number_of_posts: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,

    pub description: String,

    #[validate(custom(function = "validate_iso_date"))]
    pub last_date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "must be a valid URL"))]
    pub pdf_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "must be a valid URL"))]
    pub apply_link: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "must be a valid email address"))]
    pub contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,

    /// Employer type: hospital, consultancy, hr, ...
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub employer_type: Option<String>,
}

impl JobPayload {
    /// Payload with the required fields set and everything else empty
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        organization: impl Into<String>,
        sector: Sector,
        category: impl Into<String>,
        location: impl Into<String>,
        qualification: impl Into<String>,
        experience: impl Into<String>,
        description: impl Into<String>,
        last_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            organization: organization.into(),
            sector,
            category: category.into(),
            location: location.into(),
            qualification: qualification.into(),
            experience: experience.into(),
            experience_level: None,
            speciality: None,
            duty_type: None,
            number_of_posts: None,
            salary: None,
            description: description.into(),
            last_date: last_date.into(),
            pdf_url: None,
            apply_link: None,
            status: None,
            featured: None,
            contact_email: None,
            contact_phone: None,
            employer_type: None,
        }
    }
}

/// Body for `PUT /api/jobs/{id}`; only the fields that are set are sent
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<Sector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "validate_iso_date"))]
    pub last_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "must be a valid email address"))]
    pub contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

fn validate_iso_date(value: &str) -> Result<(), validator::ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            validator::ValidationError::new("date_format").with_message("expected yyyy-MM-dd".into())
        })
}
