//! Query parameters and pagination utilities

use crate::core::job::{DutyType, ExperienceLevel, JobStatus, Sector};
use crate::core::lenient::{null_as_default, string_list};
use serde::{Deserialize, Serialize};

/// Page index used when the query does not name one
pub const DEFAULT_PAGE: usize = 0;

/// Page size used when the query does not name one
pub const DEFAULT_SIZE: usize = 20;

/// Sort expression sent to the backend when the query does not name one
pub const DEFAULT_SORT: &str = "createdAt,desc";

/// Filter, pagination and sort parameters for a job listing
///
/// Every field is optional and an absent field means "no constraint".
/// Blank strings are treated the same as absent ones.
///
/// # Example
/// ```rust,ignore
/// let query = JobsQuery::new()
///     .search("radiologist")
///     .sector(Sector::Government)
///     .page(0)
///     .size(10);
///
/// // GET /api/jobs?search=radiologist&sector=government&page=0&size=10&sort=createdAt,desc
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobsQuery {
    /// Free text matched against title, organization and location
    pub search: Option<String>,
    pub sector: Option<Sector>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub speciality: Option<String>,
    pub duty_type: Option<DutyType>,

    /// `Some(false)` selects non-featured listings, `None` selects both
    pub featured: Option<bool>,

    pub status: Option<JobStatus>,

    /// Page index (starts at 0)
    pub page: Option<usize>,

    /// Number of items per page
    pub size: Option<usize>,

    /// Backend sort expression, e.g. `createdAt,desc`
    pub sort: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

impl JobsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sector(mut self, sector: Sector) -> Self {
        self.sector = Some(sector);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn experience_level(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    pub fn speciality(mut self, speciality: impl Into<String>) -> Self {
        self.speciality = Some(speciality.into());
        self
    }

    pub fn duty_type(mut self, duty_type: DutyType) -> Self {
        self.duty_type = Some(duty_type);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = Some(featured);
        self
    }

    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Page index, defaulting to 0
    pub fn page_index(&self) -> usize {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    /// Page size, defaulting to 20; a zero size counts as unset
    pub fn page_size(&self) -> usize {
        self.size.filter(|s| *s > 0).unwrap_or(DEFAULT_SIZE)
    }

    /// Sort expression, defaulting to `createdAt,desc`
    pub fn sort_expr(&self) -> &str {
        non_blank(&self.sort).unwrap_or(DEFAULT_SORT)
    }

    pub fn search_term(&self) -> Option<&str> {
        non_blank(&self.search)
    }

    pub fn category_name(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    pub fn location_name(&self) -> Option<&str> {
        non_blank(&self.location)
    }

    pub fn speciality_name(&self) -> Option<&str> {
        non_blank(&self.speciality)
    }

    /// Fill unset page, size and sort from configured defaults
    pub fn with_defaults(mut self, page: usize, size: usize, sort: &str) -> Self {
        if self.page.is_none() {
            self.page = Some(page);
        }
        if self.size.is_none_or(|s| s == 0) && size > 0 {
            self.size = Some(size);
        }
        if non_blank(&self.sort).is_none() {
            self.sort = Some(sort.to_string());
        }
        self
    }

    /// Query-string pairs for `GET /api/jobs`
    ///
    /// Set filters are forwarded as is, page/size/sort are always present.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(search) = self.search_term() {
            pairs.push(("search", search.to_string()));
        }
        if let Some(sector) = self.sector {
            pairs.push(("sector", sector.as_str().to_string()));
        }
        if let Some(category) = self.category_name() {
            pairs.push(("category", category.to_string()));
        }
        if let Some(location) = self.location_name() {
            pairs.push(("location", location.to_string()));
        }
        if let Some(level) = self.experience_level {
            pairs.push(("experienceLevel", level.as_str().to_string()));
        }
        if let Some(speciality) = self.speciality_name() {
            pairs.push(("speciality", speciality.to_string()));
        }
        if let Some(duty_type) = self.duty_type {
            pairs.push(("dutyType", duty_type.as_str().to_string()));
        }
        if let Some(featured) = self.featured {
            pairs.push(("featured", featured.to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }

        pairs.push(("page", self.page_index().to_string()));
        pairs.push(("size", self.page_size().to_string()));
        pairs.push(("sort", self.sort_expr().to_string()));

        pairs
    }
}

/// Paginated response envelope shared by the backend and the fallback path
///
/// Missing or `null` fields decode as empty content and zero counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct PageResult<T> {
    /// Items on this page
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub content: Vec<T>,

    /// Number of items matching the filters across all pages
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_elements: usize,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: usize,

    /// Page index (starts at 0)
    #[serde(default, deserialize_with = "null_as_default")]
    pub number: usize,

    #[serde(default, deserialize_with = "null_as_default")]
    pub size: usize,
}

impl<T> PageResult<T> {
    /// Cut page `page` of `size` items out of an already filtered and sorted set
    pub fn paginate(items: Vec<T>, page: usize, size: usize) -> Self {
        // Ensure size is at least 1 to avoid division by zero
        let size = size.max(1);
        let total_elements = items.len();
        let total_pages = total_elements.div_ceil(size);
        let start = page.saturating_mul(size);

        let content = items.into_iter().skip(start).take(size).collect();

        Self {
            content,
            total_elements,
            total_pages,
            number: page,
            size,
        }
    }

    /// Empty page for the given coordinates
    pub fn empty(page: usize, size: usize) -> Self {
        Self::paginate(Vec::new(), page, size)
    }

    /// Whether the page carries any items
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    /// Whether a page after this one exists
    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }

    /// Whether a page before this one exists
    pub fn has_prev(&self) -> bool {
        self.number > 0
    }
}

/// Values available for the category and location filters
///
/// A list the backend sends as `null` (or not as an array at all) is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsMeta {
    #[serde(default, deserialize_with = "string_list")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub locations: Vec<String>,
}

impl JobsMeta {
    /// True when neither list has entries
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.locations.is_empty()
    }
}
