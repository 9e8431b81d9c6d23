//! Typed error handling for the job client
//!
//! Every remote operation returns a [`ClientError`] so callers can match on
//! the failure category instead of inspecting a generic `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`ClientError::Transport`]: the request never produced a response
//! - [`ClientError::Status`]: the backend answered with a non-2xx status
//! - [`ClientError::Decode`]: the body could not be decoded
//! - [`ConfigError`]: configuration parsing and validation
//! - [`ValidationError`]: payload validation before a write
//!
//! # Example
//!
//! ```rust,ignore
//! use medexjob::prelude::*;
//!
//! match service.get("42").await {
//!     Ok(job) => println!("Found: {}", job.title),
//!     Err(ClientError::Status { status: 404, .. }) => println!("No such job"),
//!     Err(e) => eprintln!("Backend unavailable: {} ({})", e, e.error_code()),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// The main error type for the job client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network level failure (connection refused, timeout, DNS, ...)
    #[error("Transport error on {url}: {message}")]
    Transport { url: String, message: String },

    /// The backend answered with a non-success status code
    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body was not the expected JSON shape
    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Payload rejected before it was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport { .. } => "TRANSPORT_ERROR",
            ClientError::Status { .. } => "UNEXPECTED_STATUS",
            ClientError::Decode { .. } => "DECODE_ERROR",
            ClientError::Config(_) => "CONFIG_ERROR",
            ClientError::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Status code carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Convert to a serializable error summary
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ClientError::Status { url, status } => Some(serde_json::json!({
                "url": url,
                "status": status
            })),
            ClientError::Transport { url, .. } | ClientError::Decode { url, .. } => {
                Some(serde_json::json!({ "url": url }))
            }
            ClientError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

/// Serializable error summary, handy for logging or surfacing to a UI layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required value is missing or empty
    #[error("Missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    /// A value is present but unusable
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// The fallback corpus file could not be read or parsed
    #[error("Failed to load corpus from '{path}': {message}")]
    CorpusLoad { path: String, message: String },
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Field-level validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Errors related to payload validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Field failures collected from one payload
    #[error("Validation failed: {}", format_field_errors(.0))]
    FieldErrors(Vec<FieldError>),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<validator::ValidationErrors> for ValidationError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldError {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string()),
                })
            })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        ValidationError::FieldErrors(fields)
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ClientError::Validation(errors.into())
    }
}
