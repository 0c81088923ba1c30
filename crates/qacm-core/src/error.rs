//! Client-side error types.

use std::fmt;

use qacm_shared::ErrorResponse;
use thiserror::Error;

/// Failures surfaced by an entity service.
///
/// Transport and HTTP-status failures are the only classes the backend can
/// produce; the id checks fail before any request is made.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("HTTP {status}: {message}")]
    Status {
        status: u16,
        message: String,
        problem: Option<Box<ErrorResponse>>,
    },

    #[error("Could not encode {entity} request: {message}")]
    Encode {
        entity: &'static str,
        message: String,
    },

    #[error("Could not decode {entity} response: {message}")]
    Decode {
        entity: &'static str,
        message: String,
    },

    #[error("A new {entity} cannot already have an ID")]
    IdExists { entity: &'static str },

    #[error("Invalid id: {entity} has no ID")]
    IdMissing { entity: &'static str },

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}

impl ClientError {
    /// HTTP status behind this error, if there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::NotFound { .. } => Some(404),
            _ => None,
        }
    }

    /// Build a status error from a decoded problem body.
    pub fn from_problem(status: u16, problem: ErrorResponse) -> Self {
        ClientError::Status {
            status,
            message: problem.summary().to_string(),
            problem: Some(Box::new(problem)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldErrorKind {
    Required,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

/// Every field that blocked a save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require<T>(&mut self, field: &'static str, value: Option<&T>) {
        if value.is_none() {
            self.errors.push(FieldError {
                field,
                kind: FieldErrorKind::Required,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field).collect();
        write!(f, "Validation failed: required {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Outcome of a rejected save.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Client(#[from] ClientError),
}
