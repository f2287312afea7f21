// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::parsing::CourseEntryError;
use study_plan::CoreError;
use study_plan_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<CourseEntryError> for ApiError {
    fn from(err: CourseEntryError) -> Self {
        Self::InvalidInput {
            field: String::from(err.field()),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidCourseId(msg) => ApiError::InvalidInput {
            field: String::from("id"),
            message: msg,
        },
        DomainError::InvalidCourseName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::InvalidTopics { course_id, reason } => ApiError::InvalidInput {
            field: String::from("topics"),
            message: format!("Course '{course_id}': {reason}"),
        },
        DomainError::InvalidCredits { course_id, credits } => ApiError::InvalidInput {
            field: String::from("credits"),
            message: format!("Course '{course_id}' has {credits} credits, at least 1 is required"),
        },
        DomainError::DuplicateCourse(course_id) => ApiError::DomainRuleViolation {
            rule: String::from("unique_course_id"),
            message: format!("Course '{course_id}' appears more than once"),
        },
        DomainError::CourseNotFound(course_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Course"),
            message: format!("Course '{course_id}' does not exist"),
        },
        err @ (DomainError::EmptyCourseSet
        | DomainError::TotalDaysOutOfRange { .. }
        | DomainError::DateArithmeticOverflow { .. }) => translate_invalid_request(&err),
        DomainError::InvalidHours { reason } => ApiError::InvalidInput {
            field: String::from("hoursPerDay"),
            message: reason,
        },
        DomainError::InvalidUrgencyPolicy { reason } => ApiError::InvalidInput {
            field: String::from("config"),
            message: reason,
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{date_string}' is not a valid YYYY-MM-DD date: {error}"),
        },
        err @ DomainError::InvariantViolation { .. } => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a request-level domain error into an API error.
///
/// Every error of kind `ErrorKind::InvalidRequest` becomes `InvalidInput`
/// naming the request field that cannot be planned, so they all share one
/// response status.
fn translate_invalid_request(err: &DomainError) -> ApiError {
    let (field, message): (&str, String) = match err {
        DomainError::EmptyCourseSet => (
            "courses",
            String::from("At least one course is required to build a timetable"),
        ),
        DomainError::TotalDaysOutOfRange {
            total_days,
            min,
            max,
        } => (
            "totalDays",
            format!("{total_days} study days requested, must be between {min} and {max}"),
        ),
        DomainError::DateArithmeticOverflow { operation } => (
            "startDate",
            format!("Date arithmetic overflow while {operation}"),
        ),
        other => ("request", other.to_string()),
    };
    ApiError::InvalidInput {
        field: String::from(field),
        message,
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidConfig { reason } => ApiError::InvalidInput {
            field: String::from("config"),
            message: reason,
        },
    }
}
