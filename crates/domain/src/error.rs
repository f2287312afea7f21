// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::schedule::ScheduleViolation;
use crate::types::CourseId;

/// Broad classification of a domain error.
///
/// Callers use the kind to decide how to report a failure without matching
/// on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A course entry or value is malformed.
    Validation,
    /// The planning request as a whole cannot be planned.
    InvalidRequest,
    /// An operation referenced an unknown course.
    NotFound,
    /// A produced schedule broke a structural invariant.
    InvariantViolation,
}

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Course identifier is empty or invalid.
    InvalidCourseId(String),
    /// Course name is empty or invalid.
    InvalidCourseName(String),
    /// Course has no topics, or a topic is blank.
    InvalidTopics {
        /// The offending course.
        course_id: CourseId,
        /// Description of the problem.
        reason: String,
    },
    /// Course credits are below the minimum of 1.
    InvalidCredits {
        /// The offending course.
        course_id: CourseId,
        /// The rejected credit value.
        credits: u32,
    },
    /// A course with the same identifier already exists.
    DuplicateCourse(CourseId),
    /// Course does not exist.
    CourseNotFound(CourseId),
    /// A planning request contained no courses.
    EmptyCourseSet,
    /// Planning window length is outside the accepted range.
    TotalDaysOutOfRange {
        /// The rejected value.
        total_days: u32,
        /// Smallest accepted value.
        min: u32,
        /// Largest accepted value.
        max: u32,
    },
    /// A duration is not a non-negative whole number of half hours.
    InvalidHours {
        /// Description of the problem.
        reason: String,
    },
    /// Urgency tiers are not a monotonic step function.
    InvalidUrgencyPolicy {
        /// Description of the problem.
        reason: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// A schedule failed structural validation.
    InvariantViolation {
        /// Every violated rule, in discovery order.
        violations: Vec<ScheduleViolation>,
    },
}

impl DomainError {
    /// Returns the broad classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCourseId(_)
            | Self::InvalidCourseName(_)
            | Self::InvalidTopics { .. }
            | Self::InvalidCredits { .. }
            | Self::DuplicateCourse(_)
            | Self::InvalidHours { .. }
            | Self::InvalidUrgencyPolicy { .. }
            | Self::DateParseError { .. } => ErrorKind::Validation,
            Self::EmptyCourseSet
            | Self::TotalDaysOutOfRange { .. }
            | Self::DateArithmeticOverflow { .. } => ErrorKind::InvalidRequest,
            Self::CourseNotFound(_) => ErrorKind::NotFound,
            Self::InvariantViolation { .. } => ErrorKind::InvariantViolation,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCourseId(msg) => write!(f, "Invalid course id: {msg}"),
            Self::InvalidCourseName(msg) => write!(f, "Invalid course name: {msg}"),
            Self::InvalidTopics { course_id, reason } => {
                write!(f, "Invalid topics for course '{course_id}': {reason}")
            }
            Self::InvalidCredits { course_id, credits } => {
                write!(
                    f,
                    "Invalid credits for course '{course_id}': {credits}. Must be at least 1"
                )
            }
            Self::DuplicateCourse(id) => write!(f, "Course '{id}' already exists"),
            Self::CourseNotFound(id) => write!(f, "Course '{id}' not found"),
            Self::EmptyCourseSet => write!(f, "At least one course is required"),
            Self::TotalDaysOutOfRange {
                total_days,
                min,
                max,
            } => {
                write!(
                    f,
                    "Invalid number of study days: {total_days}. Must be between {min} and {max}"
                )
            }
            Self::InvalidHours { reason } => write!(f, "Invalid hours: {reason}"),
            Self::InvalidUrgencyPolicy { reason } => {
                write!(f, "Invalid urgency policy: {reason}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvariantViolation { violations } => {
                write!(f, "Schedule violates {} invariant(s)", violations.len())?;
                for violation in violations {
                    write!(f, "; {violation}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for DomainError {}
