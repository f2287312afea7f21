// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lenient parsing of raw form input.
//!
//! Course entries arrive as free text. This module trims, splits and
//! defaults them into domain courses. Field rules beyond presence (credit
//! minimum, unique ids) are left to the domain validators.

use crate::request_response::CourseEntry;
use study_plan_domain::{
    Course, CourseId, DEFAULT_CREDITS, DomainError, MAX_TOTAL_DAYS, MIN_TOTAL_DAYS,
};
use thiserror::Error;
use time::Date;

/// Window length used when the study-day field cannot be read.
pub const DEFAULT_STUDY_DAYS: u32 = 30;

/// Course entry errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CourseEntryError {
    /// The name field is blank.
    #[error("Course {position} needs a name")]
    MissingName { position: usize },

    /// No topic survived splitting and trimming.
    #[error("Course '{name}' needs at least one topic")]
    MissingTopics { name: String },

    /// The exam date is not a `YYYY-MM-DD` date.
    #[error("Course '{name}' has an invalid exam date '{value}'")]
    InvalidExamDate { name: String, value: String },
}

impl CourseEntryError {
    /// Returns the JSON field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingName { .. } => "name",
            Self::MissingTopics { .. } => "topics",
            Self::InvalidExamDate { .. } => "examDate",
        }
    }
}

/// Returns the identifier assigned to the entry at `position` (1-based).
#[must_use]
pub fn course_id_for(position: usize) -> CourseId {
    CourseId::new(&format!("course-{position}"))
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(
        value.trim(),
        time::macros::format_description!("[year]-[month]-[day]"),
    )
    .map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns the formatter error for dates outside the four-digit year range.
pub fn format_date(date: Date) -> Result<String, time::error::Format> {
    date.format(time::macros::format_description!("[year]-[month]-[day]"))
}

/// Splits a comma-separated topic list, dropping blank fragments.
#[must_use]
pub fn parse_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(String::from)
        .collect()
}

/// Reads the integer at the start of a form field.
///
/// Leading whitespace and one sign are accepted and reading stops at the
/// first non-digit, so `"14 days"` reads as 14. Returns `None` when no digit
/// follows. Values beyond `i64` saturate.
fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed: &str = raw.trim_start();
    let (negative, digits): (bool, &str) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: Option<i64> = None;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        let next: i64 = value
            .unwrap_or(0)
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
        value = Some(next);
    }

    value.map(|magnitude| if negative { -magnitude } else { magnitude })
}

/// Reads a credit field.
///
/// Leading digits are read; blank, non-numeric, zero and negative values
/// all fall back to the default of 3.
#[must_use]
pub fn parse_credits(raw: Option<&str>) -> u32 {
    raw.and_then(parse_leading_integer)
        .filter(|credits| *credits > 0)
        .and_then(|credits| u32::try_from(credits).ok())
        .unwrap_or(DEFAULT_CREDITS)
}

/// Reads the study-day field the way a form input box would.
///
/// Leading digits are read. A field without digits, or one that reads as
/// zero, yields 30; any other number is clamped into the accepted window
/// range.
#[must_use]
pub fn parse_study_days(raw: &str) -> u32 {
    let days: i64 = match parse_leading_integer(raw) {
        None | Some(0) => return DEFAULT_STUDY_DAYS,
        Some(days) => days,
    };
    let clamped: i64 = days.clamp(i64::from(MIN_TOTAL_DAYS), i64::from(MAX_TOTAL_DAYS));
    u32::try_from(clamped).unwrap_or(DEFAULT_STUDY_DAYS)
}

/// Parses one raw course entry into a course.
///
/// # Arguments
///
/// * `position` - 1-based position of the entry, used for the course id
/// * `entry` - The raw entry
///
/// # Errors
///
/// Returns an error if the name or topics are blank, or the exam date is
/// present but malformed.
pub fn parse_course_entry(
    position: usize,
    entry: &CourseEntry,
) -> Result<Course, CourseEntryError> {
    let name: &str = entry.name.trim();
    if name.is_empty() {
        return Err(CourseEntryError::MissingName { position });
    }

    let topics: Vec<String> = parse_topics(&entry.topics);
    if topics.is_empty() {
        return Err(CourseEntryError::MissingTopics {
            name: name.to_string(),
        });
    }

    let exam_date: Option<Date> = match entry.exam_date.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(parse_date(value).map_err(|_| CourseEntryError::InvalidExamDate {
            name: name.to_string(),
            value: value.to_string(),
        })?),
    };

    Ok(Course::new(
        course_id_for(position),
        name.to_string(),
        topics,
        Some(parse_credits(entry.credits.as_deref())),
        exam_date,
    ))
}
