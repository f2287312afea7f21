// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod parsing;
mod request_response;

#[cfg(test)]
mod tests;

use study_plan::{Allocator, CourseRegistry, PlannerConfig, PlanningRequest};
use study_plan_domain::{Course, CourseId, DomainError, Hours, Schedule, Session};
use time::Date;
use tracing::info;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use parsing::{
    CourseEntryError, DEFAULT_STUDY_DAYS, course_id_for, format_date, parse_course_entry,
    parse_credits, parse_date, parse_study_days, parse_topics,
};
pub use request_response::{
    CourseBreakdown, CourseEntry, DayInfo, ParseCoursesRequest, ParseCoursesResponse,
    ParsedCourse, SessionInfo, TimetableRequest, TimetableResponse, TimetableSummary,
};

/// Parses raw course entries and validates them as one course set.
///
/// Courses are assigned ids `course-1`, `course-2`, ... in entry order.
///
/// # Errors
///
/// Returns an error if any entry is malformed, fails a domain field rule, or
/// if there are no entries at all.
fn build_registry(entries: &[CourseEntry]) -> Result<CourseRegistry, ApiError> {
    let mut registry: CourseRegistry = CourseRegistry::new();
    for (index, entry) in entries.iter().enumerate() {
        let course: Course = parse_course_entry(index + 1, entry)?;
        registry.add(course).map_err(translate_core_error)?;
    }

    // Rule: a course set is never empty
    if registry.is_empty() {
        return Err(translate_domain_error(DomainError::EmptyCourseSet));
    }

    Ok(registry)
}

/// Resolves the window length from the strict field, falling back to the
/// lenient study-day field.
///
/// # Errors
///
/// Returns an error if neither field is present.
fn requested_total_days(request: &TimetableRequest) -> Result<u32, ApiError> {
    match (request.total_days, request.study_days.as_deref()) {
        (Some(total_days), _) => Ok(total_days),
        (None, Some(raw)) => Ok(parse_study_days(raw)),
        (None, None) => Err(ApiError::InvalidInput {
            field: String::from("totalDays"),
            message: String::from("Either totalDays or studyDays is required"),
        }),
    }
}

fn format_response_date(date: Date) -> Result<String, ApiError> {
    format_date(date).map_err(|e| ApiError::Internal {
        message: format!("Failed to format date {date}: {e}"),
    })
}

/// Normalises and validates raw course entries without planning.
///
/// # Arguments
///
/// * `request` - The raw course entries
///
/// # Returns
///
/// * `Ok(ParseCoursesResponse)` with the effective course values
/// * `Err(ApiError)` if any entry is invalid
///
/// # Errors
///
/// Returns an error if:
/// - An entry has a blank name or no topics
/// - An exam date is not a valid `YYYY-MM-DD` date
/// - No entries were supplied
pub fn parse_courses(request: &ParseCoursesRequest) -> Result<ParseCoursesResponse, ApiError> {
    let registry: CourseRegistry = build_registry(&request.courses)?;

    let mut courses: Vec<ParsedCourse> = Vec::with_capacity(registry.len());
    for course in registry.all() {
        let exam_date: Option<String> = course.exam_date.map(format_response_date).transpose()?;
        courses.push(ParsedCourse {
            id: course.id.value().to_string(),
            name: course.name.clone(),
            topics: course.topics.clone(),
            credits: course.credits,
            exam_date,
        });
    }

    info!(courses = courses.len(), "Parsed course entries");
    Ok(ParseCoursesResponse { courses })
}

/// Generates a timetable from raw form input.
///
/// # Arguments
///
/// * `config` - The planner configuration to use
/// * `request` - The raw timetable request
///
/// # Returns
///
/// * `Ok(TimetableResponse)` on success
/// * `Err(ApiError)` if the input is invalid or planning fails
///
/// # Errors
///
/// Returns an error if:
/// - Any course entry is invalid
/// - The start date is not a valid `YYYY-MM-DD` date
/// - `hoursPerDay` is not a positive whole number of half hours
/// - `totalDays` is missing or outside the accepted range; a lenient
///   `studyDays` field is used instead when `totalDays` is absent
pub fn generate_timetable(
    config: &PlannerConfig,
    request: &TimetableRequest,
) -> Result<TimetableResponse, ApiError> {
    let registry: CourseRegistry = build_registry(&request.courses)?;
    let total_days: u32 = requested_total_days(request)?;

    let start_date: Date = parse_date(&request.start_date).map_err(|e| ApiError::InvalidInput {
        field: String::from("startDate"),
        message: e.to_string(),
    })?;

    let config: PlannerConfig = match request.hours_per_day {
        Some(value) => {
            let hours_per_day: Hours = Hours::try_from(value).map_err(translate_domain_error)?;
            config.with_hours_per_day(hours_per_day)
        }
        None => config.clone(),
    };
    let allocator: Allocator = Allocator::new(config).map_err(translate_core_error)?;

    let planning_request: PlanningRequest =
        PlanningRequest::from_registry(&registry, total_days, start_date);
    let schedule: Schedule = allocator
        .plan(&planning_request)
        .map_err(translate_core_error)?;

    let response: TimetableResponse = timetable_response(&schedule, &registry)?;
    info!(
        courses = registry.len(),
        total_days = response.total_days,
        total_study_hours = response.summary.total_study_hours,
        "Generated timetable"
    );
    Ok(response)
}

/// Converts a schedule into its JSON shape, naming courses by display name.
///
/// # Errors
///
/// Returns an error if a day's date cannot be formatted.
pub fn timetable_response(
    schedule: &Schedule,
    registry: &CourseRegistry,
) -> Result<TimetableResponse, ApiError> {
    let course_name = |id: &CourseId| -> String {
        registry
            .get(id)
            .map_or_else(|| id.value().to_string(), |course| course.name.clone())
    };
    let session_info = |session: &Session| -> SessionInfo {
        SessionInfo {
            course: course_name(&session.course_id),
            topics: session.topics.clone(),
            duration: session.duration.to_string(),
            time_slot: session.time_slot.as_str().to_string(),
            session_type: session.session_type.as_str().to_string(),
        }
    };

    let mut days: Vec<DayInfo> = Vec::with_capacity(schedule.days.len());
    for day in &schedule.days {
        days.push(DayInfo {
            day: day.day_index,
            date: format_response_date(day.date)?,
            sessions: day.sessions.iter().map(&session_info).collect(),
            total_hours: day.total_hours.to_string(),
            notes: day.notes.clone(),
        });
    }

    let courses_breakdown: Vec<CourseBreakdown> = schedule
        .course_hour_totals
        .iter()
        .map(|total| CourseBreakdown {
            course: course_name(&total.course_id),
            hours: total.hours.as_f64(),
        })
        .collect();

    Ok(TimetableResponse {
        total_days: schedule.total_days,
        days,
        summary: TimetableSummary {
            total_study_hours: schedule.total_study_hours().as_f64(),
            courses_breakdown,
        },
    })
}
