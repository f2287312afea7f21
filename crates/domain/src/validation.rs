// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::schedule::{Schedule, ScheduleViolation};
use crate::types::{Course, CourseId, Hours};
use std::collections::{HashMap, HashSet};
use time::{Date, Duration};

/// Shortest accepted planning window, in days.
pub const MIN_TOTAL_DAYS: u32 = 7;

/// Longest accepted planning window, in days.
pub const MAX_TOTAL_DAYS: u32 = 120;

/// Validates that a course's basic field constraints are met.
///
/// This function checks field shape only. It does NOT check for uniqueness
/// (that requires context).
///
/// # Arguments
///
/// * `course` - The course to validate
///
/// # Errors
///
/// Returns an error if:
/// - The course id is empty
/// - The course name is empty or whitespace
/// - The course has no topics, or any topic is blank
/// - The course has fewer than 1 credit
pub fn validate_course_fields(course: &Course) -> Result<(), DomainError> {
    // Rule: id must not be empty
    if course.id.value().trim().is_empty() {
        return Err(DomainError::InvalidCourseId(String::from(
            "Course id cannot be empty",
        )));
    }

    // Rule: name must not be empty
    if course.name.trim().is_empty() {
        return Err(DomainError::InvalidCourseName(String::from(
            "Course name cannot be empty",
        )));
    }

    // Rule: at least one topic, none blank
    if course.topics.is_empty() {
        return Err(DomainError::InvalidTopics {
            course_id: course.id.clone(),
            reason: String::from("At least one topic is required"),
        });
    }
    if course.topics.iter().any(|t| t.trim().is_empty()) {
        return Err(DomainError::InvalidTopics {
            course_id: course.id.clone(),
            reason: String::from("Topics cannot be blank"),
        });
    }

    // Rule: credits >= 1
    if course.credits < 1 {
        return Err(DomainError::InvalidCredits {
            course_id: course.id.clone(),
            credits: course.credits,
        });
    }

    Ok(())
}

/// Validates that a course id is not already used by an existing course.
///
/// # Errors
///
/// Returns `DomainError::DuplicateCourse` if the id is already in use.
pub fn validate_course_id_unique(
    new_id: &CourseId,
    existing_courses: &[Course],
) -> Result<(), DomainError> {
    if existing_courses.iter().any(|c| &c.id == new_id) {
        return Err(DomainError::DuplicateCourse(new_id.clone()));
    }
    Ok(())
}

/// Validates that a planning window length is within the accepted range.
///
/// # Errors
///
/// Returns `DomainError::TotalDaysOutOfRange` unless `7 <= total_days <= 120`.
pub fn validate_total_days(total_days: u32) -> Result<(), DomainError> {
    if total_days < MIN_TOTAL_DAYS || total_days > MAX_TOTAL_DAYS {
        return Err(DomainError::TotalDaysOutOfRange {
            total_days,
            min: MIN_TOTAL_DAYS,
            max: MAX_TOTAL_DAYS,
        });
    }
    Ok(())
}

/// Validates a complete course set for one planning run.
///
/// # Errors
///
/// Returns an error if:
/// - The set is empty
/// - Any course fails `validate_course_fields`
/// - Two courses share an id
pub fn validate_course_set(courses: &[Course]) -> Result<(), DomainError> {
    if courses.is_empty() {
        return Err(DomainError::EmptyCourseSet);
    }

    let mut seen: HashSet<&CourseId> = HashSet::new();
    for course in courses {
        validate_course_fields(course)?;
        if !seen.insert(&course.id) {
            return Err(DomainError::DuplicateCourse(course.id.clone()));
        }
    }

    Ok(())
}

/// Checks every structural invariant of a schedule.
///
/// Unlike the field validators this does not stop at the first problem: all
/// violations are collected so a caller can report everything at once.
///
/// # Arguments
///
/// * `schedule` - The schedule to check
/// * `courses` - The courses the schedule was planned for
///
/// # Errors
///
/// Returns `DomainError::InvariantViolation` listing every broken rule.
#[allow(clippy::too_many_lines)]
pub fn validate_schedule(schedule: &Schedule, courses: &[Course]) -> Result<(), DomainError> {
    let mut violations: Vec<ScheduleViolation> = Vec::new();
    let by_id: HashMap<&CourseId, &Course> = courses.iter().map(|c| (&c.id, c)).collect();

    // Rule: one plan per day
    if schedule.days.len() != schedule.total_days as usize {
        violations.push(ScheduleViolation::DayCountMismatch {
            expected: schedule.total_days,
            actual: schedule.days.len(),
        });
    }

    // Hours placed per course, in first-seen order
    let mut placed: Vec<(CourseId, Hours)> = Vec::new();

    for (position, day) in schedule.days.iter().enumerate() {
        // Rule: indices are exactly 1..=total_days
        let expected_index: u32 = u32::try_from(position + 1).unwrap_or(u32::MAX);
        if day.day_index != expected_index {
            violations.push(ScheduleViolation::DayIndexOutOfSequence {
                position,
                expected: expected_index,
                actual: day.day_index,
            });
        }

        // Rule: dates follow the start date
        let expected_date: Option<Date> = schedule
            .start_date
            .checked_add(Duration::days(i64::from(day.day_index) - 1));
        if expected_date != Some(day.date) {
            violations.push(ScheduleViolation::DateMismatch {
                day_index: day.day_index,
                expected: expected_date,
                actual: day.date,
            });
        }

        for session in &day.sessions {
            if session.duration.is_zero() {
                violations.push(ScheduleViolation::EmptySessionDuration {
                    day_index: day.day_index,
                    course_id: session.course_id.clone(),
                });
            }

            if session.topics.is_empty() {
                violations.push(ScheduleViolation::EmptySessionTopics {
                    day_index: day.day_index,
                    course_id: session.course_id.clone(),
                });
            }

            match by_id.get(&session.course_id) {
                Some(course) => {
                    for topic in &session.topics {
                        if !course.topics.contains(topic) {
                            violations.push(ScheduleViolation::UnknownTopic {
                                day_index: day.day_index,
                                course_id: session.course_id.clone(),
                                topic: topic.clone(),
                            });
                        }
                    }
                }
                None => violations.push(ScheduleViolation::UnknownCourse {
                    day_index: day.day_index,
                    course_id: session.course_id.clone(),
                }),
            }

            match placed.iter_mut().find(|(id, _)| id == &session.course_id) {
                Some((_, hours)) => *hours += session.duration,
                None => placed.push((session.course_id.clone(), session.duration)),
            }
        }

        // Rule: declared day total matches its sessions
        let computed: Hours = day.sessions.iter().map(|s| s.duration).sum();
        if computed != day.total_hours {
            violations.push(ScheduleViolation::DayTotalMismatch {
                day_index: day.day_index,
                declared: day.total_hours,
                computed,
            });
        }

        // Rule: only rest days may be empty
        if day.sessions.is_empty() && !day.is_rest_day {
            violations.push(ScheduleViolation::EmptyStudyDay {
                day_index: day.day_index,
            });
        }
    }

    // Rule: course totals reference known courses and match placed hours
    for total in &schedule.course_hour_totals {
        if !by_id.contains_key(&total.course_id) {
            violations.push(ScheduleViolation::UnknownCourseTotal {
                course_id: total.course_id.clone(),
            });
        }

        let placed_hours: Hours = placed
            .iter()
            .find(|(id, _)| id == &total.course_id)
            .map_or(Hours::ZERO, |(_, hours)| *hours);
        if placed_hours != total.hours {
            violations.push(ScheduleViolation::CourseTotalMismatch {
                course_id: total.course_id.clone(),
                declared: total.hours,
                placed: placed_hours,
            });
        }
    }
    for (course_id, placed_hours) in &placed {
        let declared: bool = schedule
            .course_hour_totals
            .iter()
            .any(|t| &t.course_id == course_id);
        if !declared {
            violations.push(ScheduleViolation::CourseTotalMismatch {
                course_id: course_id.clone(),
                declared: Hours::ZERO,
                placed: *placed_hours,
            });
        }
    }

    // Rule: window and per-course sums agree
    let day_sum: Hours = schedule.days.iter().map(|d| d.total_hours).sum();
    let expected_window: Option<Hours> = schedule.hours_per_day.checked_mul(schedule.total_days);
    if expected_window != Some(day_sum) {
        violations.push(ScheduleViolation::WindowTotalMismatch {
            expected: expected_window,
            actual: day_sum,
        });
    }

    let course_sum: Hours = schedule.course_hour_totals.iter().map(|c| c.hours).sum();
    if course_sum != day_sum {
        violations.push(ScheduleViolation::CourseTotalsSumMismatch {
            expected: day_sum,
            actual: course_sum,
        });
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(DomainError::InvariantViolation { violations })
    }
}
