// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule model produced by the allocator.
//!
//! A schedule is produced whole by one planning call and never mutated
//! afterwards. Re-planning always builds a new schedule.
//!
//! ## Invariants
//!
//! - `days.len() == total_days` and day indices are exactly `1..=total_days`
//! - Day `n` falls on `start_date + (n - 1)` days
//! - Every session has a positive duration and at least one topic
//! - A day's total equals the sum of its session durations
//! - Only rest days may have no sessions
//! - The sum of day totals equals `total_days * hours_per_day` and equals the
//!   sum of the per-course totals
//!
//! `validate_schedule` checks all of these and reports every violation.

use crate::types::{CourseId, Hours, SessionType, TimeSlot};
use serde::{Deserialize, Serialize};
use time::Date;

/// One block of study for one course on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The course studied.
    pub course_id: CourseId,
    /// Topics covered, an ordered subsequence of the course topics.
    pub topics: Vec<String>,
    /// Length of the session.
    pub duration: Hours,
    /// Part of the day the session is placed in.
    pub time_slot: TimeSlot,
    /// Kind of work done.
    #[serde(rename = "type")]
    pub session_type: SessionType,
}

/// Plan for a single day of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// 1-based index of the day within the window.
    pub day_index: u32,
    /// Calendar date of the day.
    pub date: Date,
    /// Sessions ordered by time slot.
    pub sessions: Vec<Session>,
    /// Sum of session durations.
    pub total_hours: Hours,
    /// Derived focus summary. Regenerable, never authoritative.
    pub notes: String,
    /// Whether the day was designated a rest day.
    pub is_rest_day: bool,
}

impl DayPlan {
    /// Creates a day plan, deriving the total from the sessions.
    #[must_use]
    pub fn new(
        day_index: u32,
        date: Date,
        sessions: Vec<Session>,
        notes: String,
        is_rest_day: bool,
    ) -> Self {
        let total_hours: Hours = sessions.iter().map(|s| s.duration).sum();
        Self {
            day_index,
            date,
            sessions,
            total_hours,
            notes,
            is_rest_day,
        }
    }
}

/// Cumulative hours allocated to one course across the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseHours {
    /// The course.
    pub course_id: CourseId,
    /// Hours allocated over the whole window.
    pub hours: Hours,
}

/// A complete day-by-day study schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Number of days in the window.
    pub total_days: u32,
    /// Date of day 1.
    pub start_date: Date,
    /// Daily study budget the schedule was planned with.
    pub hours_per_day: Hours,
    /// Day plans, in day order.
    pub days: Vec<DayPlan>,
    /// Per-course totals, in registry order.
    pub course_hour_totals: Vec<CourseHours>,
}

impl Schedule {
    /// Returns the hours allocated to a course, if it is part of the schedule.
    #[must_use]
    pub fn hours_for(&self, course_id: &CourseId) -> Option<Hours> {
        self.course_hour_totals
            .iter()
            .find(|c| &c.course_id == course_id)
            .map(|c| c.hours)
    }

    /// Returns the total hours across all days.
    #[must_use]
    pub fn total_study_hours(&self) -> Hours {
        self.days.iter().map(|d| d.total_hours).sum()
    }

    /// Returns every session for a course with the day it falls on.
    pub fn sessions_for<'a>(
        &'a self,
        course_id: &CourseId,
    ) -> impl Iterator<Item = (&'a DayPlan, &'a Session)> {
        self.days.iter().flat_map(move |day| {
            day.sessions
                .iter()
                .filter(move |s| &s.course_id == course_id)
                .map(move |s| (day, s))
        })
    }
}

/// A single broken schedule invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleViolation {
    /// The number of day plans differs from `total_days`.
    DayCountMismatch {
        /// Declared window length.
        expected: u32,
        /// Number of day plans present.
        actual: usize,
    },
    /// Day indices are not exactly `1..=total_days` in order.
    DayIndexOutOfSequence {
        /// 0-based position in the day list.
        position: usize,
        /// Index expected at that position.
        expected: u32,
        /// Index found.
        actual: u32,
    },
    /// A day's date does not follow from the start date.
    DateMismatch {
        /// The day index.
        day_index: u32,
        /// Date implied by the start date.
        expected: Option<Date>,
        /// Date found.
        actual: Date,
    },
    /// A session has zero duration.
    EmptySessionDuration {
        /// The day index.
        day_index: u32,
        /// The session's course.
        course_id: CourseId,
    },
    /// A session references a course that is not part of the plan.
    UnknownCourse {
        /// The day index.
        day_index: u32,
        /// The unknown course.
        course_id: CourseId,
    },
    /// A session has no topics.
    EmptySessionTopics {
        /// The day index.
        day_index: u32,
        /// The session's course.
        course_id: CourseId,
    },
    /// A session lists a topic the course does not have.
    UnknownTopic {
        /// The day index.
        day_index: u32,
        /// The session's course.
        course_id: CourseId,
        /// The unknown topic.
        topic: String,
    },
    /// A day's declared total differs from the sum of its sessions.
    DayTotalMismatch {
        /// The day index.
        day_index: u32,
        /// Declared total.
        declared: Hours,
        /// Sum of session durations.
        computed: Hours,
    },
    /// A day that is not a rest day has no sessions.
    EmptyStudyDay {
        /// The day index.
        day_index: u32,
    },
    /// Per-course totals reference a course that is not part of the plan.
    UnknownCourseTotal {
        /// The unknown course.
        course_id: CourseId,
    },
    /// A course's declared total differs from the hours placed in sessions.
    CourseTotalMismatch {
        /// The course.
        course_id: CourseId,
        /// Declared total.
        declared: Hours,
        /// Hours placed in sessions.
        placed: Hours,
    },
    /// The sum of day totals differs from `total_days * hours_per_day`.
    WindowTotalMismatch {
        /// `total_days * hours_per_day`.
        expected: Option<Hours>,
        /// Sum of day totals.
        actual: Hours,
    },
    /// The per-course totals do not add up to the sum of day totals.
    CourseTotalsSumMismatch {
        /// Sum of day totals.
        expected: Hours,
        /// Sum of per-course totals.
        actual: Hours,
    },
}

impl std::fmt::Display for ScheduleViolation {
    #[allow(clippy::too_many_lines)]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DayCountMismatch { expected, actual } => {
                write!(f, "expected {expected} days, found {actual}")
            }
            Self::DayIndexOutOfSequence {
                position,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "day at position {position} has index {actual}, expected {expected}"
                )
            }
            Self::DateMismatch {
                day_index,
                expected,
                actual,
            } => match expected {
                Some(expected) => write!(
                    f,
                    "day {day_index} falls on {actual}, expected {expected}"
                ),
                None => write!(f, "day {day_index} has no representable date"),
            },
            Self::EmptySessionDuration {
                day_index,
                course_id,
            } => {
                write!(f, "day {day_index} has a zero-length session for '{course_id}'")
            }
            Self::UnknownCourse {
                day_index,
                course_id,
            } => {
                write!(f, "day {day_index} references unknown course '{course_id}'")
            }
            Self::EmptySessionTopics {
                day_index,
                course_id,
            } => {
                write!(f, "day {day_index} has a session for '{course_id}' without topics")
            }
            Self::UnknownTopic {
                day_index,
                course_id,
                topic,
            } => {
                write!(
                    f,
                    "day {day_index} lists topic '{topic}' which course '{course_id}' does not have"
                )
            }
            Self::DayTotalMismatch {
                day_index,
                declared,
                computed,
            } => {
                write!(
                    f,
                    "day {day_index} declares {declared} but its sessions sum to {computed}"
                )
            }
            Self::EmptyStudyDay { day_index } => {
                write!(f, "day {day_index} has no sessions but is not a rest day")
            }
            Self::UnknownCourseTotal { course_id } => {
                write!(f, "course totals reference unknown course '{course_id}'")
            }
            Self::CourseTotalMismatch {
                course_id,
                declared,
                placed,
            } => {
                write!(
                    f,
                    "course '{course_id}' declares {declared} but sessions place {placed}"
                )
            }
            Self::WindowTotalMismatch { expected, actual } => match expected {
                Some(expected) => write!(
                    f,
                    "days sum to {actual}, expected {expected} for the window"
                ),
                None => write!(f, "window total overflows, days sum to {actual}"),
            },
            Self::CourseTotalsSumMismatch { expected, actual } => {
                write!(
                    f,
                    "course totals sum to {actual}, expected {expected} from day totals"
                )
            }
        }
    }
}
