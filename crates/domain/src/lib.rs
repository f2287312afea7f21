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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod budget;
mod error;
mod schedule;
mod types;
mod urgency;
mod validation;

#[cfg(test)]
mod tests;

pub use budget::apportion_half_hours;
pub use urgency::{
    BASE_MULTIPLIER_PERCENT, CourseWeight, UrgencyPolicy, UrgencyTier, compute_course_weights,
};

// Re-export public types
pub use error::{DomainError, ErrorKind};
pub use schedule::{CourseHours, DayPlan, Schedule, ScheduleViolation, Session};
pub use types::{Course, CourseId, DEFAULT_CREDITS, Hours, SessionType, TimeSlot};
pub use validation::{
    MAX_TOTAL_DAYS, MIN_TOTAL_DAYS, validate_course_fields, validate_course_id_unique,
    validate_course_set, validate_schedule, validate_total_days,
};
