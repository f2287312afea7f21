// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::registry::CourseRegistry;
use study_plan_domain::{Course, validate_course_set, validate_total_days};
use time::Date;

/// Everything the allocator needs for one planning run.
///
/// A request built from a registry already holds valid, unique courses. A
/// request assembled by hand is checked again when it is planned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanningRequest {
    /// Courses in registry order.
    pub courses: Vec<Course>,
    /// Length of the planning window in days.
    pub total_days: u32,
    /// Date of day 1.
    pub start_date: Date,
}

impl PlanningRequest {
    /// Creates a request from an explicit course list.
    #[must_use]
    pub const fn new(courses: Vec<Course>, total_days: u32, start_date: Date) -> Self {
        Self {
            courses,
            total_days,
            start_date,
        }
    }

    /// Creates a request from the courses of a registry.
    #[must_use]
    pub fn from_registry(registry: &CourseRegistry, total_days: u32, start_date: Date) -> Self {
        Self::new(registry.all().to_vec(), total_days, start_date)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `total_days` is outside the accepted range
    /// - The course list is empty
    /// - Any course is invalid, or two courses share an id
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_total_days(self.total_days)?;
        validate_course_set(&self.courses)?;
        Ok(())
    }
}
