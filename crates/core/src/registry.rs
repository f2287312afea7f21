// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use study_plan_domain::{
    Course, CourseId, DomainError, validate_course_fields, validate_course_id_unique,
};

/// Validated, insertion-ordered set of courses for one planning run.
///
/// Every course is validated on insert, so a registry never holds a course
/// that breaks a field rule or duplicates an id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseRegistry {
    courses: Vec<Course>,
}

impl CourseRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    /// Adds a course to the end of the registry.
    ///
    /// # Arguments
    ///
    /// * `course` - The course to add
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The course fails field validation
    /// - A course with the same id is already registered
    pub fn add(&mut self, course: Course) -> Result<(), CoreError> {
        validate_course_fields(&course)?;
        validate_course_id_unique(&course.id, &self.courses)?;
        self.courses.push(course);
        Ok(())
    }

    /// Removes a course, returning it.
    ///
    /// The relative order of the remaining courses is preserved.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CourseNotFound` if no course has this id.
    pub fn remove(&mut self, id: &CourseId) -> Result<Course, CoreError> {
        let position: usize = self
            .courses
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| DomainError::CourseNotFound(id.clone()))?;
        Ok(self.courses.remove(position))
    }

    /// Returns the course with this id, if registered.
    #[must_use]
    pub fn get(&self, id: &CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| &c.id == id)
    }

    /// Returns all courses in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    /// Returns the number of registered courses.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns `true` if no course is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
