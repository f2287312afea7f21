// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for error translation at the API boundary.

use crate::{ApiError, CourseEntryError, translate_core_error, translate_domain_error};
use study_plan::CoreError;
use study_plan_domain::{CourseId, DomainError, ErrorKind, ScheduleViolation};

#[test]
fn test_duplicate_course_is_rule_violation() {
    let err: ApiError = translate_domain_error(DomainError::DuplicateCourse(CourseId::new("a")));
    assert_eq!(
        err,
        ApiError::DomainRuleViolation {
            rule: String::from("unique_course_id"),
            message: String::from("Course 'a' appears more than once"),
        }
    );
}

#[test]
fn test_unknown_course_is_not_found() {
    let err: ApiError = translate_domain_error(DomainError::CourseNotFound(CourseId::new("x")));
    assert!(matches!(
        err,
        ApiError::ResourceNotFound { ref resource_type, .. } if resource_type == "Course"
    ));
}

#[test]
fn test_total_days_names_the_field() {
    let err: ApiError = translate_domain_error(DomainError::TotalDaysOutOfRange {
        total_days: 6,
        min: 7,
        max: 120,
    });
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'totalDays': 6 study days requested, must be between 7 and 120"
    );
}

#[test]
fn test_unplannable_requests_share_one_response() {
    let errors: Vec<DomainError> = vec![
        DomainError::EmptyCourseSet,
        DomainError::TotalDaysOutOfRange {
            total_days: 121,
            min: 7,
            max: 120,
        },
        DomainError::DateArithmeticOverflow {
            operation: String::from("computing the date of day 14"),
        },
    ];

    let mut fields: Vec<String> = Vec::new();
    for err in errors {
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
        match translate_domain_error(err) {
            ApiError::InvalidInput { field, .. } => fields.push(field),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
    assert_eq!(fields, vec!["courses", "totalDays", "startDate"]);
}

#[test]
fn test_invariant_violation_is_internal() {
    let err: ApiError = translate_domain_error(DomainError::InvariantViolation {
        violations: vec![ScheduleViolation::DayCountMismatch {
            expected: 7,
            actual: 6,
        }],
    });
    assert!(matches!(err, ApiError::Internal { .. }));
}

#[test]
fn test_core_errors() {
    assert!(matches!(
        translate_core_error(CoreError::DomainViolation(DomainError::EmptyCourseSet)),
        ApiError::InvalidInput { ref field, .. } if field == "courses"
    ));
    assert_eq!(
        translate_core_error(CoreError::InvalidConfig {
            reason: String::from("session cap must be positive"),
        }),
        ApiError::InvalidInput {
            field: String::from("config"),
            message: String::from("session cap must be positive"),
        }
    );
}

#[test]
fn test_entry_error_keeps_field() {
    let err: ApiError = ApiError::from(CourseEntryError::MissingTopics {
        name: String::from("Databases"),
    });
    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("topics"),
            message: String::from("Course 'Databases' needs at least one topic"),
        }
    );
}
