// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Course, CourseId, DEFAULT_CREDITS, DomainError, Hours, SessionType, TimeSlot};
use time::macros::date;

#[test]
fn test_course_id_creation() {
    let id: CourseId = CourseId::new("algo");
    assert_eq!(id.value(), "algo");
    assert_eq!(format!("{id}"), "algo");
}

#[test]
fn test_course_defaults_credits() {
    let course: Course = Course::new(
        CourseId::new("algo"),
        String::from("Algorithms"),
        vec![String::from("Sorting")],
        None,
        None,
    );
    assert_eq!(course.credits, DEFAULT_CREDITS);
}

#[test]
fn test_days_until_exam() {
    let course: Course = Course::new(
        CourseId::new("algo"),
        String::from("Algorithms"),
        vec![String::from("Sorting")],
        Some(4),
        Some(date!(2026 - 03 - 10)),
    );
    assert_eq!(course.days_until_exam(date!(2026 - 03 - 01)), Some(9));
    assert_eq!(course.days_until_exam(date!(2026 - 03 - 10)), Some(0));
    assert_eq!(course.days_until_exam(date!(2026 - 03 - 12)), Some(-2));
}

#[test]
fn test_days_until_exam_without_exam() {
    let course: Course = Course::new(
        CourseId::new("db"),
        String::from("Databases"),
        vec![String::from("SQL")],
        None,
        None,
    );
    assert_eq!(course.days_until_exam(date!(2026 - 03 - 01)), None);
}

// ============================================================================
// Hours
// ============================================================================

#[test]
fn test_hours_display() {
    assert_eq!(Hours::from_whole_hours(1).to_string(), "1 hour");
    assert_eq!(Hours::from_whole_hours(2).to_string(), "2 hours");
    assert_eq!(Hours::from_half_hours(3).to_string(), "1.5 hours");
    assert_eq!(Hours::from_half_hours(1).to_string(), "0.5 hours");
    assert_eq!(Hours::ZERO.to_string(), "0 hours");
}

#[test]
fn test_hours_arithmetic() {
    let total: Hours = [
        Hours::from_half_hours(3),
        Hours::from_whole_hours(2),
        Hours::from_half_hours(1),
    ]
    .into_iter()
    .sum();
    assert_eq!(total, Hours::from_whole_hours(4));
    assert!((total.as_f64() - 4.0).abs() < f64::EPSILON);
    assert_eq!(
        Hours::from_whole_hours(3).checked_mul(14),
        Some(Hours::from_whole_hours(42))
    );
    assert_eq!(Hours::from_half_hours(u32::MAX).checked_mul(2), None);
}

#[test]
fn test_hours_addition_saturates() {
    let max: Hours = Hours::from_half_hours(u32::MAX);
    assert_eq!(max + Hours::from_half_hours(1), max);

    let mut running: Hours = Hours::from_half_hours(u32::MAX - 1);
    running += Hours::from_whole_hours(1);
    assert_eq!(running, max);
}

#[test]
fn test_hours_try_from_f64() {
    assert_eq!(Hours::try_from(1.5).unwrap(), Hours::from_half_hours(3));
    assert_eq!(Hours::try_from(0.0).unwrap(), Hours::ZERO);
    assert!(matches!(
        Hours::try_from(1.25),
        Err(DomainError::InvalidHours { .. })
    ));
    assert!(Hours::try_from(-1.0).is_err());
    assert!(Hours::try_from(f64::NAN).is_err());
    assert!(Hours::try_from(f64::INFINITY).is_err());
}

#[test]
fn test_hours_serializes_as_number() {
    let json: String = serde_json::to_string(&Hours::from_half_hours(5)).unwrap();
    assert_eq!(json, "2.5");

    let parsed: Hours = serde_json::from_str("3").unwrap();
    assert_eq!(parsed, Hours::from_whole_hours(3));

    assert!(serde_json::from_str::<Hours>("0.3").is_err());
}

// ============================================================================
// Time slots and session types
// ============================================================================

#[test]
fn test_time_slot_for_position() {
    assert_eq!(TimeSlot::for_position(0), TimeSlot::Morning);
    assert_eq!(TimeSlot::for_position(1), TimeSlot::Afternoon);
    assert_eq!(TimeSlot::for_position(2), TimeSlot::Evening);
    assert_eq!(TimeSlot::for_position(5), TimeSlot::Evening);
}

#[test]
fn test_time_slot_ordering() {
    assert!(TimeSlot::Morning < TimeSlot::Afternoon);
    assert!(TimeSlot::Afternoon < TimeSlot::Evening);
}

#[test]
fn test_labels_deserialize_from_json() {
    let slot: TimeSlot = serde_json::from_str("\"Morning\"").unwrap();
    assert_eq!(slot, TimeSlot::Morning);
    assert!(serde_json::from_str::<TimeSlot>("\"Night\"").is_err());

    for session_type in [SessionType::Study, SessionType::Review, SessionType::Practice] {
        let json: String = format!("\"{}\"", session_type.as_str());
        let parsed: SessionType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session_type);
    }
    assert!(serde_json::from_str::<SessionType>("\"Lecture\"").is_err());
}
