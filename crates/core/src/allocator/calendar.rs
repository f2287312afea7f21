// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day classification and exam proximity.
//!
//! Day indices are 1-based. An exam on the start date is on day 1.

use study_plan_domain::{Course, DomainError};
use time::{Date, Duration};

/// Role of a day in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// A regular study day.
    Study,
    /// A rest day with at most one light review session.
    Rest,
    /// A rest day suppressed by an upcoming exam.
    ExamReview,
}

impl DayKind {
    /// Returns `true` for days that take a share of the study budget.
    pub const fn is_study(self) -> bool {
        !matches!(self, Self::Rest)
    }
}

/// Returns the day index on which a course's exam falls.
///
/// `None` if the course has no exam or the exam is before the start date.
pub fn exam_day_index(course: &Course, start_date: Date) -> Option<i64> {
    course
        .days_until_exam(start_date)
        .filter(|days| *days >= 0)
        .map(|days| days + 1)
}

/// Days from `day_index` until the exam, `None` once the exam has passed.
pub fn days_to_exam(exam_index: Option<i64>, day_index: u32) -> Option<i64> {
    exam_index
        .map(|exam| exam - i64::from(day_index))
        .filter(|days| *days >= 0)
}

/// Returns `true` if the exam is `lookahead` days away or fewer.
pub fn is_at_risk(exam_index: Option<i64>, day_index: u32, lookahead: u32) -> bool {
    days_to_exam(exam_index, day_index).is_some_and(|days| days <= i64::from(lookahead))
}

/// Classifies every day of the window.
///
/// # Arguments
///
/// * `exam_indices` - Exam day index per course
/// * `total_days` - Length of the window
/// * `rest_day_interval` - Every n-th day rests, `0` for never
/// * `lookahead` - Exam look-ahead in days
pub fn build_calendar(
    exam_indices: &[Option<i64>],
    total_days: u32,
    rest_day_interval: u32,
    lookahead: u32,
) -> Vec<DayKind> {
    (1..=total_days)
        .map(|day_index| {
            // The last day flushes the remaining budget and never rests
            let scheduled_rest: bool = rest_day_interval > 0
                && day_index % rest_day_interval == 0
                && day_index != total_days;
            if !scheduled_rest {
                return DayKind::Study;
            }

            let exam_near: bool = exam_indices
                .iter()
                .any(|exam| is_at_risk(*exam, day_index, lookahead));
            if exam_near {
                DayKind::ExamReview
            } else {
                DayKind::Rest
            }
        })
        .collect()
}

/// Computes the date of every day in the window.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if a date is not
/// representable.
pub fn day_dates(start_date: Date, total_days: u32) -> Result<Vec<Date>, DomainError> {
    (0..total_days)
        .map(|offset| {
            start_date
                .checked_add(Duration::days(i64::from(offset)))
                .ok_or_else(|| DomainError::DateArithmeticOverflow {
                    operation: format!("computing the date {offset} days after {start_date}"),
                })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use study_plan_domain::CourseId;
    use time::macros::date;

    fn course_with_exam(exam: Option<Date>) -> Course {
        Course::new(
            CourseId::new("c"),
            String::from("C"),
            vec![String::from("T")],
            None,
            exam,
        )
    }

    #[test]
    fn test_exam_day_index() {
        let start: Date = date!(2026 - 03 - 01);
        assert_eq!(
            exam_day_index(&course_with_exam(Some(date!(2026 - 03 - 01))), start),
            Some(1)
        );
        assert_eq!(
            exam_day_index(&course_with_exam(Some(date!(2026 - 03 - 10))), start),
            Some(10)
        );
        assert_eq!(
            exam_day_index(&course_with_exam(Some(date!(2026 - 02 - 27))), start),
            None
        );
        assert_eq!(exam_day_index(&course_with_exam(None), start), None);
    }

    #[test]
    fn test_at_risk_window() {
        // Exam on day 10 with a 3 day look-ahead
        assert!(!is_at_risk(Some(10), 6, 3));
        assert!(is_at_risk(Some(10), 7, 3));
        assert!(is_at_risk(Some(10), 10, 3));
        assert!(!is_at_risk(Some(10), 11, 3));
        assert!(!is_at_risk(None, 1, 3));
    }

    #[test]
    fn test_calendar_rest_days() {
        let calendar: Vec<DayKind> = build_calendar(&[None], 21, 7, 3);
        assert_eq!(calendar.len(), 21);
        assert_eq!(calendar[6], DayKind::Rest);
        assert_eq!(calendar[13], DayKind::Rest);
        // Day 21 is the last day
        assert_eq!(calendar[20], DayKind::Study);
        assert_eq!(
            calendar.iter().filter(|k| **k == DayKind::Rest).count(),
            2
        );
    }

    #[test]
    fn test_calendar_suppresses_rest_before_exam() {
        let calendar: Vec<DayKind> = build_calendar(&[None, Some(9)], 14, 7, 3);
        assert_eq!(calendar[6], DayKind::ExamReview);
        assert!(calendar[6].is_study());
    }

    #[test]
    fn test_calendar_without_rest_days() {
        let calendar: Vec<DayKind> = build_calendar(&[None], 30, 0, 3);
        assert!(calendar.iter().all(|k| *k == DayKind::Study));
    }

    #[test]
    fn test_day_dates() {
        let dates: Vec<Date> = day_dates(date!(2026 - 02 - 27), 3).unwrap();
        assert_eq!(
            dates,
            vec![date!(2026 - 02 - 27), date!(2026 - 02 - 28), date!(2026 - 03 - 01)]
        );
    }

    #[test]
    fn test_day_dates_overflow() {
        let result: Result<Vec<Date>, DomainError> = day_dates(Date::MAX, 7);
        assert!(matches!(
            result,
            Err(DomainError::DateArithmeticOverflow { .. })
        ));
    }
}
