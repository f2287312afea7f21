// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Course weighting based on credits and exam proximity.
//!
//! A course's weight is its credit count multiplied by an urgency factor.
//! Factors are integer percentages so weights stay exact.
//!
//! ## Urgency Tiers
//!
//! Tiers are thresholds expressed as a fraction of the planning window. A
//! course whose exam falls within `numerator / denominator` of the window
//! (measured from the start date) gets that tier's multiplier. The first
//! matching tier wins, so tiers are ordered from the most imminent fraction
//! to the least.
//!
//! ## Invariants
//!
//! - The multiplier is a non-increasing step function of days-until-exam
//! - An upcoming exam never weighs less than no exam (100%)
//! - A passed exam weighs no more than no exam

use crate::error::DomainError;
use crate::types::{Course, CourseId};
use serde::{Deserialize, Serialize};
use time::Date;

/// Multiplier applied to courses without an exam, or with an exam beyond
/// every tier.
pub const BASE_MULTIPLIER_PERCENT: u32 = 100;

/// One step of the urgency function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyTier {
    /// Numerator of the window fraction.
    pub numerator: u32,
    /// Denominator of the window fraction.
    pub denominator: u32,
    /// Multiplier in percent applied inside this tier.
    pub multiplier_percent: u32,
}

impl UrgencyTier {
    /// Creates a tier covering `numerator / denominator` of the window.
    #[must_use]
    pub const fn new(numerator: u32, denominator: u32, multiplier_percent: u32) -> Self {
        Self {
            numerator,
            denominator,
            multiplier_percent,
        }
    }

    /// Returns `true` if an exam `days_until` days away falls in this tier.
    fn contains(&self, days_until: u64, total_days: u32) -> bool {
        days_until * u64::from(self.denominator)
            <= u64::from(self.numerator) * u64::from(total_days)
    }

    /// Compares the window fractions of two tiers.
    fn fraction_cmp(&self, other: &Self) -> std::cmp::Ordering {
        (u64::from(self.numerator) * u64::from(other.denominator))
            .cmp(&(u64::from(other.numerator) * u64::from(self.denominator)))
    }
}

/// Step function mapping exam proximity to a weight multiplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyPolicy {
    /// Tiers ordered from the most imminent fraction to the least.
    pub tiers: Vec<UrgencyTier>,
    /// Multiplier in percent for exams dated before the window start.
    pub passed_exam_percent: u32,
}

impl Default for UrgencyPolicy {
    fn default() -> Self {
        Self {
            tiers: vec![UrgencyTier::new(1, 3, 300), UrgencyTier::new(1, 2, 200)],
            passed_exam_percent: 50,
        }
    }
}

impl UrgencyPolicy {
    /// Checks that the policy is a monotonic step function.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidUrgencyPolicy` if:
    /// - A tier has a zero denominator
    /// - A tier multiplier is below 100%
    /// - Tier fractions are not strictly increasing
    /// - Tier multipliers increase from one tier to the next
    /// - The passed-exam multiplier is zero or above 100%
    pub fn validate(&self) -> Result<(), DomainError> {
        for tier in &self.tiers {
            if tier.denominator == 0 {
                return Err(DomainError::InvalidUrgencyPolicy {
                    reason: String::from("Tier denominator cannot be zero"),
                });
            }
            if tier.multiplier_percent < BASE_MULTIPLIER_PERCENT {
                return Err(DomainError::InvalidUrgencyPolicy {
                    reason: format!(
                        "Tier multiplier {}% is below the base of {BASE_MULTIPLIER_PERCENT}%",
                        tier.multiplier_percent
                    ),
                });
            }
        }

        for pair in self.tiers.windows(2) {
            if pair[0].fraction_cmp(&pair[1]) != std::cmp::Ordering::Less {
                return Err(DomainError::InvalidUrgencyPolicy {
                    reason: String::from("Tier fractions must be strictly increasing"),
                });
            }
            if pair[0].multiplier_percent < pair[1].multiplier_percent {
                return Err(DomainError::InvalidUrgencyPolicy {
                    reason: String::from("Tier multipliers must not increase with distance"),
                });
            }
        }

        if self.passed_exam_percent == 0 || self.passed_exam_percent > BASE_MULTIPLIER_PERCENT {
            return Err(DomainError::InvalidUrgencyPolicy {
                reason: format!(
                    "Passed exam multiplier must be between 1% and {BASE_MULTIPLIER_PERCENT}%, got {}%",
                    self.passed_exam_percent
                ),
            });
        }

        Ok(())
    }

    /// Returns the multiplier for an exam `days_until` days after the start.
    ///
    /// # Arguments
    ///
    /// * `days_until` - Days from the window start to the exam, `None` for no exam
    /// * `total_days` - Length of the planning window
    #[must_use]
    pub fn multiplier_percent(&self, days_until: Option<i64>, total_days: u32) -> u32 {
        match days_until {
            None => BASE_MULTIPLIER_PERCENT,
            Some(days) if days < 0 => self.passed_exam_percent,
            Some(days) => {
                let days: u64 = days.unsigned_abs();
                self.tiers
                    .iter()
                    .find(|tier| tier.contains(days, total_days))
                    .map_or(BASE_MULTIPLIER_PERCENT, |tier| tier.multiplier_percent)
            }
        }
    }
}

/// Weight of one course for a planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseWeight {
    /// The course.
    pub course_id: CourseId,
    /// Credits of the course.
    pub credits: u32,
    /// Urgency multiplier applied, in percent.
    pub multiplier_percent: u32,
    /// `credits * multiplier_percent`.
    pub weight: u64,
}

/// Computes the weight of every course, preserving input order.
///
/// # Arguments
///
/// * `courses` - Courses in registry order
/// * `start_date` - Date of day 1
/// * `total_days` - Length of the planning window
/// * `policy` - Urgency policy
#[must_use]
pub fn compute_course_weights(
    courses: &[Course],
    start_date: Date,
    total_days: u32,
    policy: &UrgencyPolicy,
) -> Vec<CourseWeight> {
    courses
        .iter()
        .map(|course| {
            let multiplier_percent: u32 =
                policy.multiplier_percent(course.days_until_exam(start_date), total_days);
            CourseWeight {
                course_id: course.id.clone(),
                credits: course.credits,
                multiplier_percent,
                weight: u64::from(course.credits) * u64::from(multiplier_percent),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn course(id: &str, credits: u32, exam: Option<Date>) -> Course {
        Course::new(
            CourseId::new(id),
            id.to_string(),
            vec![String::from("Intro")],
            Some(credits),
            exam,
        )
    }

    #[test]
    fn test_default_policy_is_valid() {
        assert!(UrgencyPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_no_exam_uses_base_multiplier() {
        let policy: UrgencyPolicy = UrgencyPolicy::default();
        assert_eq!(policy.multiplier_percent(None, 30), 100);
    }

    #[test]
    fn test_passed_exam_uses_passed_multiplier() {
        let policy: UrgencyPolicy = UrgencyPolicy::default();
        assert_eq!(policy.multiplier_percent(Some(-1), 30), 50);
    }

    #[test]
    fn test_tier_boundaries() {
        let policy: UrgencyPolicy = UrgencyPolicy::default();
        // 30-day window: first third is 10 days, first half is 15 days
        assert_eq!(policy.multiplier_percent(Some(0), 30), 300);
        assert_eq!(policy.multiplier_percent(Some(8), 30), 300);
        assert_eq!(policy.multiplier_percent(Some(10), 30), 300);
        assert_eq!(policy.multiplier_percent(Some(11), 30), 200);
        assert_eq!(policy.multiplier_percent(Some(15), 30), 200);
        assert_eq!(policy.multiplier_percent(Some(16), 30), 100);
        assert_eq!(policy.multiplier_percent(Some(400), 30), 100);
    }

    #[test]
    fn test_first_third_gets_top_multiplier() {
        let policy: UrgencyPolicy = UrgencyPolicy::default();
        let top: u32 = policy.tiers[0].multiplier_percent;
        for total_days in [7_u32, 14, 30, 45, 120] {
            for days in 0..=i64::from(total_days) {
                let in_first_third: bool = days * 3 <= i64::from(total_days);
                let multiplier: u32 = policy.multiplier_percent(Some(days), total_days);
                assert_eq!(
                    multiplier == top,
                    in_first_third,
                    "{days} days of {total_days}"
                );
            }
        }
    }

    #[test]
    fn test_multiplier_is_non_increasing() {
        let policy: UrgencyPolicy = UrgencyPolicy::default();
        for total_days in [7, 14, 30, 120] {
            let mut previous: u32 = u32::MAX;
            for days in 0..=i64::from(total_days) * 2 {
                let current: u32 = policy.multiplier_percent(Some(days), total_days);
                assert!(current <= previous);
                assert!(current >= BASE_MULTIPLIER_PERCENT);
                previous = current;
            }
        }
    }

    #[test]
    fn test_rejects_increasing_multipliers() {
        let policy: UrgencyPolicy = UrgencyPolicy {
            tiers: vec![UrgencyTier::new(1, 6, 150), UrgencyTier::new(1, 3, 200)],
            passed_exam_percent: 50,
        };
        assert!(matches!(
            policy.validate(),
            Err(DomainError::InvalidUrgencyPolicy { .. })
        ));
    }

    #[test]
    fn test_rejects_unordered_fractions() {
        let policy: UrgencyPolicy = UrgencyPolicy {
            tiers: vec![UrgencyTier::new(1, 3, 300), UrgencyTier::new(1, 6, 200)],
            passed_exam_percent: 50,
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_rejects_multiplier_below_base() {
        let policy: UrgencyPolicy = UrgencyPolicy {
            tiers: vec![UrgencyTier::new(1, 3, 90)],
            passed_exam_percent: 50,
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_rejects_passed_multiplier_above_base() {
        let policy: UrgencyPolicy = UrgencyPolicy {
            tiers: Vec::new(),
            passed_exam_percent: 120,
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_compute_course_weights() {
        let start: Date = date!(2026 - 03 - 01);
        let courses: Vec<Course> = vec![
            course("algo", 4, Some(date!(2026 - 03 - 10))),
            course("db", 2, None),
            course("ml", 3, Some(date!(2026 - 03 - 02))),
            course("old", 3, Some(date!(2026 - 02 - 01))),
        ];

        let weights: Vec<CourseWeight> =
            compute_course_weights(&courses, start, 14, &UrgencyPolicy::default());

        assert_eq!(weights.len(), 4);
        // 9 days out of 14 is past the first half
        assert_eq!(weights[0].multiplier_percent, 100);
        assert_eq!(weights[0].weight, 400);
        assert_eq!(weights[1].weight, 200);
        // 1 day out of 14 is within the first third
        assert_eq!(weights[2].multiplier_percent, 300);
        assert_eq!(weights[2].weight, 900);
        assert_eq!(weights[3].multiplier_percent, 50);
        assert_eq!(weights[3].weight, 150);
    }
}
