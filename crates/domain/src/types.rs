// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// Credits assigned to a course when the caller does not specify any.
pub const DEFAULT_CREDITS: u32 = 3;

/// Stable identifier of a course within one planning run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

impl CourseId {
    /// Creates a new course identifier.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A duration measured in whole half hours.
///
/// Every duration the planner produces is a multiple of 30 minutes, so the
/// value is stored as an integer count of half hours. Sums are therefore exact
/// and never suffer floating point drift. At the serialization boundary the
/// value is expressed as a number of hours (`1.5`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(into = "f64", try_from = "f64")]
pub struct Hours {
    half_hours: u32,
}

impl Hours {
    /// Zero hours.
    pub const ZERO: Self = Self { half_hours: 0 };

    /// Creates a duration from a count of half hours.
    #[must_use]
    pub const fn from_half_hours(half_hours: u32) -> Self {
        Self { half_hours }
    }

    /// Creates a duration from a count of whole hours.
    #[must_use]
    pub const fn from_whole_hours(hours: u32) -> Self {
        Self {
            half_hours: hours.saturating_mul(2),
        }
    }

    /// Returns the number of half hours.
    #[must_use]
    pub const fn half_hours(self) -> u32 {
        self.half_hours
    }

    /// Returns the duration in hours.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.half_hours) / 2.0
    }

    /// Returns `true` if the duration is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.half_hours == 0
    }

    /// Adds two durations, saturating at the maximum representable value.
    const fn saturating_add(self, other: Self) -> Self {
        Self {
            half_hours: self.half_hours.saturating_add(other.half_hours),
        }
    }

    /// Multiplies the duration by a count, returning `None` on overflow.
    #[must_use]
    pub const fn checked_mul(self, count: u32) -> Option<Self> {
        match self.half_hours.checked_mul(count) {
            Some(half_hours) => Some(Self { half_hours }),
            None => None,
        }
    }
}

impl std::ops::Add for Hours {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.saturating_add(other)
    }
}

impl std::ops::AddAssign for Hours {
    fn add_assign(&mut self, other: Self) {
        *self = self.saturating_add(other);
    }
}

impl std::iter::Sum for Hours {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, h| acc + h)
    }
}

impl From<Hours> for f64 {
    fn from(hours: Hours) -> Self {
        hours.as_f64()
    }
}

impl TryFrom<f64> for Hours {
    type Error = DomainError;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::InvalidHours {
                reason: format!("{value} is not a non-negative number of hours"),
            });
        }

        let doubled: f64 = value * 2.0;
        if doubled.fract() != 0.0 {
            return Err(DomainError::InvalidHours {
                reason: format!("{value} is not a whole number of half hours"),
            });
        }

        if doubled > f64::from(u32::MAX) {
            return Err(DomainError::InvalidHours {
                reason: format!("{value} hours is too large"),
            });
        }

        Ok(Self {
            half_hours: doubled as u32,
        })
    }
}

impl std::fmt::Display for Hours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole: u32 = self.half_hours / 2;
        if self.half_hours % 2 == 1 {
            write!(f, "{whole}.5 hours")
        } else if whole == 1 {
            write!(f, "1 hour")
        } else {
            write!(f, "{whole} hours")
        }
    }
}

/// Part of the day a session is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// First session of the day.
    Morning,
    /// Second session of the day.
    Afternoon,
    /// Third (and any later) session of the day.
    Evening,
}

impl TimeSlot {
    /// Returns the slot for the session at `position` (0-based) within a day.
    ///
    /// Slots cycle Morning, Afternoon, Evening in selection order. Positions
    /// past the third stay in the Evening so the day remains time-ordered.
    #[must_use]
    pub const fn for_position(position: usize) -> Self {
        match position {
            0 => Self::Morning,
            1 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Converts this slot to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
        }
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of work done in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionType {
    /// First pass through new material.
    Study,
    /// Revisiting covered material, including exam preparation.
    Review,
    /// Exercises on covered material.
    Practice,
}

impl SessionType {
    /// Converts this session type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Study => "Study",
            Self::Review => "Review",
            Self::Practice => "Practice",
        }
    }
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A course taking part in one planning run.
///
/// Construction does not validate. Field rules are enforced by
/// `validate_course_fields`, which the course registry runs on every insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// The course identifier, unique within a planning run.
    pub id: CourseId,
    /// Display name.
    pub name: String,
    /// Topics in intended study order.
    pub topics: Vec<String>,
    /// Relative weight of the course.
    pub credits: u32,
    /// Optional exam date.
    pub exam_date: Option<Date>,
}

impl Course {
    /// Creates a new course.
    ///
    /// # Arguments
    ///
    /// * `id` - The course identifier
    /// * `name` - The display name
    /// * `topics` - Topics in study order
    /// * `credits` - Credit count, `None` for the default of 3
    /// * `exam_date` - Optional exam date
    #[must_use]
    pub fn new(
        id: CourseId,
        name: String,
        topics: Vec<String>,
        credits: Option<u32>,
        exam_date: Option<Date>,
    ) -> Self {
        Self {
            id,
            name,
            topics,
            credits: credits.unwrap_or(DEFAULT_CREDITS),
            exam_date,
        }
    }

    /// Returns the number of days from `start` until the exam.
    ///
    /// Negative values mean the exam took place before `start`. Returns
    /// `None` when the course has no exam.
    #[must_use]
    pub fn days_until_exam(&self, start: Date) -> Option<i64> {
        self.exam_date.map(|exam| (exam - start).whole_days())
    }
}
