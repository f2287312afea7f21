// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use study_plan_domain::{Hours, UrgencyPolicy};

/// Largest accepted daily study budget.
pub const MAX_HOURS_PER_DAY: Hours = Hours::from_whole_hours(24);

/// Tunable settings of the allocator.
///
/// The defaults describe a three-hour study day split into sessions of at
/// most two hours, with a light rest day every week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Study hours available per day.
    pub hours_per_day: Hours,
    /// Longest single session on a regular study day.
    pub session_cap: Hours,
    /// Number of courses featured on a study day.
    pub max_courses_per_day: usize,
    /// Every n-th day is a rest day. `0` disables rest days.
    pub rest_day_interval: u32,
    /// Longest review session placed on a rest day.
    pub rest_session_cap: Hours,
    /// An exam this many days ahead (or fewer) puts its course at risk.
    pub exam_lookahead_days: u32,
    /// Exam proximity weighting.
    pub urgency: UrgencyPolicy,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            hours_per_day: Hours::from_whole_hours(3),
            session_cap: Hours::from_whole_hours(2),
            max_courses_per_day: 3,
            rest_day_interval: 7,
            rest_session_cap: Hours::from_whole_hours(1),
            exam_lookahead_days: 3,
            urgency: UrgencyPolicy::default(),
        }
    }
}

impl PlannerConfig {
    /// Returns a copy of this configuration with a different daily budget.
    #[must_use]
    pub fn with_hours_per_day(&self, hours_per_day: Hours) -> Self {
        Self {
            hours_per_day,
            ..self.clone()
        }
    }

    /// Half hours available on a rest day.
    ///
    /// A rest day never offers more than a regular day.
    #[must_use]
    pub fn rest_day_units(&self) -> u32 {
        self.rest_session_cap
            .half_hours()
            .min(self.hours_per_day.half_hours())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if:
    /// - `hours_per_day` is zero or above 24 hours
    /// - `session_cap` or `rest_session_cap` is zero
    /// - `max_courses_per_day` is zero
    /// - `rest_day_interval` is 1 (every day would be a rest day)
    /// - The urgency policy is not a monotonic step function
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.hours_per_day.is_zero() || self.hours_per_day > MAX_HOURS_PER_DAY {
            return Err(CoreError::InvalidConfig {
                reason: format!(
                    "hours per day must be between 0.5 and 24, got {}",
                    self.hours_per_day.as_f64()
                ),
            });
        }

        if self.session_cap.is_zero() {
            return Err(CoreError::InvalidConfig {
                reason: String::from("session cap cannot be zero"),
            });
        }

        if self.rest_session_cap.is_zero() {
            return Err(CoreError::InvalidConfig {
                reason: String::from("rest session cap cannot be zero"),
            });
        }

        if self.max_courses_per_day == 0 {
            return Err(CoreError::InvalidConfig {
                reason: String::from("at least one course must be featured per day"),
            });
        }

        if self.rest_day_interval == 1 {
            return Err(CoreError::InvalidConfig {
                reason: String::from("rest day interval of 1 leaves no study days"),
            });
        }

        self.urgency
            .validate()
            .map_err(|err| CoreError::InvalidConfig {
                reason: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_hours_per_day() {
        let config: PlannerConfig = PlannerConfig::default().with_hours_per_day(Hours::ZERO);
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_rejects_more_than_a_day() {
        let config: PlannerConfig =
            PlannerConfig::default().with_hours_per_day(Hours::from_half_hours(49));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_caps_and_limits() {
        let mut config: PlannerConfig = PlannerConfig::default();
        config.session_cap = Hours::ZERO;
        assert!(config.validate().is_err());

        let mut config: PlannerConfig = PlannerConfig::default();
        config.rest_session_cap = Hours::ZERO;
        assert!(config.validate().is_err());

        let mut config: PlannerConfig = PlannerConfig::default();
        config.max_courses_per_day = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rest_day_interval() {
        let mut config: PlannerConfig = PlannerConfig::default();
        config.rest_day_interval = 1;
        assert!(config.validate().is_err());

        config.rest_day_interval = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rest_day_units_never_exceed_daily_budget() {
        let config: PlannerConfig =
            PlannerConfig::default().with_hours_per_day(Hours::from_half_hours(1));
        assert_eq!(config.rest_day_units(), 1);
        assert_eq!(PlannerConfig::default().rest_day_units(), 2);
    }
}
