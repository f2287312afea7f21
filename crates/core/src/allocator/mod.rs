// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The schedule allocator.
//!
//! Planning runs in three steps:
//!
//! 1. Every course is weighted by credits and exam proximity.
//! 2. The window budget (`total_days * hours_per_day`) is apportioned to the
//!    courses in half-hour units.
//! 3. Days are visited once each, in order. Study days take an even share of
//!    the hours still to place, rest days at most one light review, and the
//!    final day places whatever is left.
//!
//! Planning is pure: the same request and configuration always produce the
//! same schedule.

mod calendar;
mod notes;
mod placement;
mod progress;

use crate::config::PlannerConfig;
use crate::error::CoreError;
use crate::request::PlanningRequest;
use calendar::{DayKind, build_calendar, day_dates, exam_day_index};
use placement::DayPlanner;
use study_plan_domain::{
    Course, CourseHours, CourseWeight, DayPlan, Hours, Schedule, apportion_half_hours,
    compute_course_weights, validate_schedule,
};
use time::Date;
use tracing::{debug, info};

/// Produces study schedules with a fixed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Allocator {
    config: PlannerConfig,
}

impl Allocator {
    /// Creates an allocator.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidConfig` if the configuration is invalid.
    pub fn new(config: PlannerConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration used for planning.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans a complete schedule.
    ///
    /// # Arguments
    ///
    /// * `request` - Courses, window length and start date
    ///
    /// # Returns
    ///
    /// A schedule with one day plan per day of the window, in which every
    /// half hour of the window budget is placed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The request has no courses or `total_days` is out of range
    /// - A course is invalid or duplicated
    /// - A day of the window has no representable date
    pub fn plan(&self, request: &PlanningRequest) -> Result<Schedule, CoreError> {
        request.validate()?;

        let courses: &[Course] = &request.courses;
        let total_days: u32 = request.total_days;
        let start_date: Date = request.start_date;
        let dates: Vec<Date> = day_dates(start_date, total_days)?;

        let weights: Vec<CourseWeight> =
            compute_course_weights(courses, start_date, total_days, &self.config.urgency);
        for weight in &weights {
            debug!(
                course_id = %weight.course_id,
                credits = weight.credits,
                multiplier_percent = weight.multiplier_percent,
                weight = weight.weight,
                "Weighted course"
            );
        }

        let total_units: u32 = self
            .config
            .hours_per_day
            .checked_mul(total_days)
            .ok_or_else(|| CoreError::InvalidConfig {
                reason: String::from("window budget overflows"),
            })?
            .half_hours();
        let raw_weights: Vec<u64> = weights.iter().map(|w| w.weight).collect();
        let budgets: Vec<u32> = apportion_half_hours(&raw_weights, total_units);
        for (course, units) in courses.iter().zip(&budgets) {
            debug!(
                course_id = %course.id,
                hours = Hours::from_half_hours(*units).as_f64(),
                "Apportioned hour budget"
            );
        }

        let exam_indices: Vec<Option<i64>> = courses
            .iter()
            .map(|c| exam_day_index(c, start_date))
            .collect();
        let calendar: Vec<DayKind> = build_calendar(
            &exam_indices,
            total_days,
            self.config.rest_day_interval,
            self.config.exam_lookahead_days,
        );

        let mut planner: DayPlanner<'_> =
            DayPlanner::new(&self.config, courses, &exam_indices, &weights, &budgets);
        let mut days: Vec<DayPlan> = Vec::with_capacity(dates.len());

        for (position, (kind, date)) in calendar.iter().zip(&dates).enumerate() {
            let day_index: u32 = u32::try_from(position + 1).unwrap_or(u32::MAX);
            let is_final: bool = day_index == total_days;

            let day: DayPlan = match kind {
                DayKind::Rest => planner.plan_rest_day(day_index, *date),
                DayKind::Study | DayKind::ExamReview => {
                    let target: u32 = if is_final {
                        planner.remaining_total()
                    } else {
                        study_day_target(&planner, &calendar[position..])
                    };
                    debug!(day_index, target_half_hours = target, ?kind, "Planning day");
                    planner.plan_study_day(
                        day_index,
                        *date,
                        *kind == DayKind::ExamReview,
                        target,
                        is_final,
                    )
                }
            };
            days.push(day);
        }

        let course_hour_totals: Vec<CourseHours> = courses
            .iter()
            .zip(&budgets)
            .map(|(course, units)| CourseHours {
                course_id: course.id.clone(),
                hours: Hours::from_half_hours(*units),
            })
            .collect();

        let schedule: Schedule = Schedule {
            total_days,
            start_date,
            hours_per_day: self.config.hours_per_day,
            days,
            course_hour_totals,
        };

        validate_schedule(&schedule, courses)?;

        info!(
            courses = courses.len(),
            total_days,
            total_hours = schedule.total_study_hours().as_f64(),
            "Planned study schedule"
        );

        Ok(schedule)
    }
}

/// Even share of the remaining hours for the first day of `upcoming`.
///
/// Hours a future rest day may use are held back, so the share is spread over
/// study days only.
fn study_day_target(planner: &DayPlanner<'_>, upcoming: &[DayKind]) -> u32 {
    let study_days: u32 = count_days(upcoming, DayKind::is_study);
    let future_rest_days: u32 = count_days(&upcoming[1..], |kind| !kind.is_study());
    let reserve: u32 = planner.rest_day_units().saturating_mul(future_rest_days);
    let pool: u32 = planner.remaining_total().saturating_sub(reserve);
    pool.div_ceil(study_days.max(1))
}

fn count_days(days: &[DayKind], predicate: impl Fn(DayKind) -> bool) -> u32 {
    let count: usize = days.iter().filter(|kind| predicate(**kind)).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Plans a schedule with the default configuration.
///
/// # Errors
///
/// See [`Allocator::plan`].
pub fn plan(request: &PlanningRequest) -> Result<Schedule, CoreError> {
    Allocator::default().plan(request)
}
