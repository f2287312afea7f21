// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Placement of sessions into single days.
//!
//! All amounts are half-hour units.

use crate::allocator::calendar::{days_to_exam, is_at_risk};
use crate::allocator::notes;
use crate::allocator::progress::CourseProgress;
use crate::config::PlannerConfig;
use std::cmp::Reverse;
use study_plan_domain::{Course, CourseWeight, DayPlan, Hours, Session, SessionType, TimeSlot};
use time::Date;

/// Mutable state shared by every day of one planning run.
pub struct DayPlanner<'a> {
    courses: &'a [Course],
    exam_indices: &'a [Option<i64>],
    weights: &'a [CourseWeight],
    progress: Vec<CourseProgress>,
    session_cap: u32,
    rest_day_units: u32,
    max_courses_per_day: usize,
    lookahead: u32,
}

impl<'a> DayPlanner<'a> {
    /// Creates a planner for courses with the given budgets.
    ///
    /// `exam_indices`, `weights` and `budgets` are indexed like `courses`.
    pub fn new(
        config: &PlannerConfig,
        courses: &'a [Course],
        exam_indices: &'a [Option<i64>],
        weights: &'a [CourseWeight],
        budgets: &[u32],
    ) -> Self {
        Self {
            courses,
            exam_indices,
            weights,
            progress: budgets.iter().map(|b| CourseProgress::new(*b)).collect(),
            session_cap: config.session_cap.half_hours(),
            rest_day_units: config.rest_day_units(),
            max_courses_per_day: config.max_courses_per_day,
            lookahead: config.exam_lookahead_days,
        }
    }

    /// Half hours not yet placed, across all courses.
    pub fn remaining_total(&self) -> u32 {
        self.progress.iter().map(|p| p.remaining).sum()
    }

    /// Half hours a rest day may consume.
    pub const fn rest_day_units(&self) -> u32 {
        self.rest_day_units
    }

    fn at_risk(&self, index: usize, day_index: u32) -> bool {
        is_at_risk(self.exam_indices[index], day_index, self.lookahead)
    }

    /// Plans a study day.
    ///
    /// # Arguments
    ///
    /// * `day_index` - 1-based day index
    /// * `date` - Date of the day
    /// * `exam_review` - The day replaces a rest day because an exam is close
    /// * `target` - Half hours to place today
    /// * `is_final` - Last day of the window; every remaining unit is placed
    pub fn plan_study_day(
        &mut self,
        day_index: u32,
        date: Date,
        exam_review: bool,
        target: u32,
        is_final: bool,
    ) -> DayPlan {
        let (candidates, featured): (Vec<usize>, usize) =
            self.select_courses(day_index, exam_review);
        let mut chosen: Vec<usize> = candidates[..featured].to_vec();

        // Rule: each featured course gets min(remaining, cap, left)
        let mut left: u32 = target;
        let mut sizes: Vec<u32> = Vec::with_capacity(candidates.len());
        for &index in &chosen {
            let size: u32 = self.progress[index]
                .remaining
                .min(self.session_cap)
                .min(left);
            sizes.push(size);
            left -= size;
        }
        left = self.top_up(&chosen, &mut sizes, 0, left);

        // Rule: featured courses that run dry hand the rest of the target to
        // the next candidates instead of carrying it forward
        for &index in &candidates[featured..] {
            if left == 0 {
                break;
            }
            let size: u32 = self.progress[index]
                .remaining
                .min(self.session_cap)
                .min(left);
            chosen.push(index);
            sizes.push(size);
            left -= size;
        }
        self.top_up(&chosen, &mut sizes, featured, left);

        let mut sessions: Vec<Session> = Vec::with_capacity(chosen.len());
        for (&index, &units) in chosen.iter().zip(&sizes) {
            if units == 0 {
                continue;
            }
            let time_slot: TimeSlot = TimeSlot::for_position(sessions.len());
            sessions.push(self.place_session(index, units, day_index, time_slot, exam_review));
        }

        // Rule: the final day leaves no course with unplaced hours
        if is_final {
            for index in 0..self.courses.len() {
                let units: u32 = self.progress[index].remaining;
                if units > 0 {
                    sessions.push(self.place_session(
                        index,
                        units,
                        day_index,
                        TimeSlot::Evening,
                        false,
                    ));
                }
            }
        }

        let notes: String = self.study_day_notes(&sessions, day_index);
        DayPlan::new(day_index, date, sessions, notes, false)
    }

    /// Plans a rest day with at most one light review session.
    ///
    /// The session goes to the least urgent course that still has hours.
    pub fn plan_rest_day(&mut self, day_index: u32, date: Date) -> DayPlan {
        let pick: Option<usize> = (0..self.courses.len())
            .filter(|&i| self.progress[i].remaining > 0)
            .min_by_key(|&i| self.rest_priority(i));

        let Some(index) = pick else {
            return DayPlan::new(day_index, date, Vec::new(), notes::rest_day(None), true);
        };

        let units: u32 = self.progress[index].remaining.min(self.rest_day_units);
        let session: Session =
            self.place_session(index, units, day_index, TimeSlot::Morning, true);
        let notes: String = notes::rest_day(Some(self.courses[index].name.as_str()));
        DayPlan::new(day_index, date, vec![session], notes, true)
    }

    /// Grows sessions from `first` onwards out of their courses' remaining
    /// budgets until `left` is used up. Returns what is still unplaced.
    fn top_up(&self, chosen: &[usize], sizes: &mut [u32], first: usize, mut left: u32) -> u32 {
        for (&index, size) in chosen.iter().zip(sizes.iter_mut()).skip(first) {
            if left == 0 {
                break;
            }
            let extra: u32 = (self.progress[index].remaining - *size).min(left);
            *size += extra;
            left -= extra;
        }
        left
    }

    /// Orders the study-day candidates and counts the featured ones.
    ///
    /// Featured courses lead the returned list. On an exam-review day only
    /// at-risk courses are featured; the others stay behind them as backfill.
    fn select_courses(&self, day_index: u32, exam_review: bool) -> (Vec<usize>, usize) {
        let mut candidates: Vec<usize> = (0..self.courses.len())
            .filter(|&i| self.progress[i].remaining > 0)
            .collect();
        candidates.sort_by_key(|&i| self.selection_priority(i, day_index));

        let mut featured: usize = candidates.len();
        if exam_review {
            let at_risk: usize = candidates
                .iter()
                .filter(|&&i| self.at_risk(i, day_index))
                .count();
            if at_risk > 0 {
                featured = at_risk;
            }
        }

        (candidates, featured.min(self.max_courses_per_day))
    }

    /// Sort key for study-day selection, smallest first.
    ///
    /// At-risk courses come first (nearest exam first), then the least
    /// recently scheduled, then the larger remaining budget, then registry
    /// order.
    fn selection_priority(
        &self,
        index: usize,
        day_index: u32,
    ) -> (bool, i64, Option<u32>, Reverse<u32>, usize) {
        let at_risk: bool = self.at_risk(index, day_index);
        let exam_distance: i64 = if at_risk {
            days_to_exam(self.exam_indices[index], day_index).unwrap_or(i64::MAX)
        } else {
            i64::MAX
        };
        let progress: &CourseProgress = &self.progress[index];
        (
            !at_risk,
            exam_distance,
            progress.last_scheduled,
            Reverse(progress.remaining),
            index,
        )
    }

    /// Sort key for the rest-day review, least urgent first.
    ///
    /// Lowest multiplier first, then courses without an upcoming exam, then
    /// the farthest exam, then registry order.
    fn rest_priority(&self, index: usize) -> (u32, bool, Reverse<i64>, usize) {
        let exam: Option<i64> = self.exam_indices[index];
        (
            self.weights[index].multiplier_percent,
            exam.is_some(),
            Reverse(exam.unwrap_or(0)),
            index,
        )
    }

    fn place_session(
        &mut self,
        index: usize,
        units: u32,
        day_index: u32,
        time_slot: TimeSlot,
        force_review: bool,
    ) -> Session {
        let review: bool = force_review || self.at_risk(index, day_index);
        let course: &Course = &self.courses[index];
        let progress: &mut CourseProgress = &mut self.progress[index];

        let session_type: SessionType = progress.next_session_type(review);
        let topics: Vec<String> = progress.take_topics(&course.topics, units);
        progress.record(units, day_index);

        Session {
            course_id: course.id.clone(),
            topics,
            duration: Hours::from_half_hours(units),
            time_slot,
            session_type,
        }
    }

    fn study_day_notes(&self, sessions: &[Session], day_index: u32) -> String {
        let mut exams: Vec<(&str, i64)> = Vec::new();
        let mut focus: Vec<(&str, &[String])> = Vec::new();

        for session in sessions {
            let Some(index) = self.courses.iter().position(|c| c.id == session.course_id) else {
                continue;
            };
            let name: &str = &self.courses[index].name;
            let exam_close: Option<i64> = days_to_exam(self.exam_indices[index], day_index)
                .filter(|days| *days <= i64::from(self.lookahead));
            if let Some(days) = exam_close {
                exams.push((name, days));
            }
            focus.push((name, session.topics.as_slice()));
        }

        if exams.is_empty() {
            notes::focus(&focus)
        } else {
            notes::exam_prep(&exams)
        }
    }
}
