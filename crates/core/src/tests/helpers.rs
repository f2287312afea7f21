// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use study_plan_domain::{Course, CourseId, Hours, Schedule, Session};
use time::Date;
use time::macros::date;

pub const fn create_test_start_date() -> Date {
    date!(2026 - 03 - 01)
}

pub fn create_test_course(id: &str, credits: u32, topics: &[&str], exam: Option<Date>) -> Course {
    Course::new(
        CourseId::new(id),
        format!("Course {id}"),
        topics.iter().map(|t| (*t).to_string()).collect(),
        Some(credits),
        exam,
    )
}

/// Algorithms (4 credits, exam on day 10) and Databases (2 credits).
pub fn create_scenario_courses() -> Vec<Course> {
    vec![
        Course::new(
            CourseId::new("algo"),
            String::from("Algorithms"),
            vec![
                String::from("Sort"),
                String::from("Search"),
                String::from("Graphs"),
            ],
            Some(4),
            Some(date!(2026 - 03 - 10)),
        ),
        Course::new(
            CourseId::new("db"),
            String::from("Databases"),
            vec![String::from("SQL"), String::from("Indexing")],
            Some(2),
            None,
        ),
    ]
}

pub fn sessions_of<'a>(schedule: &'a Schedule, id: &str) -> Vec<(u32, &'a Session)> {
    let course_id: CourseId = CourseId::new(id);
    schedule
        .sessions_for(&course_id)
        .map(|(day, session)| (day.day_index, session))
        .collect()
}

pub fn placed_hours(schedule: &Schedule, id: &str) -> Hours {
    sessions_of(schedule, id).iter().map(|(_, s)| s.duration).sum()
}
