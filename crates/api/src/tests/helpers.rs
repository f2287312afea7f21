// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{CourseEntry, TimetableRequest};

pub fn create_entry(name: &str, topics: &str, credits: &str, exam_date: &str) -> CourseEntry {
    CourseEntry {
        name: String::from(name),
        topics: String::from(topics),
        credits: Some(String::from(credits)),
        exam_date: Some(String::from(exam_date)),
    }
}

/// Algorithms (4 credits, exam on day 10) and Databases (2 credits).
pub fn create_scenario_entries() -> Vec<CourseEntry> {
    vec![
        create_entry("Algorithms", "Sort, Search, Graphs", "4", "2026-03-10"),
        create_entry("Databases", "SQL, Indexing", "2", ""),
    ]
}

pub fn create_scenario_request() -> TimetableRequest {
    TimetableRequest {
        courses: create_scenario_entries(),
        total_days: Some(14),
        study_days: None,
        start_date: String::from("2026-03-01"),
        hours_per_day: None,
    }
}
