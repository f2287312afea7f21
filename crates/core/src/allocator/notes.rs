// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day focus summaries.

/// Note for a rest day, naming the course reviewed if any.
pub fn rest_day(reviewed_course: Option<&str>) -> String {
    reviewed_course.map_or_else(
        || String::from("Rest day"),
        |name| format!("Rest day: light review of {name}"),
    )
}

/// Note for a day with exams close, e.g. `Exam prep: Algo exam in 2 days`.
pub fn exam_prep(exams: &[(&str, i64)]) -> String {
    let parts: Vec<String> = exams
        .iter()
        .map(|(name, days)| format!("{name} exam {}", exam_distance(*days)))
        .collect();
    format!("Exam prep: {}", parts.join("; "))
}

/// Note for a regular study day, e.g. `Focus: Algo (Sort, Search); DB (SQL)`.
pub fn focus(entries: &[(&str, &[String])]) -> String {
    let parts: Vec<String> = entries
        .iter()
        .map(|(name, topics)| format!("{name} ({})", topics.join(", ")))
        .collect();
    format!("Focus: {}", parts.join("; "))
}

fn exam_distance(days: i64) -> String {
    match days {
        0 => String::from("today"),
        1 => String::from("tomorrow"),
        n => format!("in {n} days"),
    }
}
