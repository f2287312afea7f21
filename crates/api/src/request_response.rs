// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names follow the JSON contract (`camelCase`). Dates travel as
//! `YYYY-MM-DD` strings and durations inside the day list as display strings
//! such as `"1.5 hours"`. Summary figures are plain numbers of hours.

/// A raw course entry as typed into a form.
///
/// Every field is text. Parsing and defaulting happen in
/// [`crate::parse_course_entry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseEntry {
    /// Display name of the course.
    pub name: String,
    /// Comma-separated topics in study order.
    pub topics: String,
    /// Credit count. Blank or unparseable values fall back to 3.
    #[serde(default)]
    pub credits: Option<String>,
    /// Optional exam date (`YYYY-MM-DD`).
    #[serde(default)]
    pub exam_date: Option<String>,
}

/// API request to normalise and validate course entries without planning.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseCoursesRequest {
    /// The raw entries, in form order.
    pub courses: Vec<CourseEntry>,
}

/// A course after parsing and defaulting.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedCourse {
    /// The assigned course identifier.
    pub id: String,
    /// Trimmed display name.
    pub name: String,
    /// Topics with blanks removed.
    pub topics: Vec<String>,
    /// Effective credit count.
    pub credits: u32,
    /// Exam date, if any (`YYYY-MM-DD`).
    pub exam_date: Option<String>,
}

/// API response for course parsing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseCoursesResponse {
    /// The parsed courses, in entry order.
    pub courses: Vec<ParsedCourse>,
}

/// API request to generate a timetable.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableRequest {
    /// The raw course entries.
    pub courses: Vec<CourseEntry>,
    /// Number of days in the planning window.
    #[serde(default)]
    pub total_days: Option<u32>,
    /// Raw study-day form field, read leniently when `totalDays` is absent.
    #[serde(default)]
    pub study_days: Option<String>,
    /// First day of the window (`YYYY-MM-DD`).
    pub start_date: String,
    /// Optional override of the daily study budget, in hours.
    #[serde(default)]
    pub hours_per_day: Option<f64>,
}

/// One session as shown in the timetable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    /// Course display name.
    pub course: String,
    /// Topics covered.
    pub topics: Vec<String>,
    /// Display duration, e.g. `"2 hours"`.
    pub duration: String,
    /// `Morning`, `Afternoon` or `Evening`.
    pub time_slot: String,
    /// `Study`, `Review` or `Practice`.
    #[serde(rename = "type")]
    pub session_type: String,
}

/// One day of the timetable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayInfo {
    /// 1-based day number.
    pub day: u32,
    /// Calendar date (`YYYY-MM-DD`).
    pub date: String,
    /// Sessions in time-slot order.
    pub sessions: Vec<SessionInfo>,
    /// Display total, e.g. `"3 hours"`.
    pub total_hours: String,
    /// Focus summary for the day.
    pub notes: String,
}

/// Hours allocated to one course over the whole window.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseBreakdown {
    /// Course display name.
    pub course: String,
    /// Hours allocated.
    pub hours: f64,
}

/// Window-wide totals.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableSummary {
    /// Total hours across all days.
    pub total_study_hours: f64,
    /// Per-course totals, in entry order.
    pub courses_breakdown: Vec<CourseBreakdown>,
}

/// API response for a generated timetable.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableResponse {
    /// Number of days in the window.
    pub total_days: u32,
    /// The day plans, in day order.
    pub days: Vec<DayInfo>,
    /// Window-wide totals.
    pub summary: TimetableSummary,
}
