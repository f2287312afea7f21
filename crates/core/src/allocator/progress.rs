// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use study_plan_domain::SessionType;

/// Planning state of one course while days are visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseProgress {
    /// Half hours of the course budget not yet placed.
    pub remaining: u32,
    /// Day index of the most recent session, if any.
    pub last_scheduled: Option<u32>,
    /// Index of the next topic to cover.
    topic_cursor: usize,
    /// Completed passes through the topic list.
    passes: u32,
    /// Sessions placed after the first pass, used to alternate types.
    revisits: u32,
}

impl CourseProgress {
    /// Creates the progress of a course with `budget` half hours.
    pub const fn new(budget: u32) -> Self {
        Self {
            remaining: budget,
            last_scheduled: None,
            topic_cursor: 0,
            passes: 0,
            revisits: 0,
        }
    }

    /// Decides the type of the next session.
    ///
    /// Must be called before `take_topics` for the same session, since the
    /// type depends on the pass the session starts in.
    ///
    /// # Arguments
    ///
    /// * `review` - Force a review session (exam close, or rest day)
    pub const fn next_session_type(&mut self, review: bool) -> SessionType {
        if review {
            return SessionType::Review;
        }
        if self.passes == 0 {
            return SessionType::Study;
        }

        let session_type: SessionType = if self.revisits % 2 == 0 {
            SessionType::Practice
        } else {
            SessionType::Review
        };
        self.revisits += 1;
        session_type
    }

    /// Takes the topics for a session of `units` half hours.
    ///
    /// One topic per started hour, at least one. A session never wraps
    /// around the end of the list, so its topics are always an ordered
    /// subsequence. Reaching the end completes a pass.
    pub fn take_topics(&mut self, topics: &[String], units: u32) -> Vec<String> {
        if topics.is_empty() {
            return Vec::new();
        }

        let wanted: usize = usize::try_from(units.div_ceil(2).max(1)).unwrap_or(usize::MAX);
        let available: usize = topics.len() - self.topic_cursor;
        let count: usize = wanted.min(available);

        let taken: Vec<String> = topics[self.topic_cursor..self.topic_cursor + count].to_vec();
        self.topic_cursor += count;
        if self.topic_cursor == topics.len() {
            self.topic_cursor = 0;
            self.passes += 1;
        }

        taken
    }

    /// Records a placed session of `units` half hours on `day_index`.
    pub const fn record(&mut self, units: u32, day_index: u32) {
        self.remaining = self.remaining.saturating_sub(units);
        self.last_scheduled = Some(day_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn test_one_topic_per_started_hour() {
        let list: Vec<String> = topics(&["A", "B", "C", "D", "E"]);
        let mut progress: CourseProgress = CourseProgress::new(20);
        assert_eq!(progress.take_topics(&list, 1), topics(&["A"]));
        assert_eq!(progress.take_topics(&list, 2), topics(&["B"]));
        assert_eq!(progress.take_topics(&list, 3), topics(&["C", "D"]));
    }

    #[test]
    fn test_session_never_wraps() {
        let list: Vec<String> = topics(&["A", "B", "C"]);
        let mut progress: CourseProgress = CourseProgress::new(20);
        assert_eq!(progress.take_topics(&list, 4), topics(&["A", "B"]));
        assert_eq!(progress.take_topics(&list, 4), topics(&["C"]));
        assert_eq!(progress.take_topics(&list, 2), topics(&["A"]));
    }

    #[test]
    fn test_session_types_follow_passes() {
        let list: Vec<String> = topics(&["A", "B"]);
        let mut progress: CourseProgress = CourseProgress::new(20);

        assert_eq!(progress.next_session_type(false), SessionType::Study);
        progress.take_topics(&list, 2);
        assert_eq!(progress.next_session_type(false), SessionType::Study);
        progress.take_topics(&list, 2);

        // Second pass alternates
        assert_eq!(progress.next_session_type(false), SessionType::Practice);
        progress.take_topics(&list, 2);
        assert_eq!(progress.next_session_type(false), SessionType::Review);
        progress.take_topics(&list, 2);
        assert_eq!(progress.next_session_type(false), SessionType::Practice);
    }

    #[test]
    fn test_forced_review() {
        let mut progress: CourseProgress = CourseProgress::new(4);
        assert_eq!(progress.next_session_type(true), SessionType::Review);
        assert_eq!(progress.next_session_type(false), SessionType::Study);
    }

    #[test]
    fn test_record() {
        let mut progress: CourseProgress = CourseProgress::new(4);
        progress.record(3, 2);
        assert_eq!(progress.remaining, 1);
        assert_eq!(progress.last_scheduled, Some(2));
    }
}
