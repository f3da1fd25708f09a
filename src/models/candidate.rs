use chrono::DateTime;
use chrono_tz::Tz;

use crate::utils::time::format_submitted_at;

/// A submission that has waited longer than the threshold for a grade.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingCandidate {
    pub assignment_name: String,
    pub student_name: String,
    pub submitted_at: DateTime<Tz>,
}

impl GradingCandidate {
    /// Single descriptive line as it appears in the report, before wrapping.
    pub fn describe(&self) -> String {
        format!(
            "Assignment Name: {}, Student Name: {}, Submitted At: {}",
            self.assignment_name,
            self.student_name,
            format_submitted_at(&self.submitted_at)
        )
    }
}

/// All candidates of one configured course, labelled for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseReport {
    pub course_label: String,
    pub candidates: Vec<GradingCandidate>,
}

impl CourseReport {
    pub fn new(course_label: impl Into<String>, candidates: Vec<GradingCandidate>) -> Self {
        Self {
            course_label: course_label.into(),
            candidates,
        }
    }

    pub fn is_caught_up(&self) -> bool {
        self.candidates.is_empty()
    }
}
