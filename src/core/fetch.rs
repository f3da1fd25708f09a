//! Walks a course's assignments and collects overdue ungraded submissions.

use crate::canvas::dto::{Assignment, Submission};
use crate::canvas::{CanvasClient, Transport};
use crate::core::filter::overdue_since;
use crate::errors::{AppError, AppResult};
use crate::models::GradingCandidate;
use crate::ui::messages::{error, info, warning};
use chrono::{DateTime, Duration};
use chrono_tz::Tz;
use serde::de::DeserializeOwned;

/// Fetch every page of a collection starting at `first_url`, handing each
/// decoded page to `visit`. With `follow_next == false` only the first page
/// is read.
///
/// Stops at the first failing page; pages visited before it stay visited.
pub fn for_each_page<T, I, F>(
    client: &CanvasClient<T>,
    first_url: String,
    follow_next: bool,
    mut visit: F,
) -> AppResult<usize>
where
    T: Transport,
    I: DeserializeOwned,
    F: FnMut(Vec<I>),
{
    let mut url = Some(first_url);
    let mut pages = 0;

    while let Some(current) = url.take() {
        let response = client.get(&current)?;
        if !response.is_success() {
            return Err(AppError::Status(response.status));
        }

        visit(response.json::<Vec<I>>()?);
        pages += 1;

        if follow_next {
            url = response.next_link().map(|next| client.resolve(&next));
        }
    }

    Ok(pages)
}

fn describe_failure(err: &AppError) -> String {
    match err {
        AppError::Status(code) => code.to_string(),
        other => other.to_string(),
    }
}

pub struct CourseFetcher<'a, T: Transport> {
    client: &'a CanvasClient<T>,
    min_age: Duration,
    paginate_submissions: bool,
}

impl<'a, T: Transport> CourseFetcher<'a, T> {
    pub fn new(client: &'a CanvasClient<T>, min_age: Duration) -> Self {
        Self {
            client,
            min_age,
            paginate_submissions: false,
        }
    }

    /// Follow `rel="next"` on submission listings too. Without it only the
    /// first page of submissions is read for each assignment, so very large
    /// classes can lose entries.
    pub fn paginate_submissions(mut self, enabled: bool) -> Self {
        self.paginate_submissions = enabled;
        self
    }

    /// Ordered grading candidates of one course, evaluated against `now`.
    ///
    /// Upstream failures never escape: a failing assignments page ends the
    /// traversal and whatever was collected so far is returned; a failing
    /// submissions listing only skips that assignment.
    pub fn fetch_candidates(&self, course_id: &str, now: &DateTime<Tz>) -> Vec<GradingCandidate> {
        info(format!("Processing course {course_id}"));
        tracing::info!(course_id, "fetching assignments");

        let mut candidates = Vec::new();
        let outcome = for_each_page(
            self.client,
            self.client.assignments_url(course_id),
            true,
            |assignments: Vec<Assignment>| {
                for assignment in assignments.iter().filter(|a| a.needs_grading()) {
                    self.collect_assignment(course_id, assignment, now, &mut candidates);
                }
            },
        );

        match outcome {
            Ok(pages) => {
                tracing::info!(course_id, pages, found = candidates.len(), "course done")
            }
            Err(e) => {
                error(format!("Error: {}", describe_failure(&e)));
                tracing::warn!(course_id, error = %e, "assignment listing stopped early");
            }
        }

        candidates
    }

    fn collect_assignment(
        &self,
        course_id: &str,
        assignment: &Assignment,
        now: &DateTime<Tz>,
        out: &mut Vec<GradingCandidate>,
    ) {
        let url = self.client.submissions_url(course_id, assignment.id);

        let outcome = for_each_page(
            self.client,
            url,
            self.paginate_submissions,
            |submissions: Vec<Submission>| {
                for submission in &submissions {
                    match overdue_since(submission, now, self.min_age) {
                        Ok(Some(submitted_at)) => out.push(GradingCandidate {
                            assignment_name: assignment.name.clone(),
                            student_name: submission.student_name().to_string(),
                            submitted_at,
                        }),
                        Ok(None) => {}
                        Err(e) => warning(format!(
                            "Skipping submission of {} for '{}': {e}",
                            submission.student_name(),
                            assignment.name
                        )),
                    }
                }
            },
        );

        if let Err(e) = outcome {
            error(format!("Error getting submissions: {}", describe_failure(&e)));
            tracing::warn!(
                course_id,
                assignment_id = assignment.id,
                error = %e,
                "submission listing failed"
            );
        }
    }
}
