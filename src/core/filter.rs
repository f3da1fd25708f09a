//! The age filter deciding whether a submission belongs in the report.

use crate::canvas::dto::Submission;
use crate::errors::AppResult;
use crate::utils::time::{parse_utc_timestamp, to_reference_zone};
use chrono::{DateTime, Duration};
use chrono_tz::Tz;

/// True when strictly more than `min_age` separates `submitted` from `now`.
pub fn is_overdue(submitted: &DateTime<Tz>, now: &DateTime<Tz>, min_age: Duration) -> bool {
    now.signed_duration_since(submitted) > min_age
}

/// Submission time in the zone of `now` when the submission is ungraded,
/// was actually submitted, and has waited longer than `min_age`.
///
/// Returns an error only when `submitted_at` is present but unparsable.
pub fn overdue_since(
    submission: &Submission,
    now: &DateTime<Tz>,
    min_age: Duration,
) -> AppResult<Option<DateTime<Tz>>> {
    if submission.graded_at.is_some() {
        return Ok(None);
    }
    let Some(raw) = submission.submitted_at.as_deref() else {
        return Ok(None);
    };

    let submitted = to_reference_zone(parse_utc_timestamp(raw)?, now.timezone());
    Ok(is_overdue(&submitted, now, min_age).then_some(submitted))
}
