//! Time utilities: parsing upstream timestamps, converting them into the
//! reference zone, formatting them for the report.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Parse an upstream timestamp (`2024-03-01T17:05:00Z`) as a UTC instant.
pub fn parse_utc_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTimestamp(raw.to_string()))
}

/// Express a UTC instant in the reference zone. The instant is unchanged,
/// only its wall-clock representation moves.
pub fn to_reference_zone(instant: DateTime<Utc>, zone: Tz) -> DateTime<Tz> {
    instant.with_timezone(&zone)
}

/// Current instant in the reference zone.
pub fn now_in(zone: Tz) -> DateTime<Tz> {
    to_reference_zone(Utc::now(), zone)
}

/// `2024-03-01 09:05:00-08:00`
pub fn format_submitted_at<Z: TimeZone>(dt: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%d %H:%M:%S%:z").to_string()
}

/// `grade_report_2024-03-01_09-05-00.pdf`
pub fn report_filename<Z: TimeZone>(now: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    format!("grade_report_{}.pdf", now.format("%Y-%m-%d_%H-%M-%S"))
}
