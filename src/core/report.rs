use crate::canvas::{CanvasClient, HttpTransport, Transport};
use crate::config::{Config, ReportSettings};
use crate::core::fetch::CourseFetcher;
use crate::errors::AppResult;
use crate::export::export_pdf;
use crate::models::CourseReport;
use crate::ui::messages::{header, success, warning};
use crate::utils::time::{now_in, report_filename};
use chrono::{DateTime, Local};
use chrono_tz::Tz;
use std::fs;
use std::path::{Path, PathBuf};

/// Course name for the report header. Falls back to the id itself when the
/// lookup fails, so the course still shows up in the document.
pub fn resolve_label<T: Transport>(client: &CanvasClient<T>, course_id: &str) -> String {
    match client.fetch_course(course_id) {
        Ok(course) => course.name,
        Err(e) => {
            warning(format!("Could not resolve name of course {course_id}: {e}"));
            tracing::warn!(course_id, error = %e, "course lookup failed");
            course_id.to_string()
        }
    }
}

/// One report per course id, in the order given.
pub fn build_reports<T: Transport>(
    client: &CanvasClient<T>,
    course_ids: &[String],
    settings: &ReportSettings,
    now: &DateTime<Tz>,
) -> Vec<CourseReport> {
    let fetcher = CourseFetcher::new(client, settings.min_age())
        .paginate_submissions(settings.paginate_submissions);

    course_ids
        .iter()
        .map(|course_id| {
            let label = resolve_label(client, course_id);
            header(&label);
            let candidates = fetcher.fetch_candidates(course_id, now);
            CourseReport::new(label, candidates)
        })
        .collect()
}

/// Where the PDF goes: the explicit path if given, otherwise a timestamped
/// file inside the configured output directory.
pub fn output_path(settings: &ReportSettings, explicit: Option<&Path>, now: DateTime<Local>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => Path::new(&settings.output_dir).join(report_filename(&now)),
    }
}

pub struct ReportLogic;

impl ReportLogic {
    /// Fetch every configured course and write the PDF. Returns its path.
    pub fn generate(cfg: &Config, explicit_output: Option<&Path>) -> AppResult<PathBuf> {
        let zone = cfg.report.reference_zone()?;
        let transport = HttpTransport::new(&cfg.api)?;
        let client = CanvasClient::new(transport, cfg.api.base_url.clone());

        let now = now_in(zone);
        let reports = build_reports(&client, &cfg.api.course_ids, &cfg.report, &now);

        let path = output_path(&cfg.report, explicit_output, Local::now());
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        export_pdf(&reports, &path)?;
        success("Reporting complete.");
        Ok(path)
    }
}
