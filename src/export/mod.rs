// src/export/mod.rs

pub mod layout;
mod pdf;

pub use layout::{CAUGHT_UP, PageLayout, PlacedLine, ReportLayout};

use crate::errors::{AppError, AppResult};
use crate::models::CourseReport;
use crate::ui::messages::{info, success};
use pdf::PdfManager;
use std::fs;
use std::path::Path;

/// Lay out the reports and serialize them. Returns the PDF bytes and the
/// number of pages.
fn render(reports: &[CourseReport]) -> (Vec<u8>, usize) {
    let pages = ReportLayout::build(reports);
    let mut pdf = PdfManager::new();
    pdf.write_pages(&pages);
    (pdf.finish(), pages.len())
}

/// Serialize reports into PDF bytes.
pub fn render_pdf(reports: &[CourseReport]) -> Vec<u8> {
    render(reports).0
}

/// Lay out and write the report to `path`.
pub fn export_pdf(reports: &[CourseReport], path: &Path) -> AppResult<()> {
    info(format!("Writing PDF: {}", path.display()));

    let (bytes, page_count) = render(reports);
    fs::write(path, bytes)
        .map_err(|e| AppError::Export(format!("cannot write {}: {e}", path.display())))?;

    success(format!(
        "PDF export completed: {} ({} page(s))",
        path.display(),
        page_count
    ));
    Ok(())
}
