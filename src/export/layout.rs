//! Fixed-layout pagination of course reports.
//!
//! A vertical cursor starts below the top margin and moves down by a fixed
//! step for every drawn line. Once it reaches the bottom margin the page is
//! closed and a fresh one starts at the top again.

use crate::models::CourseReport;
use crate::utils::text::{WRAP_COLUMNS, wrap_line};

/// US Letter, in points.
pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
pub const MARGIN: f32 = 50.0;
pub const FONT_SIZE: f32 = 12.0;

const HEADER_STEP: f32 = 30.0;
const LINE_STEP: f32 = 20.0;
const ENTRY_GAP: f32 = 10.0;
const COURSE_GAP: f32 = 40.0;

pub const CAUGHT_UP: &str = "Grades are caught up!";

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub lines: Vec<PlacedLine>,
}

impl PageLayout {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }
}

pub struct ReportLayout {
    pages: Vec<PageLayout>,
    current: PageLayout,
    cursor: f32,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportLayout {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: PageLayout::default(),
            cursor: Self::top(),
        }
    }

    fn top() -> f32 {
        PAGE_HEIGHT - MARGIN
    }

    /// Lay out all reports and return the finished pages.
    pub fn build(reports: &[CourseReport]) -> Vec<PageLayout> {
        let mut layout = Self::new();
        for report in reports {
            layout.add_course(report);
        }
        layout.finish()
    }

    pub fn add_course(&mut self, report: &CourseReport) {
        self.draw(format!("Course ID: {}", report.course_label));
        self.cursor -= HEADER_STEP;

        for candidate in &report.candidates {
            for line in wrap_line(&candidate.describe(), WRAP_COLUMNS) {
                self.draw(line);
                self.cursor -= LINE_STEP;
                // checked per line so one long entry can span a page break
                self.break_if_needed();
            }
            self.cursor -= ENTRY_GAP;
        }

        if report.is_caught_up() {
            self.draw(CAUGHT_UP.to_string());
            self.cursor -= LINE_STEP;
        }

        self.cursor -= COURSE_GAP;
        self.break_if_needed();
    }

    fn draw(&mut self, text: String) {
        self.current.lines.push(PlacedLine {
            x: MARGIN,
            y: self.cursor,
            text,
        });
    }

    fn break_if_needed(&mut self) {
        if self.cursor <= MARGIN {
            let page = std::mem::take(&mut self.current);
            self.pages.push(page);
            self.cursor = Self::top();
        }
    }

    /// Close the current page. A page left empty by a break right before
    /// the end is dropped, but the document always has at least one page.
    pub fn finish(mut self) -> Vec<PageLayout> {
        if !self.current.lines.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}
