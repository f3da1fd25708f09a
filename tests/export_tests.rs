mod common;
use canvas_grade_report::export::layout::{MARGIN, PAGE_HEIGHT};
use canvas_grade_report::export::{CAUGHT_UP, ReportLayout, export_pdf, render_pdf};
use canvas_grade_report::models::{CourseReport, GradingCandidate};
use canvas_grade_report::utils::text::{to_win_ansi, wrap_line};
use common::{fixed_now, temp_out};
use std::fs;

const TOP: f32 = PAGE_HEIGHT - MARGIN;

fn candidate(assignment: &str, student: &str) -> GradingCandidate {
    GradingCandidate {
        assignment_name: assignment.to_string(),
        student_name: student.to_string(),
        submitted_at: fixed_now() - chrono::Duration::days(2),
    }
}

fn contains(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|w| w == needle.as_bytes())
}

#[test]
fn test_caught_up_course_has_single_body_line() {
    let pages = ReportLayout::build(&[CourseReport::new("Intro to X", vec![])]);

    assert_eq!(pages.len(), 1);
    let texts: Vec<_> = pages[0].texts().collect();
    assert_eq!(texts, ["Course ID: Intro to X", CAUGHT_UP]);
    assert_eq!(pages[0].lines[0].y, TOP);
    assert_eq!(pages[0].lines[1].y, TOP - 30.0);
}

#[test]
fn test_candidate_line_format_and_spacing() {
    let report = CourseReport::new("Art", vec![candidate("HW1", "Jane Doe"), candidate("HW2", "Bo")]);
    let pages = ReportLayout::build(&[report]);
    let lines = &pages[0].lines;

    assert!(lines[1].text.starts_with("Assignment Name: HW1, Student Name: Jane Doe, Submitted At: "));
    assert!(!pages[0].texts().any(|t| t == CAUGHT_UP));

    // HW1 wraps onto two 20pt lines, then a 10pt gap before HW2
    assert_eq!(lines[2].text, "04:00:00-08:00");
    let hw2 = lines.iter().find(|l| l.text.contains("HW2")).unwrap();
    assert_eq!(lines[1].y - hw2.y, 50.0);
}

#[test]
fn test_long_entries_are_wrapped_to_eighty_columns() {
    let long_name = "Final Project Report With A Rather Long And Descriptive Title For Grading";
    let report = CourseReport::new("Art", vec![candidate(long_name, "Jane Doe")]);
    let pages = ReportLayout::build(&[report]);

    let body: Vec<_> = pages[0].lines.iter().skip(1).filter(|l| l.text != CAUGHT_UP).collect();
    assert!(body.len() > 1);
    assert!(body.iter().all(|l| l.text.chars().count() <= 80));
    assert!(body.iter().all(|l| l.x == MARGIN));
    assert_eq!(body[0].y - body[1].y, 20.0);
}

#[test]
fn test_many_candidates_spill_onto_new_pages() {
    let candidates = (0..60).map(|i| candidate(&format!("HW{i}"), "Ann")).collect();
    let pages = ReportLayout::build(&[CourseReport::new("Big", candidates)]);

    assert!(pages.len() >= 2);
    for page in &pages {
        assert!(!page.lines.is_empty());
        assert_eq!(page.lines[0].y, TOP);
    }
    let total = pages.iter().flat_map(|p| p.lines.iter()).filter(|l| l.text.contains("Ann")).count();
    assert_eq!(total, 60);
}

#[test]
fn test_single_entry_can_break_mid_way() {
    let huge = "word ".repeat(800);
    let pages = ReportLayout::build(&[CourseReport::new("One", vec![candidate(&huge, "Ann")])]);

    assert!(pages.len() >= 2);
    // the second page continues the same entry, no new header
    assert!(!pages[1].lines[0].text.starts_with("Course ID:"));
    assert_eq!(pages[1].lines[0].y, TOP);
}

#[test]
fn test_courses_are_separated_and_ordered() {
    let pages = ReportLayout::build(&[
        CourseReport::new("First", vec![]),
        CourseReport::new("Second", vec![candidate("HW1", "Ann")]),
    ]);
    let lines = &pages[0].lines;

    assert_eq!(lines[0].text, "Course ID: First");
    assert_eq!(lines[2].text, "Course ID: Second");
    // header 30 + caught-up line 20 + course gap 40
    assert_eq!(lines[0].y - lines[2].y, 90.0);
}

#[test]
fn test_empty_report_still_has_one_page() {
    let pages = ReportLayout::build(&[]);
    assert_eq!(pages.len(), 1);
    assert!(pages[0].lines.is_empty());
}

#[test]
fn test_rendered_pdf_contains_text() {
    let bytes = render_pdf(&[
        CourseReport::new("Intro to X", vec![candidate("HW1", "Jane Doe")]),
        CourseReport::new("History", vec![]),
    ]);

    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains(&bytes, "(Course ID: Intro to X)"));
    assert!(contains(&bytes, "Student Name: Jane Doe"));
    assert!(contains(&bytes, "(Grades are caught up!)"));
    assert!(contains(&bytes, "/Helvetica"));
}

#[test]
fn test_export_writes_file() {
    let out = temp_out("export_writes_file", "pdf");
    export_pdf(&[CourseReport::new("History", vec![])], &out).unwrap();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn test_win_ansi_encoding() {
    assert_eq!(to_win_ansi("José"), vec![b'J', b'o', b's', 0xE9]);
    assert_eq!(to_win_ansi("日本"), b"??".to_vec());
    assert_eq!(to_win_ansi("\u{2019}"), vec![0x92]);
}

#[test]
fn test_wrap_line_keeps_empty_input() {
    assert_eq!(wrap_line("", 80), vec![String::new()]);
    assert_eq!(wrap_line("a b", 80), vec!["a b".to_string()]);
}

#[test]
fn test_wrap_line_never_splits_timestamp() {
    let line = "Assignment Name: HW1, Student Name: Jane Doe, Submitted At: 2024-03-08 04:00:00-08:00";
    let wrapped = wrap_line(line, 80);

    assert_eq!(
        wrapped,
        [
            "Assignment Name: HW1, Student Name: Jane Doe, Submitted At: 2024-03-08",
            "04:00:00-08:00",
        ]
    );
    assert!(wrapped.iter().all(|l| !l.ends_with('-')));
}
