//! canvas-grade-report main entrypoint.

use canvas_grade_report::logging::init_logging;
use canvas_grade_report::run;

fn main() {
    init_logging();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
