pub mod candidate;

pub use candidate::{CourseReport, GradingCandidate};
