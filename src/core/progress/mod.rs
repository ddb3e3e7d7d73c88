//! Curriculum progress engine: eligibility, grade mutation with cascade, aggregates

pub mod aggregates;
pub mod eligibility;
pub mod engine;
pub mod grades;
pub mod terms;

pub use aggregates::ProgressSummary;
pub use eligibility::{accepts_grade_in_term, CourseStatus, EligibilityResolver};
pub use engine::{CascadeOutcome, CatalogWarning, ProgressEngine};
pub use grades::{parse_grade, GradeState, PASSING_GRADE};
pub use terms::{roman_label, year_layout, year_of_term, YearBlock};
