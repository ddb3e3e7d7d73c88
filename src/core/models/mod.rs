//! Data models for `CurriculumProgress`

pub mod catalog;
pub mod course;
pub mod dag;

pub use catalog::Catalog;
pub use course::{Course, CourseKind};
pub use dag::PrerequisiteGraph;
