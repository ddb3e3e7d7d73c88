//! Core module: curriculum models, catalog loading and the progress engine

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod progress;
pub mod report;

pub use error::ProgressError;

/// Returns the current version of the `CurriculumProgress` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
