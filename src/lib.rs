//! Shared library for `CurriculumProgress`
//! Contains the progress engine, catalog loading, reports and configuration
//! used by the `currprogress` CLI.

pub mod core;
pub mod logger;

pub use crate::core::config;
pub use crate::core::get_version;
