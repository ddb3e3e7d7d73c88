//! CLI command handlers for `currprogress`.
//!
//! Each command is implemented in its own submodule. `status` and `report`
//! share the catalog loading and grade replay below.

pub mod config;
pub mod report;
pub mod status;

use crate::args::GradeEdit;
use curriculum_progress::config::Config;
use curriculum_progress::core::loader::load_catalog;
use curriculum_progress::core::progress::ProgressEngine;
use curriculum_progress::{error, verbose};
use std::path::{Path, PathBuf};

/// Catalog path from the command argument, falling back to config `catalog`
///
/// # Errors
/// Returns an error if neither is set
pub fn resolve_catalog_path(arg: Option<&Path>, config: &Config) -> Result<PathBuf, String> {
    match arg {
        Some(path) => Ok(path.to_path_buf()),
        None if !config.paths.catalog.is_empty() => Ok(PathBuf::from(&config.paths.catalog)),
        None => Err(
            "✗ No catalog given and no default set (use `config set catalog <PATH>`)".to_string(),
        ),
    }
}

/// Load the catalog, build the engine, and replay the edits
///
/// Grades are applied in the order given, then clears. Cascade clears are
/// reported on stdout.
///
/// # Errors
/// Returns an error if the catalog cannot be loaded or an edit names an unknown course
pub fn prepare_engine(
    catalog_path: &Path,
    grades: &[GradeEdit],
    clear: &[String],
) -> Result<ProgressEngine, String> {
    let catalog = load_catalog(catalog_path).map_err(|e| {
        error!("Failed to load catalog {}: {e}", catalog_path.display());
        format!("✗ Failed to load {}: {e}", catalog_path.display())
    })?;

    let mut engine = ProgressEngine::new(catalog);

    for edit in grades {
        let outcome = engine
            .set_grade(&edit.course, &edit.value)
            .map_err(|e| format!("✗ {e}"))?;
        verbose!("Set {} = {}", edit.course, edit.value);
        report_cleared(&outcome.cleared);
    }

    for course in clear {
        let outcome = engine.clear_grade(course).map_err(|e| format!("✗ {e}"))?;
        verbose!("Cleared {course}");
        report_cleared(&outcome.cleared);
    }

    Ok(engine)
}

fn report_cleared(cleared: &[String]) {
    for course in cleared {
        println!("✗ Grade for '{course}' cleared: prerequisites not passed");
    }
}
