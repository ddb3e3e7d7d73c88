//! Status command handler
//!
//! Prints the year/term view of a catalog with the current grades, then the
//! weighted average and progress percentage.

use super::{prepare_engine, resolve_catalog_path};
use crate::args::GradeEdit;
use curriculum_progress::config::Config;
use curriculum_progress::core::report::ReportContext;
use std::fmt::Write;
use std::path::Path;

/// Run the status command.
///
/// # Arguments
/// * `catalog` - Catalog path; `None` uses config `catalog`
/// * `grades` - Grade edits, applied in order
/// * `clear` - Courses whose grade is cleared after the edits
/// * `config` - Loaded configuration
///
/// # Errors
/// Returns a printable message if the catalog cannot be loaded or an edit fails
pub fn run(
    catalog: Option<&Path>,
    grades: &[GradeEdit],
    clear: &[String],
    config: &Config,
) -> Result<(), String> {
    let path = resolve_catalog_path(catalog, config)?;
    let engine = prepare_engine(&path, grades, clear)?;
    print!("{}", format_status(&ReportContext::new(&engine)));
    Ok(())
}

/// Render the terminal view
pub fn format_status(ctx: &ReportContext) -> String {
    let mut out = String::new();
    let years = ctx.years();

    let width = years
        .iter()
        .flat_map(|y| &y.terms)
        .flat_map(|t| &t.courses)
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "\n=== {} ===", ctx.title());

    for year in &years {
        let _ = writeln!(out, "\nYear {}", year.year);
        for term in &year.terms {
            let _ = writeln!(out, "  Term {}", term.label);
            if term.courses.is_empty() {
                out.push_str("    (no courses)\n");
            }
            for cell in &term.courses {
                let _ = writeln!(
                    out,
                    "    {:<width$}  {:>3} cr  {:<11}  {}",
                    cell.name,
                    cell.credits,
                    cell.kind.label(),
                    cell.status_text()
                );
            }
        }
    }

    let summary = ctx.summary();
    let _ = writeln!(out);
    let _ = writeln!(out, "Weighted average: {:.2}", summary.weighted_average);
    let _ = writeln!(
        out,
        "Progress: {:.1}% ({}/{} credits, {} courses passed)",
        summary.progress_percent,
        summary.earned_credits,
        summary.total_credits,
        summary.passed_courses
    );
    out
}
