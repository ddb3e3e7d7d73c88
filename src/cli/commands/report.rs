//! Report command handler
//!
//! Writes a Markdown or HTML progress report for a catalog after replaying the
//! grade edits.

use super::{prepare_engine, resolve_catalog_path};
use crate::args::GradeEdit;
use curriculum_progress::config::Config;
use curriculum_progress::core::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use curriculum_progress::{error, info};
use std::path::{Path, PathBuf};

/// Report command inputs
pub struct ReportRequest<'a> {
    /// Catalog path; `None` uses config `catalog`
    pub catalog: Option<&'a Path>,
    /// Grade edits, applied in order
    pub grades: &'a [GradeEdit],
    /// Courses whose grade is cleared after the edits
    pub clear: &'a [String],
    /// Output format
    pub format: ReportFormat,
    /// Output path; `None` writes `<catalog stem>_progress.<ext>` under config `reports_dir`
    pub output: Option<&'a Path>,
}

/// Run the report command.
///
/// # Errors
/// Returns a printable message if loading, an edit, or writing the report fails
pub fn run(request: &ReportRequest, config: &Config) -> Result<PathBuf, String> {
    let catalog_path = resolve_catalog_path(request.catalog, config)?;
    let engine = prepare_engine(&catalog_path, request.grades, request.clear)?;

    let output_path = match request.output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(&catalog_path, &config.paths.reports_dir, request.format),
    };

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            format!("✗ Failed to create reports directory {}: {e}", parent.display())
        })?;
    }

    let ctx = ReportContext::new(&engine);
    let reporter: Box<dyn ReportGenerator> = match request.format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };

    reporter.generate(&ctx, &output_path).map_err(|e| {
        error!("Report generation failed for {}: {e}", catalog_path.display());
        format!("✗ Failed to write {}: {e}", output_path.display())
    })?;

    info!(
        "{} report written to {}",
        request.format,
        output_path.display()
    );
    Ok(output_path)
}

/// `<reports_dir>/<catalog stem>_progress.<ext>`; the current directory when `reports_dir` is empty
fn default_output_path(catalog_path: &Path, reports_dir: &str, format: ReportFormat) -> PathBuf {
    let stem = catalog_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog");
    let file_name = format!("{stem}_progress.{}", format.extension());

    if reports_dir.is_empty() {
        PathBuf::from(file_name)
    } else {
        Path::new(reports_dir).join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(
            Path::new("data/ici.toml"),
            "/tmp/reports",
            ReportFormat::Html,
        );
        assert_eq!(path, PathBuf::from("/tmp/reports/ici_progress.html"));

        let path = default_output_path(Path::new("ici.csv"), "", ReportFormat::Markdown);
        assert_eq!(path, PathBuf::from("ici_progress.md"));
    }
}
